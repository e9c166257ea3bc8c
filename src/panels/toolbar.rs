use crate::PaintApp;
use crate::tool::{BrushSize, Tool};
use egui::color_picker::{self, Alpha};

/// The row of controls above the canvas
pub fn toolbar(app: &mut PaintApp, ctx: &egui::Context) {
    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal_wrapped(|ui| {
            let mut color = app.canvas().color();
            ui.label("Color:");
            if color_picker::color_edit_button_srgba(ui, &mut color, Alpha::Opaque).changed() {
                app.canvas_mut().set_color(color);
            }

            ui.separator();

            let mut brush_size = app.canvas().brush_size();
            ui.label("Brush:");
            egui::ComboBox::from_id_salt("brush_size")
                .selected_text(brush_size.label())
                .show_ui(ui, |ui| {
                    for size in BrushSize::ALL {
                        ui.selectable_value(&mut brush_size, size, size.label());
                    }
                });
            app.canvas_mut().set_brush_size(brush_size);

            let mut tool = app.canvas().tool();
            ui.label("Tool:");
            egui::ComboBox::from_id_salt("tool")
                .selected_text(tool.label())
                .show_ui(ui, |ui| {
                    for option in Tool::ALL {
                        ui.selectable_value(&mut tool, option, option.label());
                    }
                });
            app.canvas_mut().set_tool(tool);

            ui.separator();

            let idle = !app.canvas().is_drawing();
            let can_undo = idle && app.canvas().history().can_undo();
            let can_redo = idle && app.canvas().history().can_redo();
            if ui.add_enabled(can_undo, egui::Button::new("Undo")).clicked() {
                app.undo();
            }
            if ui.add_enabled(can_redo, egui::Button::new("Redo")).clicked() {
                app.redo();
            }
            if ui.add_enabled(idle, egui::Button::new("Clear")).clicked() {
                app.clear();
            }
            if ui.button("Save").clicked() {
                app.save_drawing();
            }

            if let Some(status) = app.status() {
                ui.separator();
                ui.label(status);
            }
        });
    });
}
