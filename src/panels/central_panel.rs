use egui::{Color32, Painter, Pos2, Rect, Sense, Shape, Stroke, Vec2};

use crate::PaintApp;
use crate::canvas::ShapePreview;
use crate::input::InputEvent;
use crate::raster;
use crate::tool::Tool;

/// The drawing surface, filling the space below the toolbar
pub fn central_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let available = ui.available_size();
        app.canvas_mut()
            .ensure_surface(available.x.max(1.0) as u32, available.y.max(1.0) as u32);
        let Some([width, height]) = app.canvas().size() else {
            return;
        };

        let (response, painter) =
            ui.allocate_painter(Vec2::new(width as f32, height as f32), Sense::click_and_drag());

        for event in app.input_mut().process_input(ctx, &response) {
            route_event(app, &event);
        }

        if let Some(texture) = app.canvas_texture(ctx) {
            painter.image(
                texture,
                response.rect,
                Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0)),
                Color32::WHITE,
            );
        }

        if let Some(preview) = app.canvas().preview() {
            paint_preview(&painter, response.rect.min, &preview);
            ctx.request_repaint();
        }
    });
}

fn route_event(app: &mut PaintApp, event: &InputEvent) {
    let canvas = app.canvas_mut();
    match event {
        InputEvent::PointerDown { location } => canvas.pointer_down(location.position),
        InputEvent::PointerMove { location } => canvas.pointer_drag(location.position),
        InputEvent::PointerUp { location } => canvas.pointer_up(location.position),
    }
}

/// Draw a pending shape as a vector overlay on top of the surface
fn paint_preview(painter: &Painter, origin: Pos2, preview: &ShapePreview) {
    let stroke = Stroke::new(preview.width, preview.color);
    let start = origin + preview.start.to_vec2();
    let end = origin + preview.end.to_vec2();

    match preview.tool {
        Tool::Line => {
            painter.line_segment([start, end], stroke);
        }
        Tool::Rectangle => {
            painter.rect_stroke(Rect::from_two_pos(start, end), 0.0, stroke);
        }
        Tool::Circle => {
            let (min, size) = preview.bounds();
            let points = raster::ellipse_points(min, size)
                .into_iter()
                .map(|(x, y)| origin + Vec2::new(x as f32, y as f32))
                .collect();
            painter.add(Shape::closed_line(points, stroke));
        }
        Tool::Pencil | Tool::Eraser => {}
    }
}
