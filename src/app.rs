use egui::{Key, KeyboardShortcut, Modifiers, TextureHandle, TextureId, TextureOptions};

use crate::canvas::Canvas;
use crate::input::InputHandler;
use crate::panels;
use crate::settings::Settings;

const UNDO: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Z);
const REDO: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Y);
const REDO_SHIFT: KeyboardShortcut =
    KeyboardShortcut::new(Modifiers::COMMAND.plus(Modifiers::SHIFT), Key::Z);
const SAVE: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::S);

pub struct PaintApp {
    settings: Settings,
    canvas: Canvas,
    input: InputHandler,
    /// Uploaded copy of the surface and the canvas version it was made from
    texture: Option<(TextureHandle, u64)>,
    /// Result of the last save, shown in the toolbar
    status: Option<String>,
}

impl Default for PaintApp {
    fn default() -> Self {
        Self::with_settings(Settings::default())
    }
}

impl PaintApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        Self::with_settings(Settings::load(cc.storage))
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            canvas: settings.new_canvas(),
            settings,
            input: InputHandler::new(),
            texture: None,
            status: None,
        }
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut Canvas {
        &mut self.canvas
    }

    pub fn input_mut(&mut self) -> &mut InputHandler {
        &mut self.input
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn undo(&mut self) {
        self.canvas.undo();
    }

    pub fn redo(&mut self) {
        self.canvas.redo();
    }

    pub fn clear(&mut self) {
        self.canvas.clear();
    }

    /// Export the canvas to the configured directory. Failures end up in the status line.
    pub fn save_drawing(&mut self) {
        self.status = Some(match self.canvas.save_png(&self.settings.output_dir) {
            Ok(path) => format!("Saved as: {}", path.display()),
            Err(err) => {
                log::error!("Error saving image: {}", err);
                format!("Error saving image: {}", err)
            }
        });
    }

    /// The surface as a texture, re-uploaded only when the pixels changed
    pub fn canvas_texture(&mut self, ctx: &egui::Context) -> Option<TextureId> {
        let version = self.canvas.version();
        if let Some((handle, uploaded)) = &mut self.texture {
            if *uploaded != version {
                let image = self.canvas.to_color_image()?;
                handle.set(image, TextureOptions::NEAREST);
                *uploaded = version;
            }
        } else {
            let image = self.canvas.to_color_image()?;
            let handle = ctx.load_texture("canvas", image, TextureOptions::NEAREST);
            self.texture = Some((handle, version));
        }
        self.texture.as_ref().map(|(handle, _)| handle.id())
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        // Shift+Z first: the plain undo shortcut would also match it.
        if ctx.input_mut(|i| i.consume_shortcut(&REDO_SHIFT) || i.consume_shortcut(&REDO)) {
            self.redo();
        }
        if ctx.input_mut(|i| i.consume_shortcut(&UNDO)) {
            self.undo();
        }
        if ctx.input_mut(|i| i.consume_shortcut(&SAVE)) {
            self.save_drawing();
        }
    }
}

impl eframe::App for PaintApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        self.settings.update_from(&self.canvas);
        eframe::set_value(storage, eframe::APP_KEY, &self.settings);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_shortcuts(ctx);
        panels::toolbar(self, ctx);
        panels::central_panel(self, ctx);
    }
}
