use std::path::PathBuf;

use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::canvas::Canvas;
use crate::tool::{BrushSize, Tool};

/// Default number of undo snapshots kept in memory
pub const DEFAULT_HISTORY_LIMIT: usize = 50;

/// User settings that survive restarts.
///
/// The pixels and the undo history are never persisted.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct Settings {
    pub color: Color32,
    pub brush_size: BrushSize,
    pub tool: Tool,
    /// Maximum number of undo snapshots, or `None` for no limit
    pub history_limit: Option<usize>,
    /// Where exported PNGs are written
    pub output_dir: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: Color32::BLACK,
            brush_size: BrushSize::default(),
            tool: Tool::default(),
            history_limit: Some(DEFAULT_HISTORY_LIMIT),
            output_dir: PathBuf::from("."),
        }
    }
}

impl Settings {
    /// Load settings persisted by a previous run, falling back to defaults
    pub fn load(storage: Option<&dyn eframe::Storage>) -> Self {
        storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default()
    }

    /// Build a canvas that starts with these settings
    pub fn new_canvas(&self) -> Canvas {
        let mut canvas = Canvas::new(self.history_limit);
        canvas.set_color(self.color);
        canvas.set_brush_size(self.brush_size);
        canvas.set_tool(self.tool);
        canvas
    }

    /// Pick up the drawing state the user has chosen since startup
    pub fn update_from(&mut self, canvas: &Canvas) {
        self.color = canvas.color();
        self.brush_size = canvas.brush_size();
        self.tool = canvas.tool();
        self.history_limit = canvas.history().limit();
    }
}
