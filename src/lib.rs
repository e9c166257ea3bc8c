#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod canvas;
pub mod error;
pub mod history;
pub mod input;
pub mod panels;
pub mod raster;
pub mod settings;
pub mod tool;
pub mod util;

pub use app::PaintApp;
pub use canvas::{Canvas, ShapePreview};
pub use error::{CanvasError, CanvasResult};
pub use history::SnapshotHistory;
pub use input::{InputEvent, InputHandler, InputLocation};
pub use settings::Settings;
pub use tool::{BrushSize, Tool};
