use std::path::{Path, PathBuf};

use egui::{Color32, ColorImage, Pos2};
use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};

use crate::error::{CanvasError, CanvasResult};
use crate::history::SnapshotHistory;
use crate::raster::{self, Pixel};
use crate::tool::{BrushSize, Tool};
use crate::util::time::timestamp_millis;

/// Color of a freshly created or cleared surface. The eraser paints with it.
pub const BACKGROUND: Color32 = Color32::WHITE;

/// A pointer press that has not been released yet
#[derive(Debug, Clone, Copy, PartialEq)]
struct Gesture {
    start: Pixel,
    prev: Pixel,
}

/// A shape tool's pending result while the pointer is still held down
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapePreview {
    pub tool: Tool,
    pub start: Pos2,
    pub end: Pos2,
    pub color: Color32,
    pub width: f32,
}

impl ShapePreview {
    /// Top-left corner and extent of the dragged box, as committed on release
    pub fn bounds(&self) -> (Pixel, (i32, i32)) {
        bounding_box(to_pixel(self.start), to_pixel(self.end))
    }
}

/// The raster drawing surface together with its drawing state and history.
///
/// Positions passed to the pointer handlers are in surface pixels, with the
/// origin at the top-left corner of the surface.
#[derive(Debug)]
pub struct Canvas {
    surface: Option<RgbaImage>,
    history: SnapshotHistory<RgbaImage>,
    color: Color32,
    brush_size: BrushSize,
    tool: Tool,
    gesture: Option<Gesture>,
    /// Bumped on every pixel change so the UI knows when to re-upload
    version: u64,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new(None)
    }
}

impl Canvas {
    /// Creates a canvas without a surface. The surface is created by
    /// [`Canvas::ensure_surface`] once the available size is known.
    pub fn new(history_limit: Option<usize>) -> Self {
        Self {
            surface: None,
            history: SnapshotHistory::new(history_limit),
            color: Color32::BLACK,
            brush_size: BrushSize::default(),
            tool: Tool::default(),
            gesture: None,
            version: 0,
        }
    }

    /// Create a white surface of the given size if there is none yet.
    ///
    /// An existing surface is never resized.
    pub fn ensure_surface(&mut self, width: u32, height: u32) {
        if self.surface.is_none() {
            let (width, height) = (width.max(1), height.max(1));
            log::info!("Creating {}x{} canvas surface", width, height);
            self.surface = Some(RgbaImage::from_pixel(width, height, to_rgba(BACKGROUND)));
            self.version += 1;
        }
    }

    pub fn surface(&self) -> Option<&RgbaImage> {
        self.surface.as_ref()
    }

    pub fn size(&self) -> Option<[u32; 2]> {
        self.surface.as_ref().map(|s| [s.width(), s.height()])
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn history(&self) -> &SnapshotHistory<RgbaImage> {
        &self.history
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn set_color(&mut self, color: Color32) {
        self.color = color;
    }

    pub fn brush_size(&self) -> BrushSize {
        self.brush_size
    }

    pub fn set_brush_size(&mut self, size: BrushSize) {
        self.brush_size = size;
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn set_tool(&mut self, tool: Tool) {
        if self.tool != tool {
            log::info!("Tool changed: {} -> {}", self.tool.label(), tool.label());
        }
        self.tool = tool;
    }

    /// Returns true while a pointer press is in progress
    pub fn is_drawing(&self) -> bool {
        self.gesture.is_some()
    }

    /// Start a gesture. Snapshots the surface for undo before anything is drawn.
    pub fn pointer_down(&mut self, pos: Pos2) {
        let pixel = to_pixel(pos);
        self.gesture = Some(Gesture {
            start: pixel,
            prev: pixel,
        });

        let Some(surface) = &self.surface else {
            return;
        };
        self.history.record(surface.clone());

        if self.tool.is_freehand() {
            let color = self.paint_color();
            let width = self.brush_size.width();
            if let Some(surface) = &mut self.surface {
                raster::stamp_disc(surface, pixel, width, color);
                self.version += 1;
            }
        }
    }

    /// Continue a gesture. Freehand tools paint the segment since the last position.
    pub fn pointer_drag(&mut self, pos: Pos2) {
        let pixel = to_pixel(pos);
        let color = self.paint_color();
        let width = self.brush_size.width();
        let Some(gesture) = &mut self.gesture else {
            return;
        };

        if self.tool.is_freehand() && gesture.prev != pixel {
            if let Some(surface) = &mut self.surface {
                raster::draw_segment(surface, gesture.prev, pixel, width, color);
                self.version += 1;
            }
        }
        gesture.prev = pixel;
    }

    /// Finish a gesture. Shape tools commit their shape to the surface.
    pub fn pointer_up(&mut self, pos: Pos2) {
        let Some(gesture) = self.gesture.take() else {
            return;
        };
        if self.tool.is_freehand() {
            return;
        }

        let end = to_pixel(pos);
        let color = self.paint_color();
        let width = self.brush_size.width();
        let Some(surface) = &mut self.surface else {
            return;
        };

        let (min, size) = bounding_box(gesture.start, end);
        match self.tool {
            Tool::Line => raster::draw_segment(surface, gesture.start, end, width, color),
            Tool::Rectangle => raster::draw_rect_outline(surface, min, size, width, color),
            Tool::Circle => raster::draw_ellipse_outline(surface, min, size, width, color),
            Tool::Pencil | Tool::Eraser => {}
        }
        self.version += 1;
    }

    /// The shape that would be committed if the pointer were released now
    pub fn preview(&self) -> Option<ShapePreview> {
        let gesture = self.gesture?;
        if !self.tool.is_shape() {
            return None;
        }
        Some(ShapePreview {
            tool: self.tool,
            start: to_pos(gesture.start),
            end: to_pos(gesture.prev),
            color: self.color,
            width: self.brush_size.width() as f32,
        })
    }

    /// Fill the surface with the background color. Can be undone.
    ///
    /// Ignored while a gesture is in progress.
    pub fn clear(&mut self) {
        if self.gesture.is_some() {
            return;
        }
        let Some(surface) = &mut self.surface else {
            return;
        };
        self.history.record(surface.clone());
        raster::fill(surface, to_rgba(BACKGROUND));
        self.version += 1;
        log::info!("Canvas cleared");
    }

    /// Restore the surface from before the last edit. Returns false if there was
    /// nothing to undo or a gesture is in progress.
    pub fn undo(&mut self) -> bool {
        if self.gesture.is_some() {
            return false;
        }
        let Some(surface) = &mut self.surface else {
            return false;
        };
        let changed = self.history.undo(surface);
        if changed {
            self.version += 1;
        }
        changed
    }

    /// Re-apply the last undone edit. Returns false if there was nothing to
    /// redo or a gesture is in progress.
    pub fn redo(&mut self) -> bool {
        if self.gesture.is_some() {
            return false;
        }
        let Some(surface) = &mut self.surface else {
            return false;
        };
        let changed = self.history.redo(surface);
        if changed {
            self.version += 1;
        }
        changed
    }

    /// Export the surface as an opaque PNG named `drawing_<unix millis>.png` in `dir`.
    ///
    /// Returns the absolute path of the written file.
    pub fn save_png(&self, dir: &Path) -> CanvasResult<PathBuf> {
        let surface = self.surface.as_ref().ok_or(CanvasError::NoSurface)?;
        let rgb = DynamicImage::ImageRgba8(surface.clone()).to_rgb8();

        let path = unused_file_name(dir, timestamp_millis());
        rgb.save_with_format(&path, ImageFormat::Png)?;

        let path = std::path::absolute(&path)?;
        log::info!("Saved as: {}", path.display());
        Ok(path)
    }

    /// The surface as an egui image, ready for texture upload
    pub fn to_color_image(&self) -> Option<ColorImage> {
        self.surface.as_ref().map(|surface| {
            ColorImage::from_rgba_unmultiplied(
                [surface.width() as usize, surface.height() as usize],
                surface.as_raw(),
            )
        })
    }

    fn paint_color(&self) -> Rgba<u8> {
        match self.tool {
            Tool::Eraser => to_rgba(BACKGROUND),
            _ => to_rgba(self.color),
        }
    }
}

fn unused_file_name(dir: &Path, millis: u128) -> PathBuf {
    let mut path = dir.join(format!("drawing_{millis}.png"));
    let mut suffix = 1;
    while path.exists() {
        path = dir.join(format!("drawing_{millis}_{suffix}.png"));
        suffix += 1;
    }
    path
}

/// Top-left corner and extent of the box spanned by two corners
fn bounding_box(a: Pixel, b: Pixel) -> (Pixel, (i32, i32)) {
    let min = (a.0.min(b.0), a.1.min(b.1));
    let size = ((b.0 - a.0).abs(), (b.1 - a.1).abs());
    (min, size)
}

fn to_pixel(pos: Pos2) -> Pixel {
    (pos.x.floor() as i32, pos.y.floor() as i32)
}

fn to_pos(pixel: Pixel) -> Pos2 {
    Pos2::new(pixel.0 as f32, pixel.1 as f32)
}

fn to_rgba(color: Color32) -> Rgba<u8> {
    Rgba(color.to_array())
}
