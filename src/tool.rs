use serde::{Deserialize, Serialize};

/// The drawing tools offered by the toolbar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Tool {
    /// Freehand strokes in the current color
    #[default]
    Pencil,
    /// Freehand strokes in the background color
    Eraser,
    Line,
    Rectangle,
    /// Ellipse inscribed in the dragged box
    Circle,
}

impl Tool {
    pub const ALL: [Tool; 5] = [
        Tool::Pencil,
        Tool::Eraser,
        Tool::Line,
        Tool::Rectangle,
        Tool::Circle,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Tool::Pencil => "Pencil",
            Tool::Eraser => "Eraser",
            Tool::Line => "Line",
            Tool::Rectangle => "Rectangle",
            Tool::Circle => "Circle",
        }
    }

    /// Returns true for tools that paint continuously while dragging
    pub fn is_freehand(self) -> bool {
        matches!(self, Tool::Pencil | Tool::Eraser)
    }

    /// Returns true for tools that commit a single shape on release
    pub fn is_shape(self) -> bool {
        !self.is_freehand()
    }
}

/// Stroke widths offered by the toolbar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BrushSize {
    #[default]
    Small,
    Medium,
    Large,
}

impl BrushSize {
    pub const ALL: [BrushSize; 3] = [BrushSize::Small, BrushSize::Medium, BrushSize::Large];

    /// Stroke width in pixels
    pub fn width(self) -> u32 {
        match self {
            BrushSize::Small => 2,
            BrushSize::Medium => 6,
            BrushSize::Large => 12,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BrushSize::Small => "Small",
            BrushSize::Medium => "Medium",
            BrushSize::Large => "Large",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brush_widths() {
        assert_eq!(BrushSize::Small.width(), 2);
        assert_eq!(BrushSize::Medium.width(), 6);
        assert_eq!(BrushSize::Large.width(), 12);
    }

    #[test]
    fn test_tool_kinds() {
        let freehand: Vec<Tool> = Tool::ALL.into_iter().filter(|t| t.is_freehand()).collect();
        assert_eq!(freehand, vec![Tool::Pencil, Tool::Eraser]);
        assert!(Tool::Circle.is_shape());
        assert_eq!(Tool::default(), Tool::Pencil);
    }
}
