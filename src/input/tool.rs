//! Drawing tool selection.

use crate::util::MIN_POLYGON_SIDES;

/// Drawing tool selection.
///
/// The active tool determines what stroke a pointer-down creates. Changing it
/// never touches strokes that already exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    /// Pointer input is ignored
    None,
    /// Smoothed freehand curve following the pointer (default)
    #[default]
    FreeHand,
    /// Circle dragged out from its center
    Circle,
    /// Rectangle dragged from corner to corner
    Rectangle,
    /// Regular polygon dragged across its diameter
    Polygon {
        /// Number of sides (at least 3)
        sides: u32,
    },
}

impl Tool {
    /// Polygon tool with the side count raised to the minimum of 3.
    pub fn polygon(sides: u32) -> Self {
        Tool::Polygon {
            sides: sides.max(MIN_POLYGON_SIDES),
        }
    }

    /// Short lowercase name, as used in scripts and logs.
    pub fn name(&self) -> &'static str {
        match self {
            Tool::None => "none",
            Tool::FreeHand => "freehand",
            Tool::Circle => "circle",
            Tool::Rectangle => "rectangle",
            Tool::Polygon { .. } => "polygon",
        }
    }
}
