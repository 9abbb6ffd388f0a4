//! Configuration type definitions.

use super::enums::{ColorSpec, ResampleFilter, ToolSpec};
use crate::draw::{RenderSettings, StrokeStyle};
use crate::input::Tool;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Drawing-related settings.
///
/// Controls the style and tool a new session starts with. The UI can change
/// all of these at runtime.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct DrawingConfig {
    /// Default stroke color - either a named color (red, green, blue, yellow, orange, pink, white, black)
    /// or an RGB array like `[255, 0, 0]` for red
    #[serde(default = "default_color")]
    pub default_color: ColorSpec,

    /// Default stroke width in display pixels (valid range: 0.5 - 100.0)
    #[serde(default = "default_width")]
    pub default_width: f64,

    /// Default stroke opacity (valid range: 0.0 - 1.0)
    #[serde(default = "default_alpha")]
    pub default_alpha: f64,

    /// Tool selected when the session opens
    #[serde(default = "default_tool")]
    pub default_tool: ToolSpec,

    /// Side count for the polygon tool (valid range: 3 - 12)
    #[serde(default = "default_polygon_sides")]
    pub polygon_sides: u32,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_color: default_color(),
            default_width: default_width(),
            default_alpha: default_alpha(),
            default_tool: default_tool(),
            polygon_sides: default_polygon_sides(),
        }
    }
}

impl DrawingConfig {
    /// Style applied to strokes until the UI changes it.
    pub fn initial_style(&self) -> StrokeStyle {
        StrokeStyle::new(
            self.default_color.to_color(),
            self.default_width,
            self.default_alpha,
        )
    }

    pub fn initial_tool(&self) -> Tool {
        match self.default_tool {
            ToolSpec::None => Tool::None,
            ToolSpec::Freehand => Tool::FreeHand,
            ToolSpec::Circle => Tool::Circle,
            ToolSpec::Rectangle => Tool::Rectangle,
            ToolSpec::Polygon => Tool::polygon(self.polygon_sides),
        }
    }
}

/// Export rendering settings.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct RenderConfig {
    /// Filter for scaling the annotation to the photo resolution
    #[serde(default = "default_resample_filter")]
    pub resample_filter: ResampleFilter,

    /// Antialias stroke edges
    #[serde(default = "default_antialias")]
    pub antialias: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            resample_filter: default_resample_filter(),
            antialias: default_antialias(),
        }
    }
}

impl RenderConfig {
    pub fn settings(&self) -> RenderSettings {
        RenderSettings {
            filter: self.resample_filter.to_cairo(),
            antialias: if self.antialias {
                cairo::Antialias::Default
            } else {
                cairo::Antialias::None
            },
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_color() -> ColorSpec {
    ColorSpec::Name("red".to_string())
}

fn default_width() -> f64 {
    4.0
}

fn default_alpha() -> f64 {
    1.0
}

fn default_tool() -> ToolSpec {
    ToolSpec::Freehand
}

fn default_polygon_sides() -> u32 {
    5
}

fn default_resample_filter() -> ResampleFilter {
    ResampleFilter::Good
}

fn default_antialias() -> bool {
    true
}
