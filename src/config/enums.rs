//! Configuration enum types.

use crate::draw::{Color, color::RED};
use log::warn;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Color specification - either a named color or RGB values.
///
/// # Examples
/// ```toml
/// # Named color
/// default_color = "red"
///
/// # Custom RGB color (0-255 per component)
/// default_color = [255, 128, 0]  # Orange
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Named color: red, green, blue, yellow, orange, pink, white, black
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Converts the color specification to a [`Color`] struct.
    ///
    /// Unknown color names default to red with a warning.
    pub fn to_color(&self) -> Color {
        match self {
            ColorSpec::Name(name) => crate::util::name_to_color(name).unwrap_or_else(|| {
                warn!("Unknown color '{}', using red", name);
                RED
            }),
            ColorSpec::Rgb([r, g, b]) => Color::from_rgb8(*r, *g, *b),
        }
    }
}

/// Tool active when a session opens.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum ToolSpec {
    None,
    Freehand,
    Circle,
    Rectangle,
    /// Uses `drawing.polygon_sides`
    Polygon,
}

/// Filter used when resampling the annotation to the photo's resolution.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum ResampleFilter {
    Fast,
    Good,
    Best,
    Nearest,
    Bilinear,
}

impl ResampleFilter {
    pub fn to_cairo(self) -> cairo::Filter {
        match self {
            ResampleFilter::Fast => cairo::Filter::Fast,
            ResampleFilter::Good => cairo::Filter::Good,
            ResampleFilter::Best => cairo::Filter::Best,
            ResampleFilter::Nearest => cairo::Filter::Nearest,
            ResampleFilter::Bilinear => cairo::Filter::Bilinear,
        }
    }
}
