//! Stroke definitions and rendering (Cairo-based).
//!
//! This module defines the core drawing types used for photo annotation:
//! - [`Color`]: RGBA color representation with predefined color constants
//! - [`Stroke`]: The drawable primitives (freehand, circle, rectangle, polygon)
//! - [`Frame`]: Container for the stroke list and redo history
//! - Rendering and rasterization to the photo's resolution

pub mod color;
pub mod dirty;
pub mod frame;
pub mod raster;
pub mod render;
pub mod stroke;

// Re-export commonly used types at module level
pub use color::Color;
pub use dirty::DirtyTracker;
pub use frame::Frame;
pub use raster::{
    DisplaySize, ImageError, RasterImage, RenderError, RenderSettings, RenderSnapshot, SourceImage,
};
pub use render::{render_stroke, render_strokes};
pub use stroke::{Stroke, StrokeKind, StrokeStyle};
