//! Vector annotation overlay for photos.
//!
//! A [`DrawingSession`] turns pointer gestures into freehand, circle,
//! rectangle and polygon strokes with undo/redo, and rasterizes them back onto
//! the photo's own pixel dimensions.

pub mod config;
pub mod draw;
pub mod input;
pub mod util;

pub use config::Config;
pub use input::DrawingSession;
