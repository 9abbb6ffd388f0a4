//! Pointer input handling and the drawing engine.
//!
//! This module translates gesture events from the surrounding UI into stroke
//! edits. It holds the active tool and style, and owns the undo/redo history
//! of the current drawing session.

pub mod events;
pub mod state;
pub mod tool;

// Re-export commonly used types at module level
pub use events::{Command, CommandParseError, PointerEvent, parse_script};
pub use state::DrawingSession;
pub use tool::Tool;
