mod actions;
mod core;
mod pointer;
mod render;

pub use core::DrawingSession;
