//! Frame container holding the undo and redo stacks.

use super::stroke::Stroke;

/// All strokes of the current drawing session.
///
/// `strokes` is the undo stack and doubles as the z-order (first = bottom,
/// last = top). `redo` holds strokes taken off by [`Frame::undo`], most
/// recently undone last.
#[derive(Debug, Clone, Default)]
pub struct Frame {
    strokes: Vec<Stroke>,
    redo: Vec<Stroke>,
}

impl Frame {
    /// Creates a new empty frame with no strokes.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    pub fn redo_stack(&self) -> &[Stroke] {
        &self.redo
    }

    /// Adds a new stroke on top of existing ones.
    pub fn push(&mut self, stroke: Stroke) {
        self.strokes.push(stroke);
    }

    pub fn last(&self) -> Option<&Stroke> {
        self.strokes.last()
    }

    pub fn last_mut(&mut self) -> Option<&mut Stroke> {
        self.strokes.last_mut()
    }

    /// Swaps the topmost stroke for `stroke` and returns the old one.
    ///
    /// Returns `None` (and drops nothing) when the frame is empty.
    pub fn replace_last(&mut self, stroke: Stroke) -> Option<Stroke> {
        let last = self.strokes.last_mut()?;
        Some(std::mem::replace(last, stroke))
    }

    /// Drops any pending redo history.
    pub fn clear_redo(&mut self) {
        self.redo.clear();
    }

    /// Moves the topmost stroke onto the redo stack.
    ///
    /// Returns a reference to the moved stroke, or `None` if nothing was drawn.
    pub fn undo(&mut self) -> Option<&Stroke> {
        let stroke = self.strokes.pop()?;
        self.redo.push(stroke);
        self.redo.last()
    }

    /// Moves the most recently undone stroke back on top of the strokes.
    pub fn redo(&mut self) -> Option<&Stroke> {
        let stroke = self.redo.pop()?;
        self.strokes.push(stroke);
        self.strokes.last()
    }

    /// Removes every stroke and all redo history.
    pub fn clear(&mut self) {
        self.strokes.clear();
        self.redo.clear();
    }
}
