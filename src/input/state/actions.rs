use crate::input::events::{Command, PointerEvent};

use super::DrawingSession;

impl DrawingSession {
    /// Applies one command from the gesture dispatcher.
    ///
    /// Single entry point for UIs and scripts; each command maps onto the
    /// matching engine operation.
    pub fn apply(&mut self, command: &Command) {
        match *command {
            Command::Pointer(PointerEvent::Down(point)) => self.begin_stroke(point),
            Command::Pointer(PointerEvent::Move(point)) => self.continue_stroke(point),
            Command::Pointer(PointerEvent::Up) => self.end_stroke(),
            Command::Undo => self.undo(),
            Command::Redo => self.redo(),
            Command::Clear => self.clear(),
            Command::SetTool(tool) => self.set_tool(tool),
            Command::SetColor(color) => self.set_color(color),
            Command::SetWidth(width) => self.set_width(width),
            Command::SetAlpha(alpha) => self.set_alpha(alpha),
        }
    }

    /// Applies commands in order.
    pub fn apply_all<'a>(&mut self, commands: impl IntoIterator<Item = &'a Command>) {
        for command in commands {
            self.apply(command);
        }
    }
}
