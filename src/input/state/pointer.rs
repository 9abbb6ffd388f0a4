use crate::draw::Stroke;
use crate::input::tool::Tool;
use crate::util::Point;
use log::debug;

use super::DrawingSession;

impl DrawingSession {
    /// Processes a pointer-down.
    ///
    /// Appends a new stroke of the active tool's kind, seeded at `point`:
    /// a one-point freehand curve, or a zero-sized circle, rectangle or
    /// polygon. Any pending redo history is dropped because it no longer
    /// follows from the current strokes.
    ///
    /// Does nothing while the tool is [`Tool::None`].
    pub fn begin_stroke(&mut self, point: Point) {
        let style = self.style;
        let stroke = match self.tool {
            Tool::None => {
                debug!("Pointer down with no tool selected; ignoring");
                return;
            }
            Tool::FreeHand => Stroke::freehand(point, style),
            Tool::Circle => Stroke::circle(point, point, style),
            Tool::Rectangle => Stroke::rectangle(point, point, style),
            Tool::Polygon { sides } => Stroke::polygon(point, point, sides, style),
        };

        if self.can_redo() {
            debug!(
                "New stroke discards {} redo entries",
                self.frame.redo_stack().len()
            );
            self.frame.clear_redo();
        }

        self.dirty_tracker.mark_stroke(&stroke);
        self.frame.push(stroke);
        self.needs_redraw = true;
    }

    /// Processes a pointer drag.
    ///
    /// Updates the topmost stroke toward `point`:
    /// - freehand: `point` is appended in place
    /// - circle: the edge moves to `point`, the center stays
    /// - rectangle: the second corner moves to `point`
    /// - polygon: rebuilt across the anchor-`point` diameter with its own side count
    ///
    /// Circles, rectangles and polygons are replaced by a new stroke rather
    /// than edited. Every stroke keeps the style it was created with.
    ///
    /// Does nothing when there are no strokes or the tool is [`Tool::None`].
    pub fn continue_stroke(&mut self, point: Point) {
        if self.tool == Tool::None {
            return;
        }
        let Some(last) = self.frame.last_mut() else {
            return;
        };

        let replacement = match last {
            Stroke::FreeHand { points, style } => {
                let from = points.last().copied().unwrap_or(point);
                points.push(point);
                self.dirty_tracker.mark_segment(from, point, style.width);
                self.needs_redraw = true;
                return;
            }
            Stroke::Circle { center, style, .. } => Stroke::circle(*center, point, *style),
            Stroke::Rectangle { corner1, style, .. } => {
                Stroke::rectangle(*corner1, point, *style)
            }
            Stroke::Polygon {
                anchor,
                vertices,
                style,
            } => Stroke::polygon(*anchor, point, vertices.len() as u32, *style),
        };

        if let Some(previous) = self.frame.replace_last(replacement) {
            self.dirty_tracker.mark_stroke(&previous);
        }
        if let Some(current) = self.frame.last() {
            self.dirty_tracker.mark_stroke(current);
        }
        self.needs_redraw = true;
    }

    /// Processes a pointer-up.
    ///
    /// Strokes are live in the list from the moment they begin, so there is
    /// nothing to commit; this only reports the finished stroke.
    pub fn end_stroke(&mut self) {
        if let Some(stroke) = self.frame.last() {
            debug!(
                "Stroke finished: {:?} ({} total)",
                stroke.kind(),
                self.frame.strokes().len()
            );
        }
        self.needs_redraw = true;
    }
}
