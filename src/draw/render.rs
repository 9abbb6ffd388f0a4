//! Cairo-based rendering functions for strokes.

use super::stroke::{Stroke, StrokeStyle, normalized_rect};
use crate::util::{self, Path, PathSegment, Point};

/// Renders all strokes in a collection to a Cairo context.
///
/// Strokes are drawn in the order they appear (first stroke = bottom layer).
///
/// # Errors
/// Returns the first Cairo error hit while stroking.
pub fn render_strokes(ctx: &cairo::Context, strokes: &[Stroke]) -> Result<(), cairo::Error> {
    for stroke in strokes {
        render_stroke(ctx, stroke)?;
    }
    Ok(())
}

/// Renders a single stroke outline to a Cairo context.
///
/// The outline is stroked (never filled) with round caps and joins, using the
/// stroke's own style.
pub fn render_stroke(ctx: &cairo::Context, stroke: &Stroke) -> Result<(), cairo::Error> {
    ctx.new_path();
    match stroke {
        Stroke::FreeHand { points, .. } => {
            let path = util::smooth_path_through(points);
            if path.is_empty() {
                return Ok(());
            }
            append_path(ctx, &path);
        }
        Stroke::Circle { center, .. } => {
            let radius = stroke.radius().unwrap_or(0.0);
            ctx.new_sub_path();
            ctx.arc(center.x, center.y, radius, 0.0, 2.0 * std::f64::consts::PI);
            ctx.close_path();
        }
        Stroke::Rectangle {
            corner1, corner2, ..
        } => {
            let (x, y, w, h) = normalized_rect(*corner1, *corner2);
            ctx.rectangle(x, y, w, h);
        }
        Stroke::Polygon { vertices, .. } => {
            // Repeat the first vertex so the smoothed outline wraps around.
            let mut ring = Vec::with_capacity(vertices.len() + 1);
            ring.extend_from_slice(vertices);
            ring.extend(vertices.first().copied());
            append_path(ctx, &util::smooth_path_through(&ring));
        }
    }

    apply_style(ctx, stroke.style());
    ctx.stroke()
}

fn apply_style(ctx: &cairo::Context, style: &StrokeStyle) {
    let color = style.color;
    ctx.set_source_rgba(color.r, color.g, color.b, style.paint_alpha());
    ctx.set_line_width(style.width);
    ctx.set_line_cap(cairo::LineCap::Round);
    ctx.set_line_join(cairo::LineJoin::Round);
}

/// Replays a [`Path`] onto the context's current path.
///
/// Cairo has no quadratic primitive, so each quadratic segment is raised to the
/// equivalent cubic.
pub fn append_path(ctx: &cairo::Context, path: &Path) {
    let mut current = Point::default();
    for segment in path.segments() {
        match *segment {
            PathSegment::MoveTo(p) => {
                ctx.move_to(p.x, p.y);
                current = p;
            }
            PathSegment::QuadTo { control, to } => {
                let c1 = Point::new(
                    current.x + 2.0 / 3.0 * (control.x - current.x),
                    current.y + 2.0 / 3.0 * (control.y - current.y),
                );
                let c2 = Point::new(
                    to.x + 2.0 / 3.0 * (control.x - to.x),
                    to.y + 2.0 / 3.0 * (control.y - to.y),
                );
                ctx.curve_to(c1.x, c1.y, c2.x, c2.y, to.x, to.y);
                current = to;
            }
            PathSegment::LineTo(p) => {
                ctx.line_to(p.x, p.y);
                current = p;
            }
        }
    }
}
