//! Stroke definitions for photo annotations.

use super::color::Color;
use crate::util::{self, Point, Rect};

/// Paint attributes baked into a stroke when it is created.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeStyle {
    /// Stroke color
    pub color: Color,
    /// Line thickness in display pixels
    pub width: f64,
    /// Opacity multiplier applied on top of `color.a` (0.0 - 1.0)
    pub alpha: f64,
}

impl StrokeStyle {
    pub fn new(color: Color, width: f64, alpha: f64) -> Self {
        Self {
            color,
            width,
            alpha,
        }
    }

    /// Alpha actually used when painting: `color.a * alpha`, clamped to 0.0-1.0.
    pub fn paint_alpha(&self) -> f64 {
        (self.color.a * self.alpha).clamp(0.0, 1.0)
    }
}

/// Variant tag of a [`Stroke`], handy for assertions and logging.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StrokeKind {
    FreeHand,
    Circle,
    Rectangle,
    Polygon,
}

/// Represents one drawn shape on top of the photo.
///
/// Only `FreeHand` is ever modified in place (points are appended during the
/// gesture). The other variants are replaced wholesale whenever their geometry
/// changes.
#[derive(Clone, Debug, PartialEq)]
pub enum Stroke {
    /// Freehand drawing - smoothed curve through the traced points
    FreeHand {
        /// Points traced by the pointer, in order
        points: Vec<Point>,
        style: StrokeStyle,
    },
    /// Circle outline; the radius is the distance from `center` to `edge`
    Circle {
        center: Point,
        /// Any point on the circumference
        edge: Point,
        style: StrokeStyle,
    },
    /// Axis-aligned rectangle outline spanning two opposite corners
    Rectangle {
        /// Pointer-down corner
        corner1: Point,
        /// Opposite corner, in any direction from `corner1`
        corner2: Point,
        style: StrokeStyle,
    },
    /// Regular polygon outline
    Polygon {
        /// Pointer-down position the polygon is dragged out from. Drag updates
        /// measure the diameter from here, not from `vertices[0]`, which
        /// moves away from the pointer-down point as soon as the radius grows.
        anchor: Point,
        /// Precomputed vertices, first one pointing up
        vertices: Vec<Point>,
        style: StrokeStyle,
    },
}

impl Stroke {
    /// Starts a freehand stroke at `start`.
    pub fn freehand(start: Point, style: StrokeStyle) -> Self {
        Stroke::FreeHand {
            points: vec![start],
            style,
        }
    }

    pub fn circle(center: Point, edge: Point, style: StrokeStyle) -> Self {
        Stroke::Circle {
            center,
            edge,
            style,
        }
    }

    pub fn rectangle(corner1: Point, corner2: Point, style: StrokeStyle) -> Self {
        Stroke::Rectangle {
            corner1,
            corner2,
            style,
        }
    }

    /// Builds a polygon whose circumscribed circle has the segment
    /// `anchor`-`pointer` as its diameter.
    ///
    /// With `pointer == anchor` every vertex sits on the anchor.
    pub fn polygon(anchor: Point, pointer: Point, sides: u32, style: StrokeStyle) -> Self {
        let radius = util::distance(anchor, pointer) / 2.0;
        let center = util::midpoint(anchor, pointer);
        Stroke::Polygon {
            anchor,
            vertices: util::regular_polygon_vertices(radius, center, sides),
            style,
        }
    }

    pub fn style(&self) -> &StrokeStyle {
        match self {
            Stroke::FreeHand { style, .. }
            | Stroke::Circle { style, .. }
            | Stroke::Rectangle { style, .. }
            | Stroke::Polygon { style, .. } => style,
        }
    }

    pub fn kind(&self) -> StrokeKind {
        match self {
            Stroke::FreeHand { .. } => StrokeKind::FreeHand,
            Stroke::Circle { .. } => StrokeKind::Circle,
            Stroke::Rectangle { .. } => StrokeKind::Rectangle,
            Stroke::Polygon { .. } => StrokeKind::Polygon,
        }
    }

    /// Circle radius, `None` for the other variants.
    pub fn radius(&self) -> Option<f64> {
        match self {
            Stroke::Circle { center, edge, .. } => Some(util::distance(*center, *edge)),
            _ => None,
        }
    }

    /// Returns the axis-aligned bounding box for this stroke, expanded to cover
    /// the line width. Used for dirty region tracking.
    pub fn bounding_box(&self) -> Option<Rect> {
        let width = self.style().width;
        match self {
            Stroke::FreeHand { points, .. } => bounding_box_for_points(points, width),
            Stroke::Circle { center, .. } => {
                let r = self.radius().unwrap_or(0.0);
                bounding_box_for_points(
                    &[
                        Point::new(center.x - r, center.y - r),
                        Point::new(center.x + r, center.y + r),
                    ],
                    width,
                )
            }
            Stroke::Rectangle {
                corner1, corner2, ..
            } => bounding_box_for_points(&[*corner1, *corner2], width),
            Stroke::Polygon { vertices, .. } => bounding_box_for_points(vertices, width),
        }
    }
}

/// Normalizes two opposite corners into `(x, y, width, height)` with
/// non-negative extents.
pub fn normalized_rect(corner1: Point, corner2: Point) -> (f64, f64, f64, f64) {
    let x = corner1.x.min(corner2.x);
    let y = corner1.y.min(corner2.y);
    (
        x,
        y,
        (corner1.x - corner2.x).abs(),
        (corner1.y - corner2.y).abs(),
    )
}

/// Keeps pixel bounds within half the `i32` range so extents never overflow.
fn to_pixel(value: f64) -> i32 {
    const LIMIT: f64 = (i32::MAX / 2) as f64;
    value.clamp(-LIMIT, LIMIT) as i32
}

fn stroke_padding(width: f64) -> f64 {
    (width / 2.0).ceil().max(1.0)
}

pub(crate) fn bounding_box_for_points(points: &[Point], width: f64) -> Option<Rect> {
    let first = points.first()?;
    let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);

    for p in &points[1..] {
        min_x = min_x.min(p.x);
        max_x = max_x.max(p.x);
        min_y = min_y.min(p.y);
        max_y = max_y.max(p.y);
    }

    let padding = stroke_padding(width);
    let min_x = to_pixel((min_x - padding).floor());
    let min_y = to_pixel((min_y - padding).floor());
    let max_x = to_pixel((max_x + padding).ceil());
    let max_y = to_pixel((max_y + padding).ceil());

    // Padding is at least one pixel, so the box always has area.
    Rect::from_min_max(min_x, min_y, max_x, max_y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{RED, WHITE};

    fn style(width: f64) -> StrokeStyle {
        StrokeStyle::new(WHITE, width, 1.0)
    }

    #[test]
    fn circle_radius_is_center_to_edge_distance() {
        let stroke = Stroke::circle(Point::new(10.0, 10.0), Point::new(13.0, 14.0), style(4.0));
        assert_eq!(stroke.kind(), StrokeKind::Circle);
        assert!((stroke.radius().unwrap() - 5.0).abs() < 1e-9);
    }

    #[test]
    fn polygon_uses_anchor_to_pointer_as_diameter() {
        let stroke = Stroke::polygon(Point::new(0.0, 0.0), Point::new(0.0, 10.0), 6, style(2.0));
        let Stroke::Polygon {
            anchor, vertices, ..
        } = stroke
        else {
            panic!("expected polygon");
        };
        assert_eq!(anchor, Point::new(0.0, 0.0));
        assert_eq!(vertices.len(), 6);
        let center = Point::new(0.0, 5.0);
        for v in &vertices {
            assert!((util::distance(center, *v) - 5.0).abs() < 1e-9);
        }
        // Dragging straight down keeps the top vertex on the anchor.
        assert!(util::distance(vertices[0], anchor) < 1e-9);
    }

    #[test]
    fn paint_alpha_combines_color_and_stroke_alpha() {
        let half = StrokeStyle::new(Color::new(1.0, 0.0, 0.0, 0.5), 1.0, 0.5);
        assert!((half.paint_alpha() - 0.25).abs() < 1e-9);
        let over = StrokeStyle::new(RED, 1.0, 3.0);
        assert_eq!(over.paint_alpha(), 1.0);
    }

    #[test]
    fn normalized_rect_handles_any_corner_order() {
        let (x, y, w, h) = normalized_rect(Point::new(20.0, 5.0), Point::new(5.0, 25.0));
        assert_eq!((x, y, w, h), (5.0, 5.0, 15.0, 20.0));
    }

    #[test]
    fn freehand_bounding_box_expands_with_width() {
        let stroke = Stroke::FreeHand {
            points: vec![Point::new(10.0, 20.0), Point::new(30.0, 40.0)],
            style: style(6.0),
        };
        let rect = stroke.bounding_box().expect("freehand should have bounds");
        assert_eq!(rect, Rect::new(7, 17, 26, 26).unwrap());
    }

    #[test]
    fn degenerate_strokes_still_have_area() {
        let dot = Stroke::rectangle(Point::new(4.0, 4.0), Point::new(4.0, 4.0), style(0.5));
        let rect = dot.bounding_box().unwrap();
        assert!(rect.is_valid());
        assert_eq!(rect, Rect::new(3, 3, 2, 2).unwrap());
    }

    #[test]
    fn far_apart_points_clamp_instead_of_overflowing() {
        let stroke = Stroke::FreeHand {
            points: vec![Point::new(-3e9, 0.0), Point::new(3e9, 0.0)],
            style: style(4.0),
        };
        let rect = stroke.bounding_box().unwrap();
        let limit = i32::MAX / 2;
        assert_eq!(rect.x, -limit);
        assert_eq!(rect.width, 2 * limit);
        assert_eq!((rect.y, rect.height), (-2, 4));
    }
}
