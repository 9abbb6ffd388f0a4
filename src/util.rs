//! Geometry helpers and small value types shared by the drawing engine.
//!
//! This module provides:
//! - [`Point`] and the pure point functions (distance, midpoint)
//! - Regular polygon vertex generation
//! - Smoothed path construction for freehand strokes
//! - [`Rect`] for dirty region tracking
//! - Color name mapping used by the configuration system

use crate::draw::{Color, color::*};
use std::f64::consts::PI;

// ============================================================================
// Points
// ============================================================================

/// A 2D coordinate in display-surface space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Euclidean distance between two points.
pub fn distance(a: Point, b: Point) -> f64 {
    (b.x - a.x).hypot(b.y - a.y)
}

/// Arithmetic mean of two points.
pub fn midpoint(a: Point, b: Point) -> Point {
    Point::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)
}

// ============================================================================
// Regular Polygons
// ============================================================================

/// Smallest side count a regular polygon can have.
pub const MIN_POLYGON_SIDES: u32 = 3;

/// Computes the vertices of a regular polygon.
///
/// The first vertex points straight up from `center` (negative y in screen
/// space) and the rest follow clockwise as seen on screen. A `radius` of 0
/// yields `sides` copies of `center`. Side counts below 3 are raised to 3.
///
/// # Arguments
/// * `radius` - Distance from the center to every vertex
/// * `center` - Polygon center
/// * `sides` - Number of vertices to generate
pub fn regular_polygon_vertices(radius: f64, center: Point, sides: u32) -> Vec<Point> {
    let sides = sides.max(MIN_POLYGON_SIDES);
    let step = 2.0 * PI / sides as f64;

    (0..sides)
        .map(|i| {
            let angle = -PI / 2.0 + step * i as f64;
            Point::new(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            )
        })
        .collect()
}

// ============================================================================
// Paths
// ============================================================================

/// One drawing instruction of a [`Path`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathSegment {
    /// Start a new sub-path at the given point
    MoveTo(Point),
    /// Quadratic Bézier from the current point to `to`
    QuadTo { control: Point, to: Point },
    /// Straight line from the current point
    LineTo(Point),
}

/// Backend-neutral outline built from [`PathSegment`]s.
///
/// Renderers replay the segments onto their own drawing context.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    segments: Vec<PathSegment>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, point: Point) {
        self.segments.push(PathSegment::MoveTo(point));
    }

    pub fn quad_to(&mut self, control: Point, to: Point) {
        self.segments.push(PathSegment::QuadTo { control, to });
    }

    pub fn line_to(&mut self, point: Point) {
        self.segments.push(PathSegment::LineTo(point));
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Returns true when the path holds nothing that could be stroked.
    pub fn is_empty(&self) -> bool {
        self.segments.len() < 2
    }
}

/// Builds a smoothed curve through an ordered point sequence.
///
/// Each raw point acts as the control point of a quadratic segment that ends
/// at the midpoint between it and the next point, so the curve rounds off the
/// corners a plain polyline would have. The path starts at the first point and
/// closes with a straight line to the last one.
///
/// Fewer than two points produce an empty path.
pub fn smooth_path_through(points: &[Point]) -> Path {
    let mut path = Path::new();
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return path;
    };
    if points.len() < 2 {
        return path;
    }

    path.move_to(*first);
    for pair in points.windows(2) {
        path.quad_to(pair[0], midpoint(pair[0], pair[1]));
    }
    path.line_to(*last);
    path
}

// ============================================================================
// Rectangles
// ============================================================================

/// Axis-aligned rectangle helper used for dirty region tracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// Creates a new rectangle. Width/height must be positive.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Option<Self> {
        if width <= 0 || height <= 0 {
            None
        } else {
            Some(Self {
                x,
                y,
                width,
                height,
            })
        }
    }

    /// Builds a rectangle from min/max bounds (inclusive min, exclusive max).
    ///
    /// Returns `None` when the extent does not fit in an `i32`.
    pub fn from_min_max(min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> Option<Self> {
        Self::new(
            min_x,
            min_y,
            max_x.checked_sub(min_x)?,
            max_y.checked_sub(min_y)?,
        )
    }

    /// Returns true if rectangle has a positive area.
    pub fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}

// ============================================================================
// Color Mapping
// ============================================================================

/// Maps color name strings to Color values.
///
/// Used by the configuration system and the command parser.
///
/// # Supported Names (case-insensitive)
/// - "red", "green", "blue", "yellow", "orange", "pink", "white", "black"
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.to_lowercase().as_str() {
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "yellow" => Some(YELLOW),
        "orange" => Some(ORANGE),
        "pink" => Some(PINK),
        "white" => Some(WHITE),
        "black" => Some(BLACK),
        _ => None,
    }
}
