//! Dirty region tracking for live preview layers.
//!
//! Collects axis-aligned rectangles that need repainting between frames.

use super::Stroke;
use super::stroke::bounding_box_for_points;
use crate::util::{Point, Rect};

/// Pending rectangles kept before the tracker gives up and repaints everything.
pub const MAX_DIRTY_REGIONS: usize = 64;

/// Tracks dirty rectangles accumulated between renders.
///
/// Nothing has to drain the tracker: once more than [`MAX_DIRTY_REGIONS`]
/// rectangles pile up it collapses to full damage, so memory stays bounded.
#[derive(Debug, Default)]
pub struct DirtyTracker {
    regions: Vec<Rect>,
    force_full: bool,
}

impl DirtyTracker {
    /// Creates a new, empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the entire surface as dirty. Clears any accumulated rectangles.
    pub fn mark_full(&mut self) {
        self.force_full = true;
        self.regions.clear();
    }

    /// Adds a dirty rectangle if the tracker is not already full.
    pub fn mark_rect(&mut self, rect: Rect) {
        if !rect.is_valid() || self.force_full {
            return;
        }
        if self.regions.len() >= MAX_DIRTY_REGIONS {
            self.mark_full();
            return;
        }
        self.regions.push(rect);
    }

    /// Adds the bounding box for the given stroke, or full damage if none is available.
    pub fn mark_stroke(&mut self, stroke: &Stroke) {
        match stroke.bounding_box() {
            Some(rect) => self.mark_rect(rect),
            None => self.mark_full(),
        }
    }

    /// Adds the area covered by one freshly appended freehand segment.
    pub fn mark_segment(&mut self, from: Point, to: Point, width: f64) {
        match bounding_box_for_points(&[from, to], width) {
            Some(rect) => self.mark_rect(rect),
            None => self.mark_full(),
        }
    }

    /// Returns true when nothing has been marked since the last drain.
    pub fn is_clean(&self) -> bool {
        !self.force_full && self.regions.is_empty()
    }

    /// Drains the dirty regions gathered so far.
    ///
    /// When the full surface is marked, returns a single rectangle covering the
    /// entire surface; otherwise returns accumulated rectangles.
    pub fn take_regions(&mut self, width: i32, height: i32) -> Vec<Rect> {
        if self.force_full {
            self.force_full = false;
            self.regions.clear();
            return Rect::new(0, 0, width, height).into_iter().collect();
        }
        self.regions.drain(..).collect()
    }
}
