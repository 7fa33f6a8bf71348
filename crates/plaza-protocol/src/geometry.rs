//! Axis-aligned rectangles and the strict predicates the area engine
//! is built on.
//!
//! Both predicates use strict (`<` / `>`) comparisons throughout. This
//! is a deliberate part of the contract, not an implementation detail:
//! two regions that share an edge are NOT overlapping, and a point that
//! lies exactly on an edge is NOT contained. The area engine relies on
//! this to let conversation areas tile a map edge-to-edge.

use serde::{Deserialize, Serialize};

/// A rectangular region defined by its center point and size.
///
/// Edges lie at `x ± width / 2` and `y ± height / 2`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// X coordinate of the center.
    pub x: f64,
    /// Y coordinate of the center.
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    /// Creates a box from its center and size.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// X coordinate of the left edge.
    pub fn left(&self) -> f64 {
        self.x - self.width / 2.0
    }

    /// X coordinate of the right edge.
    pub fn right(&self) -> f64 {
        self.x + self.width / 2.0
    }

    /// Y coordinate of the bottom edge.
    pub fn bottom(&self) -> f64 {
        self.y - self.height / 2.0
    }

    /// Y coordinate of the top edge.
    pub fn top(&self) -> f64 {
        self.y + self.height / 2.0
    }

    /// Returns `true` if the point lies strictly inside this box.
    ///
    /// Open-interval test on both axes: a point on an edge is outside.
    pub fn contains(&self, px: f64, py: f64) -> bool {
        px > self.left() && px < self.right() && py > self.bottom() && py < self.top()
    }

    /// Returns `true` if this box and `other` overlap.
    ///
    /// Strict separating-axis test: all four inequalities are strict, so
    /// boxes that merely touch along an edge or at a corner do not
    /// overlap.
    pub fn overlaps(&self, other: &BoundingBox) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() > other.bottom()
            && self.bottom() < other.top()
    }
}

// =========================================================================
// Tests
// =========================================================================
