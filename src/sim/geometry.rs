//! Axis-aligned box geometry shared by every entity
//!
//! Positions are top-left corners in canvas pixels, sizes are (width, height).

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned box in canvas space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub pos: Vec2,
    /// Width (x) and height (y), both positive
    pub size: Vec2,
}

impl Rect {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        debug_assert!(size.x > 0.0 && size.y > 0.0, "degenerate box {size:?}");
        Self { pos, size }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    /// Midpoint of the bottom edge
    #[inline]
    pub fn bottom_center(&self) -> Vec2 {
        Vec2::new(self.pos.x + self.size.x / 2.0, self.bottom())
    }

    /// Strict intersection test: boxes that only touch along an edge do not overlap
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.pos.x < other.right()
            && self.right() > other.pos.x
            && self.pos.y < other.bottom()
            && self.bottom() > other.pos.y
    }
}

/// Anything that occupies an axis-aligned box
pub trait Bounds {
    fn bounds(&self) -> Rect;

    fn center(&self) -> Vec2 {
        self.bounds().center()
    }
}

impl Bounds for Rect {
    fn bounds(&self) -> Rect {
        *self
    }
}

/// True if the boxes of `a` and `b` intersect
#[inline]
pub fn overlaps(a: &impl Bounds, b: &impl Bounds) -> bool {
    a.bounds().overlaps(&b.bounds())
}
