//! Axis-aligned rectangle used for entity bounds and overlap tests.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A rectangle is a top-left position plus a size. Position arithmetic is
/// plain `Vec2` algebra: `rect.pos += dir` moves in place, `rect.pos + dir`
/// yields a copy, and `Vec2::ZERO` is a `const` that cannot be mutated.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    /// Right edge x coordinate.
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    /// Bottom edge y coordinate.
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Inclusive axis-aligned overlap test: the projections must overlap as
    /// closed intervals on both axes, so rectangles sharing only an edge or
    /// a corner still intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        let x_overlap = self.right() >= other.pos.x && other.right() >= self.pos.x;
        let y_overlap = self.bottom() >= other.pos.y && other.bottom() >= self.pos.y;
        x_overlap && y_overlap
    }
}
