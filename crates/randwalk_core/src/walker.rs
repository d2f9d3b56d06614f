//! Individual walker records
//!
//! A [`Walker`] is plain data: where it is, which slot it occupies in its
//! collection, and how far it has travelled. Its visual lives in a
//! [`WalkerContainer`](crate::WalkerContainer).

use randwalk_math::Vec2;
use serde::{Serialize, Deserialize};

/// A single random-walk particle
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Walker {
    /// Position in the collection's walker list
    pub index: usize,
    /// Container-relative position (x = left, y = top)
    pub position: Vec2,
    /// Number of committed moves
    pub moves: u64,
    /// Total distance travelled across committed moves
    pub travelled: f32,
}

impl Walker {
    /// Create a walker at the given slot and position
    pub fn new(index: usize, position: Vec2) -> Self {
        Self {
            index,
            position,
            moves: 0,
            travelled: 0.0,
        }
    }

    /// Distance from the container's left edge
    #[inline]
    pub fn left(&self) -> f32 {
        self.position.x
    }

    /// Distance from the container's top edge
    #[inline]
    pub fn top(&self) -> f32 {
        self.position.y
    }

    /// Set the horizontal coordinate
    #[inline]
    pub fn update_position_x(&mut self, left: f32) {
        self.position.x = left;
    }

    /// Set the vertical coordinate
    #[inline]
    pub fn update_position_y(&mut self, top: f32) {
        self.position.y = top;
    }

    /// Record a completed move from `origin` to the current position
    pub fn commit_move(&mut self, origin: Vec2) {
        self.moves += 1;
        self.travelled += (self.position - origin).length();
    }

    /// True if the walker sits within `threshold` of `other` on both axes
    ///
    /// Both comparisons are strict: walkers exactly one threshold apart
    /// do not collide.
    pub fn is_near(&self, other: &Walker, threshold: f32) -> bool {
        let delta = (self.position - other.position).abs();
        delta.x < threshold && delta.y < threshold
    }
}
