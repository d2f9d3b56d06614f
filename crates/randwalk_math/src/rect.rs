//! Axis-aligned client rectangles

use serde::{Serialize, Deserialize};

use crate::Vec2;

/// An axis-aligned rectangle in screen coordinates
///
/// Mirrors a container's client area: `left`/`top` is the origin of the
/// drawable region, `width`/`height` its extent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// Create a rectangle from origin and size
    #[inline]
    pub const fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self { left, top, width, height }
    }

    /// Rectangle anchored at the origin
    #[inline]
    pub const fn from_size(width: f32, height: f32) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Right edge (`left + width`)
    #[inline]
    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    /// Bottom edge (`top + height`)
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    /// Top-left corner
    #[inline]
    pub fn origin(&self) -> Vec2 {
        Vec2::new(self.left, self.top)
    }

    /// Width and height as a vector
    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// True when the rectangle has no area
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Point containment (inclusive on all edges)
    #[inline]
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.left
            && point.x <= self.right()
            && point.y >= self.top
            && point.y <= self.bottom()
    }

    /// The region a square of side `extent` can occupy while staying inside
    ///
    /// Shrinks the right and bottom edges by `extent`, never past the origin.
    pub fn inset_extent(&self, extent: f32) -> Rect {
        Rect::new(
            self.left,
            self.top,
            (self.width - extent).max(0.0),
            (self.height - extent).max(0.0),
        )
    }

    /// Clamp a point into this rectangle
    #[inline]
    pub fn clamp_point(&self, point: Vec2) -> Vec2 {
        point.clamp_components(
            self.origin(),
            Vec2::new(self.right().max(self.left), self.bottom().max(self.top)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges() {
        let r = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert_eq!(r.right(), 110.0);
        assert_eq!(r.bottom(), 70.0);
        assert_eq!(r.origin(), Vec2::new(10.0, 20.0));
        assert_eq!(r.size(), Vec2::new(100.0, 50.0));
    }

    #[test]
    fn test_contains_inclusive() {
        let r = Rect::from_size(10.0, 10.0);
        assert!(r.contains(Vec2::new(0.0, 0.0)));
        assert!(r.contains(Vec2::new(10.0, 10.0)));
        assert!(!r.contains(Vec2::new(10.1, 5.0)));
        assert!(!r.contains(Vec2::new(5.0, -0.1)));
    }

    #[test]
    fn test_is_empty() {
        assert!(Rect::from_size(0.0, 10.0).is_empty());
        assert!(Rect::from_size(10.0, -1.0).is_empty());
        assert!(!Rect::from_size(1.0, 1.0).is_empty());
    }

    #[test]
    fn test_inset_extent() {
        let r = Rect::new(5.0, 5.0, 100.0, 40.0);
        let inset = r.inset_extent(10.0);
        assert_eq!(inset, Rect::new(5.0, 5.0, 90.0, 30.0));

        // Never shrinks below a point
        let tiny = Rect::from_size(4.0, 4.0).inset_extent(10.0);
        assert_eq!(tiny.width, 0.0);
        assert_eq!(tiny.height, 0.0);
    }

    #[test]
    fn test_clamp_point() {
        let r = Rect::from_size(10.0, 20.0);
        assert_eq!(r.clamp_point(Vec2::new(-5.0, 25.0)), Vec2::new(0.0, 20.0));
        assert_eq!(r.clamp_point(Vec2::new(3.0, 4.0)), Vec2::new(3.0, 4.0));
    }
}
