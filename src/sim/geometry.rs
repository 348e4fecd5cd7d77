//! Axis-aligned geometry shared by every mover
//!
//! Coordinates are screen-style: x grows right, y grows down, and a rectangle
//! is anchored at its top-left corner.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub pos: Vec2,
    /// Width and height
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    pub fn at(pos: Vec2, size: Vec2) -> Self {
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

    /// Radius of the circle through all four corners
    #[inline]
    pub fn circumradius(&self) -> f32 {
        circumradius(self.size)
    }
}

/// Half the diagonal of a `w × h` box
#[inline]
pub fn circumradius(size: Vec2) -> f32 {
    size.x.hypot(size.y) / 2.0
}

/// Strict overlap test: rectangles that only share an edge don't overlap
pub fn rects_overlap(a: &Rect, b: &Rect) -> bool {
    !(a.right() <= b.pos.x
        || a.pos.x >= b.right()
        || a.bottom() <= b.pos.y
        || a.pos.y >= b.bottom())
}

/// True if `rect` overlaps any of `obstacles`
pub fn overlaps_any(rect: &Rect, obstacles: &[Rect]) -> bool {
    obstacles.iter().any(|obs| rects_overlap(rect, obs))
}

/// Euclidean distance between two points
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    (a.x - b.x).hypot(a.y - b.y)
}

/// Fixed world extent, origin at (0, 0)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldBounds {
    pub width: f32,
    pub height: f32,
}

impl WorldBounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// True if `rect` lies entirely inside the world
    pub fn contains(&self, rect: &Rect) -> bool {
        rect.pos.x >= 0.0
            && rect.pos.y >= 0.0
            && rect.right() <= self.width
            && rect.bottom() <= self.height
    }

    /// Clamp a top-left corner so a `size` box stays inside the world.
    ///
    /// If the box is larger than the world the corner is pinned to 0.
    pub fn clamp(&self, pos: Vec2, size: Vec2) -> Vec2 {
        Vec2::new(
            pos.x.min(self.width - size.x).max(0.0),
            pos.y.min(self.height - size.y).max(0.0),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_interior() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert!(rects_overlap(&a, &b));
        assert!(rects_overlap(&b, &a));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let right = Rect::new(10.0, 0.0, 10.0, 10.0);
        let below = Rect::new(0.0, 10.0, 10.0, 10.0);
        let corner = Rect::new(10.0, 10.0, 5.0, 5.0);
        assert!(!rects_overlap(&a, &right));
        assert!(!rects_overlap(&a, &below));
        assert!(!rects_overlap(&a, &corner));
    }

    #[test]
    fn test_overlap_needs_both_axes() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 20.0, 10.0, 10.0);
        assert!(!rects_overlap(&a, &b));
    }

    #[test]
    fn test_clamp_keeps_box_inside() {
        let world = WorldBounds::new(100.0, 50.0);
        let size = Vec2::new(20.0, 20.0);
        assert_eq!(world.clamp(Vec2::new(-5.0, -1.0), size), Vec2::new(0.0, 0.0));
        assert_eq!(world.clamp(Vec2::new(95.0, 45.0), size), Vec2::new(80.0, 30.0));
        assert_eq!(world.clamp(Vec2::new(40.0, 10.0), size), Vec2::new(40.0, 10.0));
    }

    #[test]
    fn test_contains_is_inclusive_of_edges() {
        let world = WorldBounds::new(100.0, 100.0);
        assert!(world.contains(&Rect::new(0.0, 0.0, 100.0, 100.0)));
        assert!(!world.contains(&Rect::new(-0.5, 0.0, 10.0, 10.0)));
        assert!(!world.contains(&Rect::new(91.0, 0.0, 10.0, 10.0)));
    }

    #[test]
    fn test_circumradius() {
        assert!((circumradius(Vec2::new(6.0, 8.0)) - 5.0).abs() < 1e-6);
        assert!((distance(Vec2::ZERO, Vec2::new(3.0, 4.0)) - 5.0).abs() < 1e-6);
    }
}
