//! Axis-aligned rectangle geometry for the paddle, bricks and ball bounds
//!
//! Screen coordinates: origin at the top-left corner, y grows downward.
//! A rectangle is defined by its top-left corner and its size.

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
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    /// Bounding square of a circle
    pub fn around_circle(center: Vec2, radius: f32) -> Self {
        Self {
            pos: center - Vec2::splat(radius),
            size: Vec2::splat(radius * 2.0),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    /// Overlap test; touching edges count as overlap
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() <= other.right()
            && self.right() >= other.left()
            && self.top() <= other.bottom()
            && self.bottom() >= other.top()
    }

    /// Penetration depth along each axis (only meaningful when overlapping)
    pub fn overlap_depth(&self, other: &Rect) -> Vec2 {
        Vec2::new(
            self.right().min(other.right()) - self.left().max(other.left()),
            self.bottom().min(other.bottom()) - self.top().max(other.top()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges() {
        let r = Rect::new(10.0, 50.0, 40.0, 15.0);
        assert_eq!(r.left(), 10.0);
        assert_eq!(r.right(), 50.0);
        assert_eq!(r.top(), 50.0);
        assert_eq!(r.bottom(), 65.0);
        assert_eq!(r.center(), Vec2::new(30.0, 57.5));
    }

    #[test]
    fn test_overlaps() {
        let brick = Rect::new(10.0, 50.0, 40.0, 15.0);
        assert!(brick.overlaps(&Rect::around_circle(Vec2::new(30.0, 67.0), 3.0)));
        // Touching the bottom edge
        assert!(brick.overlaps(&Rect::around_circle(Vec2::new(30.0, 68.0), 3.0)));
        assert!(!brick.overlaps(&Rect::around_circle(Vec2::new(30.0, 69.0), 3.0)));
        assert!(!brick.overlaps(&Rect::around_circle(Vec2::new(60.0, 57.0), 3.0)));
    }

    #[test]
    fn test_overlap_depth() {
        let brick = Rect::new(10.0, 50.0, 40.0, 15.0);
        // Ball poking 2px up into the bottom face, well inside horizontally
        let ball = Rect::around_circle(Vec2::new(30.0, 66.0), 3.0);
        let depth = brick.overlap_depth(&ball);
        assert!((depth.y - 2.0).abs() < 1e-5);
        assert!((depth.x - 6.0).abs() < 1e-5);
    }
}
