//! Axis-aligned rectangles and moving bodies
//!
//! Everything in the arena is a rectangle in integer pixel units with the
//! origin at the top-left corner and y growing downward.

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub const fn left(&self) -> i32 {
        self.x
    }

    #[inline]
    pub const fn right(&self) -> i32 {
        self.x + self.width
    }

    #[inline]
    pub const fn top(&self) -> i32 {
        self.y
    }

    #[inline]
    pub const fn bottom(&self) -> i32 {
        self.y + self.height
    }

    #[inline]
    pub fn position(&self) -> IVec2 {
        IVec2::new(self.x, self.y)
    }

    pub fn set_position(&mut self, pos: IVec2) {
        self.x = pos.x;
        self.y = pos.y;
    }

    pub fn translate(&mut self, delta: IVec2) {
        self.x += delta.x;
        self.y += delta.y;
    }

    /// Strict overlap: rectangles that only share an edge do not overlap,
    /// and empty rectangles never overlap anything.
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// True if the corners and size all stay within `-limit..=limit`
    pub fn within(&self, limit: i32) -> bool {
        let fits = |v: i32| (-limit..=limit).contains(&v);
        fits(self.x)
            && fits(self.y)
            && fits(self.width)
            && fits(self.height)
            && self.x.checked_add(self.width).is_some_and(fits)
            && self.y.checked_add(self.height).is_some_and(fits)
    }
}

/// A rectangle that moves by a whole-pixel velocity every tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Body {
    pub rect: Rect,
    /// Displacement per tick
    pub vel: IVec2,
}

impl Body {
    pub fn new(rect: Rect, vel: IVec2) -> Self {
        Self { rect, vel }
    }

    /// Advance the rectangle by one tick of velocity
    pub fn step(&mut self) {
        self.rect.translate(self.vel);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_edges() {
        let r = Rect::new(10, 20, 30, 40);
        assert_eq!(r.right(), 40);
        assert_eq!(r.bottom(), 60);
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Rect::new(0, 0, 10, 10);
        assert!(!a.overlaps(&Rect::new(10, 0, 10, 10)));
        assert!(!a.overlaps(&Rect::new(0, 10, 10, 10)));
        assert!(a.overlaps(&Rect::new(9, 9, 10, 10)));
    }

    #[test]
    fn test_empty_rect_never_overlaps() {
        let a = Rect::new(0, 0, 10, 10);
        assert!(!a.overlaps(&Rect::new(5, 5, 0, 4)));
    }

    #[test]
    fn test_within_limit() {
        assert!(Rect::new(-50, 0, 100, 10).within(100));
        assert!(!Rect::new(95, 0, 10, 10).within(100));
        assert!(!Rect::new(i32::MAX - 5, 0, 10, 10).within(i32::MAX));
    }

    #[test]
    fn test_body_step() {
        let mut body = Body::new(Rect::new(5, 5, 2, 2), IVec2::new(3, -1));
        body.step();
        assert_eq!(body.rect.position(), IVec2::new(8, 4));
    }

    proptest! {
        #[test]
        fn prop_overlap_is_symmetric(
            ax in -50i32..50, ay in -50i32..50, aw in 0i32..30, ah in 0i32..30,
            bx in -50i32..50, by in -50i32..50, bw in 0i32..30, bh in 0i32..30,
        ) {
            let a = Rect::new(ax, ay, aw, ah);
            let b = Rect::new(bx, by, bw, bh);
            prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
        }
    }
}
