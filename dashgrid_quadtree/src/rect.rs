// Copyright 2025 the Dashgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Integer grid rectangle and its intersection helpers.

/// Axis-aligned rectangle in integer grid-cell coordinates.
///
/// `x`/`y` address the top-left cell; `width`/`height` count cells. A rect
/// with `width >= 1 && height >= 1` covers at least one cell. Values are
/// immutable: moving or resizing produces a new `Rect`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rect {
    /// Left edge (column of the first covered cell).
    pub x: i32,
    /// Top edge (row of the first covered cell).
    pub y: i32,
    /// Width in cells.
    pub width: i32,
    /// Height in cells.
    pub height: i32,
}

impl Rect {
    /// Create a rectangle from its top-left origin and size.
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Exclusive right edge: `x + width`.
    pub const fn right(&self) -> i32 {
        self.x + self.width
    }

    /// Exclusive bottom edge: `y + height`.
    pub const fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Covered area in cells, widened to `i64`.
    pub const fn area(&self) -> i64 {
        self.width as i64 * self.height as i64
    }

    /// True when the rect covers no cell (`width < 1 || height < 1`).
    pub const fn is_degenerate(&self) -> bool {
        self.width < 1 || self.height < 1
    }

    /// Strict intersection test: rects that share only an edge or a corner
    /// (zero-area overlap) do NOT intersect.
    pub const fn intersects(&self, other: &Self) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    /// The positive-area intersection of two rects, or `None` when they only
    /// touch or are disjoint.
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        if !self.intersects(other) {
            return None;
        }
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        Some(Self {
            x,
            y,
            width: self.right().min(other.right()) - x,
            height: self.bottom().min(other.bottom()) - y,
        })
    }

    /// Overlapping area in cells; zero when the rects only touch.
    pub fn overlap_area(&self, other: &Self) -> i64 {
        self.intersection(other).map_or(0, |r| r.area())
    }

    /// Whether `other` lies entirely inside this rect (closed edges).
    pub const fn contains(&self, other: &Self) -> bool {
        other.x >= self.x
            && other.right() <= self.right()
            && other.y >= self.y
            && other.bottom() <= self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlapping_rects_intersect_symmetrically() {
        let a = Rect::new(0, 0, 3, 3);
        let b = Rect::new(2, 2, 3, 3);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        assert_eq!(a.overlap_area(&b), 1);
    }

    #[test]
    fn edge_touching_rects_do_not_intersect() {
        let a = Rect::new(0, 0, 2, 2);
        let right = Rect::new(2, 0, 2, 2);
        let below = Rect::new(0, 2, 2, 2);
        let corner = Rect::new(2, 2, 2, 2);
        assert!(!a.intersects(&right));
        assert!(!a.intersects(&below));
        assert!(!a.intersects(&corner));
        assert_eq!(a.intersection(&right), None);
    }

    #[test]
    fn intersection_clips_to_both_rects() {
        let a = Rect::new(0, 0, 4, 4);
        let b = Rect::new(2, 1, 4, 2);
        assert_eq!(a.intersection(&b), Some(Rect::new(2, 1, 2, 2)));
        // Fully contained: intersection is the inner rect.
        let inner = Rect::new(1, 1, 2, 2);
        assert_eq!(a.intersection(&inner), Some(inner));
    }

    #[test]
    fn containment_uses_closed_edges() {
        let outer = Rect::new(0, 0, 4, 4);
        assert!(outer.contains(&Rect::new(0, 0, 4, 4)));
        assert!(outer.contains(&Rect::new(2, 2, 2, 2)));
        assert!(!outer.contains(&Rect::new(3, 3, 2, 2)));
    }

    #[test]
    fn degenerate_rects_are_flagged() {
        assert!(Rect::new(0, 0, 0, 3).is_degenerate());
        assert!(Rect::new(0, 0, 3, -1).is_degenerate());
        assert!(!Rect::new(0, 0, 1, 1).is_degenerate());
    }
}
