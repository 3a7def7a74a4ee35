// Copyright 2025 the Dashgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadtree node: insertion with lazy subdivision and pruned range queries.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt::Debug;

use crate::rect::Rect;

/// Default number of directly-held items before a node subdivides.
pub const DEFAULT_CAPACITY: usize = 4;

/// A quadtree over axis-aligned integer rectangles with `Copy` payloads.
///
/// Items are keyed by the rect supplied at insertion. Items that straddle a
/// quadrant boundary are held at the ancestor level rather than duplicated
/// into children, so a query never reports the same item twice.
///
/// The tree is built fresh per query batch by its callers; there is no
/// removal or rebalancing.
pub struct QuadTree<P: Copy> {
    bounds: Rect,
    capacity: usize,
    items: Vec<(Rect, P)>,
    children: Option<Box<[QuadTree<P>; 4]>>,
}

impl<P: Copy> QuadTree<P> {
    /// Create an empty tree whose root covers `bounds`, with
    /// [`DEFAULT_CAPACITY`] items per node before subdivision.
    pub fn new(bounds: Rect) -> Self {
        Self::with_capacity(bounds, DEFAULT_CAPACITY)
    }

    /// Create an empty tree with an explicit per-node capacity.
    ///
    /// A zero capacity is treated as 1 so subdivision can make progress.
    pub fn with_capacity(bounds: Rect, capacity: usize) -> Self {
        Self {
            bounds,
            capacity: capacity.max(1),
            items: Vec::new(),
            children: None,
        }
    }

    /// The region covered by this node.
    pub const fn bounds(&self) -> &Rect {
        &self.bounds
    }

    /// Total number of items stored in this node and its descendants.
    pub fn len(&self) -> usize {
        let mut n = self.items.len();
        if let Some(children) = &self.children {
            for child in children.iter() {
                n += child.len();
            }
        }
        n
    }

    /// True when no items are stored anywhere in the tree.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether this node has subdivided.
    pub const fn has_children(&self) -> bool {
        self.children.is_some()
    }

    /// Remove all items and collapse any subdivision.
    pub fn clear(&mut self) {
        self.items.clear();
        self.children = None;
    }

    /// Insert `payload` keyed by `rect`.
    ///
    /// Returns `false` (and stores nothing) when `rect` does not intersect
    /// this node's bounds.
    pub fn insert(&mut self, rect: Rect, payload: P) -> bool {
        if !self.bounds.intersects(&rect) {
            return false;
        }

        if let Some(children) = &mut self.children {
            // Fully-contained items sink into the single child that holds
            // them; straddlers stay at this level.
            for child in children.iter_mut() {
                if child.bounds.contains(&rect) {
                    return child.insert(rect, payload);
                }
            }
            self.items.push((rect, payload));
            return true;
        }

        self.items.push((rect, payload));
        if self.items.len() > self.capacity && self.can_subdivide() {
            self.subdivide();
        }
        true
    }

    /// Collect every stored item whose rect strictly intersects `region`.
    pub fn query(&self, region: &Rect) -> Vec<(Rect, P)> {
        let mut out = Vec::new();
        self.visit(region, &mut |rect, payload| out.push((rect, payload)));
        out
    }

    /// Visit every stored item whose rect strictly intersects `region`
    /// without allocating result storage.
    ///
    /// Child quadrants whose bounds do not intersect `region` are pruned.
    pub fn visit<F: FnMut(Rect, P)>(&self, region: &Rect, f: &mut F) {
        if !self.bounds.intersects(region) {
            return;
        }
        for &(rect, payload) in &self.items {
            if rect.intersects(region) {
                f(rect, payload);
            }
        }
        if let Some(children) = &self.children {
            for child in children.iter() {
                child.visit(region, f);
            }
        }
    }

    // Bisection must shrink both axes; a 1-cell-wide or 1-cell-tall node
    // would produce empty quadrants and recurse forever.
    fn can_subdivide(&self) -> bool {
        self.bounds.width >= 2 && self.bounds.height >= 2
    }

    fn subdivide(&mut self) {
        let half_w = self.bounds.width / 2;
        let half_h = self.bounds.height / 2;
        let Rect { x, y, .. } = self.bounds;
        let right_w = self.bounds.width - half_w;
        let bottom_h = self.bounds.height - half_h;

        let quads = [
            Rect::new(x, y, half_w, half_h),
            Rect::new(x + half_w, y, right_w, half_h),
            Rect::new(x, y + half_h, half_w, bottom_h),
            Rect::new(x + half_w, y + half_h, right_w, bottom_h),
        ];
        let capacity = self.capacity;
        let mut children = Box::new(quads.map(|b| Self::with_capacity(b, capacity)));

        // Redistribute directly-held items that fit a single quadrant.
        let mut i = 0;
        while i < self.items.len() {
            let rect = self.items[i].0;
            match children.iter_mut().find(|c| c.bounds.contains(&rect)) {
                Some(child) => {
                    let (rect, payload) = self.items.swap_remove(i);
                    child.insert(rect, payload);
                }
                None => i += 1,
            }
        }
        self.children = Some(children);
    }
}

impl<P: Copy + Debug> Debug for QuadTree<P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("QuadTree")
            .field("bounds", &self.bounds)
            .field("capacity", &self.capacity)
            .field("direct_items", &self.items.len())
            .field("has_children", &self.children.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    // Small deterministic xorshift for layout generation in tests.
    struct Rng(u64);

    impl Rng {
        fn next_u64(&mut self) -> u64 {
            let mut x = self.0;
            x ^= x << 13;
            x ^= x >> 7;
            x ^= x << 17;
            self.0 = x;
            x
        }

        fn in_range(&mut self, lo: i32, hi: i32) -> i32 {
            debug_assert!(hi > lo, "empty range");
            lo + (self.next_u64() % (hi - lo) as u64) as i32
        }
    }

    fn brute_force(items: &[(Rect, u32)], region: &Rect) -> Vec<u32> {
        let mut hits: Vec<u32> = items
            .iter()
            .filter(|(r, _)| r.intersects(region))
            .map(|&(_, p)| p)
            .collect();
        hits.sort_unstable();
        hits
    }

    #[test]
    fn insert_and_query_single() {
        let mut tree: QuadTree<u32> = QuadTree::new(Rect::new(0, 0, 10, 10));
        assert!(tree.insert(Rect::new(1, 1, 2, 2), 7));
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.query(&Rect::new(0, 0, 10, 10)), &[(Rect::new(1, 1, 2, 2), 7)]);
    }

    #[test]
    fn insert_outside_bounds_is_rejected() {
        let mut tree: QuadTree<u32> = QuadTree::new(Rect::new(0, 0, 5, 5));
        assert!(!tree.insert(Rect::new(6, 6, 2, 2), 1));
        assert!(tree.is_empty());
    }

    #[test]
    fn subdivision_triggers_past_capacity() {
        let mut tree: QuadTree<u32> = QuadTree::with_capacity(Rect::new(0, 0, 16, 16), 2);
        tree.insert(Rect::new(0, 0, 1, 1), 0);
        tree.insert(Rect::new(1, 1, 1, 1), 1);
        assert!(!tree.has_children());
        tree.insert(Rect::new(2, 2, 1, 1), 2);
        assert!(tree.has_children());
        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn straddling_items_stay_at_ancestor_and_are_found_once() {
        let mut tree: QuadTree<u32> = QuadTree::with_capacity(Rect::new(0, 0, 8, 8), 1);
        tree.insert(Rect::new(0, 0, 1, 1), 0);
        tree.insert(Rect::new(6, 6, 1, 1), 1);
        // Spans all four quadrants; must not be duplicated.
        tree.insert(Rect::new(2, 2, 4, 4), 2);
        let hits = tree.query(&Rect::new(0, 0, 8, 8));
        assert_eq!(hits.len(), 3);
        let spanning = tree.query(&Rect::new(3, 3, 1, 1));
        assert_eq!(spanning, &[(Rect::new(2, 2, 4, 4), 2)]);
    }

    #[test]
    fn query_prunes_disjoint_regions() {
        let mut tree: QuadTree<u32> = QuadTree::new(Rect::new(0, 0, 10, 10));
        tree.insert(Rect::new(0, 0, 2, 2), 0);
        tree.insert(Rect::new(8, 8, 2, 2), 1);
        assert_eq!(tree.query(&Rect::new(4, 4, 2, 2)), &[]);
        // Region fully outside the root bounds.
        assert_eq!(tree.query(&Rect::new(20, 20, 3, 3)), &[]);
    }

    #[test]
    fn edge_touching_query_reports_nothing() {
        let mut tree: QuadTree<u32> = QuadTree::new(Rect::new(0, 0, 10, 10));
        tree.insert(Rect::new(0, 0, 2, 2), 0);
        assert_eq!(tree.query(&Rect::new(2, 0, 2, 2)), &[]);
        assert_eq!(tree.query(&Rect::new(0, 2, 2, 2)), &[]);
    }

    #[test]
    fn narrow_bounds_never_subdivide() {
        let mut tree: QuadTree<u32> = QuadTree::with_capacity(Rect::new(0, 0, 1, 100), 1);
        for y in 0..20 {
            tree.insert(Rect::new(0, y * 5, 1, 5), y as u32);
        }
        assert!(!tree.has_children());
        assert_eq!(tree.len(), 20);
    }

    #[test]
    fn clear_resets_items_and_children() {
        let mut tree: QuadTree<u32> = QuadTree::with_capacity(Rect::new(0, 0, 8, 8), 1);
        for i in 0..6 {
            tree.insert(Rect::new(i, i, 1, 1), i as u32);
        }
        assert!(tree.has_children());
        tree.clear();
        assert!(tree.is_empty());
        assert!(!tree.has_children());
    }

    #[test]
    fn query_matches_brute_force_on_random_layouts() {
        let mut rng = Rng(0xDA5B_0A2D_5EED_0001);
        for _ in 0..20 {
            let mut tree: QuadTree<u32> = QuadTree::new(Rect::new(0, 0, 64, 64));
            let mut items = Vec::new();
            for p in 0..120u32 {
                let w = rng.in_range(1, 6);
                let h = rng.in_range(1, 6);
                let rect = Rect::new(rng.in_range(0, 64 - w), rng.in_range(0, 64 - h), w, h);
                assert!(tree.insert(rect, p));
                items.push((rect, p));
            }
            for _ in 0..30 {
                let w = rng.in_range(1, 20);
                let h = rng.in_range(1, 20);
                let region = Rect::new(rng.in_range(-4, 60), rng.in_range(-4, 60), w, h);
                let mut hits: Vec<u32> = tree.query(&region).iter().map(|&(_, p)| p).collect();
                hits.sort_unstable();
                assert_eq!(hits, brute_force(&items, &region));
            }
        }
    }

    #[test]
    fn visit_matches_query() {
        let mut tree: QuadTree<u32> = QuadTree::new(Rect::new(0, 0, 10, 10));
        tree.insert(Rect::new(0, 0, 3, 3), 0);
        tree.insert(Rect::new(2, 2, 3, 3), 1);
        let region = Rect::new(1, 1, 2, 2);
        let mut visited = 0;
        tree.visit(&region, &mut |_, _| visited += 1);
        assert_eq!(visited, tree.query(&region).len());
    }
}
