// Copyright 2025 the Dashgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dashgrid Quadtree: a 2D spatial index over integer grid rectangles.
//!
//! This crate is the spatial building block of the dashgrid placement engine.
//! It answers "which stored items intersect this rectangle" faster than a
//! linear scan once the item count grows, by recursively subdividing its
//! bounds into four quadrants.
//!
//! - Items are `(Rect, payload)` pairs; the payload is any `Copy` value
//!   (typically an index into a caller-owned collection).
//! - Intersection is strict: rects that share only an edge do not intersect.
//! - Items straddling a quadrant boundary are held at the ancestor level
//!   rather than duplicated, so queries never double-report.
//! - There is no removal or rebalancing; callers rebuild the tree whenever
//!   the underlying set changes, which is simple and adequate at dashboard
//!   scale (~100 items).
//!
//! # Example
//!
//! ```rust
//! use dashgrid_quadtree::{QuadTree, Rect};
//!
//! let mut tree: QuadTree<u32> = QuadTree::new(Rect::new(0, 0, 10, 10));
//! tree.insert(Rect::new(0, 0, 2, 2), 1);
//! tree.insert(Rect::new(5, 5, 2, 2), 2);
//!
//! let hits = tree.query(&Rect::new(1, 1, 3, 3));
//! assert_eq!(hits.len(), 1);
//! assert_eq!(hits[0].1, 1);
//!
//! // Touching edges are not intersections.
//! assert!(tree.query(&Rect::new(2, 0, 2, 2)).is_empty());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod rect;
mod tree;

pub use rect::Rect;
pub use tree::{DEFAULT_CAPACITY, QuadTree};
