// Copyright 2025 the Dashgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The collision engine: detection, swap eligibility, empty-space search,
//! and push-based displacement over a widget snapshot.
//!
//! ## Overview
//!
//! The engine holds an immutable snapshot of the caller's widget list plus
//! the grid bounds and policy, and answers placement questions:
//!
//! - [`CollisionEngine::detect_collision`] — would this footprint collide,
//!   and if so with whom; can the collision be resolved by a swap; where is
//!   the nearest free placement of the same size.
//! - [`CollisionEngine::find_empty_spaces`] — every origin at which a rect of
//!   at least the requested size fits collision-free.
//! - [`CollisionEngine::push_widgets`] — place a widget unconditionally and
//!   relocate whatever unlocked widgets it lands on.
//!
//! The engine never mutates the caller's state. Detection returns decisions;
//! push returns a fully resolved widget list for the caller to commit. A
//! quadtree over the snapshot accelerates the per-candidate queries and is
//! rebuilt whenever the snapshot changes ([`CollisionEngine::set_widgets`]).

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Debug;

use dashgrid_quadtree::{QuadTree, Rect};

use crate::error::EngineError;
use crate::grid::GridSize;
use crate::policy::CollisionPolicy;
use crate::widget::Widget;

/// The engine's answer to "would this placement collide".
///
/// Invariants:
/// - `swappable` is set iff exactly one colliding widget remains after
///   exclusion and tolerance filtering, that widget is unlocked, and the
///   policy allows swaps. Multi-widget collisions are never swap-eligible.
/// - `suggested`, when set, is collision-free against the snapshot (with the
///   same exclusion applied) and lies within grid bounds.
#[derive(Clone, Debug)]
pub struct CollisionResult<'a, D> {
    /// Whether any widget collides beyond the policy tolerance.
    pub has_collision: bool,
    /// The colliding widgets, in snapshot order.
    pub colliding: Vec<&'a Widget<D>>,
    /// The single unlocked counterpart a swap could resolve against, if any.
    pub swappable: Option<&'a Widget<D>>,
    /// Nearest collision-free placement of the candidate's size, if one
    /// exists.
    pub suggested: Option<Rect>,
}

/// Outcome of [`CollisionEngine::push_widgets`].
///
/// A displaced widget that could not be relocated anywhere keeps its
/// original rect and is listed in `unresolved` — a full grid is an expected
/// steady state, not an error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PushResolution<D> {
    /// The full widget list with the mover and displaced widgets repositioned.
    pub widgets: Vec<Widget<D>>,
    /// Ids of displaced widgets left at their original (still colliding)
    /// rects because no free space exists.
    pub unresolved: Vec<String>,
}

/// Collision detection and auto-placement over a widget snapshot.
///
/// Construct one per widget-set revision; the caller's state store owns the
/// canonical list and commits whatever the engine decides.
pub struct CollisionEngine<D = ()> {
    widgets: Vec<Widget<D>>,
    grid: GridSize,
    policy: CollisionPolicy,
    index: QuadTree<usize>,
}

impl<D> Debug for CollisionEngine<D> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CollisionEngine")
            .field("widgets", &self.widgets.len())
            .field("grid", &self.grid)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

impl<D> CollisionEngine<D> {
    /// Create an engine over `widgets` within `grid`, judged by `policy`.
    ///
    /// Validates the policy and every widget footprint, then indexes the
    /// snapshot. Widgets lying fully outside the grid are accepted but not
    /// indexed: bounds policing is the caller's concern, and such widgets
    /// cannot collide with anything the engine reasons about.
    pub fn new(
        widgets: Vec<Widget<D>>,
        grid: GridSize,
        policy: CollisionPolicy,
    ) -> Result<Self, EngineError> {
        policy.validate()?;
        for w in &widgets {
            if w.rect.is_degenerate() {
                return Err(EngineError::DegenerateRect { rect: w.rect });
            }
        }
        let index = Self::build_index(&grid, &widgets);
        Ok(Self {
            widgets,
            grid,
            policy,
            index,
        })
    }

    /// Create an engine from a `"5x5"`-style grid descriptor.
    pub fn from_descriptor(
        widgets: Vec<Widget<D>>,
        descriptor: &str,
        policy: CollisionPolicy,
    ) -> Result<Self, EngineError> {
        Self::new(widgets, descriptor.parse()?, policy)
    }

    /// The widget snapshot this engine reasons over.
    pub fn widgets(&self) -> &[Widget<D>] {
        &self.widgets
    }

    /// The grid dimensions.
    pub const fn grid(&self) -> &GridSize {
        &self.grid
    }

    /// The policy configuration.
    pub const fn policy(&self) -> &CollisionPolicy {
        &self.policy
    }

    /// Replace the widget snapshot and rebuild the spatial index.
    ///
    /// The index is rebuilt from scratch rather than patched; at dashboard
    /// scale a rebuild is cheaper than keeping incremental bookkeeping
    /// honest.
    pub fn set_widgets(&mut self, widgets: Vec<Widget<D>>) -> Result<(), EngineError> {
        for w in &widgets {
            if w.rect.is_degenerate() {
                return Err(EngineError::DegenerateRect { rect: w.rect });
            }
        }
        self.index = Self::build_index(&self.grid, &widgets);
        self.widgets = widgets;
        Ok(())
    }

    fn build_index(grid: &GridSize, widgets: &[Widget<D>]) -> QuadTree<usize> {
        let mut index = QuadTree::new(grid.bounds());
        for (i, w) in widgets.iter().enumerate() {
            let _ = index.insert(w.rect, i);
        }
        index
    }

    /// Decide whether placing `candidate` would collide.
    ///
    /// `exclude` names the widget being moved or resized, so it cannot
    /// collide with itself; an unknown id excludes nothing. A candidate
    /// fully outside the grid reports no collision — rejecting out-of-bounds
    /// placement outright is the caller's choice to make before asking.
    ///
    /// Returns [`EngineError::DegenerateRect`] for a zero-area candidate.
    pub fn detect_collision(
        &self,
        candidate: Rect,
        exclude: Option<&str>,
    ) -> Result<CollisionResult<'_, D>, EngineError> {
        if candidate.is_degenerate() {
            return Err(EngineError::DegenerateRect { rect: candidate });
        }
        let colliding = self.colliding_indices(&candidate, exclude);
        let swappable = match colliding.as_slice() {
            &[only] if self.policy.allow_swap && !self.widgets[only].locked => {
                Some(&self.widgets[only])
            }
            _ => None,
        };
        let suggested = if colliding.is_empty() {
            None
        } else {
            self.nearest_free(
                candidate.width,
                candidate.height,
                (candidate.x, candidate.y),
                exclude,
            )
        };
        Ok(CollisionResult {
            has_collision: !colliding.is_empty(),
            colliding: colliding.iter().map(|&i| &self.widgets[i]).collect(),
            swappable,
            suggested,
        })
    }

    /// Every origin at which a `min_width` × `min_height` rect fits without
    /// colliding, scanned row-major.
    ///
    /// Returned rects are exactly the requested size: the search proves a
    /// valid placement exists at each origin, it does not grow placements to
    /// their maximum. A request larger than the grid yields an empty list;
    /// a zero-area request is a [`EngineError::DegenerateRect`] error.
    pub fn find_empty_spaces(
        &self,
        min_width: i32,
        min_height: i32,
    ) -> Result<Vec<Rect>, EngineError> {
        let probe = Rect::new(0, 0, min_width, min_height);
        if probe.is_degenerate() {
            return Err(EngineError::DegenerateRect { rect: probe });
        }
        let mut out = Vec::new();
        for y in 0..=self.grid.rows() - min_height {
            for x in 0..=self.grid.cols() - min_width {
                let spot = Rect::new(x, y, min_width, min_height);
                if self.colliding_indices(&spot, None).is_empty() {
                    out.push(spot);
                }
            }
        }
        Ok(out)
    }

    /// Place the widget `moved_id` at `new_pos` unconditionally and relocate
    /// every unlocked widget it lands on to the nearest free space.
    ///
    /// Locked widgets are never moved; they remain obstacles even while the
    /// mover overlaps them. Displaced widgets are processed in row-major
    /// order of their original rects (id as tie-break), so identical input
    /// always produces identical output. A displaced widget with nowhere to
    /// go keeps its rect and is flagged in
    /// [`PushResolution::unresolved`] — never an error.
    ///
    /// An unknown `moved_id`, or a policy with push disabled, is a no-op
    /// returning the snapshot unchanged.
    pub fn push_widgets(
        &self,
        moved_id: &str,
        new_pos: Rect,
    ) -> Result<PushResolution<D>, EngineError>
    where
        D: Clone,
    {
        if new_pos.is_degenerate() {
            return Err(EngineError::DegenerateRect { rect: new_pos });
        }
        let mut widgets = self.widgets.clone();
        if !self.policy.allow_push {
            return Ok(PushResolution {
                widgets,
                unresolved: Vec::new(),
            });
        }
        let Some(mover) = widgets.iter().position(|w| w.id == moved_id) else {
            return Ok(PushResolution {
                widgets,
                unresolved: Vec::new(),
            });
        };
        widgets[mover].rect = new_pos;

        let mut displaced: Vec<usize> = self
            .colliding_indices(&new_pos, Some(moved_id))
            .into_iter()
            .filter(|&i| !self.widgets[i].locked)
            .collect();
        displaced.sort_by(|&a, &b| {
            let (ra, rb) = (&self.widgets[a].rect, &self.widgets[b].rect);
            (ra.y, ra.x, self.widgets[a].id.as_str()).cmp(&(
                rb.y,
                rb.x,
                self.widgets[b].id.as_str(),
            ))
        });

        // Widgets still waiting to be relocated are not obstacles: they will
        // vacate their colliding rects.
        let mut pending = displaced.clone();
        let mut unresolved = Vec::new();
        for &d in &displaced {
            let rect = widgets[d].rect;
            let obstacles: Vec<Rect> = widgets
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != d && !pending.contains(i))
                .map(|(_, w)| w.rect)
                .collect();
            match self.nearest_spot(
                (rect.width, rect.height),
                (rect.x, rect.y),
                &obstacles,
            ) {
                Some(spot) => widgets[d].rect = spot,
                None => unresolved.push(widgets[d].id.clone()),
            }
            pending.retain(|&i| i != d);
        }

        Ok(PushResolution {
            widgets,
            unresolved,
        })
    }

    /// Commit a swap decision: exchange the rects of two unlocked widgets.
    ///
    /// Returns `None` when either id is unknown, the ids are equal, or
    /// either widget is locked.
    pub fn apply_swap(&self, a_id: &str, b_id: &str) -> Option<Vec<Widget<D>>>
    where
        D: Clone,
    {
        let a = self.widgets.iter().position(|w| w.id == a_id)?;
        let b = self.widgets.iter().position(|w| w.id == b_id)?;
        if a == b || self.widgets[a].locked || self.widgets[b].locked {
            return None;
        }
        let mut out = self.widgets.clone();
        let rect = out[a].rect;
        out[a].rect = out[b].rect;
        out[b].rect = rect;
        Some(out)
    }

    // Indices of widgets colliding with `candidate` beyond the policy
    // tolerance, in snapshot order.
    fn colliding_indices(&self, candidate: &Rect, exclude: Option<&str>) -> Vec<usize> {
        let mut hits = Vec::new();
        self.index.visit(candidate, &mut |rect, i: usize| {
            if exclude.is_some_and(|id| id == self.widgets[i].id) {
                return;
            }
            if self.policy.tolerates(candidate, &rect) {
                return;
            }
            hits.push(i);
        });
        hits.sort_unstable();
        hits
    }

    // Nearest in-bounds collision-free placement of the given size, ranked
    // by squared distance of origins with row-major tie-break.
    fn nearest_free(
        &self,
        width: i32,
        height: i32,
        anchor: (i32, i32),
        exclude: Option<&str>,
    ) -> Option<Rect> {
        let mut best: Option<(i64, i32, i32)> = None;
        for y in 0..=self.grid.rows() - height {
            for x in 0..=self.grid.cols() - width {
                let spot = Rect::new(x, y, width, height);
                if !self.colliding_indices(&spot, exclude).is_empty() {
                    continue;
                }
                let (dx, dy) = ((x - anchor.0) as i64, (y - anchor.1) as i64);
                let key = (dx * dx + dy * dy, y, x);
                if best.is_none_or(|b| key < b) {
                    best = Some(key);
                }
            }
        }
        best.map(|(_, y, x)| Rect::new(x, y, width, height))
    }

    // Same search as `nearest_free`, but against an explicit obstacle list
    // (used while push is rewriting positions the index does not know about).
    fn nearest_spot(
        &self,
        size: (i32, i32),
        anchor: (i32, i32),
        obstacles: &[Rect],
    ) -> Option<Rect> {
        let (width, height) = size;
        let mut best: Option<(i64, i32, i32)> = None;
        for y in 0..=self.grid.rows() - height {
            for x in 0..=self.grid.cols() - width {
                let spot = Rect::new(x, y, width, height);
                let blocked = obstacles
                    .iter()
                    .any(|o| spot.intersects(o) && !self.policy.tolerates(&spot, o));
                if blocked {
                    continue;
                }
                let (dx, dy) = ((x - anchor.0) as i64, (y - anchor.1) as i64);
                let key = (dx * dx + dy * dy, y, x);
                if best.is_none_or(|b| key < b) {
                    best = Some(key);
                }
            }
        }
        best.map(|(_, y, x)| Rect::new(x, y, width, height))
    }
}
