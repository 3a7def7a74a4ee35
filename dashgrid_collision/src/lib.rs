// Copyright 2025 the Dashgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dashgrid Collision: placement decisions for dashboard widget grids.
//!
//! ## Overview
//!
//! A dashboard state store owns the canonical widget list. Whenever the user
//! drags, resizes, or adds a widget, the store asks this engine "would that
//! placement collide, and if so what should happen" — the engine answers with
//! a decision and the store commits it. The engine never touches persistent
//! state itself; even push-based displacement returns a repositioned widget
//! list for the caller to apply.
//!
//! - [`CollisionEngine::detect_collision`] reports the colliding widgets, a
//!   swap counterpart when exactly one unlocked widget collides, and the
//!   nearest collision-free placement of the same size.
//! - [`CollisionEngine::find_empty_spaces`] lists every origin where a rect
//!   of at least the requested size fits.
//! - [`CollisionEngine::push_widgets`] places the mover unconditionally and
//!   relocates displaced widgets deterministically; widgets with nowhere to
//!   go are flagged, never dropped.
//!
//! Collision queries are accelerated by a quadtree from
//! [`dashgrid_quadtree`], rebuilt whenever the widget snapshot changes.
//!
//! # Example
//!
//! ```rust
//! use dashgrid_collision::{CollisionEngine, CollisionPolicy, Rect, Widget};
//!
//! let widgets: Vec<Widget> = vec![
//!     Widget::new("clock", "clock", Rect::new(0, 0, 2, 2)),
//!     Widget::new("notes", "notes", Rect::new(3, 0, 2, 2)).locked(true),
//! ];
//! let engine = CollisionEngine::from_descriptor(widgets, "5x5", CollisionPolicy::default())?;
//!
//! let hit = engine.detect_collision(Rect::new(1, 1, 2, 2), None)?;
//! assert!(hit.has_collision);
//! assert_eq!(hit.swappable.map(|w| w.id.as_str()), Some("clock"));
//! assert!(hit.suggested.is_some());
//! # Ok::<(), dashgrid_collision::EngineError>(())
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod engine;
mod error;
mod grid;
mod policy;
mod widget;

pub use dashgrid_quadtree::Rect;
pub use engine::{CollisionEngine, CollisionResult, PushResolution};
pub use error::EngineError;
pub use grid::GridSize;
pub use policy::CollisionPolicy;
pub use widget::Widget;
