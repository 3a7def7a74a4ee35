// Copyright 2025 the Dashgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The widget entity as seen by the engine.

use alloc::string::String;

use dashgrid_quadtree::Rect;

/// A rectangular, grid-aligned dashboard element.
///
/// The canonical list of widgets is owned by the caller's state store; the
/// engine holds a snapshot. Only `id`, `rect`, and `locked` carry meaning for
/// collision resolution — `kind` and `data` are opaque pass-through that the
/// engine never branches on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Widget<D = ()> {
    /// Identity, unique within a layout.
    pub id: String,
    /// Opaque widget type tag (which component the UI renders).
    pub kind: String,
    /// Placement footprint in grid cells.
    pub rect: Rect,
    /// Locked widgets are never swapped or displaced; they remain obstacles.
    pub locked: bool,
    /// Opaque caller payload.
    pub data: D,
}

impl<D: Default> Widget<D> {
    /// Create an unlocked widget with default payload.
    pub fn new(id: impl Into<String>, kind: impl Into<String>, rect: Rect) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            rect,
            locked: false,
            data: D::default(),
        }
    }
}

impl<D> Widget<D> {
    /// Set the locked flag, builder-style.
    pub fn locked(mut self, locked: bool) -> Self {
        self.locked = locked;
        self
    }
}
