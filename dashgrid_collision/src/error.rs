// Copyright 2025 the Dashgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Engine error taxonomy.
//!
//! The engine is a pure computational component, so errors only arise from
//! invalid inputs at the API boundary. Unknown widget ids and full grids are
//! deliberately NOT errors (they are no-ops and ordinary results).

use alloc::string::String;

use dashgrid_quadtree::Rect;

/// Errors reported by [`CollisionEngine`](crate::CollisionEngine) APIs.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EngineError {
    /// The policy's overlap tolerance is not a finite value in `[0, 1]`.
    ///
    /// Rejected at construction rather than clamped, so caller bugs stay
    /// visible.
    #[error("max overlap ratio {ratio} is outside [0, 1]")]
    InvalidOverlapRatio {
        /// The offending ratio.
        ratio: f32,
    },

    /// A grid size descriptor could not be parsed as `<cols>x<rows>` with
    /// both dimensions at least 1.
    #[error("grid size descriptor {descriptor:?} is not of the form <cols>x<rows>")]
    InvalidGridSize {
        /// The descriptor as supplied by the caller.
        descriptor: String,
    },

    /// A rectangle with zero or negative width/height was passed where a
    /// placement footprint is required.
    #[error("rectangle {rect:?} has no area")]
    DegenerateRect {
        /// The offending rectangle.
        rect: Rect,
    },
}
