// Copyright 2025 the Dashgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Collision resolution policy.

use dashgrid_quadtree::Rect;

use crate::error::EngineError;

/// Immutable per-engine configuration controlling how placements are judged
/// and resolved.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CollisionPolicy {
    /// When true, overlaps whose ratio stays at or below
    /// [`max_overlap_ratio`](Self::max_overlap_ratio) are tolerated and not
    /// reported as collisions.
    pub allow_partial_overlap: bool,
    /// Tolerated overlap ratio in `[0, 1]`, measured as overlap area divided
    /// by the candidate's area. Only consulted when
    /// [`allow_partial_overlap`](Self::allow_partial_overlap) is set.
    pub max_overlap_ratio: f32,
    /// Whether a single-widget collision may be offered as a swap.
    pub allow_swap: bool,
    /// Whether push-based displacement is available to the caller.
    pub allow_push: bool,
}

impl Default for CollisionPolicy {
    /// Strict placement: no tolerated overlap, swap and push enabled.
    fn default() -> Self {
        Self {
            allow_partial_overlap: false,
            max_overlap_ratio: 0.0,
            allow_swap: true,
            allow_push: true,
        }
    }
}

impl CollisionPolicy {
    /// Validate the configuration. The overlap ratio must be a finite value
    /// in `[0, 1]`; out-of-range values are rejected, never clamped.
    pub fn validate(&self) -> Result<(), EngineError> {
        let r = self.max_overlap_ratio;
        if !r.is_finite() || !(0.0..=1.0).contains(&r) {
            return Err(EngineError::InvalidOverlapRatio { ratio: r });
        }
        Ok(())
    }

    /// Whether an overlap between `candidate` and `other` is within the
    /// tolerated ratio. Intersecting pairs beyond the tolerance (or any
    /// intersection, when partial overlap is disabled) count as collisions.
    pub(crate) fn tolerates(&self, candidate: &Rect, other: &Rect) -> bool {
        if !self.allow_partial_overlap {
            return false;
        }
        let overlap = candidate.overlap_area(other);
        let ratio = overlap as f32 / candidate.area() as f32;
        ratio <= self.max_overlap_ratio
    }
}
