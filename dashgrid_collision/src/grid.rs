// Copyright 2025 the Dashgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grid dimensions parsed from a `"5x5"`-style size descriptor.

use alloc::string::ToString;
use core::fmt;
use core::str::FromStr;

use dashgrid_quadtree::Rect;

use crate::error::EngineError;

/// Dimensions of the widget grid in unit cells.
///
/// The valid coordinate space runs from `(0, 0)` (inclusive) to
/// `(cols, rows)` (exclusive). Parsed from descriptors like `"5x5"` or
/// `"12x8"` (`<cols>x<rows>`).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct GridSize {
    cols: i32,
    rows: i32,
}

impl GridSize {
    /// Create a grid size; both dimensions must be at least 1.
    pub fn new(cols: i32, rows: i32) -> Result<Self, EngineError> {
        if cols < 1 || rows < 1 {
            return Err(EngineError::InvalidGridSize {
                descriptor: alloc::format!("{cols}x{rows}"),
            });
        }
        Ok(Self { cols, rows })
    }

    /// Number of columns.
    pub const fn cols(&self) -> i32 {
        self.cols
    }

    /// Number of rows.
    pub const fn rows(&self) -> i32 {
        self.rows
    }

    /// The full grid region as a rectangle anchored at the origin.
    pub const fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.cols, self.rows)
    }

    /// Whether `rect` lies entirely inside the grid.
    pub const fn contains(&self, rect: &Rect) -> bool {
        self.bounds().contains(rect)
    }
}

impl FromStr for GridSize {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || EngineError::InvalidGridSize {
            descriptor: s.to_string(),
        };
        let (cols, rows) = s.split_once('x').ok_or_else(invalid)?;
        let cols: i32 = cols.trim().parse().map_err(|_| invalid())?;
        let rows: i32 = rows.trim().parse().map_err(|_| invalid())?;
        Self::new(cols, rows).map_err(|_| invalid())
    }
}

impl fmt::Display for GridSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.cols, self.rows)
    }
}
