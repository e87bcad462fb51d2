//! Grid cell coordinates.
//!
//! A cell is a (row, column) pair. Coordinates are signed so that offsets
//! and out-of-bounds positions (a seed placed off the grid, a probe that
//! walks past an edge) are representable before any bounds check.

use std::ops::Add;

/// A position on a rectangular grid.
///
/// Equality and hashing are structural, and the derived ordering is
/// row-major (row first, then column), which is the canonical traversal
/// order used throughout the workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    /// Row index (vertical axis)
    pub row: i64,
    /// Column index (horizontal axis)
    pub col: i64,
}

impl Cell {
    /// Top-left corner of every grid.
    pub const ORIGIN: Self = Self { row: 0, col: 0 };

    /// Create a new cell.
    pub const fn new(row: i64, col: i64) -> Self {
        Self { row, col }
    }

    /// Squared Euclidean distance, ignoring wrapping.
    ///
    /// Exact for any pair of cells, saturating only when both axis
    /// differences are near `u64::MAX`.
    pub fn distance_squared(&self, other: &Self) -> u128 {
        let dr = u128::from(self.row.abs_diff(other.row));
        let dc = u128::from(self.col.abs_diff(other.col));
        (dr * dr).saturating_add(dc * dc)
    }
}

impl From<(i64, i64)> for Cell {
    fn from((row, col): (i64, i64)) -> Self {
        Self { row, col }
    }
}

impl Add for Cell {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self {
            row: self.row + other.row,
            col: self.col + other.col,
        }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
