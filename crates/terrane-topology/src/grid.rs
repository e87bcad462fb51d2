//! Immutable integer grids and the parameters that read them.

use crate::{Cell, GridError, Result};

/// A rectangular matrix of integer values, stored row-major.
///
/// The extent is fixed at construction. A 0×0 grid (or any grid with a
/// zero extent) is legal and simply has no cells.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    rows: usize,
    cols: usize,
    values: Vec<i32>,
}

impl Grid {
    /// Build a grid from a flat row-major buffer.
    pub fn new(rows: usize, cols: usize, values: Vec<i32>) -> Result<Self> {
        let expected = rows
            .checked_mul(cols)
            .ok_or(GridError::DimensionOverflow { rows, cols })?;
        if values.len() != expected {
            return Err(GridError::SizeMismatch {
                expected,
                found: values.len(),
            });
        }
        Ok(Self { rows, cols, values })
    }

    /// Build a grid from nested rows. Every row must have the same length.
    pub fn from_rows<R>(rows: impl IntoIterator<Item = R>) -> Result<Self>
    where
        R: AsRef<[i32]>,
    {
        let mut values = Vec::new();
        let mut cols = None;
        let mut count = 0;

        for (index, row) in rows.into_iter().enumerate() {
            let row = row.as_ref();
            let expected = *cols.get_or_insert(row.len());
            if row.len() != expected {
                return Err(GridError::RaggedRow {
                    row: index,
                    expected,
                    found: row.len(),
                });
            }
            values.extend_from_slice(row);
            count += 1;
        }

        let cols = cols.unwrap_or(0);
        // A list of empty rows has no cells either way.
        let rows = if cols == 0 { 0 } else { count };
        Self::new(rows, cols, values)
    }

    /// A grid with every cell set to `value`.
    pub fn filled(rows: usize, cols: usize, value: i32) -> Result<Self> {
        let len = rows
            .checked_mul(cols)
            .ok_or(GridError::DimensionOverflow { rows, cols })?;
        Self::new(rows, cols, vec![value; len])
    }

    /// The 0×0 grid.
    pub const fn empty() -> Self {
        Self {
            rows: 0,
            cols: 0,
            values: Vec::new(),
        }
    }

    /// Number of rows (vertical extent).
    #[inline]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (horizontal extent).
    #[inline]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when the grid has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Row-major values.
    pub fn values(&self) -> &[i32] {
        &self.values
    }

    /// True if `cell` lies inside `[0, rows) × [0, cols)`.
    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.row >= 0
            && cell.col >= 0
            && (cell.row as u64) < self.rows as u64
            && (cell.col as u64) < self.cols as u64
    }

    /// Flat buffer index of an in-bounds cell.
    #[inline]
    pub fn index_of(&self, cell: Cell) -> Option<usize> {
        if self.contains(cell) {
            Some(cell.row as usize * self.cols + cell.col as usize)
        } else {
            None
        }
    }

    /// Inverse of [`index_of`](Self::index_of).
    #[inline]
    pub fn cell_at(&self, index: usize) -> Cell {
        Cell::new((index / self.cols) as i64, (index % self.cols) as i64)
    }

    /// Value at `cell`, or `None` when out of bounds.
    #[inline]
    pub fn get(&self, cell: Cell) -> Option<i32> {
        self.index_of(cell).map(|i| self.values[i])
    }

    /// Iterate every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.values.len()).map(move |i| self.cell_at(i))
    }
}

/// An inclusive band of grid values treated as "valid".
///
/// A range whose `start` exceeds its `end` is empty: no value is valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValueRange {
    /// Lowest valid value (inclusive)
    pub start: i32,
    /// Highest valid value (inclusive)
    pub end: i32,
}

impl ValueRange {
    /// Every representable value.
    pub const ALL: Self = Self {
        start: i32::MIN,
        end: i32::MAX,
    };

    /// Create an inclusive range.
    pub const fn new(start: i32, end: i32) -> Self {
        Self { start, end }
    }

    /// A range matching exactly one value.
    pub const fn single(value: i32) -> Self {
        Self {
            start: value,
            end: value,
        }
    }

    /// `start <= value <= end`.
    #[inline]
    pub const fn contains(&self, value: i32) -> bool {
        self.start <= value && value <= self.end
    }

    /// True when no value can satisfy the range.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start > self.end
    }
}

impl Default for ValueRange {
    fn default() -> Self {
        Self::ALL
    }
}

impl From<std::ops::RangeInclusive<i32>> for ValueRange {
    fn from(range: std::ops::RangeInclusive<i32>) -> Self {
        Self::new(*range.start(), *range.end())
    }
}

/// Independent per-axis wrapping flags.
///
/// Horizontal wrapping joins the first and last column; vertical wrapping
/// joins the first and last row. Both together make the grid a torus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Wrap {
    /// Columns wrap (left edge meets right edge)
    pub horizontal: bool,
    /// Rows wrap (top edge meets bottom edge)
    pub vertical: bool,
}

impl Wrap {
    pub const NONE: Self = Self::new(false, false);
    pub const HORIZONTAL: Self = Self::new(true, false);
    pub const VERTICAL: Self = Self::new(false, true);
    pub const BOTH: Self = Self::new(true, true);

    pub const fn new(horizontal: bool, vertical: bool) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }
}
