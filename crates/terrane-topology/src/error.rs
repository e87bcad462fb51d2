//! Error types for terrane-topology.

use thiserror::Error;

/// Result type for grid construction.
pub type Result<T> = std::result::Result<T, GridError>;

/// Errors that can occur while building a [`Grid`](crate::Grid).
///
/// Only construction can fail. Once a grid exists every query on it is
/// total: out-of-range cells read as absent rather than erroring.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// A row's length differs from the first row's.
    #[error("ragged grid: row {row} has {found} columns, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// The flat value buffer does not match `rows * cols`.
    #[error("grid size mismatch: expected {expected} values, got {found}")]
    SizeMismatch { expected: usize, found: usize },

    /// `rows * cols` does not fit in memory addressing.
    #[error("grid dimensions {rows}x{cols} overflow")]
    DimensionOverflow { rows: usize, cols: usize },
}
