//! Terrane Grid Topology
//!
//! Rectangular integer grids addressed with 4-connectivity and optional
//! per-axis wrapping.
//!
//! # Addressing
//!
//! A [`Cell`] is a signed (row, column) pair. Each cell has up to 4
//! neighbors (up, down, left, right). When an axis wraps, a step past one
//! edge re-enters from the opposite edge (true modulo on that axis); when
//! it does not, the step simply has no neighbor. Wrapping horizontally and
//! vertically at once turns the grid into a torus.
//!
//! # Validity
//!
//! Queries carry an inclusive [`ValueRange`]. A cell is *valid* when it is
//! in bounds and its value lies inside the range. Every derived structure
//! (islands, borders, territories) is built over the valid cells only.
//!
//! ```
//! use terrane_topology::{Cell, Grid, Topology, ValueRange, Wrap};
//!
//! let grid = Grid::from_rows([[1, 0, 1], [1, 1, 0]]).unwrap();
//! let topo = Topology::new(&grid, ValueRange::single(1), Wrap::HORIZONTAL);
//!
//! assert!(topo.is_valid(Cell::new(0, 0)));
//! assert!(!topo.is_valid(Cell::new(0, 1)));
//! // Left of column 0 wraps to column 2.
//! assert_eq!(topo.neighbors(Cell::new(0, 0)).count(), 3);
//! ```

mod cell;
mod error;
mod grid;
mod neighbors;
pub mod region;

pub use cell::Cell;
pub use error::{GridError, Result};
pub use grid::{Grid, ValueRange, Wrap};
pub use neighbors::{wrap_coord, Direction, Topology};

/// Neighbors per cell under 4-connectivity.
pub const NEIGHBORS_PER_CELL: usize = 4;

// Compile-time assertion that the direction table covers every neighbor
const _: () = assert!(Direction::ALL.len() == NEIGHBORS_PER_CELL);
