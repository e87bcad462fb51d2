//! 4-Connected Neighbor Computation
//!
//! Every cell has up to 4 neighbors: up, down, left, right. On an axis that
//! wraps, the stepped coordinate is reduced modulo the axis extent; on an
//! axis that does not, a step off the edge has no neighbor.

use crate::{Cell, Grid, ValueRange, Wrap, NEIGHBORS_PER_CELL};

/// A cardinal step direction.
///
/// The declaration order is the enumeration order of [`Direction::ALL`],
/// and therefore the order in which flood fills and expansions visit
/// neighbors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions in enumeration order.
    pub const ALL: [Self; NEIGHBORS_PER_CELL] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Unit offset of this direction.
    pub const fn offset(self) -> Cell {
        match self {
            Self::Up => Cell::new(-1, 0),
            Self::Down => Cell::new(1, 0),
            Self::Left => Cell::new(0, -1),
            Self::Right => Cell::new(0, 1),
        }
    }

    /// The direction pointing back.
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// Resolve one coordinate against an axis of length `extent`.
///
/// With `wraps` set the result is the true (non-negative) modulo; without
/// it, coordinates outside `[0, extent)` have no position. A zero extent
/// never resolves.
#[inline]
pub fn wrap_coord(value: i64, extent: usize, wraps: bool) -> Option<i64> {
    let extent = i64::try_from(extent).ok().filter(|&e| e > 0)?;
    if wraps {
        Some(value.rem_euclid(extent))
    } else if (0..extent).contains(&value) {
        Some(value)
    } else {
        None
    }
}

/// Addressing and validity over one grid.
///
/// Bundles the grid with the inclusive value range and wrap flags that a
/// query was made with, so callers ask "is this valid?" and "who is next
/// to this?" without re-threading the parameters.
#[derive(Debug, Clone, Copy)]
pub struct Topology<'g> {
    grid: &'g Grid,
    range: ValueRange,
    wrap: Wrap,
}

impl<'g> Topology<'g> {
    /// Create a view over `grid`.
    pub const fn new(grid: &'g Grid, range: ValueRange, wrap: Wrap) -> Self {
        Self { grid, range, wrap }
    }

    /// The underlying grid.
    pub const fn grid(&self) -> &'g Grid {
        self.grid
    }

    /// The validity range.
    pub const fn range(&self) -> ValueRange {
        self.range
    }

    /// The wrap flags.
    pub const fn wrap(&self) -> Wrap {
        self.wrap
    }

    /// True if `cell` lies inside the grid (no wrapping applied).
    #[inline]
    pub fn in_bounds(&self, cell: Cell) -> bool {
        self.grid.contains(cell)
    }

    /// True if `cell` is in bounds and its value is inside the range.
    #[inline]
    pub fn is_valid(&self, cell: Cell) -> bool {
        self.grid
            .get(cell)
            .is_some_and(|value| self.range.contains(value))
    }

    /// Step `distance` cells from `cell` in `direction`, wrapping per axis.
    ///
    /// Returns `None` when the step leaves the grid on a non-wrapping axis.
    #[inline]
    pub fn step(&self, cell: Cell, direction: Direction, distance: i64) -> Option<Cell> {
        let offset = direction.offset();
        let row = shift(cell.row, offset.row, distance, self.grid.rows(), self.wrap.vertical)?;
        let col = shift(cell.col, offset.col, distance, self.grid.cols(), self.wrap.horizontal)?;
        Some(Cell::new(row, col))
    }

    /// The up-to-4 neighbors of `cell`, in [`Direction::ALL`] order.
    ///
    /// On a wrapping axis of extent 1 or 2 a neighbor may coincide with
    /// `cell` or with another neighbor; callers that care deduplicate.
    pub fn neighbors(&self, cell: Cell) -> impl Iterator<Item = Cell> + 'g {
        let topology = *self;
        Direction::ALL
            .into_iter()
            .filter_map(move |dir| topology.step(cell, dir, 1))
    }

    /// Neighbors of `cell` that are themselves valid.
    pub fn valid_neighbors(&self, cell: Cell) -> impl Iterator<Item = Cell> + 'g {
        let topology = *self;
        self.neighbors(cell).filter(move |&n| topology.is_valid(n))
    }
}

/// Move `value` by `unit * distance` along one axis and resolve it.
///
/// Widened to 128 bits so every `i64` distance is exact.
fn shift(value: i64, unit: i64, distance: i64, extent: usize, wraps: bool) -> Option<i64> {
    let mut target = i128::from(value) + i128::from(unit) * i128::from(distance);
    if wraps && extent > 0 {
        target = target.rem_euclid(extent as i128);
    }
    wrap_coord(i64::try_from(target).ok()?, extent, wraps)
}
