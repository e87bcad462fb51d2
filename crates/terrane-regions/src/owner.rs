//! Claim-once ownership of grid cells.

use terrane_topology::{Cell, Grid};

use crate::territory::one_based_label;

/// Per-cell team ownership.
///
/// A cell is claimed at most once: [`claim`](Self::claim) never overwrites.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnerMap {
    rows: usize,
    cols: usize,
    owners: Vec<Option<usize>>,
}

impl OwnerMap {
    /// An unclaimed map covering `grid`.
    pub fn new(grid: &Grid) -> Self {
        Self {
            rows: grid.rows(),
            cols: grid.cols(),
            owners: vec![None; grid.len()],
        }
    }

    /// Team owning `cell`, if any.
    pub fn owner(&self, cell: Cell) -> Option<usize> {
        self.index_of(cell).and_then(|i| self.owners[i])
    }

    /// Team owning the cell at a flat row-major index.
    #[inline]
    pub(crate) fn owner_at(&self, index: usize) -> Option<usize> {
        self.owners[index]
    }

    /// Give the cell at `index` to `team` if nobody owns it yet.
    ///
    /// Returns `false` (and changes nothing) if the cell was already owned.
    #[inline]
    pub(crate) fn claim(&mut self, index: usize, team: usize) -> bool {
        match self.owners[index] {
            Some(_) => false,
            None => {
                self.owners[index] = Some(team);
                true
            }
        }
    }

    /// Number of claimed cells.
    pub fn claimed(&self) -> usize {
        self.owners.iter().filter(|o| o.is_some()).count()
    }

    /// Render as a grid: team `t` becomes `t + 1` (saturating at
    /// `i32::MAX`), unclaimed cells 0.
    pub fn to_grid(&self) -> Grid {
        let values = self
            .owners
            .iter()
            .map(|o| o.map_or(0, one_based_label))
            .collect();
        Grid::new(self.rows, self.cols, values).unwrap_or_default()
    }

    fn index_of(&self, cell: Cell) -> Option<usize> {
        let in_bounds = cell.row >= 0
            && cell.col >= 0
            && (cell.row as u64) < self.rows as u64
            && (cell.col as u64) < self.cols as u64;
        in_bounds.then(|| cell.row as usize * self.cols + cell.col as usize)
    }
}
