//! Connected-component discovery over the validity mask.
//!
//! Components are found by scanning the grid row-major and flood filling
//! (breadth first) from every valid cell not yet labeled. Component ids
//! are assigned in discovery order starting at 0, and each component's
//! cells are reported in BFS visitation order.

use terrane_topology::{Cell, Grid, Topology, ValueRange, Wrap};
use tracing::debug;

use crate::{Island, RegionQuery};

/// Per-cell component labels for one grid.
///
/// Every valid cell carries exactly one id; invalid cells carry none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentMap {
    rows: usize,
    cols: usize,
    labels: Vec<Option<usize>>,
    count: usize,
}

impl ComponentMap {
    /// Number of rows in the labeled grid.
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns in the labeled grid.
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Number of components found.
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Component id of `cell`, or `None` if the cell is invalid or off the grid.
    pub fn label(&self, cell: Cell) -> Option<usize> {
        self.index_of(cell).and_then(|i| self.labels[i])
    }

    /// Component id by flat row-major index.
    #[inline]
    pub(crate) fn label_at(&self, index: usize) -> Option<usize> {
        self.labels[index]
    }

    fn index_of(&self, cell: Cell) -> Option<usize> {
        let in_bounds = cell.row >= 0
            && cell.col >= 0
            && (cell.row as u64) < self.rows as u64
            && (cell.col as u64) < self.cols as u64;
        in_bounds.then(|| cell.row as usize * self.cols + cell.col as usize)
    }
}

/// Label every component and report each visited cell to `visit`.
///
/// `visit` receives `(component_id, cell)` in BFS order, component by
/// component. The first call for a given id is always its starting cell,
/// i.e. the row-major-first cell of that component.
pub(crate) fn walk_components<F>(topology: &Topology<'_>, mut visit: F) -> ComponentMap
where
    F: FnMut(usize, Cell),
{
    let grid = topology.grid();
    let mut labels: Vec<Option<usize>> = vec![None; grid.len()];
    let mut queue: Vec<usize> = Vec::new();
    let mut count = 0;

    for start in 0..grid.len() {
        if labels[start].is_some() || !topology.is_valid(grid.cell_at(start)) {
            continue;
        }

        let id = count;
        count += 1;

        // Index-based FIFO: `head` walks forward, nothing is ever popped.
        queue.clear();
        queue.push(start);
        labels[start] = Some(id);
        let mut head = 0;

        while head < queue.len() {
            let cell = grid.cell_at(queue[head]);
            head += 1;
            visit(id, cell);

            for next in topology.valid_neighbors(cell) {
                let Some(index) = grid.index_of(next) else {
                    continue;
                };
                if labels[index].is_none() {
                    labels[index] = Some(id);
                    queue.push(index);
                }
            }
        }
    }

    ComponentMap {
        rows: grid.rows(),
        cols: grid.cols(),
        labels,
        count,
    }
}

/// Label the connected components of the cells whose value lies in `range`.
pub fn label_components(grid: &Grid, range: ValueRange, wrap: Wrap) -> ComponentMap {
    let topology = Topology::new(grid, range, wrap);
    walk_components(&topology, |_, _| {})
}

/// Find every island: each maximal 4-connected set of valid cells.
///
/// Islands are ordered by the row-major position of their first cell, and
/// each island lists its cells in flood-fill visitation order.
pub fn find_islands(grid: &Grid, range: ValueRange, wrap: Wrap) -> Vec<Island> {
    RegionQuery { range, wrap }.islands(grid)
}

impl RegionQuery {
    /// See [`find_islands`].
    pub fn islands(&self, grid: &Grid) -> Vec<Island> {
        let topology = Topology::new(grid, self.range, self.wrap);
        let mut islands: Vec<Island> = Vec::new();

        let map = walk_components(&topology, |id, cell| {
            if id == islands.len() {
                islands.push(Vec::new());
            }
            islands[id].push(cell);
        });

        debug!(
            rows = grid.rows(),
            cols = grid.cols(),
            islands = map.count(),
            "labeled islands"
        );
        islands
    }

    /// See [`label_components`].
    pub fn components(&self, grid: &Grid) -> ComponentMap {
        label_components(grid, self.range, self.wrap)
    }
}
