//! Thickness-aware island border extraction.
//!
//! A cell is on the border when some probe `t` cells away (for `t` in
//! `1..=thickness`) in some cardinal direction falls off a non-wrapping
//! edge or lands on an invalid cell. Membership is decided during the same
//! flood fill that enumerates the island, so border order follows
//! visitation order.

use terrane_topology::{Cell, Direction, Grid, Topology, ValueRange, Wrap};
use tracing::debug;

use crate::components::walk_components;
use crate::{Border, RegionQuery};

/// True if `cell` lies within `thickness` steps of the edge of its island.
///
/// `thickness <= 0` performs no probes, so no cell qualifies. Probes stop
/// at the grid's longer extent: past it a non-wrapping axis is already off
/// the grid and a wrapping one only revisits cells.
pub fn is_on_border(topology: &Topology<'_>, cell: Cell, thickness: i64) -> bool {
    let grid = topology.grid();
    let reach = i64::try_from(grid.rows().max(grid.cols())).unwrap_or(i64::MAX);
    (1..=thickness.min(reach)).any(|distance| {
        Direction::ALL.into_iter().any(|dir| {
            topology
                .step(cell, dir, distance)
                .map_or(true, |probe| !topology.is_valid(probe))
        })
    })
}

/// Find the border cells of every island, `thickness` cells deep.
///
/// The result is parallel to [`find_islands`](crate::find_islands): entry
/// `i` holds the border of island `i`, possibly empty.
pub fn find_borders(grid: &Grid, range: ValueRange, wrap: Wrap, thickness: i64) -> Vec<Border> {
    RegionQuery { range, wrap }.borders(grid, thickness)
}

impl RegionQuery {
    /// See [`find_borders`].
    pub fn borders(&self, grid: &Grid, thickness: i64) -> Vec<Border> {
        let topology = Topology::new(grid, self.range, self.wrap);
        let mut borders: Vec<Border> = Vec::new();

        walk_components(&topology, |id, cell| {
            if id == borders.len() {
                borders.push(Vec::new());
            }
            if is_on_border(&topology, cell, thickness) {
                borders[id].push(cell);
            }
        });

        debug!(
            islands = borders.len(),
            border_cells = borders.iter().map(Vec::len).sum::<usize>(),
            thickness,
            "extracted borders"
        );
        borders
    }
}
