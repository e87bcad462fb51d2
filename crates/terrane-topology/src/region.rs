//! Geometric cell selections and shape measurements.
//!
//! None of these wrap: they work in plain grid coordinates.

use std::collections::{HashSet, VecDeque};
use std::ops::RangeInclusive;

use crate::{Cell, Direction, Grid};

/// In-bounds cells within Euclidean `radius` of `center`, row-major.
///
/// A negative radius selects nothing. `center` itself may lie off the grid,
/// and any radius or centre is accepted without overflow.
pub fn cells_within_circle(grid: &Grid, center: Cell, radius: i64) -> Vec<Cell> {
    if radius < 0 || grid.is_empty() {
        return Vec::new();
    }

    let (Some(rows), Some(cols)) = (
        clip_window(center.row, radius, grid.rows()),
        clip_window(center.col, radius, grid.cols()),
    ) else {
        return Vec::new();
    };
    let radius_sq = u128::from(radius.unsigned_abs()).pow(2);

    let mut cells = Vec::new();
    for row in rows {
        for col in cols.clone() {
            let cell = Cell::new(row, col);
            if cell.distance_squared(&center) <= radius_sq {
                cells.push(cell);
            }
        }
    }
    cells
}

/// The part of `[center - radius, center + radius]` inside `[0, extent)`.
fn clip_window(center: i64, radius: i64, extent: usize) -> Option<RangeInclusive<i64>> {
    let lo = (i128::from(center) - i128::from(radius)).max(0);
    let hi = (i128::from(center) + i128::from(radius)).min(extent as i128 - 1);
    if lo > hi {
        return None;
    }
    Some(i64::try_from(lo).ok()?..=i64::try_from(hi).ok()?)
}

/// Cells inside the axis-aligned ellipse centred on the grid's centre.
///
/// `radius_h` spans columns and `radius_v` spans rows. Non-positive radii
/// select nothing.
pub fn select_oval(grid: &Grid, radius_h: i64, radius_v: i64) -> Vec<Cell> {
    if radius_h <= 0 || radius_v <= 0 || grid.is_empty() {
        return Vec::new();
    }

    let center_col = (grid.cols() as f64 - 1.0) / 2.0;
    let center_row = (grid.rows() as f64 - 1.0) / 2.0;
    let rh_sq = (radius_h as f64).powi(2);
    let rv_sq = (radius_v as f64).powi(2);

    // Casts truncate toward zero and saturate; the ellipse test trims the box.
    let min_row = ((center_row - radius_v as f64) as i64).max(0);
    let max_row = ((center_row + radius_v as f64) as i64).min(grid.rows() as i64 - 1);
    let min_col = ((center_col - radius_h as f64) as i64).max(0);
    let max_col = ((center_col + radius_h as f64) as i64).min(grid.cols() as i64 - 1);

    let mut cells = Vec::new();
    for row in min_row..=max_row {
        for col in min_col..=max_col {
            let dx = col as f64 - center_col;
            let dy = row as f64 - center_row;
            if (dx * dx) / rh_sq + (dy * dy) / rv_sq <= 1.0 {
                cells.push(Cell::new(row, col));
            }
        }
    }
    cells
}

/// True if `cells` form a single 4-connected region.
///
/// An empty slice is not contiguous. Duplicates are ignored.
pub fn is_contiguous(cells: &[Cell]) -> bool {
    let Some(&start) = cells.first() else {
        return false;
    };

    let members: HashSet<Cell> = cells.iter().copied().collect();
    let mut visited = HashSet::with_capacity(members.len());
    let mut queue = VecDeque::new();
    visited.insert(start);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        for dir in Direction::ALL {
            let next = current + dir.offset();
            if members.contains(&next) && visited.insert(next) {
                queue.push_back(next);
            }
        }
    }

    visited.len() == members.len()
}

/// Distance between the lowest and highest row among `cells`.
///
/// Fewer than two cells span nothing.
pub fn row_span(cells: &[Cell]) -> u64 {
    span(cells.iter().map(|c| c.row), cells.len())
}

/// Distance between the leftmost and rightmost column among `cells`.
pub fn col_span(cells: &[Cell]) -> u64 {
    span(cells.iter().map(|c| c.col), cells.len())
}

fn span(values: impl Iterator<Item = i64>, count: usize) -> u64 {
    if count < 2 {
        return 0;
    }
    let (min, max) = values.fold((i64::MAX, i64::MIN), |(lo, hi), v| (lo.min(v), hi.max(v)));
    max.abs_diff(min)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circle_radius_zero_is_center() {
        let grid = Grid::filled(5, 5, 0).unwrap();
        assert_eq!(
            cells_within_circle(&grid, Cell::new(2, 2), 0),
            vec![Cell::new(2, 2)]
        );
    }

    #[test]
    fn circle_radius_one_is_plus_shape() {
        let grid = Grid::filled(5, 5, 0).unwrap();
        let cells = cells_within_circle(&grid, Cell::new(2, 2), 1);
        assert_eq!(
            cells,
            vec![
                Cell::new(1, 2),
                Cell::new(2, 1),
                Cell::new(2, 2),
                Cell::new(2, 3),
                Cell::new(3, 2),
            ]
        );
    }

    #[test]
    fn circle_clipped_at_edges() {
        let grid = Grid::filled(5, 5, 0).unwrap();
        let cells = cells_within_circle(&grid, Cell::ORIGIN, 1);
        assert_eq!(cells, vec![Cell::new(0, 0), Cell::new(0, 1), Cell::new(1, 0)]);
        assert!(cells_within_circle(&grid, Cell::ORIGIN, -1).is_empty());
    }

    #[test]
    fn circle_with_huge_radius_is_clipped_box() {
        let grid = Grid::filled(3, 3, 0).unwrap();
        let all: Vec<Cell> = grid.cells().collect();
        assert_eq!(cells_within_circle(&grid, Cell::new(1, 1), 4_000_000_000), all);
        assert_eq!(cells_within_circle(&grid, Cell::new(1, 1), i64::MAX), all);
        assert_eq!(
            cells_within_circle(&grid, Cell::new(-4_000_000_000, 1), 5_000_000_000),
            all
        );
        // The window never reaches the grid.
        assert!(cells_within_circle(&grid, Cell::new(i64::MIN, 0), i64::MAX).is_empty());
        assert!(cells_within_circle(&grid, Cell::new(i64::MAX, i64::MAX), 10).is_empty());
    }

    #[test]
    fn oval_with_huge_radii_covers_grid() {
        let grid = Grid::filled(3, 3, 0).unwrap();
        assert_eq!(select_oval(&grid, 4_000_000_000, 4_000_000_000).len(), 9);
        assert_eq!(select_oval(&grid, i64::MAX, i64::MAX).len(), 9);
    }

    #[test]
    fn oval_covers_whole_small_grid() {
        let grid = Grid::filled(3, 3, 0).unwrap();
        // Centre (1, 1); corners sit at normalised distance 1/4 + 1/4.
        let cells = select_oval(&grid, 2, 2);
        assert_eq!(cells.len(), 9);
    }

    #[test]
    fn oval_is_axis_aligned() {
        let grid = Grid::filled(5, 9, 0).unwrap();
        let cells = select_oval(&grid, 4, 1);
        assert!(cells.contains(&Cell::new(2, 0)));
        assert!(cells.contains(&Cell::new(2, 8)));
        assert!(cells.contains(&Cell::new(1, 4)));
        assert!(!cells.contains(&Cell::new(0, 4)));
        assert!(!cells.contains(&Cell::new(1, 0)));
    }

    #[test]
    fn oval_rejects_non_positive_radii() {
        let grid = Grid::filled(3, 3, 0).unwrap();
        assert!(select_oval(&grid, 0, 2).is_empty());
        assert!(select_oval(&grid, 2, -1).is_empty());
        assert!(select_oval(&Grid::empty(), 2, 2).is_empty());
    }

    #[test]
    fn contiguity() {
        assert!(!is_contiguous(&[]));
        assert!(is_contiguous(&[Cell::new(4, 4)]));
        assert!(is_contiguous(&[
            Cell::new(0, 0),
            Cell::new(0, 1),
            Cell::new(1, 1),
        ]));
        // Diagonal contact does not connect.
        assert!(!is_contiguous(&[Cell::new(0, 0), Cell::new(1, 1)]));
        assert!(is_contiguous(&[Cell::new(0, 0), Cell::new(0, 0)]));
    }

    #[test]
    fn spans() {
        let cells = [Cell::new(3, -2), Cell::new(-1, 5), Cell::new(0, 0)];
        assert_eq!(row_span(&cells), 4);
        assert_eq!(col_span(&cells), 7);
        assert_eq!(row_span(&cells[..1]), 0);
        assert_eq!(col_span(&[]), 0);
    }
}
