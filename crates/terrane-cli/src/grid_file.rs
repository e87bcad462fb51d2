//! Plain-text grid files.
//!
//! One row per line, values separated by whitespace. Blank lines and lines
//! starting with `#` are ignored.

use anyhow::{Context, Result};
use terrane_topology::{Cell, Grid};

/// Parse grid text into a [`Grid`].
pub fn parse_grid(text: &str) -> Result<Grid> {
    let mut rows = Vec::new();
    for (line_no, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let row = line
            .split_whitespace()
            .map(|token| {
                token
                    .parse::<i32>()
                    .with_context(|| format!("line {}: invalid value {:?}", line_no + 1, token))
            })
            .collect::<Result<Vec<_>>>()?;
        rows.push(row);
    }
    Ok(Grid::from_rows(rows)?)
}

/// Parse a `row,col` pair.
pub fn parse_cell(text: &str) -> Result<Cell> {
    let (row, col) = text
        .split_once(',')
        .with_context(|| format!("expected ROW,COL, got {:?}", text))?;
    Ok(Cell::new(
        row.trim().parse().with_context(|| format!("bad row in {:?}", text))?,
        col.trim().parse().with_context(|| format!("bad column in {:?}", text))?,
    ))
}

/// Render a label grid: 0 as `.`, everything else right-aligned.
pub fn render_labels(labels: &Grid) -> String {
    let width = labels
        .values()
        .iter()
        .map(|v| v.to_string().len())
        .max()
        .unwrap_or(1);

    let mut out = String::new();
    for row in 0..labels.rows() {
        let line: Vec<String> = (0..labels.cols())
            .map(|col| {
                let value = labels.get(Cell::new(row as i64, col as i64)).unwrap_or(0);
                if value == 0 {
                    format!("{:>width$}", ".")
                } else {
                    format!("{:>width$}", value)
                }
            })
            .collect();
        out.push_str(&line.join(" "));
        out.push('\n');
    }
    out
}
