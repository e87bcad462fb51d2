//! Terrane command-line front end
//!
//! Load an integer grid from a text file, run one query and print the
//! resulting regions as a label matrix (region `i` printed as `i + 1`).

mod grid_file;

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use terrane_regions::{territory_map, ExpansionConfig, RegionQuery};
use terrane_topology::{Grid, ValueRange, Wrap};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::grid_file::{parse_cell, parse_grid, render_labels};

#[derive(Parser, Debug)]
#[command(name = "terrane", version, about = "Island, border and territory queries over integer grids")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug)]
struct Common {
    /// Grid file: one row per line, whitespace-separated integers
    grid: PathBuf,

    /// Lowest valid value (inclusive)
    #[arg(long, default_value_t = i32::MIN, allow_hyphen_values = true)]
    min: i32,

    /// Highest valid value (inclusive)
    #[arg(long, default_value_t = i32::MAX, allow_hyphen_values = true)]
    max: i32,

    /// Wrap columns (left edge meets right edge)
    #[arg(long)]
    wrap_h: bool,

    /// Wrap rows (top edge meets bottom edge)
    #[arg(long)]
    wrap_v: bool,
}

impl Common {
    fn range(&self) -> ValueRange {
        ValueRange::new(self.min, self.max)
    }

    fn wrap(&self) -> Wrap {
        Wrap::new(self.wrap_h, self.wrap_v)
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Label connected islands of valid cells
    Islands {
        #[command(flatten)]
        common: Common,
    },
    /// Label the border cells of each island
    Borders {
        #[command(flatten)]
        common: Common,

        /// Border depth in cells
        #[arg(long, default_value_t = 1, allow_hyphen_values = true)]
        thickness: i64,
    },
    /// Grow competing territories from seed cells
    Territories {
        #[command(flatten)]
        common: Common,

        /// Seed cell as ROW,COL; repeat once per team
        #[arg(long = "seed", value_name = "ROW,COL", allow_hyphen_values = true)]
        seeds: Vec<String>,

        /// Seed for the tie-break generator
        #[arg(long, default_value_t = 42)]
        rng_seed: u64,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let (grid, regions) = match &cli.command {
        Command::Islands { common } => {
            let grid = load(common)?;
            let islands = query(common).islands(&grid);
            (grid, islands)
        }
        Command::Borders { common, thickness } => {
            let grid = load(common)?;
            let borders = query(common).borders(&grid, *thickness);
            (grid, borders)
        }
        Command::Territories {
            common,
            seeds,
            rng_seed,
        } => {
            let grid = load(common)?;
            let seeds = seeds
                .iter()
                .map(|s| parse_cell(s))
                .collect::<Result<Vec<_>>>()?;
            let config = ExpansionConfig {
                range: common.range(),
                wrap: common.wrap(),
                rng_seed: *rng_seed,
            };
            let expansion = config.expand(&grid, &seeds);
            info!(
                teams = expansion.seeds.len(),
                dropped = seeds.len() - expansion.seeds.len(),
                rounds = expansion.rounds,
                "territories grown"
            );
            (grid, expansion.territories)
        }
    };

    info!(regions = regions.len(), "query complete");
    print!(
        "{}",
        render_labels(&territory_map(&regions, grid.rows(), grid.cols()))
    );
    Ok(())
}

fn query(common: &Common) -> RegionQuery {
    RegionQuery {
        range: common.range(),
        wrap: common.wrap(),
    }
}

fn load(common: &Common) -> Result<Grid> {
    let text = fs::read_to_string(&common.grid)
        .with_context(|| format!("reading {}", common.grid.display()))?;
    parse_grid(&text).with_context(|| format!("parsing {}", common.grid.display()))
}
