//! Seeded territory growth.
//!
//! Every surviving seed is a team. Teams grow outward one cell per round,
//! all at the same speed, and only through valid cells of the component
//! their seed sits in. A round is a full barrier: every claim for the
//! round is gathered before any is resolved, and every resolution lands
//! before the next round looks for claims.
//!
//! # Seed filtering
//!
//! Applied in this order, keeping input order among survivors:
//! 1. A coordinate appearing more than once is dropped entirely (every copy).
//! 2. Out-of-bounds seeds are dropped.
//! 3. Seeds on invalid cells are dropped.
//!
//! Survivors are numbered `0..k`; that number is the team id and the index
//! of the team's territory in the result.
//!
//! # Conflict resolution
//!
//! Components are processed in ascending id. Within a round, contested
//! cells are resolved in row-major order; a cell claimed by one team goes
//! to it outright, a cell claimed by several goes to the claimant picked by
//! the [`TieBreaker`] from the ascending list of claimant ids. The same
//! tie-breaker is shared across every round and every component.

use std::collections::{BTreeMap, HashMap};

use terrane_topology::{Cell, Grid, Topology, ValueRange, Wrap};
use tracing::{debug, trace};

use crate::components::walk_components;
use crate::{ChaChaTieBreaker, ExpansionConfig, OwnerMap, Territory, TieBreaker};

/// Outcome of one expansion run.
#[derive(Debug, Clone)]
pub struct Expansion {
    /// One territory per surviving seed, seed first, then in claim order.
    pub territories: Vec<Territory>,
    /// The surviving seeds; index is team id.
    pub seeds: Vec<Cell>,
    /// Final ownership of every cell.
    pub owners: OwnerMap,
    /// Total resolution rounds across all components.
    pub rounds: usize,
}

/// Grow territories from `seeds` using the default ChaCha8 tie-breaker.
///
/// Returns an empty list when no seed survives filtering.
///
/// ```
/// use terrane_regions::expand_territories;
/// use terrane_topology::{Cell, Grid, ValueRange, Wrap};
///
/// let grid = Grid::filled(3, 3, 1).unwrap();
/// let seeds = [Cell::new(0, 0), Cell::new(0, 0), Cell::new(2, 2)];
/// let territories = expand_territories(&grid, &seeds, ValueRange::ALL, Wrap::NONE, 42);
///
/// // Both copies of (0, 0) are discarded; the lone survivor takes everything.
/// assert_eq!(territories.len(), 1);
/// assert_eq!(territories[0][0], Cell::new(2, 2));
/// assert_eq!(territories[0].len(), 9);
/// ```
pub fn expand_territories(
    grid: &Grid,
    seeds: &[Cell],
    range: ValueRange,
    wrap: Wrap,
    rng_seed: u64,
) -> Vec<Territory> {
    ExpansionConfig {
        range,
        wrap,
        rng_seed,
    }
    .territories(grid, seeds)
}

/// Grow territories with a caller-supplied tie-breaker.
pub fn expand_territories_with<T>(
    grid: &Grid,
    seeds: &[Cell],
    range: ValueRange,
    wrap: Wrap,
    tie_breaker: &mut T,
) -> Vec<Territory>
where
    T: TieBreaker + ?Sized,
{
    run(&Topology::new(grid, range, wrap), seeds, tie_breaker).territories
}

impl ExpansionConfig {
    /// See [`expand_territories`].
    pub fn territories(&self, grid: &Grid, seeds: &[Cell]) -> Vec<Territory> {
        self.expand(grid, seeds).territories
    }

    /// Run the expansion and keep the ownership map and round count.
    pub fn expand(&self, grid: &Grid, seeds: &[Cell]) -> Expansion {
        let mut tie_breaker = ChaChaTieBreaker::from_seed(self.rng_seed);
        run(
            &Topology::new(grid, self.range, self.wrap),
            seeds,
            &mut tie_breaker,
        )
    }
}

/// Apply duplicate, bounds and validity filtering to `seeds`.
///
/// The returned order is the input order of the survivors.
pub fn surviving_seeds(topology: &Topology<'_>, seeds: &[Cell]) -> Vec<Cell> {
    let mut occurrences: HashMap<Cell, usize> = HashMap::with_capacity(seeds.len());
    for &seed in seeds {
        *occurrences.entry(seed).or_default() += 1;
    }

    seeds
        .iter()
        .copied()
        .filter(|seed| occurrences[seed] == 1)
        .filter(|&seed| topology.in_bounds(seed))
        .filter(|&seed| topology.is_valid(seed))
        .collect()
}

fn run<T>(topology: &Topology<'_>, seeds: &[Cell], tie_breaker: &mut T) -> Expansion
where
    T: TieBreaker + ?Sized,
{
    let grid = topology.grid();
    let seeds = surviving_seeds(topology, seeds);
    let mut owners = OwnerMap::new(grid);

    if seeds.is_empty() {
        debug!("no seed survived filtering");
        return Expansion {
            territories: Vec::new(),
            seeds,
            owners,
            rounds: 0,
        };
    }

    let components = walk_components(topology, |_, _| {});

    // Component id -> teams seeded in it, both ascending.
    let mut teams_by_component: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
    for (team, &seed) in seeds.iter().enumerate() {
        if let Some(component) = components.label(seed) {
            teams_by_component.entry(component).or_default().push(team);
        }
    }

    let mut territories: Vec<Territory> = vec![Vec::new(); seeds.len()];
    let mut rounds = 0;

    for (&component, teams) in &teams_by_component {
        let mut frontier: Vec<(usize, usize)> = Vec::with_capacity(teams.len());
        for &team in teams {
            let seed = seeds[team];
            let Some(index) = grid.index_of(seed) else {
                continue;
            };
            if owners.claim(index, team) {
                territories[team].push(seed);
                frontier.push((index, team));
            }
        }

        let mut component_rounds = 0;
        while !frontier.is_empty() {
            // Flat index order is row-major order.
            let mut claims: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
            for &(index, team) in &frontier {
                for next in topology.neighbors(grid.cell_at(index)) {
                    let Some(next_index) = grid.index_of(next) else {
                        continue;
                    };
                    // A label implies validity.
                    if components.label_at(next_index) != Some(component)
                        || owners.owner_at(next_index).is_some()
                    {
                        continue;
                    }
                    let claimants = claims.entry(next_index).or_default();
                    if !claimants.contains(&team) {
                        claimants.push(team);
                    }
                }
            }

            if claims.is_empty() {
                break;
            }
            component_rounds += 1;

            let mut next_frontier = Vec::with_capacity(claims.len());
            for (index, mut claimants) in claims {
                claimants.sort_unstable();
                let winner = match claimants.as_slice() {
                    [only] => *only,
                    contested => {
                        let winner = contested[tie_breaker.pick(contested.len())];
                        trace!(
                            cell = %grid.cell_at(index),
                            claimants = ?contested,
                            winner,
                            "resolved contested cell"
                        );
                        winner
                    }
                };

                let claimed = owners.claim(index, winner);
                debug_assert!(claimed, "cell claimed twice");
                territories[winner].push(grid.cell_at(index));
                next_frontier.push((index, winner));
            }
            frontier = next_frontier;
        }

        debug!(
            component,
            teams = teams.len(),
            rounds = component_rounds,
            "expanded component"
        );
        rounds += component_rounds;
    }

    debug!(
        teams = seeds.len(),
        components = teams_by_component.len(),
        claimed = owners.claimed(),
        rounds,
        "expansion complete"
    );

    Expansion {
        territories,
        seeds,
        owners,
        rounds,
    }
}

/// Paint cell lists onto a `rows × cols` grid.
///
/// List `i` is painted with `i + 1`; cells in no list stay 0. Cells off the
/// grid are skipped, and a cell in several lists keeps the last one. Labels
/// saturate at `i32::MAX`.
pub fn territory_map(regions: &[Vec<Cell>], rows: usize, cols: usize) -> Grid {
    let Ok(canvas) = Grid::filled(rows, cols, 0) else {
        return Grid::empty();
    };
    let mut values = vec![0; canvas.len()];

    for (i, region) in regions.iter().enumerate() {
        for &cell in region {
            if let Some(index) = canvas.index_of(cell) {
                values[index] = one_based_label(i);
            }
        }
    }
    Grid::new(rows, cols, values).unwrap_or(canvas)
}

/// `i + 1` as a grid value, saturating at `i32::MAX`.
pub(crate) fn one_based_label(i: usize) -> i32 {
    i32::try_from(i).map_or(i32::MAX, |i| i.saturating_add(1))
}
