//! Property tests for islands, borders and territories.

use std::collections::HashSet;

use proptest::prelude::*;
use terrane_regions::{
    expand_territories, find_borders, find_islands, label_components, ExpansionConfig,
};
use terrane_topology::{Cell, Grid, Topology, ValueRange, Wrap};

fn grid_strategy() -> impl Strategy<Value = Grid> {
    (1usize..9, 1usize..9).prop_flat_map(|(rows, cols)| {
        prop::collection::vec(0i32..4, rows * cols)
            .prop_map(move |values| Grid::new(rows, cols, values).unwrap())
    })
}

fn wrap_strategy() -> impl Strategy<Value = Wrap> {
    (any::<bool>(), any::<bool>()).prop_map(|(h, v)| Wrap::new(h, v))
}

fn range_strategy() -> impl Strategy<Value = ValueRange> {
    (0i32..4, 0i32..4).prop_map(|(a, b)| ValueRange::new(a, b))
}

fn seeds_strategy() -> impl Strategy<Value = Vec<Cell>> {
    prop::collection::vec((-1i64..10, -1i64..10).prop_map(Cell::from), 0..8)
}

proptest! {
    #[test]
    fn islands_partition_valid_cells(
        grid in grid_strategy(),
        range in range_strategy(),
        wrap in wrap_strategy(),
    ) {
        let topo = Topology::new(&grid, range, wrap);
        let islands = find_islands(&grid, range, wrap);

        let mut seen = HashSet::new();
        for island in &islands {
            prop_assert!(!island.is_empty());
            for &cell in island {
                prop_assert!(seen.insert(cell), "cell {} in two islands", cell);
            }
        }

        let valid: HashSet<Cell> = grid.cells().filter(|&c| topo.is_valid(c)).collect();
        prop_assert_eq!(seen, valid);
    }

    #[test]
    fn islands_are_ordered_by_first_cell(
        grid in grid_strategy(),
        range in range_strategy(),
        wrap in wrap_strategy(),
    ) {
        let islands = find_islands(&grid, range, wrap);
        for island in &islands {
            prop_assert_eq!(island.iter().min(), island.first());
        }
        for pair in islands.windows(2) {
            prop_assert!(pair[0][0] < pair[1][0]);
        }
    }

    #[test]
    fn borders_are_subsets_of_islands(
        grid in grid_strategy(),
        range in range_strategy(),
        wrap in wrap_strategy(),
        thickness in -1i64..4,
    ) {
        let islands = find_islands(&grid, range, wrap);
        let borders = find_borders(&grid, range, wrap, thickness);
        prop_assert_eq!(islands.len(), borders.len());

        for (island, border) in islands.iter().zip(&borders) {
            let members: HashSet<_> = island.iter().collect();
            for cell in border {
                prop_assert!(members.contains(cell));
            }
            if thickness <= 0 {
                prop_assert!(border.is_empty());
            }
        }
    }

    #[test]
    fn thicker_borders_contain_thinner(
        grid in grid_strategy(),
        range in range_strategy(),
        wrap in wrap_strategy(),
    ) {
        let thin = find_borders(&grid, range, wrap, 1);
        let thick = find_borders(&grid, range, wrap, 2);
        for (a, b) in thin.iter().zip(&thick) {
            let wide: HashSet<_> = b.iter().collect();
            for cell in a {
                prop_assert!(wide.contains(cell));
            }
        }
    }

    #[test]
    fn expansion_is_deterministic(
        grid in grid_strategy(),
        range in range_strategy(),
        wrap in wrap_strategy(),
        seeds in seeds_strategy(),
        rng_seed in any::<u64>(),
    ) {
        let a = expand_territories(&grid, &seeds, range, wrap, rng_seed);
        let b = expand_territories(&grid, &seeds, range, wrap, rng_seed);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn territories_are_disjoint_and_contained(
        grid in grid_strategy(),
        range in range_strategy(),
        wrap in wrap_strategy(),
        seeds in seeds_strategy(),
        rng_seed in any::<u64>(),
    ) {
        let config = ExpansionConfig { range, wrap, rng_seed };
        let expansion = config.expand(&grid, &seeds);
        let components = label_components(&grid, range, wrap);

        prop_assert_eq!(expansion.territories.len(), expansion.seeds.len());

        let mut owned = HashSet::new();
        for (team, territory) in expansion.territories.iter().enumerate() {
            let seed = expansion.seeds[team];
            prop_assert_eq!(territory.first(), Some(&seed));

            let home = components.label(seed);
            prop_assert!(home.is_some());
            for &cell in territory {
                prop_assert!(owned.insert(cell), "cell {} owned twice", cell);
                prop_assert_eq!(components.label(cell), home);
                prop_assert_eq!(expansion.owners.owner(cell), Some(team));
            }
        }

        // Seeded components are connected, so they end up fully owned.
        let seeded: HashSet<_> = expansion.seeds.iter().filter_map(|&s| components.label(s)).collect();
        for cell in grid.cells() {
            let expect_owned = components.label(cell).is_some_and(|c| seeded.contains(&c));
            prop_assert_eq!(owned.contains(&cell), expect_owned);
        }
    }
}
