//! Terrane Regions
//!
//! Spatial partitioning of integer grids: islands, borders and territories.
//!
//! # Islands
//!
//! Given an inclusive value range, the valid cells of a grid split into
//! islands, the maximal 4-connected groups of valid cells (wrapping per
//! axis when asked). [`find_islands`] lists them in the row-major order of
//! their first cell, each in flood-fill visitation order.
//!
//! # Borders
//!
//! [`find_borders`] keeps, for each island, the cells within `thickness`
//! steps of something that is not part of a valid region: a non-wrapping
//! grid edge or an invalid cell.
//!
//! # Territories
//!
//! [`expand_territories`] grows competing teams from seed cells, one ring
//! per synchronized round, inside the island each seed sits in. Ties are
//! broken by a single seeded ChaCha8 generator, so identical inputs always
//! produce identical territories.
//!
//! Every operation is total: empty grids, inverted ranges, non-positive
//! thickness and unusable seeds all produce empty results, never errors.

mod borders;
mod components;
mod config;
mod owner;
mod territory;
mod tiebreak;

use terrane_topology::Cell;

pub use borders::{find_borders, is_on_border};
pub use components::{find_islands, label_components, ComponentMap};
pub use config::{ExpansionConfig, RegionQuery};
pub use owner::OwnerMap;
pub use territory::{
    expand_territories, expand_territories_with, surviving_seeds, territory_map, Expansion,
};
pub use tiebreak::{ChaChaTieBreaker, TieBreaker};

/// One island's cells, in visitation order.
pub type Island = Vec<Cell>;

/// One island's border cells, in visitation order.
pub type Border = Vec<Cell>;

/// One team's cells: its seed first, then in claim order.
pub type Territory = Vec<Cell>;
