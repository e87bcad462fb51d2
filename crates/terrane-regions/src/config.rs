//! Query parameters.

use terrane_topology::{ValueRange, Wrap};

/// Parameters for island labeling and border extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RegionQuery {
    /// Inclusive band of values counted as valid
    pub range: ValueRange,
    /// Per-axis wrapping
    pub wrap: Wrap,
}

/// Configuration for territory expansion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExpansionConfig {
    /// Inclusive band of values counted as valid
    pub range: ValueRange,
    /// Per-axis wrapping
    pub wrap: Wrap,
    /// Seed for the tie-break generator
    pub rng_seed: u64,
}

impl Default for ExpansionConfig {
    fn default() -> Self {
        Self {
            range: ValueRange::ALL,
            wrap: Wrap::NONE,
            rng_seed: 42,
        }
    }
}

impl From<ExpansionConfig> for RegionQuery {
    fn from(config: ExpansionConfig) -> Self {
        Self {
            range: config.range,
            wrap: config.wrap,
        }
    }
}
