use crate::dp::DEFAULT_MAX_TABLE_CELLS;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// Exact solver over weight and volume.
    #[default]
    Dp,
    /// Exact solver over weight, volume ignored.
    WeightOnly,
    /// Approximate, ordered by `value / weight`.
    GreedyValuePerWeight,
    /// Approximate, ordered by `value / (weight + volume)`.
    GreedyValuePerSize,
    /// Exact, by enumerating every subset of a small catalog.
    Exhaustive,
}

impl Algorithm {
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Dp,
        Algorithm::WeightOnly,
        Algorithm::GreedyValuePerWeight,
        Algorithm::GreedyValuePerSize,
        Algorithm::Exhaustive,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Dp => "dp",
            Algorithm::WeightOnly => "weight_only",
            Algorithm::GreedyValuePerWeight => "greedy_value_per_weight",
            Algorithm::GreedyValuePerSize => "greedy_value_per_size",
            Algorithm::Exhaustive => "exhaustive",
        }
    }

    /// Whether the algorithm always returns an optimal selection.
    pub fn is_exact(&self) -> bool {
        !matches!(
            self,
            Algorithm::GreedyValuePerWeight | Algorithm::GreedyValuePerSize
        )
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|algorithm| algorithm.name() == s)
            .ok_or_else(|| anyhow::anyhow!("Unknown algorithm '{}'", s))
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct SolverConfig {
    pub algorithm: Algorithm,
    /// Upper bound on DP table cells before failing with an allocation error.
    pub max_table_cells: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            algorithm: Algorithm::default(),
            max_table_cells: DEFAULT_MAX_TABLE_CELLS,
        }
    }
}
