mod config;
pub use config::*;
pub mod dp;
pub mod exhaustive;
pub mod greedy;
pub mod weight_only;

use knap_challenges::{Challenge, KnapsackResult, Solution};

/// Runs the configured algorithm against a challenge.
pub fn solve_challenge(challenge: &Challenge, config: &SolverConfig) -> KnapsackResult<Solution> {
    log::debug!(
        "Solving {} items (capacity {}, max volume {}) with {}",
        challenge.items.len(),
        challenge.capacity,
        challenge.max_volume,
        config.algorithm
    );
    let items = &challenge.items;
    match config.algorithm {
        Algorithm::Dp => dp::solve(
            items,
            challenge.capacity,
            challenge.max_volume,
            config.max_table_cells,
        ),
        Algorithm::WeightOnly => {
            weight_only::solve(items, challenge.capacity, config.max_table_cells)
        }
        Algorithm::GreedyValuePerWeight => Ok(greedy::solve(
            items,
            challenge.capacity,
            challenge.max_volume,
            greedy::RatioRule::ValuePerWeight,
        )),
        Algorithm::GreedyValuePerSize => Ok(greedy::solve(
            items,
            challenge.capacity,
            challenge.max_volume,
            greedy::RatioRule::ValuePerSize,
        )),
        Algorithm::Exhaustive => exhaustive::solve(items, challenge.capacity, challenge.max_volume),
    }
}
