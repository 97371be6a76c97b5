use crate::dp;
use knap_challenges::{Item, KnapsackResult, Solution};

/// Exact knapsack on weight alone.
///
/// Runs the two-dimensional engine with the volume axis collapsed: every item
/// is treated as volume 0 against a volume limit of 0, so the same tie-break
/// order applies.
pub fn solve(items: &[Item], capacity: usize, max_cells: usize) -> KnapsackResult<Solution> {
    let flattened: Vec<Item> = items
        .iter()
        .map(|item| Item {
            volume: 0,
            ..*item
        })
        .collect();
    dp::solve(&flattened, capacity, 0, max_cells)
}
