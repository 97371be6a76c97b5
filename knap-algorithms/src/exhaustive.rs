use crate::dp::Cell;
use knap_challenges::{total_value, Item, KnapsackError, KnapsackResult, Solution};

/// Largest catalog the subset enumeration accepts.
pub const MAX_EXHAUSTIVE_ITEMS: usize = 24;

/// Best cell and its subset, found by trying every subset.
///
/// Uses the same order as the DP cells, so both agree on value, count and
/// id sum for any catalog.
pub fn best_subset(
    items: &[Item],
    capacity: usize,
    max_volume: usize,
) -> KnapsackResult<(Cell, Vec<i64>)> {
    if items.len() > MAX_EXHAUSTIVE_ITEMS {
        return Err(KnapsackError::invalid_input(format!(
            "exhaustive search is limited to {} items, got {}",
            MAX_EXHAUSTIVE_ITEMS,
            items.len()
        )));
    }
    total_value(items)?;

    let mut best = (Cell::ZERO, 0u32);
    for mask in 1u32..(1u32 << items.len()) {
        let mut cell = Cell::ZERO;
        let mut weight = 0usize;
        let mut volume = 0usize;
        let mut fits = true;
        for (idx, item) in items.iter().enumerate() {
            if mask & (1 << idx) == 0 {
                continue;
            }
            weight = weight.saturating_add(item.weight);
            volume = volume.saturating_add(item.volume);
            if weight > capacity || volume > max_volume {
                fits = false;
                break;
            }
            cell = cell.with_item(item);
        }
        if fits && cell > best.0 {
            best = (cell, mask);
        }
    }

    let mut ids: Vec<i64> = items
        .iter()
        .enumerate()
        .filter(|(idx, _)| best.1 & (1 << idx) != 0)
        .map(|(_, item)| item.id)
        .collect();
    ids.sort_unstable();
    Ok((best.0, ids))
}

pub fn solve(items: &[Item], capacity: usize, max_volume: usize) -> KnapsackResult<Solution> {
    let (cell, ids) = best_subset(items, capacity, max_volume)?;
    log::info!(
        "Exhaustive search over {} subsets: value {}, {} items",
        1u64 << items.len(),
        cell.value,
        cell.count
    );
    Ok(Solution { items: ids })
}
