mod backtrack;
mod cell;
mod table;

pub use backtrack::reconstruct;
pub use cell::Cell;
pub use table::{
    build, build_with_limit, Dimensions, KeepFlags, Table, BYTES_PER_CELL, DEFAULT_MAX_TABLE_CELLS,
};

use knap_challenges::{Item, KnapsackResult, Solution};

/// Exact weight and volume constrained selection.
pub fn solve(
    items: &[Item],
    capacity: usize,
    max_volume: usize,
    max_cells: usize,
) -> KnapsackResult<Solution> {
    let (table, keep) = build_with_limit(items, capacity, max_volume, max_cells)?;
    let ids = reconstruct(items, &keep, capacity, max_volume);
    let best = table.best();
    log::info!(
        "Selected {} of {} items, value {} (id sum {})",
        ids.len(),
        items.len(),
        best.value,
        best.id_sum
    );
    Ok(Solution { items: ids })
}
