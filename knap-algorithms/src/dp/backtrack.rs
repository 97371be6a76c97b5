use super::table::{Dimensions, KeepFlags};
use knap_challenges::Item;

/// Walks the keep flags from the full-budget corner back to layer 0 and
/// returns the selected ids in ascending order.
///
/// `keep` must come from a `build` over the same `items`, `capacity` and
/// `max_volume`; anything else is a caller bug and panics.
pub fn reconstruct(
    items: &[Item],
    keep: &KeepFlags,
    capacity: usize,
    max_volume: usize,
) -> Vec<i64> {
    assert_eq!(
        keep.dimensions(),
        Dimensions::new(items.len(), capacity, max_volume),
        "keep flags were built for a different catalog or budget"
    );

    let mut remaining_weight = capacity;
    let mut remaining_volume = max_volume;
    let mut selected = Vec::new();
    for i in (1..=items.len()).rev() {
        if keep.get(i, remaining_weight, remaining_volume) {
            let item = &items[i - 1];
            selected.push(item.id);
            remaining_weight -= item.weight;
            remaining_volume -= item.volume;
        }
    }

    selected.sort_unstable();
    selected
}
