use knap_challenges::Item;
use std::cmp::Ordering;

/// Best known selection for one `(prefix, weight, volume)` state.
///
/// Cells are totally ordered: a greater cell has more value, or equal value
/// with fewer items, or equal value and count with a lower id sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cell {
    pub value: u64,
    pub count: usize,
    pub id_sum: i128,
}

impl Cell {
    pub const ZERO: Cell = Cell {
        value: 0,
        count: 0,
        id_sum: 0,
    };

    /// This selection extended by `item`.
    pub fn with_item(&self, item: &Item) -> Cell {
        Cell {
            value: self.value + item.value,
            count: self.count + 1,
            id_sum: self.id_sum + item.id as i128,
        }
    }
}

impl Ord for Cell {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value
            .cmp(&other.value)
            .then_with(|| other.count.cmp(&self.count))
            .then_with(|| other.id_sum.cmp(&self.id_sum))
    }
}

impl PartialOrd for Cell {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
