use super::cell::Cell;
use knap_challenges::{total_value, Item, KnapsackError, KnapsackResult};

/// Bytes held per table cell: the `Cell` (32 bytes, `i128` aligned) plus its keep flag.
pub const BYTES_PER_CELL: usize = std::mem::size_of::<Cell>() + std::mem::size_of::<bool>();

/// Cells allowed in one table unless the caller configures otherwise.
///
/// At [`BYTES_PER_CELL`] this caps a default table near 528 MiB.
pub const DEFAULT_MAX_TABLE_CELLS: usize = 1 << 24;

/// Extent of a `(item prefix, weight budget, volume budget)` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub num_items: usize,
    pub capacity: usize,
    pub max_volume: usize,
}

impl Dimensions {
    pub fn new(num_items: usize, capacity: usize, max_volume: usize) -> Self {
        Dimensions {
            num_items,
            capacity,
            max_volume,
        }
    }

    fn shape(&self) -> String {
        format!(
            "{} x {} x {}",
            self.num_items as u128 + 1,
            self.capacity as u128 + 1,
            self.max_volume as u128 + 1
        )
    }

    fn allocation_error(&self, reason: impl Into<String>) -> KnapsackError {
        KnapsackError::AllocationError {
            shape: self.shape(),
            reason: reason.into(),
        }
    }

    /// Number of cells in one item layer.
    pub fn layer_len(&self) -> KnapsackResult<usize> {
        self.capacity
            .checked_add(1)
            .zip(self.max_volume.checked_add(1))
            .and_then(|(w, v)| w.checked_mul(v))
            .ok_or_else(|| self.allocation_error("layer size overflows usize"))
    }

    /// Number of cells in the whole table.
    pub fn cell_count(&self) -> KnapsackResult<usize> {
        let layer_len = self.layer_len()?;
        self.num_items
            .checked_add(1)
            .and_then(|layers| layers.checked_mul(layer_len))
            .ok_or_else(|| self.allocation_error("table size overflows usize"))
    }

    /// Flat offset of `(i, w, v)`. Panics when out of range.
    pub fn index(&self, i: usize, w: usize, v: usize) -> usize {
        assert!(
            i <= self.num_items && w <= self.capacity && v <= self.max_volume,
            "({}, {}, {}) is outside a {} table",
            i,
            w,
            v,
            self.shape()
        );
        (i * (self.capacity + 1) + w) * (self.max_volume + 1) + v
    }
}

/// `table[i][w][v]`: best cell over the first `i` items within budgets `(w, v)`.
#[derive(Debug, Clone)]
pub struct Table {
    dims: Dimensions,
    cells: Vec<Cell>,
}

impl Table {
    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    pub fn get(&self, i: usize, w: usize, v: usize) -> &Cell {
        &self.cells[self.dims.index(i, w, v)]
    }

    /// The winning cell for the full catalog and full budgets.
    pub fn best(&self) -> &Cell {
        self.get(
            self.dims.num_items,
            self.dims.capacity,
            self.dims.max_volume,
        )
    }
}

/// `keep[i][w][v]`: whether catalog item `i - 1` is part of `table[i][w][v]`.
#[derive(Debug, Clone)]
pub struct KeepFlags {
    dims: Dimensions,
    flags: Vec<bool>,
}

impl KeepFlags {
    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    pub fn get(&self, i: usize, w: usize, v: usize) -> bool {
        self.flags[self.dims.index(i, w, v)]
    }
}

fn allocate<T: Clone>(dims: &Dimensions, len: usize, fill: T) -> KnapsackResult<Vec<T>> {
    let mut buffer = Vec::new();
    buffer
        .try_reserve_exact(len)
        .map_err(|e| dims.allocation_error(e.to_string()))?;
    buffer.resize(len, fill);
    Ok(buffer)
}

/// Fills the full table under the default cell limit.
pub fn build(
    items: &[Item],
    capacity: usize,
    max_volume: usize,
) -> KnapsackResult<(Table, KeepFlags)> {
    build_with_limit(items, capacity, max_volume, DEFAULT_MAX_TABLE_CELLS)
}

/// Fills the full table, failing with `AllocationError` above `max_cells`.
pub fn build_with_limit(
    items: &[Item],
    capacity: usize,
    max_volume: usize,
    max_cells: usize,
) -> KnapsackResult<(Table, KeepFlags)> {
    total_value(items)?;

    let dims = Dimensions::new(items.len(), capacity, max_volume);
    let layer_len = dims.layer_len()?;
    let len = dims.cell_count()?;
    if len > max_cells {
        return Err(
            dims.allocation_error(format!("{} cells exceed the limit of {}", len, max_cells))
        );
    }
    log::debug!(
        "Allocating {} DP table ({} cells, {} bytes)",
        dims.shape(),
        len,
        len.saturating_mul(BYTES_PER_CELL)
    );

    let mut cells = allocate(&dims, len, Cell::ZERO)?;
    let mut flags = allocate(&dims, len, false)?;
    let stride = max_volume + 1;

    for (i, item) in items.iter().enumerate().map(|(idx, item)| (idx + 1, item)) {
        // Layer i only reads layer i - 1.
        let (done, rest) = cells.split_at_mut(i * layer_len);
        let previous = &done[(i - 1) * layer_len..];
        let current = &mut rest[..layer_len];
        let keep = &mut flags[i * layer_len..(i + 1) * layer_len];

        for w in 0..=capacity {
            for v in 0..=max_volume {
                let at = w * stride + v;
                let skip = previous[at];
                let take = if w >= item.weight && v >= item.volume {
                    Some(previous[(w - item.weight) * stride + (v - item.volume)].with_item(item))
                } else {
                    None
                };
                match take {
                    Some(take) if take > skip => {
                        current[at] = take;
                        keep[at] = true;
                    }
                    _ => current[at] = skip,
                }
            }
        }
    }

    let table = Table { dims, cells };
    log::debug!("Best cell: {:?}", table.best());
    Ok((table, KeepFlags { dims, flags }))
}
