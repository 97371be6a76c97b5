use crate::error::{KnapsackError, KnapsackResult};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Item {
    pub id: i64,
    pub weight: usize,
    pub volume: usize,
    pub value: u64,
}

impl Item {
    /// Builds an item from raw integers, rejecting negative sizes or values.
    pub fn new(id: i64, weight: i64, volume: i64, value: i64) -> KnapsackResult<Self> {
        Ok(Item {
            id,
            weight: size("weight", id, weight)?,
            volume: size("volume", id, volume)?,
            value: non_negative("value", id, value)?,
        })
    }
}

fn non_negative(field: &str, id: i64, raw: i64) -> KnapsackResult<u64> {
    u64::try_from(raw).map_err(|_| {
        KnapsackError::invalid_input(format!("item {} has negative {} ({})", id, field, raw))
    })
}

fn size(field: &str, id: i64, raw: i64) -> KnapsackResult<usize> {
    usize::try_from(non_negative(field, id, raw)?).map_err(|_| {
        KnapsackError::invalid_input(format!("item {} has {} ({}) out of range", id, field, raw))
    })
}

/// Field layout of one item in a flat argument list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemLayout {
    /// `id weight volume value`
    WeightVolume,
    /// `id weight value`, volume fixed to zero
    WeightOnly,
}

impl ItemLayout {
    pub fn fields_per_item(&self) -> usize {
        match self {
            ItemLayout::WeightVolume => 4,
            ItemLayout::WeightOnly => 3,
        }
    }
}

/// Parses a signed integer argument, naming the argument on failure.
pub fn parse_int(name: &str, raw: &str) -> KnapsackResult<i64> {
    raw.trim().parse::<i64>().map_err(|e| {
        KnapsackError::invalid_input(format!("{} '{}' is not an integer: {}", name, raw, e))
    })
}

/// Parses a limit or count that must be zero or positive.
pub fn parse_non_negative(name: &str, raw: &str) -> KnapsackResult<usize> {
    let parsed = parse_int(name, raw)?;
    if parsed < 0 {
        return Err(KnapsackError::invalid_input(format!(
            "{} must not be negative (got {})",
            name, parsed
        )));
    }
    usize::try_from(parsed)
        .map_err(|_| KnapsackError::invalid_input(format!("{} ({}) is too large", name, parsed)))
}

/// Reads `num_items` items from a flat list of fields, preserving input order.
///
/// Fields beyond the declared items are ignored.
pub fn parse_items<S: AsRef<str>>(
    num_items: usize,
    fields: &[S],
    layout: ItemLayout,
) -> KnapsackResult<Vec<Item>> {
    let width = layout.fields_per_item();
    let expected = num_items.checked_mul(width).ok_or_else(|| {
        KnapsackError::invalid_input(format!("item count {} is too large", num_items))
    })?;
    if fields.len() < expected {
        return Err(KnapsackError::invalid_input(format!(
            "expected {} item fields for {} items, got {}",
            expected,
            num_items,
            fields.len()
        )));
    }
    if fields.len() > expected {
        log::warn!(
            "Ignoring {} surplus item fields after {} items",
            fields.len() - expected,
            num_items
        );
    }

    let mut items = Vec::with_capacity(num_items);
    for chunk in fields[..expected].chunks(width) {
        let id = parse_int("id", chunk[0].as_ref())?;
        let item = match layout {
            ItemLayout::WeightVolume => Item::new(
                id,
                parse_int("weight", chunk[1].as_ref())?,
                parse_int("volume", chunk[2].as_ref())?,
                parse_int("value", chunk[3].as_ref())?,
            )?,
            ItemLayout::WeightOnly => Item::new(
                id,
                parse_int("weight", chunk[1].as_ref())?,
                0,
                parse_int("value", chunk[2].as_ref())?,
            )?,
        };
        items.push(item);
    }
    Ok(items)
}

/// Sum of item values, or `InvalidInput` when it cannot be represented.
pub fn total_value(items: &[Item]) -> KnapsackResult<u64> {
    items.iter().try_fold(0u64, |acc, item| {
        acc.checked_add(item.value).ok_or_else(|| {
            KnapsackError::invalid_input("sum of item values overflows a 64-bit accumulator")
        })
    })
}
