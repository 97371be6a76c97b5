//! Ratio-ordered greedy selection.
//!
//! These are approximations: they never revisit a choice and can miss the
//! optimum the exact solver finds.

use knap_challenges::{Item, Solution};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Ratio assigned to items whose denominator is zero, ranking them first.
pub const HUGE_RATIO: f64 = 1e9;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RatioRule {
    /// `value / weight`
    ValuePerWeight,
    /// `value / (weight + volume)`
    ValuePerSize,
}

impl RatioRule {
    pub fn ratio(&self, item: &Item) -> f64 {
        let denom = match self {
            RatioRule::ValuePerWeight => item.weight as f64,
            RatioRule::ValuePerSize => item.weight as f64 + item.volume as f64,
        };
        if denom > 0.0 {
            item.value as f64 / denom
        } else {
            HUGE_RATIO
        }
    }
}

/// Higher ratio first, then higher value, lower weight, lower id.
fn rank(rule: RatioRule, a: &Item, b: &Item) -> Ordering {
    rule.ratio(b)
        .total_cmp(&rule.ratio(a))
        .then_with(|| b.value.cmp(&a.value))
        .then_with(|| a.weight.cmp(&b.weight))
        .then_with(|| a.id.cmp(&b.id))
}

/// Takes items in rank order while they fit both limits.
///
/// Ids are returned in the order they were taken.
pub fn solve(items: &[Item], capacity: usize, max_volume: usize, rule: RatioRule) -> Solution {
    let mut order: Vec<&Item> = items.iter().collect();
    order.sort_by(|a, b| rank(rule, a, b));

    let mut total_weight = 0usize;
    let mut total_volume = 0usize;
    let mut selected = Vec::new();
    for item in order {
        let fits =
            capacity - total_weight >= item.weight && max_volume - total_volume >= item.volume;
        if fits {
            total_weight += item.weight;
            total_volume += item.volume;
            selected.push(item.id);
        }
    }

    log::info!(
        "Greedy ({:?}) took {} of {} items, weight {}/{}, volume {}/{}",
        rule,
        selected.len(),
        items.len(),
        total_weight,
        capacity,
        total_volume,
        max_volume
    );
    Solution { items: selected }
}
