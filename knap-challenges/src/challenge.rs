use crate::item::Item;
use anyhow::{anyhow, Result};
use rand::{rngs::SmallRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Difficulty {
    pub num_items: usize,
    /// Capacity and volume limit as a percentage of the catalog totals.
    pub budget: u32,
}

/// Selected item ids.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct Solution {
    pub items: Vec<i64>,
}

impl Solution {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }
}

/// Totals of a verified solution.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    pub total_weight: usize,
    pub total_volume: usize,
    pub total_value: u64,
    pub count: usize,
    pub id_sum: i128,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Challenge {
    pub seed: [u8; 32],
    pub difficulty: Difficulty,
    pub capacity: usize,
    pub max_volume: usize,
    pub items: Vec<Item>,
}

impl Challenge {
    /// Wraps a caller supplied catalog.
    pub fn new(capacity: usize, max_volume: usize, items: Vec<Item>) -> Self {
        Challenge {
            seed: [0u8; 32],
            difficulty: Difficulty {
                num_items: items.len(),
                budget: 100,
            },
            capacity,
            max_volume,
            items,
        }
    }

    pub fn generate_instance(seed: &[u8; 32], difficulty: &Difficulty) -> Result<Challenge> {
        if difficulty.budget > 100 {
            return Err(anyhow!(
                "Budget ({}) must be a percentage in [0, 100]",
                difficulty.budget
            ));
        }
        let mut rng = SmallRng::from_seed(seed.clone());

        let items: Vec<Item> = (0..difficulty.num_items)
            .map(|i| Item {
                id: i as i64 + 1,
                weight: rng.gen_range(1..=50),
                volume: rng.gen_range(1..=50),
                value: rng.gen_range(1..=100),
            })
            .collect();

        let total_weight: usize = items.iter().map(|item| item.weight).sum();
        let total_volume: usize = items.iter().map(|item| item.volume).sum();
        let capacity = total_weight * difficulty.budget as usize / 100;
        let max_volume = total_volume * difficulty.budget as usize / 100;

        Ok(Challenge {
            seed: seed.clone(),
            difficulty: difficulty.clone(),
            capacity,
            max_volume,
            items,
        })
    }

    pub fn verify_solution(&self, solution: &Solution) -> Result<Evaluation> {
        // Ids may repeat in the catalog; each selected id consumes the next unused item with it.
        let mut slots: HashMap<i64, Vec<usize>> = HashMap::new();
        for (idx, item) in self.items.iter().enumerate().rev() {
            slots.entry(item.id).or_default().push(idx);
        }

        let mut evaluation = Evaluation {
            total_weight: 0,
            total_volume: 0,
            total_value: 0,
            count: 0,
            id_sum: 0,
        };
        for &id in &solution.items {
            let idx = match slots.get_mut(&id) {
                None => return Err(anyhow!("Item ({}) is not in the catalog", id)),
                Some(free) => free
                    .pop()
                    .ok_or_else(|| anyhow!("Item ({}) selected more times than available", id))?,
            };
            let item = &self.items[idx];
            evaluation.total_weight = evaluation
                .total_weight
                .checked_add(item.weight)
                .ok_or_else(|| anyhow!("Total weight overflows"))?;
            evaluation.total_volume = evaluation
                .total_volume
                .checked_add(item.volume)
                .ok_or_else(|| anyhow!("Total volume overflows"))?;
            evaluation.total_value = evaluation
                .total_value
                .checked_add(item.value)
                .ok_or_else(|| anyhow!("Total value overflows"))?;
            evaluation.count += 1;
            evaluation.id_sum += item.id as i128;
        }

        if evaluation.total_weight > self.capacity {
            return Err(anyhow!(
                "Total weight ({}) exceeded capacity ({})",
                evaluation.total_weight,
                self.capacity
            ));
        }
        if evaluation.total_volume > self.max_volume {
            return Err(anyhow!(
                "Total volume ({}) exceeded max volume ({})",
                evaluation.total_volume,
                self.max_volume
            ));
        }
        Ok(evaluation)
    }
}
