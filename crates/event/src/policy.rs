use serde::{Deserialize, Serialize};

use crate::rollup::ItemTotal;

/// When an item counts as overstocked.
///
/// Both conditions must hold: more than `quantity_threshold` units on hand
/// across the event, carried by at least `min_trucks` trucks.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverstockPolicy {
    pub quantity_threshold: u64,
    pub min_trucks: usize,
}

impl OverstockPolicy {
    pub const DEFAULT_QUANTITY_THRESHOLD: u64 = 50;
    pub const DEFAULT_MIN_TRUCKS: usize = 2;

    pub fn flags(&self, total: &ItemTotal<'_>) -> bool {
        total.quantity > self.quantity_threshold && total.food_trucks.len() >= self.min_trucks
    }
}

impl Default for OverstockPolicy {
    fn default() -> Self {
        Self {
            quantity_threshold: Self::DEFAULT_QUANTITY_THRESHOLD,
            min_trucks: Self::DEFAULT_MIN_TRUCKS,
        }
    }
}
