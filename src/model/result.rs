//! The result record every strategy produces.

use std::time::Duration;

use super::item::Item;

/// Selected items with their totals and the wall-clock cost of the search.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KnapsackResult {
    /// The chosen items, in the order the strategy picked them.
    pub selected: Vec<Item>,

    /// Sum of the selected values.
    pub total_value: u64,

    /// Sum of the selected weights.
    pub total_weight: u64,

    /// Time spent inside the strategy.
    pub elapsed: Duration,
}

impl KnapsackResult {
    /// Builds a result, deriving both totals from `selected`.
    pub fn from_items(selected: Vec<Item>, elapsed: Duration) -> Self {
        let total_value = selected.iter().map(Item::value).sum();
        let total_weight = selected.iter().map(Item::weight).sum();
        Self {
            selected,
            total_value,
            total_weight,
            elapsed,
        }
    }

    /// An empty selection.
    pub fn empty(elapsed: Duration) -> Self {
        Self::from_items(Vec::new(), elapsed)
    }

    /// Elapsed time in fractional milliseconds.
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }

    /// Percentage of `capacity` used. A zero capacity reports 0.
    pub fn load_rate(&self, capacity: u64) -> f64 {
        if capacity == 0 {
            0.0
        } else {
            self.total_weight as f64 / capacity as f64 * 100.0
        }
    }
}
