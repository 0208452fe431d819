//! Fractional-relaxation upper bound.
//!
//! Over items sorted by unit value (descending), filling the remaining
//! capacity greedily with whole items and then a fraction of the first item
//! that does not fit yields the best value any completion could reach if
//! items were divisible. No integral completion can beat it, which is what
//! makes it safe for pruning.

use crate::model::Item;

/// Upper-bound oracle over a fixed, unit-value-sorted item slice.
#[derive(Debug, Clone, Copy)]
pub struct FractionalBound<'a> {
    items: &'a [Item],
    capacity: u64,
}

impl<'a> FractionalBound<'a> {
    /// `items` must already be in unit-value-descending order.
    pub fn new(items: &'a [Item], capacity: u64) -> Self {
        debug_assert!(
            items
                .windows(2)
                .all(|w| w[0].cmp_unit_value_desc(&w[1]).is_le()),
            "items must be sorted by unit value"
        );
        Self { items, capacity }
    }

    /// Bound on the value reachable from a partial selection that has decided
    /// items `0..cursor`, holding `acc_value` in `acc_weight`.
    ///
    /// Non-increasing in `cursor` for fixed accumulated value and weight.
    pub fn bound(&self, cursor: usize, acc_value: u64, acc_weight: u64) -> f64 {
        let mut space = self.capacity.saturating_sub(acc_weight);
        let mut whole = acc_value;
        let mut next = cursor;

        while let Some(item) = self.items.get(next) {
            if item.weight() > space {
                let fraction = item.value() as f64 / item.weight() as f64 * space as f64;
                return whole as f64 + fraction;
            }
            space -= item.weight();
            whole += item.value();
            next += 1;
        }
        whole as f64
    }
}
