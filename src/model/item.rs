//! Item value object and unit-value ordering.

use std::cmp::Ordering;
use std::fmt;

/// A candidate item: an identifier, a positive weight and a value.
///
/// Items are immutable once loaded. The unit value (`value / weight`) is
/// derived on demand rather than stored.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    id: String,
    weight: u64,
    value: u64,
}

impl Item {
    /// Creates an item. Weight positivity is checked by [`Problem`](super::Problem).
    pub fn new(id: impl Into<String>, weight: u64, value: u64) -> Self {
        Self {
            id: id.into(),
            weight,
            value,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn weight(&self) -> u64 {
        self.weight
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    /// Value per unit of weight.
    pub fn unit_value(&self) -> f64 {
        self.value as f64 / self.weight as f64
    }

    /// Orders `self` before `other` when it has the higher unit value.
    ///
    /// Compares `v1 * w2` against `v2 * w1` in 128-bit integers, so ties are
    /// exact and the ordering is total.
    pub fn cmp_unit_value_desc(&self, other: &Item) -> Ordering {
        let lhs = self.value as u128 * other.weight as u128;
        let rhs = other.value as u128 * self.weight as u128;
        rhs.cmp(&lhs)
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Item[{}] W:{} V:{}", self.id, self.weight, self.value)
    }
}

/// Sorts items by unit value, highest first.
///
/// The sort is stable: items with equal unit value keep their input order.
pub fn sort_by_unit_value(items: &mut [Item]) {
    items.sort_by(Item::cmp_unit_value_desc);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_value() {
        let item = Item::new("a", 4, 5);
        assert!((item.unit_value() - 1.25).abs() < 1e-12);
    }

    #[test]
    fn test_sort_descending() {
        let mut items = vec![
            Item::new("3", 4, 5),
            Item::new("1", 2, 3),
            Item::new("4", 5, 6),
            Item::new("2", 3, 4),
        ];
        sort_by_unit_value(&mut items);
        let ids: Vec<&str> = items.iter().map(Item::id).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn test_sort_is_stable_on_ties() {
        let mut items = vec![
            Item::new("a", 2, 4),
            Item::new("b", 1, 2),
            Item::new("c", 3, 9),
            Item::new("d", 4, 8),
        ];
        sort_by_unit_value(&mut items);
        let ids: Vec<&str> = items.iter().map(Item::id).collect();
        assert_eq!(ids, vec!["c", "a", "b", "d"]);
    }

    #[test]
    fn test_display() {
        assert_eq!(Item::new("7", 2, 3).to_string(), "Item[7] W:2 V:3");
    }
}
