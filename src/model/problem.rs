//! Problem description and its text format.
//!
//! ```text
//! line 1: capacity
//! line 2: item count N
//! lines 3..N+2: "<index>\t<weight>\t<value>"
//! ```
//!
//! Blank lines (and `\r`) are ignored, so Windows line endings parse the
//! same as Unix ones.

use std::fmt::Write as _;
use std::str::FromStr;

use super::item::{sort_by_unit_value, Item};
use crate::error::{KnapsackError, Result};

/// A 0/1 knapsack instance.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Problem {
    capacity: u64,
    items: Vec<Item>,
}

impl Problem {
    /// Creates a problem, rejecting any item whose weight is zero and any
    /// item set whose total weight or total value overflows `u64`.
    ///
    /// Every partial sum an engine forms is bounded by those totals.
    pub fn new(capacity: u64, items: Vec<Item>) -> Result<Self> {
        if let Some(item) = items.iter().find(|item| item.weight() == 0) {
            return Err(KnapsackError::InfeasibleConfiguration(format!(
                "item {} has non-positive weight 0",
                item.id()
            )));
        }
        checked_total(&items, Item::weight, "weight")?;
        checked_total(&items, Item::value, "value")?;
        Ok(Self { capacity, items })
    }

    /// Parses the newline-delimited problem text.
    pub fn parse(text: &str) -> Result<Self> {
        let mut lines = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .enumerate()
            .map(|(i, line)| (i + 1, line));

        let (_, first) = lines
            .next()
            .ok_or_else(|| KnapsackError::malformed(1, "missing capacity line"))?;
        let capacity = parse_int(first, 1, "capacity")?;
        if capacity < 0 {
            return Err(KnapsackError::InfeasibleConfiguration(format!(
                "capacity must be non-negative, got {capacity}"
            )));
        }

        let (_, second) = lines
            .next()
            .ok_or_else(|| KnapsackError::malformed(2, "missing item count line"))?;
        let count = parse_int(second, 2, "item count")?;
        if count < 0 {
            return Err(KnapsackError::malformed(
                2,
                format!("item count must be non-negative, got {count}"),
            ));
        }
        let count = count as usize;

        // The count is untrusted; the buffer grows with the lines actually seen.
        let mut items = Vec::new();
        for (line_no, line) in lines {
            if items.len() == count {
                return Err(KnapsackError::malformed(
                    line_no,
                    format!("expected {count} item lines, found more"),
                ));
            }
            items.push(parse_item(line, line_no)?);
        }
        if items.len() != count {
            return Err(KnapsackError::malformed(
                items.len() + 3,
                format!("expected {count} item lines, found {}", items.len()),
            ));
        }

        Self::new(capacity as u64, items)
    }

    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns a copy whose items are in unit-value-descending order.
    pub fn sorted_by_unit_value(&self) -> Problem {
        let mut items = self.items.clone();
        sort_by_unit_value(&mut items);
        Problem {
            capacity: self.capacity,
            items,
        }
    }

    /// Renders the problem back into its text format.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", self.capacity);
        let _ = writeln!(out, "{}", self.items.len());
        for item in &self.items {
            let _ = writeln!(out, "{}\t{}\t{}", item.id(), item.weight(), item.value());
        }
        out
    }
}

impl FromStr for Problem {
    type Err = KnapsackError;

    fn from_str(s: &str) -> Result<Self> {
        Problem::parse(s)
    }
}

fn parse_int(field: &str, line: usize, what: &str) -> Result<i64> {
    field
        .parse::<i64>()
        .map_err(|e| KnapsackError::malformed(line, format!("{what} `{field}`: {e}")))
}

fn checked_total(items: &[Item], field: fn(&Item) -> u64, what: &str) -> Result<u64> {
    items
        .iter()
        .try_fold(0u64, |total, item| total.checked_add(field(item)))
        .ok_or_else(|| {
            KnapsackError::InfeasibleConfiguration(format!("total item {what} overflows u64"))
        })
}

fn parse_item(line: &str, line_no: usize) -> Result<Item> {
    let fields: Vec<&str> = line.split('\t').map(str::trim).collect();
    let [id, weight, value] = fields[..] else {
        return Err(KnapsackError::malformed(
            line_no,
            format!(
                "item line needs tab-separated index, weight and value, found {} fields",
                fields.len()
            ),
        ));
    };
    let weight = parse_int(weight, line_no, "weight")?;
    let value = parse_int(value, line_no, "value")?;
    if weight <= 0 {
        return Err(KnapsackError::InfeasibleConfiguration(format!(
            "item {id} has non-positive weight {weight}"
        )));
    }
    if value < 0 {
        return Err(KnapsackError::InfeasibleConfiguration(format!(
            "item {id} has negative value {value}"
        )));
    }
    Ok(Item::new(id, weight as u64, value as u64))
}
