//! Result fields, console summary and the textual result file.
//!
//! The result file layout:
//!
//! ```text
//! ID	W	V
//! [1]	2	3
//! [2]	3	4
//!
//! LoadRate: 100.0000%
//! TotalWeight: 5/5
//! TotalValue: 7
//! ```
//!
//! Branch-and-bound adds a `MaxDepth of Solution Tree: <level>` line before
//! `LoadRate`; greedy adds a `W/V` column with the unit value.

use std::collections::BTreeMap;
use std::io::{self, Write};

use crate::error::{KnapsackError, Result};
use crate::model::{Item, KnapsackResult};

/// Columns of the item listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListingStyle {
    /// `[id]\tw\tv`.
    #[default]
    Plain,
    /// `[id]\tw\tv\tu` with the unit value to three decimals.
    WithUnitValue,
}

/// Everything a consumer is shown about a finished solve.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    /// One listing line per selected item, each newline-terminated.
    pub output: String,

    /// Load rate in percent, four decimals.
    pub load_rate: String,

    pub total_value: u64,

    pub total_weight: u64,

    pub capacity: u64,

    /// Level of the node the selection was read from (branch-and-bound).
    pub max_depth: Option<usize>,

    style: ListingStyle,
}

impl Report {
    pub fn new(result: &KnapsackResult, capacity: u64, style: ListingStyle) -> Self {
        let output = result
            .selected
            .iter()
            .map(|item| listing_line(item, style) + "\n")
            .collect();
        Self {
            output,
            load_rate: format!("{:.4}", result.load_rate(capacity)),
            total_value: result.total_value,
            total_weight: result.total_weight,
            capacity,
            max_depth: None,
            style,
        }
    }

    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// The named result fields: `Output`, `LoadRate`, `TotalValue` and
    /// `TotalWeight`.
    pub fn fields(&self) -> BTreeMap<&'static str, String> {
        BTreeMap::from([
            ("Output", self.output.clone()),
            ("LoadRate", self.load_rate.clone()),
            ("TotalValue", self.total_value.to_string()),
            ("TotalWeight", self.total_weight.to_string()),
        ])
    }

    /// Console trailer shown after the listing.
    pub fn summary_lines(&self) -> Vec<String> {
        let mut lines = vec![format!("Knapsack Capacity:{}", self.capacity)];
        if let Some(depth) = self.max_depth {
            lines.push(format!("MaxDepth of Solution Tree:{depth}"));
        }
        lines.push(format!(
            "TotalW:{} Load-Rate:{}%",
            self.total_weight, self.load_rate
        ));
        lines.push(format!("TotalV:{}", self.total_value));
        lines
    }

    /// Writes the result file layout to `out`.
    pub fn write_to<W: Write>(&self, mut out: W) -> io::Result<()> {
        match self.style {
            ListingStyle::Plain => writeln!(out, "ID\tW\tV")?,
            ListingStyle::WithUnitValue => writeln!(out, "ID\tW\tV\tW/V")?,
        }
        writeln!(out, "{}", self.output)?;
        if let Some(depth) = self.max_depth {
            writeln!(out, "MaxDepth of Solution Tree: {depth}")?;
        }
        writeln!(out, "LoadRate: {}%", self.load_rate)?;
        writeln!(out, "TotalWeight: {}/{}", self.total_weight, self.capacity)?;
        writeln!(out, "TotalValue: {}", self.total_value)?;
        out.flush()
    }
}

fn listing_line(item: &Item, style: ListingStyle) -> String {
    match style {
        ListingStyle::Plain => format!("[{}]\t{}\t{}", item.id(), item.weight(), item.value()),
        ListingStyle::WithUnitValue => format!(
            "[{}]\t{}\t{}\t{:.3}",
            item.id(),
            item.weight(),
            item.value(),
            item.unit_value()
        ),
    }
}

/// Reads the item listing back out of a result file.
///
/// Skips the `ID` header and stops at the first blank line. Line numbers in
/// errors count every line of `text`, starting at 1.
pub fn parse_listing(text: &str) -> Result<Vec<Item>> {
    let mut items = Vec::new();
    for (index, raw) in text.lines().enumerate() {
        let line_no = index + 1;
        let line = raw.trim();
        if line.is_empty() {
            break;
        }
        if line.starts_with("ID") {
            continue;
        }

        let mut fields = line.split('\t');
        let (Some(id), Some(weight), Some(value)) = (fields.next(), fields.next(), fields.next())
        else {
            return Err(KnapsackError::malformed(line_no, "expected [id]\\tweight\\tvalue"));
        };
        let Some(id) = id.strip_prefix('[').and_then(|s| s.strip_suffix(']')) else {
            return Err(KnapsackError::malformed(line_no, format!("bad item id {id:?}")));
        };
        let weight = weight
            .parse::<u64>()
            .map_err(|e| KnapsackError::malformed(line_no, format!("weight: {e}")))?;
        let value = value
            .parse::<u64>()
            .map_err(|e| KnapsackError::malformed(line_no, format!("value: {e}")))?;
        items.push(Item::new(id, weight, value));
    }
    Ok(items)
}
