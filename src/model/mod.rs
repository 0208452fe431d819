//! Shared problem representation.
//!
//! Every strategy consumes a [`Problem`] (capacity plus an ordered item list)
//! and produces a [`KnapsackResult`]. Bound-based strategies additionally
//! require the item list to be in unit-value-descending order, which
//! [`Problem::sorted_by_unit_value`] provides.

mod item;
mod problem;
mod result;

pub use item::{sort_by_unit_value, Item};
pub use problem::Problem;
pub use result::KnapsackResult;
