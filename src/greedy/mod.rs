//! Greedy by unit value.
//!
//! Scans items in unit-value-descending order, placing every unplaced item
//! that still fits, and repeats full scans until one places nothing. Fast,
//! never infeasible, and not guaranteed optimal.

mod runner;

pub use runner::{GreedyResult, GreedyRunner};
