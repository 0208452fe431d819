//! Dynamic Programming (DP).
//!
//! Builds the table `dp[i][w]`: the best value reachable with items `i..n`
//! and capacity `w`, filled from the last item backward, then reads the
//! chosen subset off the table by walking items forward. Items are used in
//! input order; no sorting is needed.
//!
//! Memory is `n * (capacity + 1)` cells, so the table size is capped by
//! [`DpConfig::max_cells`].
//!
//! # References
//!
//! - Bellman (1957), *Dynamic Programming*
//! - Kellerer, Pferschy & Pisinger (2004), *Knapsack Problems*, §2.3

mod config;
mod runner;
mod table;

pub use config::DpConfig;
pub use runner::{DpResult, DpRunner};
pub use table::DpTable;
