//! Branch-and-Bound (BnB).
//!
//! Explores the binary include/exclude tree over items sorted by unit value,
//! pruning every exclude branch whose fractional-relaxation bound cannot
//! reach the best value found so far. One engine serves both expansion
//! orders; the [`FrontierPolicy`] picks between a LIFO stack and a
//! best-first priority queue.
//!
//! Nodes live in a [`NodeArena`] and point to their parent by index, so
//! the selected items are recovered by walking from the best node to the
//! root once the frontier is exhausted.
//!
//! # References
//!
//! - Horowitz & Sahni (1974), "Computing Partitions with Applications to
//!   the Knapsack Problem"
//! - Kellerer, Pferschy & Pisinger (2004), *Knapsack Problems*, ch. 2

mod config;
mod node;
mod runner;

pub use config::{BnbConfig, FrontierPolicy};
pub use node::{NodeArena, NodeId, SearchNode};
pub use runner::{BnbResult, BnbRunner};
