//! Backtracking.
//!
//! The same include/exclude tree and pruning rule as [`crate::bnb`], driven
//! by depth-first recursion instead of an explicit frontier. Only the
//! current root-to-node path exists at any time; recursion depth equals the
//! item count.

mod runner;

pub use runner::{BacktrackResult, BacktrackRunner};
