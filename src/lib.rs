//! 0/1 knapsack solver suite.
//!
//! Five strategies over one problem model:
//!
//! - **Branch-and-Bound (BnB)**: exact tree search over include/exclude
//!   decisions, pruned by a fractional-relaxation bound, with a LIFO or
//!   best-first frontier.
//! - **Backtracking**: the same tree and bound, driven by recursion.
//! - **Dynamic Programming (DP)**: exact `items x capacity` table with
//!   CSV export.
//! - **Greedy**: unit-value ordering, fast and not optimal.
//! - **Simulated Annealing (SA)**: randomized local search with a
//!   never-regressing best, reproducible under a seeded RNG.
//!
//! Each strategy has its own `Runner` returning a result with search
//! statistics. [`KnapsackSolver`] puts them behind one
//! initialize / solve / report front-end.
//!
//! # Architecture
//!
//! `model` and `error` are the foundation; `bound` and `frontier` are the
//! building blocks the exact searches share; the strategy modules depend
//! only on those; `solver` and `report` sit on top. The crate logs through
//! the `log` facade and never installs a logger.

pub mod backtrack;
pub mod bnb;
pub mod bound;
pub mod dp;
pub mod error;
pub mod frontier;
pub mod generator;
pub mod greedy;
pub mod model;
pub mod monitor;
pub mod report;
pub mod sa;
pub mod solver;

pub use error::{KnapsackError, Result};
pub use model::{Item, KnapsackResult, Problem};
pub use solver::{KnapsackSolver, Strategy};
