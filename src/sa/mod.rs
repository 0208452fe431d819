//! Simulated Annealing (SA) over inclusion bit-vectors.
//!
//! Each move forces two random items into the knapsack and drops them again,
//! second first, while the load exceeds the capacity, so a move acts as an
//! add, a swap or a no-op. Moves that beat the global best or the last
//! accepted state are always taken; others pass a Metropolis test against
//! the last accepted state, and rejected moves roll back to it.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Lundy & Mees (1986), "Convergence of an Annealing Algorithm"

mod config;
mod runner;

pub use config::{CoolingSchedule, SaConfig};
pub use runner::{SaResult, SaRunner};
