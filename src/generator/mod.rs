//! Random instance generation.
//!
//! Produces problems in the text format [`Problem::parse`] reads, with
//! 1-based item ids. The random source is always passed in, so a seeded
//! RNG reproduces the same instance.
//!
//! # Examples
//!
//! ```
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use u_knapsack::generator::{GeneratorConfig, InstanceGenerator};
//!
//! let config = GeneratorConfig::default().with_items(10, 20);
//! let mut rng = StdRng::seed_from_u64(1);
//! let instance = InstanceGenerator::generate(&config, &mut rng).unwrap();
//! assert!((10..20).contains(&instance.problem().len()));
//! ```

mod config;

pub use config::GeneratorConfig;

use std::fs;
use std::path::Path;

use rand::Rng;

use crate::error::{KnapsackError, Result};
use crate::model::{Item, Problem};

/// A generated problem with its rendered text.
#[derive(Debug, Clone, PartialEq)]
pub struct Instance {
    problem: Problem,
    text: String,
}

impl Instance {
    pub fn problem(&self) -> &Problem {
        &self.problem
    }

    /// The problem in its text format.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// `"<n> <sumW> <sumV> <avgW> <varW> <avgV> <varV>"`, means and
    /// population variances to two decimals.
    pub fn describe(&self) -> String {
        let items = self.problem.items();
        let n = items.len();
        let sum_w: u64 = items.iter().map(Item::weight).sum();
        let sum_v: u64 = items.iter().map(Item::value).sum();
        let (avg_w, var_w) = mean_variance(items.iter().map(Item::weight), n);
        let (avg_v, var_v) = mean_variance(items.iter().map(Item::value), n);
        format!("{n} {sum_w} {sum_v} {avg_w:.2} {var_w:.2} {avg_v:.2} {var_v:.2}")
    }

    /// Saves the problem text to `path`, replacing any existing file.
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<()> {
        fs::write(path, &self.text)?;
        Ok(())
    }
}

fn mean_variance(values: impl Iterator<Item = u64> + Clone, n: usize) -> (f64, f64) {
    if n == 0 {
        return (0.0, 0.0);
    }
    let mean = values.clone().map(|v| v as f64).sum::<f64>() / n as f64;
    let variance = values.map(|v| (v as f64 - mean).powi(2)).sum::<f64>() / n as f64;
    (mean, variance)
}

/// Draws random instances.
pub struct InstanceGenerator;

impl InstanceGenerator {
    /// Generates one instance from `config`, drawing from `rng`.
    pub fn generate<R: Rng>(config: &GeneratorConfig, rng: &mut R) -> Result<Instance> {
        config
            .validate()
            .map_err(KnapsackError::InfeasibleConfiguration)?;

        let n = rng.random_range(config.min_items..config.max_items);
        let items: Vec<Item> = (1..=n)
            .map(|id| {
                let weight = rng.random_range(config.min_weight..config.max_weight);
                let value = rng.random_range(config.min_value..config.max_value);
                Item::new(id.to_string(), weight, value)
            })
            .collect();
        let total_weight: u64 = items.iter().map(Item::weight).sum();
        let capacity = (total_weight as f64 * config.capacity_ratio).round() as u64;

        let problem = Problem::new(capacity, items)?;
        let text = problem.to_text();
        Ok(Instance { problem, text })
    }
}
