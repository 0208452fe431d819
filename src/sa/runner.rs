//! SA execution loop.

use std::time::Instant;

use log::{debug, trace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::config::{CoolingSchedule, SaConfig};
use crate::error::{KnapsackError, Result};
use crate::model::{Item, KnapsackResult, Problem};
use crate::monitor::{NoOpMonitor, SolveMonitor};

/// Result of a Simulated Annealing run.
#[derive(Debug, Clone)]
pub struct SaResult {
    /// The best selection found, in input order.
    pub solution: KnapsackResult,

    /// Total number of moves attempted.
    pub iterations: usize,

    /// Final temperature when the algorithm stopped.
    pub final_temperature: f64,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of moves that raised the global best.
    pub improving_moves: usize,

    /// Best value after each temperature step, starting from the empty
    /// knapsack.
    pub value_history: Vec<u64>,
}

/// Executes the Simulated Annealing algorithm.
pub struct SaRunner;

impl SaRunner {
    /// Runs SA with an RNG seeded from `config.seed`, or from entropy when
    /// no seed is set.
    pub fn run(problem: &Problem, config: &SaConfig) -> Result<SaResult> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };
        Self::run_with_rng(problem, config, &mut rng, &mut NoOpMonitor)
    }

    /// Runs SA drawing every random decision from `rng`.
    ///
    /// `config.seed` is ignored; the caller owns the random source.
    pub fn run_with_rng<R: Rng>(
        problem: &Problem,
        config: &SaConfig,
        rng: &mut R,
        monitor: &mut dyn SolveMonitor,
    ) -> Result<SaResult> {
        config
            .validate()
            .map_err(KnapsackError::InfeasibleConfiguration)?;

        let start = Instant::now();
        let items = problem.items();
        let n = items.len();

        let mut current = Packing::empty(n);
        let mut reference = current.clone();
        let mut best = current.clone();

        let mut temperature = config.initial_temperature;
        let mut total_iterations = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;
        let mut value_history = vec![0];

        let inner_iters = match config.cooling {
            CoolingSchedule::LundyMees { .. } => 1,
            CoolingSchedule::Geometric { .. } => config.iterations_per_temperature,
        };

        while n > 0 && temperature > config.min_temperature {
            for _ in 0..inner_iters {
                if config.max_iterations > 0 && total_iterations >= config.max_iterations {
                    break;
                }
                total_iterations += 1;

                let (first, second) = pick_pair(n, rng);
                current.insert(items, first);
                current.insert(items, second);
                if current.weight > problem.capacity() {
                    current.remove(items, second);
                }
                if current.weight > problem.capacity() {
                    current.remove(items, first);
                }

                if current.value > best.value {
                    best.clone_from(&current);
                    reference.clone_from(&current);
                    accepted_moves += 1;
                    improving_moves += 1;
                    trace!("sa: best value {} at T={temperature:.4}", best.value);
                    monitor.on_improvement(best.value, best.weight);
                    continue;
                }

                let delta = current.value as f64 - reference.value as f64;
                let accept = delta > 0.0
                    || (delta / temperature).exp() > rng.random_range(0.0..1.0);
                if accept {
                    reference.clone_from(&current);
                    accepted_moves += 1;
                } else {
                    current.clone_from(&reference);
                }
            }

            value_history.push(best.value);

            if config.max_iterations > 0 && total_iterations >= config.max_iterations {
                break;
            }

            temperature = config.cooling.cool(temperature);
        }

        let selected: Vec<Item> = items
            .iter()
            .zip(&best.taken)
            .filter(|(_, &taken)| taken)
            .map(|(item, _)| item.clone())
            .collect();
        let solution = KnapsackResult::from_items(selected, start.elapsed());
        debug!(
            "sa: value {} after {} iterations, final T={:.4}",
            solution.total_value, total_iterations, temperature
        );

        Ok(SaResult {
            solution,
            iterations: total_iterations,
            final_temperature: temperature,
            accepted_moves,
            improving_moves,
            value_history,
        })
    }
}

/// Two distinct indices in `0..n`, or the single index twice when `n == 1`.
fn pick_pair<R: Rng>(n: usize, rng: &mut R) -> (usize, usize) {
    if n < 2 {
        return (0, 0);
    }
    let first = rng.random_range(0..n);
    let mut second = rng.random_range(0..n - 1);
    if second >= first {
        second += 1;
    }
    (first, second)
}

/// Inclusion bit-vector with its running totals.
#[derive(Debug, Clone)]
struct Packing {
    taken: Vec<bool>,
    weight: u64,
    value: u64,
}

impl Packing {
    fn empty(n: usize) -> Self {
        Self {
            taken: vec![false; n],
            weight: 0,
            value: 0,
        }
    }

    fn insert(&mut self, items: &[Item], i: usize) {
        if !self.taken[i] {
            self.taken[i] = true;
            self.weight += items[i].weight();
            self.value += items[i].value();
        }
    }

    fn remove(&mut self, items: &[Item], i: usize) {
        if self.taken[i] {
            self.taken[i] = false;
            self.weight -= items[i].weight();
            self.value -= items[i].value();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monitor::RecordingMonitor;

    const SAMPLE: &str = "5\n4\n1\t2\t3\n2\t3\t4\n3\t4\t5\n4\t5\t6\n";

    fn quick_config() -> SaConfig {
        SaConfig::default()
            .with_initial_temperature(100.0)
            .with_min_temperature(1.0)
            .with_cooling(CoolingSchedule::Geometric { alpha: 0.9 })
            .with_iterations_per_temperature(100)
            .with_seed(42)
    }

    #[test]
    fn test_sa_sample_within_optimum() {
        let problem = Problem::parse(SAMPLE).unwrap();
        let result = SaRunner::run(&problem, &quick_config()).unwrap();
        assert!(result.solution.total_weight <= 5);
        assert!(
            result.solution.total_value <= 7,
            "value {} exceeds the optimum",
            result.solution.total_value
        );
        assert!(result.solution.total_value > 0);
        assert!(result.improving_moves > 0);
    }

    #[test]
    fn test_sa_takes_everything_that_fits() {
        // The first move inserts both items and keeps them.
        let problem = Problem::parse("10\n2\n0\t2\t3\n1\t3\t4\n").unwrap();
        let result = SaRunner::run(&problem, &quick_config()).unwrap();
        assert_eq!(result.solution.total_value, 7);
        assert_eq!(result.solution.total_weight, 5);
    }

    #[test]
    fn test_sa_zero_capacity() {
        let problem = Problem::parse("0\n3\n0\t1\t5\n1\t2\t8\n2\t3\t9\n").unwrap();
        let result = SaRunner::run(&problem, &quick_config()).unwrap();
        assert!(result.solution.selected.is_empty());
        assert_eq!(result.improving_moves, 0);
    }

    #[test]
    fn test_sa_single_item() {
        let fits = Problem::parse("5\n1\n0\t4\t9\n").unwrap();
        let result = SaRunner::run(&fits, &quick_config()).unwrap();
        assert_eq!(result.solution.total_value, 9);

        let oversized = Problem::parse("3\n1\n0\t4\t9\n").unwrap();
        let result = SaRunner::run(&oversized, &quick_config()).unwrap();
        assert!(result.solution.selected.is_empty());
    }

    #[test]
    fn test_sa_empty_problem() {
        let problem = Problem::parse("10\n0\n").unwrap();
        let result = SaRunner::run(&problem, &quick_config()).unwrap();
        assert_eq!(result.iterations, 0);
        assert!(result.solution.selected.is_empty());
    }

    #[test]
    fn test_sa_seeded_runs_are_identical() {
        let problem = Problem::parse(
            "20\n6\n0\t3\t7\n1\t4\t9\n2\t5\t9\n3\t7\t12\n4\t8\t13\n5\t9\t15\n",
        )
        .unwrap();
        let mut rng_a = StdRng::seed_from_u64(7);
        let mut rng_b = StdRng::seed_from_u64(7);
        let a = SaRunner::run_with_rng(&problem, &quick_config(), &mut rng_a, &mut NoOpMonitor)
            .unwrap();
        let b = SaRunner::run_with_rng(&problem, &quick_config(), &mut rng_b, &mut NoOpMonitor)
            .unwrap();
        assert_eq!(a.solution.selected, b.solution.selected);
        assert_eq!(a.accepted_moves, b.accepted_moves);
        assert_eq!(a.value_history, b.value_history);
    }

    #[test]
    fn test_sa_respects_capacity() {
        let problem = Problem::parse(
            "20\n6\n0\t3\t7\n1\t4\t9\n2\t5\t9\n3\t7\t12\n4\t8\t13\n5\t9\t15\n",
        )
        .unwrap();
        for seed in 0..5 {
            let config = quick_config().with_seed(seed);
            let result = SaRunner::run(&problem, &config).unwrap();
            assert!(result.solution.total_weight <= 20, "seed {seed}");
        }
    }

    #[test]
    fn test_sa_max_iterations_limit() {
        let problem = Problem::parse(SAMPLE).unwrap();
        let config = quick_config().with_max_iterations(150);
        let result = SaRunner::run(&problem, &config).unwrap();
        assert_eq!(result.iterations, 150);
    }

    #[test]
    fn test_sa_lundy_mees_one_move_per_step() {
        let problem = Problem::parse(SAMPLE).unwrap();
        let config = quick_config().with_cooling(CoolingSchedule::LundyMees { beta: 0.01 });
        let result = SaRunner::run(&problem, &config).unwrap();
        assert_eq!(result.value_history.len(), result.iterations + 1);
        assert!(result.final_temperature <= 1.0);
    }

    #[test]
    fn test_sa_history_and_monitor_agree() {
        let problem = Problem::parse(
            "15\n5\n0\t4\t6\n1\t6\t8\n2\t5\t7\n3\t3\t5\n4\t7\t9\n",
        )
        .unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let mut monitor = RecordingMonitor::new();
        let result =
            SaRunner::run_with_rng(&problem, &quick_config(), &mut rng, &mut monitor).unwrap();

        assert!(result
            .value_history
            .windows(2)
            .all(|w| w[0] <= w[1]));
        assert_eq!(monitor.improvements().len(), result.improving_moves);
        assert_eq!(
            result.value_history.last().copied(),
            Some(result.solution.total_value)
        );
    }

    #[test]
    fn test_sa_invalid_config() {
        let problem = Problem::parse(SAMPLE).unwrap();
        let config = SaConfig::default().with_min_temperature(0.0);
        assert!(matches!(
            SaRunner::run(&problem, &config),
            Err(KnapsackError::InfeasibleConfiguration(_))
        ));
    }
}
