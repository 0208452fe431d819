//! The single solver front-end over all five strategies.
//!
//! A [`KnapsackSolver`] is bound to a [`Strategy`] at construction and to a
//! [`SolveMonitor`] at [`initialize`](KnapsackSolver::initialize). Each
//! [`solve`](KnapsackSolver::solve) parses the problem text, runs the
//! strategy to completion and keeps the result for the reporting calls.
//!
//! # Examples
//!
//! ```
//! use u_knapsack::monitor::NoOpMonitor;
//! use u_knapsack::{KnapsackSolver, Strategy};
//!
//! let mut solver = KnapsackSolver::new(Strategy::DynamicProgramming);
//! solver.initialize(Box::new(NoOpMonitor), &[]).unwrap();
//! solver.solve("5\n4\n1\t2\t3\n2\t3\t4\n3\t4\t5\n4\t5\t6\n").unwrap();
//!
//! let (_elapsed_ms, report) = solver.result().unwrap();
//! assert_eq!(report.total_value, 7);
//! assert_eq!(report.load_rate, "100.0000");
//! ```

mod strategy;

pub use strategy::Strategy;

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::backtrack::BacktrackRunner;
use crate::bnb::{BnbConfig, BnbRunner};
use crate::dp::{DpConfig, DpRunner, DpTable};
use crate::error::{KnapsackError, Result};
use crate::greedy::GreedyRunner;
use crate::model::{KnapsackResult, Problem};
use crate::monitor::SolveMonitor;
use crate::report::{ListingStyle, Report};
use crate::sa::{CoolingSchedule, SaConfig, SaRunner};

/// Strategy-specific output kept next to the result.
#[derive(Debug, Clone)]
enum Detail {
    Plain,
    Tree { max_depth: usize },
    Table(DpTable),
    UnitValues,
}

#[derive(Debug, Clone)]
struct Solved {
    problem: Problem,
    result: KnapsackResult,
    detail: Detail,
}

/// Solves knapsack instances with one fixed strategy.
#[derive(Debug)]
pub struct KnapsackSolver {
    strategy: Strategy,
    monitor: Option<Box<dyn SolveMonitor>>,
    sa_config: SaConfig,
    dp_config: DpConfig,
    rng: Option<StdRng>,
    solved: Option<Solved>,
}

impl KnapsackSolver {
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            monitor: None,
            sa_config: SaConfig::default(),
            dp_config: DpConfig::default(),
            rng: None,
            solved: None,
        }
    }

    pub fn with_sa_config(mut self, config: SaConfig) -> Self {
        self.sa_config = config;
        self
    }

    pub fn with_dp_config(mut self, config: DpConfig) -> Self {
        self.dp_config = config;
        self
    }

    /// Uses `rng` for every annealing run instead of seeding a fresh one
    /// from [`SaConfig::seed`].
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = Some(rng);
        self
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn sa_config(&self) -> &SaConfig {
        &self.sa_config
    }

    /// Binds the progress consumer and applies string parameters.
    ///
    /// For simulated annealing `params[0]`, when present, is the number of
    /// moves per temperature. Other strategies take no parameters and
    /// ignore them.
    pub fn initialize(
        &mut self,
        monitor: Box<dyn SolveMonitor>,
        params: &[&str],
    ) -> Result<()> {
        if self.strategy == Strategy::SimulatedAnnealing {
            if let Some(raw) = params.first() {
                if let CoolingSchedule::LundyMees { .. } = self.sa_config.cooling {
                    return Err(KnapsackError::InfeasibleConfiguration(format!(
                        "epoch parameter {raw:?} has no effect under lundy-mees cooling"
                    )));
                }
                let epoch = raw.trim().parse::<usize>().map_err(|e| {
                    KnapsackError::InfeasibleConfiguration(format!(
                        "epoch parameter {raw:?}: {e}"
                    ))
                })?;
                let config = self.sa_config.clone().with_iterations_per_temperature(epoch);
                config
                    .validate()
                    .map_err(KnapsackError::InfeasibleConfiguration)?;
                self.sa_config = config;
            }
        }
        debug!("{}: initialized with {}", self.strategy, monitor.name());
        self.monitor = Some(monitor);
        Ok(())
    }

    /// Parses `text` and runs the strategy on it.
    ///
    /// Any earlier result is discarded first, so a failed solve leaves the
    /// solver without one.
    pub fn solve(&mut self, text: &str) -> Result<&KnapsackResult> {
        let monitor = self
            .monitor
            .as_deref_mut()
            .ok_or(KnapsackError::Uninitialized)?;
        self.solved = None;

        let problem = Problem::parse(text)?;
        let name = self.strategy.name();
        debug!(
            "{name}: {} items, capacity {}",
            problem.len(),
            problem.capacity()
        );
        monitor.on_start(name, &problem);

        let (result, detail) = match self.strategy {
            Strategy::BranchAndBound(policy) => {
                let config = BnbConfig::default().with_policy(policy);
                let run = BnbRunner::run_with_monitor(&problem, &config, monitor);
                (run.solution, Detail::Tree {
                    max_depth: run.max_depth,
                })
            }
            Strategy::Backtracking => {
                let run = BacktrackRunner::run_with_monitor(&problem, monitor);
                (run.solution, Detail::Plain)
            }
            Strategy::DynamicProgramming => {
                let run = DpRunner::run_with_monitor(&problem, &self.dp_config, monitor)?;
                (run.solution, Detail::Table(run.table))
            }
            Strategy::Greedy => {
                let run = GreedyRunner::run_with_monitor(&problem, monitor);
                (run.solution, Detail::UnitValues)
            }
            Strategy::SimulatedAnnealing => {
                let run = match self.rng.as_mut() {
                    Some(rng) => SaRunner::run_with_rng(&problem, &self.sa_config, rng, monitor)?,
                    None => {
                        let mut rng = match self.sa_config.seed {
                            Some(seed) => StdRng::seed_from_u64(seed),
                            None => StdRng::seed_from_u64(rand::random()),
                        };
                        SaRunner::run_with_rng(&problem, &self.sa_config, &mut rng, monitor)?
                    }
                };
                (run.solution, Detail::Plain)
            }
        };

        monitor.on_finish(name, &result);
        debug!(
            "{name}: value {} weight {} in {:.3} ms",
            result.total_value,
            result.total_weight,
            result.elapsed_ms()
        );

        let solved = self.solved.insert(Solved {
            problem,
            result,
            detail,
        });
        Ok(&solved.result)
    }

    /// Elapsed milliseconds of the last solve and its report.
    pub fn result(&self) -> Result<(f64, Report)> {
        let solved = self.solved()?;
        Ok((solved.result.elapsed_ms(), report_for(solved)))
    }

    /// Writes the result file to `path`.
    ///
    /// Dynamic programming also writes its table next to it, at `path` with
    /// a `.csv` extension, or `.table.csv` when `path` is itself a `.csv`.
    pub fn write_result_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let solved = self.solved()?;
        let path = path.as_ref();
        report_for(solved).write_to(BufWriter::new(File::create(path)?))?;
        if let Detail::Table(table) = &solved.detail {
            table.write_csv(BufWriter::new(File::create(table_path(path))?))?;
        }
        debug!("{}: result written to {}", self.strategy, path.display());
        Ok(())
    }

    /// Writes the dynamic-programming table as CSV to `path` with a `.csv`
    /// extension and returns that path.
    pub fn export_table(&self, path: impl AsRef<Path>) -> Result<PathBuf> {
        let solved = self.solved()?;
        let Detail::Table(table) = &solved.detail else {
            return Err(KnapsackError::NotSupported {
                operation: "table export",
                strategy: self.strategy.name(),
            });
        };
        let csv = path.as_ref().with_extension("csv");
        table.write_csv(BufWriter::new(File::create(&csv)?))?;
        Ok(csv)
    }

    /// Elapsed milliseconds of the last solve.
    pub fn cost(&self) -> Result<f64> {
        Ok(self.solved()?.result.elapsed_ms())
    }

    /// The last result.
    pub fn solution(&self) -> Result<&KnapsackResult> {
        Ok(&self.solved()?.result)
    }

    /// The last dynamic-programming table, if the strategy builds one.
    pub fn table(&self) -> Option<&DpTable> {
        match self.solved.as_ref().map(|s| &s.detail) {
            Some(Detail::Table(table)) => Some(table),
            _ => None,
        }
    }

    fn solved(&self) -> Result<&Solved> {
        if self.monitor.is_none() {
            return Err(KnapsackError::Uninitialized);
        }
        self.solved.as_ref().ok_or(KnapsackError::NotSolved)
    }
}

/// CSV path for the table that accompanies the result file at `path`.
fn table_path(path: &Path) -> PathBuf {
    let csv = path.with_extension("csv");
    if csv == path {
        path.with_extension("table.csv")
    } else {
        csv
    }
}

fn report_for(solved: &Solved) -> Report {
    let capacity = solved.problem.capacity();
    match solved.detail {
        Detail::Tree { max_depth } => {
            Report::new(&solved.result, capacity, ListingStyle::Plain).with_max_depth(max_depth)
        }
        Detail::UnitValues => Report::new(&solved.result, capacity, ListingStyle::WithUnitValue),
        Detail::Plain | Detail::Table(_) => {
            Report::new(&solved.result, capacity, ListingStyle::Plain)
        }
    }
}
