//! DP execution.

use std::time::Instant;

use log::debug;

use super::config::DpConfig;
use super::table::DpTable;
use crate::error::{KnapsackError, Result};
use crate::model::{KnapsackResult, Problem};
use crate::monitor::{NoOpMonitor, SolveMonitor};

/// Result of a dynamic-programming run.
#[derive(Debug, Clone)]
pub struct DpResult {
    /// The optimal selection.
    pub solution: KnapsackResult,

    /// The filled table, kept for export.
    pub table: DpTable,
}

/// Executes the dynamic-programming engine.
pub struct DpRunner;

impl DpRunner {
    /// Runs dynamic programming.
    ///
    /// Fails when the table would exceed `config.max_cells`.
    pub fn run(problem: &Problem, config: &DpConfig) -> Result<DpResult> {
        Self::run_with_monitor(problem, config, &mut NoOpMonitor)
    }

    /// Runs dynamic programming, reporting the optimum to `monitor` once
    /// the table is complete.
    pub fn run_with_monitor(
        problem: &Problem,
        config: &DpConfig,
        monitor: &mut dyn SolveMonitor,
    ) -> Result<DpResult> {
        config
            .validate()
            .map_err(KnapsackError::InfeasibleConfiguration)?;

        let start = Instant::now();
        let capacity = usize::try_from(problem.capacity()).map_err(|_| {
            KnapsackError::InfeasibleConfiguration(format!(
                "capacity {} does not fit in memory",
                problem.capacity()
            ))
        })?;
        let cells = capacity
            .checked_add(1)
            .and_then(|width| width.checked_mul(problem.len()));
        match cells {
            Some(cells) if cells <= config.max_cells => {}
            _ => {
                return Err(KnapsackError::InfeasibleConfiguration(format!(
                    "dp table for {} items and capacity {} exceeds {} cells",
                    problem.len(),
                    capacity,
                    config.max_cells
                )))
            }
        }

        let items = problem.items();
        let table = DpTable::build(items, capacity);
        let selected = table
            .reconstruct(items)
            .into_iter()
            .map(|i| items[i].clone())
            .collect();
        let solution = KnapsackResult::from_items(selected, start.elapsed());
        debug_assert_eq!(solution.total_value, table.optimum());

        if solution.total_value > 0 {
            monitor.on_improvement(solution.total_value, solution.total_weight);
        }
        debug!(
            "dp: value {} from a {}x{} table",
            solution.total_value,
            table.rows(),
            capacity + 1
        );

        Ok(DpResult { solution, table })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Item;

    #[test]
    fn test_dp_sample_instance() {
        let problem = Problem::parse("5\n4\n1\t2\t3\n2\t3\t4\n3\t4\t5\n4\t5\t6\n").unwrap();
        let result = DpRunner::run(&problem, &DpConfig::default()).unwrap();
        assert_eq!(result.solution.total_value, 7);
        assert_eq!(result.solution.total_weight, 5);
        let ids: Vec<&str> = result.solution.selected.iter().map(Item::id).collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[test]
    fn test_dp_zero_capacity() {
        let problem = Problem::parse("0\n2\n0\t1\t5\n1\t2\t8\n").unwrap();
        let result = DpRunner::run(&problem, &DpConfig::default()).unwrap();
        assert!(result.solution.selected.is_empty());
        assert_eq!(result.table.capacity(), 0);
    }

    #[test]
    fn test_dp_single_oversized_item() {
        let problem = Problem::parse("3\n1\n0\t4\t9\n").unwrap();
        let result = DpRunner::run(&problem, &DpConfig::default()).unwrap();
        assert!(result.solution.selected.is_empty());
    }

    #[test]
    fn test_dp_table_limit() {
        let problem = Problem::parse("1000\n2\n0\t1\t1\n1\t2\t2\n").unwrap();
        let config = DpConfig::default().with_max_cells(100);
        assert!(matches!(
            DpRunner::run(&problem, &config),
            Err(KnapsackError::InfeasibleConfiguration(_))
        ));
    }

    #[test]
    fn test_dp_deterministic() {
        let problem =
            Problem::parse("15\n5\n0\t4\t6\n1\t6\t8\n2\t5\t7\n3\t3\t5\n4\t7\t9\n").unwrap();
        let a = DpRunner::run(&problem, &DpConfig::default()).unwrap();
        let b = DpRunner::run(&problem, &DpConfig::default()).unwrap();
        assert_eq!(a.solution.selected, b.solution.selected);
        assert_eq!(a.table, b.table);
    }
}
