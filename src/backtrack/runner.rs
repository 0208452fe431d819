//! Recursive depth-first search.

use std::time::Instant;

use log::{debug, trace};

use crate::bound::FractionalBound;
use crate::model::{Item, KnapsackResult, Problem};
use crate::monitor::{NoOpMonitor, SolveMonitor};

/// Result of a backtracking run.
#[derive(Debug, Clone)]
pub struct BacktrackResult {
    /// The best selection found (optimal).
    pub solution: KnapsackResult,

    /// Number of recursive calls, root included.
    pub calls: usize,

    /// Exclude branches cut by the bound.
    pub pruned: usize,
}

/// Executes the backtracking engine.
pub struct BacktrackRunner;

impl BacktrackRunner {
    /// Runs backtracking.
    pub fn run(problem: &Problem) -> BacktrackResult {
        Self::run_with_monitor(problem, &mut NoOpMonitor)
    }

    /// Runs backtracking, reporting each improvement to `monitor`.
    pub fn run_with_monitor(problem: &Problem, monitor: &mut dyn SolveMonitor) -> BacktrackResult {
        let start = Instant::now();

        let sorted = problem.sorted_by_unit_value();
        let items = sorted.items();
        let mut search = Backtracker {
            items,
            capacity: sorted.capacity(),
            bound: FractionalBound::new(items, sorted.capacity()),
            path: vec![false; items.len()],
            best_path: vec![false; items.len()],
            best_value: 0,
            calls: 0,
            pruned: 0,
        };
        search.descend(0, 0, 0, monitor);

        let selected: Vec<Item> = items
            .iter()
            .zip(&search.best_path)
            .filter(|(_, &taken)| taken)
            .map(|(item, _)| item.clone())
            .collect();
        let solution = KnapsackResult::from_items(selected, start.elapsed());

        debug!(
            "backtracking: value {} after {} calls",
            solution.total_value, search.calls
        );

        BacktrackResult {
            solution,
            calls: search.calls,
            pruned: search.pruned,
        }
    }
}

struct Backtracker<'a> {
    items: &'a [Item],
    capacity: u64,
    bound: FractionalBound<'a>,
    path: Vec<bool>,
    best_path: Vec<bool>,
    best_value: u64,
    calls: usize,
    pruned: usize,
}

impl Backtracker<'_> {
    fn descend(
        &mut self,
        depth: usize,
        acc_value: u64,
        acc_weight: u64,
        monitor: &mut dyn SolveMonitor,
    ) {
        self.calls += 1;

        if depth == self.items.len() {
            if acc_value > self.best_value {
                self.best_value = acc_value;
                self.best_path.copy_from_slice(&self.path);
                trace!("backtracking: best value {acc_value}");
                monitor.on_improvement(acc_value, acc_weight);
            }
            return;
        }

        let item = &self.items[depth];
        if acc_weight + item.weight() <= self.capacity {
            self.path[depth] = true;
            self.descend(
                depth + 1,
                acc_value + item.value(),
                acc_weight + item.weight(),
                monitor,
            );
            self.path[depth] = false;
        }

        if self.bound.bound(depth + 1, acc_value, acc_weight) >= self.best_value as f64 {
            self.descend(depth + 1, acc_value, acc_weight, monitor);
        } else {
            self.pruned += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monitor::RecordingMonitor;

    #[test]
    fn test_backtrack_sample_instance() {
        let problem = Problem::parse("5\n4\n1\t2\t3\n2\t3\t4\n3\t4\t5\n4\t5\t6\n").unwrap();
        let result = BacktrackRunner::run(&problem);
        assert_eq!(result.solution.total_value, 7);
        assert_eq!(result.solution.total_weight, 5);
        let ids: Vec<&str> = result.solution.selected.iter().map(Item::id).collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[test]
    fn test_backtrack_zero_capacity() {
        let problem = Problem::parse("0\n2\n0\t1\t5\n1\t2\t8\n").unwrap();
        let result = BacktrackRunner::run(&problem);
        assert!(result.solution.selected.is_empty());
        assert_eq!(result.solution.total_value, 0);
    }

    #[test]
    fn test_backtrack_single_oversized_item() {
        let problem = Problem::parse("3\n1\n0\t4\t9\n").unwrap();
        let result = BacktrackRunner::run(&problem);
        assert!(result.solution.selected.is_empty());
        assert_eq!(result.calls, 2);
    }

    #[test]
    fn test_backtrack_prunes() {
        let problem = Problem::parse(
            "10\n6\n0\t5\t10\n1\t5\t10\n2\t5\t1\n3\t5\t1\n4\t5\t1\n5\t5\t1\n",
        )
        .unwrap();
        let result = BacktrackRunner::run(&problem);
        assert_eq!(result.solution.total_value, 20);
        assert!(result.pruned > 0);
        // A full binary tree over 6 items would need 127 calls.
        assert!(result.calls < 127, "calls = {}", result.calls);
    }

    #[test]
    fn test_backtrack_reports_improvements() {
        let problem = Problem::parse("9\n3\n0\t4\t5\n1\t5\t6\n2\t3\t3\n").unwrap();
        let mut monitor = RecordingMonitor::new();
        let result = BacktrackRunner::run_with_monitor(&problem, &mut monitor);
        assert_eq!(result.solution.total_value, 11);
        assert_eq!(monitor.improvements().last().copied(), Some(11));
    }
}
