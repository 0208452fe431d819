//! Greedy placement loop.

use std::time::Instant;

use log::debug;

use crate::model::{KnapsackResult, Problem};
use crate::monitor::{NoOpMonitor, SolveMonitor};

/// Result of a greedy run.
#[derive(Debug, Clone)]
pub struct GreedyResult {
    /// The selection, in placement order.
    pub solution: KnapsackResult,

    /// Full scans performed, the final empty one included.
    pub passes: usize,
}

/// Executes the greedy engine.
pub struct GreedyRunner;

impl GreedyRunner {
    /// Runs the greedy heuristic.
    pub fn run(problem: &Problem) -> GreedyResult {
        Self::run_with_monitor(problem, &mut NoOpMonitor)
    }

    /// Runs the greedy heuristic, reporting each placement to `monitor`.
    pub fn run_with_monitor(problem: &Problem, monitor: &mut dyn SolveMonitor) -> GreedyResult {
        let start = Instant::now();

        let sorted = problem.sorted_by_unit_value();
        let items = sorted.items();
        let capacity = sorted.capacity();

        // Placement marks are scoped to this call; the item list is shared.
        let mut placed = vec![false; items.len()];
        let mut order = Vec::new();
        let mut weight = 0u64;
        let mut value = 0u64;
        let mut passes = 0usize;

        loop {
            passes += 1;
            let mut placed_any = false;
            for (i, item) in items.iter().enumerate() {
                if placed[i] || weight + item.weight() > capacity {
                    continue;
                }
                placed[i] = true;
                placed_any = true;
                weight += item.weight();
                value += item.value();
                order.push(i);
                monitor.on_improvement(value, weight);
            }
            if !placed_any {
                break;
            }
        }

        let selected = order.into_iter().map(|i| items[i].clone()).collect();
        let solution = KnapsackResult::from_items(selected, start.elapsed());
        debug!(
            "greedy: value {} in {} passes",
            solution.total_value, passes
        );

        GreedyResult { solution, passes }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Item;

    #[test]
    fn test_greedy_sample_instance() {
        // Unit values 1.5, 1.33, 1.25, 1.2: items 1 and 2 fill the knapsack.
        let problem = Problem::parse("5\n4\n3\t4\t5\n1\t2\t3\n4\t5\t6\n2\t3\t4\n").unwrap();
        let result = GreedyRunner::run(&problem);
        let ids: Vec<&str> = result.solution.selected.iter().map(Item::id).collect();
        assert_eq!(ids, vec!["1", "2"]);
        assert_eq!(result.solution.total_value, 7);
        assert_eq!(result.solution.total_weight, 5);
    }

    #[test]
    fn test_greedy_is_not_optimal() {
        // Greedy takes the dense small item and can no longer fit both big ones.
        let problem = Problem::parse("50\n3\na\t10\t60\nb\t20\t100\nc\t30\t120\n").unwrap();
        let result = GreedyRunner::run(&problem);
        assert_eq!(result.solution.total_value, 160);
        assert!(result.solution.total_weight <= 50);
    }

    #[test]
    fn test_greedy_second_pass_places_nothing() {
        let problem = Problem::parse("7\n4\n0\t4\t9\n1\t5\t10\n2\t2\t3\n3\t1\t1\n").unwrap();
        let result = GreedyRunner::run(&problem);
        assert_eq!(result.passes, 2);
        assert_eq!(result.solution.total_weight, 7);
    }

    #[test]
    fn test_greedy_zero_capacity() {
        let problem = Problem::parse("0\n2\n0\t1\t5\n1\t2\t8\n").unwrap();
        let result = GreedyRunner::run(&problem);
        assert!(result.solution.selected.is_empty());
        assert_eq!(result.passes, 1);
    }

    #[test]
    fn test_greedy_does_not_touch_problem() {
        let problem = Problem::parse("3\n2\n0\t1\t1\n1\t1\t5\n").unwrap();
        let before = problem.clone();
        let _ = GreedyRunner::run(&problem);
        let again = GreedyRunner::run(&problem);
        assert_eq!(problem, before);
        assert_eq!(again.solution.total_value, 6);
    }
}
