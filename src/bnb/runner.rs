//! BnB search loop.
//!
//! # Algorithm
//!
//! Per expanded node `(level, value, weight)`:
//!
//! 1. At `level == n` the node is a leaf; keep it if it beats the best value.
//! 2. Include item `level` if it fits. The child is recorded as the best
//!    node right away when its value beats the best, then pushed.
//! 3. Exclude item `level`; push only if its bound is still `>=` the best.
//!
//! The search ends when the frontier is empty.

use std::time::Instant;

use log::{debug, trace};

use super::config::{BnbConfig, FrontierPolicy};
use super::node::{NodeArena, NodeId, SearchNode};
use crate::bound::FractionalBound;
use crate::frontier::{BestFirstFrontier, Frontier, LifoFrontier};
use crate::model::{KnapsackResult, Problem};
use crate::monitor::{NoOpMonitor, SolveMonitor};

/// Result of a branch-and-bound run.
#[derive(Debug, Clone)]
pub struct BnbResult {
    /// The best selection found (optimal).
    pub solution: KnapsackResult,

    /// Level of the node the selection was read from.
    pub max_depth: usize,

    /// Nodes allocated in the arena, root included.
    pub nodes_created: usize,

    /// Nodes taken off the frontier and expanded.
    pub nodes_expanded: usize,

    /// Exclude branches discarded at creation plus nodes skipped at pop time
    /// because the best value overtook their bound.
    pub nodes_pruned: usize,

    /// Largest frontier size observed.
    pub peak_frontier: usize,

    /// Policy the run used.
    pub policy: FrontierPolicy,
}

/// Executes the branch-and-bound engine.
pub struct BnbRunner;

impl BnbRunner {
    /// Runs branch-and-bound.
    pub fn run(problem: &Problem, config: &BnbConfig) -> BnbResult {
        Self::run_with_monitor(problem, config, &mut NoOpMonitor)
    }

    /// Runs branch-and-bound, reporting each improvement to `monitor`.
    pub fn run_with_monitor(
        problem: &Problem,
        config: &BnbConfig,
        monitor: &mut dyn SolveMonitor,
    ) -> BnbResult {
        match config.policy {
            FrontierPolicy::Lifo => search(problem, LifoFrontier::new(), config.policy, monitor),
            FrontierPolicy::BestFirst => {
                search(problem, BestFirstFrontier::new(), config.policy, monitor)
            }
        }
    }
}

fn search<F: Frontier<NodeId>>(
    problem: &Problem,
    mut frontier: F,
    policy: FrontierPolicy,
    monitor: &mut dyn SolveMonitor,
) -> BnbResult {
    let start = Instant::now();

    let sorted = problem.sorted_by_unit_value();
    let items = sorted.items();
    let capacity = sorted.capacity();
    let n = items.len();
    let bound = FractionalBound::new(items, capacity);

    let mut arena = NodeArena::new();
    let root = arena.push(SearchNode::root(bound.bound(0, 0, 0)));
    frontier.push(root, arena.get(root).upper_bound);

    let mut best_value = 0u64;
    let mut best_node = root;
    let mut nodes_expanded = 0usize;
    let mut nodes_pruned = 0usize;
    let mut peak_frontier = frontier.len();

    while let Some(id) = frontier.pop() {
        let node = *arena.get(id);

        if node.upper_bound < best_value as f64 {
            nodes_pruned += 1;
            continue;
        }
        nodes_expanded += 1;

        if node.level == n {
            if node.acc_value > best_value {
                best_value = node.acc_value;
                best_node = id;
                monitor.on_improvement(node.acc_value, node.acc_weight);
            }
            continue;
        }

        let item = &items[node.level];
        let next = node.level + 1;

        // Include branch; infeasible children are never created.
        let weight = node.acc_weight + item.weight();
        if weight <= capacity {
            let value = node.acc_value + item.value();
            let upper_bound = bound.bound(next, value, weight);
            let child = arena.push(SearchNode {
                level: next,
                acc_value: value,
                acc_weight: weight,
                included: true,
                upper_bound,
                parent: Some(id),
            });
            if value > best_value {
                best_value = value;
                best_node = child;
                trace!("bnb: best value {value} at level {next}");
                monitor.on_improvement(value, weight);
            }
            frontier.push(child, upper_bound);
        }

        // Exclude branch.
        let upper_bound = bound.bound(next, node.acc_value, node.acc_weight);
        if upper_bound >= best_value as f64 {
            let child = arena.push(SearchNode {
                level: next,
                acc_value: node.acc_value,
                acc_weight: node.acc_weight,
                included: false,
                upper_bound,
                parent: Some(id),
            });
            frontier.push(child, upper_bound);
        } else {
            nodes_pruned += 1;
        }

        peak_frontier = peak_frontier.max(frontier.len());
    }

    let selected = arena
        .selected_indices(best_node)
        .into_iter()
        .map(|i| items[i].clone())
        .collect();
    let solution = KnapsackResult::from_items(selected, start.elapsed());
    debug_assert_eq!(solution.total_value, best_value);

    debug!(
        "bnb ({policy}): value {} after expanding {} of {} nodes",
        solution.total_value,
        nodes_expanded,
        arena.len()
    );

    BnbResult {
        solution,
        max_depth: arena.get(best_node).level,
        nodes_created: arena.len(),
        nodes_expanded,
        nodes_pruned,
        peak_frontier,
        policy,
    }
}
