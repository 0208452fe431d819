//! Frontiers of not-yet-expanded search nodes.
//!
//! The branch-and-bound engine is written against the [`Frontier`] trait and
//! is parameterized by which implementation it uses:
//!
//! - [`LifoFrontier`]: a stack; the most recently pushed entry comes out
//!   first (depth-biased exploration).
//! - [`BestFirstFrontier`]: entries come out by descending priority; equal
//!   priorities come out in insertion order.

mod heap;

pub use heap::MaxHeap;

use std::cmp::Ordering;

/// A container of pending entries, each pushed with a priority.
pub trait Frontier<T> {
    /// Adds an entry. `priority` is ignored by order-agnostic frontiers.
    fn push(&mut self, entry: T, priority: f64);

    /// Removes the next entry to expand.
    fn pop(&mut self) -> Option<T>;

    /// Number of pending entries.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Last-in first-out frontier.
#[derive(Debug, Clone)]
pub struct LifoFrontier<T> {
    stack: Vec<T>,
}

impl<T> LifoFrontier<T> {
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }
}

impl<T> Default for LifoFrontier<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Frontier<T> for LifoFrontier<T> {
    fn push(&mut self, entry: T, _priority: f64) {
        self.stack.push(entry);
    }

    fn pop(&mut self) -> Option<T> {
        self.stack.pop()
    }

    fn len(&self) -> usize {
        self.stack.len()
    }
}

/// An entry tagged with its priority and insertion sequence number.
///
/// Ordered by priority, then by *earlier* insertion, so the heap pops the
/// oldest of several equal-priority entries first.
#[derive(Debug, Clone)]
struct Ranked<T> {
    priority: f64,
    seq: u64,
    entry: T,
}

impl<T> PartialEq for Ranked<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T> Eq for Ranked<T> {}

impl<T> PartialOrd for Ranked<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Ranked<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .total_cmp(&other.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Highest-priority-first frontier, stable on ties.
#[derive(Debug, Clone)]
pub struct BestFirstFrontier<T> {
    heap: MaxHeap<Ranked<T>>,
    next_seq: u64,
}

impl<T> BestFirstFrontier<T> {
    pub fn new() -> Self {
        Self {
            heap: MaxHeap::new(),
            next_seq: 0,
        }
    }

    /// Priority of the entry that would be popped next.
    pub fn peek_priority(&self) -> Option<f64> {
        self.heap.peek().map(|ranked| ranked.priority)
    }
}

impl<T> Default for BestFirstFrontier<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Frontier<T> for BestFirstFrontier<T> {
    fn push(&mut self, entry: T, priority: f64) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Ranked {
            priority,
            seq,
            entry,
        });
    }

    fn pop(&mut self) -> Option<T> {
        self.heap.pop().map(|ranked| ranked.entry)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}
