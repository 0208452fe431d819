//! Observers for incremental progress reporting.
//!
//! A [`SolveMonitor`] is the consumer a solver is bound to at
//! `initialize`. Engines call it when a solve starts, each time the best
//! known value improves, and when the result is ready. Monitors take
//! `&mut self` and are driven from the solving thread only.

use log::info;

use crate::model::{KnapsackResult, Problem};

/// Receives solve lifecycle events.
pub trait SolveMonitor {
    /// Returns the name of the monitor.
    fn name(&self) -> &str;

    /// Called once before the strategy runs.
    fn on_start(&mut self, _strategy: &str, _problem: &Problem) {}

    /// Called whenever the best known value strictly improves.
    fn on_improvement(&mut self, _value: u64, _weight: u64) {}

    /// Called once with the final result.
    fn on_finish(&mut self, _strategy: &str, _result: &KnapsackResult) {}
}

impl std::fmt::Debug for dyn SolveMonitor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SolveMonitor({})", self.name())
    }
}

/// A monitor that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpMonitor;

impl SolveMonitor for NoOpMonitor {
    fn name(&self) -> &str {
        "NoOpMonitor"
    }
}

/// Forwards events to the `log` facade at info level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogMonitor;

impl SolveMonitor for LogMonitor {
    fn name(&self) -> &str {
        "LogMonitor"
    }

    fn on_start(&mut self, strategy: &str, problem: &Problem) {
        info!(
            "{strategy}: solving {} items, capacity {}",
            problem.len(),
            problem.capacity()
        );
    }

    fn on_improvement(&mut self, value: u64, weight: u64) {
        info!("improved: value {value}, weight {weight}");
    }

    fn on_finish(&mut self, strategy: &str, result: &KnapsackResult) {
        info!(
            "{strategy}: finished with value {} / weight {} in {:.3} ms",
            result.total_value,
            result.total_weight,
            result.elapsed_ms()
        );
    }
}

/// One recorded monitor event.
#[derive(Debug, Clone, PartialEq)]
pub enum MonitorEvent {
    Started { strategy: String, items: usize },
    Improved { value: u64, weight: u64 },
    Finished { strategy: String, value: u64 },
}

/// Keeps every event in memory, in arrival order.
#[derive(Debug, Clone, Default)]
pub struct RecordingMonitor {
    pub events: Vec<MonitorEvent>,
}

impl RecordingMonitor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Values reported through `on_improvement`, in order.
    pub fn improvements(&self) -> Vec<u64> {
        self.events
            .iter()
            .filter_map(|event| match event {
                MonitorEvent::Improved { value, .. } => Some(*value),
                _ => None,
            })
            .collect()
    }
}

impl SolveMonitor for RecordingMonitor {
    fn name(&self) -> &str {
        "RecordingMonitor"
    }

    fn on_start(&mut self, strategy: &str, problem: &Problem) {
        self.events.push(MonitorEvent::Started {
            strategy: strategy.to_string(),
            items: problem.len(),
        });
    }

    fn on_improvement(&mut self, value: u64, weight: u64) {
        self.events.push(MonitorEvent::Improved { value, weight });
    }

    fn on_finish(&mut self, strategy: &str, result: &KnapsackResult) {
        self.events.push(MonitorEvent::Finished {
            strategy: strategy.to_string(),
            value: result.total_value,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_recording_monitor() {
        let problem = Problem::parse("5\n1\n0\t1\t1\n").unwrap();
        let mut monitor = RecordingMonitor::new();
        monitor.on_start("greedy", &problem);
        monitor.on_improvement(3, 2);
        monitor.on_improvement(5, 4);
        monitor.on_finish("greedy", &KnapsackResult::empty(Duration::ZERO));
        assert_eq!(monitor.events.len(), 4);
        assert_eq!(monitor.improvements(), vec![3, 5]);
    }

    #[test]
    fn test_debug_for_dyn() {
        let monitor: Box<dyn SolveMonitor> = Box::new(NoOpMonitor);
        assert_eq!(format!("{monitor:?}"), "SolveMonitor(NoOpMonitor)");
    }
}
