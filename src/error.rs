//! Error type shared by every solver entry point.

use std::io;

/// Errors surfaced by parsing, solving and reporting.
///
/// Solving is a pure computation, so none of these are transient: the
/// caller gets them synchronously and nothing is retried internally.
#[derive(Debug, thiserror::Error)]
pub enum KnapsackError {
    /// An operation was invoked before `initialize`.
    #[error("solver used before initialize")]
    Uninitialized,

    /// A result was requested before any solve completed.
    #[error("no problem has been solved yet")]
    NotSolved,

    /// The problem text does not follow the expected line layout.
    #[error("malformed problem text at line {line}: {message}")]
    MalformedInput {
        /// 1-based index over the non-empty lines of the input.
        line: usize,
        message: String,
    },

    /// The problem or the engine configuration cannot be solved as given.
    #[error("infeasible configuration: {0}")]
    InfeasibleConfiguration(String),

    /// The strategy does not implement the requested operation.
    #[error("{operation} is not supported by the {strategy} strategy")]
    NotSupported {
        operation: &'static str,
        strategy: &'static str,
    },

    /// Writing a report to disk failed.
    #[error("io error {0}")]
    Io(#[from] io::Error),
}

impl KnapsackError {
    pub(crate) fn malformed(line: usize, message: impl Into<String>) -> Self {
        KnapsackError::MalformedInput {
            line,
            message: message.into(),
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, KnapsackError>;
