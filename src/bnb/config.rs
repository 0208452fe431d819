//! BnB configuration.

use std::fmt;
use std::str::FromStr;

/// Order in which pending nodes are expanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FrontierPolicy {
    /// Most recently created node first (depth-biased).
    #[default]
    Lifo,

    /// Highest upper bound first; equal bounds in creation order.
    BestFirst,
}

impl fmt::Display for FrontierPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrontierPolicy::Lifo => write!(f, "lifo"),
            FrontierPolicy::BestFirst => write!(f, "best-first"),
        }
    }
}

impl FromStr for FrontierPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "lifo" | "stack" => Ok(FrontierPolicy::Lifo),
            "best-first" | "best_first" | "bestfirst" | "heap" => Ok(FrontierPolicy::BestFirst),
            other => Err(format!("unknown frontier policy `{other}`")),
        }
    }
}

/// Configuration for the branch-and-bound engine.
///
/// # Examples
///
/// ```
/// use u_knapsack::bnb::{BnbConfig, FrontierPolicy};
///
/// let config = BnbConfig::default().with_policy(FrontierPolicy::BestFirst);
/// assert_eq!(config.policy, FrontierPolicy::BestFirst);
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BnbConfig {
    /// Frontier expansion order.
    pub policy: FrontierPolicy,
}

impl BnbConfig {
    pub fn with_policy(mut self, policy: FrontierPolicy) -> Self {
        self.policy = policy;
        self
    }
}
