//! Strategy selection.

use std::fmt;
use std::str::FromStr;

use crate::bnb::FrontierPolicy;

/// The five solving strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    /// Exact tree search pruned by the fractional bound.
    BranchAndBound(FrontierPolicy),
    /// Exact recursive depth-first search pruned by the fractional bound.
    Backtracking,
    /// Exact table-filling over item x capacity.
    DynamicProgramming,
    /// Unit-value greedy. Not optimal.
    Greedy,
    /// Randomized local search. Not optimal.
    SimulatedAnnealing,
}

impl Strategy {
    /// Every strategy, with branch-and-bound in both frontier policies.
    pub fn all() -> [Strategy; 6] {
        [
            Strategy::BranchAndBound(FrontierPolicy::Lifo),
            Strategy::BranchAndBound(FrontierPolicy::BestFirst),
            Strategy::Backtracking,
            Strategy::DynamicProgramming,
            Strategy::Greedy,
            Strategy::SimulatedAnnealing,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::BranchAndBound(_) => "branch-and-bound",
            Strategy::Backtracking => "backtracking",
            Strategy::DynamicProgramming => "dynamic-programming",
            Strategy::Greedy => "greedy",
            Strategy::SimulatedAnnealing => "simulated-annealing",
        }
    }

    /// Whether the strategy always returns an optimal selection.
    pub fn is_exact(&self) -> bool {
        !matches!(self, Strategy::Greedy | Strategy::SimulatedAnnealing)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::BranchAndBound(policy) => write!(f, "{}/{policy}", self.name()),
            _ => f.write_str(self.name()),
        }
    }
}

impl FromStr for Strategy {
    type Err = String;

    /// Accepts a strategy name, or `branch-and-bound/<policy>`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        let (name, policy) = match lower.split_once('/') {
            Some((name, policy)) => (name, Some(policy)),
            None => (lower.as_str(), None),
        };
        let strategy = match name {
            "branch-and-bound" | "bnb" => {
                let policy = policy
                    .map(str::parse::<FrontierPolicy>)
                    .transpose()?
                    .unwrap_or_default();
                return Ok(Strategy::BranchAndBound(policy));
            }
            "backtracking" | "backtrack" => Strategy::Backtracking,
            "dynamic-programming" | "dp" => Strategy::DynamicProgramming,
            "greedy" => Strategy::Greedy,
            "simulated-annealing" | "sa" => Strategy::SimulatedAnnealing,
            other => return Err(format!("unknown strategy `{other}`")),
        };
        match policy {
            Some(policy) => Err(format!("{name} takes no frontier policy, got `{policy}`")),
            None => Ok(strategy),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_parse() {
        for strategy in Strategy::all() {
            assert_eq!(strategy.to_string().parse::<Strategy>(), Ok(strategy));
        }
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!(
            "bnb".parse::<Strategy>(),
            Ok(Strategy::BranchAndBound(FrontierPolicy::Lifo))
        );
        assert_eq!(
            "BNB/heap".parse::<Strategy>(),
            Ok(Strategy::BranchAndBound(FrontierPolicy::BestFirst))
        );
        assert_eq!("dp".parse::<Strategy>(), Ok(Strategy::DynamicProgramming));
        assert!("greedy/lifo".parse::<Strategy>().is_err());
        assert!("bnb/fifo".parse::<Strategy>().is_err());
        assert!("tabu".parse::<Strategy>().is_err());
    }

    #[test]
    fn test_exactness() {
        let exact: Vec<_> = Strategy::all().into_iter().filter(Strategy::is_exact).collect();
        assert_eq!(exact.len(), 4);
    }
}
