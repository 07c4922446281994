//! Termination conditions are polled by the search engine at the top of every step. They
//! indicate when the engine should give up, even though no definitive conclusion has been
//! reached; the outcome of an interrupted run is always distinct from a proof of
//! infeasibility.

mod combinator;
mod failure_budget;
mod node_budget;
mod time_budget;

pub use combinator::Combinator;
pub use failure_budget::FailureBudget;
pub use node_budget::NodeBudget;
pub use time_budget::TimeBudget;

use crate::basic_types::SearchStatistics;

/// The budget which was exceeded when a run was aborted. An aborted run proves nothing about
/// feasibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbortReason {
    /// The wall-clock budget ran out.
    TimeLimit,
    /// A branch exceeded the maximum search depth.
    DepthLimit,
    /// The node budget ran out.
    NodeLimit,
    /// The failure budget ran out.
    FailureLimit,
}

impl std::fmt::Display for AbortReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AbortReason::TimeLimit => write!(f, "time limit exceeded"),
            AbortReason::DepthLimit => write!(f, "depth limit exceeded"),
            AbortReason::NodeLimit => write!(f, "node limit exceeded"),
            AbortReason::FailureLimit => write!(f, "failure limit exceeded"),
        }
    }
}

/// The central trait defining a termination condition. The statistics of the running search
/// are provided so that budgets over the engine's own counters can be expressed without
/// shared mutable state.
pub trait TerminationCondition {
    /// Returns the budget that ran out, or [`None`] while the search may continue.
    fn should_stop(&mut self, statistics: &SearchStatistics) -> Option<AbortReason>;
}
