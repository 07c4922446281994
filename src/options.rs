//! The configuration surface of a run: the policy choices, the termination budgets, and the
//! feature toggles. A [`SearchConfig`] is validated once before a run starts and is never
//! mutated during a run.

use std::time::Duration;

use thiserror::Error;

/// Determines how the next unassigned variable is picked, in increasing heuristic strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VariableSelectionPolicy {
    /// The first unassigned variable in stable iteration order. Deterministic.
    FirstUnassigned,
    /// The unassigned variable with the smallest current domain.
    #[default]
    MinimumRemainingValues,
    /// The unassigned variable related to the largest number of other unassigned variables.
    DegreeHeuristic,
    /// A weighted combination of domain size and degree.
    MostConstraining,
}

/// Determines the order in which the candidate values of the chosen variable are tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValueSelectionPolicy {
    /// Domain iteration order. Deterministic.
    NaturalOrder,
    /// Values that remove the fewest options from neighbouring domains first.
    #[default]
    LeastConstraining,
    /// Values that remove the most options from neighbouring domains first; useful for fast
    /// infeasibility proofs and for enumerating all solutions.
    MostConstraining,
    /// A uniformly random order drawn from the run's seeded generator.
    RandomOrder,
}

/// The propagation policy applied after each assignment to shrink the remaining domains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PropagationPolicy {
    /// No propagation; pure backtracking.
    None,
    /// Remove unsupported values from the variables directly related to the assigned one.
    ForwardChecking,
    /// Arc consistency via a worklist of arcs (AC-3).
    #[default]
    Ac3,
    /// Arc consistency via support counting (AC-4).
    Ac4,
    /// Path consistency, approximated by AC-3 plus pairwise triangle checks.
    PathConsistency,
}

/// The rule used to pick among equally ranked options when a selection heuristic ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TieBreakPolicy {
    /// Pick uniformly at random among the tied options (seeded, reproducible).
    Random,
    /// Keep the first tied option encountered.
    #[default]
    First,
    /// Keep the last tied option encountered.
    Last,
    /// The tied option with the smallest position in the considered order.
    MinIndex,
    /// The tied option with the largest position in the considered order.
    MaxIndex,
    /// The tied option with the smallest identifier.
    MinId,
    /// The tied option with the largest identifier.
    MaxId,
    /// The tied option with the fewest remaining constraints.
    MinConstraints,
    /// The tied option with the most remaining constraints.
    MaxConstraints,
    /// The tied option with the smallest degree.
    MinDegree,
    /// The tied option with the largest degree.
    MaxDegree,
}

/// The overall discipline in which the search tree is explored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchStrategy {
    /// Recursive depth-first backtracking. Complete.
    #[default]
    DepthFirst,
    /// An explicit frontier explored in breadth-first order. Complete, memory-hungry.
    BreadthFirst,
    /// Depth-first search cut at the depth budget; a cut branch makes exhaustion inconclusive.
    DepthLimited,
    /// Depth-limited sweeps with a growing limit. Complete.
    IterativeDeepening,
}

/// An invalid [`SearchConfig`] field, reported before the run starts.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    #[error("configuration field '{field}' must be positive")]
    NonPositive { field: &'static str },
    #[error("configuration field '{field}' must lie in [0, 1] but is {value}")]
    RateOutOfRange { field: &'static str, value: f64 },
}

/// The frozen set of policy choices and budgets for one run.
///
/// All numeric budgets are validated by [`SearchConfig::validate`] when the scheduler is
/// constructed; an invalid configuration is a setup-time failure, never a mid-run one.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub variable_selection: VariableSelectionPolicy,
    pub value_selection: ValueSelectionPolicy,
    pub tie_breaking: TieBreakPolicy,
    pub propagation: PropagationPolicy,
    pub search_strategy: SearchStrategy,

    /// Honoured when `propagation` is [`PropagationPolicy::None`]: upgrades the run to forward
    /// checking. Any stronger configured policy subsumes this flag.
    pub enable_forward_checking: bool,
    /// Jump back past choice points that did not contribute to a conflict. Only applied to
    /// first-solution depth-first search.
    pub enable_backjumping: bool,
    /// Record the conflict sets of exhausted branches as nogoods and reject matching
    /// assignments without a consistency check.
    pub enable_learning: bool,
    /// The maximum number of recorded nogoods; once full, further conflicts are not recorded.
    pub max_learned_nogoods: usize,
    /// Periodically restart the search from the root, keeping learned nogoods.
    pub enable_restart: bool,
    /// The number of failures before the first restart; the interval doubles per restart.
    pub restart_interval: u64,
    /// With probability `randomization_probability`, replace the selected variable by a
    /// uniformly random unassigned one.
    pub enable_randomization: bool,
    /// Probability in [0, 1] used when randomization is enabled.
    pub randomization_probability: f64,

    /// Wall-clock budget of the run.
    pub max_search_time: Duration,
    /// The maximum depth of the search tree.
    pub max_search_depth: usize,
    /// The maximum number of visited nodes.
    pub max_nodes: u64,
    /// The maximum combined number of consistency and propagation failures.
    pub max_failures: u64,
    /// Stop after this many solutions; with more than one, the best-ranked solution under the
    /// soft constraints is returned.
    pub max_solutions: usize,
    /// Replay the full hard-constraint check over a found solution and record the result in
    /// the per-assignment validity flags.
    pub enable_solution_validation: bool,

    /// Seed of the run's random generator; every randomised policy draws from it.
    pub random_seed: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            variable_selection: VariableSelectionPolicy::default(),
            value_selection: ValueSelectionPolicy::default(),
            tie_breaking: TieBreakPolicy::default(),
            propagation: PropagationPolicy::default(),
            search_strategy: SearchStrategy::default(),
            enable_forward_checking: true,
            enable_backjumping: false,
            enable_learning: false,
            max_learned_nogoods: 1000,
            enable_restart: false,
            restart_interval: 100,
            enable_randomization: false,
            randomization_probability: 0.1,
            max_search_time: Duration::from_secs(300),
            max_search_depth: 1000,
            max_nodes: 1_000_000,
            max_failures: 10_000,
            max_solutions: 1,
            enable_solution_validation: true,
            random_seed: 42,
        }
    }
}

impl SearchConfig {
    /// Checks every numeric field, returning the first offending one.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.max_search_time.is_zero() {
            return Err(ConfigurationError::NonPositive {
                field: "max_search_time",
            });
        }
        if self.max_search_depth == 0 {
            return Err(ConfigurationError::NonPositive {
                field: "max_search_depth",
            });
        }
        if self.max_nodes == 0 {
            return Err(ConfigurationError::NonPositive { field: "max_nodes" });
        }
        if self.max_failures == 0 {
            return Err(ConfigurationError::NonPositive {
                field: "max_failures",
            });
        }
        if self.max_solutions == 0 {
            return Err(ConfigurationError::NonPositive {
                field: "max_solutions",
            });
        }
        if self.restart_interval == 0 {
            return Err(ConfigurationError::NonPositive {
                field: "restart_interval",
            });
        }
        if !(0.0..=1.0).contains(&self.randomization_probability) {
            return Err(ConfigurationError::RateOutOfRange {
                field: "randomization_probability",
                value: self.randomization_probability,
            });
        }
        Ok(())
    }

    /// The propagation policy actually applied, after resolving the forward-checking flag.
    pub fn effective_propagation(&self) -> PropagationPolicy {
        match self.propagation {
            PropagationPolicy::None if self.enable_forward_checking => {
                PropagationPolicy::ForwardChecking
            }
            other => other,
        }
    }
}
