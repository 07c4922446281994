//! Constraint propagation: shrinking the domains of unassigned variables after each
//! assignment, and detecting domain wipeout: the proof that the current partial assignment
//! cannot be extended.

mod arc_consistency_3;
mod arc_consistency_4;
mod forward_checking;
mod no_propagation;
mod path_consistency;

pub use arc_consistency_3::Ac3;
pub use arc_consistency_4::Ac4;
pub use forward_checking::ForwardChecking;
pub use no_propagation::NoPropagation;
pub use path_consistency::PathConsistency;

use crate::engine::ConstraintChecker;
use crate::engine::SearchState;
use crate::options::PropagationPolicy;
use crate::variables::CourseHourId;

/// The result of one propagation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropagationStatus {
    /// The domains were pruned to a fixed point; the branch remains open.
    FixedPoint,
    /// The domain of the contained variable became empty; the branch is infeasible.
    Wipeout(CourseHourId),
}

impl PropagationStatus {
    pub fn is_wipeout(&self) -> bool {
        matches!(self, PropagationStatus::Wipeout(_))
    }
}

/// The interface every propagation policy implements.
///
/// A pass prunes only the domains of unassigned variables, returns
/// [`PropagationStatus::Wipeout`] the instant a domain empties, and is idempotent: a second
/// pass over a converged state prunes nothing further.
pub trait Propagator {
    fn name(&self) -> &'static str;

    /// Prunes `state` to a fixed point. `source` is the variable assigned immediately before
    /// the call, or [`None`] for the initial pass over the root state.
    fn propagate(
        &mut self,
        state: &mut SearchState,
        checker: &ConstraintChecker,
        source: Option<CourseHourId>,
    ) -> PropagationStatus;
}

/// Instantiates the propagator for the configured policy.
pub fn create(policy: PropagationPolicy) -> Box<dyn Propagator> {
    match policy {
        PropagationPolicy::None => Box::new(NoPropagation),
        PropagationPolicy::ForwardChecking => Box::new(ForwardChecking),
        PropagationPolicy::Ac3 => Box::new(Ac3),
        PropagationPolicy::Ac4 => Box::new(Ac4),
        PropagationPolicy::PathConsistency => Box::new(PathConsistency),
    }
}
