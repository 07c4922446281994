use super::PropagationStatus;
use super::Propagator;
use crate::engine::ConstraintChecker;
use crate::engine::SearchState;
use crate::variables::CourseHourId;

/// The no-op policy: pure backtracking, every branch is explored without domain pruning.
#[derive(Debug, Clone, Copy)]
pub struct NoPropagation;

impl Propagator for NoPropagation {
    fn name(&self) -> &'static str {
        "NoPropagation"
    }

    fn propagate(
        &mut self,
        _state: &mut SearchState,
        _checker: &ConstraintChecker,
        _source: Option<CourseHourId>,
    ) -> PropagationStatus {
        PropagationStatus::FixedPoint
    }
}
