use super::PropagationStatus;
use super::Propagator;
use crate::engine::ConstraintChecker;
use crate::engine::SearchState;
use crate::variables::CourseHourId;

/// Forward checking: after an assignment, remove the values of every directly related
/// unassigned variable which are incompatible with the assigned value. The cheapest
/// propagation policy; it never looks further than one arc.
#[derive(Debug, Clone, Copy)]
pub struct ForwardChecking;

impl Propagator for ForwardChecking {
    fn name(&self) -> &'static str {
        "ForwardChecking"
    }

    fn propagate(
        &mut self,
        state: &mut SearchState,
        checker: &ConstraintChecker,
        source: Option<CourseHourId>,
    ) -> PropagationStatus {
        // Without a fresh assignment there is nothing to check against.
        let Some(source) = source else {
            return PropagationStatus::FixedPoint;
        };

        for &neighbour in checker.neighbours(source) {
            if state.is_assigned(neighbour) {
                continue;
            }

            let unsupported = state
                .domain(neighbour)
                .iter()
                .filter(|&candidate| !checker.supported_by(neighbour, candidate, source, state))
                .collect::<Vec<_>>();

            for candidate in unsupported {
                let _ = state.remove_value(neighbour, candidate);
            }

            if state.domain(neighbour).is_empty() {
                return PropagationStatus::Wipeout(neighbour);
            }
        }

        PropagationStatus::FixedPoint
    }
}
