use std::collections::VecDeque;

use super::PropagationStatus;
use super::Propagator;
use crate::engine::ConstraintChecker;
use crate::engine::SearchState;
use crate::variables::CourseHourId;

/// AC-3: maintains a worklist of (variable, related-variable) arcs, removes unsupported
/// values from the first variable of each arc, and re-enqueues the arcs pointing into a
/// variable whenever its domain shrinks. The worklist order affects only performance, never
/// the resulting fixed point.
#[derive(Debug, Clone, Copy)]
pub struct Ac3;

impl Propagator for Ac3 {
    fn name(&self) -> &'static str {
        "Ac3"
    }

    fn propagate(
        &mut self,
        state: &mut SearchState,
        checker: &ConstraintChecker,
        source: Option<CourseHourId>,
    ) -> PropagationStatus {
        let mut worklist: VecDeque<(CourseHourId, CourseHourId)> = VecDeque::new();

        match source {
            // After an assignment only the arcs into the assigned variable can have lost
            // support; the cascade re-enqueues everything else that needs revisiting.
            Some(source) => {
                for &neighbour in checker.neighbours(source) {
                    if !state.is_assigned(neighbour) {
                        worklist.push_back((neighbour, source));
                    }
                }
            }
            // The initial pass considers every arc between related variables.
            None => {
                for variable in state.unassigned().collect::<Vec<_>>() {
                    for &neighbour in checker.neighbours(variable) {
                        worklist.push_back((variable, neighbour));
                    }
                }
            }
        }

        while let Some((variable, against)) = worklist.pop_front() {
            if state.is_assigned(variable) {
                continue;
            }

            let unsupported = state
                .domain(variable)
                .iter()
                .filter(|&candidate| !checker.supported_by(variable, candidate, against, state))
                .collect::<Vec<_>>();
            if unsupported.is_empty() {
                continue;
            }

            for candidate in unsupported {
                let _ = state.remove_value(variable, candidate);
            }
            if state.domain(variable).is_empty() {
                return PropagationStatus::Wipeout(variable);
            }

            for &neighbour in checker.neighbours(variable) {
                if neighbour != against && !state.is_assigned(neighbour) {
                    worklist.push_back((neighbour, variable));
                }
            }
        }

        PropagationStatus::FixedPoint
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::branching::tests::fixture;

    #[test]
    fn values_without_support_in_a_reduced_neighbour_are_pruned() {
        let mut fixture = fixture();
        let checker = ConstraintChecker::new(&fixture.instance, &fixture.store);

        // Restrict c3 to its (s1, r3) candidate; every other variable's (s1, r3) value now
        // lacks support against c3.
        let c3 = CourseHourId::new(2);
        for candidate in fixture.state.domain(c3).iter().collect::<Vec<_>>() {
            if fixture.store.candidate(c3, candidate).slot != 0 {
                let _ = fixture.state.remove_value(c3, candidate);
            }
        }

        let mut propagator = Ac3;
        let status = propagator.propagate(&mut fixture.state, &checker, None);

        assert_eq!(status, PropagationStatus::FixedPoint);
        for variable in [CourseHourId::new(0), CourseHourId::new(1)] {
            assert_eq!(fixture.state.domain(variable).len(), 5);
            assert!(fixture.state.domain(variable).iter().all(|candidate| {
                let value = fixture.store.candidate(variable, candidate);
                value.slot != 0 || value.room != 2
            }));
        }
    }

    #[test]
    fn propagation_is_idempotent_on_a_converged_state() {
        let mut fixture = fixture();
        let checker = ConstraintChecker::new(&fixture.instance, &fixture.store);

        let c3 = CourseHourId::new(2);
        for candidate in fixture.state.domain(c3).iter().collect::<Vec<_>>() {
            if fixture.store.candidate(c3, candidate).slot != 0 {
                let _ = fixture.state.remove_value(c3, candidate);
            }
        }

        let mut propagator = Ac3;
        let _ = propagator.propagate(&mut fixture.state, &checker, None);
        let converged = fixture.state.clone();

        let status = propagator.propagate(&mut fixture.state, &checker, None);
        assert_eq!(status, PropagationStatus::FixedPoint);
        for variable in fixture.store.ids() {
            assert_eq!(
                fixture.state.domain(variable),
                converged.domain(variable),
                "the second pass pruned {variable}"
            );
        }
    }

    #[test]
    fn an_assignment_cascades_through_the_arcs() {
        let mut fixture = fixture();
        let checker = ConstraintChecker::new(&fixture.instance, &fixture.store);

        let c1 = CourseHourId::new(0);
        fixture.state.assign(c1, 0); // (s1, r1)

        let mut propagator = Ac3;
        let status = propagator.propagate(&mut fixture.state, &checker, Some(c1));

        assert_eq!(status, PropagationStatus::FixedPoint);
        // Same teacher: c2 keeps only its s2 values.
        assert_eq!(fixture.state.domain(CourseHourId::new(1)).len(), 3);
    }
}
