use super::PropagationStatus;
use super::Propagator;
use crate::engine::ConstraintChecker;
use crate::engine::SearchState;
use crate::variables::CourseHourId;

/// Path consistency, approximated by arc consistency plus pairwise triangle checks: a value
/// survives only if, for every pair of mutually related unassigned neighbours, it can be
/// extended by one value from each such that all three values coexist. The sweeps are
/// repeated until a joint fixed point is reached.
///
/// This is an approximation of exact path consistency, but a strictly stronger filter than
/// arc consistency with the same external contract.
#[derive(Debug, Clone, Copy)]
pub struct PathConsistency;

impl Propagator for PathConsistency {
    fn name(&self) -> &'static str {
        "PathConsistency"
    }

    fn propagate(
        &mut self,
        state: &mut SearchState,
        checker: &ConstraintChecker,
        _source: Option<CourseHourId>,
    ) -> PropagationStatus {
        loop {
            let mut changed = false;
            let unassigned = state.unassigned().collect::<Vec<_>>();

            for &variable in &unassigned {
                for candidate in state.domain(variable).iter().collect::<Vec<_>>() {
                    let supported = checker.is_consistent(variable, candidate, state).is_ok()
                        && checker.has_support(variable, candidate, state)
                        && triangles_extend(variable, candidate, state, checker);

                    if !supported {
                        let _ = state.remove_value(variable, candidate);
                        changed = true;
                        if state.domain(variable).is_empty() {
                            return PropagationStatus::Wipeout(variable);
                        }
                    }
                }
            }

            if !changed {
                return PropagationStatus::FixedPoint;
            }
        }
    }
}

/// Whether (`variable` → `candidate`) extends to every triangle of mutually related
/// unassigned neighbours.
fn triangles_extend(
    variable: CourseHourId,
    candidate: u32,
    state: &SearchState,
    checker: &ConstraintChecker,
) -> bool {
    let neighbours = checker
        .neighbours(variable)
        .iter()
        .copied()
        .filter(|&neighbour| !state.is_assigned(neighbour))
        .collect::<Vec<_>>();

    for (position, &first) in neighbours.iter().enumerate() {
        for &second in &neighbours[position + 1..] {
            if !checker.neighbours(first).contains(&second) {
                continue;
            }

            let extends = state.domain(first).iter().any(|first_candidate| {
                checker.compatible_indices(variable, candidate, first, first_candidate)
                    && state.domain(second).iter().any(|second_candidate| {
                        checker.compatible_indices(variable, candidate, second, second_candidate)
                            && checker.compatible_indices(
                                first,
                                first_candidate,
                                second,
                                second_candidate,
                            )
                    })
            });

            if !extends {
                return false;
            }
        }
    }

    true
}
