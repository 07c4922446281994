use std::collections::VecDeque;

use fnv::FnvHashMap;

use super::PropagationStatus;
use super::Propagator;
use crate::engine::ConstraintChecker;
use crate::engine::SearchState;
use crate::variables::CourseHourId;

/// AC-4: arc consistency via support counting.
///
/// For every (variable, value) pair a counter records how many supports it has in each
/// related variable's effective domain, and every (variable, value) pair keeps the reverse
/// list of pairs it supports. A pair whose counter reaches zero anywhere is removed and its
/// reverse list is used to decrement exactly the affected counters. The counting structures
/// are rebuilt per pass rather than maintained incrementally across the search.
#[derive(Debug, Clone, Copy)]
pub struct Ac4;

type Pair = (CourseHourId, u32);

impl Propagator for Ac4 {
    fn name(&self) -> &'static str {
        "Ac4"
    }

    fn propagate(
        &mut self,
        state: &mut SearchState,
        checker: &ConstraintChecker,
        _source: Option<CourseHourId>,
    ) -> PropagationStatus {
        let unassigned = state.unassigned().collect::<Vec<_>>();

        // counters[(x, a)][y] = number of supports of (x, a) in the effective domain of y.
        let mut counters: FnvHashMap<Pair, FnvHashMap<CourseHourId, usize>> =
            FnvHashMap::default();
        // supported_pairs[(y, b)] = the pairs (x, a) which count b among their supports.
        let mut supported_pairs: FnvHashMap<Pair, Vec<Pair>> = FnvHashMap::default();
        let mut removals: VecDeque<Pair> = VecDeque::new();

        for &variable in &unassigned {
            for candidate in state.domain(variable).iter() {
                let mut per_neighbour = FnvHashMap::default();

                for &neighbour in checker.neighbours(variable) {
                    let count = match state.assignment(neighbour) {
                        Some(assigned) => {
                            usize::from(checker.compatible_indices(
                                variable, candidate, neighbour, assigned,
                            ))
                        }
                        None => {
                            let mut supports = 0;
                            for other in state.domain(neighbour).iter() {
                                if checker.compatible_indices(variable, candidate, neighbour, other)
                                {
                                    supports += 1;
                                    supported_pairs
                                        .entry((neighbour, other))
                                        .or_default()
                                        .push((variable, candidate));
                                }
                            }
                            supports
                        }
                    };
                    let _ = per_neighbour.insert(neighbour, count);
                }

                if per_neighbour.values().any(|&count| count == 0) {
                    removals.push_back((variable, candidate));
                } else {
                    let _ = counters.insert((variable, candidate), per_neighbour);
                }
            }
        }

        while let Some((variable, candidate)) = removals.pop_front() {
            if !state.remove_value(variable, candidate) {
                continue;
            }
            if state.domain(variable).is_empty() {
                return PropagationStatus::Wipeout(variable);
            }

            let Some(dependents) = supported_pairs.remove(&(variable, candidate)) else {
                continue;
            };
            for dependent in dependents {
                if let Some(per_neighbour) = counters.get_mut(&dependent) {
                    if let Some(count) = per_neighbour.get_mut(&variable) {
                        *count -= 1;
                        if *count == 0 {
                            let _ = counters.remove(&dependent);
                            removals.push_back(dependent);
                        }
                    }
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
    use crate::propagators::Ac3;

    #[test]
    fn support_counting_reaches_the_same_fixed_point_as_the_worklist() {
        let mut ac3_fixture = fixture();
        let mut ac4_fixture = fixture();

        for current in [&mut ac3_fixture, &mut ac4_fixture] {
            let c3 = CourseHourId::new(2);
            for candidate in current.state.domain(c3).iter().collect::<Vec<_>>() {
                if current.store.candidate(c3, candidate).slot != 0 {
                    let _ = current.state.remove_value(c3, candidate);
                }
            }
        }

        let ac3_checker = ConstraintChecker::new(&ac3_fixture.instance, &ac3_fixture.store);
        let ac4_checker = ConstraintChecker::new(&ac4_fixture.instance, &ac4_fixture.store);

        assert_eq!(
            Ac3.propagate(&mut ac3_fixture.state, &ac3_checker, None),
            PropagationStatus::FixedPoint
        );
        assert_eq!(
            Ac4.propagate(&mut ac4_fixture.state, &ac4_checker, None),
            PropagationStatus::FixedPoint
        );

        for variable in ac3_fixture.store.ids() {
            assert_eq!(
                ac3_fixture.state.domain(variable),
                ac4_fixture.state.domain(variable),
                "fixed points diverge on {variable}"
            );
        }
    }

    #[test]
    fn a_cascading_removal_empties_the_domain() {
        let mut fixture = fixture();
        let checker = ConstraintChecker::new(&fixture.instance, &fixture.store);

        // c2 may only use slot s1; assigning c1 (same teacher) into s1 leaves nothing.
        let c1 = CourseHourId::new(0);
        let c2 = CourseHourId::new(1);
        for candidate in fixture.state.domain(c2).iter().collect::<Vec<_>>() {
            if fixture.store.candidate(c2, candidate).slot != 0 {
                let _ = fixture.state.remove_value(c2, candidate);
            }
        }
        fixture.state.assign(c1, 0);

        assert_eq!(
            Ac4.propagate(&mut fixture.state, &checker, Some(c1)),
            PropagationStatus::Wipeout(c2)
        );
    }

    #[test]
    fn a_second_pass_prunes_nothing_further() {
        let mut fixture = fixture();
        let checker = ConstraintChecker::new(&fixture.instance, &fixture.store);

        let c1 = CourseHourId::new(0);
        fixture.state.assign(c1, 0);

        let mut propagator = Ac4;
        let _ = propagator.propagate(&mut fixture.state, &checker, Some(c1));
        let converged = fixture.state.clone();

        let _ = propagator.propagate(&mut fixture.state, &checker, Some(c1));
        for variable in fixture.store.ids() {
            assert_eq!(fixture.state.domain(variable), converged.domain(variable));
        }
    }
}
