use crate::basic_types::Solution;
use crate::variables::CourseHourId;
use crate::variables::Domain;
use crate::variables::VariableStore;

/// The aggregate of the current assignment, the per-variable domains, and the set of
/// still-unassigned variables.
///
/// A state is owned by exactly one path of the search tree at a time: branching copies the
/// state ([`SearchState::branch`]) and mutates the copy, so undoing a branch is simply
/// discarding it. Sibling branches never observe each other's domains.
#[derive(Debug, Clone)]
pub struct SearchState {
    assignment: Vec<Option<u32>>,
    domains: Vec<Domain>,
    num_unassigned: usize,
}

impl SearchState {
    /// The root state: nothing assigned, every domain full.
    pub(crate) fn root(store: &VariableStore) -> Self {
        let domains = store.initial_domains();
        SearchState {
            assignment: vec![None; domains.len()],
            num_unassigned: domains.len(),
            domains,
        }
    }

    /// An independent copy for one child branch.
    pub(crate) fn branch(&self) -> Self {
        self.clone()
    }

    pub fn is_complete(&self) -> bool {
        self.num_unassigned == 0
    }

    pub fn num_unassigned(&self) -> usize {
        self.num_unassigned
    }

    pub fn is_assigned(&self, variable: CourseHourId) -> bool {
        self.assignment[variable.index()].is_some()
    }

    /// The candidate index assigned to `variable`, if any.
    pub fn assignment(&self, variable: CourseHourId) -> Option<u32> {
        self.assignment[variable.index()]
    }

    pub fn domain(&self, variable: CourseHourId) -> &Domain {
        &self.domains[variable.index()]
    }

    /// The unassigned variables in stable (id) order.
    pub fn unassigned(&self) -> impl Iterator<Item = CourseHourId> + '_ {
        self.assignment
            .iter()
            .enumerate()
            .filter(|(_, assignment)| assignment.is_none())
            .map(|(index, _)| CourseHourId::new(index as u32))
    }

    /// Records `candidate` as the value of `variable`. The caller has already established
    /// consistency against all prior assignments.
    pub(crate) fn assign(&mut self, variable: CourseHourId, candidate: u32) {
        debug_assert!(self.assignment[variable.index()].is_none());
        self.assignment[variable.index()] = Some(candidate);
        self.num_unassigned -= 1;
    }

    /// Removes `candidate` from the domain of `variable`; returns whether it was present.
    pub(crate) fn remove_value(&mut self, variable: CourseHourId, candidate: u32) -> bool {
        self.domains[variable.index()].remove(candidate)
    }

    /// Converts a complete state into the immutable solution it represents.
    pub(crate) fn into_solution(self) -> Solution {
        debug_assert!(self.is_complete());
        Solution::new(
            self.assignment
                .into_iter()
                .map(|assignment| assignment.expect("the state is complete"))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Course;
    use crate::model::Room;
    use crate::model::Teacher;
    use crate::model::TimeSlot;
    use crate::model::TimetableInstance;
    use crate::variables;

    fn small_store() -> VariableStore {
        let instance = TimetableInstance::new(
            vec![Course::new("c1", "t1", 2)],
            vec![Teacher::new("t1")],
            vec![Room::new("r1", 30)],
            vec![TimeSlot::new("s1", 0, 0), TimeSlot::new("s2", 0, 1)],
        );
        variables::build(&instance).unwrap()
    }

    #[test]
    fn assignments_shrink_the_unassigned_set() {
        let store = small_store();
        let mut state = SearchState::root(&store);
        assert_eq!(state.num_unassigned(), 2);

        state.assign(CourseHourId::new(0), 0);
        assert_eq!(state.num_unassigned(), 1);
        assert!(state.is_assigned(CourseHourId::new(0)));
        assert_eq!(
            state.unassigned().collect::<Vec<_>>(),
            vec![CourseHourId::new(1)]
        );

        state.assign(CourseHourId::new(1), 1);
        assert!(state.is_complete());
    }

    #[test]
    fn branches_do_not_share_domains() {
        let store = small_store();
        let state = SearchState::root(&store);

        let mut child = state.branch();
        assert!(child.remove_value(CourseHourId::new(0), 0));

        assert_eq!(state.domain(CourseHourId::new(0)).len(), 2);
        assert_eq!(child.domain(CourseHourId::new(0)).len(), 1);
    }

    #[test]
    fn a_complete_state_becomes_a_solution() {
        let store = small_store();
        let mut state = SearchState::root(&store);
        state.assign(CourseHourId::new(0), 0);
        state.assign(CourseHourId::new(1), 1);

        let solution = state.into_solution();
        assert_eq!(solution.value(CourseHourId::new(0)), 0);
        assert_eq!(solution.value(CourseHourId::new(1)), 1);
    }
}
