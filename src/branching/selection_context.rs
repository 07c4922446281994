use crate::basic_types::Random;
use crate::engine::ConstraintChecker;
use crate::engine::SearchState;
use crate::variables::CourseHourId;
use crate::variables::Domain;
use crate::variables::VariableStore;

use super::tie_breaking::TieKeys;

/// The view of the current search state handed to the selectors, bundled with the run's
/// entropy source so that randomised policies never reach for a process-wide generator.
#[derive(Debug)]
pub struct SelectionContext<'a> {
    state: &'a SearchState,
    store: &'a VariableStore,
    checker: &'a ConstraintChecker<'a>,
    random: &'a mut dyn Random,
}

impl<'a> SelectionContext<'a> {
    pub fn new(
        state: &'a SearchState,
        store: &'a VariableStore,
        checker: &'a ConstraintChecker<'a>,
        random: &'a mut dyn Random,
    ) -> Self {
        SelectionContext {
            state,
            store,
            checker,
            random,
        }
    }

    /// The unassigned variables in stable (id) order.
    pub fn unassigned_variables(&self) -> impl Iterator<Item = CourseHourId> + '_ {
        self.state.unassigned()
    }

    pub fn domain(&self, variable: CourseHourId) -> &Domain {
        self.state.domain(variable)
    }

    pub fn domain_size(&self, variable: CourseHourId) -> usize {
        self.state.domain(variable).len()
    }

    /// The total number of variables related to `variable`.
    pub fn degree(&self, variable: CourseHourId) -> usize {
        self.store.neighbours(variable).len()
    }

    /// The number of *unassigned* variables related to `variable`, i.e. the constraints which
    /// are still active for it.
    pub fn unassigned_degree(&self, variable: CourseHourId) -> usize {
        self.store
            .neighbours(variable)
            .iter()
            .filter(|&&neighbour| !self.state.is_assigned(neighbour))
            .count()
    }

    /// The tie keys of a variable: its position in the considered order, its identifier, its
    /// active constraints, and its degree.
    pub fn variable_tie_keys(&self, variable: CourseHourId, position: usize) -> TieKeys {
        TieKeys {
            index: position,
            id: u64::from(variable.id()),
            constraints: self.unassigned_degree(variable) as u64,
            degree: self.degree(variable) as u64,
        }
    }

    /// How constraining a candidate value is for the neighbouring domains: the total number of
    /// values it would render unsupported, and the number of distinct neighbours affected.
    pub fn value_impact(&self, variable: CourseHourId, candidate: u32) -> (u64, u64) {
        let value = self.store.candidate(variable, candidate);
        let mut removed = 0;
        let mut affected = 0;
        for &neighbour in self.store.neighbours(variable) {
            if self.state.is_assigned(neighbour) {
                continue;
            }
            let incompatible = self
                .state
                .domain(neighbour)
                .iter()
                .filter(|&other_candidate| {
                    let other = self.store.candidate(neighbour, other_candidate);
                    !self.checker.compatible(variable, value, neighbour, other)
                })
                .count() as u64;
            if incompatible > 0 {
                removed += incompatible;
                affected += 1;
            }
        }
        (removed, affected)
    }

    /// The entropy source of the run.
    pub fn random(&mut self) -> &mut dyn Random {
        &mut *self.random
    }
}
