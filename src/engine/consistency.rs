use super::SearchState;
use crate::model::TimetableInstance;
use crate::variables::Candidate;
use crate::variables::CourseHourId;
use crate::variables::VariableStore;

/// The pure predicate layer over the hard-constraint catalog.
///
/// Decides whether a candidate assignment is consistent with a partial assignment, and whether
/// a value still has support in the current domains of related variables. Neither operation
/// mutates any state.
#[derive(Debug)]
pub struct ConstraintChecker<'a> {
    instance: &'a TimetableInstance,
    store: &'a VariableStore,
}

impl<'a> ConstraintChecker<'a> {
    pub fn new(instance: &'a TimetableInstance, store: &'a VariableStore) -> Self {
        ConstraintChecker { instance, store }
    }

    /// Whether assigning (`variable` → `candidate`) violates a hard constraint against an
    /// already-assigned variable. On violation the conflicting variables are returned, which
    /// backjumping and learning use to attribute the conflict.
    pub fn is_consistent(
        &self,
        variable: CourseHourId,
        candidate: u32,
        state: &SearchState,
    ) -> Result<(), Vec<CourseHourId>> {
        let value = self.store.candidate(variable, candidate);
        let course = &self.instance.courses[self.store.course_hour(variable).course as usize];
        if self.instance.rooms[value.room as usize].capacity < course.student_count {
            return Err(Vec::new());
        }

        let mut conflicts = Vec::new();
        for &neighbour in self.store.neighbours(variable) {
            if let Some(assigned) = state.assignment(neighbour) {
                let other = self.store.candidate(neighbour, assigned);
                if !self.compatible(variable, value, neighbour, other) {
                    conflicts.push(neighbour);
                }
            }
        }

        if conflicts.is_empty() {
            Ok(())
        } else {
            Err(conflicts)
        }
    }

    /// Whether, for every *other unassigned* variable related to `variable`, the current
    /// domain of that variable contains at least one value compatible with `candidate`.
    pub fn has_support(&self, variable: CourseHourId, candidate: u32, state: &SearchState) -> bool {
        let value = self.store.candidate(variable, candidate);
        self.store
            .neighbours(variable)
            .iter()
            .filter(|&&neighbour| !state.is_assigned(neighbour))
            .all(|&neighbour| self.supported_against(variable, value, neighbour, state))
    }

    /// Whether the effective domain of `neighbour` (its assignment if assigned, its current
    /// domain otherwise) contains a value compatible with (`variable` → `candidate`).
    pub fn supported_by(
        &self,
        variable: CourseHourId,
        candidate: u32,
        neighbour: CourseHourId,
        state: &SearchState,
    ) -> bool {
        let value = self.store.candidate(variable, candidate);
        match state.assignment(neighbour) {
            Some(assigned) => {
                let other = self.store.candidate(neighbour, assigned);
                self.compatible(variable, value, neighbour, other)
            }
            None => self.supported_against(variable, value, neighbour, state),
        }
    }

    fn supported_against(
        &self,
        variable: CourseHourId,
        value: Candidate,
        neighbour: CourseHourId,
        state: &SearchState,
    ) -> bool {
        state.domain(neighbour).iter().any(|other_candidate| {
            let other = self.store.candidate(neighbour, other_candidate);
            self.compatible(variable, value, neighbour, other)
        })
    }

    /// The variables sharing a hard-constraint relation with `variable`.
    pub fn neighbours(&self, variable: CourseHourId) -> &[CourseHourId] {
        self.store.neighbours(variable)
    }

    /// [`ConstraintChecker::compatible`] addressed by candidate indices.
    pub fn compatible_indices(
        &self,
        variable: CourseHourId,
        candidate: u32,
        other_variable: CourseHourId,
        other_candidate: u32,
    ) -> bool {
        self.compatible(
            variable,
            self.store.candidate(variable, candidate),
            other_variable,
            self.store.candidate(other_variable, other_candidate),
        )
    }

    /// Whether two candidate values can coexist on two distinct variables. Values in
    /// different slots never conflict; values in the same slot conflict when they collide on
    /// the teacher, the room, or an attending class.
    pub fn compatible(
        &self,
        variable: CourseHourId,
        value: Candidate,
        other_variable: CourseHourId,
        other_value: Candidate,
    ) -> bool {
        if value.slot != other_value.slot {
            return true;
        }

        if value.teacher == other_value.teacher || value.room == other_value.room {
            return false;
        }

        let course = self.store.course_hour(variable).course;
        let other_course = self.store.course_hour(other_variable).course;
        !self.store.classes_overlap(course, other_course)
    }
}
