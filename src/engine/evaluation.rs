use fnv::FnvHashMap;

use crate::basic_types::Solution;
use crate::model::SoftConstraintKind;
use crate::model::TimetableInstance;
use crate::variables::VariableStore;

/// Computes the weighted soft-constraint penalty of a complete solution.
///
/// The penalty never influences feasibility; it is consulted only to pick the best among the
/// solutions accumulated when more than one is requested. Lower is better.
#[derive(Debug)]
pub(crate) struct SolutionEvaluator<'a> {
    instance: &'a TimetableInstance,
    store: &'a VariableStore,
}

impl<'a> SolutionEvaluator<'a> {
    pub(crate) fn new(instance: &'a TimetableInstance, store: &'a VariableStore) -> Self {
        SolutionEvaluator { instance, store }
    }

    pub(crate) fn penalty(&self, solution: &Solution) -> f64 {
        self.instance
            .catalog
            .soft_constraints
            .iter()
            .filter(|soft| soft.enabled)
            .map(|soft| {
                let component = match soft.kind {
                    SoftConstraintKind::TeacherPreference => self.teacher_preference(solution),
                    SoftConstraintKind::RoomCapacityFit => self.capacity_waste(solution),
                    SoftConstraintKind::Continuity => self.continuity(solution),
                    SoftConstraintKind::BreakSpacing => self.break_spacing(solution),
                };
                soft.weight * component
            })
            .sum()
    }

    /// One penalty point per assignment outside the teacher's (non-empty) preferred slots.
    fn teacher_preference(&self, solution: &Solution) -> f64 {
        let mut penalty = 0.0;
        for (variable, candidate) in solution.iter() {
            let value = self.store.candidate(variable, candidate);
            let teacher = &self.instance.teachers[value.teacher as usize];
            if teacher.preferred_slots.is_empty() {
                continue;
            }
            let slot_id = &self.instance.slots[value.slot as usize].id;
            if !teacher.preferred_slots.contains(slot_id) {
                penalty += 1.0;
            }
        }
        penalty
    }

    /// The wasted-capacity ratio summed over all assignments.
    fn capacity_waste(&self, solution: &Solution) -> f64 {
        let mut penalty = 0.0;
        for (variable, candidate) in solution.iter() {
            let value = self.store.candidate(variable, candidate);
            let capacity = self.instance.rooms[value.room as usize].capacity;
            if capacity == 0 {
                continue;
            }
            let students =
                self.instance.courses[self.store.course_hour(variable).course as usize].student_count;
            penalty += f64::from(capacity - students) / f64::from(capacity);
        }
        penalty
    }

    /// One penalty point per extra hour of a course crammed onto a day it already uses.
    fn continuity(&self, solution: &Solution) -> f64 {
        let mut per_course_day: FnvHashMap<(u32, u32), u32> = FnvHashMap::default();
        for (variable, candidate) in solution.iter() {
            let value = self.store.candidate(variable, candidate);
            let course = self.store.course_hour(variable).course;
            let day = self.instance.slots[value.slot as usize].day;
            *per_course_day.entry((course, day)).or_insert(0) += 1;
        }
        per_course_day
            .values()
            .map(|&count| f64::from(count.saturating_sub(1)))
            .sum()
    }

    /// One penalty point per period beyond two in any teacher's run of consecutive periods.
    fn break_spacing(&self, solution: &Solution) -> f64 {
        let mut per_teacher_day: FnvHashMap<(u32, u32), Vec<u32>> = FnvHashMap::default();
        for (variable, candidate) in solution.iter() {
            let value = self.store.candidate(variable, candidate);
            let slot = &self.instance.slots[value.slot as usize];
            per_teacher_day
                .entry((value.teacher, slot.day))
                .or_default()
                .push(slot.period);
        }

        let mut penalty = 0.0;
        for periods in per_teacher_day.values_mut() {
            periods.sort_unstable();
            periods.dedup();

            let mut run = 1;
            for position in 1..periods.len() {
                if periods[position] == periods[position - 1] + 1 {
                    run += 1;
                } else {
                    penalty += f64::from((run - 2).max(0));
                    run = 1;
                }
            }
            penalty += f64::from((run - 2).max(0));
        }
        penalty
    }
}
