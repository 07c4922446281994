use log::error;
use thiserror::Error;

use super::outputs::CourseAssignment;
use super::outputs::SchedulingOutcome;
use super::Scheduler;
use crate::basic_types::Solution;
use crate::engine::search_engine::SearchEngine;
use crate::engine::search_engine::SearchOutcome;
use crate::engine::ConstraintChecker;
use crate::model::HardConstraint;
use crate::model::TimetableInstance;
use crate::options::ConfigurationError;
use crate::options::SearchConfig;
use crate::variables;
use crate::variables::BuildError;
use crate::variables::VariableStore;

/// A failure during scheduler setup. Setup is the only phase that can fail: once a scheduler
/// is constructed, a run always produces a [`SchedulingOutcome`].
#[derive(Debug, Error)]
pub enum SchedulerSetupError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    #[error(transparent)]
    Build(#[from] BuildError),
}

/// The backtracking scheduler: a complete solver which, given enough budget, either finds an
/// assignment or proves that none exists.
///
/// Construction validates the configuration and builds the variable set; both are the only
/// sources of errors. Every [`run`](Scheduler::run) starts from fresh statistics and a fresh
/// seeded generator, so repeated runs of a deterministic configuration are identical.
#[derive(Debug)]
pub struct BacktrackingScheduler {
    instance: TimetableInstance,
    store: VariableStore,
    config: SearchConfig,
}

impl BacktrackingScheduler {
    pub fn new(
        instance: TimetableInstance,
        config: SearchConfig,
    ) -> Result<Self, SchedulerSetupError> {
        config.validate()?;
        let store = variables::build(&instance)?;
        Ok(BacktrackingScheduler {
            instance,
            store,
            config,
        })
    }

    /// Converts the engine's internal solution into the externally shared assignment shape,
    /// replaying the full hard-constraint check when validation is enabled.
    fn materialise(&self, solution: &Solution) -> Vec<CourseAssignment> {
        let valid = if self.config.enable_solution_validation {
            self.validate(solution)
        } else {
            vec![true; solution.num_variables()]
        };

        solution
            .iter()
            .map(|(variable, candidate)| {
                let value = self.store.candidate(variable, candidate);
                let course_hour = self.store.course_hour(variable);
                CourseAssignment {
                    course_id: self.instance.courses[course_hour.course as usize].id.clone(),
                    hour_index: course_hour.hour_index,
                    teacher_id: self.instance.teachers[value.teacher as usize].id.clone(),
                    room_id: self.instance.rooms[value.room as usize].id.clone(),
                    slot_id: self.instance.slots[value.slot as usize].id.clone(),
                    valid: valid[variable.index()],
                }
            })
            .collect()
    }

    /// Replays the pairwise hard-constraint check over the complete assignment. A violation
    /// here indicates an engine defect; it is logged and reflected in the validity flags
    /// rather than silently dropped.
    fn validate(&self, solution: &Solution) -> Vec<bool> {
        let checker = ConstraintChecker::new(&self.instance, &self.store);
        let mut valid = vec![true; solution.num_variables()];

        let assignments = solution.iter().collect::<Vec<_>>();
        for &(variable, candidate) in &assignments {
            let value = self.store.candidate(variable, candidate);
            let students =
                self.instance.courses[self.store.course_hour(variable).course as usize].student_count;
            if self.instance.rooms[value.room as usize].capacity < students {
                error!(
                    "solution validation failed: {variable} violates {:?}",
                    HardConstraint::RoomCapacity
                );
                valid[variable.index()] = false;
            }
        }
        for (position, &(variable, candidate)) in assignments.iter().enumerate() {
            for &(other_variable, other_candidate) in &assignments[position + 1..] {
                if !checker.compatible_indices(variable, candidate, other_variable, other_candidate)
                {
                    let value = self.store.candidate(variable, candidate);
                    let other = self.store.candidate(other_variable, other_candidate);
                    let violated = if value.teacher == other.teacher {
                        HardConstraint::TeacherConflict
                    } else if value.room == other.room {
                        HardConstraint::RoomConflict
                    } else {
                        HardConstraint::ClassConflict
                    };
                    error!(
                        "solution validation failed: {variable} and {other_variable} violate {violated:?}"
                    );
                    valid[variable.index()] = false;
                    valid[other_variable.index()] = false;
                }
            }
        }
        valid
    }
}

impl Scheduler for BacktrackingScheduler {
    fn run(&mut self) -> SchedulingOutcome {
        let engine = SearchEngine::new(&self.instance, &self.store, &self.config);
        let (outcome, statistics) = engine.solve();
        statistics.log("backtracking");

        match outcome {
            SearchOutcome::Feasible(solution) => {
                SchedulingOutcome::Feasible(self.materialise(&solution), statistics)
            }
            SearchOutcome::Infeasible => SchedulingOutcome::Infeasible(statistics),
            SearchOutcome::Aborted(reason) => SchedulingOutcome::Aborted(reason, statistics),
        }
    }
}
