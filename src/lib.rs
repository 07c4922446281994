//! # timetable-solver
//!
//! A backtracking constraint solver for course timetabling: it assigns every required weekly
//! course hour to a (time slot, room, teacher) combination such that no teacher, room, or
//! student class is double-booked and every room holds its course's enrolment.
//!
//! The solver is complete: given enough budget it either produces an assignment or proves
//! that none exists. The search is a configurable depth-first backtracking engine; variable
//! and value ordering heuristics are pluggable, domains are pruned between assignments by a
//! configurable constraint-propagation policy, and the run is bounded by independent time,
//! depth, node, and failure budgets.
//!
//! # Using the solver
//!
//! A run needs the problem facts ([`model::TimetableInstance`]) and a configuration
//! ([`SearchConfig`]); both are validated when the scheduler is constructed:
//!
//! ```rust
//! use timetable_solver::model::{Course, Room, Teacher, TimeSlot, TimetableInstance};
//! use timetable_solver::{BacktrackingScheduler, Scheduler, SchedulingOutcome, SearchConfig};
//!
//! let instance = TimetableInstance::new(
//!     vec![Course::new("algebra", "turing", 2)
//!         .with_student_count(25)
//!         .with_class("year-1")],
//!     vec![Teacher::new("turing")],
//!     vec![Room::new("main-hall", 30)],
//!     vec![TimeSlot::new("mon-1", 0, 0), TimeSlot::new("mon-2", 0, 1)],
//! );
//!
//! let mut scheduler = BacktrackingScheduler::new(instance, SearchConfig::default())
//!     .expect("the configuration and the instance are well-formed");
//!
//! match scheduler.run() {
//!     SchedulingOutcome::Feasible(assignments, statistics) => {
//!         // Both weekly hours of the course are scheduled, in distinct slots.
//!         assert_eq!(assignments.len(), 2);
//!         assert!(assignments.iter().all(|assignment| assignment.valid));
//!         assert_ne!(assignments[0].slot_id, assignments[1].slot_id);
//!         assert!(statistics.nodes_visited > 0);
//!     }
//!     outcome => panic!("this instance has a solution, got {outcome:?}"),
//! }
//! ```
//!
//! The policies (variable selection, value selection, propagation strength, tie-breaking,
//! and the overall search strategy) are chosen per run through [`SearchConfig`]; see
//! [`options`] for the complete surface. Randomised policies draw from a generator seeded by
//! the configuration, so every run is reproducible.
//!
//! # Outcomes
//!
//! A run concludes with one of three [`SchedulingOutcome`]s: `Feasible` with the assignment
//! list shared by all solver implementations, `Infeasible` as a proof that no assignment
//! exists, or `Aborted` when a budget ran out, in which case feasibility is unknown and the
//! outcome must not be read as infeasibility.

pub mod api;
pub mod basic_types;
pub mod branching;
pub mod engine;
pub mod model;
pub mod options;
pub mod propagators;
pub mod variables;

pub use api::outputs::AbortReason;
pub use api::outputs::CourseAssignment;
pub use api::outputs::SchedulingOutcome;
pub use api::BacktrackingScheduler;
pub use api::Scheduler;
pub use api::SchedulerSetupError;
pub use basic_types::SearchStatistics;
pub use options::SearchConfig;
