//! The immutable problem facts: courses, teachers, rooms, time slots, and the constraint
//! catalog. These records are supplied by an external data collaborator and are never mutated
//! by the solver.

mod constraints;
mod course;
mod instance;
mod room;
mod teacher;
mod time_slot;

pub use constraints::ConstraintCatalog;
pub use constraints::HardConstraint;
pub use constraints::SoftConstraint;
pub use constraints::SoftConstraintKind;
pub use course::Course;
pub use instance::TimetableInstance;
pub use room::Room;
pub use teacher::Teacher;
pub use time_slot::TimeSlot;
