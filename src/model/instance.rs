use fnv::FnvHashMap;

use super::ConstraintCatalog;
use super::Course;
use super::Room;
use super::Teacher;
use super::TimeSlot;

/// The aggregate of all problem facts for one scheduling run.
///
/// The instance owns the records and provides id-to-index lookups; all solver-internal data
/// structures refer to courses, teachers, rooms, and slots by their index in these lists.
#[derive(Debug, Clone)]
pub struct TimetableInstance {
    pub courses: Vec<Course>,
    pub teachers: Vec<Teacher>,
    pub rooms: Vec<Room>,
    pub slots: Vec<TimeSlot>,
    pub catalog: ConstraintCatalog,

    teacher_indices: FnvHashMap<String, usize>,
    slot_indices: FnvHashMap<String, usize>,
}

impl TimetableInstance {
    pub fn new(
        courses: Vec<Course>,
        teachers: Vec<Teacher>,
        rooms: Vec<Room>,
        slots: Vec<TimeSlot>,
    ) -> Self {
        let teacher_indices = teachers
            .iter()
            .enumerate()
            .map(|(index, teacher)| (teacher.id.clone(), index))
            .collect();
        let slot_indices = slots
            .iter()
            .enumerate()
            .map(|(index, slot)| (slot.id.clone(), index))
            .collect();

        TimetableInstance {
            courses,
            teachers,
            rooms,
            slots,
            catalog: ConstraintCatalog::default(),
            teacher_indices,
            slot_indices,
        }
    }

    pub fn with_catalog(mut self, catalog: ConstraintCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Looks up the index of a teacher by id.
    pub fn teacher_index(&self, teacher_id: &str) -> Option<usize> {
        self.teacher_indices.get(teacher_id).copied()
    }

    /// Looks up the index of a time slot by id.
    pub fn slot_index(&self, slot_id: &str) -> Option<usize> {
        self.slot_indices.get(slot_id).copied()
    }
}
