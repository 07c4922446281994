use fnv::FnvHashMap;
use fnv::FnvHashSet;
use itertools::Itertools;
use log::warn;
use thiserror::Error;

use super::Candidate;
use super::CourseHour;
use super::CourseHourId;
use super::Domain;
use crate::model::TimetableInstance;

/// The reasons building the variable set can fail. Every member describes a problem instance
/// which is unsatisfiable (or ill-formed) before any search takes place.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("duplicate identifier '{id}' in the problem instance")]
    DuplicateId { id: String },
    #[error("course '{course_id}' references unknown teacher '{teacher_id}'")]
    UnknownTeacher {
        course_id: String,
        teacher_id: String,
    },
    #[error("teacher '{teacher_id}' references unknown time slot '{slot_id}'")]
    UnknownSlot { teacher_id: String, slot_id: String },
    #[error(
        "teacher '{teacher_id}' is required for {required} weekly hours \
         but can teach at most {maximum}"
    )]
    TeacherOverloaded {
        teacher_id: String,
        required: u32,
        maximum: u32,
    },
    #[error("course '{course_id}' has no admissible (slot, room) combination for hour {hour_index}")]
    EmptyDomain { course_id: String, hour_index: u32 },
}

/// The full variable set of one run, the immutable candidate table per variable, and the
/// relatedness graph used by the consistency check and the propagators.
#[derive(Debug, PartialEq)]
pub struct VariableStore {
    variables: Vec<CourseHour>,
    candidates: Vec<Vec<Candidate>>,
    neighbours: Vec<Vec<CourseHourId>>,
    class_overlap: Vec<bool>,
    num_courses: usize,
}

impl VariableStore {
    pub fn num_variables(&self) -> usize {
        self.variables.len()
    }

    pub fn ids(&self) -> impl Iterator<Item = CourseHourId> {
        (0..self.variables.len() as u32).map(CourseHourId::new)
    }

    pub fn course_hour(&self, variable: CourseHourId) -> CourseHour {
        self.variables[variable.index()]
    }

    /// The immutable candidate table of `variable`; domains index into this table.
    pub fn candidates(&self, variable: CourseHourId) -> &[Candidate] {
        &self.candidates[variable.index()]
    }

    pub fn candidate(&self, variable: CourseHourId, index: u32) -> Candidate {
        self.candidates[variable.index()][index as usize]
    }

    /// The variables sharing a hard-constraint relation with `variable`: same teacher, an
    /// overlapping class list, or at least one common candidate room.
    pub fn neighbours(&self, variable: CourseHourId) -> &[CourseHourId] {
        &self.neighbours[variable.index()]
    }

    /// Whether the class lists of two courses intersect.
    pub fn classes_overlap(&self, course_a: u32, course_b: u32) -> bool {
        self.class_overlap[course_a as usize * self.num_courses + course_b as usize]
    }

    /// Fresh full domains for every variable, the starting point of a run.
    pub fn initial_domains(&self) -> Vec<Domain> {
        self.candidates
            .iter()
            .map(|table| Domain::full(table.len()))
            .collect()
    }
}

/// Derives the variable set and each variable's initial candidate domain from the instance.
///
/// The initial domain contains every *locally* admissible value: the room exists, is available
/// and holds the course's enrolment, the slot is available, and the teacher is not
/// hard-unavailable in the slot. No cross-variable reasoning happens here; that is the
/// propagators' job during the search.
pub fn build(instance: &TimetableInstance) -> Result<VariableStore, BuildError> {
    check_unique_ids(instance)?;

    let num_courses = instance.courses.len();

    // Hard unavailability per teacher, as slot indices.
    let mut unavailable: Vec<FnvHashSet<usize>> = Vec::with_capacity(instance.teachers.len());
    for teacher in &instance.teachers {
        let mut slots = FnvHashSet::default();
        for slot_id in &teacher.unavailable_slots {
            let index = instance
                .slot_index(slot_id)
                .ok_or_else(|| BuildError::UnknownSlot {
                    teacher_id: teacher.id.clone(),
                    slot_id: slot_id.clone(),
                })?;
            let _ = slots.insert(index);
        }
        unavailable.push(slots);
    }

    let mut required_hours: FnvHashMap<usize, u32> = FnvHashMap::default();
    let mut course_teachers = Vec::with_capacity(num_courses);
    for course in &instance.courses {
        let teacher = instance.teacher_index(&course.teacher_id).ok_or_else(|| {
            BuildError::UnknownTeacher {
                course_id: course.id.clone(),
                teacher_id: course.teacher_id.clone(),
            }
        })?;
        course_teachers.push(teacher);
        *required_hours.entry(teacher).or_insert(0) += course.weekly_hours;
    }

    for (&teacher, &required) in &required_hours {
        let record = &instance.teachers[teacher];
        if required > record.max_hours_per_week {
            return Err(BuildError::TeacherOverloaded {
                teacher_id: record.id.clone(),
                required,
                maximum: record.max_hours_per_week,
            });
        }
    }

    let mut variables = Vec::new();
    let mut candidates = Vec::new();
    let mut course_rooms: Vec<FnvHashSet<u32>> = vec![FnvHashSet::default(); num_courses];

    for (course_index, course) in instance.courses.iter().enumerate() {
        let teacher = course_teachers[course_index];

        let admissible_slots = instance
            .slots
            .iter()
            .enumerate()
            .filter(|(slot_index, slot)| slot.available && !unavailable[teacher].contains(slot_index))
            .map(|(slot_index, _)| slot_index as u32)
            .collect::<Vec<_>>();
        let admissible_rooms = instance
            .rooms
            .iter()
            .enumerate()
            .filter(|(_, room)| room.available && room.capacity >= course.student_count)
            .map(|(room_index, _)| room_index as u32)
            .collect::<Vec<_>>();

        course_rooms[course_index].extend(admissible_rooms.iter().copied());

        let table = admissible_slots
            .iter()
            .cartesian_product(admissible_rooms.iter())
            .map(|(&slot, &room)| Candidate {
                slot,
                room,
                teacher: teacher as u32,
            })
            .collect::<Vec<_>>();

        for hour_index in 0..course.weekly_hours {
            if table.is_empty() {
                return Err(BuildError::EmptyDomain {
                    course_id: course.id.clone(),
                    hour_index,
                });
            }
            variables.push(CourseHour {
                course: course_index as u32,
                hour_index,
            });
            candidates.push(table.clone());
        }
    }

    if variables.is_empty() {
        warn!("the instance contains no required course hours");
    }

    let class_overlap = class_overlap_matrix(instance);
    let neighbours = relatedness_graph(
        &variables,
        &course_teachers,
        &course_rooms,
        &class_overlap,
        num_courses,
    );

    Ok(VariableStore {
        variables,
        candidates,
        neighbours,
        class_overlap,
        num_courses,
    })
}

fn check_unique_ids(instance: &TimetableInstance) -> Result<(), BuildError> {
    let mut seen = FnvHashSet::default();
    let ids = instance
        .courses
        .iter()
        .map(|course| &course.id)
        .chain(instance.teachers.iter().map(|teacher| &teacher.id))
        .chain(instance.rooms.iter().map(|room| &room.id))
        .chain(instance.slots.iter().map(|slot| &slot.id));
    for id in ids {
        if !seen.insert(id) {
            return Err(BuildError::DuplicateId { id: id.clone() });
        }
    }
    Ok(())
}

fn class_overlap_matrix(instance: &TimetableInstance) -> Vec<bool> {
    let num_courses = instance.courses.len();
    let class_sets = instance
        .courses
        .iter()
        .map(|course| course.class_ids.iter().collect::<FnvHashSet<_>>())
        .collect::<Vec<_>>();

    let mut matrix = vec![false; num_courses * num_courses];
    for a in 0..num_courses {
        for b in 0..num_courses {
            matrix[a * num_courses + b] = !class_sets[a].is_disjoint(&class_sets[b]);
        }
    }
    matrix
}

fn relatedness_graph(
    variables: &[CourseHour],
    course_teachers: &[usize],
    course_rooms: &[FnvHashSet<u32>],
    class_overlap: &[bool],
    num_courses: usize,
) -> Vec<Vec<CourseHourId>> {
    let mut neighbours = vec![Vec::new(); variables.len()];
    for a in 0..variables.len() {
        for b in (a + 1)..variables.len() {
            let course_a = variables[a].course as usize;
            let course_b = variables[b].course as usize;

            let related = course_teachers[course_a] == course_teachers[course_b]
                || class_overlap[course_a * num_courses + course_b]
                || !course_rooms[course_a].is_disjoint(&course_rooms[course_b]);

            if related {
                neighbours[a].push(CourseHourId::new(b as u32));
                neighbours[b].push(CourseHourId::new(a as u32));
            }
        }
    }
    neighbours
}
