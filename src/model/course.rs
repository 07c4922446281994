/// A course which has to be taught for a number of hours per week.
///
/// Every required weekly hour becomes one variable of the satisfaction problem.
#[derive(Debug, Clone)]
pub struct Course {
    /// Stable identifier of the course.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// The number of weekly hours which have to be scheduled for this course.
    pub weekly_hours: u32,
    /// The teacher responsible for every hour of this course.
    pub teacher_id: String,
    /// The number of enrolled students; rooms below this capacity are not admissible.
    pub student_count: u32,
    /// The student classes attending this course; two courses sharing a class can never be
    /// taught in the same time slot.
    pub class_ids: Vec<String>,
}

impl Course {
    pub fn new(id: impl Into<String>, teacher_id: impl Into<String>, weekly_hours: u32) -> Self {
        let id = id.into();
        Course {
            name: id.clone(),
            id,
            weekly_hours,
            teacher_id: teacher_id.into(),
            student_count: 0,
            class_ids: Vec::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_student_count(mut self, student_count: u32) -> Self {
        self.student_count = student_count;
        self
    }

    pub fn with_class(mut self, class_id: impl Into<String>) -> Self {
        self.class_ids.push(class_id.into());
        self
    }
}
