/// A teacher, together with the availability restrictions that shape the initial domains.
#[derive(Debug, Clone)]
pub struct Teacher {
    /// Stable identifier of the teacher.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// The maximum number of weekly hours this teacher can be scheduled for. A set of courses
    /// requiring more than this is rejected before the search starts.
    pub max_hours_per_week: u32,
    /// Time slots in which this teacher is never available (hard unavailability).
    pub unavailable_slots: Vec<String>,
    /// Time slots this teacher prefers. Only consulted by the teacher-preference soft
    /// constraint when ranking solutions; an empty list expresses no preference.
    pub preferred_slots: Vec<String>,
}

impl Teacher {
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Teacher {
            name: id.clone(),
            id,
            max_hours_per_week: 16,
            unavailable_slots: Vec::new(),
            preferred_slots: Vec::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_max_hours_per_week(mut self, max_hours_per_week: u32) -> Self {
        self.max_hours_per_week = max_hours_per_week;
        self
    }

    pub fn with_unavailable_slot(mut self, slot_id: impl Into<String>) -> Self {
        self.unavailable_slots.push(slot_id.into());
        self
    }

    pub fn with_preferred_slot(mut self, slot_id: impl Into<String>) -> Self {
        self.preferred_slots.push(slot_id.into());
        self
    }
}
