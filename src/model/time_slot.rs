/// A teaching period on a specific day of the week.
#[derive(Debug, Clone)]
pub struct TimeSlot {
    /// Stable identifier of the slot.
    pub id: String,
    /// The day of the week, numbered from 0.
    pub day: u32,
    /// The period within the day, numbered from 0.
    pub period: u32,
    /// Whether the slot can be scheduled at all.
    pub available: bool,
}

impl TimeSlot {
    pub fn new(id: impl Into<String>, day: u32, period: u32) -> Self {
        TimeSlot {
            id: id.into(),
            day,
            period,
            available: true,
        }
    }

    pub fn unavailable(mut self) -> Self {
        self.available = false;
        self
    }
}
