/// A room in which course hours can be scheduled.
#[derive(Debug, Clone)]
pub struct Room {
    /// Stable identifier of the room.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// The number of students the room can hold.
    pub capacity: u32,
    /// Whether the room can be scheduled at all; unavailable rooms never appear in a domain.
    pub available: bool,
}

impl Room {
    pub fn new(id: impl Into<String>, capacity: u32) -> Self {
        let id = id.into();
        Room {
            name: id.clone(),
            id,
            capacity,
            available: true,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn unavailable(mut self) -> Self {
        self.available = false;
        self
    }
}
