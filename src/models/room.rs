//! Room model.
//!
//! Rooms come in two categories derived from the naming convention of the
//! source data: rooms whose name starts with `"A"` are practice (lab)
//! rooms, all others are lecture rooms. Practice courses may only be
//! placed in practice rooms and vice versa.

use serde::{Deserialize, Serialize};

/// A room available for class sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Unique room identifier.
    pub id: i32,
    /// Human-readable name (e.g., "A201", "B105").
    pub name: String,
}

/// Room classification derived from the room name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomCategory {
    /// Practice (lab) room — name starts with `"A"`.
    Practice,
    /// Regular lecture room.
    Lecture,
}

impl Room {
    /// Creates a new room.
    pub fn new(id: i32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Returns the category derived from the room name.
    pub fn category(&self) -> RoomCategory {
        if self.name.starts_with('A') {
            RoomCategory::Practice
        } else {
            RoomCategory::Lecture
        }
    }
}

impl RoomCategory {
    /// Category required by a course with the given practice flag.
    pub fn for_course(is_practice: bool) -> Self {
        if is_practice {
            RoomCategory::Practice
        } else {
            RoomCategory::Lecture
        }
    }
}
