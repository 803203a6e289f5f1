//! Course model.
//!
//! A course opens a fixed number of weekly class sections and carries an
//! ordered list of eligible lecturers. The runtime representation stores
//! lecturer *indices* into the catalog's canonical lecturer list — the wire
//! format (which embeds full lecturer objects) is resolved against the
//! canonical list at catalog construction, see [`crate::io`].

/// A course to be placed on the timetable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    /// Unique course identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Eligible lecturers, as indices into the catalog's lecturer list.
    /// Order-preserving with respect to the source data.
    pub lecturers: Vec<usize>,
    /// Number of weekly sections this course opens.
    pub num_sections: usize,
    /// Whether sections must be placed in practice rooms.
    pub is_practice: bool,
}

impl Course {
    /// Creates a new course.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        lecturers: Vec<usize>,
        num_sections: usize,
        is_practice: bool,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            lecturers,
            num_sections,
            is_practice,
        }
    }
}
