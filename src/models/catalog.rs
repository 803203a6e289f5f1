//! Reference-data catalog.
//!
//! The catalog is the immutable context shared by every timetable in a run:
//! the canonical lecturer/room/shift/course lists plus the room partition
//! (practice vs. lecture) computed once at construction. Class sections
//! refer to catalog entries by index, so index equality is identity
//! equality — the catalog is the single interning table for the run.
//!
//! Construction validates the input (see [`crate::validation`]) and fails
//! with the full error list rather than producing a catalog that cannot
//! yield a valid timetable.

use super::{Course, Lecturer, Room, RoomCategory, Shift};
use crate::validation::{validate_catalog, ValidationError};

/// Immutable reference data for one timetabling run.
#[derive(Debug, Clone)]
pub struct Catalog {
    lecturers: Vec<Lecturer>,
    rooms: Vec<Room>,
    shifts: Vec<Shift>,
    courses: Vec<Course>,
    practice_rooms: Vec<usize>,
    lecture_rooms: Vec<usize>,
}

impl Catalog {
    /// Builds a validated catalog from canonical lists.
    ///
    /// Course lecturer references must already be resolved to indices into
    /// `lecturers` (see [`crate::io::build_catalog`] for the wire-format
    /// path). Returns every detected problem, not just the first.
    pub fn new(
        lecturers: Vec<Lecturer>,
        rooms: Vec<Room>,
        shifts: Vec<Shift>,
        courses: Vec<Course>,
    ) -> Result<Self, Vec<ValidationError>> {
        validate_catalog(&lecturers, &rooms, &shifts, &courses)?;

        let mut practice_rooms = Vec::new();
        let mut lecture_rooms = Vec::new();
        for (idx, room) in rooms.iter().enumerate() {
            match room.category() {
                RoomCategory::Practice => practice_rooms.push(idx),
                RoomCategory::Lecture => lecture_rooms.push(idx),
            }
        }

        Ok(Self {
            lecturers,
            rooms,
            shifts,
            courses,
            practice_rooms,
            lecture_rooms,
        })
    }

    /// Canonical lecturer list.
    pub fn lecturers(&self) -> &[Lecturer] {
        &self.lecturers
    }

    /// Canonical room list.
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Canonical shift list.
    pub fn shifts(&self) -> &[Shift] {
        &self.shifts
    }

    /// Canonical course list.
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Lecturer by catalog index.
    pub fn lecturer(&self, idx: usize) -> &Lecturer {
        &self.lecturers[idx]
    }

    /// Room by catalog index.
    pub fn room(&self, idx: usize) -> &Room {
        &self.rooms[idx]
    }

    /// Shift by catalog index.
    pub fn shift(&self, idx: usize) -> &Shift {
        &self.shifts[idx]
    }

    /// Course by catalog index.
    pub fn course(&self, idx: usize) -> &Course {
        &self.courses[idx]
    }

    /// Room indices eligible for the given category.
    ///
    /// Partitions are computed once at construction and reused by every
    /// timetable initialization.
    pub fn rooms_for(&self, category: RoomCategory) -> &[usize] {
        match category {
            RoomCategory::Practice => &self.practice_rooms,
            RoomCategory::Lecture => &self.lecture_rooms,
        }
    }

    /// Total number of class sections across all courses.
    ///
    /// Every timetable built from this catalog has exactly this many genes.
    pub fn section_count(&self) -> usize {
        self.courses.iter().map(|c| c.num_sections).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_catalog() -> Catalog {
        let lecturers = vec![
            Lecturer::new("L1", "Dr. Tran"),
            Lecturer::new("L2", "Dr. Pham"),
        ];
        let rooms = vec![
            Room::new(1, "A201"),
            Room::new(2, "B105"),
            Room::new(3, "B106"),
        ];
        let shifts = vec![Shift::new(1, "07:00-09:00"), Shift::new(2, "09:30-11:30")];
        let courses = vec![
            Course::new("C1", "Algorithms", vec![0, 1], 2, false),
            Course::new("C2", "OS Lab", vec![1], 1, true),
        ];
        Catalog::new(lecturers, rooms, shifts, courses).unwrap()
    }

    #[test]
    fn test_room_partitions() {
        let catalog = sample_catalog();
        assert_eq!(catalog.rooms_for(RoomCategory::Practice), &[0]);
        assert_eq!(catalog.rooms_for(RoomCategory::Lecture), &[1, 2]);
    }

    #[test]
    fn test_section_count() {
        let catalog = sample_catalog();
        assert_eq!(catalog.section_count(), 3);
    }

    #[test]
    fn test_indexed_access() {
        let catalog = sample_catalog();
        assert_eq!(catalog.lecturer(1).id, "L2");
        assert_eq!(catalog.room(0).name, "A201");
        assert_eq!(catalog.shift(1).id, 2);
        assert_eq!(catalog.course(1).id, "C2");
    }

    #[test]
    fn test_invalid_catalog_rejected() {
        // Practice course but no practice rooms.
        let result = Catalog::new(
            vec![Lecturer::new("L1", "Dr. Tran")],
            vec![Room::new(1, "B105")],
            vec![Shift::new(1, "07:00-09:00")],
            vec![Course::new("C1", "OS Lab", vec![0], 1, true)],
        );
        assert!(result.is_err());
    }
}
