//! Input validation for timetabling catalogs.
//!
//! Checks structural integrity of lecturers, rooms, shifts, and courses
//! before any chromosome is built. Detects:
//! - Duplicate IDs
//! - Empty shift list
//! - Courses whose required room category has no rooms
//! - Courses with no eligible lecturers
//! - Unresolved lecturer references
//!
//! A catalog that fails any of these checks cannot produce a valid gene,
//! so construction fails fast with the full error list rather than
//! degrading into a low-fitness search.

use std::collections::HashSet;

use crate::models::{Course, Lecturer, Room, RoomCategory, Shift};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same ID.
    DuplicateId,
    /// The shift list is empty.
    NoShifts,
    /// A course requires a room category with no rooms in it.
    NoEligibleRooms,
    /// A course lists no eligible lecturers.
    NoEligibleLecturers,
    /// A course references a lecturer that doesn't exist.
    UnknownLecturer,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the reference data for a timetabling run.
///
/// Checks:
/// 1. No duplicate lecturer, room, shift, or course IDs
/// 2. At least one shift
/// 3. Every course has at least one eligible lecturer
/// 4. Every course lecturer index resolves into the lecturer list
/// 5. Every required room category (practice/lecture) is non-empty
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_catalog(
    lecturers: &[Lecturer],
    rooms: &[Room],
    shifts: &[Shift],
    courses: &[Course],
) -> ValidationResult {
    let mut errors = Vec::new();

    let mut lecturer_ids = HashSet::new();
    for l in lecturers {
        if !lecturer_ids.insert(l.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate lecturer ID: {}", l.id),
            ));
        }
    }

    let mut room_ids = HashSet::new();
    for r in rooms {
        if !room_ids.insert(r.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate room ID: {}", r.id),
            ));
        }
    }

    let mut shift_ids = HashSet::new();
    for s in shifts {
        if !shift_ids.insert(s.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate shift ID: {}", s.id),
            ));
        }
    }

    let mut course_ids = HashSet::new();
    for c in courses {
        if !course_ids.insert(c.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate course ID: {}", c.id),
            ));
        }
    }

    if shifts.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::NoShifts,
            "Shift list is empty",
        ));
    }

    let practice_count = rooms
        .iter()
        .filter(|r| r.category() == RoomCategory::Practice)
        .count();
    let lecture_count = rooms.len() - practice_count;

    for course in courses {
        if course.lecturers.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::NoEligibleLecturers,
                format!("Course '{}' has no eligible lecturers", course.id),
            ));
        }
        for &idx in &course.lecturers {
            if idx >= lecturers.len() {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownLecturer,
                    format!(
                        "Course '{}' references lecturer index {} out of {}",
                        course.id,
                        idx,
                        lecturers.len()
                    ),
                ));
            }
        }
        let available = if course.is_practice {
            practice_count
        } else {
            lecture_count
        };
        if available == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NoEligibleRooms,
                format!(
                    "Course '{}' requires {} rooms but none exist",
                    course.id,
                    if course.is_practice {
                        "practice"
                    } else {
                        "lecture"
                    }
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
