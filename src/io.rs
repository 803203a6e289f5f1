//! Catalog loading and timetable persistence.
//!
//! File conventions follow the source data layout: four JSON catalog
//! files (`lecturers.json`, `rooms.json`, `shifts.json`, `courses.json`)
//! and a denormalized result document with the timetable grouped by
//! course, lecturer, and room name. Course records embed their eligible
//! lecturers on the wire; [`build_catalog`] resolves them against the
//! canonical lecturer list so that the runtime representation is fully
//! index-interned.

use std::collections::HashMap;
use std::fmt;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::ga::Timetable;
use crate::models::{Catalog, Course, Lecturer, Room, Shift};
use crate::validation::{ValidationError, ValidationErrorKind};

/// Error loading or saving timetabling data.
#[derive(Debug)]
pub enum DataError {
    /// Underlying file I/O failure.
    Io(std::io::Error),
    /// Malformed JSON.
    Json(serde_json::Error),
    /// The loaded data failed catalog validation.
    Invalid(Vec<ValidationError>),
}

impl fmt::Display for DataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataError::Io(e) => write!(f, "I/O error: {e}"),
            DataError::Json(e) => write!(f, "JSON error: {e}"),
            DataError::Invalid(errors) => {
                write!(f, "invalid catalog ({} errors)", errors.len())
            }
        }
    }
}

impl std::error::Error for DataError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DataError::Io(e) => Some(e),
            DataError::Json(e) => Some(e),
            DataError::Invalid(_) => None,
        }
    }
}

impl From<std::io::Error> for DataError {
    fn from(e: std::io::Error) -> Self {
        DataError::Io(e)
    }
}

impl From<serde_json::Error> for DataError {
    fn from(e: serde_json::Error) -> Self {
        DataError::Json(e)
    }
}

/// Wire record for a course, embedding its eligible lecturers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseRecord {
    /// Unique course identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Eligible lecturers, embedded as full objects.
    pub lecturers: Vec<Lecturer>,
    /// Number of weekly sections this course opens.
    pub num_classes: usize,
    /// Whether sections must be placed in practice rooms.
    pub is_practice: bool,
}

fn read_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, DataError> {
    let file = File::open(path)?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}

/// Loads the lecturer list from a JSON file.
pub fn load_lecturers(path: impl AsRef<Path>) -> Result<Vec<Lecturer>, DataError> {
    read_json(path)
}

/// Loads the room list from a JSON file.
pub fn load_rooms(path: impl AsRef<Path>) -> Result<Vec<Room>, DataError> {
    read_json(path)
}

/// Loads the shift list from a JSON file.
///
/// The returned list becomes the canonical interning table once handed
/// to [`build_catalog`]; shifts are never reloaded or copied per section
/// within a run.
pub fn load_shifts(path: impl AsRef<Path>) -> Result<Vec<Shift>, DataError> {
    read_json(path)
}

/// Loads course wire records from a JSON file.
pub fn load_courses(path: impl AsRef<Path>) -> Result<Vec<CourseRecord>, DataError> {
    read_json(path)
}

/// Resolves course records against the canonical lecturer list and
/// builds a validated catalog.
///
/// Embedded lecturer references are matched by ID; unknown references
/// are reported alongside all other validation errors.
pub fn build_catalog(
    lecturers: Vec<Lecturer>,
    rooms: Vec<Room>,
    shifts: Vec<Shift>,
    records: Vec<CourseRecord>,
) -> Result<Catalog, Vec<ValidationError>> {
    let index_by_id: HashMap<&str, usize> = lecturers
        .iter()
        .enumerate()
        .map(|(idx, l)| (l.id.as_str(), idx))
        .collect();

    let mut errors = Vec::new();
    let mut courses = Vec::with_capacity(records.len());
    for record in &records {
        let mut indices = Vec::with_capacity(record.lecturers.len());
        for lecturer in &record.lecturers {
            match index_by_id.get(lecturer.id.as_str()) {
                Some(&idx) => indices.push(idx),
                None => errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownLecturer,
                    format!(
                        "Course '{}' references unknown lecturer '{}'",
                        record.id, lecturer.id
                    ),
                )),
            }
        }
        courses.push(Course::new(
            record.id.clone(),
            record.name.clone(),
            indices,
            record.num_classes,
            record.is_practice,
        ));
    }
    if !errors.is_empty() {
        return Err(errors);
    }

    Catalog::new(lecturers, rooms, shifts, courses)
}

/// Reads the four conventional catalog files from a directory.
pub fn load_catalog(dir: impl AsRef<Path>) -> Result<Catalog, DataError> {
    let dir = dir.as_ref();
    let lecturers = load_lecturers(dir.join("lecturers.json"))?;
    let rooms = load_rooms(dir.join("rooms.json"))?;
    let shifts = load_shifts(dir.join("shifts.json"))?;
    let courses = load_courses(dir.join("courses.json"))?;
    build_catalog(lecturers, rooms, shifts, courses).map_err(DataError::Invalid)
}

/// Course summary embedded in a section record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseSummary {
    /// Unique course identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Number of weekly sections this course opens.
    pub num_classes: usize,
    /// Whether sections must be placed in practice rooms.
    pub is_practice: bool,
}

/// One scheduled section, denormalized for persistence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionRecord {
    /// Slot index within the timetable.
    pub id: usize,
    /// Course of this section.
    pub course: CourseSummary,
    /// Assigned room.
    pub room: Room,
    /// Assigned lecturer.
    pub lecturer: Lecturer,
    /// Weekday index.
    pub day: usize,
    /// Assigned shift.
    pub shift: Shift,
}

/// Denormalized timetable document with grouped views.
///
/// The flat `classes` list is the round-trip source of truth; the
/// `group_by_*` maps are the indexing views a consumer renders from
/// (keyed by display name, matching the source data conventions).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimetableReport {
    /// Sections grouped by course name.
    pub group_by_courses: HashMap<String, Vec<SectionRecord>>,
    /// Sections grouped by lecturer name.
    pub group_by_lecturers: HashMap<String, Vec<SectionRecord>>,
    /// Sections grouped by room name.
    pub group_by_rooms: HashMap<String, Vec<SectionRecord>>,
    /// All sections in slot order.
    pub classes: Vec<SectionRecord>,
}

impl TimetableReport {
    /// Denormalizes a timetable against its catalog.
    pub fn from_timetable(timetable: &Timetable, catalog: &Catalog) -> Self {
        let classes: Vec<SectionRecord> = timetable
            .sections
            .iter()
            .map(|section| {
                let course = catalog.course(section.course);
                SectionRecord {
                    id: section.id,
                    course: CourseSummary {
                        id: course.id.clone(),
                        name: course.name.clone(),
                        num_classes: course.num_sections,
                        is_practice: course.is_practice,
                    },
                    room: catalog.room(section.room).clone(),
                    lecturer: catalog.lecturer(section.lecturer).clone(),
                    day: section.day,
                    shift: catalog.shift(section.shift).clone(),
                }
            })
            .collect();

        let mut group_by_courses: HashMap<String, Vec<SectionRecord>> = HashMap::new();
        let mut group_by_lecturers: HashMap<String, Vec<SectionRecord>> = HashMap::new();
        let mut group_by_rooms: HashMap<String, Vec<SectionRecord>> = HashMap::new();
        for record in &classes {
            group_by_courses
                .entry(record.course.name.clone())
                .or_default()
                .push(record.clone());
            group_by_lecturers
                .entry(record.lecturer.name.clone())
                .or_default()
                .push(record.clone());
            group_by_rooms
                .entry(record.room.name.clone())
                .or_default()
                .push(record.clone());
        }

        Self {
            group_by_courses,
            group_by_lecturers,
            group_by_rooms,
            classes,
        }
    }

    /// Writes the report as JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), DataError> {
        let file = File::create(path)?;
        serde_json::to_writer(BufWriter::new(file), self)?;
        Ok(())
    }

    /// Reads a report back from JSON.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DataError> {
        read_json(path)
    }
}
