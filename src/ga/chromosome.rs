//! Class-section gene and timetable chromosome.
//!
//! # Encoding
//!
//! A timetable is a fixed-length vector of class sections, one per
//! (course, occurrence) slot, appended in course order. Index k denotes
//! the same slot in every timetable built from one catalog — this
//! positional correspondence is what makes per-index crossover and
//! whole-gene mutation meaningful, and it must never be reordered.
//!
//! Sections refer to lecturers, rooms, shifts, and courses by catalog
//! index, so comparing two sections' shift fields is an identity
//! comparison against the single canonical shift list.
//!
//! # Reference
//! Colorni, Dorigo & Maniezzo (1991), "Genetic Algorithms and Highly
//! Constrained Problems: The Time-Table Case"

use std::collections::HashMap;

use rand::prelude::IndexedRandom;
use rand::Rng;

use crate::models::{Catalog, Lecturer, RoomCategory};

/// One scheduled occurrence of a course (a gene).
///
/// All entity fields are indices into the catalog's canonical lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassSection {
    /// Slot index, stable across all timetables from the same catalog.
    pub id: usize,
    /// Course this section belongs to.
    pub course: usize,
    /// Assigned lecturer.
    pub lecturer: usize,
    /// Assigned room.
    pub room: usize,
    /// Weekday in `0..NUM_DAYS`.
    pub day: usize,
    /// Assigned shift.
    pub shift: usize,
    /// Whether this section collided in the last fitness evaluation.
    pub conflict: bool,
}

impl ClassSection {
    /// Teaching days per week (Monday through Saturday).
    pub const NUM_DAYS: usize = 6;
}

/// A complete candidate timetable (a chromosome).
///
/// Higher fitness = better timetable; the range is `(0, 1]` once
/// evaluated, with `1.0` meaning no hard conflicts and no workload loss.
#[derive(Debug, Clone)]
pub struct Timetable {
    /// Sections in slot order.
    pub sections: Vec<ClassSection>,
    /// Fitness from the last evaluation (−1.0 before the first).
    pub fitness: f64,
    /// Hard-conflict count from the last evaluation.
    pub conflict_count: usize,
}

impl Timetable {
    /// Creates a randomly initialized timetable.
    ///
    /// For each course, each required section gets a uniformly random
    /// shift, a random room from the partition matching the course's
    /// practice flag, a random day, and a random eligible lecturer.
    /// Catalog validation guarantees every pick list is non-empty.
    pub fn random<R: Rng>(catalog: &Catalog, rng: &mut R) -> Self {
        let mut sections = Vec::with_capacity(catalog.section_count());
        for (course_idx, course) in catalog.courses().iter().enumerate() {
            let rooms = catalog.rooms_for(RoomCategory::for_course(course.is_practice));
            for _ in 0..course.num_sections {
                sections.push(ClassSection {
                    id: sections.len(),
                    course: course_idx,
                    lecturer: *course.lecturers.choose(rng).unwrap(),
                    room: *rooms.choose(rng).unwrap(),
                    day: rng.random_range(0..ClassSection::NUM_DAYS),
                    shift: rng.random_range(0..catalog.shifts().len()),
                    conflict: false,
                });
            }
        }
        Self {
            sections,
            fitness: -1.0,
            conflict_count: 0,
        }
    }

    /// Recomputes the conflict count, per-section flags, and fitness.
    ///
    /// # Algorithm
    ///
    /// Flags are cleared, then every unordered pair `(i, j)`, `i < j`, is
    /// scanned in index order. A pair on the same day and shift is a
    /// *hard* conflict when the rooms also match (count incremented) and
    /// a *soft* conflict when only the lecturers match (flag only). In
    /// both cases only the earlier index `i` is flagged, and the room
    /// check takes precedence over the lecturer check. The adaptive
    /// repair pass targets exactly these flags, so the asymmetry is
    /// load-bearing.
    ///
    /// Workload loss adds one unit per shift outside a lecturer's
    /// [`Lecturer::MIN_WORKLOAD`]..=[`Lecturer::MAX_WORKLOAD`] band.
    ///
    /// `fitness = 1 / (conflicts * 0.1 + loss * 0.01 + 1)`, so `1.0` is
    /// reached exactly when there are no hard conflicts and no workload
    /// loss; soft conflicts alone do not lower the score.
    pub fn calculate_fitness(&mut self) -> f64 {
        self.conflict_count = 0;
        for section in &mut self.sections {
            section.conflict = false;
        }

        for i in 0..self.sections.len() {
            for j in (i + 1)..self.sections.len() {
                if self.sections[i].day == self.sections[j].day
                    && self.sections[i].shift == self.sections[j].shift
                {
                    if self.sections[i].room == self.sections[j].room {
                        self.conflict_count += 1;
                        self.sections[i].conflict = true;
                    } else if self.sections[i].lecturer == self.sections[j].lecturer {
                        self.sections[i].conflict = true;
                    }
                }
            }
        }

        let mut per_lecturer: HashMap<usize, usize> = HashMap::new();
        for section in &self.sections {
            *per_lecturer.entry(section.lecturer).or_insert(0) += 1;
        }
        let mut loss = 0;
        for &count in per_lecturer.values() {
            if count > Lecturer::MAX_WORKLOAD {
                loss += count - Lecturer::MAX_WORKLOAD;
            }
            if count < Lecturer::MIN_WORKLOAD {
                loss += Lecturer::MIN_WORKLOAD - count;
            }
        }

        self.fitness = 1.0 / (self.conflict_count as f64 * 0.1 + loss as f64 * 0.01 + 1.0);
        self.fitness
    }
}
