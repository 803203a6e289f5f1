//! Shift (time slot) model.
//!
//! A shift is one teaching slot within a day (e.g., "07:00-09:00"). The
//! [`Catalog`](super::Catalog) owns the single canonical shift list for a
//! run; class sections refer to shifts by index into that list, so two
//! sections are in the same shift exactly when their indices are equal.
//! Shift values are never duplicated into per-section copies.

use serde::{Deserialize, Serialize};

/// A teaching shift within a day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shift {
    /// Unique shift identifier.
    pub id: i32,
    /// Start/end time label (e.g., "07:00-09:00").
    pub time: String,
}

impl Shift {
    /// Creates a new shift.
    pub fn new(id: i32, time: impl Into<String>) -> Self {
        Self {
            id,
            time: time.into(),
        }
    }
}
