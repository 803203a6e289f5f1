//! Lecturer model.
//!
//! A lecturer teaches the courses that list them as eligible. Weekly
//! workload bounds are institution-wide constants, not per-lecturer data:
//! every lecturer should teach at least [`Lecturer::MIN_WORKLOAD`] and at
//! most [`Lecturer::MAX_WORKLOAD`] shifts per week.

use serde::{Deserialize, Serialize};

/// A lecturer available for teaching assignments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lecturer {
    /// Unique lecturer identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
}

impl Lecturer {
    /// Minimum shifts per week before the workload penalty applies.
    pub const MIN_WORKLOAD: usize = 2;
    /// Maximum shifts per week before the workload penalty applies.
    pub const MAX_WORKLOAD: usize = 20;

    /// Creates a new lecturer.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
