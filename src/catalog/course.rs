use serde::{Deserialize, Serialize};

use crate::types::identifiers::CourseCode;

/// Semester a student is registering for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Term {
    Fall,
    Spring,
}

/// Semesters a course is offered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Offering {
    Fall,
    Spring,
    Both,
}

impl Offering {
    pub fn available_in(self, term: Term) -> bool {
        match (self, term) {
            (Offering::Both, _) => true,
            (Offering::Fall, Term::Fall) => true,
            (Offering::Spring, Term::Spring) => true,
            _ => false,
        }
    }
}

/// Course track. The literal `"All"` on a course admits any student track;
/// anything else must match exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Track(String);

impl Track {
    pub const WILDCARD: &str = "All";

    pub fn new(name: impl Into<String>) -> Self {
        Track(name.into())
    }

    pub fn is_wildcard(&self) -> bool {
        self.0 == Self::WILDCARD
    }

    /// Whether a course carrying this track admits a student on `student`.
    pub fn admits(&self, student: &Track) -> bool {
        self.is_wildcard() || self == student
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// The atomic unit of the catalog. Loaded once per run, read-only after.
///
/// Requisite lists hold codes in storage order; the first unmet entry is the
/// one reported to the student. An empty list is no constraint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseRecord {
    pub code: CourseCode,
    pub name: String,
    pub prerequisites: Vec<CourseCode>,
    pub corequisites: Vec<CourseCode>,
    pub credits: u32,
    pub offered: Offering,
    pub track: Track,
    pub level: u8,
    pub description: Option<String>,
}
