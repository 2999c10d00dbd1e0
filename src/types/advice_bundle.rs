use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::catalog::course::{CourseRecord, Term, Track};
use crate::types::identifiers::SnapshotVersion;

/// A course admitted into the recommendation, as returned to the caller.
/// Fully self-contained and serializable.
#[derive(Debug, Clone, PartialEq, Serialize, serde::Deserialize)]
pub struct RecommendedCourse {
    pub code: String,
    pub credits: u32,
    pub level: u8,
    pub reason: String,
}

/// Metadata describing the outcome of one advising run.
#[derive(Debug, Clone, Serialize, serde::Deserialize)]
pub struct AdviceMetadata {
    pub gpa: f64,
    pub term: Term,
    pub track: Track,

    pub credit_cap: u32,
    pub credits_used: u32,

    pub courses_considered: usize,
    pub courses_recommended: usize,
    pub courses_excluded_by_cap: usize,

    pub catalog_version: SnapshotVersion,
    pub policy_version: SnapshotVersion,
    /// Informational only; never part of the determinism contract.
    pub generated_at: DateTime<Utc>,
}

/// The final result of one advising run.
#[derive(Debug, Clone, Serialize, serde::Deserialize)]
pub struct RecommendationResult {
    pub recommendations: Vec<RecommendedCourse>,
    pub explanations: Vec<String>,
    pub advice: AdviceMetadata,
}

/// Internal: a course that has survived every eligibility predicate but has
/// not yet been ranked or admitted. Holds a reference to the catalog record
/// to avoid cloning prematurely.
#[derive(Debug, Clone)]
pub struct EligibleCourse<'a> {
    pub course: &'a CourseRecord,

    /// Set only when the student previously failed this course and the
    /// policy's retake priority is enabled.
    pub retake: bool,

    pub reason: String,
}

/// No configured credit band covers the student's GPA.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("GPA {gpa} is outside every configured credit band")]
pub struct PolicyRangeError {
    pub gpa: f64,
}
