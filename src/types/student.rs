use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::catalog::course::{Term, Track};
use crate::types::identifiers::CourseCode;

/// Everything the engine knows about one student for one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentContext {
    pub gpa: f64,

    /// Codes of courses the student has passed.
    pub passed: BTreeSet<CourseCode>,

    /// Codes of courses the student has failed at least once. May overlap
    /// with `passed` (failed, retaken, passed): failed status is
    /// informational, not exclusive.
    pub failed: BTreeSet<CourseCode>,

    /// Semester the student is registering for.
    pub term: Term,

    pub track: Track,
}
