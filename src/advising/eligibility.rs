use crate::catalog::course::CourseRecord;
use crate::catalog::index::CatalogIndex;
use crate::types::advice_bundle::EligibleCourse;
use crate::types::identifiers::CourseCode;
use crate::types::student::StudentContext;

/// Why the predicate chain rejected a course. The chain short-circuits, so
/// only the first failing predicate is ever reported.
#[derive(Debug, Clone, PartialEq)]
pub enum Rejection {
    NotOfferedThisTerm,
    TrackMismatch,
    UnmetPrerequisite(CourseCode),
    UnmetCorequisite(CourseCode),
    LevelTooHigh { level: u8, current: u8 },
}

/// Outcome of evaluating one catalog course against the student.
#[derive(Debug)]
pub enum Evaluation<'a> {
    /// Passed every predicate; carries the inclusion reason.
    Eligible(EligibleCourse<'a>),

    /// Failed a predicate; carries the first failure.
    Rejected(Rejection),

    /// Already passed by the student: dropped silently from both the
    /// recommendations and the explanations.
    AlreadyPassed,
}

/// Highest level among the student's passed courses that resolve in the
/// catalog, or 0 for a fresh student.
pub fn current_level(catalog: &CatalogIndex, student: &StudentContext) -> u8 {
    student
        .passed
        .iter()
        .filter_map(|code| catalog.by_code(code))
        .map(|course| course.level)
        .max()
        .unwrap_or(0)
}

/// Run the fixed predicate chain for one course: completion, semester,
/// track, prerequisites, corequisites, level progression, in that order.
pub fn evaluate<'a>(
    course: &'a CourseRecord,
    student: &StudentContext,
    current_level: u8,
    retake_priority: bool,
) -> Evaluation<'a> {
    if student.passed.contains(&course.code) {
        return Evaluation::AlreadyPassed;
    }

    if !course.offered.available_in(student.term) {
        return Evaluation::Rejected(Rejection::NotOfferedThisTerm);
    }

    if !course.track.admits(&student.track) {
        return Evaluation::Rejected(Rejection::TrackMismatch);
    }

    if let Some(unmet) = first_unmet(&course.prerequisites, student) {
        return Evaluation::Rejected(Rejection::UnmetPrerequisite(unmet.clone()));
    }

    // A corequisite must already be passed, same as a prerequisite
    if let Some(unmet) = first_unmet(&course.corequisites, student) {
        return Evaluation::Rejected(Rejection::UnmetCorequisite(unmet.clone()));
    }

    // At most one level above the student's highest passed course
    if course.level > current_level + 1 {
        return Evaluation::Rejected(Rejection::LevelTooHigh {
            level: course.level,
            current: current_level,
        });
    }

    let retake = retake_priority && student.failed.contains(&course.code);

    Evaluation::Eligible(EligibleCourse {
        course,
        retake,
        reason: inclusion_reason(course, retake),
    })
}

/// First listed requisite the student has not passed. Codes that are absent
/// from the catalog can never appear in `passed`, so they stay unmet.
pub fn first_unmet<'a>(
    requisites: &'a [CourseCode],
    student: &StudentContext,
) -> Option<&'a CourseCode> {
    requisites.iter().find(|code| !student.passed.contains(*code))
}

fn inclusion_reason(course: &CourseRecord, retake: bool) -> String {
    if retake {
        format!(
            "{} is prioritized because you failed it previously.",
            course.code.as_str()
        )
    } else if let Some(first) = course.prerequisites.first() {
        format!(
            "{} is recommended because you passed {}, its prerequisite.",
            course.code.as_str(),
            first.as_str()
        )
    } else {
        format!("{} is recommended.", course.code.as_str())
    }
}
