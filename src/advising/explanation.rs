use std::collections::BTreeSet;

use crate::catalog::course::CourseRecord;
use crate::catalog::index::CatalogIndex;
use crate::types::identifiers::CourseCode;
use crate::types::student::StudentContext;

use super::eligibility::first_unmet;

/// Narrative for every catalog course that is neither passed nor
/// recommended, in ascending code order.
///
/// The narrative is derived from the catalog alone: an unmet prerequisite
/// is named even when a different predicate rejected the course first, and
/// a course dropped only by the credit cap reads the same as an ineligible
/// one. A failed course under retake priority is skipped entirely: when it
/// was eligible it has already been surfaced as prioritized.
pub fn explain_unavailable(
    catalog: &CatalogIndex,
    student: &StudentContext,
    recommended: &BTreeSet<CourseCode>,
    retake_priority: bool,
) -> Vec<String> {
    let mut unavailable: Vec<&CourseRecord> = catalog
        .all()
        .iter()
        .filter(|course| {
            !recommended.contains(&course.code) && !student.passed.contains(&course.code)
        })
        .collect();
    unavailable.sort_by(|a, b| a.code.cmp(&b.code));

    let mut explanations = Vec::with_capacity(unavailable.len());
    for course in unavailable {
        if let Some(unmet) = first_unmet(&course.prerequisites, student) {
            explanations.push(format!(
                "{} is unavailable due to an unmet prerequisite, {}.",
                course.code.as_str(),
                unmet.as_str()
            ));
        } else if retake_priority && student.failed.contains(&course.code) {
            continue;
        } else {
            explanations.push(format!("{} is unavailable.", course.code.as_str()));
        }
    }

    explanations
}
