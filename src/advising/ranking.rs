use std::cmp::Ordering;

use crate::types::advice_bundle::EligibleCourse;

/// Comparator policy over eligible courses. Implementations must define a
/// total order; remaining ties are broken by catalog source order because
/// the caller sorts stably.
pub trait Ranker {
    fn compare(&self, a: &EligibleCourse<'_>, b: &EligibleCourse<'_>) -> Ordering;
}

/// Stock ordering: level ascending, retake-flagged courses first within a
/// level, then credit hours descending so larger courses fill the budget
/// before smaller ones. The retake flag is only ever set when the policy
/// enables retake priority, so with the flag off this reduces to
/// (level, credits).
#[derive(Default)]
pub struct LevelCreditRanker;

impl Ranker for LevelCreditRanker {
    fn compare(&self, a: &EligibleCourse<'_>, b: &EligibleCourse<'_>) -> Ordering {
        a.course
            .level
            .cmp(&b.course.level)
            .then_with(|| b.retake.cmp(&a.retake))
            .then_with(|| b.course.credits.cmp(&a.course.credits))
    }
}
