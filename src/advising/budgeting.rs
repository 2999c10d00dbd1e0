use std::collections::BTreeSet;

use crate::types::advice_bundle::{EligibleCourse, RecommendedCourse};
use crate::types::identifiers::CourseCode;

pub struct CapResult {
    pub admitted: Vec<RecommendedCourse>,
    pub admitted_codes: BTreeSet<CourseCode>,
    pub credits_used: u32,
    pub courses_recommended: usize,
    pub courses_excluded_by_cap: usize,
}

/// One linear pass in ranked order: admit a course while the running total
/// stays within the cap, otherwise skip it permanently. A skipped course
/// does not advance the total, so smaller courses later in the order still
/// get a chance.
pub fn apply_credit_cap(ranked: Vec<EligibleCourse<'_>>, cap: u32) -> CapResult {
    let mut admitted = Vec::new();
    let mut admitted_codes = BTreeSet::new();
    let mut credits_used = 0;
    let mut courses_recommended = 0;
    let mut courses_excluded_by_cap = 0;

    for eligible in ranked {
        if credits_used + eligible.course.credits <= cap {
            admitted_codes.insert(eligible.course.code.clone());
            admitted.push(RecommendedCourse {
                code: eligible.course.code.as_str().to_string(),
                credits: eligible.course.credits,
                level: eligible.course.level,
                reason: eligible.reason,
            });
            credits_used += eligible.course.credits;
            courses_recommended += 1;
        } else {
            courses_excluded_by_cap += 1;
        }
    }

    CapResult {
        admitted,
        admitted_codes,
        credits_used,
        courses_recommended,
        courses_excluded_by_cap,
    }
}
