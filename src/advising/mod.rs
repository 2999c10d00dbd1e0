pub mod budgeting;
pub mod eligibility;
pub mod explanation;
pub mod ranking;

use std::cmp::Ordering;

use chrono::Utc;

use crate::catalog::index::CatalogIndex;
use crate::policy::table::PolicyTable;
use crate::types::advice_bundle::{
    AdviceMetadata, EligibleCourse, PolicyRangeError, RecommendationResult,
};
use crate::types::student::StudentContext;

pub use budgeting::{apply_credit_cap, CapResult};
pub use eligibility::{current_level, evaluate, first_unmet, Evaluation, Rejection};
pub use explanation::explain_unavailable;
pub use ranking::{LevelCreditRanker, Ranker};

/// The advising pipeline (eligibility, ranking, credit-cap packing,
/// explanation) as one pure function of the snapshots it is handed.
pub struct Advisor<R> {
    ranker: R,
}

impl Default for Advisor<LevelCreditRanker> {
    fn default() -> Self {
        Self {
            ranker: LevelCreditRanker,
        }
    }
}

impl<R> Advisor<R>
where
    R: Ranker,
{
    pub fn new(ranker: R) -> Self {
        Self { ranker }
    }

    pub fn recommend(
        &self,
        catalog: &CatalogIndex,
        policy: &PolicyTable,
        student: &StudentContext,
    ) -> Result<RecommendationResult, PolicyRangeError> {
        // 0. Resolve the credit cap first: a GPA outside every band fails
        // the whole call before any course is evaluated.
        let credit_cap = policy.credit_cap_for(student.gpa)?;

        let retake_priority = policy.retake_priority_enabled();
        let current = eligibility::current_level(catalog, student);

        // 1. Eligibility Phase
        // Catalog source order; rejections here carry no output of their
        // own, the explanation phase re-derives the narrative.
        let mut eligibles: Vec<EligibleCourse> = Vec::new();
        for course in catalog.all() {
            if let Evaluation::Eligible(eligible) =
                eligibility::evaluate(course, student, current, retake_priority)
            {
                eligibles.push(eligible);
            }
        }

        // 2. Ordering Phase
        // Stable sort: catalog source order breaks remaining ties
        eligibles.sort_by(|a, b| self.ranker.compare(a, b));

        debug_assert!(eligibles
            .windows(2)
            .all(|pair| self.ranker.compare(&pair[0], &pair[1]) != Ordering::Greater));

        // 3. Budgeting Phase
        let CapResult {
            admitted,
            admitted_codes,
            credits_used,
            courses_recommended,
            courses_excluded_by_cap,
        } = apply_credit_cap(eligibles, credit_cap);

        // 4. Explanation Phase
        let explanations =
            explain_unavailable(catalog, student, &admitted_codes, retake_priority);

        let advice = AdviceMetadata {
            gpa: student.gpa,
            term: student.term,
            track: student.track.clone(),
            credit_cap,
            credits_used,
            courses_considered: catalog.len(),
            courses_recommended,
            courses_excluded_by_cap,
            catalog_version: catalog.version().clone(),
            policy_version: policy.version().clone(),
            // Informational only, normalized away by determinism checks
            generated_at: Utc::now(),
        };

        Ok(RecommendationResult {
            recommendations: admitted,
            explanations,
            advice,
        })
    }
}

/// Run one advising pass with the stock ranking policy.
pub fn recommend(
    catalog: &CatalogIndex,
    policy: &PolicyTable,
    student: &StudentContext,
) -> Result<RecommendationResult, PolicyRangeError> {
    Advisor::default().recommend(catalog, policy, student)
}
