pub mod advice_bundle;
pub mod identifiers;
pub mod student;

pub use advice_bundle::{
    AdviceMetadata, EligibleCourse, PolicyRangeError, RecommendationResult, RecommendedCourse,
};
pub use identifiers::{CourseCode, CourseCodeError, SnapshotVersion};
pub use student::StudentContext;
