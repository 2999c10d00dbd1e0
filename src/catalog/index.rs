use std::collections::BTreeMap;

use thiserror::Error;

use super::course::CourseRecord;
use crate::types::identifiers::{CourseCode, SnapshotVersion};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Duplicate course code: {0}")]
    DuplicateCourseCode(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Immutable, queryable view of the catalog for one recommendation run.
///
/// Source order is preserved: it is the tie-breaking order of the whole
/// pipeline, so reordering records is a different snapshot.
#[derive(Debug, Clone)]
pub struct CatalogIndex {
    courses: Vec<CourseRecord>,
    by_code: BTreeMap<CourseCode, usize>,
    version: SnapshotVersion,
}

impl CatalogIndex {
    pub fn new(courses: Vec<CourseRecord>) -> Result<Self, CatalogError> {
        let mut by_code = BTreeMap::new();
        for (position, course) in courses.iter().enumerate() {
            if by_code.insert(course.code.clone(), position).is_some() {
                return Err(CatalogError::DuplicateCourseCode(
                    course.code.as_str().to_string(),
                ));
            }
        }

        // Fingerprint over the source-ordered serialized records
        let mut content = Vec::new();
        for course in &courses {
            content.extend(serde_json::to_vec(course)?);
            content.push(b'\n');
        }
        let version = SnapshotVersion::from_content(&content);

        Ok(CatalogIndex {
            courses,
            by_code,
            version,
        })
    }

    /// Full catalog in source order.
    pub fn all(&self) -> &[CourseRecord] {
        &self.courses
    }

    pub fn by_code(&self, code: &CourseCode) -> Option<&CourseRecord> {
        self.by_code.get(code).map(|position| &self.courses[*position])
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Content-hash fingerprint of this snapshot.
    pub fn version(&self) -> &SnapshotVersion {
        &self.version
    }
}
