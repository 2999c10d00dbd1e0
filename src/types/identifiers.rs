use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseCode(String);

#[derive(Debug, Error)]
pub enum CourseCodeError {
    #[error("Course code is empty")]
    Empty,
}

impl CourseCode {
    /// Create a CourseCode from raw storage text.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, CourseCodeError> {
        let normalized = normalize_code(raw.as_ref());

        if normalized.is_empty() {
            return Err(CourseCodeError::Empty);
        }

        Ok(CourseCode(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Normalize a code: surrounding whitespace stripped, ASCII uppercased.
fn normalize_code(raw: &str) -> String {
    raw.trim().to_ascii_uppercase()
}

/// Content hash version of a catalog or policy snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SnapshotVersion(String);

impl SnapshotVersion {
    pub fn from_content(content: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(content);

        let hash = hasher.finalize();
        let hex = hex::encode(hash);

        SnapshotVersion(format!("sha256:{hex}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
