use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::advice_bundle::PolicyRangeError;
use crate::types::identifiers::SnapshotVersion;

/// One GPA range mapped to a maximum credit-hour load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditBand {
    pub min_cgpa: f64,
    pub max_cgpa: f64,
    pub max_credits: u32,
}

/// Policy configuration exactly as storage hands it over.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyConfig {
    pub credit_limits: Vec<CreditBand>,

    /// Absent in older policy files; defaults to off.
    #[serde(default)]
    pub retake_failed_priority: bool,
}

#[derive(Debug, Error)]
pub enum PolicyConfigError {
    #[error("Policy table has no credit bands")]
    Empty,

    #[error("Credit band {index} is inverted: {min_cgpa} >= {max_cgpa}")]
    InvertedBand {
        index: usize,
        min_cgpa: f64,
        max_cgpa: f64,
    },

    #[error("Credit band {index} starts at {found} but the previous band ends at {expected}")]
    NotContiguous {
        index: usize,
        expected: f64,
        found: f64,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// GPA-to-credit-cap policy plus the retake flag. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct PolicyTable {
    bands: Vec<CreditBand>,
    retake_failed_priority: bool,
    version: SnapshotVersion,
}

impl PolicyTable {
    /// Validate a raw config into an immutable policy snapshot.
    ///
    /// Bands must be non-empty, ascending, and contiguous in configured
    /// order: no GPA in the covered domain may match zero or two bands.
    pub fn new(config: PolicyConfig) -> Result<Self, PolicyConfigError> {
        if config.credit_limits.is_empty() {
            return Err(PolicyConfigError::Empty);
        }

        for (index, band) in config.credit_limits.iter().enumerate() {
            if band.min_cgpa >= band.max_cgpa {
                return Err(PolicyConfigError::InvertedBand {
                    index,
                    min_cgpa: band.min_cgpa,
                    max_cgpa: band.max_cgpa,
                });
            }
        }

        for (index, pair) in config.credit_limits.windows(2).enumerate() {
            if pair[1].min_cgpa != pair[0].max_cgpa {
                return Err(PolicyConfigError::NotContiguous {
                    index: index + 1,
                    expected: pair[0].max_cgpa,
                    found: pair[1].min_cgpa,
                });
            }
        }

        let version = SnapshotVersion::from_content(&serde_json::to_vec(&config)?);

        Ok(PolicyTable {
            bands: config.credit_limits,
            retake_failed_priority: config.retake_failed_priority,
            version,
        })
    }

    /// Credit cap for a GPA.
    ///
    /// A band matches `min_cgpa <= gpa < max_cgpa`, so a shared boundary
    /// belongs to the higher band. The GPA equal to the final band's
    /// `max_cgpa` is still inside the covered domain and resolves to that
    /// band.
    pub fn credit_cap_for(&self, gpa: f64) -> Result<u32, PolicyRangeError> {
        for band in &self.bands {
            if gpa >= band.min_cgpa && gpa < band.max_cgpa {
                return Ok(band.max_credits);
            }
        }

        if let Some(last) = self.bands.last() {
            if gpa == last.max_cgpa {
                return Ok(last.max_credits);
            }
        }

        Err(PolicyRangeError { gpa })
    }

    pub fn retake_priority_enabled(&self) -> bool {
        self.retake_failed_priority
    }

    /// Bands in configured order.
    pub fn bands(&self) -> &[CreditBand] {
        &self.bands
    }

    /// Content-hash fingerprint of this snapshot.
    pub fn version(&self) -> &SnapshotVersion {
        &self.version
    }
}
