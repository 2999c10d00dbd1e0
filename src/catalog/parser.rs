use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::course::{CourseRecord, Offering, Track};
use crate::types::identifiers::{CourseCode, CourseCodeError};

/// A catalog row exactly as storage hands it over, before any parsing.
///
/// Field names match the external record schema; requisite lists arrive as
/// comma-separated strings and may be empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseRow {
    #[serde(rename = "Course Code")]
    pub code: String,

    #[serde(rename = "Course Name")]
    pub name: String,

    #[serde(rename = "Prerequisites", default)]
    pub prerequisites: String,

    #[serde(rename = "Co-requisites", default)]
    pub corequisites: String,

    #[serde(rename = "Credit Hours")]
    pub credits: String,

    #[serde(rename = "Semester Offered")]
    pub semester_offered: String,

    #[serde(rename = "Track", default)]
    pub track: String,

    #[serde(rename = "Level")]
    pub level: String,

    #[serde(rename = "Description", default)]
    pub description: String,
}

#[derive(Debug, Error)]
pub enum CourseParseError {
    #[error("Course code: {0}")]
    Code(#[from] CourseCodeError),

    #[error("Credit hours {raw:?} for {code} is not a positive integer")]
    BadCredits { code: String, raw: String },

    #[error("Level {raw:?} for {code} is outside the supported range 1-4")]
    BadLevel { code: String, raw: String },

    #[error("Unknown semester offering {raw:?} for {code}")]
    UnknownOffering { code: String, raw: String },
}

impl CourseRow {
    /// Parse this raw row into a validated CourseRecord.
    ///
    /// This is the only path from storage text into the catalog; it enforces
    /// the credit-hour and level invariants up front.
    pub fn parse(&self) -> Result<CourseRecord, CourseParseError> {
        let code = CourseCode::new(&self.code)?;

        let credits = self
            .credits
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|credits| *credits > 0)
            .ok_or_else(|| CourseParseError::BadCredits {
                code: code.as_str().to_string(),
                raw: self.credits.clone(),
            })?;

        let level = self
            .level
            .trim()
            .parse::<u8>()
            .ok()
            .filter(|level| (1..=4).contains(level))
            .ok_or_else(|| CourseParseError::BadLevel {
                code: code.as_str().to_string(),
                raw: self.level.clone(),
            })?;

        let offered = match self.semester_offered.trim() {
            "Fall" => Offering::Fall,
            "Spring" => Offering::Spring,
            "Both" => Offering::Both,
            other => {
                return Err(CourseParseError::UnknownOffering {
                    code: code.as_str().to_string(),
                    raw: other.to_string(),
                })
            }
        };

        // A blank track means unrestricted
        let track = match self.track.trim() {
            "" => Track::new(Track::WILDCARD),
            name => Track::new(name),
        };

        let description = match self.description.trim() {
            "" => None,
            text => Some(text.to_string()),
        };

        Ok(CourseRecord {
            code,
            name: self.name.trim().to_string(),
            prerequisites: split_codes(&self.prerequisites),
            corequisites: split_codes(&self.corequisites),
            credits,
            offered,
            track,
            level,
            description,
        })
    }
}

/// Split a comma-separated code list. Blank entries are dropped; an empty
/// result is no constraint, never an error.
pub fn split_codes(raw: &str) -> Vec<CourseCode> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .filter_map(|entry| CourseCode::new(entry).ok())
        .collect()
}
