//! Problem statement record model

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

/// Review status of a problem statement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ReviewStatus {
    /// Not yet looked at
    #[default]
    #[serde(rename = "Not Reviewed")]
    NotReviewed,
    /// Kept as a candidate
    Shortlisted,
    /// Ruled out
    Rejected,
    /// Parked for a second pass
    #[serde(rename = "See Later")]
    SeeLater,
}

impl ReviewStatus {
    /// All statuses in selector order
    pub const ALL: [ReviewStatus; 4] = [
        Self::NotReviewed,
        Self::Shortlisted,
        Self::Rejected,
        Self::SeeLater,
    ];

    /// Human-readable label, identical to the on-disk spelling
    pub fn label(self) -> &'static str {
        match self {
            Self::NotReviewed => "Not Reviewed",
            Self::Shortlisted => "Shortlisted",
            Self::Rejected => "Rejected",
            Self::SeeLater => "See Later",
        }
    }

    /// Next status in selector order, wrapping around
    pub fn next(self) -> Self {
        match self {
            Self::NotReviewed => Self::Shortlisted,
            Self::Shortlisted => Self::Rejected,
            Self::Rejected => Self::SeeLater,
            Self::SeeLater => Self::NotReviewed,
        }
    }
}

impl fmt::Display for ReviewStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ReviewStatus {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Not Reviewed" => Ok(Self::NotReviewed),
            "Shortlisted" => Ok(Self::Shortlisted),
            "Rejected" => Ok(Self::Rejected),
            "See Later" => Ok(Self::SeeLater),
            other => Err(format!("unknown review status: {other:?}")),
        }
    }
}

/// One problem statement with its review metadata.
///
/// Field order matches the dataset's column order; serde renames map the
/// struct onto the CSV header, so the same type drives both load and persist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Unique identifier. Opaque text, never parsed as a number, and the
    /// sole key used to locate a record for mutation.
    #[serde(rename = "PS Number")]
    pub ps_number: String,

    /// Title of the problem statement
    #[serde(rename = "Problem Statement Title")]
    pub title: String,

    /// Issuing organization
    #[serde(rename = "Organization")]
    pub organization: String,

    /// Government department
    #[serde(rename = "Department")]
    pub department: String,

    /// Category (e.g., "Software", "Hardware")
    #[serde(rename = "Category")]
    pub category: String,

    /// Theme (e.g., "Smart Automation")
    #[serde(rename = "Theme")]
    pub theme: String,

    /// Long free-text description
    #[serde(rename = "Description")]
    pub description: String,

    /// Review status; defaults to `Not Reviewed` when the column is absent
    /// or the cell is blank
    #[serde(rename = "Status", default, deserialize_with = "status_or_default")]
    pub status: ReviewStatus,

    /// Reviewer notes; defaults to empty when the column is absent
    #[serde(rename = "Notes", default)]
    pub notes: String,
}

/// Deserialize a status cell, treating an empty cell as the default.
///
/// Datasets that predate the review columns may carry a blank `Status`
/// column; any other unrecognized value is a malformed file.
fn status_or_default<'de, D>(deserializer: D) -> Result<ReviewStatus, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    if raw.is_empty() {
        return Ok(ReviewStatus::default());
    }
    raw.parse().map_err(serde::de::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_labels_round_trip() {
        for status in ReviewStatus::ALL {
            assert_eq!(status.label().parse::<ReviewStatus>(), Ok(status));
        }
    }

    #[test]
    fn status_cycle_covers_all_statuses() {
        let mut seen = vec![ReviewStatus::NotReviewed];
        let mut current = ReviewStatus::NotReviewed;
        for _ in 0..3 {
            current = current.next();
            seen.push(current);
        }
        assert_eq!(seen, ReviewStatus::ALL.to_vec());
        assert_eq!(current.next(), ReviewStatus::NotReviewed);
    }

    #[test]
    fn unknown_status_is_rejected() {
        assert!("Maybe".parse::<ReviewStatus>().is_err());
    }
}
