//! Export of shortlisted records
//!
//! Serializes the subset of records marked `Shortlisted` as a CSV byte
//! stream with the same column schema and order as the source dataset,
//! review columns included.

use crate::error::Result;
use crate::models::{Record, ReviewStatus};

/// Default file name for the export artifact
pub const DEFAULT_EXPORT_FILE: &str = "shortlisted_ideas.csv";

/// Outcome of an export request
#[derive(Debug, Clone, PartialEq)]
pub enum ExportOutcome {
    /// No records are shortlisted. A user-visible notice, not an error,
    /// and no artifact is produced.
    Empty,
    /// CSV bytes covering every shortlisted record
    Csv(Vec<u8>),
}

/// Serialize all `Shortlisted` records as CSV.
///
/// Only an exact status match exports; `See Later` is not "almost
/// shortlisted". An empty subset yields [`ExportOutcome::Empty`] rather
/// than a zero-row file.
pub fn shortlisted_csv(records: &[Record]) -> Result<ExportOutcome> {
    let shortlisted: Vec<&Record> = records
        .iter()
        .filter(|r| r.status == ReviewStatus::Shortlisted)
        .collect();

    if shortlisted.is_empty() {
        return Ok(ExportOutcome::Empty);
    }

    let mut writer = csv::Writer::from_writer(Vec::new());
    for record in shortlisted {
        writer.serialize(record)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| crate::error::Error::persist(e.to_string()))?;
    Ok(ExportOutcome::Csv(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record(ps_number: &str, status: ReviewStatus) -> Record {
        Record {
            ps_number: ps_number.to_string(),
            title: "Flood Alert".to_string(),
            organization: "Ministry of Jal Shakti".to_string(),
            department: "DoWR".to_string(),
            category: "Software".to_string(),
            theme: "Disaster Management".to_string(),
            description: "Warn early.".to_string(),
            status,
            notes: "promising".to_string(),
        }
    }

    #[test]
    fn no_shortlisted_records_is_a_notice_not_a_file() {
        let records = vec![
            record("25001", ReviewStatus::NotReviewed),
            record("25002", ReviewStatus::SeeLater),
        ];
        assert_eq!(shortlisted_csv(&records).unwrap(), ExportOutcome::Empty);
    }

    #[test]
    fn only_exact_shortlisted_matches_export() {
        let records = vec![
            record("25001", ReviewStatus::Shortlisted),
            record("25002", ReviewStatus::Rejected),
            record("25003", ReviewStatus::Shortlisted),
        ];

        let ExportOutcome::Csv(bytes) = shortlisted_csv(&records).unwrap() else {
            panic!("expected CSV output");
        };
        let mut reader = csv::Reader::from_reader(bytes.as_slice());
        let exported: Vec<Record> = reader.deserialize().map(|r| r.unwrap()).collect();

        assert_eq!(exported.len(), 2);
        assert_eq!(exported[0].ps_number, "25001");
        assert_eq!(exported[1].ps_number, "25003");
    }

    #[test]
    fn export_keeps_the_full_schema() {
        let records = vec![record("25001", ReviewStatus::Shortlisted)];

        let ExportOutcome::Csv(bytes) = shortlisted_csv(&records).unwrap() else {
            panic!("expected CSV output");
        };
        let text = String::from_utf8(bytes).unwrap();
        let header = text.lines().next().unwrap();

        assert_eq!(
            header,
            "PS Number,Problem Statement Title,Organization,Department,Category,Theme,Description,Status,Notes"
        );
        assert!(text.contains("Shortlisted"));
        assert!(text.contains("promising"));
    }
}
