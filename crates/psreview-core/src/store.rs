//! CSV-backed record store
//!
//! The dataset file is both the immutable source data and the mutable
//! review-state store: the whole set is loaded once at startup and written
//! back in full after every single-field mutation. There is no separate
//! state file and no incremental writes.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};
use crate::models::{Record, ReviewStatus};

/// A single-field edit applied to one record
#[derive(Debug, Clone, PartialEq)]
pub enum FieldEdit {
    /// Replace the review status
    Status(ReviewStatus),
    /// Replace the notes text
    Notes(String),
}

/// In-memory record set backed by a single CSV file.
///
/// The in-memory set is the source of truth; all filtered views are derived
/// from it and never separately mutated. Records are never created or
/// deleted, only their `status` and `notes` fields change, keyed by PS
/// number.
#[derive(Debug)]
pub struct RecordStore {
    path: PathBuf,
    records: Vec<Record>,
}

impl RecordStore {
    /// Load the full dataset from `path`.
    ///
    /// A missing or malformed file is fatal: the session must not start
    /// without a dataset.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if !path.exists() {
            return Err(Error::load(format!(
                "dataset file not found: {}",
                path.display()
            )));
        }

        let mut reader = csv::Reader::from_path(&path)
            .map_err(|e| Error::load(format!("{}: {e}", path.display())))?;
        let records = reader
            .deserialize()
            .collect::<std::result::Result<Vec<Record>, _>>()
            .map_err(|e| Error::load(format!("{}: {e}", path.display())))?;

        debug!(count = records.len(), path = %path.display(), "loaded dataset");
        Ok(Self { path, records })
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All records, in dataset order
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look up a record by PS number
    pub fn get(&self, ps_number: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.ps_number == ps_number)
    }

    /// Apply a single-field edit to the record with the given PS number and
    /// persist the entire set.
    ///
    /// If the write fails the in-memory mutation is rolled back, so memory
    /// and disk stay consistent. A missing PS number is an assertion-class
    /// failure: the key invariant guarantees every mutation originates from
    /// a loaded record.
    pub fn update_field(&mut self, ps_number: &str, edit: FieldEdit) -> Result<()> {
        let index = self
            .records
            .iter()
            .position(|r| r.ps_number == ps_number)
            .ok_or_else(|| Error::not_found("Record", ps_number))?;

        let previous = match &edit {
            FieldEdit::Status(status) => {
                let record = &mut self.records[index];
                let old = FieldEdit::Status(record.status);
                record.status = *status;
                old
            }
            FieldEdit::Notes(notes) => {
                let record = &mut self.records[index];
                let old = FieldEdit::Notes(std::mem::take(&mut record.notes));
                record.notes = notes.clone();
                old
            }
        };

        if let Err(e) = self.persist() {
            let record = &mut self.records[index];
            match previous {
                FieldEdit::Status(status) => record.status = status,
                FieldEdit::Notes(notes) => record.notes = notes,
            }
            return Err(e);
        }
        Ok(())
    }

    /// Set the review status of one record and persist
    pub fn update_status(&mut self, ps_number: &str, status: ReviewStatus) -> Result<()> {
        self.update_field(ps_number, FieldEdit::Status(status))
    }

    /// Set the notes of one record and persist
    pub fn update_notes(&mut self, ps_number: &str, notes: impl Into<String>) -> Result<()> {
        self.update_field(ps_number, FieldEdit::Notes(notes.into()))
    }

    /// Write the full record set back to the backing file.
    ///
    /// Writes to a sibling temp file first and renames it over the original
    /// so a failed write never leaves a truncated dataset behind.
    fn persist(&self) -> Result<()> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        for record in &self.records {
            writer
                .serialize(record)
                .map_err(|e| Error::persist(e.to_string()))?;
        }
        let bytes = writer
            .into_inner()
            .map_err(|e| Error::persist(e.to_string()))?;

        let tmp = self.path.with_extension("csv.tmp");
        fs::write(&tmp, &bytes).map_err(|e| Error::persist(format!("{}: {e}", tmp.display())))?;
        fs::rename(&tmp, &self.path).map_err(|e| {
            let _ = fs::remove_file(&tmp);
            Error::persist(format!("{}: {e}", self.path.display()))
        })?;

        debug!(count = self.records.len(), path = %self.path.display(), "persisted dataset");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    const FULL_HEADER: &str =
        "PS Number,Problem Statement Title,Organization,Department,Category,Theme,Description,Status,Notes";

    fn write_dataset(dir: &TempDir, contents: &str) -> PathBuf {
        let path = dir.path().join("problem_statements.csv");
        fs::write(&path, contents).unwrap();
        path
    }

    fn sample_csv() -> String {
        format!(
            "{FULL_HEADER}\n\
             25001,Smart Irrigation,Ministry of Agriculture,DoA,Software,Agriculture,Build an app.,Not Reviewed,\n\
             25002,Flood Alert,Ministry of Jal Shakti,DoWR,Software,Disaster Management,Warn early.,Shortlisted,promising\n"
        )
    }

    #[test]
    fn load_missing_file_is_fatal() {
        let dir = TempDir::new().unwrap();
        let result = RecordStore::load(dir.path().join("nope.csv"));
        assert!(matches!(result, Err(Error::Load(_))));
    }

    #[test]
    fn load_malformed_file_is_fatal() {
        let dir = TempDir::new().unwrap();
        let path = write_dataset(&dir, "PS Number,Problem Statement Title\n25001\n");
        assert!(matches!(RecordStore::load(path), Err(Error::Load(_))));
    }

    #[test]
    fn load_reads_all_records_in_order() {
        let dir = TempDir::new().unwrap();
        let path = write_dataset(&dir, &sample_csv());
        let store = RecordStore::load(path).unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.records()[0].ps_number, "25001");
        assert_eq!(store.records()[1].status, ReviewStatus::Shortlisted);
        assert_eq!(store.records()[1].notes, "promising");
    }

    #[test]
    fn missing_review_columns_default() {
        let dir = TempDir::new().unwrap();
        let path = write_dataset(
            &dir,
            "PS Number,Problem Statement Title,Organization,Department,Category,Theme,Description\n\
             25001,Smart Irrigation,MoA,DoA,Software,Agriculture,Build an app.\n",
        );
        let store = RecordStore::load(path).unwrap();

        assert_eq!(store.records()[0].status, ReviewStatus::NotReviewed);
        assert_eq!(store.records()[0].notes, "");
    }

    #[test]
    fn blank_status_cell_defaults() {
        let dir = TempDir::new().unwrap();
        let path = write_dataset(
            &dir,
            &format!("{FULL_HEADER}\n25001,Smart Irrigation,MoA,DoA,Software,Agriculture,Build an app.,,\n"),
        );
        let store = RecordStore::load(path).unwrap();
        assert_eq!(store.records()[0].status, ReviewStatus::NotReviewed);
    }

    #[test]
    fn update_persists_and_round_trips() {
        let dir = TempDir::new().unwrap();
        let path = write_dataset(&dir, &sample_csv());
        let mut store = RecordStore::load(&path).unwrap();

        store
            .update_status("25001", ReviewStatus::SeeLater)
            .unwrap();
        store.update_notes("25001", "revisit with the team").unwrap();

        let reloaded = RecordStore::load(&path).unwrap();
        assert_eq!(reloaded.records(), store.records());
        let record = reloaded.get("25001").unwrap();
        assert_eq!(record.status, ReviewStatus::SeeLater);
        assert_eq!(record.notes, "revisit with the team");
    }

    #[test]
    fn repeated_update_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let path = write_dataset(&dir, &sample_csv());
        let mut store = RecordStore::load(&path).unwrap();

        store
            .update_status("25002", ReviewStatus::Rejected)
            .unwrap();
        let after_first = store.records().to_vec();
        store
            .update_status("25002", ReviewStatus::Rejected)
            .unwrap();

        assert_eq!(store.records(), after_first.as_slice());
    }

    #[test]
    fn unknown_ps_number_is_not_found() {
        let dir = TempDir::new().unwrap();
        let path = write_dataset(&dir, &sample_csv());
        let mut store = RecordStore::load(path).unwrap();

        let result = store.update_status("99999", ReviewStatus::Rejected);
        assert!(matches!(result, Err(Error::NotFound { .. })));
    }

    #[test]
    fn failed_persist_rolls_back_the_mutation() {
        let dir = TempDir::new().unwrap();
        let path = write_dataset(&dir, &sample_csv());
        let mut store = RecordStore::load(&path).unwrap();

        // Replace the dataset's parent with an unwritable location by
        // pointing the store at a directory that no longer exists.
        store.path = dir.path().join("gone").join("problem_statements.csv");

        let result = store.update_status("25001", ReviewStatus::Shortlisted);
        assert!(matches!(result, Err(Error::Persist(_))));
        assert_eq!(
            store.get("25001").unwrap().status,
            ReviewStatus::NotReviewed
        );
    }
}
