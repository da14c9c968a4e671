//! Filtering and aggregation over the record set
//!
//! All functions here are pure: they derive views from a record slice and
//! never mutate it. Filtering is stable, so output order is always a
//! subsequence of dataset order.

use crate::models::{FilterSpec, Record, ReviewStatus};

/// Whether one record satisfies every active predicate of `spec`.
///
/// Categorical predicates are exact, case-sensitive equality tests, each
/// skipped when unset. The free-text search applies after them and keeps a
/// record when the query is a case-insensitive substring of the PS number
/// or the title; the two targets are OR-ed, everything else is AND-ed.
pub fn matches(record: &Record, spec: &FilterSpec) -> bool {
    if let Some(category) = &spec.category {
        if record.category != *category {
            return false;
        }
    }
    if let Some(organization) = &spec.organization {
        if record.organization != *organization {
            return false;
        }
    }
    if let Some(theme) = &spec.theme {
        if record.theme != *theme {
            return false;
        }
    }
    if let Some(department) = &spec.department {
        if record.department != *department {
            return false;
        }
    }
    if let Some(status) = spec.status {
        if record.status != status {
            return false;
        }
    }

    if !spec.search.is_empty() {
        let query = spec.search.to_lowercase();
        let in_ps_number = contains_ci(&record.ps_number, &query);
        let in_title = contains_ci(&record.title, &query);
        if !in_ps_number && !in_title {
            return false;
        }
    }

    true
}

/// Case-insensitive substring test; an empty haystack never matches.
fn contains_ci(haystack: &str, lowercase_needle: &str) -> bool {
    !haystack.is_empty() && haystack.to_lowercase().contains(lowercase_needle)
}

/// Filter `records`, preserving dataset order.
///
/// An empty result is valid, not an error; callers render "no results" and
/// suspend navigation.
pub fn filter<'a>(records: &'a [Record], spec: &FilterSpec) -> Vec<&'a Record> {
    records.iter().filter(|r| matches(r, spec)).collect()
}

/// Filter `records`, returning indices into the input slice.
///
/// The TUI keeps indices rather than references so the store stays free for
/// mutation between renders.
pub fn filter_indices(records: &[Record], spec: &FilterSpec) -> Vec<usize> {
    records
        .iter()
        .enumerate()
        .filter(|(_, r)| matches(r, spec))
        .map(|(i, _)| i)
        .collect()
}

/// Sorted, deduplicated values of one categorical column, for building
/// filter selector option lists.
pub fn facet_values<F>(records: &[Record], accessor: F) -> Vec<String>
where
    F: Fn(&Record) -> &str,
{
    let mut values: Vec<String> = records.iter().map(|r| accessor(r).to_string()).collect();
    values.sort();
    values.dedup();
    values
}

/// Review progress over the full record set
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProgressCounts {
    /// Total records in the dataset
    pub total: usize,
    /// Records with any status other than `Not Reviewed`
    pub reviewed: usize,
    /// Records marked `Shortlisted`
    pub shortlisted: usize,
    /// Records marked `Rejected`
    pub rejected: usize,
    /// Records marked `See Later`
    pub see_later: usize,
}

impl ProgressCounts {
    /// Tally progress over `records`
    pub fn tally(records: &[Record]) -> Self {
        let mut counts = Self {
            total: records.len(),
            ..Self::default()
        };
        for record in records {
            match record.status {
                ReviewStatus::NotReviewed => {}
                ReviewStatus::Shortlisted => counts.shortlisted += 1,
                ReviewStatus::Rejected => counts.rejected += 1,
                ReviewStatus::SeeLater => counts.see_later += 1,
            }
            if record.status != ReviewStatus::NotReviewed {
                counts.reviewed += 1;
            }
        }
        counts
    }
}
