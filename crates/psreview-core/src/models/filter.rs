//! Filter specification for one query over the record set

use serde::{Deserialize, Serialize};

use super::ReviewStatus;

/// The set of active predicates for one query.
///
/// Each categorical filter is an exact, case-sensitive equality test;
/// `None` is the "All" wildcard and skips the predicate entirely. The
/// free-text search applies after the categorical filters as a
/// case-insensitive substring match on PS number or title.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterSpec {
    /// Category filter, `None` = All
    pub category: Option<String>,

    /// Organization filter, `None` = All
    pub organization: Option<String>,

    /// Theme filter, `None` = All
    pub theme: Option<String>,

    /// Department filter, `None` = All
    pub department: Option<String>,

    /// Review status filter, `None` = All
    pub status: Option<ReviewStatus>,

    /// Free-text search over PS number and title; empty = no search
    pub search: String,
}

impl FilterSpec {
    /// Whether any predicate is active
    pub fn is_active(&self) -> bool {
        self.category.is_some()
            || self.organization.is_some()
            || self.theme.is_some()
            || self.department.is_some()
            || self.status.is_some()
            || !self.search.is_empty()
    }

    /// Short human-readable summary of the active predicates, for the header
    pub fn summary(&self) -> String {
        let mut parts = Vec::new();
        if let Some(category) = &self.category {
            parts.push(format!("category={category}"));
        }
        if let Some(organization) = &self.organization {
            parts.push(format!("org={organization}"));
        }
        if let Some(theme) = &self.theme {
            parts.push(format!("theme={theme}"));
        }
        if let Some(department) = &self.department {
            parts.push(format!("dept={department}"));
        }
        if let Some(status) = self.status {
            parts.push(format!("status={status}"));
        }
        if !self.search.is_empty() {
            parts.push(format!("search={:?}", self.search));
        }
        if parts.is_empty() {
            "no filters".to_string()
        } else {
            parts.join("  ")
        }
    }
}
