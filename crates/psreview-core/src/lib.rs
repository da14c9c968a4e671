//! # psreview
//!
//! Terminal review dashboard for hackathon problem statements.
//!
//! psreview loads a flat CSV of problem statements, lets a single reviewer
//! filter, search, and page through them one at a time, annotate each with
//! a review status and notes, and export the shortlisted subset. The CSV
//! file is both the source dataset and the review-state store: the full set
//! is rewritten after every mutation.
//!
//! ## Architecture
//!
//! - **Store**: in-memory record set backed by one CSV file
//! - **Query**: stable filtering, facet lists, progress counts
//! - **TUI**: terminal dashboard driving the review loop
//! - **Export/Prompt**: shortlist CSV artifact and clipboard prompt
//!
//! ## Quick Start
//!
//! ```bash
//! # Review the dataset interactively
//! psreview review --data problem_statements.csv
//!
//! # Export the shortlist
//! psreview export
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod clipboard;
pub mod config;
pub mod error;
pub mod export;
pub mod format;
pub mod models;
pub mod nav;
pub mod prompt;
pub mod query;
pub mod store;
pub mod tui;

pub use config::Config;
pub use error::{Error, Result};

/// Re-exports for convenience
pub mod prelude {
    pub use crate::config::Config;
    pub use crate::error::{Error, Result};
    pub use crate::export::ExportOutcome;
    pub use crate::models::*;
    pub use crate::nav::Cursor;
    pub use crate::prompt::BrainstormPrompt;
    pub use crate::query::ProgressCounts;
    pub use crate::store::RecordStore;
}
