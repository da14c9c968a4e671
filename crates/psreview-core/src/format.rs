//! Description formatting for display
//!
//! The raw description text arrives as one long line with inline section
//! labels and `•` bullets. Three ordered passes rewrite it into readable
//! markdown; later passes operate on the output of earlier ones.

use once_cell::sync::Lazy;
use regex::Regex;

/// Matches the literal section labels case-insensitively. The original
/// casing is kept in the output via the capture group.
static SECTION_LABELS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(Problem Statement|Background|Expected Solution)").unwrap());

/// Format a raw description for display.
///
/// 1. Wrap each section label in `**…**` emphasis markers.
/// 2. Rewrite each `•` bullet glyph as a markdown list dash on its own line.
/// 3. Break `". "` into `".\n"` so each sentence starts on its own line.
///
/// Pass 3 is a naive splitter: it also breaks abbreviations and decimal
/// numbers ("approx. 5" becomes two lines). That mis-split is accepted
/// display behavior, not something to correct here.
pub fn format_description(raw: &str) -> String {
    let text = SECTION_LABELS.replace_all(raw, "**$1**");
    let text = text.replace('•', "\n- ");
    text.replace(". ", ".\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn section_labels_are_emphasized_and_sentences_split() {
        let raw = "Problem Statement: build an app. Background: rural areas. Expected Solution: use AI.";
        let formatted = format_description(raw);
        assert_eq!(
            formatted,
            "**Problem Statement**: build an app.\n\
             **Background**: rural areas.\n\
             **Expected Solution**: use AI."
        );
    }

    #[test]
    fn label_casing_is_preserved() {
        let formatted = format_description("PROBLEM STATEMENT: do the thing");
        assert_eq!(formatted, "**PROBLEM STATEMENT**: do the thing");
    }

    #[test]
    fn bullets_become_list_dashes() {
        let formatted = format_description("Goals: • scale • impact");
        assert_eq!(formatted, "Goals: \n-  scale \n-  impact");
    }

    #[test]
    fn abbreviations_are_mis_split_by_design() {
        let formatted = format_description("Covers approx. 5 districts");
        assert_eq!(formatted, "Covers approx.\n5 districts");
    }

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(format_description("no markers here"), "no markers here");
    }
}
