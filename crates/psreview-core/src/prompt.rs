//! Brainstorming prompt builder
//!
//! Maps one record to a fixed-schema prompt document for pasting into an
//! LLM chat. Everything except the record fields is constant text.

use serde::Serialize;

use crate::error::Result;
use crate::models::Record;

/// Brainstorm objective, identical for every record
pub const BRAINSTORM_OBJECTIVE: &str = "Generate innovative, practical, and high-impact features that will make this solution stand out among 500+ submissions in Smart India Hackathon.";

/// Feature guidelines, in order
pub const FEATURE_GUIDELINES: [&str; 4] = [
    "At least 3-5 UNIQUE features (technical or functional) that other teams are less likely to think of.",
    "Features should balance innovation with feasibility (doable in SIH timeframe).",
    "Emphasize use of cutting-edge tech (AI/ML, IoT, Blockchain, AR/VR, Cloud, Edge, etc.) relevant to the theme.",
    "Include at least one feature focused on scalability, one on user experience, and one on measurable impact.",
];

/// Required presentation outline sections, in order
pub const PPT_MUST_HAVES: [&str; 7] = [
    "Problem Background (data/evidence of importance)",
    "Proposed Solution (clear + innovative angle)",
    "Unique Features (highlighted as differentiators)",
    "Tech Stack (modern & feasible)",
    "Implementation Roadmap (timeline for SIH)",
    "Impact (social, economic, or national level)",
    "Future Scope (scalability and sustainability)",
];

/// Output-format instruction for the model
pub const OUTPUT_FORMAT: &str =
    "Give a structured feature list + PPT outline tailored to this specific problem statement.";

/// Fixed-schema brainstorming prompt for one problem statement.
///
/// Serialized key names and order match the document schema consumers
/// expect, hence the non-Rust field spellings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BrainstormPrompt {
    /// Problem statement title
    #[serde(rename = "Idea_Title")]
    pub idea_title: String,

    /// PS number
    #[serde(rename = "PS_Number")]
    pub ps_number: String,

    /// Issuing organization
    #[serde(rename = "Organization")]
    pub organization: String,

    /// Theme
    #[serde(rename = "Theme")]
    pub theme: String,

    /// The raw, unformatted description
    #[serde(rename = "Challenge_Summary")]
    pub challenge_summary: String,

    /// Constant objective string
    #[serde(rename = "Brainstorm_Objective")]
    pub brainstorm_objective: &'static str,

    /// Constant feature guidelines
    #[serde(rename = "Feature_Guidelines")]
    pub feature_guidelines: [&'static str; 4],

    /// Constant presentation outline
    #[serde(rename = "PPT_Must_Haves")]
    pub ppt_must_haves: [&'static str; 7],

    /// Constant output-format instruction
    #[serde(rename = "Output_Format")]
    pub output_format: &'static str,
}

impl BrainstormPrompt {
    /// Build the prompt document for one record.
    ///
    /// Uses the raw description, not the display-formatted one: the model
    /// gets the text as scraped.
    pub fn build(record: &Record) -> Self {
        Self {
            idea_title: record.title.clone(),
            ps_number: record.ps_number.clone(),
            organization: record.organization.clone(),
            theme: record.theme.clone(),
            challenge_summary: record.description.clone(),
            brainstorm_objective: BRAINSTORM_OBJECTIVE,
            feature_guidelines: FEATURE_GUIDELINES,
            ppt_must_haves: PPT_MUST_HAVES,
            output_format: OUTPUT_FORMAT,
        }
    }

    /// Serialize as indented JSON for the clipboard
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
