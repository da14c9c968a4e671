//! Reusable TUI components
//!
//! Small widgets shared by the dashboard panels.

use ratatui::{
    style::{Color, Style},
    text::Span,
};

use crate::models::ReviewStatus;
use crate::query::ProgressCounts;

/// Colored status badge (dot + label) for a review status
pub struct StatusBadge {
    status: ReviewStatus,
}

impl StatusBadge {
    /// Badge for `status`
    pub fn new(status: ReviewStatus) -> Self {
        Self { status }
    }

    /// Render as a styled span
    pub fn to_span(&self) -> Span<'static> {
        let (symbol, color) = match self.status {
            ReviewStatus::NotReviewed => ("○", Color::DarkGray),
            ReviewStatus::Shortlisted => ("●", Color::Green),
            ReviewStatus::Rejected => ("●", Color::Red),
            ReviewStatus::SeeLater => ("●", Color::Yellow),
        };

        Span::styled(
            format!("{} {}", symbol, self.status.label()),
            Style::default().fg(color),
        )
    }
}

/// One-line review progress summary with an inline bar
pub struct ProgressLine {
    counts: ProgressCounts,
}

impl ProgressLine {
    /// Progress line over `counts`
    pub fn new(counts: ProgressCounts) -> Self {
        Self { counts }
    }

    /// Render the bar + counts as plain text, `width` cells of bar
    pub fn render_inline(&self, width: usize) -> String {
        let fraction = if self.counts.total > 0 {
            self.counts.reviewed as f64 / self.counts.total as f64
        } else {
            0.0
        };
        let filled = (fraction * width as f64) as usize;
        let empty = width - filled;

        format!(
            "{}{} {}/{} reviewed · {} shortlisted · {} rejected · {} later",
            "█".repeat(filled),
            "░".repeat(empty),
            self.counts.reviewed,
            self.counts.total,
            self.counts.shortlisted,
            self.counts.rejected,
            self.counts.see_later,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_line_scales_the_bar() {
        let counts = ProgressCounts {
            total: 4,
            reviewed: 2,
            shortlisted: 1,
            rejected: 1,
            see_later: 0,
        };
        let line = ProgressLine::new(counts).render_inline(10);
        assert!(line.starts_with("█████░░░░░"));
        assert!(line.contains("2/4 reviewed"));
    }

    #[test]
    fn progress_line_handles_an_empty_dataset() {
        let line = ProgressLine::new(ProgressCounts::default()).render_inline(4);
        assert!(line.starts_with("░░░░"));
    }
}
