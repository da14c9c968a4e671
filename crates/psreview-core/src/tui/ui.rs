//! UI rendering for the TUI

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::app::{App, Focus};
use super::components::{ProgressLine, StatusBadge};
use crate::format::format_description;

/// Main colors
const PRIMARY: Color = Color::Cyan;
const SECONDARY: Color = Color::Magenta;
const WARNING: Color = Color::Yellow;
const MUTED: Color = Color::DarkGray;

/// Draw the entire UI
pub fn draw(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Search + filters
            Constraint::Min(10),   // Record detail
            Constraint::Length(1), // Status bar
        ])
        .split(frame.size());

    draw_header(frame, app, chunks[0]);
    draw_filter_bar(frame, app, chunks[1]);
    if app.current().is_some() {
        draw_record(frame, app, chunks[2]);
    } else {
        draw_no_results(frame, chunks[2]);
    }
    draw_status_bar(frame, app, chunks[3]);

    if app.show_help {
        draw_help_overlay(frame);
    }
}

fn draw_header(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(16),
            Constraint::Min(30),
            Constraint::Length(30),
        ])
        .split(area);

    let logo = Paragraph::new("💡 psreview")
        .style(Style::default().fg(PRIMARY).bold())
        .block(Block::default().borders(Borders::NONE));
    frame.render_widget(logo, chunks[0]);

    let position = if app.visible.is_empty() {
        "No matching problem statements".to_string()
    } else {
        format!(
            "Problem {} of {}",
            app.cursor.position() + 1,
            app.visible.len()
        )
    };
    let center = Paragraph::new(position)
        .style(Style::default().bold())
        .alignment(Alignment::Center);
    frame.render_widget(center, chunks[1]);

    let progress = Paragraph::new(format!(
        "{}/{} reviewed",
        app.progress.reviewed, app.progress.total
    ))
    .style(Style::default().fg(MUTED))
    .alignment(Alignment::Right);
    frame.render_widget(progress, chunks[2]);
}

fn draw_filter_bar(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    // Search input
    let search_focused = app.focus == Focus::Search;
    let search_style = if search_focused {
        Style::default().fg(PRIMARY)
    } else {
        Style::default().fg(MUTED)
    };
    let cursor = if search_focused { "▌" } else { "" };
    let search_input = Paragraph::new(format!("🔍 {}{}", app.filter.search, cursor))
        .style(search_style)
        .block(
            Block::default()
                .title(if search_focused {
                    "Search (Enter/Esc to leave)"
                } else {
                    "Search (/ to focus)"
                })
                .borders(Borders::ALL)
                .border_style(search_style),
        );
    frame.render_widget(search_input, chunks[0]);

    // Active categorical filters
    let all = "All".to_string();
    let filters = format!(
        "c {}  o {}  t {}  d {}  f {}",
        app.filter.category.as_ref().unwrap_or(&all),
        app.filter.organization.as_ref().unwrap_or(&all),
        app.filter.theme.as_ref().unwrap_or(&all),
        app.filter.department.as_ref().unwrap_or(&all),
        app.filter
            .status
            .map_or_else(|| all.clone(), |s| s.to_string()),
    );
    let filters_style = if app.filter.is_active() {
        Style::default().fg(WARNING)
    } else {
        Style::default().fg(MUTED)
    };
    let filters_widget = Paragraph::new(filters).style(filters_style).block(
        Block::default()
            .title("Filters (r to reset)")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(MUTED)),
    );
    frame.render_widget(filters_widget, chunks[1]);
}

fn draw_record(frame: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8), // General information
            Constraint::Min(8),    // Description
            Constraint::Length(8), // Notes
        ])
        .split(area);

    draw_general_info(frame, app, chunks[0]);
    draw_description(frame, app, chunks[1]);
    draw_notes(frame, app, chunks[2]);
}

fn draw_general_info(frame: &mut Frame, app: &App, area: Rect) {
    let Some(record) = app.current() else {
        return;
    };

    let label = Style::default().fg(SECONDARY);
    let lines = vec![
        Line::from(vec![
            Span::styled("PS Number:    ", label),
            Span::styled(record.ps_number.clone(), Style::default().bold()),
        ]),
        Line::from(vec![
            Span::styled("Organization: ", label),
            Span::raw(record.organization.clone()),
        ]),
        Line::from(vec![
            Span::styled("Department:   ", label),
            Span::raw(record.department.clone()),
        ]),
        Line::from(vec![
            Span::styled("Category:     ", label),
            Span::raw(record.category.clone()),
        ]),
        Line::from(vec![
            Span::styled("Theme:        ", label),
            Span::raw(record.theme.clone()),
        ]),
        Line::from(vec![
            Span::styled("Status:       ", label),
            StatusBadge::new(record.status).to_span(),
            Span::styled("  (1-4 to change)", Style::default().fg(MUTED)),
        ]),
    ];

    let info = Paragraph::new(lines).block(
        Block::default()
            .title(record.title.clone())
            .title_style(Style::default().fg(PRIMARY).bold())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(MUTED)),
    );
    frame.render_widget(info, area);
}

fn draw_description(frame: &mut Frame, app: &App, area: Rect) {
    let Some(record) = app.current() else {
        return;
    };

    let formatted = format_description(&record.description);
    let lines: Vec<Line> = formatted.lines().map(emphasized_line).collect();

    let description = Paragraph::new(lines)
        .block(
            Block::default()
                .title("Description (↑/↓ to scroll)")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(MUTED)),
        )
        .wrap(Wrap { trim: false })
        .scroll((app.description_scroll, 0));
    frame.render_widget(description, area);
}

/// Turn `**label**` emphasis markers into bold spans.
///
/// The formatter emits markdown; the terminal renders the emphasis directly
/// instead of showing the markers. Segments alternate raw/bold around each
/// `**` pair.
fn emphasized_line(line: &str) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, segment) in line.split("**").enumerate() {
        if segment.is_empty() {
            continue;
        }
        if i % 2 == 1 {
            spans.push(Span::styled(
                segment.to_string(),
                Style::default().add_modifier(Modifier::BOLD).fg(PRIMARY),
            ));
        } else {
            spans.push(Span::raw(segment.to_string()));
        }
    }
    Line::from(spans)
}

fn draw_notes(frame: &mut Frame, app: &mut App, area: Rect) {
    let editing = app.focus == Focus::Notes;
    let (title, border) = if editing {
        ("📝 Notes (editing: Esc saves & closes, Ctrl+S saves)", PRIMARY)
    } else {
        ("📝 Notes (Enter to edit)", MUTED)
    };
    app.notes.set_block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border)),
    );
    app.notes.set_cursor_line_style(Style::default());
    frame.render_widget(app.notes.widget(), area);
}

fn draw_no_results(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from("No problem statements match the selected filters or search.")
            .style(Style::default().fg(WARNING).bold()),
        Line::from(""),
        Line::from("Adjust the search (/), cycle a filter (c/o/t/d/f), or reset (r).")
            .style(Style::default().fg(MUTED)),
    ];
    let notice = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(MUTED)),
    );
    frame.render_widget(notice, area);
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    let left_text = app
        .notice()
        .unwrap_or("? Help | / Search | e Notes | x Export | y Prompt | q Quit");
    let left = Paragraph::new(left_text).style(Style::default().fg(MUTED));
    frame.render_widget(left, chunks[0]);

    let right = Paragraph::new(ProgressLine::new(app.progress).render_inline(12))
        .style(Style::default().fg(MUTED))
        .alignment(Alignment::Right);
    frame.render_widget(right, chunks[1]);
}

fn draw_help_overlay(frame: &mut Frame) {
    let area = centered_rect(60, 70, frame.size());

    frame.render_widget(Clear, area);

    let help_text = vec![
        Line::from("Keyboard Shortcuts").style(Style::default().fg(PRIMARY).bold()),
        Line::from(""),
        Line::from("Navigation:").style(Style::default().fg(SECONDARY)),
        Line::from("  ←/→ or p/n         Previous / next problem"),
        Line::from("  ↑/↓                Scroll the description"),
        Line::from(""),
        Line::from("Filtering:").style(Style::default().fg(SECONDARY)),
        Line::from("  /                  Focus the search box"),
        Line::from("  c o t d f          Cycle category / org / theme / dept / status"),
        Line::from("  r                  Reset all filters"),
        Line::from(""),
        Line::from("Review:").style(Style::default().fg(SECONDARY)),
        Line::from("  1 2 3 4            Not Reviewed / Shortlisted / Rejected / See Later"),
        Line::from("  Enter or e         Edit notes (Esc saves & closes)"),
        Line::from(""),
        Line::from("Actions:").style(Style::default().fg(SECONDARY)),
        Line::from("  x                  Export shortlisted to CSV"),
        Line::from("  y                  Copy brainstorm prompt to clipboard"),
        Line::from(""),
        Line::from("General:").style(Style::default().fg(SECONDARY)),
        Line::from("  ?                  Toggle this help"),
        Line::from("  q / Ctrl+C         Quit"),
        Line::from(""),
        Line::from("Press any key to close").style(Style::default().fg(MUTED).italic()),
    ];

    let help = Paragraph::new(help_text)
        .block(
            Block::default()
                .title("Help")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(PRIMARY)),
        )
        .wrap(Wrap { trim: true });

    frame.render_widget(help, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
