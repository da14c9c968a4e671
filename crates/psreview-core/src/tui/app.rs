//! Main TUI application state and logic

use std::fs;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tui_textarea::TextArea;

use super::event::{Event, EventHandler};

use crate::clipboard;
use crate::config::Config;
use crate::error::Result;
use crate::export::{self, ExportOutcome};
use crate::models::{FilterSpec, Record, ReviewStatus};
use crate::nav::Cursor;
use crate::prompt::BrainstormPrompt;
use crate::query::{self, ProgressCounts};
use crate::store::RecordStore;

/// Which pane owns the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Paging through records; single-key commands are live
    #[default]
    Browse,
    /// Typing into the search box
    Search,
    /// Editing the notes of the current record
    Notes,
}

/// Selector option lists for the categorical filters, built once from the
/// full dataset (the record set never grows or shrinks at runtime).
#[derive(Debug, Clone, Default)]
pub struct Facets {
    /// Distinct categories, sorted
    pub categories: Vec<String>,
    /// Distinct organizations, sorted
    pub organizations: Vec<String>,
    /// Distinct themes, sorted
    pub themes: Vec<String>,
    /// Distinct departments, sorted
    pub departments: Vec<String>,
}

impl Facets {
    fn collect(records: &[Record]) -> Self {
        Self {
            categories: query::facet_values(records, |r| &r.category),
            organizations: query::facet_values(records, |r| &r.organization),
            themes: query::facet_values(records, |r| &r.theme),
            departments: query::facet_values(records, |r| &r.department),
        }
    }
}

/// Main TUI application state.
///
/// Owns the record store and all per-session transient state (filter,
/// cursor, notes draft). Every filter-affecting edit re-runs the query and
/// re-clamps the cursor before the next render, so a stale cursor never
/// indexes the new sequence.
pub struct App {
    /// The record store (in-memory source of truth + backing file)
    pub store: RecordStore,
    /// Active filter specification
    pub filter: FilterSpec,
    /// Indices of records matching the filter, in dataset order
    pub visible: Vec<usize>,
    /// Position within `visible`
    pub cursor: Cursor,
    /// Which pane owns the keyboard
    pub focus: Focus,
    /// Notes editor for the current record
    pub notes: TextArea<'static>,
    /// Notes text as last persisted for the current record
    notes_saved: String,
    /// Scroll offset into the formatted description
    pub description_scroll: u16,
    /// Filter selector option lists
    pub facets: Facets,
    /// Review progress over the full dataset
    pub progress: ProgressCounts,
    /// Whether the app should quit
    pub should_quit: bool,
    /// Show help overlay
    pub show_help: bool,
    /// Transient notice shown in the status bar
    pub notice: Option<(String, Instant)>,
    /// Event-loop tick rate
    tick_rate: Duration,
    /// Output path for the export artifact
    export_path: PathBuf,
}

impl App {
    /// Create the app around a loaded store
    pub fn new(store: RecordStore, config: &Config) -> Self {
        let facets = Facets::collect(store.records());
        let progress = ProgressCounts::tally(store.records());
        let visible = (0..store.len()).collect();
        let mut app = Self {
            store,
            filter: FilterSpec::default(),
            visible,
            cursor: Cursor::new(),
            focus: Focus::default(),
            notes: TextArea::default(),
            notes_saved: String::new(),
            description_scroll: 0,
            facets,
            progress,
            should_quit: false,
            show_help: false,
            notice: None,
            tick_rate: Duration::from_millis(config.tui.tick_rate_ms),
            export_path: config.export.output.clone(),
        };
        app.sync_notes();
        app
    }

    /// The record under the cursor, if the filtered sequence is non-empty
    pub fn current(&self) -> Option<&Record> {
        self.visible
            .get(self.cursor.position())
            .map(|&i| &self.store.records()[i])
    }

    /// Re-run the filter, clamp the cursor, and reload dependent view state.
    ///
    /// Must run after every change to the filter or the record set, before
    /// the next render.
    fn refresh_view(&mut self) {
        self.visible = query::filter_indices(self.store.records(), &self.filter);
        self.cursor.clamp(self.visible.len());
        self.progress = ProgressCounts::tally(self.store.records());
        self.description_scroll = 0;
        self.sync_notes();
    }

    /// Load the current record's notes into the editor
    fn sync_notes(&mut self) {
        let text = self.current().map(|r| r.notes.clone()).unwrap_or_default();
        self.notes = TextArea::from(text.lines().map(str::to_string));
        self.notes_saved = text;
    }

    /// Set a transient notice that expires after 3 seconds
    pub fn set_notice(&mut self, message: impl Into<String>) {
        self.notice = Some((message.into(), Instant::now()));
    }

    /// Get the current notice if not expired
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_ref().and_then(|(msg, time)| {
            if time.elapsed() < Duration::from_secs(3) {
                Some(msg.as_str())
            } else {
                None
            }
        })
    }

    /// Handle key events
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Ctrl+C quits from any focus
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }
        if self.show_help {
            self.show_help = false;
            return;
        }
        match self.focus {
            Focus::Browse => self.handle_browse_key(key),
            Focus::Search => self.handle_search_key(key),
            Focus::Notes => self.handle_notes_key(key),
        }
    }

    fn handle_browse_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Left | KeyCode::Char('p') => {
                self.cursor.previous();
                self.on_cursor_moved();
            }
            KeyCode::Right | KeyCode::Char('n') => {
                self.cursor.next(self.visible.len());
                self.on_cursor_moved();
            }
            KeyCode::Up => self.description_scroll = self.description_scroll.saturating_sub(1),
            KeyCode::Down => self.description_scroll = self.description_scroll.saturating_add(1),
            KeyCode::Char('/') => self.focus = Focus::Search,
            KeyCode::Char('c') => {
                self.filter.category =
                    cycle_facet(self.filter.category.take(), &self.facets.categories);
                self.refresh_view();
            }
            KeyCode::Char('o') => {
                self.filter.organization =
                    cycle_facet(self.filter.organization.take(), &self.facets.organizations);
                self.refresh_view();
            }
            KeyCode::Char('t') => {
                self.filter.theme = cycle_facet(self.filter.theme.take(), &self.facets.themes);
                self.refresh_view();
            }
            KeyCode::Char('d') => {
                self.filter.department =
                    cycle_facet(self.filter.department.take(), &self.facets.departments);
                self.refresh_view();
            }
            KeyCode::Char('f') => {
                self.filter.status = cycle_status(self.filter.status.take());
                self.refresh_view();
            }
            KeyCode::Char('r') => {
                self.filter = FilterSpec::default();
                self.refresh_view();
                self.set_notice("Filters reset");
            }
            KeyCode::Char(c @ '1'..='4') => {
                let index = c as usize - '1' as usize;
                self.set_current_status(ReviewStatus::ALL[index]);
            }
            KeyCode::Enter | KeyCode::Char('e') => {
                if self.current().is_some() {
                    self.focus = Focus::Notes;
                }
            }
            KeyCode::Char('x') => self.export_shortlisted(),
            KeyCode::Char('y') => self.copy_prompt(),
            _ => {}
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => self.focus = Focus::Browse,
            KeyCode::Backspace => {
                self.filter.search.pop();
                self.refresh_view();
            }
            KeyCode::Char(c) => {
                self.filter.search.push(c);
                self.refresh_view();
            }
            _ => {}
        }
    }

    fn handle_notes_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.save_notes();
                self.focus = Focus::Browse;
            }
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.save_notes();
            }
            _ => {
                self.notes.input(key);
            }
        }
    }

    fn on_cursor_moved(&mut self) {
        self.description_scroll = 0;
        self.sync_notes();
    }

    /// Set the current record's status and persist
    fn set_current_status(&mut self, status: ReviewStatus) {
        let Some(ps_number) = self.current().map(|r| r.ps_number.clone()) else {
            return;
        };
        match self.store.update_status(&ps_number, status) {
            Ok(()) => {
                self.set_notice(format!("Status updated to {status}"));
                // A status filter may have just dropped the record from view.
                self.refresh_view();
            }
            Err(e) => self.set_notice(e.to_string()),
        }
    }

    /// Persist the notes draft if it changed since the last save
    fn save_notes(&mut self) {
        let Some(ps_number) = self.current().map(|r| r.ps_number.clone()) else {
            return;
        };
        let text = self.notes.lines().join("\n");
        if text == self.notes_saved {
            return;
        }
        match self.store.update_notes(&ps_number, text.clone()) {
            Ok(()) => {
                self.notes_saved = text;
                self.set_notice("Notes saved");
            }
            Err(e) => self.set_notice(e.to_string()),
        }
    }

    /// Export shortlisted records to the configured output path
    fn export_shortlisted(&mut self) {
        match export::shortlisted_csv(self.store.records()) {
            Ok(ExportOutcome::Empty) => self.set_notice("No shortlisted ideas found"),
            Ok(ExportOutcome::Csv(bytes)) => match fs::write(&self.export_path, bytes) {
                Ok(()) => self.set_notice(format!(
                    "Exported {} shortlisted to {}",
                    self.progress.shortlisted,
                    self.export_path.display()
                )),
                Err(e) => self.set_notice(format!("Export failed: {e}")),
            },
            Err(e) => self.set_notice(format!("Export failed: {e}")),
        }
    }

    /// Copy the brainstorm prompt for the current record to the clipboard.
    /// Clipboard failures are a notice, never a crash.
    fn copy_prompt(&mut self) {
        let Some(record) = self.current() else {
            return;
        };
        let result = BrainstormPrompt::build(record)
            .to_json()
            .and_then(|json| clipboard::copy(&json));
        match result {
            Ok(()) => self.set_notice("Prompt copied to clipboard"),
            Err(e) => self.set_notice(e.to_string()),
        }
    }

    /// Run the TUI application
    pub async fn run(&mut self) -> Result<()> {
        use crossterm::{
            execute,
            terminal::{
                disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
            },
        };
        use ratatui::{backend::CrosstermBackend, Terminal};
        use std::io;

        enable_raw_mode().map_err(|e| crate::error::Error::Tui(e.to_string()))?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)
            .map_err(|e| crate::error::Error::Tui(e.to_string()))?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal =
            Terminal::new(backend).map_err(|e| crate::error::Error::Tui(e.to_string()))?;

        let mut events = EventHandler::new(self.tick_rate.as_millis() as u64);
        events.start();

        while !self.should_quit {
            terminal
                .draw(|frame| super::ui::draw(frame, self))
                .map_err(|e| crate::error::Error::Tui(e.to_string()))?;

            if let Some(event) = events.next().await {
                match event {
                    Event::Key(key) => self.handle_key(key),
                    Event::Tick | Event::Resize(_, _) => {}
                }
            }
        }

        disable_raw_mode().map_err(|e| crate::error::Error::Tui(e.to_string()))?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .map_err(|e| crate::error::Error::Tui(e.to_string()))?;
        terminal
            .show_cursor()
            .map_err(|e| crate::error::Error::Tui(e.to_string()))?;

        Ok(())
    }
}

/// Advance a categorical filter: All → each value in order → All
fn cycle_facet(current: Option<String>, values: &[String]) -> Option<String> {
    match current {
        None => values.first().cloned(),
        Some(value) => match values.iter().position(|v| *v == value) {
            Some(i) if i + 1 < values.len() => Some(values[i + 1].clone()),
            _ => None,
        },
    }
}

/// Advance the status filter: All → each status in selector order → All
fn cycle_status(current: Option<ReviewStatus>) -> Option<ReviewStatus> {
    match current {
        None => Some(ReviewStatus::ALL[0]),
        Some(ReviewStatus::SeeLater) => None,
        Some(status) => Some(status.next()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_store(dir: &TempDir) -> RecordStore {
        let path = dir.path().join("problem_statements.csv");
        fs::write(
            &path,
            "PS Number,Problem Statement Title,Organization,Department,Category,Theme,Description,Status,Notes\n\
             25001,Smart Irrigation,MoA,DoA,Software,Agriculture,Water crops. Save water.,Not Reviewed,\n\
             25002,Flood Alert,MoJS,DoWR,Software,Disaster Management,Warn early.,Shortlisted,\n\
             25003,Bridge Sensors,MoRTH,DoR,Hardware,Infrastructure,Monitor strain.,Not Reviewed,\n",
        )
        .unwrap();
        RecordStore::load(path).unwrap()
    }

    fn app(dir: &TempDir) -> App {
        let mut config = Config::default();
        config.export.output = dir.path().join("shortlisted_ideas.csv");
        App::new(sample_store(dir), &config)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn search_narrows_and_clamps_the_cursor() {
        let dir = TempDir::new().unwrap();
        let mut app = app(&dir);

        // Move to the last record, then search down to one match.
        app.handle_key(key(KeyCode::Char('n')));
        app.handle_key(key(KeyCode::Char('n')));
        assert_eq!(app.current().unwrap().ps_number, "25003");

        app.handle_key(key(KeyCode::Char('/')));
        for c in "flood".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        app.handle_key(key(KeyCode::Enter));

        assert_eq!(app.visible.len(), 1);
        assert_eq!(app.cursor.position(), 0);
        assert_eq!(app.current().unwrap().ps_number, "25002");
    }

    #[test]
    fn status_keys_mutate_and_persist() {
        let dir = TempDir::new().unwrap();
        let mut app = app(&dir);

        app.handle_key(key(KeyCode::Char('2')));
        assert_eq!(
            app.store.get("25001").unwrap().status,
            ReviewStatus::Shortlisted
        );
        assert_eq!(app.progress.shortlisted, 2);

        let reloaded = RecordStore::load(app.store.path()).unwrap();
        assert_eq!(
            reloaded.get("25001").unwrap().status,
            ReviewStatus::Shortlisted
        );
    }

    #[test]
    fn status_change_under_a_status_filter_refreshes_the_view() {
        let dir = TempDir::new().unwrap();
        let mut app = app(&dir);

        // Filter to Not Reviewed (All → Not Reviewed).
        app.handle_key(key(KeyCode::Char('f')));
        assert_eq!(app.visible.len(), 2);

        // Shortlisting the current record drops it from the view.
        app.handle_key(key(KeyCode::Char('2')));
        assert_eq!(app.visible.len(), 1);
        assert_eq!(app.current().unwrap().ps_number, "25003");
    }

    #[test]
    fn notes_editor_saves_on_close() {
        let dir = TempDir::new().unwrap();
        let mut app = app(&dir);

        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.focus, Focus::Notes);
        for c in "worth a look".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        app.handle_key(key(KeyCode::Esc));

        assert_eq!(app.focus, Focus::Browse);
        assert_eq!(app.store.get("25001").unwrap().notes, "worth a look");
        let reloaded = RecordStore::load(app.store.path()).unwrap();
        assert_eq!(reloaded.get("25001").unwrap().notes, "worth a look");
    }

    #[test]
    fn export_key_writes_the_artifact() {
        let dir = TempDir::new().unwrap();
        let mut app = app(&dir);

        app.handle_key(key(KeyCode::Char('x')));
        let exported = fs::read_to_string(dir.path().join("shortlisted_ideas.csv")).unwrap();
        assert!(exported.contains("25002"));
        assert!(!exported.contains("25001"));
    }

    #[test]
    fn facet_cycle_wraps_back_to_all() {
        let values = vec!["Hardware".to_string(), "Software".to_string()];
        let step1 = cycle_facet(None, &values);
        assert_eq!(step1.as_deref(), Some("Hardware"));
        let step2 = cycle_facet(step1, &values);
        assert_eq!(step2.as_deref(), Some("Software"));
        assert_eq!(cycle_facet(step2, &values), None);
    }

    #[test]
    fn status_cycle_covers_every_status_then_wraps() {
        let mut current = None;
        let mut seen = Vec::new();
        loop {
            current = cycle_status(current);
            match current {
                Some(status) => seen.push(status),
                None => break,
            }
        }
        assert_eq!(seen, ReviewStatus::ALL.to_vec());
    }

    #[test]
    fn no_results_suspends_navigation() {
        let dir = TempDir::new().unwrap();
        let mut app = app(&dir);

        app.handle_key(key(KeyCode::Char('/')));
        for c in "zzz".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        app.handle_key(key(KeyCode::Esc));

        assert!(app.visible.is_empty());
        assert!(app.current().is_none());
        // Status keys are a no-op with nothing selected.
        app.handle_key(key(KeyCode::Char('3')));
        assert_eq!(
            app.store.get("25001").unwrap().status,
            ReviewStatus::NotReviewed
        );
    }
}
