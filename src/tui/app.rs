use crate::block::extract_block;
use crate::catalog::FileCatalog;
use crate::config::Config;
use crate::error::SelectionError;
use crate::filter::{HeadingView, filter_content};
use crate::parser::utils::split_lines;
use crate::parser::{Document, Heading};
use crate::settings::{MIN_PANEL_WIDTH, Settings};
use crate::tui::launch;
use crate::tui::theme::Theme;
use ratatui::layout::{Position, Rect};
use ratatui::widgets::ListState;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// How long a status message stays on screen
const STATUS_MESSAGE_TIMEOUT: Duration = Duration::from_secs(3);

/// Rows moved by page up/down
const PAGE_SIZE: usize = 10;

/// Width step for `[` and `]`, in settings units
const RESIZE_STEP: i32 = 25;

/// Maximum length of a search box
const MAX_SEARCH_LEN: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Files,
    Headings,
    Content,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Files => Focus::Headings,
            Focus::Headings => Focus::Content,
            Focus::Content => Focus::Files,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Focus::Files => Focus::Content,
            Focus::Headings => Focus::Files,
            Focus::Content => Focus::Headings,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Normal,
    HeadingSearch,
    ContentSearch,
}

/// Screen areas of the three lists in the last drawn frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct PaneAreas {
    pub files: Rect,
    pub headings: Rect,
    pub content: Rect,
}

pub struct App {
    pub catalog: FileCatalog,
    pub selected_file: Option<usize>,
    pub file_state: ListState,
    pub heading_query: String,
    pub heading_view: HeadingView,
    pub heading_state: ListState,
    pub content_query: String,
    pub content_text: String,
    pub content_state: ListState,
    pub focus: Focus,
    pub mode: AppMode,
    pub show_help: bool,
    pub help_scroll: u16,
    pub status_message: Option<String>,
    status_message_time: Option<Instant>,
    pub panes: PaneAreas,
    pub theme: Theme,
    pub settings: Settings,
    settings_path: PathBuf,
    pub config: Config,
    // The clipboard must outlive each copy on X11 for pastes to work
    clipboard: Option<arboard::Clipboard>,
}

impl App {
    pub fn new(
        catalog: FileCatalog,
        config: Config,
        settings: Settings,
        settings_path: PathBuf,
    ) -> Self {
        let mut app = Self {
            catalog,
            selected_file: None,
            file_state: ListState::default(),
            heading_query: String::new(),
            heading_view: HeadingView::default(),
            heading_state: ListState::default(),
            content_query: String::new(),
            content_text: String::new(),
            content_state: ListState::default(),
            focus: Focus::Files,
            mode: AppMode::Normal,
            show_help: false,
            help_scroll: 0,
            status_message: None,
            status_message_time: None,
            panes: PaneAreas::default(),
            theme: Theme::default(),
            settings,
            settings_path,
            config,
            clipboard: arboard::Clipboard::new().ok(),
        };
        app.restore_selection();
        app
    }

    /// Reselect the file and heading remembered from the last session.
    ///
    /// Falls back to the first file when the remembered one is gone. A heading
    /// that no longer exists leaves the heading list unselected.
    fn restore_selection(&mut self) {
        if self.catalog.is_empty() {
            return;
        }

        let file_index = self
            .catalog
            .position_by_name(&self.settings.selected_file_name)
            .unwrap_or(0);
        if let Err(e) = self.select_file(file_index) {
            log::warn!("Could not restore file selection: {}", e);
            return;
        }

        let title = self.settings.selected_heading_title.clone();
        if title.is_empty() {
            return;
        }
        match self.heading_view.position_by_title(self.current_headings(), &title) {
            Some(position) => {
                if let Err(e) = self.select_heading(position) {
                    log::warn!("Could not restore heading selection: {}", e);
                }
            }
            None => log::debug!("Remembered heading {:?} no longer exists", title),
        }
    }

    pub fn current_document(&self) -> Option<&Document> {
        self.selected_file.and_then(|i| self.catalog.get(i))
    }

    pub fn current_headings(&self) -> &[Heading] {
        self.current_document()
            .map(|doc| doc.headings.as_slice())
            .unwrap_or_default()
    }

    pub fn selected_heading(&self) -> Option<&Heading> {
        self.heading_view.selected_heading(self.current_headings())
    }

    /// Lines shown in the content panel; empty when nothing is shown
    pub fn content_lines(&self) -> Vec<&str> {
        if self.content_text.is_empty() {
            Vec::new()
        } else {
            split_lines(&self.content_text)
        }
    }

    pub fn content_cursor(&self) -> Option<usize> {
        self.content_state.selected()
    }

    /// Make a file current. Both search boxes are cleared and no heading is
    /// selected afterwards.
    pub fn select_file(&mut self, index: usize) -> Result<(), SelectionError> {
        let view = HeadingView::new(self.catalog.select_document(index)?, "");

        self.selected_file = Some(index);
        self.file_state.select(Some(index));
        self.heading_query.clear();
        self.content_query.clear();
        self.heading_view = view;
        self.heading_state = ListState::default();
        self.refresh_content();
        Ok(())
    }

    /// Select a heading by its position in the filtered list
    pub fn select_heading(&mut self, index: usize) -> Result<(), SelectionError> {
        self.heading_view.select(index)?;
        self.heading_state.select(Some(index));
        self.content_query.clear();
        self.refresh_content();
        Ok(())
    }

    /// Rebuild the heading list from the current query. The selection resets.
    fn refresh_heading_view(&mut self) {
        self.heading_view = HeadingView::new(self.current_headings(), &self.heading_query);
        self.heading_state = ListState::default();
        self.refresh_content();
    }

    /// Recompute the content panel from the selected heading and content query
    fn refresh_content(&mut self) {
        self.content_text = self
            .selected_heading()
            .map(|heading| filter_content(&heading.content, &self.content_query))
            .unwrap_or_default();

        let cursor = if self.content_text.is_empty() {
            None
        } else {
            Some(0)
        };
        self.content_state = ListState::default().with_selected(cursor);
    }

    // Search boxes

    pub fn enter_heading_search(&mut self) {
        self.mode = AppMode::HeadingSearch;
        self.focus = Focus::Headings;
    }

    pub fn enter_content_search(&mut self) {
        self.mode = AppMode::ContentSearch;
        self.focus = Focus::Content;
    }

    /// Leave the search box, keeping its filter
    pub fn exit_search(&mut self) {
        self.mode = AppMode::Normal;
    }

    /// Leave the search box and drop its filter
    pub fn cancel_search(&mut self) {
        self.clear_search();
        self.mode = AppMode::Normal;
    }

    pub fn search_input(&mut self, c: char) {
        if c.is_control() {
            return;
        }
        match self.mode {
            AppMode::HeadingSearch if self.heading_query.len() < MAX_SEARCH_LEN => {
                self.heading_query.push(c);
                self.refresh_heading_view();
            }
            AppMode::ContentSearch if self.content_query.len() < MAX_SEARCH_LEN => {
                self.content_query.push(c);
                self.refresh_content();
            }
            _ => {}
        }
    }

    pub fn search_backspace(&mut self) {
        match self.mode {
            AppMode::HeadingSearch => {
                if self.heading_query.pop().is_some() {
                    self.refresh_heading_view();
                }
            }
            AppMode::ContentSearch => {
                if self.content_query.pop().is_some() {
                    self.refresh_content();
                }
            }
            AppMode::Normal => {}
        }
    }

    pub fn clear_search(&mut self) {
        match self.mode {
            AppMode::HeadingSearch => {
                if !self.heading_query.is_empty() {
                    self.heading_query.clear();
                    self.refresh_heading_view();
                }
            }
            AppMode::ContentSearch => {
                if !self.content_query.is_empty() {
                    self.content_query.clear();
                    self.refresh_content();
                }
            }
            AppMode::Normal => {}
        }
    }

    // Navigation

    pub fn next(&mut self) {
        self.move_cursor(1);
    }

    pub fn previous(&mut self) {
        self.move_cursor(-1);
    }

    pub fn page_down(&mut self) {
        self.move_cursor(PAGE_SIZE as isize);
    }

    pub fn page_up(&mut self) {
        self.move_cursor(-(PAGE_SIZE as isize));
    }

    pub fn first(&mut self) {
        self.move_cursor(isize::MIN);
    }

    pub fn last(&mut self) {
        self.move_cursor(isize::MAX);
    }

    fn move_cursor(&mut self, delta: isize) {
        match self.focus {
            Focus::Files => {
                if let Some(i) = step(self.selected_file, self.catalog.len(), delta)
                    && Some(i) != self.selected_file
                {
                    // Index is in range by construction
                    let _ = self.select_file(i);
                }
            }
            Focus::Headings => {
                if let Some(i) = step(self.heading_view.selected(), self.heading_view.len(), delta)
                    && Some(i) != self.heading_view.selected()
                {
                    let _ = self.select_heading(i);
                }
            }
            Focus::Content => {
                let len = self.content_lines().len();
                if let Some(i) = step(self.content_state.selected(), len, delta) {
                    self.content_state.select(Some(i));
                }
            }
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
    }

    /// Enter on a list: move on to the next panel, picking the first heading
    /// when none is selected yet
    pub fn activate(&mut self) {
        match self.focus {
            Focus::Files => self.focus = Focus::Headings,
            Focus::Headings => {
                if self.heading_view.selected().is_none() && !self.heading_view.is_empty() {
                    let _ = self.select_heading(0);
                }
                self.focus = Focus::Content;
            }
            Focus::Content => self.copy_block(),
        }
    }

    // Clipboard

    /// Copy the block starting at the content cursor
    pub fn copy_block(&mut self) {
        match self.content_state.selected() {
            Some(line) => self.copy_block_at(line),
            None => self.set_status_message("✗ No content line selected"),
        }
    }

    pub fn copy_block_at(&mut self, line: usize) {
        let block = extract_block(&self.content_text, line);
        if block.is_empty() {
            self.set_status_message("✗ Nothing to copy at this line");
            return;
        }

        self.content_state.select(Some(line));
        let lines = split_lines(&block).len();
        self.copy_to_clipboard(block, &format!("Block ({} lines)", lines));
    }

    /// Copy everything the content panel shows
    pub fn copy_content(&mut self) {
        if self.content_text.is_empty() {
            self.set_status_message("✗ No content to copy");
            return;
        }
        let text = self.content_text.clone();
        self.copy_to_clipboard(text, "Section");
    }

    fn copy_to_clipboard(&mut self, text: String, what: &str) {
        let message = match &mut self.clipboard {
            Some(clipboard) => match clipboard.set_text(text) {
                Ok(()) => format!("✓ {} copied to clipboard", what),
                Err(e) => {
                    log::warn!("Clipboard write failed: {}", e);
                    format!("✗ Clipboard error: {}", e)
                }
            },
            None => "✗ Clipboard not available".to_string(),
        };
        self.set_status_message(&message);
    }

    // Files

    pub fn open_selected_file(&mut self) {
        let Some(path) = self.current_document().map(|doc| doc.path.clone()) else {
            self.set_status_message("✗ No file selected");
            return;
        };
        match launch::open_file(&path) {
            Ok(()) => self.set_status_message(&format!("✓ Opened {}", path.display())),
            Err(e) => {
                log::warn!("Could not open {}: {}", path.display(), e);
                self.set_status_message(&format!("✗ Could not open file: {}", e));
            }
        }
    }

    pub fn reveal_selected_file(&mut self) {
        let Some(path) = self.current_document().map(|doc| doc.path.clone()) else {
            self.set_status_message("✗ No file selected");
            return;
        };
        match launch::reveal_in_folder(&path) {
            Ok(()) => self.set_status_message("✓ Revealed in folder"),
            Err(e) => {
                log::warn!("Could not reveal {}: {}", path.display(), e);
                self.set_status_message(&format!("✗ Could not open folder: {}", e));
            }
        }
    }

    // Layout

    /// Grow or shrink the focused panel. The content panel takes up the slack.
    pub fn resize_focused_panel(&mut self, grow: bool) {
        let delta = if grow { RESIZE_STEP } else { -RESIZE_STEP };
        let window = self.settings.window_width.max(MIN_PANEL_WIDTH * 3);

        // Start from the widths as drawn, not the raw values from settings.json
        let (left, center, _) = self.settings.panel_ratios();
        let (mut left, mut center) = (left as i32, center as i32);

        match self.focus {
            Focus::Files => {
                let max = window - center - MIN_PANEL_WIDTH;
                left = left.saturating_add(delta).clamp(MIN_PANEL_WIDTH, max);
            }
            Focus::Headings => {
                let max = window - left - MIN_PANEL_WIDTH;
                center = center.saturating_add(delta).clamp(MIN_PANEL_WIDTH, max);
            }
            Focus::Content => {
                // Growing content shrinks the headings panel
                let max = window - left - MIN_PANEL_WIDTH;
                center = center.saturating_sub(delta).clamp(MIN_PANEL_WIDTH, max);
            }
        }

        self.settings.left_panel_width = left;
        self.settings.center_panel_width = center;
    }

    // Settings

    /// Copy the current selection into the settings
    pub fn sync_settings(&mut self) {
        self.settings.selected_file_name = self
            .current_document()
            .map(|doc| doc.name.clone())
            .unwrap_or_default();
        self.settings.selected_heading_title = self
            .selected_heading()
            .map(|heading| heading.title.clone())
            .unwrap_or_default();
    }

    /// Persist settings; failures are logged and otherwise ignored
    pub fn save_settings(&mut self) {
        self.sync_settings();
        match self.settings.save(&self.settings_path) {
            Ok(()) => log::debug!("Saved settings to {}", self.settings_path.display()),
            Err(e) => log::warn!(
                "Could not save settings to {}: {}",
                self.settings_path.display(),
                e
            ),
        }
    }

    // Status line and help

    pub fn set_status_message(&mut self, message: &str) {
        self.status_message = Some(message.to_string());
        self.status_message_time = Some(Instant::now());
    }

    pub fn clear_expired_status_message(&mut self) {
        if let Some(shown_at) = self.status_message_time
            && shown_at.elapsed() >= STATUS_MESSAGE_TIMEOUT
        {
            self.status_message = None;
            self.status_message_time = None;
        }
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
        self.help_scroll = 0;
    }

    pub fn scroll_help_down(&mut self) {
        self.help_scroll = self.help_scroll.saturating_add(1);
    }

    pub fn scroll_help_up(&mut self) {
        self.help_scroll = self.help_scroll.saturating_sub(1);
    }

    // Mouse

    /// Map a screen position to a panel and the list row under it
    pub fn hit_test(&self, column: u16, row: u16) -> Option<(Focus, usize)> {
        let position = Position::new(column, row);
        let panes = [
            (Focus::Files, self.panes.files, self.file_state.offset()),
            (Focus::Headings, self.panes.headings, self.heading_state.offset()),
            (Focus::Content, self.panes.content, self.content_state.offset()),
        ];

        panes.into_iter().find_map(|(focus, area, offset)| {
            if !area.contains(position) {
                return None;
            }
            // Skip the top and bottom borders
            let first_row = area.y + 1;
            let last_row = (area.y + area.height).saturating_sub(1);
            if row < first_row || row >= last_row {
                return None;
            }
            Some((focus, offset + usize::from(row - first_row)))
        })
    }

    /// Left click: select a file or heading, or copy the block at a content line
    pub fn click(&mut self, column: u16, row: u16) {
        let Some((focus, index)) = self.hit_test(column, row) else {
            return;
        };
        self.focus = focus;
        self.mode = AppMode::Normal;

        match focus {
            Focus::Files => {
                let _ = self.select_file(index);
            }
            Focus::Headings => {
                let _ = self.select_heading(index);
            }
            Focus::Content => {
                if index < self.content_lines().len() {
                    self.copy_block_at(index);
                }
            }
        }
    }

    /// Pointer movement: select the list item under the pointer
    pub fn hover(&mut self, column: u16, row: u16) {
        if !self.config.behavior.hover_select {
            return;
        }
        match self.hit_test(column, row) {
            Some((Focus::Files, index)) if Some(index) != self.selected_file => {
                let _ = self.select_file(index);
            }
            Some((Focus::Headings, index)) if Some(index) != self.heading_view.selected() => {
                let _ = self.select_heading(index);
            }
            _ => {}
        }
    }

    /// Mouse wheel over a panel moves that panel's cursor
    pub fn scroll_at(&mut self, column: u16, row: u16, down: bool) {
        let Some((focus, _)) = self.hit_test(column, row) else {
            return;
        };
        let previous_focus = self.focus;
        self.focus = focus;
        if down {
            self.next();
        } else {
            self.previous();
        }
        self.focus = previous_focus;
    }
}

/// Move an optional cursor within `0..len`, saturating at both ends.
fn step(current: Option<usize>, len: usize, delta: isize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let last = len - 1;
    let target = match current {
        None if delta == isize::MAX => last,
        None => 0,
        Some(i) if delta >= 0 => i.saturating_add(delta as usize),
        Some(i) => i.saturating_sub(delta.unsigned_abs()),
    };
    Some(target.min(last))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_document;
    use std::path::Path;

    const GIT: &str = "# Git\nVersion control notes\n## Undo last commit\ngit reset --soft HEAD~1\n\ngit status\n## Stash\ngit stash push\ngit stash pop\n";
    const DOCKER: &str = "# Docker\n## Prune\ndocker system prune -a\n## Logs\ndocker logs -f app\n";

    fn catalog() -> FileCatalog {
        FileCatalog::from_documents(
            PathBuf::from("snippets"),
            vec![
                parse_document(PathBuf::from("snippets/docker.md"), DOCKER),
                parse_document(PathBuf::from("snippets/git.md"), GIT),
            ],
        )
    }

    fn app_with(settings: Settings) -> (App, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        (App::new(catalog(), Config::default(), settings, path), dir)
    }

    fn app() -> (App, tempfile::TempDir) {
        app_with(Settings::default())
    }

    #[test]
    fn test_starts_on_first_file_without_heading() {
        let (app, _dir) = app();
        assert_eq!(app.selected_file, Some(0));
        assert_eq!(app.current_document().unwrap().name, "docker.md");
        assert_eq!(app.heading_view.len(), 3);
        assert!(app.selected_heading().is_none());
        assert!(app.content_text.is_empty());
    }

    #[test]
    fn test_empty_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let app = App::new(
            FileCatalog::from_documents(PathBuf::from("none"), Vec::new()),
            Config::default(),
            Settings::default(),
            dir.path().join("settings.json"),
        );
        assert!(app.selected_file.is_none());
        assert!(app.current_headings().is_empty());
        assert!(app.content_lines().is_empty());
    }

    #[test]
    fn test_restores_file_and_heading() {
        let (app, _dir) = app_with(Settings {
            selected_file_name: "git.md".to_string(),
            selected_heading_title: "Stash".to_string(),
            ..Settings::default()
        });
        assert_eq!(app.current_document().unwrap().name, "git.md");
        assert_eq!(app.selected_heading().unwrap().title, "Stash");
        assert_eq!(app.content_text, "git stash push\ngit stash pop");
    }

    #[test]
    fn test_restore_with_stale_names_falls_back() {
        let (app, _dir) = app_with(Settings {
            selected_file_name: "gone.md".to_string(),
            selected_heading_title: "Gone".to_string(),
            ..Settings::default()
        });
        assert_eq!(app.selected_file, Some(0));
        assert!(app.selected_heading().is_none());
    }

    #[test]
    fn test_select_file_resets_searches() {
        let (mut app, _dir) = app();
        app.enter_heading_search();
        app.search_input('P');
        app.select_heading(0).unwrap();
        app.enter_content_search();
        app.search_input('x');

        app.select_file(1).unwrap();
        assert!(app.heading_query.is_empty());
        assert!(app.content_query.is_empty());
        assert!(app.selected_heading().is_none());
        assert!(app.content_text.is_empty());
        assert_eq!(app.heading_view.len(), 3);
    }

    #[test]
    fn test_select_file_out_of_range() {
        let (mut app, _dir) = app();
        assert_eq!(
            app.select_file(5),
            Err(SelectionError::IndexOutOfRange { index: 5, len: 2 })
        );
        assert_eq!(app.selected_file, Some(0));
    }

    #[test]
    fn test_heading_search_resets_selection() {
        let (mut app, _dir) = app();
        app.select_heading(1).unwrap();
        assert_eq!(app.selected_heading().unwrap().title, "Prune");

        app.enter_heading_search();
        app.search_input('L');
        assert_eq!(app.heading_view.len(), 1);
        assert!(app.selected_heading().is_none());
        assert!(app.content_text.is_empty());

        app.search_backspace();
        assert_eq!(app.heading_view.len(), 3);
        assert!(app.selected_heading().is_none());
    }

    #[test]
    fn test_heading_search_ignores_case() {
        let (mut app, _dir) = app();
        app.enter_heading_search();
        app.search_input('l');
        app.search_input('O');
        assert_eq!(app.heading_view.len(), 1);
        app.select_heading(0).unwrap();
        assert_eq!(app.selected_heading().unwrap().title, "Logs");
    }

    #[test]
    fn test_content_search_filters_lines() {
        let (mut app, _dir) = app_with(Settings {
            selected_file_name: "git.md".to_string(),
            ..Settings::default()
        });
        app.select_heading(1).unwrap();
        assert_eq!(app.content_lines(), vec!["git reset --soft HEAD~1", "", "git status"]);

        app.enter_content_search();
        for c in "status".chars() {
            app.search_input(c);
        }
        assert_eq!(app.content_text, "git status");

        app.cancel_search();
        assert!(app.content_query.is_empty());
        assert_eq!(app.content_lines().len(), 3);
        assert_eq!(app.mode, AppMode::Normal);
    }

    #[test]
    fn test_selecting_heading_clears_content_search() {
        let (mut app, _dir) = app();
        app.select_heading(1).unwrap();
        app.enter_content_search();
        app.search_input('z');
        assert!(app.content_text.is_empty());

        app.select_heading(2).unwrap();
        assert!(app.content_query.is_empty());
        assert_eq!(app.content_text, "docker logs -f app");
    }

    #[test]
    fn test_search_ignores_control_characters() {
        let (mut app, _dir) = app();
        app.enter_heading_search();
        app.search_input('\n');
        app.search_input('\t');
        assert!(app.heading_query.is_empty());
    }

    #[test]
    fn test_navigation_per_focus() {
        let (mut app, _dir) = app();

        app.focus = Focus::Files;
        app.next();
        assert_eq!(app.selected_file, Some(1));
        app.next();
        assert_eq!(app.selected_file, Some(1));
        app.first();
        assert_eq!(app.selected_file, Some(0));

        app.focus = Focus::Headings;
        app.next();
        assert_eq!(app.heading_view.selected(), Some(0));
        app.last();
        assert_eq!(app.selected_heading().unwrap().title, "Logs");
        app.previous();
        assert_eq!(app.selected_heading().unwrap().title, "Prune");

        app.focus = Focus::Content;
        assert_eq!(app.content_cursor(), Some(0));
        app.page_down();
        assert_eq!(app.content_cursor(), Some(0));
    }

    #[test]
    fn test_step() {
        assert_eq!(step(None, 0, 1), None);
        assert_eq!(step(None, 3, 1), Some(0));
        assert_eq!(step(None, 3, isize::MAX), Some(2));
        assert_eq!(step(Some(1), 3, 1), Some(2));
        assert_eq!(step(Some(2), 3, 1), Some(2));
        assert_eq!(step(Some(2), 3, -10), Some(0));
        assert_eq!(step(Some(1), 3, isize::MIN), Some(0));
        assert_eq!(step(Some(1), 30, PAGE_SIZE as isize), Some(11));
    }

    #[test]
    fn test_activate_walks_panels() {
        let (mut app, _dir) = app();
        app.activate();
        assert_eq!(app.focus, Focus::Headings);
        app.activate();
        assert_eq!(app.focus, Focus::Content);
        assert_eq!(app.selected_heading().unwrap().title, "Docker");
    }

    #[test]
    fn test_copy_block_at_blank_line_reports_nothing() {
        let (mut app, _dir) = app_with(Settings {
            selected_file_name: "git.md".to_string(),
            selected_heading_title: "Undo last commit".to_string(),
            ..Settings::default()
        });
        app.copy_block_at(1);
        assert_eq!(app.status_message.as_deref(), Some("✗ Nothing to copy at this line"));

        app.copy_block_at(99);
        assert_eq!(app.status_message.as_deref(), Some("✗ Nothing to copy at this line"));
    }

    #[test]
    fn test_copy_block_moves_cursor() {
        let (mut app, _dir) = app_with(Settings {
            selected_file_name: "git.md".to_string(),
            selected_heading_title: "Undo last commit".to_string(),
            ..Settings::default()
        });
        app.copy_block_at(2);
        assert_eq!(app.content_cursor(), Some(2));
        assert!(app.status_message.is_some());
    }

    #[test]
    fn test_copy_without_content() {
        let (mut app, _dir) = app();
        app.copy_content();
        assert_eq!(app.status_message.as_deref(), Some("✗ No content to copy"));
        app.copy_block();
        assert_eq!(app.status_message.as_deref(), Some("✗ No content line selected"));
    }

    #[test]
    fn test_status_message_expires() {
        let (mut app, _dir) = app();
        app.set_status_message("hello");
        app.clear_expired_status_message();
        assert_eq!(app.status_message.as_deref(), Some("hello"));

        app.status_message_time = Some(Instant::now() - STATUS_MESSAGE_TIMEOUT);
        app.clear_expired_status_message();
        assert!(app.status_message.is_none());
    }

    #[test]
    fn test_save_settings_records_selection() {
        let (mut app, dir) = app();
        app.select_file(1).unwrap();
        app.select_heading(2).unwrap();
        app.save_settings();

        let saved = Settings::load(&dir.path().join("settings.json"));
        assert_eq!(saved.selected_file_name, "git.md");
        assert_eq!(saved.selected_heading_title, "Stash");
    }

    #[test]
    fn test_save_settings_failure_is_swallowed() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        std::fs::write(&blocker, "").unwrap();

        let mut app = App::new(
            catalog(),
            Config::default(),
            Settings::default(),
            blocker.join("settings.json"),
        );
        app.save_settings();
        assert!(!Path::new(&blocker.join("settings.json")).exists());
    }

    #[test]
    fn test_resize_clamps() {
        let (mut app, _dir) = app();
        app.focus = Focus::Files;
        app.resize_focused_panel(true);
        assert_eq!(app.settings.left_panel_width, 225);

        for _ in 0..100 {
            app.resize_focused_panel(false);
        }
        assert_eq!(app.settings.left_panel_width, MIN_PANEL_WIDTH);

        app.focus = Focus::Content;
        app.resize_focused_panel(true);
        assert_eq!(app.settings.center_panel_width, 325);
    }

    #[test]
    fn test_resize_with_extreme_widths() {
        let extremes = [
            (i32::MAX, i32::MIN),
            (i32::MIN, i32::MAX),
            (i32::MAX, i32::MAX),
            (i32::MIN, i32::MIN),
        ];

        for (left, center) in extremes {
            for focus in [Focus::Files, Focus::Headings, Focus::Content] {
                for grow in [true, false] {
                    let (mut app, _dir) = app_with(Settings {
                        left_panel_width: left,
                        center_panel_width: center,
                        ..Settings::default()
                    });
                    app.focus = focus;
                    app.resize_focused_panel(grow);

                    let settings = &app.settings;
                    assert!(settings.left_panel_width >= MIN_PANEL_WIDTH);
                    assert!(settings.center_panel_width >= MIN_PANEL_WIDTH);
                    assert!(
                        settings.left_panel_width + settings.center_panel_width
                            <= settings.window_width - MIN_PANEL_WIDTH
                    );
                }
            }
        }

        // Huge windows do not overflow either
        let (mut app, _dir) = app_with(Settings {
            window_width: i32::MAX,
            left_panel_width: i32::MAX,
            center_panel_width: i32::MAX,
            ..Settings::default()
        });
        app.focus = Focus::Headings;
        app.resize_focused_panel(true);
        assert_eq!(app.settings.center_panel_width, MIN_PANEL_WIDTH);
    }

    #[test]
    fn test_hit_test_and_click() {
        let (mut app, _dir) = app();
        app.panes = PaneAreas {
            files: Rect::new(0, 0, 20, 10),
            headings: Rect::new(20, 0, 30, 10),
            content: Rect::new(50, 0, 50, 10),
        };

        // Borders are not rows
        assert_eq!(app.hit_test(5, 0), None);
        assert_eq!(app.hit_test(5, 9), None);
        assert_eq!(app.hit_test(5, 2), Some((Focus::Files, 1)));
        assert_eq!(app.hit_test(25, 1), Some((Focus::Headings, 0)));

        app.click(5, 2);
        assert_eq!(app.current_document().unwrap().name, "git.md");
        assert_eq!(app.focus, Focus::Files);

        app.click(25, 3);
        assert_eq!(app.selected_heading().unwrap().title, "Stash");

        // Past the end of the list
        app.click(25, 8);
        assert_eq!(app.selected_heading().unwrap().title, "Stash");
    }

    #[test]
    fn test_hover_respects_config() {
        let (mut app, _dir) = app();
        app.panes.files = Rect::new(0, 0, 20, 10);

        app.hover(5, 2);
        assert_eq!(app.selected_file, Some(1));

        app.config.behavior.hover_select = false;
        app.hover(5, 1);
        assert_eq!(app.selected_file, Some(1));
    }
}
