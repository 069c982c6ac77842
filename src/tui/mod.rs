mod app;
mod help_text;
mod launch;
pub mod theme;
mod ui;

pub use app::{App, AppMode, Focus};

use color_eyre::Result;
use crossterm::event::{
    self, Event, KeyCode, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};
use ratatui::DefaultTerminal;
use std::time::Duration;

/// Run the TUI application.
///
/// Processes keyboard, mouse and focus events and renders the UI until the
/// user quits. Settings are not saved here; the caller does that after the
/// terminal is restored.
///
/// # Arguments
///
/// * `terminal` - A mutable reference to a ratatui terminal
/// * `app` - The App instance to run
///
/// # Returns
///
/// Returns `Ok(())` on successful exit, or an error if the terminal fails.
pub fn run(terminal: &mut DefaultTerminal, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        // Poll with a timeout so status messages can expire
        if !event::poll(Duration::from_millis(100))? {
            continue;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                // Ctrl+C always quits
                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                    return Ok(());
                }

                if app.show_help {
                    match key.code {
                        KeyCode::Char('?') | KeyCode::Esc => app.toggle_help(),
                        KeyCode::Char('j') | KeyCode::Down => app.scroll_help_down(),
                        KeyCode::Char('k') | KeyCode::Up => app.scroll_help_up(),
                        KeyCode::Char('q') => return Ok(()),
                        _ => {}
                    }
                    continue;
                }

                match app.mode {
                    AppMode::HeadingSearch | AppMode::ContentSearch => match key.code {
                        // Esc clears the filter and closes search
                        KeyCode::Esc => app.cancel_search(),
                        // Enter keeps the filter but leaves the box
                        KeyCode::Enter => app.exit_search(),
                        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                            app.clear_search();
                        }
                        KeyCode::Tab => {
                            app.exit_search();
                            app.focus_next();
                        }
                        KeyCode::BackTab => {
                            app.exit_search();
                            app.focus_previous();
                        }
                        // Move through results without leaving the box
                        KeyCode::Down => app.next(),
                        KeyCode::Up => app.previous(),
                        KeyCode::Backspace => app.search_backspace(),
                        KeyCode::Char(c) => app.search_input(c),
                        _ => {}
                    },
                    AppMode::Normal => match key.code {
                        KeyCode::Char('q') => return Ok(()),
                        KeyCode::Esc if app.config.behavior.exit_on_escape => return Ok(()),
                        KeyCode::Char('?') => app.toggle_help(),
                        KeyCode::Char('/') => app.enter_heading_search(),
                        KeyCode::Char('f') => app.enter_content_search(),
                        KeyCode::Char('j') | KeyCode::Down => app.next(),
                        KeyCode::Char('k') | KeyCode::Up => app.previous(),
                        KeyCode::Char('d') | KeyCode::PageDown => app.page_down(),
                        KeyCode::Char('u') | KeyCode::PageUp => app.page_up(),
                        KeyCode::Char('g') | KeyCode::Home => app.first(),
                        KeyCode::Char('G') | KeyCode::End => app.last(),
                        KeyCode::Tab | KeyCode::Char('l') | KeyCode::Right => app.focus_next(),
                        KeyCode::BackTab | KeyCode::Char('h') | KeyCode::Left => {
                            app.focus_previous()
                        }
                        KeyCode::Enter => app.activate(),
                        KeyCode::Char('y') => app.copy_block(),
                        KeyCode::Char('Y') => app.copy_content(),
                        KeyCode::Char('o') => app.open_selected_file(),
                        KeyCode::Char('O') => app.reveal_selected_file(),
                        KeyCode::Char('[') => app.resize_focused_panel(false),
                        KeyCode::Char(']') => app.resize_focused_panel(true),
                        _ => {}
                    },
                }
            }
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::Down(MouseButton::Left) => app.click(mouse.column, mouse.row),
                MouseEventKind::Moved => app.hover(mouse.column, mouse.row),
                MouseEventKind::ScrollDown => app.scroll_at(mouse.column, mouse.row, true),
                MouseEventKind::ScrollUp => app.scroll_at(mouse.column, mouse.row, false),
                _ => {}
            },
            Event::FocusLost if app.config.behavior.exit_on_focus_loss => return Ok(()),
            _ => {}
        }
    }
}
