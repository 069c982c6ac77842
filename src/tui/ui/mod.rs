mod layout;
mod popups;
mod util;

use layout::{DynamicLayout, Section};

use crate::filter::indent_for;
use crate::tui::app::{App, AppMode, Focus};
use popups::render_help_popup;
use ratatui::Frame;
use ratatui::layout::{Constraint, Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Block, Borders, List, ListItem, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState,
};
use unicode_width::UnicodeWidthStr;
use util::{highlight_matches, truncate_to_width};

/// Below this height the title bar is dropped to leave room for the lists
const MIN_HEIGHT_FOR_TITLE: u16 = 12;

pub fn render(frame: &mut Frame, app: &mut App) {
    // Clear expired status messages (auto-dismiss after timeout)
    app.clear_expired_status_message();

    let area = frame.area();

    let main_layout = DynamicLayout::vertical(area)
        .section_if(
            area.height >= MIN_HEIGHT_FOR_TITLE,
            Section::Title,
            Constraint::Length(2),
        )
        .section(Section::Panes, Constraint::Min(0))
        .section(Section::Status, Constraint::Length(1))
        .build();

    if let Some(title_area) = main_layout.get(Section::Title) {
        render_title_bar(frame, app, title_area);
    }

    let (files, headings, content) = app.settings.panel_ratios();
    let total = files + headings + content;
    let panes = DynamicLayout::horizontal(main_layout.require(Section::Panes))
        .section(Section::Files, Constraint::Ratio(files, total))
        .section(Section::Headings, Constraint::Ratio(headings, total))
        .section(Section::Content, Constraint::Ratio(content, total))
        .build();

    render_files_column(frame, app, panes.require(Section::Files));
    render_headings_column(frame, app, panes.require(Section::Headings));
    render_content_column(frame, app, panes.require(Section::Content));

    render_status_bar(frame, app, main_layout.require(Section::Status));

    if app.show_help {
        render_help_popup(frame, app, area);
    }
}

/// Split a column into its 3-row header box and the list below it
fn split_column(area: Rect) -> (Rect, Rect) {
    let column = DynamicLayout::vertical(area)
        .section(Section::Search, Constraint::Length(3))
        .section(Section::List, Constraint::Min(0))
        .build();
    (column.require(Section::Search), column.require(Section::List))
}

fn render_title_bar(frame: &mut Frame, app: &App, area: Rect) {
    let file_count = app.catalog.len();
    let suffix = format!(" - {} files", file_count);
    let prefix = "snipmd - ";
    let room = usize::from(area.width).saturating_sub(prefix.width() + suffix.width());
    let directory = app.catalog.directory().display().to_string();
    let title_text = format!("{}{}{}", prefix, truncate_to_width(&directory, room), suffix);

    let title = Paragraph::new(title_text)
        .style(
            Style::default()
                .fg(app.theme.title_bar_fg)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(title, area);
}

/// Render a search box. `active` adds the input cursor and highlight border.
fn render_search_box(
    frame: &mut Frame,
    app: &App,
    area: Rect,
    title: &str,
    query: &str,
    active: bool,
) {
    let theme = &app.theme;
    let mut line_spans = vec![Span::styled(
        if active {
            format!("{}_", query)
        } else {
            query.to_string()
        },
        Style::default()
            .fg(theme.search_fg)
            .add_modifier(Modifier::BOLD),
    )];

    if active {
        line_spans.push(Span::styled(
            "  (Esc: clear, Enter: keep)".to_string(),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let border_style = if active {
        Style::default().fg(theme.search_fg)
    } else {
        theme.border_style(false)
    };

    let paragraph = Paragraph::new(Line::from(line_spans))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(title.to_string())
                .style(Style::default().bg(theme.search_bg)),
        )
        .style(Style::default().fg(Color::White));

    frame.render_widget(paragraph, area);
}

fn render_list_scrollbar(frame: &mut Frame, app: &App, area: Rect, len: usize, position: usize) {
    let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .begin_symbol(Some("↑"))
        .end_symbol(Some("↓"))
        .style(Style::default().fg(app.theme.scrollbar_fg));
    let mut state = ScrollbarState::new(len).position(position);

    frame.render_stateful_widget(
        scrollbar,
        area.inner(Margin {
            vertical: 1,
            horizontal: 0,
        }),
        &mut state,
    );
}

fn render_files_column(frame: &mut Frame, app: &mut App, area: Rect) {
    let (header_area, list_area) = split_column(area);
    let theme = &app.theme;

    let header = Paragraph::new(format!("{} loaded", app.catalog.len()))
        .style(Style::default().fg(theme.foreground))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border_style(false))
                .title(" Snippets "),
        );
    frame.render_widget(header, header_area);

    let items: Vec<ListItem> = app
        .catalog
        .documents()
        .iter()
        .map(|doc| ListItem::new(doc.name.clone()))
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border_style(app.focus == Focus::Files))
                .title(" Files "),
        )
        .style(theme.content_style())
        .highlight_style(theme.selection_style())
        .highlight_symbol("► ");

    app.file_state.select(app.selected_file);
    frame.render_stateful_widget(list, list_area, &mut app.file_state);
    app.panes.files = list_area;

    render_list_scrollbar(
        frame,
        app,
        list_area,
        app.catalog.len(),
        app.selected_file.unwrap_or(0),
    );
}

fn render_headings_column(frame: &mut Frame, app: &mut App, area: Rect) {
    let (search_area, list_area) = split_column(area);
    render_search_box(
        frame,
        app,
        search_area,
        " Filter Headings ",
        &app.heading_query,
        app.mode == AppMode::HeadingSearch,
    );

    let theme = &app.theme;
    let items: Vec<ListItem> = app
        .heading_view
        .headings(app.current_headings())
        .map(|heading| {
            let text = format!("{}{}", indent_for(heading.level), heading.title);
            let style = Style::default().fg(theme.heading_color(heading.level));
            ListItem::new(Line::from(Span::styled(text, style)))
        })
        .collect();

    let title = if app.heading_query.is_empty() {
        " Headings ".to_string()
    } else {
        format!(" Headings ({}/{}) ", app.heading_view.len(), app.current_headings().len())
    };

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border_style(app.focus == Focus::Headings))
                .title(title),
        )
        .style(theme.content_style())
        .highlight_style(theme.selection_style())
        .highlight_symbol("► ");

    app.heading_state.select(app.heading_view.selected());
    frame.render_stateful_widget(list, list_area, &mut app.heading_state);
    app.panes.headings = list_area;

    render_list_scrollbar(
        frame,
        app,
        list_area,
        app.heading_view.len(),
        app.heading_view.selected().unwrap_or(0),
    );
}

fn render_content_column(frame: &mut Frame, app: &mut App, area: Rect) {
    let (search_area, list_area) = split_column(area);
    render_search_box(
        frame,
        app,
        search_area,
        " Filter Content ",
        &app.content_query,
        app.mode == AppMode::ContentSearch,
    );

    let theme = &app.theme;
    let base_style = theme.content_style();
    let match_style = Style::default()
        .fg(Color::Black)
        .bg(theme.search_fg)
        .add_modifier(Modifier::BOLD);

    let lines = app.content_lines();
    let line_count = lines.len();
    let items: Vec<ListItem> = lines
        .iter()
        .map(|line| {
            ListItem::new(Line::from(highlight_matches(
                line,
                &app.content_query,
                base_style,
                match_style,
            )))
        })
        .collect();

    let title = match app.selected_heading() {
        Some(heading) => {
            let room = usize::from(list_area.width).saturating_sub(4);
            format!(" {} ", truncate_to_width(&heading.title, room))
        }
        None => " Content ".to_string(),
    };

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border_style(app.focus == Focus::Content))
                .title(title),
        )
        .style(base_style)
        .highlight_style(Style::default().bg(theme.selection_bg));

    frame.render_stateful_widget(list, list_area, &mut app.content_state);
    app.panes.content = list_area;

    let cursor = app.content_cursor().unwrap_or(0);
    render_list_scrollbar(frame, app, list_area, line_count, cursor);
}

fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    // If there's a status message, display it prominently
    if let Some(ref msg) = app.status_message {
        let status = Paragraph::new(msg.clone()).style(app.theme.message_style());
        frame.render_widget(status, area);
        return;
    }

    let status_text = match app.mode {
        AppMode::HeadingSearch => {
            " [FILTER HEADINGS] Type to filter • ↑↓:Move • Enter:Keep • Esc:Clear ".to_string()
        }
        AppMode::ContentSearch => {
            " [FILTER CONTENT] Type to filter • ↑↓:Move • Enter:Keep • Esc:Clear ".to_string()
        }
        AppMode::Normal => {
            let focus_indicator = match app.focus {
                Focus::Files => "Files",
                Focus::Headings => "Headings",
                Focus::Content => "Content",
            };
            let position = match app.focus {
                Focus::Files => format!(
                    "{}/{}",
                    app.selected_file.map_or(0, |i| i + 1),
                    app.catalog.len()
                ),
                Focus::Headings => format!(
                    "{}/{}",
                    app.heading_view.selected().map_or(0, |i| i + 1),
                    app.heading_view.len()
                ),
                Focus::Content => format!(
                    "L{}/{}",
                    app.content_cursor().map_or(0, |i| i + 1),
                    app.content_lines().len()
                ),
            };

            format!(
                " [{}] {} • /:Headings • f:Content • y/Y:Copy • o/O:Open • []:Size • ?:Help • q:Quit ",
                focus_indicator, position
            )
        }
    };

    let status = Paragraph::new(status_text).style(app.theme.status_bar_style());
    frame.render_widget(status, area);
}
