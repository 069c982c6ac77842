use ratatui::style::{Color, Modifier, Style};

/// Colors used by the interface.
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub foreground: Color,
    pub heading_1: Color,
    pub heading_2: Color,
    pub heading_3: Color,
    pub heading_4: Color,
    pub heading_5: Color,
    pub border_focused: Color,
    pub border_unfocused: Color,
    pub selection_bg: Color,
    pub selection_fg: Color,
    pub status_bar_bg: Color,
    pub status_bar_fg: Color,
    pub title_bar_fg: Color,
    pub scrollbar_fg: Color,
    pub search_fg: Color,
    pub search_bg: Color,
    pub message_bg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::ocean_dark()
    }
}

impl Theme {
    pub fn ocean_dark() -> Self {
        Self {
            background: Color::Rgb(43, 48, 59),
            foreground: Color::Rgb(192, 197, 206),
            heading_1: Color::Rgb(143, 161, 179),
            heading_2: Color::Rgb(163, 190, 140),
            heading_3: Color::Rgb(235, 203, 139),
            heading_4: Color::Rgb(208, 135, 112),
            heading_5: Color::Rgb(180, 142, 173),
            border_focused: Color::Rgb(143, 161, 179),
            border_unfocused: Color::Rgb(101, 115, 126),
            selection_bg: Color::Rgb(79, 91, 102),
            selection_fg: Color::Rgb(239, 241, 245),
            status_bar_bg: Color::Rgb(52, 61, 70),
            status_bar_fg: Color::Rgb(192, 197, 206),
            title_bar_fg: Color::Rgb(143, 161, 179),
            scrollbar_fg: Color::Rgb(101, 115, 126),
            search_fg: Color::Yellow,
            search_bg: Color::Rgb(30, 30, 50),
            message_bg: Color::Rgb(0, 80, 120),
        }
    }

    pub fn heading_color(&self, level: usize) -> Color {
        match level {
            1 => self.heading_1,
            2 => self.heading_2,
            3 => self.heading_3,
            4 => self.heading_4,
            _ => self.heading_5,
        }
    }

    pub fn border_style(&self, focused: bool) -> Style {
        if focused {
            Style::default()
                .fg(self.border_focused)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.border_unfocused)
        }
    }

    pub fn selection_style(&self) -> Style {
        Style::default()
            .bg(self.selection_bg)
            .fg(self.selection_fg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn content_style(&self) -> Style {
        Style::default().fg(self.foreground).bg(self.background)
    }

    pub fn status_bar_style(&self) -> Style {
        Style::default().bg(self.status_bar_bg).fg(self.status_bar_fg)
    }

    pub fn message_style(&self) -> Style {
        Style::default()
            .bg(self.message_bg)
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    }

    pub fn modal_border(&self) -> Color {
        self.border_focused
    }

    pub fn modal_bg(&self) -> Color {
        self.status_bar_bg
    }

    pub fn modal_title(&self) -> Color {
        self.heading_1
    }

    pub fn modal_description(&self) -> Color {
        self.border_unfocused
    }

    pub fn modal_key_fg(&self) -> Color {
        self.heading_3
    }
}
