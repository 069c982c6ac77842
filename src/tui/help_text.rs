//! Key binding reference shown in the help popup.

use crate::tui::theme::Theme;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

/// Width of the key column, padded so descriptions line up
const KEY_COLUMN_WIDTH: usize = 11;

const SCROLL_HINT: &str = "Use j/k or ↓/↑ to scroll | Press Esc or ? to close";

/// A titled group of `(keys, description)` pairs
pub struct HelpSection {
    pub name: &'static str,
    pub bindings: &'static [(&'static str, &'static str)],
}

pub const HELP_SECTIONS: &[HelpSection] = &[
    HelpSection {
        name: "Navigation",
        bindings: &[
            ("j/↓", "Move down in the focused panel"),
            ("k/↑", "Move up in the focused panel"),
            ("g", "Jump to top"),
            ("G", "Jump to bottom"),
            ("d/PgDn", "Page down"),
            ("u/PgUp", "Page up"),
            ("Tab/l/→", "Focus next panel"),
            ("S-Tab/h/←", "Focus previous panel"),
            ("Enter", "Open heading / copy block under cursor"),
        ],
    },
    HelpSection {
        name: "Filtering",
        bindings: &[
            ("/", "Filter headings"),
            ("f", "Filter content lines"),
            ("Enter", "Keep filter and leave the search box"),
            ("Esc", "Clear filter and leave the search box"),
            ("C-u", "Clear the search box"),
        ],
    },
    HelpSection {
        name: "Clipboard & Files",
        bindings: &[
            ("y", "Copy the block from the cursor line to the next blank line"),
            ("Y", "Copy everything shown in the content panel"),
            ("o", "Open the snippet file"),
            ("O", "Reveal the snippet file in its folder"),
        ],
    },
    HelpSection {
        name: "General",
        bindings: &[
            ("[ ]", "Shrink/grow the focused panel"),
            ("?", "Toggle this help"),
            ("q/Esc", "Quit"),
        ],
    },
    HelpSection {
        name: "Mouse",
        bindings: &[
            ("Click", "Select a file or heading"),
            ("Click", "Copy the block at a content line"),
            ("Hover", "Select the file or heading under the pointer"),
        ],
    },
];

fn binding_line(keys: &str, desc: &str, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("  {:<width$}", keys, width = KEY_COLUMN_WIDTH),
            Style::default().fg(theme.modal_key_fg()),
        ),
        Span::raw(desc.to_string()),
    ])
}

/// Build the help text with theme colors applied
pub fn build_help_text(theme: &Theme) -> Vec<Line<'static>> {
    let hint = Line::styled(
        SCROLL_HINT,
        Style::default()
            .fg(theme.modal_description())
            .add_modifier(Modifier::ITALIC),
    );

    let mut lines = vec![
        Line::styled(
            "snipmd - Keyboard Shortcuts",
            Style::default()
                .fg(theme.modal_title())
                .add_modifier(Modifier::BOLD),
        ),
        hint.clone(),
    ];

    for section in HELP_SECTIONS {
        lines.push(Line::default());
        lines.push(Line::styled(
            section.name,
            Style::default()
                .fg(theme.heading_color(2))
                .add_modifier(Modifier::BOLD),
        ));
        lines.extend(
            section
                .bindings
                .iter()
                .map(|(keys, desc)| binding_line(keys, desc, theme)),
        );
    }

    lines.push(Line::default());
    lines.push(hint);
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_keys_fit_their_column() {
        for section in HELP_SECTIONS {
            assert!(!section.bindings.is_empty(), "{} has no bindings", section.name);
            for (keys, desc) in section.bindings {
                assert!(keys.chars().count() < KEY_COLUMN_WIDTH, "{keys} is too wide");
                assert!(!desc.is_empty());
            }
        }
    }

    #[test]
    fn test_build_help_text_layout() {
        let lines = build_help_text(&Theme::default());
        let bindings: usize = HELP_SECTIONS.iter().map(|s| s.bindings.len()).sum();

        // Title and hint, a blank and a header per section, then blank and hint
        assert_eq!(lines.len(), 2 + 2 * HELP_SECTIONS.len() + bindings + 2);
        assert_eq!(text(&lines[0]), "snipmd - Keyboard Shortcuts");
        assert_eq!(text(&lines[3]), "Navigation");
        assert_eq!(text(lines.last().unwrap()), SCROLL_HINT);

        let quit = lines
            .iter()
            .find(|line| text(line).ends_with("Quit"))
            .unwrap();
        assert_eq!(quit.spans.len(), 2);
        assert_eq!(quit.spans[0].content, format!("  {:<11}", "q/Esc"));
    }
}
