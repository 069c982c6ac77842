//! Utility functions for UI rendering
//!
//! Pure functions for layout calculations and text formatting.

use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::Span;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Calculate a centered rectangular area within a parent area.
///
/// Returns a `Rect` that is centered both horizontally and vertically,
/// sized as a percentage of the parent area.
///
/// # Arguments
/// * `area` - The parent area to center within
/// * `percent_x` - Width as a percentage of parent (0-100)
/// * `percent_y` - Height as a percentage of parent (0-100)
pub fn centered_area(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let vertical = Layout::vertical([Constraint::Percentage(percent_y)]).flex(Flex::Center);
    let horizontal = Layout::horizontal([Constraint::Percentage(percent_x)]).flex(Flex::Center);
    let [area] = vertical.areas(area);
    let [area] = horizontal.areas(area);
    area
}

/// Centered popup area with a minimum size, never larger than the parent.
pub fn popup_area(
    area: Rect,
    percent_x: u16,
    percent_y: u16,
    min_width: u16,
    min_height: u16,
) -> Rect {
    let popup = centered_area(area, percent_x, percent_y);
    let width = popup.width.max(min_width).min(area.width);
    let height = popup.height.max(min_height).min(area.height);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Truncate text to a display width, ending with `…` when shortened.
///
/// Width is measured in terminal columns, so wide characters such as CJK
/// count double.
pub fn truncate_to_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut result = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        result.push(c);
        used += w;
    }
    result.push('…');
    result
}

/// Split text into spans, styling every occurrence of `query`.
///
/// Matching ignores case, the same rule the content filter uses.
pub fn highlight_matches(
    text: &str,
    query: &str,
    base_style: Style,
    highlight_style: Style,
) -> Vec<Span<'static>> {
    let text_lower = text.to_lowercase();
    let query_lower = query.to_lowercase();

    // Byte offsets only line up when lowercasing keeps the length
    if query.trim().is_empty() || text_lower.len() != text.len() {
        return vec![Span::styled(text.to_string(), base_style)];
    }

    let mut spans = Vec::new();
    let mut last_end = 0;

    for (start, _) in text_lower.match_indices(&query_lower) {
        let end = start + query_lower.len();
        if !text.is_char_boundary(start) || !text.is_char_boundary(end) {
            continue;
        }

        if start > last_end {
            spans.push(Span::styled(text[last_end..start].to_string(), base_style));
        }
        spans.push(Span::styled(text[start..end].to_string(), highlight_style));
        last_end = end;
    }

    if last_end < text.len() || spans.is_empty() {
        spans.push(Span::styled(text[last_end..].to_string(), base_style));
    }

    spans
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;

    #[test]
    fn test_centered_area() {
        let area = Rect::new(0, 0, 100, 50);
        let centered = centered_area(area, 50, 50);
        assert_eq!(centered.width, 50);
        assert_eq!(centered.height, 25);
        assert_eq!(centered.x, 25);
    }

    #[test]
    fn test_popup_area_minimums() {
        let area = Rect::new(0, 0, 40, 20);
        let popup = popup_area(area, 10, 10, 30, 10);
        assert_eq!(popup.width, 30);
        assert_eq!(popup.height, 10);
        assert_eq!(popup.x, 5);

        let tiny = Rect::new(0, 0, 10, 5);
        let popup = popup_area(tiny, 70, 80, 40, 10);
        assert_eq!(popup, tiny);
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("exactly", 7), "exactly");
        assert_eq!(truncate_to_width("snippets/git.md", 8), "snippet…");
        assert_eq!(truncate_to_width("anything", 0), "");
    }

    #[test]
    fn test_truncate_wide_characters() {
        // Each CJK character takes two columns
        assert_eq!(truncate_to_width("日本語テキスト", 7), "日本語…");
    }

    #[test]
    fn test_highlight_matches() {
        let base = Style::default();
        let hit = Style::default().fg(Color::Yellow);

        let spans = highlight_matches("git stash; git pop", "git", base, hit);
        let texts: Vec<&str> = spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(texts, vec!["git", " stash; ", "git", " pop"]);
        assert_eq!(spans[0].style, hit);
        assert_eq!(spans[1].style, base);
    }

    #[test]
    fn test_highlight_ignores_case() {
        let hit = Style::default().fg(Color::Yellow);
        let spans = highlight_matches("Use GIT here", "git", Style::default(), hit);
        let texts: Vec<&str> = spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(texts, vec!["Use ", "GIT", " here"]);
        assert_eq!(spans[1].style, hit);
    }

    #[test]
    fn test_highlight_blank_query() {
        let spans = highlight_matches("text", "  ", Style::default(), Style::default());
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].content, "text");
    }
}
