//! Utility functions for markdown parsing.
//!
//! Line handling shared by the parser, the filters and block extraction.

use regex::Regex;
use std::sync::OnceLock;

/// Line terminator used whenever lines are joined back together.
pub const LINE_ENDING: &str = "\n";

fn heading_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^(#{1,6})\s+(.+)$").unwrap())
}

/// Split text into lines on `\r\n`, `\r` or `\n`.
///
/// Unlike [`str::lines`], a lone `\r` ends a line and a trailing terminator
/// produces a final empty line.
///
/// # Examples
///
/// ```
/// # use snipmd::parser::utils::split_lines;
/// assert_eq!(split_lines("a\r\nb\rc\n"), vec!["a", "b", "c", ""]);
/// assert_eq!(split_lines(""), vec![""]);
/// ```
pub fn split_lines(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&text[start..i]);
                i += 1;
                start = i;
            }
            b'\r' => {
                lines.push(&text[start..i]);
                i += if bytes.get(i + 1) == Some(&b'\n') { 2 } else { 1 };
                start = i;
            }
            _ => i += 1,
        }
    }
    lines.push(&text[start..]);

    lines
}

/// Match a heading line, returning its level and title.
///
/// A heading is 1-6 leading `#` characters, at least one whitespace
/// character, then at least one more character. Leading indentation is not
/// allowed.
///
/// # Examples
///
/// ```
/// # use snipmd::parser::utils::parse_heading_line;
/// assert_eq!(parse_heading_line("## Section"), Some((2, "Section")));
/// assert_eq!(parse_heading_line("#NoSpace"), None);
/// assert_eq!(parse_heading_line("####### Too many"), None);
/// ```
pub fn parse_heading_line(line: &str) -> Option<(usize, &str)> {
    let caps = heading_pattern().captures(line)?;
    let hashes = caps.get(1)?;
    let title = caps.get(2)?;
    Some((hashes.as_str().len(), title.as_str()))
}

/// True for empty or whitespace-only text.
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}
