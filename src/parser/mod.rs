//! Markdown parsing and heading extraction.
//!
//! Headings are detected line by line: 1-6 `#` characters, whitespace, then
//! title text. There is no code-fence awareness, so a `#` line inside a fenced
//! block is treated as a heading like any other.

mod document;
pub mod utils;

pub use document::{Document, Heading};

use std::path::{Path, PathBuf};
use utils::{LINE_ENDING, parse_heading_line, split_lines};

/// Parse a markdown file into a [`Document`].
///
/// Invalid UTF-8 is replaced rather than rejected and a leading byte order
/// mark is dropped.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn parse_file(path: &Path) -> std::io::Result<Document> {
    let bytes = std::fs::read(path)?;
    let text = String::from_utf8_lossy(&bytes);
    let text = text.strip_prefix('\u{feff}').unwrap_or(&text);
    Ok(parse_document(path.to_path_buf(), text))
}

/// Build a [`Document`] from already loaded markdown text.
pub fn parse_document(path: PathBuf, content: &str) -> Document {
    let headings = parse_markdown(content);
    Document::new(path, content.to_string(), headings)
}

/// Parse markdown text into its headings, in file order.
///
/// Each heading's content is everything between its line and the next heading
/// line of any level (or end of input), joined with `\n` and trimmed.
///
/// # Arguments
///
/// * `content` - Markdown content as a string
///
/// # Returns
///
/// The headings found, or an empty vector when there are none.
pub fn parse_markdown(content: &str) -> Vec<Heading> {
    let lines = split_lines(content);

    // One pass to find heading lines, so each body is sliced exactly once
    let marks: Vec<(usize, usize, &str)> = lines
        .iter()
        .enumerate()
        .filter_map(|(i, line)| parse_heading_line(line).map(|(level, title)| (i, level, title)))
        .collect();

    marks
        .iter()
        .enumerate()
        .map(|(n, &(line_number, level, title))| {
            let body_end = marks.get(n + 1).map_or(lines.len(), |next| next.0);
            let body = lines[line_number + 1..body_end].join(LINE_ENDING);

            Heading {
                level,
                title: title.to_string(),
                content: body.trim().to_string(),
                line_number,
            }
        })
        .collect()
}
