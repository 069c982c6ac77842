//! Copyable block extraction.
//!
//! A block starts at the chosen line and runs forward until the first blank
//! line. It never extends backward, so choosing a line in the middle of a
//! paragraph yields only the rest of that paragraph.

use crate::parser::utils::{LINE_ENDING, is_blank, split_lines};

/// The contiguous non-blank lines starting at `line_index`.
///
/// Returns an empty string when `line_index` is out of range or the line there
/// is blank.
///
/// # Examples
///
/// ```
/// use snipmd::block::extract_block;
///
/// assert_eq!(extract_block("line1\nline2\n\nline4", 0), "line1\nline2");
/// assert_eq!(extract_block("line1\nline2\n\nline4", 2), "");
/// ```
pub fn extract_block(content: &str, line_index: usize) -> String {
    let lines = split_lines(content);

    match lines.get(line_index) {
        Some(line) if !is_blank(line) => lines[line_index..]
            .iter()
            .take_while(|line| !is_blank(line))
            .copied()
            .collect::<Vec<_>>()
            .join(LINE_ENDING),
        _ => String::new(),
    }
}
