//! Live filtering of headings and content.
//!
//! Matching is a plain case-insensitive substring test using Rust's
//! `to_lowercase`. A blank term (empty or whitespace only) matches everything.

use crate::error::SelectionError;
use crate::parser::Heading;
use crate::parser::utils::{LINE_ENDING, is_blank, split_lines};

/// Ideographic space, used to indent nested headings in lists.
pub const INDENT_CHAR: char = '\u{3000}';

/// Headings whose title contains `term`, in their original order.
///
/// # Examples
///
/// ```
/// use snipmd::filter::filter_headings;
/// use snipmd::parser::parse_markdown;
///
/// let headings = parse_markdown("# Hello World\n# Other");
/// let found = filter_headings(&headings, "WORLD");
/// assert_eq!(found.len(), 1);
/// assert_eq!(found[0].title, "Hello World");
/// ```
pub fn filter_headings<'a>(headings: &'a [Heading], term: &str) -> Vec<&'a Heading> {
    if is_blank(term) {
        return headings.iter().collect();
    }

    let term = term.to_lowercase();
    headings
        .iter()
        .filter(|h| h.title.to_lowercase().contains(&term))
        .collect()
}

/// Lines of `content` that contain `term`, joined with `\n`.
///
/// With a blank term the content comes back unchanged. Original line
/// positions are not kept.
pub fn filter_content(content: &str, term: &str) -> String {
    if is_blank(term) {
        return content.to_string();
    }

    let term = term.to_lowercase();
    split_lines(content)
        .into_iter()
        .filter(|line| line.to_lowercase().contains(&term))
        .collect::<Vec<_>>()
        .join(LINE_ENDING)
}

/// Display indent for a heading level: one ideographic space per level below 1.
pub fn indent_for(level: usize) -> String {
    INDENT_CHAR.to_string().repeat(level.saturating_sub(1))
}

/// A filtered heading list together with the selection inside it.
///
/// Items are positions into the document's heading slice. The view is rebuilt
/// whenever the search term changes, which always clears the selection, so
/// `selected` can never point past the list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadingView {
    items: Vec<usize>,
    selected: Option<usize>,
}

impl HeadingView {
    pub fn new(headings: &[Heading], term: &str) -> Self {
        let items = if is_blank(term) {
            (0..headings.len()).collect()
        } else {
            let term = term.to_lowercase();
            headings
                .iter()
                .enumerate()
                .filter(|(_, h)| h.title.to_lowercase().contains(&term))
                .map(|(i, _)| i)
                .collect()
        };

        Self {
            items,
            selected: None,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Select the item at `index` within the filtered list.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::IndexOutOfRange`] if `index` is past the list.
    pub fn select(&mut self, index: usize) -> Result<(), SelectionError> {
        if index >= self.items.len() {
            return Err(SelectionError::IndexOutOfRange {
                index,
                len: self.items.len(),
            });
        }
        self.selected = Some(index);
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// The visible headings, in order.
    pub fn headings<'a>(&'a self, headings: &'a [Heading]) -> impl Iterator<Item = &'a Heading> {
        self.items.iter().filter_map(move |&i| headings.get(i))
    }

    pub fn selected_heading<'a>(&self, headings: &'a [Heading]) -> Option<&'a Heading> {
        self.selected
            .and_then(|i| self.items.get(i))
            .and_then(|&i| headings.get(i))
    }

    /// Position in the filtered list of the first heading titled exactly `title`.
    pub fn position_by_title(&self, headings: &[Heading], title: &str) -> Option<usize> {
        self.headings(headings).position(|h| h.title == title)
    }
}
