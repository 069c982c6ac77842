use serde::Serialize;
use std::path::{Path, PathBuf};

/// A heading line plus the body text that follows it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Heading {
    /// Heading level (1-6)
    pub level: usize,
    /// Text after the `#` markers and the whitespace run
    pub title: String,
    /// Body text up to the next heading, trimmed, with `\n` line endings
    pub content: String,
    /// Line of the heading in the source file (0-indexed)
    pub line_number: usize,
}

/// One loaded markdown file and its parsed headings.
///
/// Documents never change after they are loaded.
#[derive(Debug, Clone)]
pub struct Document {
    pub path: PathBuf,
    pub name: String,
    pub content: String,
    pub headings: Vec<Heading>,
}

impl Document {
    pub fn new(path: PathBuf, content: String, headings: Vec<Heading>) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        Self {
            path,
            name,
            content,
            headings,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Find the first heading with exactly this title.
    pub fn find_heading(&self, title: &str) -> Option<&Heading> {
        self.headings.iter().find(|h| h.title == title)
    }
}
