//! # snipmd
//!
//! A browser for a folder of personal markdown snippet files.
//!
//! Each `.md` file in the snippets folder is split into headings. A heading's
//! content is everything up to the next heading of any level. Headings can be
//! filtered by title, a heading's content can be filtered by line, and a
//! "block" (the run of non-blank lines starting at a chosen line) can be
//! pulled out for copying.
//!
//! ## Features
//!
//! - Parse markdown into a flat list of headings with their content
//! - Load every markdown file of a folder into a catalog
//! - Case-insensitive substring filters for headings and content lines
//! - Block extraction for copy-to-clipboard
//! - Interactive three-pane TUI that remembers its last selection
//!
//! ## Example
//!
//! ```rust
//! use snipmd::{extract_block, filter_content, filter_headings, parse_markdown};
//!
//! let markdown = "# Git\n## Stash\ngit stash push\ngit stash pop\n\ngit stash list\n";
//!
//! let headings = parse_markdown(markdown);
//! let stash = filter_headings(&headings, "Stash")[0];
//! assert_eq!(stash.content, "git stash push\ngit stash pop\n\ngit stash list");
//!
//! assert_eq!(filter_content(&stash.content, "pop"), "git stash pop");
//! assert_eq!(extract_block(&stash.content, 0), "git stash push\ngit stash pop");
//! ```

/// Block extraction for copy-to-clipboard.
pub mod block;

/// Catalog of the markdown files in the snippets folder.
pub mod catalog;

/// Configuration module for persisting user preferences.
///
/// Provides the TOML config file with path overrides and shell behavior.
pub mod config;

/// Error types.
pub mod error;

/// Heading and content filters.
pub mod filter;

/// Parser module for markdown documents.
///
/// Provides functions to parse markdown files and content into headings.
pub mod parser;

/// Session settings (window layout and last selection).
pub mod settings;

/// TUI module for the interactive terminal interface.
///
/// Provides the App and UI rendering for the three-pane browser.
pub mod tui;

// Re-export commonly used types for convenience
pub use block::extract_block;
pub use catalog::FileCatalog;
pub use config::Config;
pub use error::SelectionError;
pub use filter::{HeadingView, filter_content, filter_headings, indent_for};
pub use parser::{Document, Heading, parse_file, parse_markdown};
pub use settings::Settings;
pub use tui::App;
