//! Session settings remembered between runs.
//!
//! Stored as a small JSON document. Keys use PascalCase so files written by
//! earlier versions of the viewer keep loading. Loading never fails: a missing
//! or unreadable file means defaults.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::Path;

/// Smallest panel width accepted when resizing or restoring.
pub const MIN_PANEL_WIDTH: i32 = 50;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Settings {
    pub window_width: i32,
    pub window_height: i32,
    pub left_panel_width: i32,
    pub center_panel_width: i32,
    pub selected_file_name: String,
    pub selected_heading_title: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_width: 1200,
            window_height: 700,
            left_panel_width: 200,
            center_panel_width: 350,
            selected_file_name: String::new(),
            selected_heading_title: String::new(),
        }
    }
}

impl Settings {
    /// Load settings, treating a missing or corrupt file as defaults
    pub fn load(path: &Path) -> Self {
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) => {
                log::debug!("No settings at {}: {}", path.display(), e);
                return Self::default();
            }
        };

        // Same decoding as snippet files: lossy UTF-8, leading BOM dropped
        let text = String::from_utf8_lossy(&bytes);
        let contents = text.strip_prefix('\u{feff}').unwrap_or(&text);

        serde_json::from_str(contents).unwrap_or_else(|e| {
            log::warn!("Ignoring unreadable settings {}: {}", path.display(), e);
            Self::default()
        })
    }

    /// Write settings atomically (temp file in the same directory, then rename)
    pub fn save(&self, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir)?;

        let json = serde_json::to_string_pretty(self)?;
        let mut file = tempfile::NamedTempFile::new_in(dir)?;
        file.write_all(json.as_bytes())?;
        file.persist(path)?;

        Ok(())
    }

    /// Panel widths as `(files, headings, content)` ratios of the window width.
    ///
    /// Out-of-range values from a hand-edited file are clamped so every panel
    /// stays visible.
    pub fn panel_ratios(&self) -> (u32, u32, u32) {
        let window = self.window_width.max(MIN_PANEL_WIDTH * 3);
        let left = self.left_panel_width.clamp(MIN_PANEL_WIDTH, window - 2 * MIN_PANEL_WIDTH);
        let center = self
            .center_panel_width
            .clamp(MIN_PANEL_WIDTH, window - left - MIN_PANEL_WIDTH);
        let right = window - left - center;

        (left as u32, center as u32, right as u32)
    }
}
