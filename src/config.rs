use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the snippets folder next to the executable.
pub const SNIPPETS_DIR_NAME: &str = "snippets";

/// File name of the session settings next to the executable.
pub const SETTINGS_FILE_NAME: &str = "settings.json";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,

    #[serde(default)]
    pub behavior: BehaviorConfig,
}

/// Where snippets and session settings live.
///
/// Unset paths resolve relative to the executable's directory.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snippets_dir: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings_file: Option<PathBuf>,
}

/// Window-manager style policies the shell may honor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BehaviorConfig {
    /// Quit when Escape is pressed outside of a search box (default: true)
    #[serde(default = "default_exit_on_escape")]
    pub exit_on_escape: bool,

    /// Quit when the terminal loses focus (default: false)
    /// Only works in terminals that report focus changes
    #[serde(default)]
    pub exit_on_focus_loss: bool,

    /// Select file and heading list items under the mouse pointer (default: true)
    #[serde(default = "default_hover_select")]
    pub hover_select: bool,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            exit_on_escape: default_exit_on_escape(),
            exit_on_focus_loss: false,
            hover_select: default_hover_select(),
        }
    }
}

fn default_exit_on_escape() -> bool {
    true
}

fn default_hover_select() -> bool {
    true
}

impl Config {
    /// Get the platform-specific config file path
    /// - macOS: ~/Library/Application Support/snipmd/config.toml
    /// - Linux: ~/.config/snipmd/config.toml
    /// - Windows: %APPDATA%/snipmd/config.toml
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("snipmd").join("config.toml"))
    }

    /// Load config from file, or return default if file doesn't exist
    pub fn load() -> Self {
        Self::config_path()
            .map(|path| Self::load_from(&path))
            .unwrap_or_default()
    }

    /// Load config from a specific file, falling back to defaults on any failure
    pub fn load_from(path: &Path) -> Self {
        let Ok(contents) = fs::read_to_string(path) else {
            return Self::default();
        };

        toml::from_str(&contents).unwrap_or_else(|e| {
            log::warn!("Ignoring invalid config {}: {}", path.display(), e);
            Self::default()
        })
    }

    /// Save config to file
    pub fn save(&self) -> Result<PathBuf, Box<dyn std::error::Error>> {
        let path = Self::config_path().ok_or("Could not determine config directory")?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;

        Ok(())
    }

    /// Directory holding the executable, or the working directory if unknown
    pub fn base_dir() -> PathBuf {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
            .or_else(|| std::env::current_dir().ok())
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Resolve the snippets directory (`--dir` > config file > next to the executable)
    pub fn snippets_dir(&self, override_dir: Option<&Path>) -> PathBuf {
        override_dir
            .map(Path::to_path_buf)
            .or_else(|| self.paths.snippets_dir.clone())
            .unwrap_or_else(|| Self::base_dir().join(SNIPPETS_DIR_NAME))
    }

    /// Resolve the settings file (config file > next to the executable)
    pub fn settings_file(&self) -> PathBuf {
        self.paths
            .settings_file
            .clone()
            .unwrap_or_else(|| Self::base_dir().join(SETTINGS_FILE_NAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.behavior.exit_on_escape);
        assert!(!config.behavior.exit_on_focus_loss);
        assert!(config.behavior.hover_select);
        assert!(config.paths.snippets_dir.is_none());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
[behavior]
exit_on_focus_loss = true

[paths]
snippets_dir = "/tmp/notes"
"#,
        )
        .unwrap();

        assert!(config.behavior.exit_on_focus_loss);
        assert!(config.behavior.exit_on_escape);
        assert_eq!(config.snippets_dir(None), PathBuf::from("/tmp/notes"));
        assert_eq!(
            config.snippets_dir(Some(Path::new("other"))),
            PathBuf::from("other")
        );
    }

    #[test]
    fn test_invalid_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "behavior = [not valid").unwrap();

        let config = Config::load_from(&path);
        assert!(config.behavior.exit_on_escape);
        assert!(Config::load_from(&dir.path().join("missing.toml")).paths.settings_file.is_none());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.behavior.hover_select = false;
        config.paths.settings_file = Some(PathBuf::from("/var/tmp/settings.json"));
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path);
        assert!(!loaded.behavior.hover_select);
        assert_eq!(loaded.settings_file(), PathBuf::from("/var/tmp/settings.json"));
    }

    #[test]
    fn test_default_locations_share_base_dir() {
        let config = Config::default();
        let base = Config::base_dir();
        assert_eq!(config.snippets_dir(None), base.join(SNIPPETS_DIR_NAME));
        assert_eq!(config.settings_file(), base.join(SETTINGS_FILE_NAME));
    }
}
