//! Application configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tictac_core::{DEFAULT_FIRST_NAME, DEFAULT_SECOND_NAME};
use tracing::{debug, info, instrument};

/// Default location of the configuration file.
pub const DEFAULT_CONFIG_PATH: &str = "tictac.toml";

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Tracing filter used when `RUST_LOG` is unset.
    log_filter: String,

    /// Names offered when a player leaves the name prompt empty.
    players: PlayerDefaults,

    /// Board rendering options.
    display: DisplayConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_filter: "warn".to_string(),
            players: PlayerDefaults::default(),
            display: DisplayConfig::default(),
        }
    }
}

/// Fallback player names.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerDefaults {
    /// Name of the player using the first marker.
    first: String,
    /// Name of the player using the second marker.
    second: String,
}

impl Default for PlayerDefaults {
    fn default() -> Self {
        Self {
            first: DEFAULT_FIRST_NAME.to_string(),
            second: DEFAULT_SECOND_NAME.to_string(),
        }
    }
}

/// How the board is drawn.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Marks the cells of a winning line.
    highlight: HighlightStyle,
    /// Shows 1-9 in empty cells.
    show_cell_numbers: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            highlight: HighlightStyle::Brackets,
            show_cell_numbers: true,
        }
    }
}

impl DisplayConfig {
    /// Creates a display configuration.
    pub fn new(highlight: HighlightStyle, show_cell_numbers: bool) -> Self {
        Self {
            highlight,
            show_cell_numbers,
        }
    }
}

/// Decoration drawn around the cells of a winning line.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum HighlightStyle {
    /// `[X]`
    #[default]
    Brackets,
    /// `*X*`
    Asterisks,
}

impl HighlightStyle {
    /// Left and right decoration for a highlighted cell.
    pub fn delimiters(self) -> (char, char) {
        match self {
            HighlightStyle::Brackets => ('[', ']'),
            HighlightStyle::Asterisks => ('*', '*'),
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(log_filter = %config.log_filter, "Config loaded successfully");
        Ok(config)
    }

    /// Loads configuration from `path`, or returns defaults when the file is
    /// absent.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Replaces the display settings.
    pub fn with_display(mut self, display: DisplayConfig) -> Self {
        self.display = display;
        self
    }

    /// Serializes the configuration as pretty TOML.
    #[instrument(skip(self))]
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self)
            .map_err(|e| ConfigError::new(format!("Failed to serialize config: {}", e)))
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::str::FromStr;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.log_filter(), "warn");
        assert_eq!(config.players().first(), "Player 1");
        assert_eq!(config.players().second(), "Player 2");
        assert_eq!(*config.display().highlight(), HighlightStyle::Brackets);
        assert!(*config.display().show_cell_numbers());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
[players]
first = "Ada"

[display]
highlight = "asterisks"
"#,
        )
        .unwrap();

        assert_eq!(config.players().first(), "Ada");
        assert_eq!(config.players().second(), "Player 2");
        assert_eq!(*config.display().highlight(), HighlightStyle::Asterisks);
        assert!(*config.display().show_cell_numbers());
        assert_eq!(config.log_filter(), "warn");
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_toml_roundtrip() {
        let text = AppConfig::default().to_toml().unwrap();
        let config: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tictac.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(f, "log_filter = \"debug\"\n\n[display]\nshow_cell_numbers = false").unwrap();

        let config = AppConfig::from_file(&path).unwrap();
        assert_eq!(config.log_filter(), "debug");
        assert!(!*config.display().show_cell_numbers());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_invalid_toml_reports_location() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "[display]\nhighlight = \"neon\"\n").unwrap();

        let err = AppConfig::from_file(&path).unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
        assert!(err.to_string().contains("config.rs"));
    }

    #[test]
    fn test_highlight_style_strings() {
        assert_eq!(HighlightStyle::Asterisks.to_string(), "asterisks");
        assert_eq!(
            HighlightStyle::from_str("brackets").unwrap(),
            HighlightStyle::Brackets
        );
        assert_eq!(HighlightStyle::Brackets.delimiters(), ('[', ']'));
    }
}
