//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tictactoe_core::ResetMode;
use tracing::{debug, info, instrument};

/// File looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "tictactoe.toml";

/// Settings shared by the console and terminal UI front ends.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Name for player one; asked for interactively when absent.
    #[serde(default)]
    player_one: Option<String>,

    /// Name for player two; asked for interactively when absent.
    #[serde(default)]
    player_two: Option<String>,

    /// Overrides what a reset returns to. Each front end has its own default.
    #[serde(default)]
    reset_mode: Option<ResetMode>,

    /// Log file used by the terminal UI.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

fn default_log_file() -> PathBuf {
    PathBuf::from("tictactoe.log")
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_one: None,
            player_two: None,
            reset_mode: None,
            log_file: default_log_file(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads `path` if given, else [`DEFAULT_CONFIG_FILE`] if it exists, else
    /// the defaults.
    ///
    /// An explicit path that cannot be read is an error.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let fallback = Path::new(DEFAULT_CONFIG_FILE);
                if fallback.is_file() {
                    Self::from_file(fallback)
                } else {
                    debug!("No config file, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    /// Replaces the configured names with any given on the command line.
    #[instrument(skip(self))]
    pub fn with_player_names(mut self, one: Option<String>, two: Option<String>) -> Self {
        if one.is_some() {
            self.player_one = one;
        }
        if two.is_some() {
            self.player_two = two;
        }
        self
    }

    /// The configured reset mode, or `fallback` when none is set.
    pub fn reset_mode_or(&self, fallback: ResetMode) -> ResetMode {
        self.reset_mode.unwrap_or(fallback)
    }
}

/// Configuration error with location tracking.
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
    /// Creates a new config error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = GameConfig::from_toml("").unwrap();
        assert_eq!(config, GameConfig::default());
        assert_eq!(config.log_file(), &PathBuf::from("tictactoe.log"));
    }

    #[test]
    fn test_parses_all_fields() {
        let config = GameConfig::from_toml(
            r#"
            player_one = "Ada"
            player_two = "Grace"
            reset_mode = "rematch"
            log_file = "/tmp/ttt.log"
            "#,
        )
        .unwrap();

        assert_eq!(config.player_one().as_deref(), Some("Ada"));
        assert_eq!(config.player_two().as_deref(), Some("Grace"));
        assert_eq!(config.reset_mode_or(ResetMode::ReturnToSetup), ResetMode::Rematch);
        assert_eq!(config.log_file(), &PathBuf::from("/tmp/ttt.log"));
    }

    #[test]
    fn test_unknown_reset_mode_is_rejected() {
        let err = GameConfig::from_toml(r#"reset_mode = "sometimes""#).unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
    }

    #[test]
    fn test_cli_names_override_file() {
        let config = GameConfig::from_toml(r#"player_one = "Ada""#)
            .unwrap()
            .with_player_names(None, Some("Mo".into()));

        assert_eq!(config.player_one().as_deref(), Some("Ada"));
        assert_eq!(config.player_two().as_deref(), Some("Mo"));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, r#"player_two = "Lin""#).unwrap();

        let config = GameConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.player_two().as_deref(), Some("Lin"));
        assert_eq!(config.reset_mode_or(ResetMode::Rematch), ResetMode::Rematch);
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = GameConfig::load(Some(&dir.path().join("absent.toml"))).unwrap_err();
        assert!(err.message.starts_with("Failed to read config file"));
    }
}
