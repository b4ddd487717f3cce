//! Configuration file loading for the terminal front end.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur when loading or parsing configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    /// The configured log level is not one of trace/debug/info/warn/error.
    #[error("Unknown log level: {0}")]
    InvalidLogLevel(String),
}

/// How the board is drawn.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct DisplayConfig {
    /// Draw pieces as Unicode glyphs instead of placement letters.
    #[serde(default = "default_true")]
    pub unicode: bool,
    /// Print file letters and rank numbers around the grid.
    #[serde(default = "default_true")]
    pub coordinates: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            unicode: true,
            coordinates: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Front-end configuration, read from `chess.toml` by default.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct CliConfig {
    #[serde(default)]
    pub display: DisplayConfig,
    /// Maximum tracing level written to stderr.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            display: DisplayConfig::default(),
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl CliConfig {
    /// Default configuration file name.
    pub const DEFAULT_PATH: &'static str = "chess.toml";

    /// Loads the configuration from `path`.
    ///
    /// A missing file yields the default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file exists but cannot be read,
    /// or [`ConfigError::ParseError`] if the file contains invalid TOML.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Ok(toml::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }

    /// Parses the configured log level.
    pub fn tracing_level(&self) -> Result<tracing::Level, ConfigError> {
        self.log_level
            .parse()
            .map_err(|_| ConfigError::InvalidLogLevel(self.log_level.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = CliConfig::default();
        assert!(config.display.unicode);
        assert!(config.display.coordinates);
        assert_eq!(config.tracing_level().unwrap(), tracing::Level::WARN);
    }

    #[test]
    fn parse_full_config() {
        let toml_content = r#"
log_level = "debug"

[display]
unicode = false
coordinates = false
"#;
        let config: CliConfig = toml::from_str(toml_content).unwrap();
        assert!(!config.display.unicode);
        assert!(!config.display.coordinates);
        assert_eq!(config.tracing_level().unwrap(), tracing::Level::DEBUG);
    }

    #[test]
    fn missing_fields_use_defaults() {
        let config: CliConfig = toml::from_str("[display]\nunicode = false\n").unwrap();
        assert!(!config.display.unicode);
        assert!(config.display.coordinates);
        assert_eq!(config.log_level, "warn");

        let empty: CliConfig = toml::from_str("").unwrap();
        assert_eq!(empty, CliConfig::default());
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let result: Result<CliConfig, _> = toml::from_str("display = 3");
        assert!(result.is_err());
    }

    #[test]
    fn unknown_log_level() {
        let config = CliConfig {
            log_level: "loud".to_string(),
            ..CliConfig::default()
        };
        assert!(matches!(
            config.tracing_level(),
            Err(ConfigError::InvalidLogLevel(level)) if level == "loud"
        ));
    }

    #[test]
    fn load_missing_file_returns_default() {
        let config = CliConfig::load(Path::new("definitely/not/here/chess.toml")).unwrap();
        assert_eq!(config, CliConfig::default());
    }
}
