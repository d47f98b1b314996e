//! Configuration system for matchforge.
//!
//! Controls how assertion failures are rendered and which log events are
//! emitted, loaded from TOML or YAML without code changes.
//!
//! # Examples
//!
//! Load configuration from a TOML string:
//!
//! ```
//! use matchforge_config::MatchforgeConfig;
//!
//! let config = MatchforgeConfig::from_toml_str(r#"
//!     [report]
//!     max_got_width = 80
//!     show_types = false
//!
//!     [log]
//!     filter = "matchforge_engine=debug"
//! "#).unwrap();
//!
//! assert_eq!(config.report.max_got_width, Some(80));
//! assert!(!config.report.show_types);
//! assert_eq!(config.log.filter.as_deref(), Some("matchforge_engine=debug"));
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use matchforge_config::MatchforgeConfig;
//!
//! let config = MatchforgeConfig::load("matchforge.toml").unwrap_or_default();
//! assert!(config.report.show_types);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main matchforge configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct MatchforgeConfig {
    /// Failure message rendering.
    #[serde(default)]
    pub report: ReportConfig,

    /// Logging defaults.
    #[serde(default)]
    pub log: LogConfig,
}

impl MatchforgeConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist, contains invalid TOML, or fails
    /// validation.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks values serde cannot reject on its own.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.report.max_got_width == Some(0) {
            return Err(ConfigError::Invalid(
                "report.max_got_width must be greater than zero".to_string(),
            ));
        }
        if self.log.filter.as_deref().is_some_and(|f| f.trim().is_empty()) {
            return Err(ConfigError::Invalid(
                "log.filter must not be blank".to_string(),
            ));
        }
        Ok(())
    }

    /// Truncates the rendered `Got:` value to `width` characters.
    pub fn with_max_got_width(mut self, width: usize) -> Self {
        self.report.max_got_width = Some(width);
        self
    }

    /// Sets whether the `Got:` value is followed by its type name.
    pub fn with_show_types(mut self, show: bool) -> Self {
        self.report.show_types = show;
        self
    }

    /// Sets the default log filter directive.
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log.filter = Some(filter.into());
        self
    }
}

/// How assertion failures are rendered.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ReportConfig {
    /// Maximum characters of the rendered actual value; longer renderings
    /// are cut and suffixed with `...`.
    #[serde(default)]
    pub max_got_width: Option<usize>,

    /// Append ` (<type>)` after the rendered actual value.
    #[serde(default = "default_show_types")]
    pub show_types: bool,
}

fn default_show_types() -> bool {
    true
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            max_got_width: None,
            show_types: default_show_types(),
        }
    }
}

/// Logging defaults, used when the environment sets no filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct LogConfig {
    /// An `EnvFilter` directive such as `matchforge_engine=debug`.
    #[serde(default)]
    pub filter: Option<String>,
}
