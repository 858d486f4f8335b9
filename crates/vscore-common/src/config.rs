//! Configuration management for vscore components

use serde::{Deserialize, Serialize};
use std::path::Path;
use vscore_core::{Error, Result};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Output settings
    #[serde(default)]
    pub output: OutputConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Configuration(format!("Failed to read config file {:?}: {}", path, e))
        })?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML string
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| Error::Configuration(format!("Failed to parse config: {}", e)))
    }

    /// Merge with environment variables (VSCORE_ prefix)
    pub fn merge_env(mut self) -> Self {
        if let Ok(val) = std::env::var("VSCORE_OUTPUT_FORMAT") {
            self.output.format = val;
        }
        if let Ok(val) = std::env::var("VSCORE_LOG_LEVEL") {
            self.logging.level = val;
        }
        if let Ok(val) = std::env::var("VSCORE_LOG_FORMAT") {
            self.logging.format = val;
        }
        self
    }
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output format (text, json)
    #[serde(default = "default_output_format")]
    pub format: String,

    /// Include the per-metric sub-score breakdown in text output
    #[serde(default = "default_true")]
    pub show_breakdown: bool,
}

fn default_output_format() -> String {
    String::from("text")
}

fn default_true() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: String::from("text"),
            show_breakdown: true,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format (pretty, json, compact)
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    String::from("info")
}

fn default_log_format() -> String {
    String::from("pretty")
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: String::from("info"),
            format: String::from("pretty"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_toml() {
        let toml = r#"
            [output]
            format = "json"
            show_breakdown = false

            [logging]
            level = "debug"
        "#;

        let config = Config::from_toml(toml).unwrap();
        assert_eq!(config.output.format, "json");
        assert!(!config.output.show_breakdown);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config.output.format, "text");
        assert!(config.output.show_breakdown);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_invalid_toml_is_configuration_error() {
        let err = Config::from_toml("not valid [[").unwrap_err();
        assert_eq!(err.code(), "CONFIG_ERROR");
    }
}
