//! Configuration Management
//!
//! Handles configuration from a TOML file and environment variables,
//! with defaults that reproduce the classic `people/` extraction layout.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Wikidata direct-property prefix, stripped from predicates
pub const WIKIDATA_PROP_DIRECT: &str = "http://www.wikidata.org/prop/direct/";

/// Wikidata entity prefix, stripped from subjects and objects
pub const WIKIDATA_ENTITY: &str = "http://www.wikidata.org/entity/";

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Output layout
    pub output: OutputConfig,

    /// Triple parser settings
    pub parser: ParserConfig,

    /// Pipeline settings
    pub pipeline: PipelineConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load from a TOML file
    pub fn from_file(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::FileReadError {
            path: path.clone(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path,
            message: e.to_string(),
        })
    }

    /// Merge with environment variables (env takes precedence)
    pub fn with_env_override(self) -> Result<Self, ConfigError> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Output
        if let Some(dir) = lookup("WDP_OUTPUT_DIR") {
            self.output.dir = PathBuf::from(dir);
        }

        // Pipeline
        if let Some(interval) = lookup("WDP_PROGRESS_INTERVAL") {
            self.pipeline.progress_interval =
                interval.parse().map_err(|_| ConfigError::InvalidValue {
                    key: "WDP_PROGRESS_INTERVAL".to_string(),
                    value: interval,
                })?;
        }

        // Logging
        if let Some(level) = lookup("LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("LOG_FORMAT") {
            self.logging.json_format = match format.to_lowercase().as_str() {
                "json" => true,
                "text" | "pretty" => false,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        key: "LOG_FORMAT".to_string(),
                        value: format,
                    })
                }
            };
        }

        Ok(self)
    }
}

/// Output layout configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory holding one file per relation
    pub dir: PathBuf,

    /// Create the directory when missing instead of failing
    pub create_dir: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("people"),
            create_dir: false,
        }
    }
}

/// Triple parser configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// URI prefixes removed from every field, applied in order
    pub strip_prefixes: Vec<String>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            strip_prefixes: vec![
                WIKIDATA_PROP_DIRECT.to_string(),
                WIKIDATA_ENTITY.to_string(),
            ],
        }
    }
}

/// Pipeline configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Log progress every N input lines (0 disables)
    pub progress_interval: u64,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            progress_interval: 10_000_000,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// JSON format for logs
    pub json_format: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_format: false,
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },
}
