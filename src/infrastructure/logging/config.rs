//! Logging configuration read from the environment.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::ports::EnvSource;
use crate::services::EnvReader;

/// Variable holding the log level for binaries built on this crate.
pub const LOG_LEVEL_VAR: &str = "TYPENV_LOG_LEVEL";

/// Variable holding the log format (`json` or `pretty`).
pub const LOG_FORMAT_VAR: &str = "TYPENV_LOG_FORMAT";

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format (json, pretty)
    #[serde(default)]
    pub format: LogFormat,
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// One JSON object per event
    Json,
    /// Human-readable lines
    #[default]
    Pretty,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "pretty" => Ok(Self::Pretty),
            _ => Err(format!("invalid log format: '{s}' (expected json or pretty)")),
        }
    }
}

/// A recognized level name, lowercased.
struct LevelName(String);

impl FromStr for LevelName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        match lower.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => Ok(Self(lower)),
            _ => Err(format!(
                "invalid log level: '{s}' (expected trace, debug, info, warn or error)"
            )),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => f.write_str("json"),
            Self::Pretty => f.write_str("pretty"),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

impl LogConfig {
    /// Build the logging configuration from `TYPENV_LOG_LEVEL` and
    /// `TYPENV_LOG_FORMAT`, falling back to defaults for each.
    ///
    /// An unrecognized level or format is reported through the reader's hook.
    pub fn from_env<E: EnvSource>(reader: &EnvReader<E>) -> Self {
        let defaults = Self::default();
        Self {
            level: reader.parsed(LOG_LEVEL_VAR, LevelName(defaults.level)).0,
            format: reader.parsed(LOG_FORMAT_VAR, defaults.format),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
