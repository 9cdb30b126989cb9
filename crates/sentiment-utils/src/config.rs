//! Process-level settings

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable naming the deployment environment
pub const ENV_ENVIRONMENT: &str = "SENTIMENT_ENV";
/// Environment variable selecting the log output format
pub const ENV_LOG_FORMAT: &str = "SENTIMENT_LOG_FORMAT";
/// Environment variable pointing at an engine configuration file
pub const ENV_CONFIG_PATH: &str = "SENTIMENT_CONFIG";

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human readable lines
    #[default]
    Pretty,
    /// One JSON object per event
    Json,
}

impl LogFormat {
    /// Parse a format name, falling back to `Pretty` for anything unknown
    pub fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("json") {
            Self::Json
        } else {
            Self::Pretty
        }
    }
}

/// Main settings structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Application name
    pub app_name: String,
    /// Environment (development, production, etc.)
    pub environment: String,
    /// Log output format
    pub log_format: LogFormat,
    /// Optional engine configuration file
    pub config_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            app_name: "sentiment-rs".to_string(),
            environment: "development".to_string(),
            log_format: LogFormat::Pretty,
            config_path: None,
        }
    }
}

impl Settings {
    /// Read settings from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            app_name: defaults.app_name,
            environment: lookup(ENV_ENVIRONMENT)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.environment),
            log_format: lookup(ENV_LOG_FORMAT)
                .map(|v| LogFormat::parse(&v))
                .unwrap_or(defaults.log_format),
            config_path: lookup(ENV_CONFIG_PATH)
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
        }
    }
}
