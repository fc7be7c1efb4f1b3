//! Configuration schema types
//!
//! The config file is a JSON object with camelCase keys. Only `apiKey` is
//! required; everything else falls back to the defaults below.

use crate::config::{secret_string, SecretString};
use crate::domain::{default_start_date, DateRange, Result, StreamName};
use chrono::NaiveDate;
use serde::Deserialize;

/// Reporting host used when the config doesn't set `baseUrl`
pub const DEFAULT_BASE_URL: &str = "https://dev-api.agentz.ai";

const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Root configuration for one tap run
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TapConfig {
    /// Agentz API key, sent in the `apiKey` request header
    /// Stored securely in memory and automatically zeroized on drop
    #[serde(default = "empty_secret")]
    pub api_key: SecretString,

    /// Reporting API origin, without the report path
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Stream name stamped on every emitted message
    #[serde(default)]
    pub stream: StreamName,

    /// First day of the requested report
    #[serde(default = "default_start_date")]
    pub start_date: NaiveDate,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl TapConfig {
    /// Minimal config holding only an API key
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: secret_string(api_key.into()),
            base_url: default_base_url(),
            stream: StreamName::default(),
            start_date: default_start_date(),
            log_level: default_log_level(),
            logging: LoggingConfig::default(),
        }
    }

    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> std::result::Result<(), String> {
        use secrecy::ExposeSecret;

        if self.api_key.expose_secret().is_empty() {
            return Err("Config file must have an apiKey".to_string());
        }

        let base_url = url::Url::parse(&self.base_url)
            .map_err(|e| format!("Invalid baseUrl '{}': {e}", self.base_url))?;
        if base_url.scheme() != "http" && base_url.scheme() != "https" {
            return Err("baseUrl must start with http:// or https://".to_string());
        }

        if !VALID_LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            return Err(format!(
                "Invalid logLevel '{}'. Must be one of: {}",
                self.log_level,
                VALID_LOG_LEVELS.join(", ")
            ));
        }

        self.logging.validate()
    }

    /// Date range for this run: `startDate` through today (UTC)
    pub fn date_range(&self) -> Result<DateRange> {
        DateRange::through_today(self.start_date)
    }
}

/// Logging configuration
///
/// Console logs always go to stderr. The optional file layer writes JSON
/// lines into `local_path`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggingConfig {
    /// Enable local file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log directory
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy (daily, hourly, never)
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

impl LoggingConfig {
    fn validate(&self) -> std::result::Result<(), String> {
        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.localRotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.localPath cannot be empty when file logging is enabled".to_string());
        }

        Ok(())
    }
}

fn empty_secret() -> SecretString {
    secret_string(String::new())
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_local_path() -> String {
    "./logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}
