//! Configuration loader with JSON parsing and environment variable overrides

use super::schema::TapConfig;
use crate::config::secret_string;
use crate::domain::errors::TapError;
use crate::domain::result::Result;
use crate::domain::StreamName;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a JSON file
///
/// This function:
/// 1. Reads the JSON file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the JSON into TapConfig
/// 4. Applies environment variable overrides (TAP_AGENTZ_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns `TapError::Configuration` if the file is missing or unreadable,
/// isn't valid JSON, references an unset variable, or fails validation.
///
/// # Examples
///
/// ```no_run
/// use tap_agentz::config::load_config;
///
/// let config = load_config("config.json").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<TapConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(TapError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        TapError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: TapConfig = serde_json::from_str(&contents).map_err(|e| {
        TapError::Configuration(format!(
            "Failed to parse configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    apply_env_overrides(&mut config)?;

    config.validate().map_err(TapError::Configuration)?;

    tracing::debug!(
        config_path = %path.display(),
        base_url = %config.base_url,
        stream = %config.stream,
        "Configuration loaded"
    );

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Values are JSON-escaped, so a placeholder inside a string literal yields
/// the variable's exact text.
///
/// # Errors
///
/// Returns an error naming every referenced variable that is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| TapError::Configuration(format!("Invalid substitution pattern: {e}")))?;
    let mut missing_vars: Vec<String> = Vec::new();

    let result = re.replace_all(input, |caps: &regex::Captures<'_>| {
        let var_name = &caps[1];
        match std::env::var(var_name) {
            Ok(value) => json_escape(&value),
            Err(_) => {
                if !missing_vars.iter().any(|v| v == var_name) {
                    missing_vars.push(var_name.to_string());
                }
                String::new()
            }
        }
    });

    if !missing_vars.is_empty() {
        return Err(TapError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result.into_owned())
}

/// Escape `value` for use inside a JSON string literal
fn json_escape(value: &str) -> String {
    let quoted = serde_json::Value::from(value).to_string();
    quoted[1..quoted.len() - 1].to_string()
}

/// Applies environment variable overrides using the TAP_AGENTZ_* prefix
fn apply_env_overrides(config: &mut TapConfig) -> Result<()> {
    if let Ok(val) = std::env::var("TAP_AGENTZ_API_KEY") {
        config.api_key = secret_string(val);
    }
    if let Ok(val) = std::env::var("TAP_AGENTZ_BASE_URL") {
        config.base_url = val;
    }
    if let Ok(val) = std::env::var("TAP_AGENTZ_STREAM") {
        config.stream = StreamName::new(val).map_err(TapError::Configuration)?;
    }
    if let Ok(val) = std::env::var("TAP_AGENTZ_LOG_LEVEL") {
        config.log_level = val;
    }

    Ok(())
}
