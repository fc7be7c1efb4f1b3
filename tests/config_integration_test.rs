//! Integration tests for configuration loading and validation
//!
//! Tests that touch environment variables hold ENV_MUTEX so they don't
//! interfere with each other.

use secrecy::ExposeSecret;
use std::io::Write;
use std::sync::Mutex;
use tap_agentz::config::{load_config, DEFAULT_BASE_URL};
use tap_agentz::domain::TapError;
use tempfile::NamedTempFile;

// Mutex to serialize tests that modify environment variables
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn cleanup_env_vars() {
    std::env::remove_var("TAP_AGENTZ_API_KEY");
    std::env::remove_var("TAP_AGENTZ_BASE_URL");
    std::env::remove_var("TAP_AGENTZ_STREAM");
    std::env::remove_var("TAP_AGENTZ_LOG_LEVEL");
    std::env::remove_var("TEST_AGENTZ_KEY");
}

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn expect_config_error(contents: &str) -> String {
    let file = write_config(contents);
    match load_config(file.path()) {
        Err(TapError::Configuration(msg)) => msg,
        other => panic!("expected configuration error, got {other:?}"),
    }
}

#[test]
fn test_load_minimal_config() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let file = write_config(r#"{"apiKey": "k1"}"#);
    let config = load_config(file.path()).unwrap();

    assert_eq!(config.api_key.expose_secret(), "k1");
    assert_eq!(config.base_url, DEFAULT_BASE_URL);
    assert_eq!(config.stream.as_str(), "AgentzSessions");
}

#[test]
fn test_missing_api_key_is_rejected() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let msg = expect_config_error(r#"{"stream": "AgentzSessions"}"#);
    assert!(msg.contains("apiKey"));
}

#[test]
fn test_empty_api_key_is_rejected() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let msg = expect_config_error(r#"{"apiKey": ""}"#);
    assert!(msg.contains("apiKey"));
}

#[test]
fn test_non_string_api_key_is_rejected() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    expect_config_error(r#"{"apiKey": 12345}"#);
}

#[test]
fn test_unparsable_file_is_rejected() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    expect_config_error("apiKey = k1");
}

#[test]
fn test_blank_stream_is_rejected() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    expect_config_error(r#"{"apiKey": "k1", "stream": ""}"#);
}

#[test]
fn test_env_substitution() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();
    std::env::set_var("TEST_AGENTZ_KEY", "from-substitution");

    let file = write_config(r#"{"apiKey": "${TEST_AGENTZ_KEY}"}"#);
    let config = load_config(file.path()).unwrap();
    assert_eq!(config.api_key.expose_secret(), "from-substitution");

    cleanup_env_vars();
}

#[test]
fn test_env_substitution_keeps_backslashes_and_quotes() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();
    std::env::set_var("TEST_AGENTZ_KEY", r#"ab\ncd"ef"#);

    let file = write_config(r#"{"apiKey": "${TEST_AGENTZ_KEY}"}"#);
    let config = load_config(file.path()).unwrap();
    assert_eq!(config.api_key.expose_secret(), r#"ab\ncd"ef"#);

    cleanup_env_vars();
}

#[test]
fn test_env_substitution_missing_var() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let msg = expect_config_error(r#"{"apiKey": "${TEST_AGENTZ_KEY}"}"#);
    assert!(msg.contains("TEST_AGENTZ_KEY"));
}

#[test]
fn test_env_overrides() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();
    std::env::set_var("TAP_AGENTZ_API_KEY", "override-key");
    std::env::set_var("TAP_AGENTZ_BASE_URL", "http://localhost:4010");
    std::env::set_var("TAP_AGENTZ_STREAM", "Deployments");

    let file = write_config(r#"{"apiKey": "file-key"}"#);
    let config = load_config(file.path()).unwrap();

    assert_eq!(config.api_key.expose_secret(), "override-key");
    assert_eq!(config.base_url, "http://localhost:4010");
    assert_eq!(config.stream.as_str(), "Deployments");

    cleanup_env_vars();
}

#[test]
fn test_env_api_key_satisfies_missing_file_key() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();
    std::env::set_var("TAP_AGENTZ_API_KEY", "env-only");

    let file = write_config("{}");
    let config = load_config(file.path()).unwrap();
    assert_eq!(config.api_key.expose_secret(), "env-only");

    cleanup_env_vars();
}

#[test]
fn test_uppercase_log_level_from_file() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let file = write_config(r#"{"apiKey": "k1", "logLevel": "WARN"}"#);
    let config = load_config(file.path()).unwrap();
    assert_eq!(config.log_level, "WARN");
}

#[test]
fn test_uppercase_log_level_from_env() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();
    std::env::set_var("TAP_AGENTZ_LOG_LEVEL", "DEBUG");

    let file = write_config(r#"{"apiKey": "k1"}"#);
    let config = load_config(file.path()).unwrap();
    assert_eq!(config.log_level, "DEBUG");

    cleanup_env_vars();
}

#[test]
fn test_whitespace_api_key_is_accepted() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let file = write_config(r#"{"apiKey": "  "}"#);
    let config = load_config(file.path()).unwrap();
    assert_eq!(config.api_key.expose_secret(), "  ");
}

#[test]
fn test_config_error_exit_code() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let err = load_config("/definitely/not/here.json").unwrap_err();
    assert_eq!(err.exit_code(), 2);
}
