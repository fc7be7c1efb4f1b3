//! Configuration management for the tap.
//!
//! # Overview
//!
//! The tap reads one JSON config file per run, with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `TAP_AGENTZ_*` environment overrides
//! - Default values for everything except `apiKey`
//! - Validation before any network activity
//!
//! # Example Configuration
//!
//! ```json
//! {
//!   "apiKey": "${AGENTZ_API_KEY}",
//!   "stream": "AgentzSessions",
//!   "startDate": "2020-08-01",
//!   "logging": { "localEnabled": true, "localPath": "./logs" }
//! }
//! ```
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use tap_agentz::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("config.json")?;
//! println!("Reporting API: {}", config.base_url);
//! # Ok(())
//! # }
//! ```

pub mod loader;
pub mod schema;
pub mod secret;

// Re-export commonly used types
pub use loader::load_config;
pub use schema::{LoggingConfig, TapConfig, DEFAULT_BASE_URL};
pub use secret::{secret_string, SecretString, SecretValue};
