//! Logging and observability
//!
//! stdout carries the record stream, so every log line goes to stderr (and,
//! optionally, to a rotating JSON file).
//!
//! # Example
//!
//! ```no_run
//! use tap_agentz::logging::init_logging;
//! use tap_agentz::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Tap started");
//! ```

pub mod structured;

// Re-export commonly used items
pub use structured::{init_logging, LoggingGuard};

/// Log the start of a sync
///
/// # Example
///
/// ```no_run
/// use tap_agentz::log_sync_start;
/// use tap_agentz::domain::StreamName;
/// use chrono::NaiveDate;
///
/// let stream = StreamName::default();
/// let start = NaiveDate::from_ymd_opt(2020, 8, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// log_sync_start!(&stream, start, end);
/// ```
#[macro_export]
macro_rules! log_sync_start {
    ($stream:expr, $start_date:expr, $end_date:expr) => {
        tracing::info!(
            stream = %$stream,
            start_date = %$start_date,
            end_date = %$end_date,
            "Starting sync"
        );
    };
}

/// Log the completion of a sync
///
/// # Example
///
/// ```no_run
/// use tap_agentz::log_sync_complete;
/// use std::time::Duration;
///
/// log_sync_complete!("AgentzSessions", 42, Duration::from_millis(850));
/// ```
#[macro_export]
macro_rules! log_sync_complete {
    ($stream:expr, $count:expr, $duration:expr) => {
        tracing::info!(
            stream = %$stream,
            count = $count,
            duration_ms = $duration.as_millis() as u64,
            "Sync completed"
        );
    };
}
