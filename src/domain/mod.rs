//! Domain models and types for the tap.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Report inputs** ([`DateRange`], [`StreamName`])
//! - **Records and messages** ([`RawRecord`], [`NormalizedRecord`], [`Envelope`])
//! - **Error types** ([`TapError`], [`ReportError`])
//! - **Result type alias** ([`Result`])
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, TapError>`]:
//!
//! ```rust
//! use tap_agentz::domain::{DateRange, Result};
//! use chrono::NaiveDate;
//!
//! fn example() -> Result<DateRange> {
//!     let start = NaiveDate::from_ymd_opt(2020, 8, 1).unwrap();
//!     DateRange::through_today(start)
//! }
//! ```

pub mod date_range;
pub mod errors;
pub mod ids;
pub mod record;
pub mod result;

// Re-export commonly used types for convenience
pub use date_range::{default_start_date, DateRange, START_DATE};
pub use errors::{ReportError, TapError};
pub use ids::{StreamName, DEFAULT_STREAM};
pub use record::{
    records_from_body, Envelope, MessageType, NormalizedRecord, RawRecord, DATE_UPDATED_KEY,
};
pub use result::Result;
