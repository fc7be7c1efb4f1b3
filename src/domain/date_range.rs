//! Report date range
//!
//! The range is fixed once per run. `end_date` is "today" (UTC) at the moment
//! the range is built and is never recomputed, so every record of a run shares
//! the same `date_updated`.

use super::errors::TapError;
use super::result::Result;
use chrono::{NaiveDate, Utc};
use serde::Serialize;

/// Earliest date with meaningful Agentz data
pub const START_DATE: &str = "2020-08-01";

/// [`START_DATE`] as a date
pub fn default_start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 8, 1).unwrap_or(NaiveDate::MIN)
}

/// Inclusive date range sent as the report request body
///
/// Serializes as `{"startDate":"YYYY-MM-DD","endDate":"YYYY-MM-DD"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    start_date: NaiveDate,
    end_date: NaiveDate,
}

impl DateRange {
    /// Creates a range, requiring `start_date <= end_date`
    ///
    /// # Errors
    ///
    /// Returns `TapError::Configuration` if the start is after the end.
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Result<Self> {
        if start_date > end_date {
            return Err(TapError::Configuration(format!(
                "startDate {start_date} is after endDate {end_date}"
            )));
        }
        Ok(Self {
            start_date,
            end_date,
        })
    }

    /// Creates a range from `start_date` through today's UTC date
    ///
    /// # Examples
    ///
    /// ```
    /// use tap_agentz::domain::date_range::{default_start_date, DateRange};
    ///
    /// let range = DateRange::through_today(default_start_date()).unwrap();
    /// assert_eq!(range.start_date().to_string(), "2020-08-01");
    /// ```
    pub fn through_today(start_date: NaiveDate) -> Result<Self> {
        Self::new(start_date, Utc::now().date_naive())
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    /// End date in ISO-8601 form, the value injected as `date_updated`
    pub fn end_date_iso(&self) -> String {
        self.end_date.format("%Y-%m-%d").to_string()
    }
}
