//! Report source trait definition
//!
//! The stream pipeline only needs "give me the records for this date range".
//! `ReportSource` captures that so the pipeline runs against the Agentz HTTP
//! client in production and against fixed record sets in tests.

use crate::domain::{DateRange, RawRecord, Result};
use async_trait::async_trait;

/// Something that can produce the full record set for a date range
///
/// The whole set arrives before transformation begins; the upstream API is
/// neither paginated nor streamed.
#[async_trait]
pub trait ReportSource: Send + Sync {
    /// Fetch every record for `range`, in upstream order
    ///
    /// # Errors
    ///
    /// Returns `TapError::Report` when the request fails or the response is
    /// not a record set.
    async fn fetch_report(&self, range: &DateRange) -> Result<Vec<RawRecord>>;

    /// Where the records come from, for logs
    fn source_url(&self) -> &str;
}
