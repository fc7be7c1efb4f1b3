//! Record transformation
//!
//! Converts raw report records into the envelope lines written downstream:
//!
//! 1. every key is rewritten with [`to_snake_case`], values are untouched
//! 2. `date_updated` is set to the run's end date
//! 3. the record is wrapped as `{"type":"RECORD","stream":...,"record":...}`

pub mod snake_case;

pub use snake_case::to_snake_case;

use crate::domain::{
    DateRange, Envelope, NormalizedRecord, RawRecord, Result, StreamName, DATE_UPDATED_KEY,
};
use serde_json::Value;

/// Normalizes records for one run
///
/// Holds the run's `date_updated` value so every record of the run gets the
/// same one.
#[derive(Debug, Clone)]
pub struct RecordTransformer {
    date_updated: String,
}

impl RecordTransformer {
    /// Create a transformer stamping `range`'s end date on every record
    pub fn new(range: &DateRange) -> Self {
        Self {
            date_updated: range.end_date_iso(),
        }
    }

    /// Snake-case every key and inject `date_updated`
    ///
    /// If two raw keys normalize to the same name, the later value wins. An
    /// existing `date_updated` (raw or produced by renaming) is overwritten.
    pub fn normalize_record(&self, raw: RawRecord) -> NormalizedRecord {
        let mut record = NormalizedRecord::with_capacity(raw.len() + 1);
        for (key, value) in raw {
            record.insert(to_snake_case(&key), value);
        }
        record.insert(
            DATE_UPDATED_KEY.to_string(),
            Value::String(self.date_updated.clone()),
        );
        record
    }

    /// Build the envelope for one raw record
    pub fn envelope<'a>(&self, stream: &'a StreamName, raw: RawRecord) -> Envelope<'a> {
        Envelope::record(stream, self.normalize_record(raw))
    }

    /// Serialize one raw record as a newline-terminated JSON message
    ///
    /// # Errors
    ///
    /// Returns `TapError::Serialization` if the envelope cannot be encoded.
    pub fn format_message(&self, stream: &StreamName, raw: RawRecord) -> Result<Vec<u8>> {
        let mut line = serde_json::to_vec(&self.envelope(stream, raw))?;
        line.push(b'\n');
        Ok(line)
    }
}
