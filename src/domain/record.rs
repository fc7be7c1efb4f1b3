//! Report records and envelope messages
//!
//! Records are kept as `serde_json::Map`, which (with the `preserve_order`
//! feature) iterates in insertion order, so emitted keys follow the order the
//! API returned them in.

use super::errors::ReportError;
use super::ids::StreamName;
use serde::Serialize;
use serde_json::{Map, Value};

/// One flat record as returned by the reporting API
pub type RawRecord = Map<String, Value>;

/// A record with snake_case keys and the injected `date_updated` field
pub type NormalizedRecord = Map<String, Value>;

/// Key injected into every normalized record
pub const DATE_UPDATED_KEY: &str = "date_updated";

/// Kind of message written to the output stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MessageType {
    Record,
}

/// The unit emitted downstream, one per raw record
///
/// Serializes with keys in the order `type`, `stream`, `record`:
///
/// ```
/// use tap_agentz::domain::record::Envelope;
/// use tap_agentz::domain::ids::StreamName;
///
/// let stream = StreamName::default();
/// let envelope = Envelope::record(&stream, serde_json::Map::new());
/// let line = serde_json::to_string(&envelope).unwrap();
/// assert_eq!(line, r#"{"type":"RECORD","stream":"AgentzSessions","record":{}}"#);
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct Envelope<'a> {
    #[serde(rename = "type")]
    pub message_type: MessageType,
    pub stream: &'a str,
    pub record: NormalizedRecord,
}

impl<'a> Envelope<'a> {
    /// Wrap a normalized record as a RECORD message
    pub fn record(stream: &'a StreamName, record: NormalizedRecord) -> Self {
        Self {
            message_type: MessageType::Record,
            stream: stream.as_str(),
            record,
        }
    }
}

/// Turn a decoded response body into the ordered record set
///
/// - an array yields its elements in order; each must be an object
/// - a single object is a one-record report
/// - anything else is rejected
///
/// # Errors
///
/// Returns `ReportError::InvalidResponse` for a body that isn't a record set.
pub fn records_from_body(body: Value) -> Result<Vec<RawRecord>, ReportError> {
    match body {
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(index, item)| match item {
                Value::Object(record) => Ok(record),
                other => Err(ReportError::InvalidResponse(format!(
                    "record {index} is {}, expected an object",
                    describe(&other)
                ))),
            })
            .collect(),
        Value::Object(record) => Ok(vec![record]),
        other => Err(ReportError::InvalidResponse(format!(
            "response body is {}, expected an array of records",
            describe(&other)
        ))),
    }
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
