//! Stream identifier type with validation

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Stream emitted when the config doesn't name one
pub const DEFAULT_STREAM: &str = "AgentzSessions";

/// Stream name newtype wrapper
///
/// Labels which logical report the emitted records belong to. It is copied
/// verbatim into the `stream` field of every envelope.
///
/// # Examples
///
/// ```
/// use tap_agentz::domain::ids::StreamName;
/// use std::str::FromStr;
///
/// let stream = StreamName::from_str("AgentzSessions").unwrap();
/// assert_eq!(stream.as_str(), "AgentzSessions");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StreamName(String);

impl StreamName {
    /// Creates a new StreamName, rejecting blank names
    pub fn new(name: impl Into<String>) -> Result<Self, String> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err("Stream name cannot be empty".to_string());
        }
        Ok(Self(name))
    }

    /// Returns the stream name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for StreamName {
    fn default() -> Self {
        Self(DEFAULT_STREAM.to_string())
    }
}

impl fmt::Display for StreamName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for StreamName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for StreamName {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<StreamName> for String {
    fn from(name: StreamName) -> Self {
        name.0
    }
}

impl AsRef<str> for StreamName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
