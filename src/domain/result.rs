//! Result type alias for the tap

use super::errors::TapError;

/// Result type alias for tap operations
///
/// # Examples
///
/// ```
/// use tap_agentz::domain::result::Result;
/// use tap_agentz::domain::errors::TapError;
///
/// fn failing_function() -> Result<()> {
///     Err(TapError::Sink("stdout closed".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, TapError>;
