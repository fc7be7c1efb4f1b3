//! Agentz reporting API client
//!
//! Sends the single deployment-report request for a run:
//!
//! ```text
//! POST {base_url}/iam/v1/deploymentreport
//! apiKey: <key>
//! {"startDate": "2020-08-01", "endDate": "<today>"}
//! ```
//!
//! There is no retry and no request timeout beyond the transport default.

use crate::adapters::traits::ReportSource;
use crate::config::{SecretString, TapConfig};
use crate::domain::{records_from_body, DateRange, RawRecord, ReportError, Result, TapError};
use async_trait::async_trait;
use reqwest::{Client, ClientBuilder, StatusCode};
use secrecy::ExposeSecret;
use serde_json::Value;

/// Path of the deployment report below the API origin
pub const REPORT_PATH: &str = "/iam/v1/deploymentreport";

/// Header carrying the API key
pub const API_KEY_HEADER: &str = "apiKey";

/// Agentz reporting API client
///
/// # Example
///
/// ```no_run
/// use tap_agentz::adapters::agentz::AgentzClient;
/// use tap_agentz::adapters::traits::ReportSource;
/// use tap_agentz::config::TapConfig;
///
/// # async fn example() -> tap_agentz::domain::Result<()> {
/// let config = TapConfig::with_api_key("k1");
/// let client = AgentzClient::new(&config)?;
/// let records = client.fetch_report(&config.date_range()?).await?;
/// println!("{} records", records.len());
/// # Ok(())
/// # }
/// ```
pub struct AgentzClient {
    /// Full report URL
    report_url: String,

    /// HTTP client for making requests
    client: Client,

    /// Key sent in the `apiKey` header
    api_key: SecretString,
}

impl AgentzClient {
    /// Create a client from the run configuration
    ///
    /// # Errors
    ///
    /// Returns `TapError::Configuration` if the HTTP client cannot be built.
    pub fn new(config: &TapConfig) -> Result<Self> {
        let client = ClientBuilder::new()
            .user_agent(concat!("tap-agentz/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| TapError::Configuration(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            report_url: report_url(&config.base_url),
            client,
            api_key: config.api_key.clone(),
        })
    }
}

#[async_trait]
impl ReportSource for AgentzClient {
    async fn fetch_report(&self, range: &DateRange) -> Result<Vec<RawRecord>> {
        tracing::info!(
            url = %self.report_url,
            start_date = %range.start_date(),
            end_date = %range.end_date(),
            "Requesting Agentz deployment report"
        );

        let api_key: &str = self.api_key.expose_secret().as_ref();
        let response = self
            .client
            .post(&self.report_url)
            .header(API_KEY_HEADER, api_key)
            .json(range)
            .send()
            .await
            .map_err(|e| ReportError::ConnectionFailed(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ReportError::ConnectionFailed(e.to_string()))?;

        if status != StatusCode::OK {
            tracing::error!(
                status_code = status.as_u16(),
                response = %body,
                "Failed to make Agentz API request"
            );
            return Err(ReportError::RequestFailed {
                status: status.as_u16(),
                message: error_message(&body),
            }
            .into());
        }

        let body: Value = serde_json::from_str(&body).map_err(|e| {
            ReportError::InvalidResponse(format!("response body is not JSON: {e}"))
        })?;

        let records = records_from_body(body)?;
        tracing::debug!(count = records.len(), "Received report records");
        Ok(records)
    }

    fn source_url(&self) -> &str {
        &self.report_url
    }
}

/// Join the API origin and the report path
fn report_url(base_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), REPORT_PATH)
}

/// The `message` field of an error body, or empty
fn error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(Value::as_str).map(str::to_string))
        .unwrap_or_default()
}
