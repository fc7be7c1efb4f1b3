//! External system integrations.
//!
//! - [`agentz`] - Agentz reporting API client
//! - [`traits`] - The [`ReportSource`](traits::ReportSource) seam the stream
//!   pipeline is written against
//!
//! # Example
//!
//! ```rust,no_run
//! use tap_agentz::adapters::agentz::AgentzClient;
//! use tap_agentz::adapters::traits::ReportSource;
//! use tap_agentz::config::TapConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = TapConfig::with_api_key("k1");
//! let client = AgentzClient::new(&config)?;
//! let records = client.fetch_report(&config.date_range()?).await?;
//! # Ok(())
//! # }
//! ```

pub mod agentz;
pub mod traits;
