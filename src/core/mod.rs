//! Core business logic for the tap.
//!
//! # Modules
//!
//! - [`transform`] - Key normalization and envelope framing
//! - [`stream`] - Run orchestration: fetch, transform, emit
//!
//! # Example
//!
//! ```rust,no_run
//! use tap_agentz::config::load_config;
//! use tap_agentz::core::stream::StreamPipeline;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("config.json")?;
//! let pipeline = StreamPipeline::from_config(&config)?;
//!
//! let mut stdout = tokio::io::stdout();
//! let summary = pipeline.run(&mut stdout).await?;
//! eprintln!("Emitted {} records", summary.records_emitted);
//! # Ok(())
//! # }
//! ```

pub mod stream;
pub mod transform;
