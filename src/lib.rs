// tap-agentz - Agentz deployment report tap
// Copyright (c) 2025 Tap Agentz Contributors
// Licensed under the MIT License

//! # tap-agentz
//!
//! A tap that pulls the Agentz deployment report for a date range and writes
//! every record to a sink as a line-delimited JSON RECORD message.
//!
//! ## Overview
//!
//! - **Extract** the whole report with one `POST /iam/v1/deploymentreport`
//! - **Transform** each record: snake_case keys plus `date_updated`
//! - **Emit** `{"type":"RECORD","stream":...,"record":{...}}` lines, awaiting
//!   the sink after each one
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Transformation and stream orchestration
//! - [`adapters`] - Agentz reporting API client
//! - [`domain`] - Records, envelopes, date range, errors
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tap_agentz::config::load_config;
//! use tap_agentz::core::stream::StreamPipeline;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config("config.json")?;
//!     let pipeline = StreamPipeline::from_config(&config)?;
//!
//!     let mut stdout = tokio::io::stdout();
//!     let summary = pipeline.run(&mut stdout).await?;
//!
//!     eprintln!("Emitted {} records", summary.records_emitted);
//!     Ok(())
//! }
//! ```
//!
//! ## Output
//!
//! ```text
//! {"type":"RECORD","stream":"AgentzSessions","record":{"user_name":"a","total_number_of_sessions":5,"date_updated":"2024-05-17"}}
//! ```
//!
//! ## Error Handling
//!
//! Every failure is a [`domain::TapError`]: configuration, report request,
//! or sink. A run either emits all records or ends with one of these.

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
