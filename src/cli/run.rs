//! Tap run command
//!
//! Loads the config, brings up logging, then streams the report to stdout.

use super::Cli;
use crate::config::load_config;
use crate::core::stream::{StreamPipeline, SyncSummary};
use crate::logging::init_logging;

/// Execute one tap run, writing records to stdout
///
/// Configuration problems surface before any network activity.
pub async fn execute(cli: &Cli) -> anyhow::Result<SyncSummary> {
    let mut config = load_config(&cli.config)?;

    if let Some(level) = &cli.log_level {
        config.log_level = level.clone();
    }

    let _guard = init_logging(&config.log_level, &config.logging)?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        config_path = %cli.config,
        "tap-agentz starting"
    );

    let pipeline = StreamPipeline::from_config(&config)?;

    let mut stdout = tokio::io::stdout();
    let summary = pipeline.run(&mut stdout).await?;

    tracing::info!(
        stream = %summary.stream,
        records = summary.records_emitted,
        bytes = summary.bytes_written,
        records_per_sec = summary.throughput(),
        "Run finished"
    );

    Ok(summary)
}
