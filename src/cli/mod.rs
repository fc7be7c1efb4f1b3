//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for the tap using clap.

pub mod run;

use clap::Parser;

/// tap-agentz - stream the Agentz deployment report as JSON lines
#[derive(Parser, Debug)]
#[command(name = "tap-agentz")]
#[command(version, about, long_about = None)]
#[command(author = "Tap Agentz Contributors")]
pub struct Cli {
    /// Path to the JSON configuration file
    #[arg(short, long, env = "TAP_AGENTZ_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error); overrides logLevel
    /// and TAP_AGENTZ_LOG_LEVEL
    #[arg(short, long)]
    pub log_level: Option<String>,
}
