// tap-agentz - Agentz deployment report tap
// Copyright (c) 2025 Tap Agentz Contributors
// Licensed under the MIT License

use clap::Parser;
use std::process;
use tap_agentz::cli::{run, Cli};
use tap_agentz::domain::TapError;

/// Exit status after Ctrl+C
const EXIT_INTERRUPTED: i32 = 130;

#[tokio::main]
async fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    // Missing --config exits here with clap's usage error
    let cli = Cli::parse();

    let exit_code = tokio::select! {
        result = run::execute(&cli) => match result {
            Ok(_) => 0,
            Err(e) => {
                eprintln!("Error: {e:#}");
                e.downcast_ref::<TapError>()
                    .map(TapError::exit_code)
                    .unwrap_or(1)
            }
        },
        Ok(()) = tokio::signal::ctrl_c() => {
            eprintln!("Interrupted, stopping without emitting further records");
            EXIT_INTERRUPTED
        }
    };

    process::exit(exit_code);
}
