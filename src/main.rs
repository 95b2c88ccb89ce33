//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `csv_convert` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use csv_convert::config::{Cli, Command};
use csv_convert::initialization::init_logger_with;
use csv_convert::{export_to_file, run_server, ExportOptions, ServerConfig};

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine; variables may come from the environment
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    init_logger_with(cli.log_level.clone().into(), cli.log_format.clone())
        .context("Failed to initialize logger")?;

    let result = match cli.command {
        Command::Serve(args) => run_server(ServerConfig::from(args)).await,
        Command::Export(args) => {
            let opts = ExportOptions::from(args);
            export_to_file(&opts).await.map(|count| {
                if let Some(output) = &opts.output {
                    eprintln!("Exported {} rows to {}", count, output.display());
                }
            })
        }
    };

    if let Err(e) = result {
        eprintln!("csv_convert error: {:#}", e);
        process::exit(1);
    }
    Ok(())
}
