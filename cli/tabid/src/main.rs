//! tabid - check tabular-data service credentials from the command line.
//!
//! Validates the format of API keys, base/table/view ids, and table names.
//! Nothing is sent over the network: a passing value is well-formed, not
//! necessarily authorized.

use anyhow::Result;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;
mod output;

use commands::Cli;
use config::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match Config::from_env(cli.format()) {
        Ok(config) => config,
        Err(e) => {
            error::print_error(&e);
            std::process::exit(1);
        }
    };

    // Logs go to stderr so stdout only carries the report (prefer RUST_LOG,
    // fallback to TABID_LOG_LEVEL)
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| config.log_level.clone().into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    debug!(format = ?config.format, "Configuration loaded");

    match cli.run(config) {
        Ok(true) => Ok(()),
        Ok(false) => std::process::exit(1),
        Err(e) => {
            error::print_error(&e);
            std::process::exit(1);
        }
    }
}
