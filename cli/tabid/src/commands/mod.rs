//! CLI commands.

mod check;
mod detect;
mod env;

use std::io::BufRead;

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde_json::Value;

use crate::config::Config;
use crate::error::CliError;
use crate::output::OutputFormat;

/// tabid - Check the format of tabular-data service credentials.
#[derive(Debug, Parser)]
#[command(name = "tabid")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format (table or json). Defaults to TABID_FORMAT, then table.
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Check values against one credential kind or as table names.
    Check(check::CheckCommand),

    /// Report which credential kind each value is, if any.
    Detect(detect::DetectCommand),

    /// Check the credentials configured through TABID_* variables.
    Env(env::EnvCommand),
}

impl Cli {
    /// The `--format` flag, if given.
    pub fn format(&self) -> Option<OutputFormat> {
        self.format
    }

    /// Run the CLI command.
    ///
    /// Returns whether every checked value was valid.
    pub fn run(self, config: Config) -> Result<bool> {
        let ctx = CommandContext {
            format: self.format.unwrap_or(config.format),
            config,
        };

        match self.command {
            Commands::Check(cmd) => cmd.run(&ctx),
            Commands::Detect(cmd) => cmd.run(&ctx),
            Commands::Env(cmd) => cmd.run(&ctx),
        }
    }
}

/// Context passed to all commands.
pub struct CommandContext {
    pub config: Config,
    pub format: OutputFormat,
}

/// Collect the raw values to work on, from arguments or stdin.
fn collect_values(values: Vec<String>, stdin: bool) -> Result<Vec<String>> {
    if !stdin {
        return Ok(values);
    }

    let lines = std::io::stdin()
        .lock()
        .lines()
        .collect::<Result<Vec<_>, _>>()
        .map_err(CliError::Stdin)?;
    Ok(lines)
}

/// Turn a raw value into a candidate.
///
/// Without `json`, every value is a string. With it, values are JSON literals
/// so numbers, booleans, null and objects can be checked too.
fn decode_value(raw: &str, json: bool) -> Result<Value, CliError> {
    if !json {
        return Ok(Value::String(raw.to_string()));
    }

    serde_json::from_str(raw).map_err(|source| CliError::InvalidJson {
        input: raw.to_string(),
        source,
    })
}
