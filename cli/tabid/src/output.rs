//! Output formatting for CLI commands.

use std::str::FromStr;

use clap::ValueEnum;
use colored::Colorize;
use serde::Serialize;
use serde_json::Value;
use tabid_validators::{CredentialKind, PREFIX_LENGTH};
use tabled::{Table, Tabled};

use crate::error::CliError;

/// Output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format.
    #[default]
    Table,
    /// JSON format.
    Json,
}

impl FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            _ => Err(CliError::UnknownFormat(s.to_string())),
        }
    }
}

/// Print a report in the specified format.
///
/// `valid` is the overall outcome of the run.
pub fn print_report<T: Serialize + Tabled>(rows: &[T], valid: bool, format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            if rows.is_empty() {
                println!("{}", "No values to check.".dimmed());
                return;
            }
            println!("{}", Table::new(rows));
            if valid {
                println!("{}", "All values valid.".green().bold());
            } else {
                println!("{}", "Some values are invalid.".red().bold());
            }
        }
        OutputFormat::Json => println!("{}", format_report(rows, valid)),
    }
}

/// Render a report as pretty JSON.
pub fn format_report<T: Serialize>(rows: &[T], valid: bool) -> String {
    let report = serde_json::json!({
        "valid": valid,
        "results": serde_json::to_value(rows).unwrap_or_else(|_| serde_json::json!([])),
    });
    serde_json::to_string_pretty(&report).unwrap_or_else(|_| "{}".to_string())
}

/// Redact a secret for display, keeping only its type prefix.
pub fn redact(secret: &str) -> String {
    match secret.get(..PREFIX_LENGTH) {
        Some(prefix) if secret.len() > PREFIX_LENGTH => format!("{prefix}…"),
        _ => "[REDACTED]".to_string(),
    }
}

/// Whether `text` could be an API key, well-formed or not.
fn looks_like_api_key(text: &str) -> bool {
    text.starts_with(CredentialKind::ApiKey.prefix())
}

/// Render a raw string for display, redacting secrets and anything that
/// looks like an API key.
pub fn display_text(text: &str, secret: bool) -> String {
    if secret || looks_like_api_key(text) {
        redact(text)
    } else {
        text.to_string()
    }
}

/// Render a checked value for display.
///
/// Strings are redacted like [`display_text`]. When the values were given as
/// JSON literals (`json`), strings keep their quotes so `234` and `"234"` stay
/// distinguishable; other JSON values always use their JSON form.
pub fn display_value(value: &Value, secret: bool, json: bool) -> String {
    match value {
        Value::String(s) if secret || looks_like_api_key(s) => redact(s),
        Value::String(s) if !json => s.clone(),
        other => other.to_string(),
    }
}
