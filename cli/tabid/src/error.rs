//! Error handling and display for the CLI.

use colored::Colorize;
use thiserror::Error;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("'{input}' is not a JSON value")]
    InvalidJson {
        input: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("unknown output format '{0}'")]
    UnknownFormat(String),

    #[error("failed to read values from stdin: {0}")]
    Stdin(#[from] std::io::Error),
}

/// Print an error in a user-friendly format.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {}", "Error:".red().bold(), err);

    for cause in err.chain().skip(1) {
        eprintln!("  {} {}", "caused by:".dimmed(), cause);
    }

    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        match cli_err {
            CliError::InvalidJson { .. } => {
                eprintln!(
                    "\n{}",
                    "Hint: with --json, strings must be quoted, e.g. '\"key00000000000000\"'."
                        .yellow()
                );
            }
            CliError::UnknownFormat(_) => {
                eprintln!("\n{}", "Hint: use 'table' or 'json'.".yellow());
            }
            CliError::Stdin(_) => {}
        }
    }
}
