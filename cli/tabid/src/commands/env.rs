//! Check credentials configured through the environment.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabid_validators::{CredentialKind, TableRef};
use tabled::Tabled;
use tracing::{debug, warn};

use super::CommandContext;
use crate::config::{Config, API_KEY_VAR, BASE_ID_VAR, TABLE_VAR, VIEW_ID_VAR};
use crate::output::{display_text, print_report};

#[derive(Debug, Args)]
pub struct EnvCommand {
    /// Treat unset variables as failures.
    #[arg(long)]
    require: bool,
}

/// Outcome for one variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EnvStatus {
    Valid,
    Invalid,
    NotSet,
}

impl std::fmt::Display for EnvStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            EnvStatus::Valid => "valid",
            EnvStatus::Invalid => "invalid",
            EnvStatus::NotSet => "not set",
        })
    }
}

/// One configured variable.
#[derive(Debug, Serialize, Tabled)]
pub struct EnvRow {
    #[tabled(rename = "VARIABLE")]
    pub variable: &'static str,
    #[tabled(rename = "VALUE")]
    pub value: String,
    #[tabled(rename = "KIND")]
    pub kind: &'static str,
    #[tabled(rename = "STATUS")]
    pub status: EnvStatus,
}

impl EnvCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<bool> {
        let rows = env_rows(&ctx.config);
        let valid = rows.iter().all(|row| match row.status {
            EnvStatus::Valid => true,
            EnvStatus::Invalid => false,
            EnvStatus::NotSet => !self.require,
        });
        print_report(&rows, valid, ctx.format);
        Ok(valid)
    }
}

/// Check every credential variable in `config`.
pub fn env_rows(config: &Config) -> Vec<EnvRow> {
    vec![
        credential_row(API_KEY_VAR, CredentialKind::ApiKey, config.api_key.as_deref()),
        credential_row(BASE_ID_VAR, CredentialKind::BaseId, config.base_id.as_deref()),
        table_row(config.table.as_deref()),
        credential_row(VIEW_ID_VAR, CredentialKind::ViewId, config.view_id.as_deref()),
    ]
}

fn credential_row(variable: &'static str, kind: CredentialKind, value: Option<&str>) -> EnvRow {
    let Some(value) = value else {
        debug!(variable, "Variable not set");
        return not_set(variable, kind.as_str());
    };

    let status = if kind.is_valid(value) {
        EnvStatus::Valid
    } else {
        warn!(variable, kind = %kind, "Malformed credential in environment");
        EnvStatus::Invalid
    };

    EnvRow {
        variable,
        value: display_text(value, kind.is_secret()),
        kind: kind.as_str(),
        status,
    }
}

/// The table variable holds either a table id or a table name.
fn table_row(value: Option<&str>) -> EnvRow {
    let Some(value) = value else {
        debug!(variable = TABLE_VAR, "Variable not set");
        return not_set(TABLE_VAR, "table");
    };

    let (kind, status) = match TableRef::parse(value) {
        Ok(TableRef::Id(_)) => (CredentialKind::TableId.as_str(), EnvStatus::Valid),
        Ok(TableRef::Name(_)) => ("table-name", EnvStatus::Valid),
        Err(_) => {
            warn!(variable = TABLE_VAR, "Empty table in environment");
            ("table", EnvStatus::Invalid)
        }
    };

    EnvRow {
        variable: TABLE_VAR,
        value: display_text(value, false),
        kind,
        status,
    }
}

fn not_set(variable: &'static str, kind: &'static str) -> EnvRow {
    EnvRow {
        variable,
        value: "-".to_string(),
        kind,
        status: EnvStatus::NotSet,
    }
}
