//! Check values against a single kind.

use std::fmt;

use anyhow::Result;
use clap::{Args, ValueEnum};
use serde::Serialize;
use serde_json::Value;
use tabid_validators::{
    api_key_is_valid, base_id_is_valid, table_id_is_valid, table_name_is_valid,
    view_id_is_valid, CredentialKind,
};
use tabled::Tabled;
use tracing::{debug, info};

use super::{collect_values, decode_value, CommandContext};
use crate::output::{display_value, print_report};

/// What a value is checked as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CheckKind {
    ApiKey,
    BaseId,
    TableId,
    ViewId,
    TableName,
}

impl CheckKind {
    /// Checks one candidate.
    pub fn check(self, candidate: &Value) -> bool {
        match self {
            CheckKind::ApiKey => api_key_is_valid(candidate),
            CheckKind::BaseId => base_id_is_valid(candidate),
            CheckKind::TableId => table_id_is_valid(candidate),
            CheckKind::ViewId => view_id_is_valid(candidate),
            CheckKind::TableName => table_name_is_valid(candidate),
        }
    }

    /// The credential kind behind this check, if it is a credential check.
    pub fn credential_kind(self) -> Option<CredentialKind> {
        match self {
            CheckKind::ApiKey => Some(CredentialKind::ApiKey),
            CheckKind::BaseId => Some(CredentialKind::BaseId),
            CheckKind::TableId => Some(CredentialKind::TableId),
            CheckKind::ViewId => Some(CredentialKind::ViewId),
            CheckKind::TableName => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        self.credential_kind()
            .map_or("table-name", CredentialKind::as_str)
    }

    fn is_secret(self) -> bool {
        self.credential_kind().is_some_and(CredentialKind::is_secret)
    }
}

impl fmt::Display for CheckKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Kind to check the values as.
    #[arg(value_enum)]
    kind: CheckKind,

    /// Values to check.
    #[arg(required_unless_present = "stdin")]
    values: Vec<String>,

    /// Parse each value as a JSON literal, so `234` is a number and `"234"` a string.
    #[arg(long)]
    json: bool,

    /// Read values from stdin, one per line.
    #[arg(long, conflicts_with = "values")]
    stdin: bool,
}

/// One checked value.
#[derive(Debug, Serialize, Tabled)]
pub struct CheckRow {
    #[tabled(rename = "VALUE")]
    pub value: String,
    #[tabled(rename = "KIND")]
    pub kind: &'static str,
    #[tabled(rename = "VALID")]
    pub valid: bool,
}

impl CheckCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<bool> {
        let raw_values = collect_values(self.values, self.stdin)?;
        info!(kind = %self.kind, count = raw_values.len(), "Checking values");

        let candidates = raw_values
            .iter()
            .map(|raw| decode_value(raw, self.json))
            .collect::<Result<Vec<_>, _>>()?;

        let rows = check_all(self.kind, &candidates, self.json);
        let valid = rows.iter().all(|row| row.valid);
        print_report(&rows, valid, ctx.format);
        Ok(valid)
    }
}

/// Check every candidate, producing display-ready rows.
pub fn check_all(kind: CheckKind, candidates: &[Value], json: bool) -> Vec<CheckRow> {
    candidates
        .iter()
        .map(|candidate| {
            let valid = kind.check(candidate);
            debug!(kind = %kind, valid, "Checked value");
            CheckRow {
                value: display_value(candidate, kind.is_secret(), json),
                kind: kind.as_str(),
                valid,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_check_kinds() {
        assert!(CheckKind::ApiKey.check(&json!("key00000000000000")));
        assert!(CheckKind::BaseId.check(&json!("app00000000000000")));
        assert!(CheckKind::TableId.check(&json!("tbl00000000000000")));
        assert!(CheckKind::ViewId.check(&json!("viw00000000000000")));
        assert!(CheckKind::TableName.check(&json!("Table Name")));

        assert!(!CheckKind::TableId.check(&json!("tbl0000000000000$")));
        assert!(!CheckKind::TableName.check(&json!("")));
    }

    #[test]
    fn test_non_strings_fail_every_kind() {
        for kind in CheckKind::value_variants() {
            for candidate in [json!(true), json!(234), json!(null), json!({ "key": "value" })] {
                assert!(!kind.check(&candidate), "{kind} accepted {candidate}");
            }
        }
    }

    #[test]
    fn test_check_all_redacts_api_keys() {
        let rows = check_all(
            CheckKind::ApiKey,
            &[json!("keySuperSecret123"), json!("kei00000000000000")],
            false,
        );
        assert_eq!(rows[0].value, "key…");
        assert!(rows[0].valid);
        assert_eq!(rows[1].value, "kei…");
        assert!(!rows[1].valid);
    }

    #[test]
    fn test_check_all_shows_ids_verbatim() {
        let rows = check_all(
            CheckKind::BaseId,
            &[json!("app00000000000000"), json!(234)],
            false,
        );
        assert_eq!(rows[0].value, "app00000000000000");
        assert_eq!(rows[0].kind, "base-id");
        assert_eq!(rows[1].value, "234");
        assert!(!rows[1].valid);
    }

    #[test]
    fn test_check_all_redacts_key_like_values_for_any_kind() {
        let near_misses = [json!("keySuperSecret1234"), json!("keySuperSecret12$")];
        for kind in [CheckKind::BaseId, CheckKind::TableName] {
            let rows = check_all(kind, &near_misses, false);
            assert!(rows.iter().all(|row| row.value == "key…"), "{kind} leaked a key");
        }
    }

    #[test]
    fn test_check_all_json_keeps_string_quotes() {
        let rows = check_all(CheckKind::TableName, &[json!(234), json!("234")], true);
        assert_eq!((rows[0].value.as_str(), rows[0].valid), ("234", false));
        assert_eq!((rows[1].value.as_str(), rows[1].valid), ("\"234\"", true));
    }
}
