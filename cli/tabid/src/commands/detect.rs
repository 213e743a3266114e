//! Detect the credential kind of each value.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use serde_json::Value;
use tabid_validators::CredentialKind;
use tabled::Tabled;
use tracing::{debug, info};

use super::{collect_values, decode_value, CommandContext};
use crate::output::{display_value, print_report};

#[derive(Debug, Args)]
pub struct DetectCommand {
    /// Values to inspect.
    #[arg(required_unless_present = "stdin")]
    values: Vec<String>,

    /// Parse each value as a JSON literal.
    #[arg(long)]
    json: bool,

    /// Read values from stdin, one per line.
    #[arg(long, conflicts_with = "values")]
    stdin: bool,
}

/// Detection result for one value.
#[derive(Debug, Serialize, Tabled)]
pub struct DetectRow {
    #[tabled(rename = "VALUE")]
    pub value: String,
    #[tabled(rename = "KIND")]
    #[tabled(display = "display_kind")]
    pub kind: Option<CredentialKind>,
}

fn display_kind(kind: &Option<CredentialKind>) -> String {
    kind.map_or_else(|| "-".to_string(), |k| k.as_str().to_string())
}

impl DetectCommand {
    /// Succeeds only when every value is some known credential.
    pub fn run(self, ctx: &CommandContext) -> Result<bool> {
        let raw_values = collect_values(self.values, self.stdin)?;
        info!(count = raw_values.len(), "Detecting credential kinds");

        let candidates = raw_values
            .iter()
            .map(|raw| decode_value(raw, self.json))
            .collect::<Result<Vec<_>, _>>()?;

        let rows = detect_all(&candidates, self.json);
        let valid = rows.iter().all(|row| row.kind.is_some());
        print_report(&rows, valid, ctx.format);
        Ok(valid)
    }
}

pub fn detect_all(candidates: &[Value], json: bool) -> Vec<DetectRow> {
    candidates
        .iter()
        .map(|candidate| {
            let kind = CredentialKind::detect(candidate);
            debug!(kind = ?kind, "Detected kind");
            DetectRow {
                value: display_value(candidate, kind.is_some_and(CredentialKind::is_secret), json),
                kind,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_detect_all() {
        let rows = detect_all(
            &[
                json!("app00000000000000"),
                json!("keyAbCdEf0123456x"),
                json!("Table Name"),
                json!(234),
            ],
            false,
        );
        let kinds: Vec<_> = rows.iter().map(|r| r.kind).collect();
        assert_eq!(
            kinds,
            vec![
                Some(CredentialKind::BaseId),
                Some(CredentialKind::ApiKey),
                None,
                None
            ]
        );
        assert_eq!(rows[1].value, "key…");
        assert_eq!(rows[2].value, "Table Name");
    }

    #[test]
    fn test_detect_row_json() {
        let rows = detect_all(&[json!("viw00000000000000"), json!("nope")], false);
        let json = serde_json::to_value(&rows).unwrap();
        assert_eq!(json[0]["kind"], json!("view-id"));
        assert_eq!(json[1]["kind"], json!(null));
    }

    #[test]
    fn test_detect_all_redacts_malformed_api_keys() {
        let near_misses = [json!("keySuperSecret1234"), json!("keySuperSecret12$")];
        let rows = detect_all(&near_misses, false);
        for row in &rows {
            assert_eq!(row.kind, None);
            assert_eq!(row.value, "key…");
        }
    }

    #[test]
    fn test_detect_all_quotes_json_strings() {
        let rows = detect_all(&[json!(234), json!("234")], true);
        assert_eq!(rows[0].value, "234");
        assert_eq!(rows[1].value, "\"234\"");
    }
}
