//! CLI configuration (env-driven).
//!
//! Handles:
//! - Log level and default output format
//! - Credentials checked by `tabid env`

use anyhow::{Context, Result};

use crate::output::OutputFormat;

/// Env var holding the API key.
pub const API_KEY_VAR: &str = "TABID_API_KEY";

/// Env var holding the base id.
pub const BASE_ID_VAR: &str = "TABID_BASE_ID";

/// Env var holding the table, by id or by name.
pub const TABLE_VAR: &str = "TABID_TABLE";

/// Env var holding the view id.
pub const VIEW_ID_VAR: &str = "TABID_VIEW_ID";

/// CLI configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Default output format when `--format` is not given.
    pub format: OutputFormat,

    /// API key to check.
    pub api_key: Option<String>,

    /// Base id to check.
    pub base_id: Option<String>,

    /// Table id or table name to check.
    pub table: Option<String>,

    /// View id to check.
    pub view_id: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// An explicit `--format` wins over `TABID_FORMAT`, which is then not read.
    pub fn from_env(format_flag: Option<OutputFormat>) -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok(), format_flag)
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F, format_flag: Option<OutputFormat>) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_level = lookup("TABID_LOG_LEVEL").unwrap_or_else(|| "warn".to_string());

        let format = match format_flag {
            Some(format) => format,
            None => lookup("TABID_FORMAT")
                .map(|v| v.parse::<OutputFormat>())
                .transpose()
                .context("TABID_FORMAT must be 'table' or 'json'.")?
                .unwrap_or_default(),
        };

        Ok(Self {
            log_level,
            format,
            api_key: lookup(API_KEY_VAR),
            base_id: lookup(BASE_ID_VAR),
            table: lookup(TABLE_VAR),
            view_id: lookup(VIEW_ID_VAR),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup_from(&[]), None).unwrap();
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.format, OutputFormat::Table);
        assert!(config.api_key.is_none());
        assert!(config.table.is_none());
    }

    #[test]
    fn test_reads_credentials_and_format() {
        let vars = lookup_from(&[
            ("TABID_FORMAT", "json"),
            ("TABID_LOG_LEVEL", "debug"),
            (API_KEY_VAR, "key00000000000000"),
            (TABLE_VAR, "Projects"),
        ]);
        let config = Config::from_lookup(vars, None).unwrap();
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.api_key.as_deref(), Some("key00000000000000"));
        assert_eq!(config.table.as_deref(), Some("Projects"));
        assert!(config.base_id.is_none());
    }

    #[test]
    fn test_unknown_format_is_an_error() {
        let vars = lookup_from(&[("TABID_FORMAT", "yaml")]);
        let err = Config::from_lookup(vars, None).unwrap_err();
        assert!(err.to_string().contains("TABID_FORMAT"));
    }

    #[test]
    fn test_format_flag_overrides_bad_env_format() {
        let vars = lookup_from(&[("TABID_FORMAT", "yaml"), (API_KEY_VAR, "key00000000000000")]);
        let config = Config::from_lookup(vars, Some(OutputFormat::Json)).unwrap();
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.api_key.as_deref(), Some("key00000000000000"));
    }
}
