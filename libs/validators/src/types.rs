//! Typed credentials and table references.
//!
//! Each credential type can only be constructed from a string its predicate
//! accepts, so holding one is proof the format was checked.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{define_credential, table_name_is_valid, Candidate, CredentialError};

// =============================================================================
// Credentials
// =============================================================================

define_credential!(ApiKey, ApiKey, redacted);
define_credential!(BaseId, BaseId);
define_credential!(TableId, TableId);
define_credential!(ViewId, ViewId);

// =============================================================================
// Table names
// =============================================================================

/// A human-readable table name. Any non-empty string.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TableName(String);

impl TableName {
    /// Parses a table name, rejecting the empty string.
    pub fn parse(s: &str) -> Result<Self, CredentialError> {
        Self::try_from(s.to_string())
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the wrapper and returns the inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl TryFrom<String> for TableName {
    type Error = CredentialError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        if !table_name_is_valid(&s) {
            return Err(CredentialError::InvalidTableName);
        }
        Ok(Self(s))
    }
}

impl From<TableName> for String {
    fn from(name: TableName) -> Self {
        name.0
    }
}

impl FromStr for TableName {
    type Err = CredentialError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for TableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TableName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Candidate for TableName {
    fn as_text(&self) -> Option<&str> {
        Some(&self.0)
    }
}

// =============================================================================
// Table references
// =============================================================================

/// A table addressed either by its stable id or by its name.
///
/// A string that is a well-formed table id is always read as an id, even if a
/// table happens to carry that exact name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TableRef {
    /// Addressed by table id.
    Id(TableId),
    /// Addressed by table name.
    Name(TableName),
}

impl TableRef {
    /// Parses a table reference, preferring the id form.
    pub fn parse(s: &str) -> Result<Self, CredentialError> {
        if let Ok(id) = TableId::parse(s) {
            return Ok(Self::Id(id));
        }
        TableName::parse(s).map(Self::Name)
    }

    /// Returns the reference as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            TableRef::Id(id) => id.as_str(),
            TableRef::Name(name) => name.as_str(),
        }
    }

    /// Returns true if the table is addressed by id.
    #[must_use]
    pub fn is_id(&self) -> bool {
        matches!(self, TableRef::Id(_))
    }
}

impl TryFrom<String> for TableRef {
    type Error = CredentialError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        if let Ok(id) = TableId::try_from(s.as_str()) {
            return Ok(Self::Id(id));
        }
        TableName::try_from(s).map(Self::Name)
    }
}

impl From<TableRef> for String {
    fn from(table: TableRef) -> Self {
        match table {
            TableRef::Id(id) => id.into_inner(),
            TableRef::Name(name) => name.into_inner(),
        }
    }
}

impl From<TableId> for TableRef {
    fn from(id: TableId) -> Self {
        Self::Id(id)
    }
}

impl From<TableName> for TableRef {
    fn from(name: TableName) -> Self {
        Self::Name(name)
    }
}

impl FromStr for TableRef {
    type Err = CredentialError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for TableRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CredentialKind;

    #[test]
    fn test_base_id_parse() {
        let id: BaseId = "app00000000000000".parse().unwrap();
        assert_eq!(id.as_str(), "app00000000000000");
        assert_eq!(id.to_string(), "app00000000000000");
    }

    #[test]
    fn test_base_id_invalid() {
        let result: Result<BaseId, _> = "apq00000000000000".parse();
        assert_eq!(
            result.unwrap_err(),
            CredentialError::Invalid {
                kind: CredentialKind::BaseId
            }
        );
    }

    #[test]
    fn test_prefix_and_kind_constants() {
        assert_eq!(ApiKey::PREFIX, "key");
        assert_eq!(BaseId::PREFIX, "app");
        assert_eq!(TableId::PREFIX, "tbl");
        assert_eq!(ViewId::PREFIX, "viw");
        assert_eq!(ViewId::KIND, CredentialKind::ViewId);
    }

    #[test]
    fn test_typed_ids_reject_other_kinds() {
        assert!(TableId::parse("viw00000000000000").is_err());
        assert!(ViewId::parse("tbl00000000000000").is_err());
        assert!(ApiKey::parse("app00000000000000").is_err());
    }

    #[test]
    fn test_try_from_string_keeps_allocation() {
        let raw = String::from("tbl0123456789abcd");
        let id = TableId::try_from(raw).unwrap();
        assert_eq!(String::from(id), "tbl0123456789abcd");
    }

    #[test]
    fn test_api_key_debug_is_redacted() {
        let key = ApiKey::parse("keySuperSecret123").unwrap();
        let debug = format!("{key:?}");
        assert_eq!(debug, "ApiKey(key…)");
        assert!(!debug.contains("SuperSecret"));
    }

    #[test]
    fn test_view_id_debug_is_not_redacted() {
        let id = ViewId::parse("viw00000000000000").unwrap();
        assert_eq!(format!("{id:?}"), "ViewId(\"viw00000000000000\")");
    }

    #[test]
    fn test_typed_id_json_roundtrip() {
        let id = TableId::parse("tblAAAAAAAAAAAAAA").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"tblAAAAAAAAAAAAAA\"");
        let parsed: TableId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_typed_id_deserialize_validates() {
        let result: Result<BaseId, _> = serde_json::from_str("\"app0000\"");
        let err = result.unwrap_err().to_string();
        assert!(err.contains("invalid base id"), "unexpected error: {err}");
        assert!(serde_json::from_str::<BaseId>("234").is_err());
    }

    #[test]
    fn test_typed_ids_are_candidates() {
        let id = TableId::parse("tbl00000000000000").unwrap();
        assert!(crate::table_id_is_valid(&id));
        assert!(!crate::view_id_is_valid(&id));
    }

    #[test]
    fn test_table_name() {
        let name = TableName::parse("Table Name").unwrap();
        assert_eq!(name.as_str(), "Table Name");
        assert_eq!(TableName::parse(""), Err(CredentialError::InvalidTableName));
        assert!(TableName::parse("   ").is_ok());
    }

    #[test]
    fn test_table_name_deserialize_rejects_empty() {
        assert!(serde_json::from_str::<TableName>("\"\"").is_err());
        assert!(serde_json::from_str::<TableName>("null").is_err());
        let name: TableName = serde_json::from_str("\"Projects\"").unwrap();
        assert_eq!(name.as_str(), "Projects");
    }

    #[test]
    fn test_table_ref_prefers_id() {
        let table = TableRef::parse("tbl00000000000000").unwrap();
        assert!(table.is_id());

        let table = TableRef::parse("Table Name").unwrap();
        assert!(!table.is_id());
        assert_eq!(table.as_str(), "Table Name");
    }

    #[test]
    fn test_table_ref_malformed_id_is_a_name() {
        // Almost an id, but one character short: still a valid name.
        let table = TableRef::parse("tbl0000000000000").unwrap();
        assert_eq!(
            table,
            TableRef::Name(TableName::parse("tbl0000000000000").unwrap())
        );
    }

    #[test]
    fn test_table_ref_rejects_empty() {
        assert_eq!(TableRef::parse(""), Err(CredentialError::InvalidTableName));
    }

    #[test]
    fn test_table_ref_json_roundtrip() {
        let table: TableRef = serde_json::from_str("\"tbl00000000000000\"").unwrap();
        assert!(table.is_id());
        assert_eq!(
            serde_json::to_string(&table).unwrap(),
            "\"tbl00000000000000\""
        );
    }
}
