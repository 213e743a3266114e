//! Error type for the typed credential layer.

use thiserror::Error;

use crate::CredentialKind;

/// A value was rejected while building a typed credential or table name.
///
/// Only the kind of value is reported, never the reason it failed.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CredentialError {
    /// The value is not a well-formed credential of this kind.
    #[error("invalid {kind}")]
    Invalid { kind: CredentialKind },

    /// The value is not a usable table name.
    #[error("invalid table name")]
    InvalidTableName,
}

impl CredentialError {
    /// Returns the credential kind that was rejected, if any.
    pub fn kind(&self) -> Option<CredentialKind> {
        match self {
            CredentialError::Invalid { kind } => Some(*kind),
            CredentialError::InvalidTableName => None,
        }
    }

    /// Returns true if this error came from a table name.
    pub fn is_table_name(&self) -> bool {
        matches!(self, CredentialError::InvalidTableName)
    }
}

/// A credential kind name that is not one of the known kinds.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown credential kind '{0}' (expected api-key, base-id, table-id or view-id)")]
pub struct UnknownKind(pub String);
