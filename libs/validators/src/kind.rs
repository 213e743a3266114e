//! The four prefixed credential kinds.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UnknownKind;
use crate::validate::{API_KEY_PREFIX, BASE_ID_PREFIX, TABLE_ID_PREFIX, VIEW_ID_PREFIX};
use crate::{validate, Candidate};

/// A kind of prefixed credential.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CredentialKind {
    /// API key, `key` prefix.
    ApiKey,
    /// Base (workspace) id, `app` prefix.
    BaseId,
    /// Table id, `tbl` prefix.
    TableId,
    /// View id, `viw` prefix.
    ViewId,
}

impl CredentialKind {
    /// Every kind.
    pub const ALL: [CredentialKind; 4] = [
        CredentialKind::ApiKey,
        CredentialKind::BaseId,
        CredentialKind::TableId,
        CredentialKind::ViewId,
    ];

    /// The literal prefix credentials of this kind start with.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            CredentialKind::ApiKey => API_KEY_PREFIX,
            CredentialKind::BaseId => BASE_ID_PREFIX,
            CredentialKind::TableId => TABLE_ID_PREFIX,
            CredentialKind::ViewId => VIEW_ID_PREFIX,
        }
    }

    /// Kebab-case name, as used on the command line and in JSON.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            CredentialKind::ApiKey => "api-key",
            CredentialKind::BaseId => "base-id",
            CredentialKind::TableId => "table-id",
            CredentialKind::ViewId => "view-id",
        }
    }

    /// Checks the format of `candidate` against this kind's prefix.
    pub fn is_valid<C: Candidate + ?Sized>(self, candidate: &C) -> bool {
        validate(self.prefix(), candidate)
    }

    /// Returns the kind whose format `candidate` matches.
    ///
    /// Prefixes are distinct, so at most one kind can match.
    pub fn detect<C: Candidate + ?Sized>(candidate: &C) -> Option<CredentialKind> {
        Self::ALL.into_iter().find(|kind| kind.is_valid(candidate))
    }

    /// Whether values of this kind are secrets that must not be echoed.
    #[must_use]
    pub const fn is_secret(self) -> bool {
        matches!(self, CredentialKind::ApiKey)
    }
}

impl fmt::Display for CredentialKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Human-readable form used in error messages.
        let label = match self {
            CredentialKind::ApiKey => "API key",
            CredentialKind::BaseId => "base id",
            CredentialKind::TableId => "table id",
            CredentialKind::ViewId => "view id",
        };
        f.write_str(label)
    }
}

impl FromStr for CredentialKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownKind(s.to_string()))
    }
}
