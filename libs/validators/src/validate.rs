//! Credential and table-name predicates.
//!
//! Every function here is total: it accepts any [`Candidate`] and answers
//! `true` or `false` without panicking, allocating, or logging.

use crate::Candidate;

/// Exact length of every credential, prefix included.
pub const CREDENTIAL_LENGTH: usize = 17;

/// Length of the type prefix at the start of a credential.
pub const PREFIX_LENGTH: usize = 3;

pub(crate) const API_KEY_PREFIX: &str = "key";
pub(crate) const BASE_ID_PREFIX: &str = "app";
pub(crate) const TABLE_ID_PREFIX: &str = "tbl";
pub(crate) const VIEW_ID_PREFIX: &str = "viw";

/// Checks that `candidate` is a credential of the type named by `prefix`.
///
/// The candidate is valid when it is a string of exactly
/// [`CREDENTIAL_LENGTH`] characters, starts with `prefix` (case-sensitive),
/// and contains only ASCII letters and digits.
///
/// ```
/// use tabid_validators::validate;
///
/// assert!(validate("key", "key00000000000000"));
/// assert!(!validate("key", "key0000000000000"));
/// assert!(!validate("key", &true));
/// ```
pub fn validate<C: Candidate + ?Sized>(prefix: &str, candidate: &C) -> bool {
    let Some(text) = candidate.as_text() else {
        return false;
    };

    // Byte length: anything non-ASCII fails the charset check anyway.
    text.len() == CREDENTIAL_LENGTH
        && text.starts_with(prefix)
        && text.bytes().all(|b| b.is_ascii_alphanumeric())
}

/// Checks the format of an API key (`key` prefix).
pub fn api_key_is_valid<C: Candidate + ?Sized>(candidate: &C) -> bool {
    validate(API_KEY_PREFIX, candidate)
}

/// Checks the format of a base id (`app` prefix).
pub fn base_id_is_valid<C: Candidate + ?Sized>(candidate: &C) -> bool {
    validate(BASE_ID_PREFIX, candidate)
}

/// Checks the format of a table id (`tbl` prefix).
pub fn table_id_is_valid<C: Candidate + ?Sized>(candidate: &C) -> bool {
    validate(TABLE_ID_PREFIX, candidate)
}

/// Checks the format of a view id (`viw` prefix).
pub fn view_id_is_valid<C: Candidate + ?Sized>(candidate: &C) -> bool {
    validate(VIEW_ID_PREFIX, candidate)
}

/// Checks that `candidate` is a non-empty string.
///
/// Content is not inspected: whitespace-only and very long names pass.
pub fn table_name_is_valid<C: Candidate + ?Sized>(candidate: &C) -> bool {
    candidate.as_text().is_some_and(|name| !name.is_empty())
}
