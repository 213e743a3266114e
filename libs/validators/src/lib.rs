//! # tabid-validators
//!
//! Format validation for the credentials and identifiers used to address a
//! tabular-data service.
//!
//! ## Design Principles
//!
//! - Validation is syntactic only: a valid id is well-formed, not necessarily
//!   registered or authorized
//! - Predicates are total: any runtime value is classified, never rejected
//!   with a panic
//! - Results are pass/fail; callers decide what to tell the user
//!
//! ## Credential Format
//!
//! Every credential is exactly 17 ASCII alphanumeric characters, the first
//! three of which name its type:
//!
//! - `key…` API key
//! - `app…` base id
//! - `tbl…` table id
//! - `viw…` view id
//!
//! Table names are free-form and only need to be non-empty.
//!
//! ```
//! use tabid_validators::{api_key_is_valid, table_name_is_valid, TableId};
//!
//! assert!(api_key_is_valid("keyAbCdEf0123456x"));
//! assert!(!api_key_is_valid(&234));
//! assert!(table_name_is_valid("Table Name"));
//!
//! let table: TableId = "tbl00000000000000".parse().unwrap();
//! assert_eq!(table.as_str(), "tbl00000000000000");
//! ```

mod candidate;
mod error;
mod kind;
mod macros;
mod types;
mod validate;

pub use candidate::Candidate;
pub use error::{CredentialError, UnknownKind};
pub use kind::CredentialKind;
pub use types::*;
pub use validate::{
    api_key_is_valid, base_id_is_valid, table_id_is_valid, table_name_is_valid, validate,
    view_id_is_valid, CREDENTIAL_LENGTH, PREFIX_LENGTH,
};
