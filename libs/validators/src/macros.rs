//! Macros for defining typed credential wrappers.

/// Macro to define a validated credential newtype for one [`CredentialKind`].
///
/// This generates a newtype wrapper around `String` with:
/// - `PREFIX` and `KIND` constants
/// - `parse()` accepting exactly what the kind's predicate accepts
/// - `Display`, `FromStr`, `AsRef<str>` and `TryFrom` implementations
/// - `Serialize` and validating `Deserialize` implementations
/// - `Eq`, `Ord`, `Hash`
///
/// Passing `redacted` replaces the derived `Debug` with one that only shows
/// the prefix, for credentials that are secrets.
///
/// # Example
///
/// ```ignore
/// define_credential!(BaseId, BaseId);
/// define_credential!(ApiKey, ApiKey, redacted);
///
/// let base: BaseId = "app00000000000000".parse()?;
/// ```
///
/// [`CredentialKind`]: crate::CredentialKind
#[macro_export]
macro_rules! define_credential {
    ($name:ident, $kind:ident) => {
        /// A validated credential of this kind.
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(String);

        $crate::define_credential!(@impl $name, $kind);
    };
    ($name:ident, $kind:ident, redacted) => {
        /// A validated credential of this kind. `Debug` output is redacted.
        #[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(String);

        impl std::fmt::Debug for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}({}…)", stringify!($name), Self::PREFIX)
            }
        }

        $crate::define_credential!(@impl $name, $kind);
    };
    (@impl $name:ident, $kind:ident) => {
        impl $name {
            /// The credential kind this type holds.
            pub const KIND: $crate::CredentialKind = $crate::CredentialKind::$kind;

            /// The prefix every value of this type starts with.
            pub const PREFIX: &'static str = Self::KIND.prefix();

            /// Parses a credential from a string.
            ///
            /// The string must be exactly 17 ASCII letters and digits and start
            /// with [`Self::PREFIX`].
            pub fn parse(s: &str) -> Result<Self, $crate::CredentialError> {
                if !Self::KIND.is_valid(s) {
                    return Err($crate::CredentialError::Invalid { kind: Self::KIND });
                }
                Ok(Self(s.to_string()))
            }

            /// Returns the credential as a string slice.
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

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::CredentialError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl TryFrom<String> for $name {
            type Error = $crate::CredentialError;

            fn try_from(s: String) -> Result<Self, Self::Error> {
                if !Self::KIND.is_valid(&s) {
                    return Err($crate::CredentialError::Invalid { kind: Self::KIND });
                }
                Ok(Self(s))
            }
        }

        impl TryFrom<&str> for $name {
            type Error = $crate::CredentialError;

            fn try_from(s: &str) -> Result<Self, Self::Error> {
                Self::parse(s)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl $crate::Candidate for $name {
            fn as_text(&self) -> Option<&str> {
                Some(&self.0)
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(&self.0)
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                Self::try_from(s).map_err(serde::de::Error::custom)
            }
        }
    };
}
