//! # Canonical UUID Strings
//!
//! [`Uuid`] brands an externally supplied identifier string after checking it
//! against the canonical hyphenated form. The crate validates only; it never
//! generates identifiers.
//!
//! ## Validation Rules
//!
//! A valid value is 36 bytes in the 8-4-4-4-12 hexadecimal grouping,
//! case-insensitive, with the version nibble in `1..=5` and the variant
//! nibble in `{8, 9, a, b}`, or the all-zero nil UUID. Other textual forms
//! (unhyphenated, braced, URN) are rejected even though they denote valid
//! identifiers elsewhere.
//!
//! ## Design Decision: Byte-Level Check, String Storage
//!
//! `uuid::Uuid::parse_str` accepts the non-canonical forms above, so the
//! canonical-form invariant is enforced with a direct byte check instead.
//! The accepted string is stored as given: casing is preserved and
//! comparisons are byte-wise. Interop with the `uuid` crate goes through
//! [`Uuid::to_uuid`] and [`Uuid::from_uuid`].

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ValidationError;

const NIL_UUID: &str = "00000000-0000-0000-0000-000000000000";

/// A string in canonical hyphenated UUID form.
///
/// The checked cast is an identity: the stored string is byte-for-byte the
/// accepted input, including its casing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Uuid(String);

impl Uuid {
    /// Whether `value` matches the canonical form or is the nil UUID.
    ///
    /// Total; never fails.
    pub fn is_valid(value: &str) -> bool {
        let bytes = value.as_bytes();
        if bytes.len() != 36 {
            return false;
        }
        for (index, &byte) in bytes.iter().enumerate() {
            if matches!(index, 8 | 13 | 18 | 23) {
                if byte != b'-' {
                    return false;
                }
            } else if !byte.is_ascii_hexdigit() {
                return false;
            }
        }
        if value == NIL_UUID {
            return true;
        }
        // Version nibble 1-5; RFC variant nibble 8, 9, a or b (either case).
        matches!(bytes[14], b'1'..=b'5') && matches!(bytes[19] | 0x20, b'8' | b'9' | b'a' | b'b')
    }

    /// Checked identity cast from a string.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if Self::is_valid(&value) {
            Ok(Self(value))
        } else {
            Err(ValidationError::InvalidUuid(value))
        }
    }

    /// Brand a typed identifier from the `uuid` crate.
    ///
    /// The identifier is rendered in hyphenated lowercase form and validated;
    /// a version outside `1..=5` (for example a v7 id) or a non-RFC variant
    /// is rejected, matching the string-side rules.
    pub fn from_uuid(id: uuid::Uuid) -> Result<Self, ValidationError> {
        Self::new(id.hyphenated().to_string())
    }

    /// The typed `uuid` crate form of this identifier.
    pub fn to_uuid(&self) -> uuid::Uuid {
        uuid::Uuid::parse_str(&self.0).expect("canonical form validated at construction")
    }

    /// The underlying string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the underlying string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for Uuid {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Uuid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for Uuid {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl<'de> Deserialize<'de> for Uuid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Uuid::new(value).map_err(serde::de::Error::custom)
    }
}
