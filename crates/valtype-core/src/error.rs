//! # Validation Errors
//!
//! The single error kind raised by this crate. Every validating constructor
//! and checked cast fails with a [`ValidationError`] variant that names the
//! target type and echoes the offending value, so a caller can log or surface
//! the failure without re-deriving what was rejected.
//!
//! There is intentionally no richer hierarchy: the library performs no IO and
//! holds no state, so the only thing that can go wrong is an input value
//! failing a type invariant.

use thiserror::Error;

/// Raised when a value offered to a validating constructor or checked cast
/// does not satisfy the target type's invariant.
///
/// Callers that want to avoid the error path can pre-check with the matching
/// `is_valid*` predicate; the predicates and constructors agree exactly.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// The number has a fractional part or is not finite.
    #[error("invalid Int: {0} (expected a finite number with no fractional part)")]
    InvalidInt(f64),

    /// A numeric `StringInt` candidate was not an integral value.
    #[error("invalid StringInt number: {0} (expected a finite number with no fractional part)")]
    InvalidStringIntNumber(f64),

    /// A textual `StringInt` candidate was not a plain decimal integer.
    #[error("invalid StringInt literal: \"{0}\" (expected decimal digits with an optional leading '-')")]
    InvalidStringIntLiteral(String),

    /// A textual `StringDouble` candidate was not a plain decimal number.
    #[error("invalid StringDouble literal: \"{0}\" (expected decimal digits with an optional fractional part)")]
    InvalidStringDoubleLiteral(String),

    /// The string is not a canonical hyphenated UUID.
    #[error("invalid Uuid: \"{0}\" (expected canonical 8-4-4-4-12 form or the nil UUID)")]
    InvalidUuid(String),

    /// The fields do not name a representable calendar day.
    #[error("invalid LocalDate: {0}")]
    InvalidLocalDate(String),

    /// The fields do not name a representable clock time.
    #[error("invalid LocalTime: {0}")]
    InvalidLocalTime(String),

    /// The fields do not name a representable calendar moment.
    #[error("invalid LocalDateTime: {0}")]
    InvalidLocalDateTime(String),
}
