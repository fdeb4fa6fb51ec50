#![deny(missing_docs)]

//! # valtype-core — Branded Primitive Value Types
//!
//! This crate defines branded wrappers over plain primitive values: validated
//! numeric brands, two-form string/number brands, canonical UUID strings, and
//! timezone-less calendar values carried by timezone-aware instants. It has no
//! internal crate dependencies — only `serde`, `thiserror`, `chrono`, and
//! `uuid` from the external ecosystem.
//!
//! ## Design Principles
//!
//! 1. **A brand is a distinct type, not a convention.** You cannot pass a raw
//!    `f64` where an [`Int`] is expected, nor a [`LocalDate`] where a
//!    [`LocalTime`] is expected. Misuse fails at compile time.
//!
//! 2. **Validate at the boundary, trust thereafter.** Fallible constructors
//!    return `Result` and reject rather than repair; holding a value proves
//!    its invariant. Casts between brands are checked identities, never
//!    converters.
//!
//! 3. **Three calendar kinds, zero runtime tags.** [`LocalDate`],
//!    [`LocalTime`] and [`LocalDateTime`] are separate newtypes over an
//!    instant, so "which kind is this?" is answered by the type system, not
//!    by a discriminant field.
//!
//! 4. **[`ValidationError`] hierarchy.** Structured errors with `thiserror` —
//!    no `Box<dyn Error>`, no `.unwrap()` outside tests.

pub mod error;
pub mod identity;
pub mod numeric;
pub mod temporal;

// Re-export primary types at crate root for ergonomic imports.
pub use error::ValidationError;
pub use identity::Uuid;
pub use numeric::{Double, Int, StringDouble, StringInt};
pub use temporal::{LocalDate, LocalDateTime, LocalTime};
