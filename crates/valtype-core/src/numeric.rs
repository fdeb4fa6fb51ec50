//! # Branded Numeric Types
//!
//! Nominal subtypes of the plain IEEE-754 double and of decimal strings:
//! [`Int`], [`Double`], [`StringInt`] and [`StringDouble`]. Each brand is a
//! thin newtype whose constructor is the validation checkpoint; once a value
//! is constructed, downstream code can rely on the invariant without
//! re-checking.
//!
//! ## Validation Rules
//!
//! - `Int`: finite with no fractional part. Magnitude is not bounded to any
//!   machine integer range; `1e300` is a valid `Int`.
//! - `Double`: every double qualifies, including `NaN` and the infinities.
//! - `StringInt`: an integral number, or a string of ASCII decimal digits
//!   with an optional leading `-` (the `^-?\d+$` grammar; leading zeros
//!   allowed, no exponent notation, no whitespace).
//! - `StringDouble`: any number, or a decimal string with an optional single
//!   fractional part (`^-?\d+(\.\d+)?$`; digits required on both sides of
//!   the point).
//!
//! Casts are checked identities, never converters: an accepted string is
//! stored byte-for-byte, an accepted number keeps its exact bit pattern.
//!
//! ## Rounding Casts
//!
//! The integer brands carry four total rounding casts. `round` takes the
//! nearest integer with ties toward positive infinity (2.5 rounds to 3,
//! -2.5 rounds to -2); `truncate` drops the fractional part; `floor` and
//! `ceil` move toward the respective infinity. Non-finite input follows the
//! saturating float-to-integer cast convention: `NaN` lands on 0 and the
//! infinities on the extreme finite integral doubles, so the casts stay
//! total without ever producing an invalid value.

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ValidationError;

// ---------------------------------------------------------------------------
// Int
// ---------------------------------------------------------------------------

/// A number that is a mathematical integer.
///
/// The inner double is finite and has no fractional part. Construct with
/// [`Int::new`] (checked) or one of the rounding casts (total), or convert
/// losslessly from a machine integer via `From`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
pub struct Int(f64);

impl Int {
    /// Whether `value` satisfies the integer invariant.
    ///
    /// Total and exact: `NaN`, the infinities and fractional values fail,
    /// every integral double passes (including `-0.0` and values beyond the
    /// `i64` range).
    pub fn is_valid(value: f64) -> bool {
        value.is_finite() && value.fract() == 0.0
    }

    /// Checked identity cast: the value passes through unchanged.
    pub fn new(value: f64) -> Result<Self, ValidationError> {
        if Self::is_valid(value) {
            Ok(Self(value))
        } else {
            Err(ValidationError::InvalidInt(value))
        }
    }

    /// Round to the nearest integer, ties toward positive infinity.
    ///
    /// `round(2.5)` is 3 and `round(-2.5)` is -2.
    pub fn round(value: f64) -> Self {
        let value = saturate(value);
        let floor = value.floor();
        if value - floor >= 0.5 {
            Self(floor + 1.0)
        } else {
            Self(floor)
        }
    }

    /// Drop the fractional part: `truncate(-2.9)` is -2.
    pub fn truncate(value: f64) -> Self {
        Self(saturate(value).trunc())
    }

    /// Round toward negative infinity: `floor(2.9)` is 2, `floor(-2.1)` is -3.
    pub fn floor(value: f64) -> Self {
        Self(saturate(value).floor())
    }

    /// Round toward positive infinity: `ceil(2.1)` is 3, `ceil(-2.1)` is -2.
    pub fn ceil(value: f64) -> Self {
        Self(saturate(value).ceil())
    }

    /// The underlying double.
    pub fn value(&self) -> f64 {
        self.0
    }
}

// `Int` can never hold NaN, so equality over the inner double is total.
impl Eq for Int {}

impl From<i32> for Int {
    fn from(value: i32) -> Self {
        Self(f64::from(value))
    }
}

impl From<u32> for Int {
    fn from(value: u32) -> Self {
        Self(f64::from(value))
    }
}

impl From<i64> for Int {
    fn from(value: i64) -> Self {
        Self(value as f64)
    }
}

impl From<u64> for Int {
    fn from(value: u64) -> Self {
        Self(value as f64)
    }
}

impl From<Int> for f64 {
    fn from(value: Int) -> Self {
        value.0
    }
}

impl fmt::Display for Int {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for Int {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = f64::deserialize(deserializer)?;
        Int::new(value).map_err(de::Error::custom)
    }
}

/// Map non-finite input onto the integral domain, following the saturating
/// float-to-integer cast convention.
fn saturate(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else if value == f64::INFINITY {
        f64::MAX
    } else if value == f64::NEG_INFINITY {
        f64::MIN
    } else {
        value
    }
}

// ---------------------------------------------------------------------------
// Double
// ---------------------------------------------------------------------------

/// A number carrying the widest numeric brand.
///
/// Every double qualifies, so [`Double::new`] is total: this is the one cast
/// in the family that can never fail, for any input including `NaN`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Double(f64);

impl Double {
    /// Unconditional identity cast.
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    /// The underlying double.
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl From<f64> for Double {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl From<Double> for f64 {
    fn from(value: Double) -> Self {
        value.0
    }
}

impl fmt::Display for Double {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Literal grammars
// ---------------------------------------------------------------------------

/// `^-?\d+$`: ASCII decimal digits with an optional leading minus.
fn is_integer_literal(text: &str) -> bool {
    let digits = text.strip_prefix('-').unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// `^-?\d+(\.\d+)?$`: as above, with at most one point and digits required
/// on both sides of it.
fn is_decimal_literal(text: &str) -> bool {
    let unsigned = text.strip_prefix('-').unwrap_or(text);
    match unsigned.split_once('.') {
        None => !unsigned.is_empty() && unsigned.bytes().all(|b| b.is_ascii_digit()),
        Some((whole, fraction)) => {
            !whole.is_empty()
                && !fraction.is_empty()
                && whole.bytes().all(|b| b.is_ascii_digit())
                && fraction.bytes().all(|b| b.is_ascii_digit())
        }
    }
}

// ---------------------------------------------------------------------------
// StringInt
// ---------------------------------------------------------------------------

/// An integer that may be carried as a decimal string.
///
/// The string form exists for values too long to survive a double's 53-bit
/// mantissa; such values stay as text end to end. The numeric form satisfies
/// the [`Int`] invariant. The two forms never compare equal, and neither
/// constructor converts one form into the other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringInt(StringIntRepr);

#[derive(Debug, Clone, PartialEq, Eq)]
enum StringIntRepr {
    Number(Int),
    Literal(String),
}

impl StringInt {
    /// Whether `value` satisfies the numeric side of the brand.
    pub fn is_valid_number(value: f64) -> bool {
        Int::is_valid(value)
    }

    /// Whether `text` matches the `^-?\d+$` grammar.
    pub fn is_valid_literal(text: &str) -> bool {
        is_integer_literal(text)
    }

    /// Checked identity cast from a number; the value must be integral.
    pub fn from_number(value: f64) -> Result<Self, ValidationError> {
        if Int::is_valid(value) {
            Ok(Self(StringIntRepr::Number(Int(value))))
        } else {
            Err(ValidationError::InvalidStringIntNumber(value))
        }
    }

    /// Checked identity cast from text; the accepted string is stored
    /// byte-for-byte (leading zeros survive).
    pub fn from_literal(text: impl Into<String>) -> Result<Self, ValidationError> {
        let text = text.into();
        if is_integer_literal(&text) {
            Ok(Self(StringIntRepr::Literal(text)))
        } else {
            Err(ValidationError::InvalidStringIntLiteral(text))
        }
    }

    /// Round to the nearest integer, ties toward positive infinity.
    pub fn round(value: f64) -> Self {
        Self(StringIntRepr::Number(Int::round(value)))
    }

    /// Drop the fractional part.
    pub fn truncate(value: f64) -> Self {
        Self(StringIntRepr::Number(Int::truncate(value)))
    }

    /// Round toward negative infinity.
    pub fn floor(value: f64) -> Self {
        Self(StringIntRepr::Number(Int::floor(value)))
    }

    /// Round toward positive infinity.
    pub fn ceil(value: f64) -> Self {
        Self(StringIntRepr::Number(Int::ceil(value)))
    }

    /// The numeric form, when this value holds one.
    pub fn as_int(&self) -> Option<Int> {
        match &self.0 {
            StringIntRepr::Number(int) => Some(*int),
            StringIntRepr::Literal(_) => None,
        }
    }

    /// The string form, when this value holds one.
    pub fn as_literal(&self) -> Option<&str> {
        match &self.0 {
            StringIntRepr::Number(_) => None,
            StringIntRepr::Literal(text) => Some(text),
        }
    }
}

impl From<Int> for StringInt {
    fn from(value: Int) -> Self {
        Self(StringIntRepr::Number(value))
    }
}

impl fmt::Display for StringInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            StringIntRepr::Number(int) => write!(f, "{int}"),
            StringIntRepr::Literal(text) => f.write_str(text),
        }
    }
}

impl Serialize for StringInt {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match &self.0 {
            StringIntRepr::Number(int) => serializer.serialize_f64(int.value()),
            StringIntRepr::Literal(text) => serializer.serialize_str(text),
        }
    }
}

impl<'de> Deserialize<'de> for StringInt {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ReprVisitor;

        impl Visitor<'_> for ReprVisitor {
            type Value = StringInt;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("an integral number or a decimal digit string")
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> Result<StringInt, E> {
                Ok(StringInt::from(Int::from(value)))
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<StringInt, E> {
                Ok(StringInt::from(Int::from(value)))
            }

            fn visit_f64<E: de::Error>(self, value: f64) -> Result<StringInt, E> {
                StringInt::from_number(value).map_err(E::custom)
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<StringInt, E> {
                StringInt::from_literal(value).map_err(E::custom)
            }
        }

        deserializer.deserialize_any(ReprVisitor)
    }
}

// ---------------------------------------------------------------------------
// StringDouble
// ---------------------------------------------------------------------------

/// A number that may be carried as a decimal string.
///
/// Unlike [`StringInt`], the numeric side has no invariant: every double is
/// a valid `StringDouble`, so [`StringDouble::from_number`] is total. Only
/// the string form is validated.
#[derive(Debug, Clone, PartialEq)]
pub struct StringDouble(StringDoubleRepr);

#[derive(Debug, Clone, PartialEq)]
enum StringDoubleRepr {
    Number(Double),
    Literal(String),
}

impl StringDouble {
    /// Whether `text` matches the `^-?\d+(\.\d+)?$` grammar.
    pub fn is_valid_literal(text: &str) -> bool {
        is_decimal_literal(text)
    }

    /// Unconditional identity cast from a number.
    pub fn from_number(value: f64) -> Self {
        Self(StringDoubleRepr::Number(Double::new(value)))
    }

    /// Checked identity cast from text; the accepted string is stored
    /// byte-for-byte.
    pub fn from_literal(text: impl Into<String>) -> Result<Self, ValidationError> {
        let text = text.into();
        if is_decimal_literal(&text) {
            Ok(Self(StringDoubleRepr::Literal(text)))
        } else {
            Err(ValidationError::InvalidStringDoubleLiteral(text))
        }
    }

    /// The numeric form, when this value holds one.
    pub fn as_double(&self) -> Option<Double> {
        match &self.0 {
            StringDoubleRepr::Number(double) => Some(*double),
            StringDoubleRepr::Literal(_) => None,
        }
    }

    /// The string form, when this value holds one.
    pub fn as_literal(&self) -> Option<&str> {
        match &self.0 {
            StringDoubleRepr::Number(_) => None,
            StringDoubleRepr::Literal(text) => Some(text),
        }
    }
}

impl From<f64> for StringDouble {
    fn from(value: f64) -> Self {
        Self::from_number(value)
    }
}

impl From<Double> for StringDouble {
    fn from(value: Double) -> Self {
        Self(StringDoubleRepr::Number(value))
    }
}

impl fmt::Display for StringDouble {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            StringDoubleRepr::Number(double) => write!(f, "{double}"),
            StringDoubleRepr::Literal(text) => f.write_str(text),
        }
    }
}

impl Serialize for StringDouble {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match &self.0 {
            StringDoubleRepr::Number(double) => serializer.serialize_f64(double.value()),
            StringDoubleRepr::Literal(text) => serializer.serialize_str(text),
        }
    }
}

impl<'de> Deserialize<'de> for StringDouble {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ReprVisitor;

        impl Visitor<'_> for ReprVisitor {
            type Value = StringDouble;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a number or a decimal digit string")
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> Result<StringDouble, E> {
                Ok(StringDouble::from_number(value as f64))
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<StringDouble, E> {
                Ok(StringDouble::from_number(value as f64))
            }

            fn visit_f64<E: de::Error>(self, value: f64) -> Result<StringDouble, E> {
                Ok(StringDouble::from_number(value))
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<StringDouble, E> {
                StringDouble::from_literal(value).map_err(E::custom)
            }
        }

        deserializer.deserialize_any(ReprVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- Int --

    #[test]
    fn int_accepts_integral_doubles() {
        for value in [0.0, -0.0, 1.0, -5.0, 42.0, 1e15, 9_007_199_254_740_992.0, 1e300] {
            assert!(Int::is_valid(value), "{value} should be a valid Int");
            assert!(Int::new(value).is_ok());
        }
    }

    #[test]
    fn int_rejects_fractional_and_non_finite_values() {
        for value in [2.5, -0.1, 0.5, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(!Int::is_valid(value), "{value} should not be a valid Int");
            let err = Int::new(value).unwrap_err();
            assert!(matches!(err, ValidationError::InvalidInt(_)));
        }
    }

    #[test]
    fn int_new_is_an_identity() {
        assert_eq!(Int::new(42.0).unwrap().value(), 42.0);
        assert_eq!(Int::new(-0.0).unwrap().value(), 0.0);
        assert_eq!(Int::new(1e300).unwrap().value(), 1e300);
    }

    #[test]
    fn int_round_takes_ties_toward_positive_infinity() {
        assert_eq!(Int::round(2.5).value(), 3.0);
        assert_eq!(Int::round(-2.5).value(), -2.0);
        assert_eq!(Int::round(2.4).value(), 2.0);
        assert_eq!(Int::round(-2.6).value(), -3.0);
        assert_eq!(Int::round(3.0).value(), 3.0);
        // Largest double below one half: nearest integer is zero, and the
        // naive `(x + 0.5).floor()` formulation would get this wrong.
        assert_eq!(Int::round(0.499_999_999_999_999_94).value(), 0.0);
    }

    #[test]
    fn int_truncate_drops_the_fraction() {
        assert_eq!(Int::truncate(-2.9).value(), -2.0);
        assert_eq!(Int::truncate(2.9).value(), 2.0);
        assert_eq!(Int::truncate(-0.9).value(), 0.0);
    }

    #[test]
    fn int_floor_and_ceil_move_toward_their_infinities() {
        assert_eq!(Int::floor(2.9).value(), 2.0);
        assert_eq!(Int::floor(-2.1).value(), -3.0);
        assert_eq!(Int::ceil(2.1).value(), 3.0);
        assert_eq!(Int::ceil(-2.1).value(), -2.0);
    }

    #[test]
    fn int_rounding_saturates_non_finite_input() {
        assert_eq!(Int::round(f64::NAN).value(), 0.0);
        assert_eq!(Int::truncate(f64::NAN).value(), 0.0);
        assert_eq!(Int::floor(f64::INFINITY).value(), f64::MAX);
        assert_eq!(Int::ceil(f64::NEG_INFINITY).value(), f64::MIN);
    }

    #[test]
    fn int_converts_from_machine_integers() {
        assert_eq!(Int::from(-7i32).value(), -7.0);
        assert_eq!(Int::from(11u32).value(), 11.0);
        assert_eq!(Int::from(1_700_000_000_123i64).value(), 1_700_000_000_123.0);
        assert_eq!(Int::from(3u64).value(), 3.0);
        assert_eq!(f64::from(Int::from(5i32)), 5.0);
    }

    #[test]
    fn int_displays_without_a_fractional_part() {
        assert_eq!(Int::from(3i32).to_string(), "3");
        assert_eq!(Int::from(-7i32).to_string(), "-7");
    }

    #[test]
    fn int_serde_validates_on_the_way_in() {
        assert_eq!(serde_json::to_string(&Int::from(3i32)).unwrap(), "3.0");
        assert_eq!(serde_json::from_str::<Int>("3").unwrap(), Int::from(3i32));
        assert!(serde_json::from_str::<Int>("2.5").is_err());
        assert!(serde_json::from_str::<Int>("\"3\"").is_err());
    }

    // -- Double --

    #[test]
    fn double_cast_is_total() {
        assert_eq!(Double::new(2.5).value(), 2.5);
        assert!(Double::new(f64::NAN).value().is_nan());
        assert_eq!(Double::new(f64::INFINITY).value(), f64::INFINITY);
        assert_eq!(Double::from(1.25).value(), 1.25);
        assert_eq!(f64::from(Double::new(0.5)), 0.5);
    }

    #[test]
    fn double_round_trips_through_serde() {
        let double = Double::new(2.5);
        let json = serde_json::to_string(&double).unwrap();
        assert_eq!(json, "2.5");
        assert_eq!(serde_json::from_str::<Double>(&json).unwrap(), double);
    }

    // -- StringInt --

    #[test]
    fn string_int_accepts_integer_literals() {
        for text in ["0", "7", "-5", "007", "123456789012345678901234567890"] {
            assert!(StringInt::is_valid_literal(text), "{text:?} should be valid");
            assert!(StringInt::from_literal(text).is_ok());
        }
    }

    #[test]
    fn string_int_rejects_malformed_literals() {
        for text in [
            "", "-", "3.5", "abc", "+5", " 5", "5 ", "--3", "1e5", "0x1f", "-abc", "١٢٣",
        ] {
            assert!(!StringInt::is_valid_literal(text), "{text:?} should be invalid");
            let err = StringInt::from_literal(text).unwrap_err();
            assert!(matches!(err, ValidationError::InvalidStringIntLiteral(_)));
        }
    }

    #[test]
    fn string_int_literal_cast_preserves_the_text() {
        let value = StringInt::from_literal("007").unwrap();
        assert_eq!(value.as_literal(), Some("007"));
        assert_eq!(value.as_int(), None);
        assert_eq!(value.to_string(), "007");
    }

    #[test]
    fn string_int_number_side_requires_an_integer() {
        let value = StringInt::from_number(3.0).unwrap();
        assert_eq!(value.as_int(), Some(Int::from(3i32)));
        assert_eq!(value.as_literal(), None);

        for bad in [2.5, f64::NAN, f64::INFINITY] {
            let err = StringInt::from_number(bad).unwrap_err();
            assert!(matches!(err, ValidationError::InvalidStringIntNumber(_)));
        }
    }

    #[test]
    fn string_int_rounding_casts_are_total() {
        assert_eq!(StringInt::round(2.5).as_int(), Some(Int::from(3i32)));
        assert_eq!(StringInt::truncate(-2.9).as_int(), Some(Int::from(-2i32)));
        assert_eq!(StringInt::floor(2.9).as_int(), Some(Int::from(2i32)));
        assert_eq!(StringInt::ceil(2.1).as_int(), Some(Int::from(3i32)));
    }

    #[test]
    fn string_int_forms_never_compare_equal() {
        let numeric = StringInt::from(Int::from(3i32));
        let literal = StringInt::from_literal("3").unwrap();
        assert_ne!(numeric, literal);
        assert_eq!(numeric, StringInt::from_number(3.0).unwrap());
        assert_eq!(literal, StringInt::from_literal("3").unwrap());
    }

    #[test]
    fn string_int_serde_keeps_each_form_on_the_wire() {
        let literal = StringInt::from_literal("007").unwrap();
        assert_eq!(serde_json::to_string(&literal).unwrap(), "\"007\"");

        let numeric = StringInt::from(Int::from(7i32));
        assert_eq!(serde_json::to_string(&numeric).unwrap(), "7.0");

        assert_eq!(
            serde_json::from_str::<StringInt>("\"007\"").unwrap(),
            literal
        );
        assert_eq!(serde_json::from_str::<StringInt>("7").unwrap(), numeric);
        assert_eq!(
            serde_json::from_str::<StringInt>("-7").unwrap(),
            StringInt::from(Int::from(-7i32))
        );
        assert!(serde_json::from_str::<StringInt>("2.5").is_err());
        assert!(serde_json::from_str::<StringInt>("\"3.5\"").is_err());
        assert!(serde_json::from_str::<StringInt>("true").is_err());
    }

    // -- StringDouble --

    #[test]
    fn string_double_accepts_decimal_literals() {
        for text in ["3.5", "0.1", "-0.5", "10", "007", "-123.456", "0.000"] {
            assert!(StringDouble::is_valid_literal(text), "{text:?} should be valid");
            assert!(StringDouble::from_literal(text).is_ok());
        }
    }

    #[test]
    fn string_double_rejects_malformed_literals() {
        for text in ["", "-", "3.", ".5", "1.2.3", "1e5", "abc", "+1.5", "1,5"] {
            assert!(!StringDouble::is_valid_literal(text), "{text:?} should be invalid");
            let err = StringDouble::from_literal(text).unwrap_err();
            assert!(matches!(err, ValidationError::InvalidStringDoubleLiteral(_)));
        }
    }

    #[test]
    fn string_double_number_side_is_total() {
        let value = StringDouble::from_number(f64::NAN);
        assert!(value.as_double().unwrap().value().is_nan());
        assert_eq!(StringDouble::from_number(2.5).as_double(), Some(Double::new(2.5)));
        assert_eq!(StringDouble::from(Double::new(0.5)).as_double(), Some(Double::new(0.5)));
    }

    #[test]
    fn string_double_literal_cast_preserves_the_text() {
        let value = StringDouble::from_literal("-123.456").unwrap();
        assert_eq!(value.as_literal(), Some("-123.456"));
        assert_eq!(value.to_string(), "-123.456");
    }

    #[test]
    fn string_double_serde_keeps_each_form_on_the_wire() {
        let literal = StringDouble::from_literal("3.5").unwrap();
        assert_eq!(serde_json::to_string(&literal).unwrap(), "\"3.5\"");
        assert_eq!(
            serde_json::from_str::<StringDouble>("\"3.5\"").unwrap(),
            literal
        );

        let numeric = StringDouble::from_number(2.5);
        assert_eq!(serde_json::to_string(&numeric).unwrap(), "2.5");
        assert_eq!(serde_json::from_str::<StringDouble>("2.5").unwrap(), numeric);

        assert!(serde_json::from_str::<StringDouble>("\"1e5\"").is_err());
        assert!(serde_json::from_str::<StringDouble>("null").is_err());
    }
}
