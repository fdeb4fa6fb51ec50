//! # Local Calendar Values
//!
//! [`LocalDate`], [`LocalTime`] and [`LocalDateTime`] are calendar values
//! with no attached timezone, each a distinct newtype over a timezone-aware
//! instant (`chrono::DateTime<Utc>`). Because the three kinds are distinct
//! types, they can never be confused with one another or with a raw instant;
//! no runtime tag is needed.
//!
//! Field accessors read the civil fields of the stored instant on the host's
//! wall clock and return [`Int`]-branded components. Months are zero-based
//! throughout (January is 0) and the day of the week counts from Sunday = 0.
//!
//! ## Day Anchor (`LocalDate`)
//!
//! A `LocalDate` stores the instant at UTC midnight of the intended date
//! advanced by 600 minutes, placing it ten hours into the intended UTC day.
//! Rendered on the host's wall clock, that instant falls on the intended
//! calendar date in every zone from UTC-10:00 through UTC+13:00. The anchor
//! is knowingly incorrect in UTC+14:00, UTC-11:00 and UTC-12:00 (all
//! sparsely inhabited), where callers see a neighbouring day. The anchor and
//! its blind zones are part of the observable contract.
//!
//! ## Epoch-Day Sentinel (`LocalTime`)
//!
//! A `LocalTime` mounts its time-of-day on 1970 day 1 of the host's wall
//! clock, so only the hour/minute/second/millisecond fields carry meaning.
//! The sentinel day is fixed rather than boundary-sensitive, so it needs no
//! day-anchor workaround.
//!
//! ## Validity
//!
//! Field constructors reject rather than normalize: February 30, month index
//! 12, hour 24 and millisecond 1000 are all validation errors, as is a
//! wall-clock moment the host zone skipped. An ambiguous wall-clock moment
//! (a repeated hour) resolves to its first occurrence.
//!
//! Deserialization re-validates. A wire instant must already carry the day
//! anchor to load as a `LocalDate`, and must sit on the local epoch day to
//! load as a `LocalTime`; any instant loads as a `LocalDateTime`.

use std::fmt;

use chrono::{
    DateTime, Datelike, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, TimeZone, Timelike,
    Utc,
};
use serde::{de, Deserialize, Deserializer, Serialize};

use crate::error::ValidationError;
use crate::numeric::Int;

/// Minutes past UTC midnight where a [`LocalDate`]'s instant is anchored.
///
/// Ten hours into the UTC day keeps the locally rendered date equal to the
/// intended date for every zone from UTC-10:00 through UTC+13:00; see the
/// module docs for the blind zones.
const DAY_ANCHOR_MINUTES: i64 = 600;

/// The UTC time-of-day every [`LocalDate`] instant carries.
fn anchor_time() -> NaiveTime {
    NaiveTime::MIN + TimeDelta::minutes(DAY_ANCHOR_MINUTES)
}

/// The sentinel day carrying [`LocalTime`] values: 1970 day 1.
fn epoch_day() -> NaiveDate {
    DateTime::<Utc>::UNIX_EPOCH.date_naive()
}

/// The civil view of an instant on the host's wall clock.
fn local_view(instant: &DateTime<Utc>) -> DateTime<Local> {
    instant.with_timezone(&Local)
}

/// Resolve a wall-clock moment in the host zone. An ambiguous moment (a
/// repeated hour) resolves to its first occurrence; a skipped moment has no
/// resolution.
fn resolve_local(naive: NaiveDateTime) -> Option<DateTime<Utc>> {
    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|moment| moment.with_timezone(&Utc))
}

/// A time-of-day with all four fields range-checked. Rejects the oversized
/// millisecond values `NaiveTime` would accept as leap-second encodings.
fn clock_time(hour: u32, minute: u32, second: u32, millisecond: u32) -> Option<NaiveTime> {
    if millisecond > 999 {
        return None;
    }
    NaiveTime::from_hms_milli_opt(hour, minute, second, millisecond)
}

fn invalid_date(year: i32, month0: u32, day: u32) -> ValidationError {
    ValidationError::InvalidLocalDate(format!(
        "no calendar day at year {year}, month {month0} (zero-based), day {day}"
    ))
}

fn invalid_time(hour: u32, minute: u32, second: u32, millisecond: u32) -> ValidationError {
    ValidationError::InvalidLocalTime(format!(
        "no clock time at hour {hour}, minute {minute}, second {second}, millisecond {millisecond}"
    ))
}

fn invalid_datetime(
    year: i32,
    month0: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
    millisecond: u32,
) -> ValidationError {
    ValidationError::InvalidLocalDateTime(format!(
        "no calendar moment at year {year}, month {month0} (zero-based), day {day}, \
         hour {hour}, minute {minute}, second {second}, millisecond {millisecond}"
    ))
}

// ---------------------------------------------------------------------------
// LocalDate
// ---------------------------------------------------------------------------

/// A calendar date with no attached timezone.
///
/// Semantic content is year, zero-based month, day-of-month and the derived
/// day-of-week. The stored instant sits ten hours into the intended UTC day
/// (see the module docs for the anchor rule and its blind zones).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct LocalDate(DateTime<Utc>);

impl LocalDate {
    /// Today's date on the host's wall clock.
    pub fn now() -> Self {
        let today = Local::now();
        Self::from_ymd(today.year(), today.month0(), today.day())
            .expect("the current civil date is always representable")
    }

    /// Build from explicit fields; `month0` is zero-based (January is 0).
    ///
    /// Out-of-range fields are rejected, not normalized: month index 12,
    /// day 0 and February 30 all fail.
    pub fn from_ymd(year: i32, month0: u32, day: u32) -> Result<Self, ValidationError> {
        let month = month0
            .checked_add(1)
            .ok_or_else(|| invalid_date(year, month0, day))?;
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or_else(|| invalid_date(year, month0, day))?;
        Ok(Self(date.and_time(anchor_time()).and_utc()))
    }

    /// Build from the civil date of `moment`, read in `moment`'s own zone.
    ///
    /// Rebuilding a `LocalDate` from its own instant yields an equal value.
    pub fn from_datetime<Tz: TimeZone>(moment: &DateTime<Tz>) -> Result<Self, ValidationError> {
        Self::from_ymd(moment.year(), moment.month0(), moment.day())
    }

    /// The year.
    pub fn year(&self) -> Int {
        Int::from(local_view(&self.0).year())
    }

    /// The zero-based month (January is 0).
    pub fn month0(&self) -> Int {
        Int::from(local_view(&self.0).month0())
    }

    /// The day of the month, 1-based.
    pub fn day(&self) -> Int {
        Int::from(local_view(&self.0).day())
    }

    /// The day of the week, counting from Sunday = 0.
    pub fn day_of_week(&self) -> Int {
        Int::from(local_view(&self.0).weekday().num_days_from_sunday())
    }

    /// The underlying anchored instant.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }
}

impl fmt::Display for LocalDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", local_view(&self.0).format("%Y-%m-%d"))
    }
}

impl<'de> Deserialize<'de> for LocalDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let instant = DateTime::<Utc>::deserialize(deserializer)?;
        if instant.time() != anchor_time() {
            return Err(de::Error::custom(ValidationError::InvalidLocalDate(
                format!("instant {instant} does not carry the day anchor"),
            )));
        }
        Ok(Self(instant))
    }
}

// ---------------------------------------------------------------------------
// LocalTime
// ---------------------------------------------------------------------------

/// A time-of-day with no attached timezone.
///
/// Semantic content is hour, minute, second and millisecond; the date
/// component is pinned to the epoch-day sentinel (see the module docs).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct LocalTime(DateTime<Utc>);

impl LocalTime {
    /// The current wall-clock time, mounted on the epoch day.
    ///
    /// If the host zone skipped this wall-clock moment on the epoch day (a
    /// 1970 offset transition), the raw current instant is kept instead; the
    /// time fields still read back unchanged.
    pub fn now() -> Self {
        let moment = Local::now();
        Self::from_datetime(&moment).unwrap_or(Self(moment.with_timezone(&Utc)))
    }

    /// Build from hour, minute and second, with millisecond 0.
    pub fn from_hms(hour: u32, minute: u32, second: u32) -> Result<Self, ValidationError> {
        Self::from_hms_milli(hour, minute, second, 0)
    }

    /// Build from explicit fields on the epoch day of the host's wall clock.
    pub fn from_hms_milli(
        hour: u32,
        minute: u32,
        second: u32,
        millisecond: u32,
    ) -> Result<Self, ValidationError> {
        let time = clock_time(hour, minute, second, millisecond)
            .ok_or_else(|| invalid_time(hour, minute, second, millisecond))?;
        let instant = resolve_local(epoch_day().and_time(time)).ok_or_else(|| {
            ValidationError::InvalidLocalTime(format!(
                "{hour:02}:{minute:02}:{second:02}.{millisecond:03} does not exist on the \
                 epoch day in the local timezone"
            ))
        })?;
        Ok(Self(instant))
    }

    /// Build from the time-of-day of `moment`, read in `moment`'s own zone
    /// and re-anchored to the epoch day.
    pub fn from_datetime<Tz: TimeZone>(moment: &DateTime<Tz>) -> Result<Self, ValidationError> {
        // A leap second folds into the last millisecond of its minute.
        Self::from_hms_milli(
            moment.hour(),
            moment.minute(),
            moment.second(),
            moment.timestamp_subsec_millis().min(999),
        )
    }

    /// The hour, 0-23.
    pub fn hour(&self) -> Int {
        Int::from(local_view(&self.0).hour())
    }

    /// The minute, 0-59.
    pub fn minute(&self) -> Int {
        Int::from(local_view(&self.0).minute())
    }

    /// The second, 0-59.
    pub fn second(&self) -> Int {
        Int::from(local_view(&self.0).second())
    }

    /// The millisecond, 0-999.
    pub fn millisecond(&self) -> Int {
        // A leap second folds into the last millisecond of its minute.
        Int::from(local_view(&self.0).timestamp_subsec_millis().min(999))
    }

    /// The underlying instant.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }
}

impl fmt::Display for LocalTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", local_view(&self.0).format("%H:%M:%S%.3f"))
    }
}

impl<'de> Deserialize<'de> for LocalTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let instant = DateTime::<Utc>::deserialize(deserializer)?;
        if local_view(&instant).date_naive() != epoch_day() {
            return Err(de::Error::custom(ValidationError::InvalidLocalTime(
                format!("instant {instant} is not mounted on the epoch day"),
            )));
        }
        Ok(Self(instant))
    }
}

// ---------------------------------------------------------------------------
// LocalDateTime
// ---------------------------------------------------------------------------

/// A full civil moment with no attached timezone offset.
///
/// Carries year through millisecond plus the epoch-millisecond ordinal of
/// the underlying instant, and bridges to instant-based code through
/// [`LocalDateTime::from_datetime`] and [`LocalDateTime::as_datetime`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LocalDateTime(DateTime<Utc>);

impl LocalDateTime {
    /// The current instant.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Build from date and time fields, with millisecond 0.
    pub fn from_ymd_hms(
        year: i32,
        month0: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Result<Self, ValidationError> {
        Self::from_ymd_hms_milli(year, month0, day, hour, minute, second, 0)
    }

    /// Build from explicit fields, interpreted on the host's wall clock;
    /// `month0` is zero-based (January is 0).
    ///
    /// An ambiguous wall-clock moment (a repeated hour) resolves to its
    /// first occurrence; a skipped moment is a validation error.
    pub fn from_ymd_hms_milli(
        year: i32,
        month0: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        millisecond: u32,
    ) -> Result<Self, ValidationError> {
        let invalid = || invalid_datetime(year, month0, day, hour, minute, second, millisecond);
        let month = month0.checked_add(1).ok_or_else(invalid)?;
        let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)?;
        let time = clock_time(hour, minute, second, millisecond).ok_or_else(invalid)?;
        let instant = resolve_local(date.and_time(time)).ok_or_else(|| {
            ValidationError::InvalidLocalDateTime(format!(
                "the local timezone skips year {year}, month {month0} (zero-based), day {day}, \
                 {hour:02}:{minute:02}:{second:02}.{millisecond:03}"
            ))
        })?;
        Ok(Self(instant))
    }

    /// Copy the instant of `moment` unchanged.
    ///
    /// Total: every instant is a valid `LocalDateTime`, so this cast can
    /// never fail.
    pub fn from_datetime<Tz: TimeZone>(moment: &DateTime<Tz>) -> Self {
        Self(moment.with_timezone(&Utc))
    }

    /// The calendar date of this moment on the host's wall clock.
    pub fn to_local_date(&self) -> Result<LocalDate, ValidationError> {
        LocalDate::from_datetime(&local_view(&self.0))
    }

    /// The time-of-day of this moment on the host's wall clock.
    pub fn to_local_time(&self) -> Result<LocalTime, ValidationError> {
        LocalTime::from_datetime(&local_view(&self.0))
    }

    /// The year.
    pub fn year(&self) -> Int {
        Int::from(local_view(&self.0).year())
    }

    /// The zero-based month (January is 0).
    pub fn month0(&self) -> Int {
        Int::from(local_view(&self.0).month0())
    }

    /// The day of the month, 1-based.
    pub fn day(&self) -> Int {
        Int::from(local_view(&self.0).day())
    }

    /// The day of the week, counting from Sunday = 0.
    pub fn day_of_week(&self) -> Int {
        Int::from(local_view(&self.0).weekday().num_days_from_sunday())
    }

    /// The hour, 0-23.
    pub fn hour(&self) -> Int {
        Int::from(local_view(&self.0).hour())
    }

    /// The minute, 0-59.
    pub fn minute(&self) -> Int {
        Int::from(local_view(&self.0).minute())
    }

    /// The second, 0-59.
    pub fn second(&self) -> Int {
        Int::from(local_view(&self.0).second())
    }

    /// The millisecond, 0-999.
    pub fn millisecond(&self) -> Int {
        // A leap second folds into the last millisecond of its minute.
        Int::from(local_view(&self.0).timestamp_subsec_millis().min(999))
    }

    /// Milliseconds since the Unix epoch of the underlying instant.
    pub fn timestamp_millis(&self) -> Int {
        Int::from(self.0.timestamp_millis())
    }

    /// The underlying instant.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }
}

impl fmt::Display for LocalDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", local_view(&self.0).format("%Y-%m-%dT%H:%M:%S%.3f"))
    }
}
