//! This module implements `Date` and any directly related algorithms.

use alloc::string::String;
use core::{cmp::Ordering, fmt, iter::FusedIterator, str::FromStr};

use calendar_date_provider::{provider::TimeZoneProvider, utils};
use tinystr::TinyAsciiStr;
use writeable::{impl_display_with_writeable, LengthHint, Writeable};

use crate::{
    builtins::core::Instant,
    date_assert,
    host::HostClock,
    iso::{self, IsoDate},
    parsers::{parse_ymd, FormattableDate},
    DateError, DateResult, DateUnwrap, MS_PER_DAY,
};

#[cfg(test)]
mod tests;

/// A civil calendar date with no time of day and no time zone.
///
/// A `Date` is a count of days since `1970-01-01` together with its canonical
/// `YYYY-MM-DD` string, which is computed once when the value is created.
/// Years outside `0..=9999` are written in the expanded `±YYYYYY-MM-DD` form.
///
/// Dates are immutable; every operation returns a new value. Equality,
/// ordering and hashing are all based on the day count.
///
/// ## Examples
///
/// ```rust
/// use calendar_date::{count_days, Date};
///
/// let start = Date::from_ymd("2024-02-01").unwrap();
/// let end = start.last_of_month().unwrap();
///
/// assert_eq!(end.to_ymd_string(), "2024-02-29");
/// assert_eq!(count_days(&start, &end).unwrap(), 29);
/// assert!(start.is_before(&end));
/// ```
#[derive(Clone, Copy)]
pub struct Date {
    epoch_days: i32,
    ymd: TinyAsciiStr<16>,
}

// ==== Private API ====

impl Date {
    /// Creates a `Date` from epoch days already known to be in range.
    fn from_valid_epoch_days(epoch_days: i32) -> DateResult<Self> {
        let iso = IsoDate::from_epoch_days(epoch_days);
        let ymd = FormattableDate::from(iso).to_string();
        let ymd = TinyAsciiStr::try_from_str(&ymd).ok().date_unwrap()?;
        Ok(Self { epoch_days, ymd })
    }

    #[inline]
    fn iso_date(&self) -> IsoDate {
        IsoDate::from_epoch_days(self.epoch_days)
    }
}

// ==== Public API ====

impl Date {
    /// Creates a `Date` from a count of days since `1970-01-01`.
    pub fn from_epoch_days(epoch_days: i64) -> DateResult<Self> {
        Self::from_valid_epoch_days(iso::check_epoch_days(epoch_days)?)
    }

    /// Creates a `Date` from the milliseconds since the epoch of its UTC
    /// midnight.
    ///
    /// Fails with `InvalidInput` when `epoch_milliseconds` is not an exact
    /// multiple of a day.
    pub fn from_epoch_milliseconds(epoch_milliseconds: i64) -> DateResult<Self> {
        if epoch_milliseconds.rem_euclid(MS_PER_DAY) != 0 {
            return Err(DateError::invalid_input()
                .with_message("Timestamp is not a UTC midnight."));
        }
        Self::from_epoch_days(epoch_milliseconds.div_euclid(MS_PER_DAY))
    }

    /// Creates a `Date` from a `YYYY-MM-DD` string.
    ///
    /// The string must be exactly the canonical form of the date it names, so
    /// `2024-3-15`, `20240315` and `2024-02-30` are all rejected.
    pub fn from_ymd(source: &str) -> DateResult<Self> {
        let parsed = parse_ymd(source)?;
        let date = Self::from_numeric(parsed.year, parsed.month, parsed.day)?;
        if date.as_str() != source {
            return Err(DateError::invalid_input()
                .with_message("Date string is not in canonical YYYY-MM-DD form."));
        }
        Ok(date)
    }

    /// Creates a `Date` from a year, a 1-based month and a day of the month.
    ///
    /// The components are balanced and then read back; a date whose fields do
    /// not survive that round trip (month 13, April 31st, day 0) fails with
    /// `InvalidInput`.
    pub fn from_numeric(year: i32, month: u8, day: u8) -> DateResult<Self> {
        let epoch_days = iso::balance(year.into(), month.into(), day.into())?;
        let date = Self::from_valid_epoch_days(epoch_days)?;
        if date.iso_date() != IsoDate::new_unchecked(year, month, day) {
            return Err(DateError::invalid_input()
                .with_message("Date components do not form a valid calendar date."));
        }
        Ok(date)
    }

    /// Resolves the civil date of `instant` in the time zone `time_zone`.
    pub fn from_instant_with_provider(
        instant: &Instant,
        time_zone: &str,
        provider: &impl TimeZoneProvider,
    ) -> DateResult<Self> {
        let identifier = provider.normalize_identifier(time_zone.as_bytes())?;
        let epoch_seconds = instant.epoch_seconds();
        let offset = provider.get_utc_offset(&identifier, epoch_seconds)?;
        let local_seconds = offset.to_local_seconds(epoch_seconds);
        let local_days = utils::epoch_seconds_to_epoch_days(local_seconds);
        let local = IsoDate::from_epoch_days(iso::check_epoch_days(local_days)?);
        Self::from_ymd(&FormattableDate::from(local).to_string())
    }

    /// Returns the current date in `time_zone`, reading the time from `clock`.
    pub fn today_with_provider(
        time_zone: &str,
        provider: &impl TimeZoneProvider,
        clock: &impl HostClock,
    ) -> DateResult<Self> {
        let now = Instant::from_clock(clock)?;
        Self::from_instant_with_provider(&now, time_zone, provider)
    }

    /// Returns the year.
    #[inline]
    #[must_use]
    pub fn year(&self) -> i32 {
        self.iso_date().year
    }

    /// Returns the month, 1 for January.
    #[inline]
    #[must_use]
    pub fn month(&self) -> u8 {
        self.iso_date().month
    }

    /// Returns the day of the month.
    #[inline]
    #[must_use]
    pub fn day(&self) -> u8 {
        self.iso_date().day
    }

    /// Returns the number of days since `1970-01-01`.
    #[inline]
    #[must_use]
    pub fn epoch_days(&self) -> i32 {
        self.epoch_days
    }

    /// Returns the epoch milliseconds of this date's UTC midnight.
    #[inline]
    #[must_use]
    pub fn epoch_milliseconds(&self) -> i64 {
        i64::from(self.epoch_days) * MS_PER_DAY
    }

    /// Returns the ISO day of the week, 1 for Monday through 7 for Sunday.
    #[must_use]
    pub fn day_of_week(&self) -> u8 {
        match utils::epoch_days_to_day_of_week(self.epoch_days.into()) {
            0 => 7,
            day => day,
        }
    }

    /// Returns the number of days in this date's month.
    #[must_use]
    pub fn days_in_month(&self) -> u8 {
        self.iso_date().days_in_month()
    }

    /// Returns the number of days in this date's year, 365 or 366.
    #[must_use]
    pub fn days_in_year(&self) -> u16 {
        if self.in_leap_year() {
            366
        } else {
            365
        }
    }

    /// Returns whether this date falls in a leap year.
    #[must_use]
    pub fn in_leap_year(&self) -> bool {
        self.iso_date().is_leap_year()
    }

    /// Returns the canonical `YYYY-MM-DD` string.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.ymd.as_str()
    }

    /// Returns the canonical `YYYY-MM-DD` string as an owned `String`.
    #[must_use]
    pub fn to_ymd_string(&self) -> String {
        self.as_str().into()
    }

    /// Returns the date `days` days later, or earlier for negative `days`.
    pub fn add_days(&self, days: i64) -> DateResult<Self> {
        let epoch_days = i64::from(self.epoch_days)
            .checked_add(days)
            .ok_or_else(|| {
                DateError::invalid_input().with_message("Day offset is too large.")
            })?;
        Self::from_epoch_days(epoch_days)
    }

    /// Returns the date `months` months later, keeping the day of the month.
    ///
    /// When the target month is too short the surplus days spill into the
    /// month after it: `2024-01-31` plus one month is `2024-03-02`.
    pub fn add_months(&self, months: i64) -> DateResult<Self> {
        let iso = self.iso_date();
        let month = i64::from(iso.month)
            .checked_add(months)
            .ok_or_else(|| {
                DateError::invalid_input().with_message("Month offset is too large.")
            })?;
        let epoch_days = iso::balance(iso.year.into(), month, iso.day.into())?;
        Self::from_valid_epoch_days(epoch_days)
    }

    /// Returns the date in the same month with day of the month `day`.
    ///
    /// Unlike [`Date::add_months`], this never leaves the month: asking for
    /// day 31 of April fails with `InvalidInput`.
    pub fn with_day_of_month(&self, day: u8) -> DateResult<Self> {
        let date = self.add_days(i64::from(day) - i64::from(self.day()))?;
        if date.day() != day {
            return Err(DateError::invalid_input()
                .with_message("Day does not exist in this month."));
        }
        Ok(date)
    }

    /// Returns the first day of this date's month.
    ///
    /// This never fails for a valid `Date`.
    pub fn first_of_month(&self) -> DateResult<Self> {
        self.with_day_of_month(1)
    }

    /// Returns the first day of the following month.
    pub fn first_of_next_month(&self) -> DateResult<Self> {
        // Thirty-one days past the first always lands in the next month.
        let next = self.first_of_month()?.add_days(31)?;
        date_assert!(next.month() != self.month(), "{} + 31 days stayed in its month", self);
        next.first_of_month()
    }

    /// Returns the last day of this date's month.
    pub fn last_of_month(&self) -> DateResult<Self> {
        self.first_of_next_month()?.add_days(-1)
    }

    /// Returns the following day.
    pub fn tomorrow(&self) -> DateResult<Self> {
        self.add_days(1)
    }

    /// Returns the previous day.
    pub fn yesterday(&self) -> DateResult<Self> {
        self.add_days(-1)
    }

    /// Returns an iterator over every date from `self` through `end`.
    ///
    /// The iterator is empty when `end` is before `self`.
    #[must_use]
    pub fn series_until(&self, end: &Self) -> DateSeries {
        DateSeries {
            next: self.epoch_days,
            end: end.epoch_days,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_same(&self, other: &Self) -> bool {
        self.epoch_days == other.epoch_days
    }

    #[inline]
    #[must_use]
    pub fn is_before(&self, other: &Self) -> bool {
        self.epoch_days < other.epoch_days
    }

    #[inline]
    #[must_use]
    pub fn is_after(&self, other: &Self) -> bool {
        self.epoch_days > other.epoch_days
    }

    #[inline]
    #[must_use]
    pub fn is_same_or_before(&self, other: &Self) -> bool {
        self.epoch_days <= other.epoch_days
    }

    #[inline]
    #[must_use]
    pub fn is_same_or_after(&self, other: &Self) -> bool {
        self.epoch_days >= other.epoch_days
    }
}

/// Returns the earlier of two dates.
#[must_use]
pub fn min(a: Date, b: Date) -> Date {
    if b.is_before(&a) {
        b
    } else {
        a
    }
}

/// Returns the later of two dates.
#[must_use]
pub fn max(a: Date, b: Date) -> Date {
    if b.is_after(&a) {
        b
    } else {
        a
    }
}

/// Counts the days from `start` through `end`, both included.
///
/// Fails with `InvalidArgument` when `start` is after `end`; the arguments are
/// never swapped.
pub fn count_days(start: &Date, end: &Date) -> DateResult<u32> {
    if start.is_after(end) {
        return Err(DateError::invalid_argument()
            .with_message("The start date must not be after the end date."));
    }
    Ok(end.epoch_days.abs_diff(start.epoch_days) + 1)
}

/// An iterator over consecutive dates, created by [`Date::series_until`].
#[derive(Debug, Clone)]
pub struct DateSeries {
    next: i32,
    end: i32,
}

impl Iterator for DateSeries {
    type Item = Date;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next > self.end {
            return None;
        }
        let date = Date::from_valid_epoch_days(self.next).ok()?;
        self.next += 1;
        Some(date)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.next > self.end {
            0
        } else {
            self.end.abs_diff(self.next) as usize + 1
        };
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for DateSeries {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.next > self.end {
            return None;
        }
        let date = Date::from_valid_epoch_days(self.end).ok()?;
        self.end -= 1;
        Some(date)
    }
}

impl ExactSizeIterator for DateSeries {}

impl FusedIterator for DateSeries {}

// ==== Trait impls ====

impl PartialEq for Date {
    fn eq(&self, other: &Self) -> bool {
        self.epoch_days == other.epoch_days
    }
}

impl Eq for Date {}

impl PartialOrd for Date {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Date {
    fn cmp(&self, other: &Self) -> Ordering {
        self.epoch_days.cmp(&other.epoch_days)
    }
}

impl core::hash::Hash for Date {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.epoch_days.hash(state);
    }
}

impl fmt::Debug for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Date").field(&self.as_str()).finish()
    }
}

impl Writeable for Date {
    fn write_to<W: fmt::Write + ?Sized>(&self, sink: &mut W) -> fmt::Result {
        sink.write_str(self.as_str())
    }

    fn writeable_length_hint(&self) -> LengthHint {
        LengthHint::exact(self.ymd.len())
    }
}

impl_display_with_writeable!(Date);

impl FromStr for Date {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_ymd(s)
    }
}

impl TryFrom<&str> for Date {
    type Error = DateError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::from_ymd(value)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Date {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Date {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct DateVisitor;

        impl serde::de::Visitor<'_> for DateVisitor {
            type Value = Date;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a YYYY-MM-DD date string")
            }

            fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Self::Value, E> {
                Date::from_ymd(v).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(DateVisitor)
    }
}
