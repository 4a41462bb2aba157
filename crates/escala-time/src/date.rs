//! `Date` type — the calendar-day normalizer.
//!
//! A date is stored as a day index: the whole number of days since the
//! epoch **January 1, 1970** (index 0).  The index carries no time of day
//! and no timezone, so the difference of two indices is always the exact
//! number of calendar days between them, whatever daylight-saving
//! transitions happen in between in some local zone.
//!
//! # Index convention
//! * Index 0 = 1970-01-01 (a Thursday).
//! * Negative indices are dates before the epoch.
//! * The valid date range is 0001-01-01 to 9999-12-31 (proleptic Gregorian).
//!
//! Month lengths and leap years are derived from the index conversion
//! itself, never from a per-month table.

use std::str::FromStr;

use chrono::Datelike;
use escala_core::errors::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::weekday::Weekday;

/// A calendar day represented as a day index.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Date(i32);

/// Smallest supported year.
pub const MIN_YEAR: i32 = 1;

/// Largest supported year.
pub const MAX_YEAR: i32 = 9999;

// Days from 0000-03-01 to 1970-01-01 in the proleptic Gregorian calendar.
const EPOCH_SHIFT: i32 = 719_468;

// Days in one 400-year Gregorian cycle.
const DAYS_PER_ERA: i32 = 146_097;

impl Date {
    /// The epoch, 1970-01-01.
    pub const EPOCH: Date = Date(0);

    /// Minimum valid date: January 1, 0001.
    pub const MIN: Date = Date(-719_162);

    /// Maximum valid date: December 31, 9999.
    pub const MAX: Date = Date(2_932_896);

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from a day index.
    ///
    /// Returns an error if the index lies outside [`Date::MIN`]..=[`Date::MAX`].
    pub fn from_index(index: i32) -> Result<Self> {
        let d = Date(index);
        if d < Self::MIN || d > Self::MAX {
            return Err(Error::DateOutOfRange(format!(
                "day index {index} outside [{}, {}]",
                Self::MIN.0,
                Self::MAX.0
            )));
        }
        Ok(d)
    }

    /// Create a date from year, month (1–12), and day-of-month (1–31).
    ///
    /// Returns [`Error::InvalidCalendarDate`] for triples that do not name a
    /// real day, e.g. February 30 or February 29 of a common year.
    pub fn from_ymd(year: i32, month: u8, day: u8) -> Result<Self> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(Error::InvalidCalendarDate(format!(
                "year {year} out of range [{MIN_YEAR}, {MAX_YEAR}]"
            )));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::InvalidCalendarDate(format!(
                "month {month} out of range [1, 12]"
            )));
        }
        let index = index_from_ymd(year, month, day);
        // An overflowing day-of-month lands in a later month; the round trip
        // catches it without consulting a table of month lengths.
        if day == 0 || ymd_from_index(index) != (year, month, day) {
            return Err(Error::InvalidCalendarDate(format!(
                "day {day} out of range [1, {}] for {year:04}-{month:02}",
                month_length(year, month)
            )));
        }
        Ok(Date(index))
    }

    /// Create a date from components known to be valid.
    pub(crate) fn from_ymd_unchecked(year: i32, month: u8, day: u8) -> Self {
        debug_assert!(Self::from_ymd(year, month, day).is_ok());
        Date(index_from_ymd(year, month, day))
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the day index (days since 1970-01-01).
    pub fn index(&self) -> i32 {
        self.0
    }

    /// Return `(year, month, day)`.
    pub fn ymd(&self) -> (i32, u8, u8) {
        ymd_from_index(self.0)
    }

    /// Return the year.
    pub fn year(&self) -> i32 {
        self.ymd().0
    }

    /// Return the month (1–12).
    pub fn month(&self) -> u8 {
        self.ymd().1
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        self.ymd().2
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        // The epoch was a Thursday (index 4 with Sunday = 0).
        let w = (self.0 + 4).rem_euclid(7) as u8;
        Weekday::from_index(w).expect("rem_euclid always in 0..7")
    }

    /// Return `true` if both dates share month and day-of-month, ignoring
    /// the year.
    ///
    /// February 29 only matches February 29.
    pub fn same_month_day(&self, other: Date) -> bool {
        let (_, m1, d1) = self.ymd();
        let (_, m2, d2) = other.ymd();
        m1 == m2 && d1 == d2
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days.  Returns an error if the result is out of range.
    pub fn add_days(self, n: i32) -> Result<Self> {
        let index = self.0.checked_add(n).ok_or_else(|| {
            Error::DateOutOfRange(format!("{self} + {n} days overflows"))
        })?;
        Self::from_index(index)
    }

    /// Return the number of calendar days between `self` and `other`.
    /// Positive if `other > self`.
    pub fn days_between(self, other: Date) -> i32 {
        other.0 - self.0
    }

    /// Iterate over every day from `self` to `end`, both inclusive.
    ///
    /// Empty when `end < self`.
    pub fn days_through(self, end: Date) -> impl Iterator<Item = Date> {
        (self.0..=end.0).map(Date)
    }
}

// ── Arithmetic operators ──────────────────────────────────────────────────────

impl std::ops::Add<i32> for Date {
    type Output = Self;

    /// # Panics
    /// Panics if the result leaves the supported range; use
    /// [`Date::add_days`] to handle that case.
    fn add(self, rhs: i32) -> Self {
        self.add_days(rhs).expect("date addition out of range")
    }
}

impl std::ops::Sub<i32> for Date {
    type Output = Self;

    /// # Panics
    /// Panics if the result leaves the supported range.
    fn sub(self, rhs: i32) -> Self {
        self.add_days(-rhs).expect("date subtraction out of range")
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        self.0 - rhs.0
    }
}

// ── Text ──────────────────────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = self.ymd();
        write!(f, "{y:04}-{m:02}-{d:02}")
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Date({self})")
    }
}

impl FromStr for Date {
    type Err = Error;

    /// Parse an ISO-8601 calendar date, `YYYY-MM-DD`.
    fn from_str(s: &str) -> Result<Self> {
        let bad = || Error::Parse(format!("expected YYYY-MM-DD, got {s:?}"));
        let mut parts = s.split('-');
        let (Some(y), Some(m), Some(d), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(bad());
        };
        let all_digits = |p: &str, len: usize| p.len() == len && p.bytes().all(|b| b.is_ascii_digit());
        if !(all_digits(y, 4) && all_digits(m, 2) && all_digits(d, 2)) {
            return Err(bad());
        }
        let year = y.parse().map_err(|_| bad())?;
        let month = m.parse().map_err(|_| bad())?;
        let day = d.parse().map_err(|_| bad())?;
        Date::from_ymd(year, month, day)
    }
}

impl Serialize for Date {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Date {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// ── chrono interop ────────────────────────────────────────────────────────────

impl From<Date> for chrono::NaiveDate {
    fn from(d: Date) -> Self {
        // 0001-01-01 is day 1 counted from the Common Era.
        chrono::NaiveDate::from_num_days_from_ce_opt(d.0 + 719_163)
            .expect("every supported date is representable by chrono")
    }
}

impl TryFrom<chrono::NaiveDate> for Date {
    type Error = Error;

    fn try_from(d: chrono::NaiveDate) -> Result<Self> {
        // month() and day() are at most 12 and 31.
        Date::from_ymd(d.year(), d.month() as u8, d.day() as u8)
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Whether a given year is a leap year.
pub fn is_leap_year(year: i32) -> bool {
    month_length(year, 2) == 29
}

/// Number of days in a given month/year.
///
/// Returns an error for months outside 1–12 or years outside the supported
/// range.
pub fn days_in_month(year: i32, month: u8) -> Result<u8> {
    // Validate through the regular constructor.
    Date::from_ymd(year, month, 1)?;
    Ok(month_length(year, month))
}

/// Distance between the first day of a month and the first day of the next.
pub(crate) fn month_length(year: i32, month: u8) -> u8 {
    let (ny, nm) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
    (index_from_ymd(ny, nm, 1) - index_from_ymd(year, month, 1)) as u8
}

/// Convert (year, month, day) to a day index.
///
/// Works on a year that starts on March 1 so that the leap day is the last
/// day of its year; `day` may overflow the month.
fn index_from_ymd(year: i32, month: u8, day: u8) -> i32 {
    let m = month as i32;
    let d = day as i32;
    let y = if m <= 2 { year - 1 } else { year };
    let era = y.div_euclid(400);
    let yoe = y - era * 400; // [0, 399]
    let mp = (m + 9) % 12; // March = 0
    let doy = (153 * mp + 2) / 5 + d - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * DAYS_PER_ERA + doe - EPOCH_SHIFT
}

/// Decompose a day index into (year, month, day).
fn ymd_from_index(index: i32) -> (i32, u8, u8) {
    let z = index + EPOCH_SHIFT;
    let era = z.div_euclid(DAYS_PER_ERA);
    let doe = z - era * DAYS_PER_ERA; // [0, 146096]
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365; // [0, 399]
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100); // [0, 365]
    let mp = (5 * doy + 2) / 153; // [0, 11]
    let d = doy - (153 * mp + 2) / 5 + 1;
    let m = if mp < 10 { mp + 3 } else { mp - 9 };
    let y = yoe + era * 400 + i32::from(m <= 2);
    (y, m as u8, d as u8)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
