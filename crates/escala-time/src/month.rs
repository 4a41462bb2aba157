//! `Month` and `YearMonth` — month-of-year enum and calendar-month
//! navigation.

use std::str::FromStr;

use escala_core::errors::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::date::{month_length, Date, MAX_YEAR, MIN_YEAR};
use crate::weekday::Weekday;

/// Month of the year.
///
/// Variants are numbered 1–12 (January = 1, December = 12).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Month {
    /// January (1).
    January = 1,
    /// February (2).
    February = 2,
    /// March (3).
    March = 3,
    /// April (4).
    April = 4,
    /// May (5).
    May = 5,
    /// June (6).
    June = 6,
    /// July (7).
    July = 7,
    /// August (8).
    August = 8,
    /// September (9).
    September = 9,
    /// October (10).
    October = 10,
    /// November (11).
    November = 11,
    /// December (12).
    December = 12,
}

impl Month {
    const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    /// Construct from a number (1 = January … 12 = December).
    ///
    /// Returns `None` if the value is out of range.
    pub fn from_number(n: u8) -> Option<Self> {
        n.checked_sub(1).and_then(|i| Self::ALL.get(i as usize)).copied()
    }

    /// Return the 1-based month number.
    pub fn number(&self) -> u8 {
        *self as u8
    }

    /// Return the full name (`"January"`, `"February"`, …).
    pub fn long_name(&self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
            Month::July => "July",
            Month::August => "August",
            Month::September => "September",
            Month::October => "October",
            Month::November => "November",
            Month::December => "December",
        }
    }
}

impl std::fmt::Display for Month {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.long_name())
    }
}

impl From<Month> for u8 {
    fn from(m: Month) -> u8 {
        m as u8
    }
}

/// A calendar month of a specific year, e.g. February 2024.
///
/// Ordered chronologically.  Serialized as `"YYYY-MM"`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: i32,
    month: Month,
}

impl YearMonth {
    /// Create from a year and a month number (1–12).
    pub fn new(year: i32, month: u8) -> Result<Self> {
        let month = Month::from_number(month).ok_or_else(|| {
            Error::InvalidCalendarDate(format!("month {month} out of range [1, 12]"))
        })?;
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(Error::InvalidCalendarDate(format!(
                "year {year} out of range [{MIN_YEAR}, {MAX_YEAR}]"
            )));
        }
        Ok(Self { year, month })
    }

    /// The month containing `date`.
    pub fn of(date: Date) -> Self {
        let (year, m, _) = date.ymd();
        let month = Month::from_number(m).expect("Date::ymd returns a month in 1..=12");
        Self { year, month }
    }

    /// Return the year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Return the month.
    pub fn month(&self) -> Month {
        self.month
    }

    /// The following month, rolling December over into January.
    pub fn next(self) -> Result<Self> {
        match self.month {
            Month::December => Self::new(self.year + 1, 1),
            m => Self::new(self.year, m.number() + 1),
        }
    }

    /// The preceding month, rolling January back into December.
    pub fn prev(self) -> Result<Self> {
        match self.month {
            Month::January => Self::new(self.year - 1, 12),
            m => Self::new(self.year, m.number() - 1),
        }
    }

    /// Number of days in this month (28–31).
    pub fn len_days(&self) -> u8 {
        month_length(self.year, self.month.number())
    }

    /// The 1st of the month.
    pub fn first_day(&self) -> Date {
        Date::from_ymd_unchecked(self.year, self.month.number(), 1)
    }

    /// The last day of the month.
    pub fn last_day(&self) -> Date {
        Date::from_ymd_unchecked(self.year, self.month.number(), self.len_days())
    }

    /// The `day`-th day of the month.
    pub fn day(&self, day: u8) -> Result<Date> {
        Date::from_ymd(self.year, self.month.number(), day)
    }

    /// Weekday of the 1st of the month.
    pub fn first_weekday(&self) -> Weekday {
        self.first_day().weekday()
    }

    /// Iterate over every day of the month in order.
    pub fn days(&self) -> impl Iterator<Item = Date> {
        self.first_day().days_through(self.last_day())
    }

    /// Return `true` if `date` falls in this month.
    pub fn contains(&self, date: Date) -> bool {
        Self::of(date) == *self
    }
}

impl std::fmt::Display for YearMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month.number())
    }
}

impl std::fmt::Debug for YearMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "YearMonth({self})")
    }
}

impl FromStr for YearMonth {
    type Err = Error;

    /// Parse `YYYY-MM`.
    fn from_str(s: &str) -> Result<Self> {
        let bad = || Error::Parse(format!("expected YYYY-MM, got {s:?}"));
        let (y, m) = s.split_once('-').ok_or_else(bad)?;
        if y.len() != 4 || m.len() != 2 || !(y.bytes().chain(m.bytes()).all(|b| b.is_ascii_digit())) {
            return Err(bad());
        }
        YearMonth::new(y.parse().map_err(|_| bad())?, m.parse().map_err(|_| bad())?)
    }
}

impl Serialize for YearMonth {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for YearMonth {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
