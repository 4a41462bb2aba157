//! Reference clock.
//!
//! Scheduling functions never ask for the current date themselves; callers
//! obtain "today" from a [`Clock`] and pass it in.  Tests use
//! [`FixedClock`], applications [`SystemClock`].

use chrono::{FixedOffset, Local, Utc};
use escala_core::errors::{Error, Result};

use crate::date::Date;

/// Source of the current calendar day.
pub trait Clock: std::fmt::Debug + Send + Sync {
    /// Today's date in the clock's timezone.
    fn today(&self) -> Result<Date>;
}

/// A clock frozen on one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(Date);

impl FixedClock {
    /// Create a clock that always reports `date`.
    pub fn new(date: Date) -> Self {
        Self(date)
    }
}

impl Clock for FixedClock {
    fn today(&self) -> Result<Date> {
        Ok(self.0)
    }
}

/// The system clock, read in the host's local timezone or in a fixed UTC
/// offset.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock {
    offset: Option<FixedOffset>,
}

impl SystemClock {
    /// Read the wall clock in the host's local timezone.
    pub fn local() -> Self {
        Self { offset: None }
    }

    /// Read the wall clock at a fixed offset from UTC, in minutes east.
    pub fn with_utc_offset_minutes(minutes: i32) -> Result<Self> {
        let offset = minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .ok_or_else(|| Error::Config(format!("invalid UTC offset: {minutes} minutes")))?;
        Ok(Self {
            offset: Some(offset),
        })
    }
}

impl Clock for SystemClock {
    fn today(&self) -> Result<Date> {
        let naive = match self.offset {
            Some(offset) => Utc::now().with_timezone(&offset).date_naive(),
            None => Local::now().date_naive(),
        };
        Date::try_from(naive)
    }
}
