//! Monthly aggregator.
//!
//! A [`MonthSummary`] holds one [`DaySummary`] per day of a calendar month,
//! built by running the daily partitioner on each day.  It also knows how
//! many blank cells a Sunday-first, seven-column grid needs around the
//! month.

use escala_core::errors::Result;
use escala_time::{Date, YearMonth};
use serde::Serialize;
use tracing::debug;

use crate::member::TeamMember;
use crate::partition::{partition, DailyRoster};

/// Occupancy of one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DaySummary<'a> {
    /// The day.
    pub date: Date,
    /// Members working.
    pub working_count: usize,
    /// Members off by rule.
    pub off_count: usize,
    /// Members on vacation.
    pub on_vacation: Vec<&'a TeamMember>,
    /// Members with a birthday on this day.
    pub birthdays: Vec<&'a TeamMember>,
}

impl<'a> From<DailyRoster<'a>> for DaySummary<'a> {
    fn from(roster: DailyRoster<'a>) -> Self {
        DaySummary {
            date: roster.date(),
            working_count: roster.working().len(),
            off_count: roster.off().len(),
            on_vacation: roster.on_vacation().to_vec(),
            birthdays: roster.birthdays().to_vec(),
        }
    }
}

/// Per-day occupancy of a whole month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthSummary<'a> {
    month: YearMonth,
    days: Vec<DaySummary<'a>>,
}

/// Summarize `month` for `members`.
pub fn month_summary(members: &[TeamMember], month: YearMonth) -> Result<MonthSummary<'_>> {
    let days = month
        .days()
        .map(|day| partition(members, day).map(DaySummary::from))
        .collect::<Result<Vec<_>>>()?;
    debug!(%month, members = members.len(), days = days.len(), "month summary");
    Ok(MonthSummary { month, days })
}

/// Summarize the month `month` (1–12) of `year`.
///
/// # Errors
/// [`escala_core::Error::InvalidCalendarDate`] for a month outside 1–12.
pub fn month_summary_for(members: &[TeamMember], year: i32, month: u8) -> Result<MonthSummary<'_>> {
    month_summary(members, YearMonth::new(year, month)?)
}

impl<'a> MonthSummary<'a> {
    /// The month described.
    pub fn month(&self) -> YearMonth {
        self.month
    }

    /// One entry per day, in order.
    pub fn days(&self) -> &[DaySummary<'a>] {
        &self.days
    }

    /// Number of days in the month.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Return `true` if the summary has no days; a real month never does.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Entry for day-of-month `day` (1-based).
    pub fn day(&self, day: u8) -> Option<&DaySummary<'a>> {
        day.checked_sub(1).and_then(|i| self.days.get(i as usize))
    }

    /// Blank grid cells before the 1st in a Sunday-first week.
    pub fn leading_blanks(&self) -> u8 {
        self.month.first_weekday().index()
    }

    /// Blank grid cells after the last day so the grid fills whole weeks.
    pub fn trailing_blanks(&self) -> u8 {
        let used = self.leading_blanks() as usize + self.days.len();
        ((7 - used % 7) % 7) as u8
    }

    /// Number of grid rows (weeks) the month occupies.
    pub fn weeks(&self) -> usize {
        (self.leading_blanks() as usize + self.days.len() + self.trailing_blanks() as usize) / 7
    }
}
