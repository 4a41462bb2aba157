//! Vacation intervals and the vacation overlap checker.

use escala_core::errors::{Error, Result};
use escala_time::Date;
use serde::{Deserialize, Serialize};

use crate::member::TeamMember;

/// A closed range of vacation days, `start ..= end`.
///
/// An interval that ends before it starts cannot be built, neither through
/// [`VacationInterval::new`] nor by deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "IntervalRecord")]
pub struct VacationInterval {
    start: Date,
    end: Date,
}

#[derive(Deserialize)]
struct IntervalRecord {
    start: Date,
    end: Date,
}

impl TryFrom<IntervalRecord> for VacationInterval {
    type Error = Error;

    fn try_from(r: IntervalRecord) -> Result<Self> {
        VacationInterval::new(r.start, r.end)
    }
}

impl VacationInterval {
    /// Create the interval `start ..= end`.
    ///
    /// # Errors
    /// [`Error::InvalidInterval`] if `end < start`.  The bounds are never
    /// swapped.
    pub fn new(start: Date, end: Date) -> Result<Self> {
        if end < start {
            return Err(Error::InvalidInterval(format!(
                "{start} ..= {end} ends before it starts"
            )));
        }
        Ok(Self { start, end })
    }

    /// A one-day vacation.
    pub fn single_day(day: Date) -> Self {
        Self {
            start: day,
            end: day,
        }
    }

    /// First vacation day.
    pub fn start(&self) -> Date {
        self.start
    }

    /// Last vacation day.
    pub fn end(&self) -> Date {
        self.end
    }

    /// Return `true` if `day` is a vacation day of this interval.
    pub fn contains(&self, day: Date) -> bool {
        self.start <= day && day <= self.end
    }

    /// Number of days covered, at least 1.
    pub fn len_days(&self) -> i32 {
        self.end - self.start + 1
    }

    /// Return `true` if the two intervals share at least one day.
    pub fn overlaps(&self, other: &VacationInterval) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Iterate over the vacation days.
    pub fn days(&self) -> impl Iterator<Item = Date> {
        self.start.days_through(self.end)
    }
}

impl std::fmt::Display for VacationInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ..= {}", self.start, self.end)
    }
}

/// Return `true` if `day` lies in any of `vacations`.
///
/// Overlapping and duplicate intervals are fine; an empty set never matches.
pub fn is_on_vacation(vacations: &[VacationInterval], day: Date) -> bool {
    vacations.iter().any(|v| v.contains(day))
}

/// A member's vacation that has not finished yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UpcomingVacation<'a> {
    /// Who is going on, or is already on, vacation.
    pub member: &'a TeamMember,
    /// The interval itself.
    pub interval: VacationInterval,
}

/// Every vacation in `members` whose last day is `today` or later, ordered
/// by start day, then by roster order.
pub fn upcoming_vacations(members: &[TeamMember], today: Date) -> Vec<UpcomingVacation<'_>> {
    let mut upcoming: Vec<UpcomingVacation<'_>> = members
        .iter()
        .flat_map(|member| {
            member
                .vacations
                .iter()
                .filter(|v| v.end() >= today)
                .map(move |&interval| UpcomingVacation { member, interval })
        })
        .collect();
    // stable: equal starts keep roster order
    upcoming.sort_by_key(|u| u.interval.start());
    upcoming
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn inclusive_bounds() {
        let v = VacationInterval::new(date(2025, 10, 13), date(2025, 10, 31)).unwrap();
        assert!(v.contains(date(2025, 10, 13)));
        assert!(v.contains(date(2025, 10, 19)));
        assert!(v.contains(date(2025, 10, 31)));
        assert!(!v.contains(date(2025, 10, 12)));
        assert!(!v.contains(date(2025, 11, 1)));
        assert_eq!(v.len_days(), 19);
        assert_eq!(v.days().count(), 19);
    }

    #[test]
    fn reversed_interval_is_rejected() {
        let err = VacationInterval::new(date(2025, 10, 31), date(2025, 10, 13)).unwrap_err();
        assert!(matches!(err, Error::InvalidInterval(_)));
        let json = r#"{"start":"2025-10-31","end":"2025-10-13"}"#;
        assert!(serde_json::from_str::<VacationInterval>(json).is_err());
    }

    #[test]
    fn union_semantics() {
        let a = VacationInterval::new(date(2025, 1, 1), date(2025, 1, 10)).unwrap();
        let b = VacationInterval::new(date(2025, 1, 5), date(2025, 1, 15)).unwrap();
        let set = [a, b, b];
        assert!(a.overlaps(&b));
        assert!(is_on_vacation(&set, date(2025, 1, 12)));
        assert!(is_on_vacation(&set, date(2025, 1, 1)));
        assert!(!is_on_vacation(&set, date(2025, 1, 16)));
        assert!(!is_on_vacation(&[], date(2025, 1, 5)));
    }

    #[test]
    fn single_day() {
        let v = VacationInterval::single_day(date(2025, 12, 24));
        assert_eq!(v.len_days(), 1);
        assert_eq!(v.to_string(), "2025-12-24 ..= 2025-12-24");
    }
}
