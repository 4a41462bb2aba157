//! Daily partitioner.
//!
//! [`partition`] splits a roster into three disjoint groups for one day:
//! on vacation, off, and working.  Vacation is checked first, so it always
//! wins over the schedule rule.  Each group keeps roster order.

use escala_core::errors::Result;
use escala_time::Date;
use serde::Serialize;
use tracing::debug;

use crate::attendance::AttendanceState;
use crate::member::{MemberId, TeamMember};

/// Everyone's attendance on one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyRoster<'a> {
    date: Date,
    working: Vec<&'a TeamMember>,
    off: Vec<&'a TeamMember>,
    on_vacation: Vec<&'a TeamMember>,
    birthdays: Vec<&'a TeamMember>,
}

/// Partition `members` by attendance on `day`.
///
/// # Errors
/// Fails with the first member whose schedule rule is invalid; no partial
/// roster is returned.
pub fn partition(members: &[TeamMember], day: Date) -> Result<DailyRoster<'_>> {
    let mut roster = DailyRoster {
        date: day,
        working: Vec::new(),
        off: Vec::new(),
        on_vacation: Vec::new(),
        birthdays: Vec::new(),
    };
    for member in members {
        match member.attendance(day)? {
            AttendanceState::OnVacation => roster.on_vacation.push(member),
            AttendanceState::Off => roster.off.push(member),
            AttendanceState::Working => roster.working.push(member),
        }
        if member.has_birthday_on(day) {
            roster.birthdays.push(member);
        }
    }
    debug!(
        %day,
        working = roster.working.len(),
        off = roster.off.len(),
        on_vacation = roster.on_vacation.len(),
        "partitioned roster"
    );
    Ok(roster)
}

impl<'a> DailyRoster<'a> {
    /// The day described.
    pub fn date(&self) -> Date {
        self.date
    }

    /// Members scheduled to work.
    pub fn working(&self) -> &[&'a TeamMember] {
        &self.working
    }

    /// Members off by schedule rule.
    pub fn off(&self) -> &[&'a TeamMember] {
        &self.off
    }

    /// Members on vacation.
    pub fn on_vacation(&self) -> &[&'a TeamMember] {
        &self.on_vacation
    }

    /// Members whose birthday is today, whatever their attendance.
    pub fn birthdays(&self) -> &[&'a TeamMember] {
        &self.birthdays
    }

    /// Members in the given group.
    pub fn group(&self, state: AttendanceState) -> &[&'a TeamMember] {
        match state {
            AttendanceState::Working => &self.working,
            AttendanceState::Off => &self.off,
            AttendanceState::OnVacation => &self.on_vacation,
        }
    }

    /// The group containing the member with `id`, if they are on the roster.
    pub fn state_of(&self, id: &MemberId) -> Option<AttendanceState> {
        [
            AttendanceState::Working,
            AttendanceState::Off,
            AttendanceState::OnVacation,
        ]
        .into_iter()
        .find(|&state| self.group(state).iter().any(|m| &m.id == id))
    }

    /// Group sizes.
    pub fn headcount(&self) -> Headcount {
        Headcount {
            working: self.working.len(),
            off: self.off.len(),
            on_vacation: self.on_vacation.len(),
        }
    }

    /// Number of members partitioned.
    pub fn len(&self) -> usize {
        self.working.len() + self.off.len() + self.on_vacation.len()
    }

    /// Return `true` for an empty roster.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Group sizes of a [`DailyRoster`], e.g. for a morning notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Headcount {
    /// Members working.
    pub working: usize,
    /// Members off.
    pub off: usize,
    /// Members on vacation.
    pub on_vacation: usize,
}

impl std::fmt::Display for Headcount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "working: {}, off: {}, on vacation: {}",
            self.working, self.off, self.on_vacation
        )
    }
}

#[cfg(test)]
mod tests {
    use escala_schedule::ScheduleRule;
    use escala_time::Weekday;

    use super::*;
    use crate::vacation::VacationInterval;

    fn date(y: i32, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn team() -> Vec<TeamMember> {
        vec![
            TeamMember::new("1", "Ana", ScheduleRule::rotating(date(2025, 8, 1), 6).unwrap()),
            TeamMember::new("2", "Bruno", ScheduleRule::fixed_weekday(Weekday::Sunday))
                .with_birthday(date(1988, 8, 3)),
            TeamMember::new("3", "Carla", ScheduleRule::rotating(date(2025, 8, 2), 6).unwrap())
                .with_vacation(VacationInterval::new(date(2025, 8, 1), date(2025, 8, 5)).unwrap()),
        ]
    }

    #[test]
    fn groups_keep_roster_order() {
        let members = team();
        // Sunday 2025-08-03: Bruno off, Carla on vacation, Ana working
        let day = partition(&members, date(2025, 8, 3)).unwrap();
        assert_eq!(day.working().iter().map(|m| m.name.as_str()).collect::<Vec<_>>(), ["Ana"]);
        assert_eq!(day.off()[0].name, "Bruno");
        assert_eq!(day.on_vacation()[0].name, "Carla");
        assert_eq!(day.birthdays()[0].name, "Bruno");
        assert_eq!(day.len(), 3);
        assert_eq!(day.headcount().to_string(), "working: 1, off: 1, on vacation: 1");
    }

    #[test]
    fn state_lookup() {
        let members = team();
        let day = partition(&members, date(2025, 8, 7)).unwrap();
        assert_eq!(day.state_of(&"1".into()), Some(AttendanceState::Off));
        assert_eq!(day.state_of(&"3".into()), Some(AttendanceState::Working));
        assert_eq!(day.state_of(&"nobody".into()), None);
    }

    #[test]
    fn empty_roster() {
        let day = partition(&[], date(2025, 8, 7)).unwrap();
        assert!(day.is_empty());
        assert_eq!(day.headcount(), Headcount::default());
    }
}
