//! `TeamMember` and `MemberId`.

use escala_core::errors::Result;
use escala_schedule::ScheduleRule;
use escala_time::Date;
use serde::{Deserialize, Serialize};

use crate::attendance::AttendanceState;
use crate::vacation::{is_on_vacation, VacationInterval};

/// Opaque unique identifier of a team member.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemberId(String);

impl MemberId {
    /// Wrap an identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for MemberId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MemberId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for MemberId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A team member as read by the scheduling functions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    /// Identity of the member.
    pub id: MemberId,
    /// Display name; not unique.
    pub name: String,
    /// Day-off rule.
    pub schedule: ScheduleRule,
    /// Birthday; only month and day matter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthday: Option<Date>,
    /// Vacation intervals, possibly overlapping.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub vacations: Vec<VacationInterval>,
}

impl TeamMember {
    /// A member with no birthday and no vacations.
    pub fn new(id: impl Into<MemberId>, name: impl Into<String>, schedule: ScheduleRule) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            schedule,
            birthday: None,
            vacations: Vec::new(),
        }
    }

    /// Set the birthday.
    pub fn with_birthday(mut self, birthday: Date) -> Self {
        self.birthday = Some(birthday);
        self
    }

    /// Add a vacation interval.
    pub fn with_vacation(mut self, vacation: VacationInterval) -> Self {
        self.vacations.push(vacation);
        self
    }

    /// Return `true` if `day` falls in one of the member's vacations.
    pub fn is_on_vacation(&self, day: Date) -> bool {
        is_on_vacation(&self.vacations, day)
    }

    /// Return `true` if the member's birthday falls on `day`, ignoring the
    /// year.  A February 29 birthday only matches February 29.
    pub fn has_birthday_on(&self, day: Date) -> bool {
        self.birthday.is_some_and(|b| b.same_month_day(day))
    }

    /// The member's attendance on `day`.
    ///
    /// The rule is validated before vacations are consulted, so a broken
    /// rule is reported even on vacation days.
    pub fn attendance(&self, day: Date) -> Result<AttendanceState> {
        self.schedule.validate()?;
        if self.is_on_vacation(day) {
            return Ok(AttendanceState::OnVacation);
        }
        if self.schedule.is_off(day)? {
            Ok(AttendanceState::Off)
        } else {
            Ok(AttendanceState::Working)
        }
    }

    /// Next rule-derived day off from `reference`; vacations are not
    /// considered.  See [`ScheduleRule::next_day_off`].
    pub fn next_day_off(&self, reference: Date) -> Result<Date> {
        self.schedule.next_day_off(reference)
    }
}
