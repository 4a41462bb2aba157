//! `AttendanceState` — what a member is doing on a given day.

use serde::{Deserialize, Serialize};

/// Attendance of one member on one day.
///
/// Vacation dominates: a member on vacation is `OnVacation` even on a day
/// their schedule rule gives off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceState {
    /// Scheduled to work.
    Working,
    /// Off by schedule rule.
    Off,
    /// On vacation.
    OnVacation,
}

impl std::fmt::Display for AttendanceState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            AttendanceState::Working => "working",
            AttendanceState::Off => "off",
            AttendanceState::OnVacation => "on vacation",
        };
        f.write_str(s)
    }
}
