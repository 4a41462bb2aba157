//! # escala-roster
//!
//! Team members, vacations, the daily partitioner and the monthly
//! aggregator, plus the editable [`Roster`] and legacy import.
//!
//! Every function here is a pure read of the members it is given; a
//! partition or summary borrows the members and never copies them.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `AttendanceState` — working, off or on vacation.
pub mod attendance;

/// Import of rosters saved by the browser editor.
pub mod legacy;

/// `TeamMember` and `MemberId`.
pub mod member;

/// Monthly aggregator.
pub mod month_summary;

/// Daily partitioner.
pub mod partition;

/// `RosterProvider` and the editable `Roster`.
pub mod roster;

/// Vacation intervals and the upcoming-vacations view.
pub mod vacation;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use attendance::AttendanceState;
pub use legacy::import_roster;
pub use member::{MemberId, TeamMember};
pub use month_summary::{month_summary, month_summary_for, DaySummary, MonthSummary};
pub use partition::{partition, DailyRoster, Headcount};
pub use roster::{Roster, RosterProvider};
pub use vacation::{is_on_vacation, upcoming_vacations, UpcomingVacation, VacationInterval};
