//! # escala
//!
//! Team rotation scheduling: who works, who is off and who is on vacation
//! on any calendar day.
//!
//! This crate is a **façade** that re-exports the public items of the
//! workspace crates. Application code should depend on this crate rather
//! than the individual `escala-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use escala::prelude::*;
//!
//! let anchor = Date::from_ymd(2025, 8, 1).unwrap();
//! let mut roster = Roster::new();
//! roster
//!     .add(TeamMember::new("1", "Ana", ScheduleRule::rotating(anchor, 6).unwrap()))
//!     .unwrap();
//! roster
//!     .add(TeamMember::new("2", "Bruno", ScheduleRule::fixed_weekday(Weekday::Sunday)))
//!     .unwrap();
//!
//! let day = roster.partition(Date::from_ymd(2025, 8, 7).unwrap()).unwrap();
//! assert_eq!(day.off()[0].name, "Ana");
//! assert_eq!(day.working()[0].name, "Bruno");
//!
//! let next = roster.members()[0]
//!     .next_day_off(Date::from_ymd(2025, 8, 20).unwrap())
//!     .unwrap();
//! assert_eq!(next.to_string(), "2025-08-25");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error definitions and settings.
pub use escala_core as core;

/// Calendar day, weekday, month and clock types.
pub use escala_time as time;

/// Schedule rules and the next-day-off search.
pub use escala_schedule as schedule;

/// Members, vacations, daily partition and monthly summary.
pub use escala_roster as roster;

/// The types most programs need.
pub mod prelude {
    pub use escala_core::{Error, Result, Settings};
    pub use escala_roster::{
        AttendanceState, DailyRoster, MemberId, MonthSummary, Roster, RosterProvider, TeamMember,
        VacationInterval,
    };
    pub use escala_schedule::ScheduleRule;
    pub use escala_time::{Clock, Date, FixedClock, SystemClock, Weekday, YearMonth};
}
