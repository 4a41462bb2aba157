//! # escala-schedule
//!
//! Day-off schedule rules: the attendance rule evaluator and the
//! next-day-off search built on it.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Next-day-off search.
pub mod next_off;

/// `ScheduleRule` and its flat record form.
pub mod rule;

pub use next_off::DaysOff;
pub use rule::{RuleKind, RuleRecord, ScheduleRule};
