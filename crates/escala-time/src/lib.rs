//! # escala-time
//!
//! Timezone-free calendar day, weekday, month and clock types.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Reference clock abstraction.
pub mod clock;

/// `Date` — the day-index calendar day.
pub mod date;

/// `Month` and `YearMonth`.
pub mod month;

/// `Weekday` — day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use clock::{Clock, FixedClock, SystemClock};
pub use date::Date;
pub use month::{Month, YearMonth};
pub use weekday::Weekday;
