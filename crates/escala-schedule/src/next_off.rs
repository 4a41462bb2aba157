//! Next-day-off search.
//!
//! [`ScheduleRule::next_day_off`] answers "when is the next day off?" from a
//! reference day.  It never reports a day earlier than the reference, and
//! for an active rule it reports the *next* off day, not the current one.

use escala_core::errors::Result;
use escala_time::Date;
use tracing::trace;

use crate::rule::{checked_period, ScheduleRule};

impl ScheduleRule {
    /// First off day on or after `reference` under this rule, skipping
    /// `reference` itself once the rule is active.
    ///
    /// * Fixed weekday: the next occurrence strictly after `reference`; a
    ///   reference that is itself the weekday gives the one 7 days later.
    /// * Rotating cycle: the anchor while `reference <= anchor`; afterwards
    ///   the following day `k * period` days past the anchor.
    ///
    /// # Errors
    /// [`escala_core::Error::InvalidRuleConfiguration`] for a zero period,
    /// [`escala_core::Error::DateOutOfRange`] if the answer lies past
    /// [`Date::MAX`].
    pub fn next_day_off(&self, reference: Date) -> Result<Date> {
        let next = match *self {
            ScheduleRule::FixedWeekday { weekday } => {
                let ahead = match reference.weekday().days_until(weekday) {
                    0 => 7,
                    n => i32::from(n),
                };
                reference.add_days(ahead)?
            }
            ScheduleRule::RotatingCycle { anchor, period } => {
                let period = checked_period(period)?;
                if reference <= anchor {
                    anchor
                } else {
                    let remainder = (reference - anchor) % period;
                    let ahead = if remainder == 0 { period } else { period - remainder };
                    reference.add_days(ahead)?
                }
            }
        };
        trace!(rule = %self, %reference, %next, "next day off");
        Ok(next)
    }

    /// Iterate over the off days starting with [`Self::next_day_off`] of
    /// `reference`.
    ///
    /// The iterator ends at the edge of the supported date range.
    pub fn days_off_from(&self, reference: Date) -> Result<DaysOff> {
        Ok(DaysOff {
            next: Some(self.next_day_off(reference)?),
            step: self.step()?,
        })
    }
}

/// Successive off days of one rule; see [`ScheduleRule::days_off_from`].
#[derive(Debug, Clone)]
pub struct DaysOff {
    next: Option<Date>,
    step: i32,
}

impl Iterator for DaysOff {
    type Item = Date;

    fn next(&mut self) -> Option<Date> {
        let current = self.next?;
        self.next = current.add_days(self.step).ok();
        Some(current)
    }
}
