//! `ScheduleRule` — the attendance rule evaluator.
//!
//! A rule decides, for any calendar day, whether its member is off
//! regardless of vacations.  Two rules exist:
//!
//! * [`ScheduleRule::FixedWeekday`]: off on one day of every week, forever,
//!   including every day before the member joined.
//! * [`ScheduleRule::RotatingCycle`]: off on the anchor day and every
//!   `period` days after it; never off before the anchor.  With the usual
//!   period of 6 (five days on, one off) the off day drifts one weekday
//!   earlier each week.
//!
//! The serialized form is the flat [`RuleRecord`]; decoding one into a
//! rule is where missing fields surface as
//! [`Error::InvalidRuleConfiguration`].

use escala_core::errors::{Error, Result};
use escala_time::{Date, Weekday};
use serde::{Deserialize, Serialize};

/// A member's day-off rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RuleRecord", into = "RuleRecord")]
pub enum ScheduleRule {
    /// Off on every occurrence of `weekday`.
    FixedWeekday {
        /// The weekly day off.
        weekday: Weekday,
    },
    /// Off on `anchor` and on every day `k * period` days later.
    RotatingCycle {
        /// First day on which the rule is active, itself an off day.
        anchor: Date,
        /// Days between successive off days.
        period: u32,
    },
}

impl ScheduleRule {
    /// Off every `weekday`.
    pub fn fixed_weekday(weekday: Weekday) -> Self {
        ScheduleRule::FixedWeekday { weekday }
    }

    /// Off on `anchor` and every `period` days after it.
    ///
    /// Returns [`Error::InvalidRuleConfiguration`] if `period` is zero.
    pub fn rotating(anchor: Date, period: u32) -> Result<Self> {
        let rule = ScheduleRule::RotatingCycle { anchor, period };
        rule.validate()?;
        Ok(rule)
    }

    /// Check the rule's parameters.
    pub fn validate(&self) -> Result<()> {
        match *self {
            ScheduleRule::FixedWeekday { .. } => Ok(()),
            ScheduleRule::RotatingCycle { period, .. } => checked_period(period).map(|_| ()),
        }
    }

    /// The anchor day of a rotating rule.
    pub fn anchor(&self) -> Option<Date> {
        match *self {
            ScheduleRule::FixedWeekday { .. } => None,
            ScheduleRule::RotatingCycle { anchor, .. } => Some(anchor),
        }
    }

    /// Return `true` if the rule is in force on `day`.
    ///
    /// Fixed-weekday rules always are; rotating rules from their anchor on.
    pub fn is_active_on(&self, day: Date) -> bool {
        match *self {
            ScheduleRule::FixedWeekday { .. } => true,
            ScheduleRule::RotatingCycle { anchor, .. } => day >= anchor,
        }
    }

    /// Return `true` if the rule gives `day` off.
    ///
    /// # Errors
    /// [`Error::InvalidRuleConfiguration`] for a rotating rule with a zero
    /// period.
    pub fn is_off(&self, day: Date) -> Result<bool> {
        match *self {
            ScheduleRule::FixedWeekday { weekday } => Ok(day.weekday() == weekday),
            ScheduleRule::RotatingCycle { anchor, period } => {
                let period = checked_period(period)?;
                if day < anchor {
                    return Ok(false);
                }
                Ok((day - anchor) % period == 0)
            }
        }
    }

    /// Days between two consecutive off days.
    pub(crate) fn step(&self) -> Result<i32> {
        match *self {
            ScheduleRule::FixedWeekday { .. } => Ok(7),
            ScheduleRule::RotatingCycle { period, .. } => checked_period(period),
        }
    }
}

/// Period as a day offset, rejecting zero and values no date range can hold.
pub(crate) fn checked_period(period: u32) -> Result<i32> {
    escala_core::ensure!(
        period > 0,
        InvalidRuleConfiguration,
        "rotation period must be positive"
    );
    i32::try_from(period).map_err(|_| {
        Error::InvalidRuleConfiguration(format!("rotation period {period} is too large"))
    })
}

impl std::fmt::Display for ScheduleRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScheduleRule::FixedWeekday { weekday } => write!(f, "off every {weekday}"),
            ScheduleRule::RotatingCycle { anchor, period } => {
                write!(f, "off every {period} days from {anchor}")
            }
        }
    }
}

// ── Wire form ─────────────────────────────────────────────────────────────────

/// Discriminator of a [`RuleRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    /// See [`ScheduleRule::FixedWeekday`].
    FixedWeekday,
    /// See [`ScheduleRule::RotatingCycle`].
    RotatingCycle,
}

/// Flat, all-optional form of a [`ScheduleRule`], as stored and as filled
/// in by an editing form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleRecord {
    /// Which rule the record describes.
    pub kind: RuleKind,
    /// Weekly day off (fixed-weekday rules).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weekday: Option<Weekday>,
    /// Anchor day (rotating rules).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anchor: Option<Date>,
    /// Rotation period in days (rotating rules).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<u32>,
}

impl TryFrom<RuleRecord> for ScheduleRule {
    type Error = Error;

    fn try_from(record: RuleRecord) -> Result<Self> {
        match record.kind {
            RuleKind::FixedWeekday => {
                let weekday = record.weekday.ok_or_else(|| {
                    Error::InvalidRuleConfiguration("fixed weekday rule without a weekday".into())
                })?;
                Ok(ScheduleRule::fixed_weekday(weekday))
            }
            RuleKind::RotatingCycle => {
                let anchor = record.anchor.ok_or_else(|| {
                    Error::InvalidRuleConfiguration("rotating rule without an anchor day".into())
                })?;
                let period = record.period.ok_or_else(|| {
                    Error::InvalidRuleConfiguration("rotating rule without a period".into())
                })?;
                ScheduleRule::rotating(anchor, period)
            }
        }
    }
}

impl From<ScheduleRule> for RuleRecord {
    fn from(rule: ScheduleRule) -> Self {
        match rule {
            ScheduleRule::FixedWeekday { weekday } => RuleRecord {
                kind: RuleKind::FixedWeekday,
                weekday: Some(weekday),
                anchor: None,
                period: None,
            },
            ScheduleRule::RotatingCycle { anchor, period } => RuleRecord {
                kind: RuleKind::RotatingCycle,
                weekday: None,
                anchor: Some(anchor),
                period: Some(period),
            },
        }
    }
}
