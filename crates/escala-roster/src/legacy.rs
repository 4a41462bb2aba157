//! Import of rosters saved by the browser version of the roster editor.
//!
//! That format stores the schedule as a `scheduleType` string and every
//! date as a UTC timestamp of *local* midnight, e.g. a day off on
//! 2025-08-01 entered in UTC−3 is saved as `"2025-08-01T03:00:00.000Z"`.
//! Timestamps are mapped back to calendar days in the UTC offset from
//! [`Settings`], so the import never shifts a date by one.
//!
//! ```json
//! [{ "id": "7f3c", "name": "Ana", "scheduleType": "5x1",
//!    "firstDayOff": "2025-08-01T03:00:00.000Z",
//!    "birthday": "1990-05-12T03:00:00.000Z",
//!    "vacation": [{ "start": "2025-10-13T03:00:00.000Z",
//!                   "end": "2025-10-31T03:00:00.000Z" }] }]
//! ```

use chrono::{DateTime, FixedOffset};
use escala_core::errors::{Error, Result};
use escala_core::settings::Settings;
use escala_schedule::ScheduleRule;
use escala_time::{Date, Weekday};
use serde::Deserialize;
use tracing::{debug, info};

use crate::member::TeamMember;
use crate::roster::Roster;
use crate::vacation::VacationInterval;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LegacyMember {
    id: String,
    name: String,
    #[serde(default)]
    schedule_type: Option<String>,
    #[serde(default)]
    first_day_off: Option<String>,
    #[serde(default)]
    birthday: Option<String>,
    #[serde(default)]
    vacation: Vec<LegacyVacation>,
}

#[derive(Debug, Deserialize)]
struct LegacyVacation {
    start: String,
    end: String,
}

/// Read a legacy roster document.
///
/// Records without a `scheduleType` are rotating, as in the oldest saved
/// data.  Rotating records use [`Settings::rotation_period`].
///
/// # Errors
/// * [`Error::Parse`] for malformed JSON or timestamps.
/// * [`Error::InvalidRuleConfiguration`] for a rotating record without
///   `firstDayOff` or an unknown `scheduleType`.
/// * [`Error::InvalidInterval`] for a vacation ending before it starts.
/// * Any error of [`Roster::add`].
pub fn import_roster(json: &str, settings: &Settings) -> Result<Roster> {
    settings.validate()?;
    let offset = offset_of(settings)?;
    let records: Vec<LegacyMember> = serde_json::from_str(json)?;
    let mut roster = Roster::new();
    for record in records {
        let member = convert(record, settings.rotation_period, offset)?;
        debug!(id = %member.id, rule = %member.schedule, "converted legacy record");
        roster.add(member)?;
    }
    info!(members = roster.len(), "imported legacy roster");
    Ok(roster)
}

/// Calendar day of a legacy date field.
///
/// Accepts a bare `YYYY-MM-DD` day or an RFC 3339 timestamp, which is read
/// in `offset`.
pub fn parse_day(text: &str, offset: FixedOffset) -> Result<Date> {
    if text.len() == 10 {
        return text.parse();
    }
    let instant = DateTime::parse_from_rfc3339(text)
        .map_err(|e| Error::Parse(format!("timestamp {text:?}: {e}")))?;
    Date::try_from(instant.with_timezone(&offset).date_naive())
}

fn offset_of(settings: &Settings) -> Result<FixedOffset> {
    FixedOffset::east_opt(settings.utc_offset_minutes * 60).ok_or_else(|| {
        Error::Config(format!(
            "invalid UTC offset: {} minutes",
            settings.utc_offset_minutes
        ))
    })
}

fn convert(record: LegacyMember, period: u32, offset: FixedOffset) -> Result<TeamMember> {
    let schedule = match record.schedule_type.as_deref() {
        None | Some("5x1") | Some("6x1") => {
            let first = record.first_day_off.as_deref().ok_or_else(|| {
                Error::InvalidRuleConfiguration(format!(
                    "member {} has a rotating schedule without firstDayOff",
                    record.id
                ))
            })?;
            ScheduleRule::rotating(parse_day(first, offset)?, period)?
        }
        Some("fixedSundayOff") => ScheduleRule::fixed_weekday(Weekday::Sunday),
        Some(other) => {
            return Err(Error::InvalidRuleConfiguration(format!(
                "member {} has unknown scheduleType {other:?}",
                record.id
            )))
        }
    };
    let mut member = TeamMember::new(record.id, record.name, schedule);
    // the editor saved an empty string for a cleared birthday field
    if let Some(birthday) = record.birthday.as_deref().filter(|b| !b.is_empty()) {
        member.birthday = Some(parse_day(birthday, offset)?);
    }
    for v in &record.vacation {
        let interval = VacationInterval::new(parse_day(&v.start, offset)?, parse_day(&v.end, offset)?)?;
        member.vacations.push(interval);
    }
    Ok(member)
}
