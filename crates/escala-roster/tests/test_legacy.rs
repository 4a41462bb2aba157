//! Integration tests for legacy roster import.

use escala_core::{Error, Settings};
use escala_roster::{import_roster, AttendanceState, RosterProvider};
use escala_schedule::ScheduleRule;
use escala_time::{Date, Weekday};

fn date(y: i32, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

const SAVED: &str = r#"[
  { "id": "k2", "name": "Bruno", "scheduleType": "fixedSundayOff",
    "firstDayOff": "", "birthday": "" },
  { "id": "k1", "name": "Ana", "scheduleType": "5x1",
    "firstDayOff": "2025-08-01T03:00:00.000Z",
    "birthday": "1990-05-12T03:00:00.000Z",
    "vacation": [{ "start": "2025-10-13T03:00:00.000Z",
                   "end": "2025-10-31T03:00:00.000Z" }] },
  { "id": "k3", "name": "Caio", "firstDayOff": "2025-08-02T03:00:00.000Z" }
]"#;

fn brasilia() -> Settings {
    Settings::default().with_utc_offset_minutes(-180)
}

#[test]
fn imports_timestamps_as_local_days() {
    let roster = import_roster(SAVED, &brasilia()).unwrap();
    let names: Vec<_> = roster.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, ["Ana", "Bruno", "Caio"]);

    let ana = roster.get(&"k1".into()).unwrap();
    assert_eq!(ana.schedule, ScheduleRule::rotating(date(2025, 8, 1), 6).unwrap());
    assert_eq!(ana.birthday, Some(date(1990, 5, 12)));
    assert_eq!(ana.vacations[0].start(), date(2025, 10, 13));
    assert_eq!(ana.vacations[0].end(), date(2025, 10, 31));

    let bruno = roster.get(&"k2".into()).unwrap();
    assert_eq!(bruno.schedule, ScheduleRule::fixed_weekday(Weekday::Sunday));
    assert_eq!(bruno.birthday, None);

    // no scheduleType: rotating
    let caio = roster.get(&"k3".into()).unwrap();
    assert_eq!(caio.schedule, ScheduleRule::rotating(date(2025, 8, 2), 6).unwrap());

    let day = roster.partition(date(2025, 10, 19)).unwrap();
    assert_eq!(day.state_of(&"k1".into()), Some(AttendanceState::OnVacation));
    assert_eq!(day.state_of(&"k2".into()), Some(AttendanceState::Off));
}

#[test]
fn utc_reading_shifts_early_timestamps() {
    // read as UTC the same instants still fall on the same day (03:00)
    let roster = import_roster(SAVED, &Settings::default()).unwrap();
    let ana = roster.get(&"k1".into()).unwrap();
    assert_eq!(ana.schedule.anchor(), Some(date(2025, 8, 1)));

    // a UTC+9 editor saved local midnight as 15:00 of the previous day
    let tokyo = r#"[{ "id": "t", "name": "Taro", "scheduleType": "6x1",
                      "firstDayOff": "2025-07-31T15:00:00.000Z" }]"#;
    let as_utc = import_roster(tokyo, &Settings::default()).unwrap();
    assert_eq!(as_utc.members()[0].schedule.anchor(), Some(date(2025, 7, 31)));
    let as_local = import_roster(tokyo, &Settings::default().with_utc_offset_minutes(540)).unwrap();
    assert_eq!(as_local.members()[0].schedule.anchor(), Some(date(2025, 8, 1)));
}

#[test]
fn configured_period_applies_to_rotating_records() {
    let json = r#"[{ "id": "1", "name": "Ana", "firstDayOff": "2025-08-01" }]"#;
    let settings = Settings::default().with_rotation_period(7);
    let roster = import_roster(json, &settings).unwrap();
    assert_eq!(
        roster.members()[0].schedule,
        ScheduleRule::rotating(date(2025, 8, 1), 7).unwrap()
    );
}

#[test]
fn rejects_bad_records() {
    let reversed = r#"[{ "id": "1", "name": "Ana", "scheduleType": "fixedSundayOff",
        "vacation": [{ "start": "2025-10-31", "end": "2025-10-13" }] }]"#;
    assert!(matches!(import_roster(reversed, &brasilia()), Err(Error::InvalidInterval(_))));

    let bad_stamp = r#"[{ "id": "1", "name": "Ana", "firstDayOff": "August 1st" }]"#;
    assert!(matches!(import_roster(bad_stamp, &brasilia()), Err(Error::Parse(_))));

    let dup = r#"[{ "id": "1", "name": "Ana", "scheduleType": "fixedSundayOff" },
                  { "id": "1", "name": "Bia", "scheduleType": "fixedSundayOff" }]"#;
    assert!(matches!(import_roster(dup, &brasilia()), Err(Error::DuplicateMember(_))));

    let bad_offset = Settings::default().with_utc_offset_minutes(2000);
    assert!(matches!(import_roster("[]", &bad_offset), Err(Error::Config(_))));
}
