//! Integration tests for the monthly aggregator.

use escala_roster::{month_summary, month_summary_for, partition, RosterProvider, TeamMember, VacationInterval};
use escala_schedule::ScheduleRule;
use escala_time::{Date, Weekday, YearMonth};
use proptest::prelude::*;

fn date(y: i32, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

fn team() -> Vec<TeamMember> {
    vec![
        TeamMember::new("a", "Ana", ScheduleRule::rotating(date(2025, 8, 1), 6).unwrap()),
        TeamMember::new("b", "Bruno", ScheduleRule::fixed_weekday(Weekday::Sunday))
            .with_birthday(date(1985, 2, 14)),
        TeamMember::new("c", "Carla", ScheduleRule::fixed_weekday(Weekday::Sunday))
            .with_vacation(VacationInterval::new(date(2025, 2, 10), date(2025, 2, 20)).unwrap()),
    ]
}

#[test]
fn february_lengths() {
    let members = team();
    assert_eq!(month_summary_for(&members, 2024, 2).unwrap().len(), 29);
    assert_eq!(month_summary_for(&members, 2025, 2).unwrap().len(), 28);
    assert_eq!(month_summary_for(&members, 1900, 2).unwrap().len(), 28);
    assert_eq!(month_summary_for(&members, 2000, 2).unwrap().len(), 29);
}

#[test]
fn every_month_has_its_calendar_length() {
    let lengths = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
    for (m, &len) in (1u8..=12).zip(lengths.iter()) {
        let summary = month_summary_for(&[], 2025, m).unwrap();
        assert_eq!(summary.len(), len, "2025-{m:02}");
        assert_eq!(summary.days()[0].date, date(2025, m, 1));
        assert_eq!(summary.days()[len - 1].date, date(2025, m, len as u8));
    }
}

#[test]
fn counts_match_the_partitioner() {
    let members = team();
    let summary = month_summary_for(&members, 2025, 2).unwrap();

    // Ana's cycle starts in August, so she works all of February.
    // Friday 2025-02-14: Carla on vacation, Bruno has a birthday.
    let valentine = summary.day(14).unwrap();
    assert_eq!((valentine.working_count, valentine.off_count), (2, 0));
    assert_eq!(valentine.on_vacation[0].name, "Carla");
    assert_eq!(valentine.birthdays[0].name, "Bruno");

    // Sunday 2025-02-16: Bruno off, Carla still on vacation
    let sunday = summary.day(16).unwrap();
    assert_eq!((sunday.working_count, sunday.off_count), (1, 1));
    assert_eq!(sunday.on_vacation.len(), 1);

    // Sunday 2025-02-23: both Sunday members off
    assert_eq!(summary.day(23).unwrap().off_count, 2);

    for day in summary.days() {
        let roster = partition(&members, day.date).unwrap();
        assert_eq!(day.working_count, roster.working().len());
        assert_eq!(day.off_count, roster.off().len());
        assert_eq!(day.on_vacation.len(), roster.on_vacation().len());
    }
}

#[test]
fn navigating_across_years() {
    let members = team();
    let dec = YearMonth::new(2025, 12).unwrap();
    let jan = dec.next().unwrap();
    assert_eq!(jan, YearMonth::new(2026, 1).unwrap());
    assert_eq!(jan.prev().unwrap(), dec);

    let summary = members.month_summary(jan).unwrap();
    assert_eq!(summary.month(), jan);
    assert_eq!(summary.len(), 31);
    // 2026-01-01 is a Thursday
    assert_eq!(summary.leading_blanks(), 4);
    assert_eq!(summary.weeks(), 5);
}

#[test]
fn invalid_month_is_rejected() {
    assert!(month_summary_for(&[], 2025, 0).is_err());
    assert!(month_summary_for(&[], 2025, 13).is_err());
}

proptest! {
    #[test]
    fn grid_always_fills_whole_weeks(year in 1900i32..2200, month in 1u8..=12) {
        let summary = month_summary(&[], YearMonth::new(year, month).unwrap()).unwrap();
        let cells = summary.leading_blanks() as usize + summary.len() + summary.trailing_blanks() as usize;
        prop_assert_eq!(cells % 7, 0);
        prop_assert!(summary.trailing_blanks() < 7);
        prop_assert!((4..=6).contains(&summary.weeks()));
    }
}
