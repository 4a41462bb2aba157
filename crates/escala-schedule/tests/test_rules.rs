//! Integration tests for the rule evaluator and the next-day-off search.

use escala_core::Error;
use escala_schedule::ScheduleRule;
use escala_time::{Date, Weekday};
use proptest::prelude::*;

fn date(y: i32, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

/// Dates between 1950 and 2100, roomy enough for any offset used below.
fn any_date() -> impl Strategy<Value = Date> {
    (date(1950, 1, 1).index()..=date(2100, 12, 31).index())
        .prop_map(|i| Date::from_index(i).unwrap())
}

fn any_weekday() -> impl Strategy<Value = Weekday> {
    (0u8..7).prop_map(|n| Weekday::from_index(n).unwrap())
}

// ─── Rotating cycle scenario ──────────────────────────────────────────────────

#[test]
fn rotating_august_2025() {
    let rule = ScheduleRule::rotating(date(2025, 8, 1), 6).unwrap();
    let off: Vec<u8> = (1..=31)
        .filter(|&d| rule.is_off(date(2025, 8, d)).unwrap())
        .collect();
    assert_eq!(off, [1, 7, 13, 19, 25, 31]);

    for d in (2..=6).chain(8..=12) {
        assert!(!rule.is_off(date(2025, 8, d)).unwrap(), "2025-08-{d:02}");
    }
    assert!(!rule.is_off(date(2025, 7, 26)).unwrap());

    // delta = 19, remainder = 1
    assert_eq!(rule.next_day_off(date(2025, 8, 20)).unwrap(), date(2025, 8, 25));
}

#[test]
fn rotating_cycle_crosses_months_and_years() {
    let rule = ScheduleRule::rotating(date(2024, 12, 28), 6).unwrap();
    assert!(rule.is_off(date(2025, 1, 3)).unwrap());
    // 60 and 66 days after the anchor, across the end of February
    assert!(rule.is_off(date(2025, 2, 26)).unwrap());
    assert!(!rule.is_off(date(2025, 3, 2)).unwrap());
    assert!(!rule.is_off(date(2025, 3, 3)).unwrap());
    assert!(rule.is_off(date(2025, 3, 4)).unwrap());
}

// ─── Fixed weekday scenario ───────────────────────────────────────────────────

#[test]
fn sunday_off() {
    let rule = ScheduleRule::fixed_weekday(Weekday::Sunday);
    let sundays: Vec<Date> = date(2025, 8, 1)
        .days_through(date(2025, 8, 31))
        .filter(|&d| rule.is_off(d).unwrap())
        .collect();
    assert_eq!(
        sundays,
        [date(2025, 8, 3), date(2025, 8, 10), date(2025, 8, 17), date(2025, 8, 24), date(2025, 8, 31)]
    );
    assert_eq!(rule.next_day_off(date(2025, 8, 10)).unwrap(), date(2025, 8, 17));
    assert_eq!(rule.next_day_off(date(2025, 8, 16)).unwrap(), date(2025, 8, 17));
}

#[test]
fn invalid_period_surfaces_everywhere() {
    let rule = ScheduleRule::RotatingCycle {
        anchor: date(2025, 8, 1),
        period: 0,
    };
    let day = date(2025, 8, 20);
    assert!(matches!(rule.is_off(day), Err(Error::InvalidRuleConfiguration(_))));
    assert!(matches!(rule.next_day_off(day), Err(Error::InvalidRuleConfiguration(_))));
    assert!(rule.days_off_from(day).is_err());
}

// ─── Properties ───────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn never_off_before_anchor(anchor in any_date(), period in 1u32..60, back in 1i32..2000) {
        let rule = ScheduleRule::rotating(anchor, period).unwrap();
        prop_assert!(!rule.is_off(anchor - back).unwrap());
    }

    #[test]
    fn off_exactly_on_multiples(anchor in any_date(), period in 1u32..60, offset in 0i32..2000) {
        let rule = ScheduleRule::rotating(anchor, period).unwrap();
        let day = anchor + offset;
        prop_assert_eq!(rule.is_off(day).unwrap(), offset % period as i32 == 0);
    }

    #[test]
    fn fixed_weekday_matches_weekday(weekday in any_weekday(), day in any_date()) {
        let rule = ScheduleRule::fixed_weekday(weekday);
        prop_assert_eq!(rule.is_off(day).unwrap(), day.weekday() == weekday);
    }

    #[test]
    fn fixed_next_day_off_is_within_a_week(weekday in any_weekday(), day in any_date()) {
        let rule = ScheduleRule::fixed_weekday(weekday);
        let next = rule.next_day_off(day).unwrap();
        prop_assert!(next > day);
        prop_assert!(next - day <= 7);
        prop_assert!(rule.is_off(next).unwrap());
        // nothing in between is off
        for d in (day + 1).days_through(next - 1) {
            prop_assert!(!rule.is_off(d).unwrap());
        }
    }

    #[test]
    fn rotating_next_day_off_is_the_first_off_day(
        anchor in any_date(),
        period in 1u32..30,
        offset in -200i32..400,
    ) {
        let rule = ScheduleRule::rotating(anchor, period).unwrap();
        let reference = anchor + offset;
        let next = rule.next_day_off(reference).unwrap();
        prop_assert!(next >= reference);
        if reference > anchor {
            prop_assert!(next > reference);
            prop_assert!(next - reference <= period as i32);
        } else {
            prop_assert_eq!(next, anchor);
        }
        prop_assert!(rule.is_off(next).unwrap());
        for d in (reference + 1).days_through(next - 1) {
            prop_assert!(!rule.is_off(d).unwrap());
        }
    }

    #[test]
    fn days_off_are_all_off(anchor in any_date(), period in 1u32..30, offset in -50i32..50) {
        let rule = ScheduleRule::rotating(anchor, period).unwrap();
        for d in rule.days_off_from(anchor + offset).unwrap().take(10) {
            prop_assert!(rule.is_off(d).unwrap());
        }
    }

    #[test]
    fn json_roundtrip_preserves_evaluation(anchor in any_date(), period in 1u32..30, day in any_date()) {
        let rule = ScheduleRule::rotating(anchor, period).unwrap();
        let back: ScheduleRule = serde_json::from_str(&serde_json::to_string(&rule).unwrap()).unwrap();
        prop_assert_eq!(back, rule);
        prop_assert_eq!(back.is_off(day).unwrap(), rule.is_off(day).unwrap());
    }
}
