//! Property tests for calendar month arithmetic and breakdowns.

use chrono::{DateTime, Datelike, Duration, TimeZone, Timelike, Utc};
use networth_core::calendar::{add_calendar_months, days_in_month, diff_breakdown};
use proptest::prelude::*;

// 1970-01-01 .. 2200-01-01, whole seconds.
fn instant() -> impl Strategy<Value = DateTime<Utc>> {
    (0i64..7_258_118_400).prop_map(|secs| Utc.timestamp_opt(secs, 0).unwrap())
}

proptest! {
    #[test]
    fn added_months_land_on_a_valid_day(base in instant(), months in -2400i32..2400) {
        let out = add_calendar_months(&base, months).unwrap();

        prop_assert!(out.day() <= days_in_month(out.year(), out.month()));
        prop_assert_eq!(out.day(), base.day().min(days_in_month(out.year(), out.month())));
        prop_assert_eq!(out.time(), base.time());

        let shifted = (out.year() - base.year()) * 12 + out.month() as i32 - base.month() as i32;
        prop_assert_eq!(shifted, months);
    }

    #[test]
    fn breakdown_fields_stay_in_range(a in instant(), b in instant()) {
        let (from, to) = if a <= b { (a, b) } else { (b, a) };
        let out = diff_breakdown(&from, &to);

        prop_assert!(out.months < 12);
        prop_assert!(out.days <= 30);
        prop_assert!(out.hours < 24);
        prop_assert!(out.minutes < 60);
        prop_assert!(out.seconds < 60);
    }

    #[test]
    fn breakdown_reassembles_to_the_target(a in instant(), b in instant()) {
        let (from, to) = if a <= b { (a, b) } else { (b, a) };
        let out = diff_breakdown(&from, &to);

        let anchor = add_calendar_months(&from, out.total_months() as i32).unwrap();
        let rebuilt = anchor
            + Duration::days(out.days.into())
            + Duration::hours(out.hours.into())
            + Duration::minutes(out.minutes.into())
            + Duration::seconds(out.seconds.into());
        prop_assert_eq!(rebuilt, to);
    }

    #[test]
    fn reversed_ranges_are_zero(a in instant(), b in instant()) {
        prop_assume!(a > b);
        prop_assert!(diff_breakdown(&a, &b).is_zero());
    }

    #[test]
    fn one_more_second_never_shrinks_the_breakdown(from in instant(), offset in 0i64..200_000_000) {
        let to = from + Duration::seconds(offset);
        let later = to + Duration::seconds(1);

        let total = |d: DateTime<Utc>| {
            let b = diff_breakdown(&from, &d);
            let anchor = add_calendar_months(&from, b.total_months() as i32).unwrap();
            (anchor - from).num_seconds()
                + i64::from(b.days) * 86_400
                + i64::from(b.hours) * 3_600
                + i64::from(b.minutes) * 60
                + i64::from(b.seconds)
        };
        prop_assert_eq!(total(later) - total(to), 1);
    }
}

#[test]
fn target_minute_boundaries() {
    let from = Utc.with_ymd_and_hms(2024, 12, 31, 23, 59, 59).unwrap();
    let to = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
    let out = diff_breakdown(&from, &to);
    assert_eq!((out.years, out.months, out.days, out.hours, out.minutes, out.seconds), (0, 0, 0, 0, 0, 1));
    assert_eq!(to.second(), 0);
}
