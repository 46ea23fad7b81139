//! Month arithmetic with end-of-month clamping.

use chrono::{DateTime, Datelike, Duration, LocalResult, NaiveDate, NaiveDateTime, Offset, TimeZone};

pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Number of days in `month` (1-based) of `year`.
///
/// Returns 0 for a month outside `1..=12`.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Add `months` calendar months to `base`, keeping the time of day.
///
/// The day of month is clamped to the length of the resulting month, so
/// Jan 31 + 1 month is Feb 28 (or 29), never Mar 3. Negative `months`
/// step backwards and roll the year as needed.
///
/// Returns `None` only if the result falls outside chrono's range.
pub fn add_calendar_months<Tz: TimeZone>(base: &DateTime<Tz>, months: i32) -> Option<DateTime<Tz>> {
    let wall = base.naive_local();
    let index = i64::from(wall.year()) * 12 + i64::from(wall.month0()) + i64::from(months);
    let year = i32::try_from(index.div_euclid(12)).ok()?;
    let month = u32::try_from(index.rem_euclid(12)).ok()? + 1;

    let day = wall.day().min(days_in_month(year, month));
    let date = NaiveDate::from_ymd_opt(year, month, day)?;
    resolve_local(&base.timezone(), &date.and_time(wall.time()))
}

/// Place a local wall-clock time on the timeline of `tz`.
///
/// Ambiguous times (clocks rolled back) resolve to the earlier instant.
/// Times that do not exist (clocks jumped forward) are read with the offset
/// in force before the jump, which lands them just past the gap.
pub fn resolve_local<Tz: TimeZone>(tz: &Tz, wall: &NaiveDateTime) -> Option<DateTime<Tz>> {
    match tz.from_local_datetime(wall) {
        LocalResult::Single(at) => Some(at),
        // Not every zone yields the pair in timeline order.
        LocalResult::Ambiguous(a, b) => Some(if a <= b { a } else { b }),
        LocalResult::None => {
            let day_before = wall.checked_sub_signed(Duration::days(1))?;
            let before_gap = tz.from_local_datetime(&day_before).earliest()?;
            let offset_secs = before_gap.offset().fix().local_minus_utc();
            let utc = wall.checked_sub_signed(Duration::seconds(i64::from(offset_secs)))?;
            Some(tz.from_utc_datetime(&utc))
        }
    }
}
