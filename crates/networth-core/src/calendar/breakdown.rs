//! Calendar breakdown of the time between two instants.

use std::fmt;

use chrono::{DateTime, Datelike, TimeZone};
use serde::{Deserialize, Serialize};

use super::months::add_calendar_months;

const MS_PER_DAY: i64 = 86_400_000;
const MS_PER_HOUR: i64 = 3_600_000;
const MS_PER_MINUTE: i64 = 60_000;
const MS_PER_SECOND: i64 = 1_000;

/// Elapsed calendar time between two instants.
///
/// `years` and `months` count whole calendar months from the start; the
/// remaining fields split what is left over, so `days` never reaches the
/// length of the month following the anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct DurationBreakdown {
    pub years: u32,
    pub months: u32,
    pub days: u32,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl DurationBreakdown {
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::zero()
    }

    /// Whole calendar months, years included.
    pub fn total_months(&self) -> u32 {
        self.years * 12 + self.months
    }
}

impl fmt::Display for DurationBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}y {}mo {}d {:02}:{:02}:{:02}",
            self.years, self.months, self.days, self.hours, self.minutes, self.seconds
        )
    }
}

/// Break the time from `from` to `to` into calendar units.
///
/// Whole months are counted on the local calendar of `from`'s zone; the
/// rest is measured in absolute milliseconds from the anchor (`from` plus
/// those months) and split into days, hours, minutes and seconds. The
/// sub-second remainder is dropped.
///
/// A month counts only once both its day of month and its time of day have
/// been reached: Jan 15 12:00 to Feb 15 08:00 is 0 months and 30 days plus
/// 20 hours, not 1 month.
///
/// When `to` precedes `from` every field is zero.
pub fn diff_breakdown<Tz: TimeZone>(from: &DateTime<Tz>, to: &DateTime<Tz>) -> DurationBreakdown {
    let start = from.naive_local();
    let end = to.naive_local();

    let mut months_total =
        (end.year() - start.year()) * 12 + (end.month() as i32 - start.month() as i32);
    if end.day() < start.day() {
        months_total -= 1;
    }
    // Same day of month but an earlier time of day: the last month is not complete yet.
    if months_total > 0 {
        if let Some(anchor) = add_calendar_months(from, months_total) {
            if anchor > *to {
                months_total -= 1;
            }
        }
    }
    let months_total = months_total.max(0);

    let anchor = add_calendar_months(from, months_total).unwrap_or_else(|| from.clone());
    let mut ms = (to.timestamp_millis() - anchor.timestamp_millis()).max(0);

    let days = ms / MS_PER_DAY;
    ms -= days * MS_PER_DAY;
    let hours = ms / MS_PER_HOUR;
    ms -= hours * MS_PER_HOUR;
    let minutes = ms / MS_PER_MINUTE;
    ms -= minutes * MS_PER_MINUTE;
    let seconds = ms / MS_PER_SECOND;

    DurationBreakdown {
        years: (months_total / 12) as u32,
        months: (months_total % 12) as u32,
        days: days as u32,
        hours: hours as u32,
        minutes: minutes as u32,
        seconds: seconds as u32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn utc(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap()
    }

    fn breakdown(years: u32, months: u32, days: u32, hours: u32, minutes: u32, seconds: u32) -> DurationBreakdown {
        DurationBreakdown { years, months, days, hours, minutes, seconds }
    }

    #[test]
    fn crossing_a_month_boundary_is_not_a_full_month() {
        let out = diff_breakdown(&utc(2023, 1, 31, 0, 0, 0), &utc(2023, 2, 15, 0, 0, 0));
        assert_eq!(out, breakdown(0, 0, 15, 0, 0, 0));
    }

    #[test]
    fn years_months_and_clock_fields() {
        let out = diff_breakdown(&utc(2023, 1, 15, 0, 0, 0), &utc(2025, 3, 20, 5, 6, 7));
        assert_eq!(out, breakdown(2, 2, 5, 5, 6, 7));
    }

    #[test]
    fn identical_instants_are_zero() {
        let t = utc(2024, 2, 29, 12, 0, 0);
        assert!(diff_breakdown(&t, &t).is_zero());
    }

    #[test]
    fn reversed_range_floors_at_zero() {
        let out = diff_breakdown(&utc(2025, 3, 20, 0, 0, 0), &utc(2023, 1, 15, 0, 0, 0));
        assert!(out.is_zero());

        let same_day = diff_breakdown(&utc(2025, 3, 20, 12, 0, 0), &utc(2025, 3, 20, 10, 0, 0));
        assert!(same_day.is_zero());
    }

    #[test]
    fn earlier_time_of_day_on_the_anchor_day_borrows_a_month() {
        let out = diff_breakdown(&utc(2023, 1, 15, 12, 0, 0), &utc(2023, 2, 15, 10, 0, 0));
        assert_eq!(out, breakdown(0, 0, 30, 22, 0, 0));
    }

    #[test]
    fn clamped_anchor_counts_days_from_end_of_month() {
        // Jan 31 + 1 month is Feb 28; Mar 30 is one month and 30 days on.
        let out = diff_breakdown(&utc(2023, 1, 31, 0, 0, 0), &utc(2023, 3, 30, 0, 0, 0));
        assert_eq!(out, breakdown(0, 1, 30, 0, 0, 0));
    }

    #[test]
    fn exact_years() {
        let out = diff_breakdown(&utc(2020, 2, 29, 0, 0, 0), &utc(2024, 2, 29, 0, 0, 0));
        assert_eq!(out, breakdown(4, 0, 0, 0, 0, 0));
        assert_eq!(out.total_months(), 48);
    }

    #[test]
    fn sub_second_remainder_is_dropped() {
        let from = utc(2024, 5, 1, 0, 0, 0);
        let to = from + Duration::milliseconds(61_999);
        assert_eq!(diff_breakdown(&from, &to), breakdown(0, 0, 0, 0, 1, 1));
    }

    #[test]
    fn display_is_compact() {
        assert_eq!(breakdown(2, 2, 5, 5, 6, 7).to_string(), "2y 2mo 5d 05:06:07");
    }
}
