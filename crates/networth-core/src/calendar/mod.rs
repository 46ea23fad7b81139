//! Calendar-aware date arithmetic.
//!
//! Everything here is pure: callers pass the instants in, nothing reads the
//! wall clock. Instants are `chrono::DateTime<Tz>` for any time zone, and all
//! month arithmetic happens on the zone's local wall-clock fields.

mod breakdown;
mod months;
mod target;

pub use breakdown::{diff_breakdown, DurationBreakdown};
pub use months::{add_calendar_months, days_in_month, is_leap_year, resolve_local};
pub use target::parse_target;
