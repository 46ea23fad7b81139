//! Sources of "now".

use std::sync::Mutex;

use chrono::{DateTime, Duration, Local, TimeZone};

/// Supplies the current instant to the countdown.
pub trait Clock<Tz: TimeZone>: Send + Sync {
    fn now(&self) -> DateTime<Tz>;
}

/// The host's wall clock in its local calendar.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock<Local> for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// A clock that only moves when told to.
#[derive(Debug)]
pub struct FixedClock<Tz: TimeZone> {
    now: Mutex<DateTime<Tz>>,
}

impl<Tz: TimeZone> FixedClock<Tz> {
    pub fn new(at: DateTime<Tz>) -> Self {
        Self { now: Mutex::new(at) }
    }

    pub fn set(&self, at: DateTime<Tz>) {
        *self.now.lock().unwrap_or_else(|e| e.into_inner()) = at;
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap_or_else(|e| e.into_inner());
        *now = now.clone() + by;
    }
}

impl<Tz> Clock<Tz> for FixedClock<Tz>
where
    Tz: TimeZone + Send + Sync,
    Tz::Offset: Send + Sync,
{
    fn now(&self) -> DateTime<Tz> {
        self.now.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}
