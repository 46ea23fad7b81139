//! Countdown engine implementation.
//!
//! The engine is a wall-clock-based state machine. It owns no timer and
//! never reads the clock itself - the caller passes `now` into `tick()` and
//! asks `next_delay()` when to call again.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Running -> Reached
//!   ^________|__________|      (set_target / clear)
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! let mut engine = CountdownEngine::with_target(target);
//! // In a loop:
//! if let Some(frame) = engine.tick(&now) { sink.show(&frame); }
//! let Some(delay) = engine.next_delay(&now) else { break };
//! ```

use std::time::Duration;

use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};

use crate::calendar::{diff_breakdown, DurationBreakdown};
use crate::display::CountdownFrame;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CountdownState {
    /// No target; nothing is displayed.
    Idle,
    Running,
    /// Target instant has passed. Terminal until a new target is set.
    Reached,
}

/// Core countdown engine.
#[derive(Debug, Clone)]
pub struct CountdownEngine<Tz: TimeZone> {
    target: Option<DateTime<Tz>>,
    state: CountdownState,
}

impl<Tz: TimeZone> Default for CountdownEngine<Tz> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Tz: TimeZone> CountdownEngine<Tz> {
    /// Create an idle engine.
    pub fn new() -> Self {
        Self {
            target: None,
            state: CountdownState::Idle,
        }
    }

    pub fn with_target(target: DateTime<Tz>) -> Self {
        let mut engine = Self::new();
        engine.set_target(Some(target));
        engine
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> CountdownState {
        self.state
    }

    pub fn target(&self) -> Option<&DateTime<Tz>> {
        self.target.as_ref()
    }

    /// Remaining time as of `now`, without changing state.
    ///
    /// `None` when idle or once the target has been reached.
    pub fn remaining(&self, now: &DateTime<Tz>) -> Option<DurationBreakdown> {
        match (&self.state, &self.target) {
            (CountdownState::Running, Some(target)) if now < target => {
                Some(diff_breakdown(now, target))
            }
            _ => None,
        }
    }

    /// Delay until the next whole wall-clock second after `now`.
    ///
    /// `None` unless the countdown is running; always within `1..=1000` ms
    /// otherwise so the displayed seconds stay in step with the clock.
    pub fn next_delay(&self, now: &DateTime<Tz>) -> Option<Duration> {
        if self.state != CountdownState::Running {
            return None;
        }
        let into_second = now.timestamp_millis().rem_euclid(1000) as u64;
        Some(Duration::from_millis(1000 - into_second))
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Replace the target. `None` returns the engine to `Idle`.
    pub fn set_target(&mut self, target: Option<DateTime<Tz>>) {
        self.state = match target {
            Some(_) => CountdownState::Running,
            None => CountdownState::Idle,
        };
        self.target = target;
    }

    pub fn clear(&mut self) {
        self.set_target(None);
    }

    /// Evaluate the countdown at `now`.
    ///
    /// Returns the frame to display, or `None` when idle. Reaching the
    /// target moves the engine to `Reached`; further ticks keep returning
    /// the reached frame.
    pub fn tick(&mut self, now: &DateTime<Tz>) -> Option<CountdownFrame> {
        match self.state {
            CountdownState::Idle => None,
            CountdownState::Reached => Some(CountdownFrame::Reached),
            CountdownState::Running => {
                let target = self.target.as_ref()?;
                if now >= target {
                    self.state = CountdownState::Reached;
                    return Some(CountdownFrame::Reached);
                }
                Some(CountdownFrame::Remaining(diff_breakdown(now, target)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn utc(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap()
    }

    #[test]
    fn idle_engine_displays_nothing() {
        let mut engine = CountdownEngine::<Utc>::new();
        let now = utc(2024, 1, 1, 0, 0, 0);
        assert_eq!(engine.state(), CountdownState::Idle);
        assert!(engine.tick(&now).is_none());
        assert!(engine.next_delay(&now).is_none());
    }

    #[test]
    fn running_engine_reports_remaining() {
        let mut engine = CountdownEngine::with_target(utc(2025, 3, 20, 5, 6, 7));
        let frame = engine.tick(&utc(2023, 1, 15, 0, 0, 0)).unwrap();
        match frame {
            CountdownFrame::Remaining(b) => {
                assert_eq!((b.years, b.months, b.days), (2, 2, 5));
                assert_eq!((b.hours, b.minutes, b.seconds), (5, 6, 7));
            }
            CountdownFrame::Reached => panic!("Expected Remaining"),
        }
        assert_eq!(engine.state(), CountdownState::Running);
    }

    #[test]
    fn reaching_target_is_terminal() {
        let target = utc(2024, 6, 1, 0, 0, 0);
        let mut engine = CountdownEngine::with_target(target);

        assert_eq!(engine.tick(&target), Some(CountdownFrame::Reached));
        assert_eq!(engine.state(), CountdownState::Reached);
        assert!(engine.next_delay(&target).is_none());

        // Even if the clock appears to go backwards, the state stays reached.
        let earlier = utc(2024, 5, 1, 0, 0, 0);
        assert_eq!(engine.tick(&earlier), Some(CountdownFrame::Reached));
        assert!(engine.remaining(&earlier).is_none());
    }

    #[test]
    fn past_target_is_reached_on_first_tick() {
        let mut engine = CountdownEngine::with_target(utc(2020, 1, 1, 0, 0, 0));
        assert_eq!(engine.tick(&utc(2024, 1, 1, 0, 0, 0)), Some(CountdownFrame::Reached));
    }

    #[test]
    fn next_delay_aligns_to_second_boundary() {
        let engine = CountdownEngine::with_target(utc(2030, 1, 1, 0, 0, 0));
        let base = utc(2024, 1, 1, 0, 0, 0);

        let on_boundary = engine.next_delay(&base).unwrap();
        assert_eq!(on_boundary, Duration::from_millis(1000));

        let mid = base + chrono::Duration::milliseconds(250);
        assert_eq!(engine.next_delay(&mid).unwrap(), Duration::from_millis(750));

        let late = base + chrono::Duration::milliseconds(999);
        assert_eq!(engine.next_delay(&late).unwrap(), Duration::from_millis(1));
    }

    #[test]
    fn next_delay_before_epoch_is_still_positive() {
        let engine = CountdownEngine::with_target(utc(2030, 1, 1, 0, 0, 0));
        let before_epoch = utc(1969, 12, 31, 23, 59, 59) + chrono::Duration::milliseconds(400);
        assert_eq!(engine.next_delay(&before_epoch).unwrap(), Duration::from_millis(600));
    }

    #[test]
    fn new_target_restarts_and_clear_idles() {
        let mut engine = CountdownEngine::with_target(utc(2020, 1, 1, 0, 0, 0));
        let now = utc(2024, 1, 1, 0, 0, 0);
        engine.tick(&now);
        assert_eq!(engine.state(), CountdownState::Reached);

        engine.set_target(Some(utc(2024, 1, 2, 0, 0, 0)));
        assert_eq!(engine.state(), CountdownState::Running);
        assert_eq!(engine.remaining(&now).map(|b| b.days), Some(1));

        engine.clear();
        assert_eq!(engine.state(), CountdownState::Idle);
        assert!(engine.target().is_none());
    }
}
