use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::calendar::DurationBreakdown;
use crate::display::{CountdownFormatter, CountdownFrame};

/// Countdown lifecycle events, for machine consumers of the countdown
/// (the CLI's `--json` output).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    CountdownStarted {
        /// Target as local wall-clock time.
        target: NaiveDateTime,
        at: DateTime<Utc>,
    },
    CountdownTick {
        remaining: DurationBreakdown,
        display: String,
        at: DateTime<Utc>,
    },
    CountdownReached {
        display: String,
        at: DateTime<Utc>,
    },
    /// No usable target; any running countdown was cancelled.
    CountdownCleared {
        reason: String,
        at: DateTime<Utc>,
    },
}

impl Event {
    /// The event describing a displayed frame.
    pub fn from_frame(frame: &CountdownFrame, formatter: &CountdownFormatter) -> Self {
        let display = formatter.format_frame(frame);
        match frame {
            CountdownFrame::Remaining(remaining) => Event::CountdownTick {
                remaining: *remaining,
                display,
                at: Utc::now(),
            },
            CountdownFrame::Reached => Event::CountdownReached {
                display,
                at: Utc::now(),
            },
        }
    }
}
