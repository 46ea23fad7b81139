//! What the countdown shows and where it goes.

use serde::{Deserialize, Serialize};

use crate::calendar::DurationBreakdown;
use crate::storage::CountdownConfig;

pub const DEFAULT_REACHED_LABEL: &str = "Target reached";

/// One update for a countdown display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CountdownFrame {
    Remaining(DurationBreakdown),
    /// Terminal: no further frames follow.
    Reached,
}

/// Receives countdown frames.
///
/// Implementations are called from the countdown task, one frame at a
/// time.
pub trait DisplaySink: Send + Sync {
    fn show(&self, frame: &CountdownFrame);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CountdownStyle {
    /// `2y 2mo 5d 05:06:07`
    #[default]
    Compact,
    /// `2 years, 2 months, 5 days, 5 hours, 6 minutes, 7 seconds`
    Long,
}

/// Turns frames into text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountdownFormatter {
    pub style: CountdownStyle,
    /// Drop year/month/day (or, in long form, any) units that are zero
    /// before the first non-zero one.
    pub hide_leading_zero_units: bool,
    pub reached_label: String,
}

impl Default for CountdownFormatter {
    fn default() -> Self {
        Self {
            style: CountdownStyle::Compact,
            hide_leading_zero_units: true,
            reached_label: DEFAULT_REACHED_LABEL.to_string(),
        }
    }
}

impl CountdownFormatter {
    pub fn from_config(config: &CountdownConfig) -> Self {
        Self {
            style: config.style,
            hide_leading_zero_units: config.hide_leading_zero_units,
            reached_label: config.reached_label.clone(),
        }
    }

    pub fn format_frame(&self, frame: &CountdownFrame) -> String {
        match frame {
            CountdownFrame::Remaining(breakdown) => self.format_breakdown(breakdown),
            CountdownFrame::Reached => self.reached_label.clone(),
        }
    }

    pub fn format_breakdown(&self, b: &DurationBreakdown) -> String {
        match self.style {
            CountdownStyle::Compact => self.compact(b),
            CountdownStyle::Long => self.long(b),
        }
    }

    fn compact(&self, b: &DurationBreakdown) -> String {
        let clock = format!("{:02}:{:02}:{:02}", b.hours, b.minutes, b.seconds);
        let calendar = [(b.years, "y"), (b.months, "mo"), (b.days, "d")];

        let skip = if self.hide_leading_zero_units {
            calendar.iter().take_while(|(n, _)| *n == 0).count()
        } else {
            0
        };

        let mut parts: Vec<String> = calendar[skip..]
            .iter()
            .map(|(n, unit)| format!("{n}{unit}"))
            .collect();
        parts.push(clock);
        parts.join(" ")
    }

    fn long(&self, b: &DurationBreakdown) -> String {
        let units = [
            (b.years, "year"),
            (b.months, "month"),
            (b.days, "day"),
            (b.hours, "hour"),
            (b.minutes, "minute"),
            (b.seconds, "second"),
        ];

        // Seconds are always shown.
        let skip = if self.hide_leading_zero_units {
            units[..units.len() - 1]
                .iter()
                .take_while(|(n, _)| *n == 0)
                .count()
        } else {
            0
        };

        units[skip..]
            .iter()
            .map(|(n, unit)| {
                if *n == 1 {
                    format!("1 {unit}")
                } else {
                    format!("{n} {unit}s")
                }
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}
