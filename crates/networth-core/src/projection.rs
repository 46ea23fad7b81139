//! Projection results as returned by the server.
//!
//! The compounding itself happens server-side; this module only reads the
//! result, renders it, and exposes the projected target date that the
//! countdown runs to.

use std::path::Path;

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};
use serde::{Deserialize, Serialize};

use crate::calendar::resolve_local;
use crate::error::Result;

/// Monthly rows covering 65 years.
pub const MAX_TABLE_ROWS: usize = 65 * 12;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    pub run_at: NaiveDateTime,
    pub start_total: f64,
    pub target: f64,
    /// Compounding periods per year.
    #[serde(default = "default_basis")]
    pub basis: u32,
    /// First month in which the projected total reaches `target`.
    #[serde(default)]
    pub millionaire_date: Option<NaiveDateTime>,
    #[serde(default)]
    pub days_to_target: Option<i64>,
    /// `(approximate day offset, total)` checkpoints.
    #[serde(default)]
    pub checkpoints: Vec<(u32, f64)>,
    /// `(first of month, total)` for every projected month.
    #[serde(default)]
    pub table: Vec<(NaiveDate, f64)>,
}

fn default_basis() -> u32 {
    12
}

impl ProjectionResult {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn reaches_target(&self) -> bool {
        self.millionaire_date.is_some()
    }

    /// The projected target date as an instant in `tz`, read as local
    /// wall-clock time. `None` when the projection never reaches the target.
    pub fn countdown_target<Tz: TimeZone>(&self, tz: &Tz) -> Option<DateTime<Tz>> {
        self.millionaire_date
            .as_ref()
            .and_then(|date| resolve_local(tz, date))
    }

    /// Headline lines describing the run.
    pub fn summary(&self, currency: &str) -> Vec<String> {
        let projected = match (&self.millionaire_date, self.days_to_target) {
            (Some(date), Some(days)) => format!("{} ({days} days)", date.format("%Y-%m-%d")),
            (Some(date), None) => date.format("%Y-%m-%d").to_string(),
            (None, _) => "Not reached.".to_string(),
        };

        vec![
            format!("Run at: {}", self.run_at.format("%Y-%m-%d %H:%M:%S")),
            format!("Start total: {}", format_money(self.start_total, currency)),
            format!("Target: {}", format_money(self.target, currency)),
            format!("Projected target date: {projected}"),
        ]
    }

    /// The monthly table, at most `limit` rows (and never more than
    /// [`MAX_TABLE_ROWS`]).
    pub fn render_table(&self, limit: usize, currency: &str) -> String {
        let rows: Vec<(String, String)> = self
            .table
            .iter()
            .take(limit.min(MAX_TABLE_ROWS))
            .map(|(date, total)| (date.format("%Y-%m-%d").to_string(), format_money(*total, currency)))
            .collect();

        let header = ("Date (1st of month)", "Total");
        let date_width = header.0.len();
        let total_width = rows
            .iter()
            .map(|(_, total)| total.len())
            .max()
            .unwrap_or(0)
            .max(header.1.len());

        let mut out = format!("{:<date_width$}  {:>total_width$}\n", header.0, header.1);
        for (date, total) in rows {
            out.push_str(&format!("{date:<date_width$}  {total:>total_width$}\n"));
        }
        out
    }
}

/// Two-decimal amount with a leading currency symbol.
pub fn format_money(amount: f64, currency: &str) -> String {
    if amount < 0.0 {
        format!("-{currency}{:.2}", -amount)
    } else {
        format!("{currency}{amount:.2}")
    }
}
