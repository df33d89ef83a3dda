//! Recent-history summaries over the session log.
//!
//! Bars are a coarse visual, not a chart: length is
//! floor(max(0, prediction × scale)) capped at `MAX_BAR_WIDTH`, so a predicted
//! gain draws nothing. Non-finite predictions are left out of the average.

use chrono::NaiveDate;

use crate::error::Result;
use crate::models::SessionLogEntry;
use crate::session_log::SessionLog;

const BAR_CHAR: char = '#';

/// Longest bar drawn, whatever the prediction.
pub const MAX_BAR_WIDTH: usize = 80;

/// One rendered row of the trend visual.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendBar {
    pub date: NaiveDate,
    pub prediction: f64,
    pub bar: String,
}

impl std::fmt::Display for TrendBar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} | {} {:.2} kg", self.date, self.bar, self.prediction)
    }
}

pub struct TrendReporter {
    log: SessionLog,
    bar_scale: f64,
}

impl TrendReporter {
    pub fn new(log: SessionLog, bar_scale: f64) -> Self {
        Self { log, bar_scale }
    }

    /// Mean of the finite predictions among the last `n` entries and how many
    /// went into it. `None` when the log is absent or has no usable rows.
    pub fn recent_average(&self, n: usize) -> Result<Option<(f64, usize)>> {
        let entries = self.log.entries()?;
        Ok(average_of_last(&entries, n))
    }

    /// One bar per entry for the last `n` sessions, oldest first.
    pub fn render_trend(&self, n: usize) -> Result<Vec<TrendBar>> {
        let entries = self.log.entries()?;
        Ok(last(&entries, n)
            .iter()
            .map(|e| TrendBar {
                date: e.date,
                prediction: e.prediction,
                bar: render_bar(e.prediction, self.bar_scale),
            })
            .collect())
    }
}

fn last(entries: &[SessionLogEntry], n: usize) -> &[SessionLogEntry] {
    &entries[entries.len().saturating_sub(n)..]
}

pub fn average_of_last(entries: &[SessionLogEntry], n: usize) -> Option<(f64, usize)> {
    let finite: Vec<f64> = last(entries, n)
        .iter()
        .map(|e| e.prediction)
        .filter(|p| p.is_finite())
        .collect();
    if finite.is_empty() {
        return None;
    }
    let sum: f64 = finite.iter().sum();
    Some((sum / finite.len() as f64, finite.len()))
}

pub fn render_bar(value: f64, scale: f64) -> String {
    // `as usize` saturates and maps NaN to 0.
    let len = ((value * scale).max(0.0).floor() as usize).min(MAX_BAR_WIDTH);
    std::iter::repeat(BAR_CHAR).take(len).collect()
}
