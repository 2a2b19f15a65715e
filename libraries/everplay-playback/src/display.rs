//! Transport display formatting
//!
//! Elapsed/total clock text and progress-bar fill, recomputed on every
//! playback-position tick.

use std::time::Duration;

/// Format seconds as `M:SS` with zero-padded seconds
///
/// Non-finite or negative input renders as `0:00` (a position that is not
/// known yet is displayed as the start).
pub fn format_clock(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return "0:00".to_string();
    }
    let total = seconds.floor() as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

/// One tick of transport display state
#[derive(Debug, Clone, PartialEq)]
pub struct Progress {
    /// Elapsed clock text (`M:SS`)
    pub elapsed: String,

    /// Total clock text (`M:SS`)
    pub total: String,

    /// Progress-bar fill (0.0-100.0)
    pub fill_percent: f32,
}

impl Progress {
    /// Combined time label, `elapsed / total`
    pub fn time_label(&self) -> String {
        format!("{} / {}", self.elapsed, self.total)
    }
}

/// Compute display state for a position within an optional duration
///
/// Returns `None` while the duration is unknown or zero; the display keeps
/// its previous content in that case.
pub fn progress(position: Duration, duration: Option<Duration>) -> Option<Progress> {
    let duration = duration.filter(|d| !d.is_zero())?;
    let fill = (position.as_secs_f64() / duration.as_secs_f64() * 100.0).clamp(0.0, 100.0);

    Some(Progress {
        elapsed: format_clock(position.as_secs_f64()),
        total: format_clock(duration.as_secs_f64()),
        fill_percent: fill as f32,
    })
}
