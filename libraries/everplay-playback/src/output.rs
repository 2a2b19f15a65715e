//! Host-agnostic audio output trait
//!
//! Abstracts the single audio element the widget owns. The browser host
//! wraps an `<audio>` node; tests and non-browser hosts use [`SilentOutput`].

use crate::error::Result;
use std::time::Duration;

/// The single shared audio output
///
/// Owned exclusively by the playback engine; every other component reads
/// playback state through engine operations or events, never through this
/// trait directly.
pub trait AudioOutput {
    /// Point the output at a new audio resource
    ///
    /// Resets position; duration becomes unknown until the host reports
    /// metadata for the new resource.
    fn set_source(&mut self, src: &str);

    /// Request playback start
    ///
    /// # Returns
    /// * `Ok(())` - playback started
    /// * `Err(AutoplayBlocked)` - the host denied the request; the caller
    ///   keeps its prior transport state and waits for a user gesture
    fn play(&mut self) -> Result<()>;

    /// Halt playback, keeping the current position
    fn pause(&mut self);

    /// Move the playback position
    fn set_position(&mut self, position: Duration);

    /// Current playback position
    fn position(&self) -> Duration;

    /// Total track duration, `None` until metadata has loaded
    fn duration(&self) -> Option<Duration>;

    /// Apply a linear gain in `[0.0, 1.0]`
    fn set_gain(&mut self, gain: f32);
}

/// Audio output that plays nothing
///
/// Accepts every request and advances no clock. Used by doc examples and
/// hosts that want the engine without audible output.
#[derive(Debug, Clone, Default)]
pub struct SilentOutput {
    src: Option<String>,
    position: Duration,
    duration: Option<Duration>,
    gain: f32,
}

impl SilentOutput {
    /// Create a silent output with no source loaded
    pub fn new() -> Self {
        Self::default()
    }

    /// Report track metadata, as a host would after loading it
    pub fn announce_duration(&mut self, duration: Duration) {
        self.duration = Some(duration);
    }

    /// Currently loaded source, if any
    pub fn source(&self) -> Option<&str> {
        self.src.as_deref()
    }
}

impl AudioOutput for SilentOutput {
    fn set_source(&mut self, src: &str) {
        self.src = Some(src.to_string());
        self.position = Duration::ZERO;
        self.duration = None;
    }

    fn play(&mut self) -> Result<()> {
        Ok(())
    }

    fn pause(&mut self) {}

    fn set_position(&mut self, position: Duration) {
        self.position = position;
    }

    fn position(&self) -> Duration {
        self.position
    }

    fn duration(&self) -> Option<Duration> {
        self.duration
    }

    fn set_gain(&mut self, gain: f32) {
        self.gain = gain.clamp(0.0, 1.0);
    }
}
