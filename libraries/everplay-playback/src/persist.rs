//! Playback state persistence
//!
//! A best-effort JSON snapshot written to the durable store after every
//! state-changing operation and right before page teardown, and read back
//! once at startup. It is never authoritative: the stored value may be
//! stale, absent, or invalid, so reads validate field by field and writes
//! that fail are ignored.
//!
//! The key and field names are a wire format shared with every past page
//! load; do not rename them.

use everplay_core::KeyValueStore;
use serde_json::{json, Value};
use std::time::Duration;
use tracing::debug;

/// Fixed store key for the playback snapshot
pub const STATE_KEY: &str = "musicPlayerState";

/// Snapshot as captured from live engine state
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    /// Current playlist index
    pub index: usize,

    /// Playback position in seconds
    pub time: f64,

    /// Volume to restore on unmute (the meaningful level even while muted)
    pub volume: u8,

    /// Whether the output was muted
    pub muted: bool,

    /// Whether playback was running
    pub playing: bool,
}

/// Fields recovered from a stored snapshot
///
/// Each field validated independently; a mistyped or missing field simply
/// comes back as `None` (bools default to false) without poisoning the
/// rest.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SnapshotFields {
    /// Stored index, if it was a non-negative number
    pub index: Option<usize>,

    /// Stored position in seconds, if finite, non-negative, and small
    /// enough to represent as a duration
    pub time: Option<f64>,

    /// Stored volume, if numeric (clamped to 0-100)
    pub volume: Option<u8>,

    /// Stored mute flag, defaulting to false
    pub muted: bool,

    /// Stored playing flag, defaulting to false
    pub playing: bool,
}

/// Write a snapshot to the store
///
/// Failures (store unavailable, quota exceeded) are traced and dropped.
pub fn write_snapshot(store: &mut dyn KeyValueStore, snapshot: &Snapshot) {
    let body = json!({
        "index": snapshot.index,
        "time": snapshot.time,
        "volume": snapshot.volume,
        "muted": snapshot.muted,
        "playing": snapshot.playing,
    })
    .to_string();

    if let Err(e) = store.set(STATE_KEY, &body) {
        debug!(error = %e, "state snapshot write dropped");
    }
}

/// Read the stored snapshot, tolerating corruption
///
/// Returns `None` when there is no stored value or it is not a JSON
/// object; otherwise extracts whatever fields validate.
pub fn read_snapshot(store: &dyn KeyValueStore) -> Option<SnapshotFields> {
    let raw = store.get(STATE_KEY)?;
    let value: Value = match serde_json::from_str(&raw) {
        Ok(v) => v,
        Err(e) => {
            debug!(error = %e, "stored snapshot is not valid JSON, ignoring");
            return None;
        }
    };
    if !value.is_object() {
        debug!("stored snapshot is not an object, ignoring");
        return None;
    }

    Some(SnapshotFields {
        index: value
            .get("index")
            .and_then(Value::as_u64)
            .map(|i| i as usize),
        time: value
            .get("time")
            .and_then(Value::as_f64)
            .filter(|t| Duration::try_from_secs_f64(*t).is_ok()),
        volume: value
            .get("volume")
            .and_then(Value::as_f64)
            .map(|v| v.clamp(0.0, 100.0) as u8),
        muted: value
            .get("muted")
            .and_then(Value::as_bool)
            .unwrap_or(false),
        playing: value
            .get("playing")
            .and_then(Value::as_bool)
            .unwrap_or(false),
    })
}
