//! Core types for the playback engine

use crate::volume::DEFAULT_VOLUME;
use serde::{Deserialize, Serialize};

/// Transport state of the single audio output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransportState {
    /// No playback requested yet
    Stopped,

    /// Currently playing
    Playing,

    /// Halted mid-track
    Paused,
}

/// Configuration for the player engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Initial volume (0-100, default: 80)
    pub volume: u8,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            volume: DEFAULT_VOLUME,
        }
    }
}
