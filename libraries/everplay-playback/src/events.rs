//! Player events
//!
//! Event-based communication for UI synchronization. The engine pushes
//! events as it mutates state; the host drains them after each call and
//! patches the DOM (play affordance, labels, active row, mute icon).

use crate::panel::PanelRow;
use crate::types::TransportState;
use serde::{Deserialize, Serialize};

/// Events emitted by the playback engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum PlayerEvent {
    /// Transport state changed (play/pause affordance)
    StateChanged {
        /// The new transport state
        state: TransportState,
    },

    /// A different track was loaded into the output
    TrackChanged {
        /// Playlist index of the new track (also the active panel row)
        index: usize,
        /// Display title (fallback already applied)
        title: String,
        /// Display artist (fallback already applied)
        artist: String,
    },

    /// Volume or mute state changed
    VolumeChanged {
        /// New level (0-100)
        level: u8,
        /// Whether the output is muted
        muted: bool,
    },

    /// The playlist panel needs a full re-render
    PlaylistRendered {
        /// One row per track, in playlist order
        rows: Vec<PanelRow>,
    },

    /// Panel visibility toggled
    PanelVisibility {
        /// Whether the panel is now shown
        visible: bool,
    },
}
