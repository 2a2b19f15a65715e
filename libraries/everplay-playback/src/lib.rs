//! Everplay - Playback
//!
//! Host-agnostic playback management for the Everplay widget.
//!
//! This crate provides:
//! - Playlist loading and validation (one-shot, graceful degradation)
//! - Transport state machine (stopped/playing/paused) over a track cursor
//! - Volume control with mute/unmute memory
//! - Best-effort state persistence across page loads
//! - Deferred restore (seek waits for track metadata, then resumes)
//! - Playlist panel view models with HTML escaping
//! - Transport display formatting (M:SS clock, progress fill)
//!
//! # Architecture
//!
//! `everplay-playback` never touches the host directly:
//! - The audio element sits behind the [`AudioOutput`] trait
//! - The durable store sits behind `everplay_core::KeyValueStore`
//! - The playlist document arrives through the [`PlaylistSource`] trait
//! - UI changes flow out as [`PlayerEvent`]s drained by the host
//!
//! Everything runs single-threaded and event-driven; the host calls in on
//! DOM/media events and drains the event queue afterwards.
//!
//! # Example
//!
//! ```rust
//! use everplay_core::{MemoryStore, Playlist};
//! use everplay_playback::{PlayerConfig, PlayerEngine, SilentOutput};
//!
//! let playlist = Playlist::from_json(
//!     r#"[{"src":"/music/a.mp3","title":"A"},{"src":"/music/b.mp3"}]"#,
//! )
//! .unwrap();
//!
//! let mut engine = PlayerEngine::new(
//!     playlist,
//!     Box::new(SilentOutput::new()),
//!     Box::new(MemoryStore::new()),
//!     PlayerConfig::default(),
//! );
//!
//! engine.play();
//! engine.next();
//! assert_eq!(engine.current_index(), 1);
//!
//! // Host drains events to update the DOM
//! for event in engine.take_events() {
//!     let _ = event;
//! }
//! ```

mod display;
mod engine;
mod error;
mod events;
mod loader;
mod output;
mod panel;
mod persist;
mod types;
mod volume;

// Public exports
pub use display::{format_clock, Progress};
pub use engine::PlayerEngine;
pub use error::{PlaybackError, Result};
pub use events::PlayerEvent;
pub use loader::{load_playlist, PlaylistSource};
pub use output::{AudioOutput, SilentOutput};
pub use panel::{escape_html, PanelRow, PanelVisibility};
pub use persist::{read_snapshot, write_snapshot, Snapshot, SnapshotFields, STATE_KEY};
pub use types::{PlayerConfig, TransportState};
pub use volume::{Volume, DEFAULT_VOLUME};
