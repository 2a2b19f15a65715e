//! Player engine - core orchestration
//!
//! A transport state machine (stopped/playing/paused) crossed with a track
//! cursor over the playlist. Owns the audio output and the durable store;
//! the host calls in on UI and media events and drains [`PlayerEvent`]s
//! back out. All transport operations are best-effort: the only observable
//! failure is a denied play request, which is swallowed.

use crate::{
    display::{self, Progress},
    events::PlayerEvent,
    output::AudioOutput,
    panel::{self, PanelRow, PanelVisibility},
    persist::{self, Snapshot},
    types::{PlayerConfig, TransportState},
    volume::Volume,
};
use everplay_core::{KeyValueStore, Playlist, Track};
use std::time::Duration;
use tracing::debug;

/// A restore seek waiting for track metadata
///
/// Created when a persisted position exists before the output knows its
/// duration. Playback must not start until the seek is applied, so the
/// resume flag travels with the position. The generation stamp invalidates
/// the wait if any track load happens in between.
#[derive(Debug, Clone)]
struct PendingRestore {
    position: Duration,
    resume: bool,
    generation: u64,
}

/// Central playback management
///
/// Single owned state object; no ambient globals. One instance drives one
/// player widget.
pub struct PlayerEngine {
    // Collaborators
    playlist: Playlist,
    output: Box<dyn AudioOutput>,
    store: Box<dyn KeyValueStore>,

    // State
    transport: TransportState,
    current_index: usize,
    volume: Volume,
    panel: PanelVisibility,

    // Deferred restore and its staleness guard
    pending_restore: Option<PendingRestore>,
    load_generation: u64,

    // Event queue for UI synchronization
    pending_events: Vec<PlayerEvent>,
}

impl PlayerEngine {
    /// Create an engine over a loaded playlist
    ///
    /// Loads track 0 into the output without starting playback, applies the
    /// configured volume, and queues the initial panel render. The initial
    /// volume is applied without persisting so a restore that runs next
    /// still sees the previous session's snapshot.
    pub fn new(
        playlist: Playlist,
        output: Box<dyn AudioOutput>,
        store: Box<dyn KeyValueStore>,
        config: PlayerConfig,
    ) -> Self {
        let mut engine = Self {
            playlist,
            output,
            store,
            transport: TransportState::Stopped,
            current_index: 0,
            volume: Volume::new(config.volume),
            panel: PanelVisibility::new(),
            pending_restore: None,
            load_generation: 0,
            pending_events: Vec::new(),
        };

        engine.output.set_gain(engine.volume.gain());
        engine.load_track(0);
        let rows = engine.panel_rows();
        engine
            .pending_events
            .push(PlayerEvent::PlaylistRendered { rows });
        engine
    }

    // ===== Track Loading =====

    /// Load the track at `index` into the output
    ///
    /// Updates the cursor and queues a `TrackChanged` event carrying the
    /// display metadata and active-row index. Out-of-range `index` is a
    /// no-op. Transport state is not changed.
    pub fn load_track(&mut self, index: usize) {
        let Some(track) = self.playlist.get(index) else {
            return;
        };
        let (title, artist) = (
            track.display_title().to_string(),
            track.display_artist().to_string(),
        );
        let src = track.src.clone();

        self.current_index = index;
        self.load_generation += 1;
        self.output.set_source(&src);
        self.pending_events.push(PlayerEvent::TrackChanged {
            index,
            title,
            artist,
        });
    }

    // ===== Playback Control =====

    /// Request playback start
    ///
    /// On success transitions to Playing and persists. A denied request
    /// (blocked autoplay) leaves the prior transport state untouched; the
    /// user's next gesture retries.
    pub fn play(&mut self) {
        match self.output.play() {
            Ok(()) => {
                self.transport = TransportState::Playing;
                self.pending_events.push(PlayerEvent::StateChanged {
                    state: TransportState::Playing,
                });
                self.save();
            }
            Err(e) => {
                debug!(error = %e, "play request denied, keeping transport state");
            }
        }
    }

    /// Halt playback
    pub fn pause(&mut self) {
        self.output.pause();
        self.transport = TransportState::Paused;
        self.pending_events.push(PlayerEvent::StateChanged {
            state: TransportState::Paused,
        });
        self.save();
    }

    /// Pause if playing, otherwise request playback
    pub fn toggle_play(&mut self) {
        if self.transport == TransportState::Playing {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Advance to the next track, wrapping past the end
    ///
    /// Resumes playback on the new track if the engine was playing. Also
    /// the handler for natural end-of-track. Persists either way.
    pub fn next(&mut self) {
        let was_playing = self.transport == TransportState::Playing;
        let index = self.playlist.next_index(self.current_index);
        self.load_track(index);
        if was_playing {
            self.play();
        }
        self.save();
    }

    /// Retreat to the previous track, wrapping from 0 to the last
    pub fn previous(&mut self) {
        let was_playing = self.transport == TransportState::Playing;
        let index = self.playlist.prev_index(self.current_index);
        self.load_track(index);
        if was_playing {
            self.play();
        }
        self.save();
    }

    /// Explicit selection from the panel
    ///
    /// Out-of-range `index` is a no-op; a valid one loads the track and
    /// unconditionally requests playback.
    pub fn play_track(&mut self, index: usize) {
        if self.playlist.get(index).is_none() {
            return;
        }
        self.load_track(index);
        self.play();
    }

    /// Natural end-of-track handler (host wires the media "ended" event)
    pub fn handle_track_ended(&mut self) {
        self.next();
    }

    // ===== Seek =====

    /// Seek to a fraction of the total duration
    ///
    /// The fraction is clamped to `[0, 1]`. A no-op while the duration is
    /// unknown (metadata not yet loaded).
    pub fn seek(&mut self, fraction: f64) {
        let Some(duration) = self.output.duration() else {
            return;
        };
        let fraction = fraction.clamp(0.0, 1.0);
        self.output.set_position(duration.mul_f64(fraction));
    }

    // ===== Volume =====

    /// Set the volume (0-100, clamped) and apply it to the output
    ///
    /// Zero mutes without disturbing the unmute memory; nonzero unmutes and
    /// becomes the new memory. Always persists.
    pub fn set_volume(&mut self, level: u8) {
        self.volume.set_level(level);
        self.output.set_gain(self.volume.gain());
        self.pending_events.push(PlayerEvent::VolumeChanged {
            level: self.volume.level(),
            muted: self.volume.is_muted(),
        });
        self.save();
    }

    /// Toggle mute
    ///
    /// Muting remembers the current level; unmuting restores the level in
    /// effect immediately before muting (80 when nothing meaningful was
    /// remembered).
    pub fn toggle_mute(&mut self) {
        if self.volume.is_muted() {
            let target = self.volume.unmute_target();
            self.set_volume(target);
        } else {
            self.set_volume(0);
        }
    }

    /// Current volume level (0-100)
    pub fn volume_level(&self) -> u8 {
        self.volume.level()
    }

    /// Check if muted
    pub fn is_muted(&self) -> bool {
        self.volume.is_muted()
    }

    // ===== Persistence =====

    /// Capture and store the current state
    ///
    /// Called internally after every state-changing operation; the host
    /// also calls it right before page teardown. Write failures are
    /// absorbed.
    pub fn save(&mut self) {
        let snapshot = Snapshot {
            index: self.current_index,
            time: self.output.position().as_secs_f64(),
            volume: if self.volume.is_muted() {
                self.volume.unmute_target()
            } else {
                self.volume.level()
            },
            muted: self.volume.is_muted(),
            playing: self.transport == TransportState::Playing,
        };
        persist::write_snapshot(self.store.as_mut(), &snapshot);
    }

    /// Restore persisted state, called once after the playlist loads
    ///
    /// Valid fields apply independently and in a fixed order: track
    /// selection, then volume/mute, then position, then playback resume.
    /// Playback never starts before a saved position has been applied, so
    /// a seek that must wait for metadata defers the resume with it.
    pub fn restore(&mut self) {
        let Some(fields) = persist::read_snapshot(self.store.as_ref()) else {
            return;
        };

        if let Some(index) = fields.index {
            if index < self.playlist.len() {
                self.load_track(index);
            }
        }

        if let Some(volume) = fields.volume {
            if fields.muted {
                // Output goes silent, but the snapshot's volume is what
                // unmuting should bring back; remember it before the
                // save inside set_volume writes the snapshot back out
                self.volume.remember(volume);
                self.set_volume(0);
            } else {
                self.set_volume(volume);
            }
        }

        match fields.time {
            Some(time) if time > 0.0 => {
                let position = Duration::from_secs_f64(time);
                if self.output.duration().is_some() {
                    self.output.set_position(position);
                    if fields.playing {
                        self.play();
                    }
                } else {
                    self.pending_restore = Some(PendingRestore {
                        position,
                        resume: fields.playing,
                        generation: self.load_generation,
                    });
                }
            }
            _ => {
                if fields.playing {
                    self.play();
                }
            }
        }
    }

    /// Track metadata became available (host wires the media event)
    ///
    /// Applies a deferred restore seek, then resumes playback if the
    /// snapshot said so. A wait stamped by an earlier track load is stale
    /// and dropped.
    pub fn on_metadata_loaded(&mut self) {
        let Some(pending) = self.pending_restore.take() else {
            return;
        };
        if pending.generation != self.load_generation {
            debug!("deferred restore superseded by a track load, dropping");
            return;
        }
        self.output.set_position(pending.position);
        if pending.resume {
            self.play();
        }
    }

    // ===== Panel =====

    /// Toggle the playlist panel
    pub fn toggle_panel(&mut self) {
        let visible = self.panel.toggle();
        self.pending_events
            .push(PlayerEvent::PanelVisibility { visible });
    }

    /// Close the playlist panel
    pub fn close_panel(&mut self) {
        if self.panel.close() {
            self.pending_events
                .push(PlayerEvent::PanelVisibility { visible: false });
        }
    }

    /// Document-level click; closes the panel when it lands outside the
    /// player root
    pub fn handle_document_click(&mut self, inside_player: bool) {
        if self.panel.handle_document_click(inside_player) {
            self.pending_events
                .push(PlayerEvent::PanelVisibility { visible: false });
        }
    }

    /// Whether the panel is shown
    pub fn panel_visible(&self) -> bool {
        self.panel.is_visible()
    }

    /// Full panel row set for the current playlist
    pub fn panel_rows(&self) -> Vec<PanelRow> {
        panel::rows(&self.playlist, self.current_index)
    }

    // ===== State Queries =====

    /// Current transport state
    pub fn transport(&self) -> TransportState {
        self.transport
    }

    /// Current playlist index
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Current track
    pub fn current_track(&self) -> &Track {
        // The cursor is kept in range by every mutation path
        &self.playlist.tracks()[self.current_index]
    }

    /// Number of tracks
    pub fn playlist_len(&self) -> usize {
        self.playlist.len()
    }

    /// Display state for the current position tick
    ///
    /// `None` while the duration is unknown; the host keeps the previous
    /// display content.
    pub fn progress(&self) -> Option<Progress> {
        display::progress(self.output.position(), self.output.duration())
    }

    // ===== Events =====

    /// Drain queued UI events
    pub fn take_events(&mut self) -> Vec<PlayerEvent> {
        std::mem::take(&mut self.pending_events)
    }
}
