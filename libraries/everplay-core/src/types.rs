//! Core types for the track list

use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};

/// Display fallback when a track carries no title
pub const UNKNOWN_TITLE: &str = "Unknown Track";

/// Display fallback when a track carries no artist
pub const UNKNOWN_ARTIST: &str = "Unknown Artist";

/// One playable audio item
///
/// Loaded from the playlist document and immutable afterwards. Only the
/// source locator is required; display metadata falls back to the
/// "unknown" labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    /// Audio resource locator
    pub src: String,

    /// Track title (optional)
    #[serde(default)]
    pub title: Option<String>,

    /// Artist name (optional)
    #[serde(default)]
    pub artist: Option<String>,
}

impl Track {
    /// Title for display, falling back to [`UNKNOWN_TITLE`]
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(UNKNOWN_TITLE)
    }

    /// Artist for display, falling back to [`UNKNOWN_ARTIST`]
    pub fn display_artist(&self) -> &str {
        self.artist.as_deref().unwrap_or(UNKNOWN_ARTIST)
    }
}

/// Ordered, non-empty sequence of tracks
///
/// Index-addressed; the non-empty invariant is enforced at construction so
/// cursor arithmetic never has to handle a zero length. Rebuilt fully on
/// every page load, never updated incrementally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playlist {
    tracks: Vec<Track>,
}

impl Playlist {
    /// Build a playlist from already-parsed tracks
    ///
    /// Returns `PlaylistUnavailable` when the list is empty.
    pub fn new(tracks: Vec<Track>) -> Result<Self> {
        if tracks.is_empty() {
            return Err(CoreError::PlaylistUnavailable("empty playlist".into()));
        }
        Ok(Self { tracks })
    }

    /// Parse a playlist from a raw JSON document
    ///
    /// The body must be a non-empty array of track-shaped objects. Any
    /// other shape (not an array, empty array, parse failure, element
    /// missing `src`) is the single "playlist unavailable" condition.
    pub fn from_json(body: &str) -> Result<Self> {
        let tracks: Vec<Track> = serde_json::from_str(body)
            .map_err(|e| CoreError::PlaylistUnavailable(e.to_string()))?;
        Self::new(tracks)
    }

    /// Number of tracks (always >= 1)
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Always false; kept for API symmetry with collections
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Track at `index`, if in range
    pub fn get(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    /// All tracks in order
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Cursor after `index`, wrapping past the end back to 0
    pub fn next_index(&self, index: usize) -> usize {
        (index + 1) % self.tracks.len()
    }

    /// Cursor before `index`, wrapping from 0 to the last track
    pub fn prev_index(&self, index: usize) -> usize {
        (index + self.tracks.len() - 1) % self.tracks.len()
    }
}
