//! Playlist panel view model
//!
//! A pure view over engine state: row content for the track list and the
//! panel's visibility state machine. Rendering and click wiring belong to
//! the host; this module only decides what to show.
//!
//! Titles and artists are HTML-escaped here because playlist content is
//! untrusted and rows are spliced into markup by the host.

use everplay_core::{Playlist, Track};
use serde::{Deserialize, Serialize};

/// One row of the playlist panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelRow {
    /// Escaped track title (falls back to the unknown-title label)
    pub title: String,

    /// Escaped artist name (empty when absent; the panel shows no fallback)
    pub artist: String,

    /// Whether this row is the current track
    pub active: bool,
}

/// Escape text for splicing into HTML markup
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Build all panel rows for a playlist, marking `current_index` active
pub fn rows(playlist: &Playlist, current_index: usize) -> Vec<PanelRow> {
    playlist
        .tracks()
        .iter()
        .enumerate()
        .map(|(i, track)| row(track, i == current_index))
        .collect()
}

fn row(track: &Track, active: bool) -> PanelRow {
    PanelRow {
        title: escape_html(track.display_title()),
        artist: escape_html(track.artist.as_deref().unwrap_or("")),
        active,
    }
}

/// Panel visibility state machine
///
/// Toggled by the list button; closed by an explicit close or by any click
/// outside the player's root element.
#[derive(Debug, Clone, Copy, Default)]
pub struct PanelVisibility {
    visible: bool,
}

impl PanelVisibility {
    /// Create a hidden panel
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the panel is shown
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Flip visibility, returning the new state
    pub fn toggle(&mut self) -> bool {
        self.visible = !self.visible;
        self.visible
    }

    /// Hide the panel; returns true if it was visible
    pub fn close(&mut self) -> bool {
        let was_visible = self.visible;
        self.visible = false;
        was_visible
    }

    /// Handle a document-level click; closes unless the click landed inside
    /// the player root. Returns true if visibility changed.
    pub fn handle_document_click(&mut self, inside_player: bool) -> bool {
        if self.visible && !inside_player {
            self.visible = false;
            return true;
        }
        false
    }
}
