//! Playlist loading
//!
//! One-shot fetch and validation of the track list. Every failure mode -
//! network error, non-success response, parse failure, wrong shape, empty
//! list - collapses into the single "playlist unavailable" condition; the
//! host reacts by hiding the whole widget and the rest of the page keeps
//! working. No retry, no periodic re-fetch.

use crate::error::{PlaybackError, Result};
use async_trait::async_trait;
use everplay_core::Playlist;
use tracing::debug;

/// Capability for fetching the playlist document
///
/// The browser host fetches the fixed well-known path (`/music/music.json`)
/// and hands back the raw body; tests return canned strings.
#[async_trait]
pub trait PlaylistSource: Send + Sync {
    /// Fetch the raw playlist document
    ///
    /// # Returns
    /// * `Ok(body)` - the response body text
    /// * `Err(_)` - network failure or non-success response
    async fn fetch_playlist(&self) -> Result<String>;
}

/// Fetch and validate the playlist
///
/// On success the playlist is guaranteed non-empty. On any failure returns
/// `PlaylistUnavailable`; the caller hides the player and suppresses the
/// error.
pub async fn load_playlist(source: &dyn PlaylistSource) -> Result<Playlist> {
    let body = source.fetch_playlist().await.map_err(|e| {
        debug!(error = %e, "playlist fetch failed");
        PlaybackError::PlaylistUnavailable(e.to_string())
    })?;

    Playlist::from_json(&body).map_err(|e| {
        debug!(error = %e, "playlist document rejected");
        PlaybackError::from(e)
    })
}
