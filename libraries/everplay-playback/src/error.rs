//! Error types for playback management

use thiserror::Error;

/// Playback errors
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// The host denied a play request (blocked autoplay)
    ///
    /// Not a real failure: the engine keeps its prior transport state and
    /// waits for the user to trigger playback again.
    #[error("Play request denied by host")]
    AutoplayBlocked,

    /// Playlist source missing, empty, or malformed
    #[error("Playlist unavailable: {0}")]
    PlaylistUnavailable(String),

    /// Audio output error from the host
    #[error("Audio output error: {0}")]
    Output(String),
}

impl From<everplay_core::CoreError> for PlaybackError {
    fn from(err: everplay_core::CoreError) -> Self {
        match err {
            everplay_core::CoreError::PlaylistUnavailable(msg) => {
                PlaybackError::PlaylistUnavailable(msg)
            }
            everplay_core::CoreError::StorageWrite(msg) => PlaybackError::Output(msg),
        }
    }
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
