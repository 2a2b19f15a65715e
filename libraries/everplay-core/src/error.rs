//! Error types shared across Everplay crates

use thiserror::Error;

/// Core errors
#[derive(Debug, Error)]
pub enum CoreError {
    /// Playlist source missing, empty, or malformed
    ///
    /// All of these collapse into one condition: the widget has nothing to
    /// play and hides itself.
    #[error("Playlist unavailable: {0}")]
    PlaylistUnavailable(String),

    /// Durable store rejected a write (unavailable, quota exceeded)
    #[error("Storage write failed: {0}")]
    StorageWrite(String),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
