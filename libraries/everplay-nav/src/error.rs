//! Error types for soft navigation

use thiserror::Error;

/// Navigation errors
///
/// Every variant ends the same way: the engine falls back to a real
/// browser navigation, so none of these ever surface to the page.
#[derive(Debug, Error)]
pub enum NavError {
    /// Network failure while fetching the target page
    #[error("Page fetch failed: {0}")]
    Fetch(String),

    /// Non-success response status
    #[error("Unexpected response status: {0}")]
    Status(u16),
}

/// Result type for navigation operations
pub type Result<T> = std::result::Result<T, NavError>;
