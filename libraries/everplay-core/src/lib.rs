//! Everplay - Core
//!
//! Shared foundation for the Everplay widget:
//! - Track and playlist types (the read-only track list)
//! - Key-value storage capability (durable per-origin store)
//! - Shared error type
//!
//! # Architecture
//!
//! `everplay-core` is completely host-agnostic. The widget runs embedded in
//! a host page (a browser in production); everything the host owns - the
//! durable store, the audio element, the DOM - is reached through
//! capability traits. This crate defines the storage seam; the playback and
//! navigation crates define theirs.

mod error;
pub mod storage;
pub mod types;

// Public exports
pub use error::{CoreError, Result};
pub use storage::{KeyValueStore, MemoryStore};
pub use types::{Playlist, Track};
