//! Everplay - Soft Navigation
//!
//! Replaces full-page navigation with an in-place content swap so the
//! background music player, which lives outside the swapped region, keeps
//! playing across page changes.
//!
//! This crate provides:
//! - Link interception policy (same origin, no target, same protocol)
//! - Page snapshot extraction (title + content-region markup)
//! - The fetch-and-swap navigation engine with hard-navigation fallback
//! - Theme re-initialization after a swap
//!
//! # Architecture
//!
//! Host effects - applying a snapshot to the live document (including
//! re-executing inline scripts), history, scrolling, link binding, the
//! theme class - sit behind the [`DomHost`] trait; fetching sits behind
//! [`PageFetcher`]. The engine owns only the orchestration: policy, the
//! swap sequence, and the fallback that degrades a failed soft navigation
//! to a normal page load.

mod engine;
mod error;
mod host;
mod link;
mod page;
pub mod theme;

// Public exports
pub use engine::{HistoryMode, NavigationConfig, NavigationEngine};
pub use error::{NavError, Result};
pub use host::{DomHost, PageFetcher};
pub use link::{should_intercept, LinkHandle};
pub use page::PageSnapshot;
pub use theme::{Theme, THEME_KEY};
