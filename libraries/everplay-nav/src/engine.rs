//! Fetch-and-swap navigation engine
//!
//! The swap sequence is all-or-nothing: the document is only touched
//! after a snapshot has been successfully extracted from the fetched
//! page. Any failure before that point degrades to a real browser
//! navigation, so the worst case is losing playback continuity, never a
//! half-swapped page.

use tracing::debug;
use url::Url;

use crate::host::{DomHost, PageFetcher};
use crate::link::should_intercept;
use crate::page::PageSnapshot;
use crate::theme;

/// How a completed swap records itself in session history
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryMode {
    /// New entry - a link click moving forward
    Push,
    /// Overwrite the current entry - back/forward traversal, where the
    /// browser has already moved the session pointer for us
    Replace,
}

/// Engine configuration
#[derive(Debug, Clone)]
pub struct NavigationConfig {
    /// Class naming the swappable content region
    pub region_class: String,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            region_class: "wrapper".to_string(),
        }
    }
}

/// Soft-navigation engine
///
/// Owns the fetch capability and the swap orchestration; everything that
/// touches the live document goes through the [`DomHost`] passed to each
/// call.
pub struct NavigationEngine {
    fetcher: Box<dyn PageFetcher>,
    config: NavigationConfig,
}

impl NavigationEngine {
    /// Create an engine over a page fetcher
    pub fn new(fetcher: Box<dyn PageFetcher>, config: NavigationConfig) -> Self {
        Self { fetcher, config }
    }

    /// Soft-navigate to `url` in response to an intercepted link click
    pub async fn navigate(&self, url: &Url, host: &mut dyn DomHost) {
        self.swap_to(url, HistoryMode::Push, host).await;
    }

    /// Re-render after a back/forward traversal
    ///
    /// The browser has already updated the address bar, so the swap
    /// records itself with a history replace rather than pushing a
    /// duplicate entry.
    pub async fn handle_history_pop(&self, host: &mut dyn DomHost) {
        let url = host.current_url();
        self.swap_to(&url, HistoryMode::Replace, host).await;
    }

    async fn swap_to(&self, url: &Url, mode: HistoryMode, host: &mut dyn DomHost) {
        let body = match self.fetcher.fetch_page(url).await {
            Ok(body) => body,
            Err(e) => {
                debug!("Soft navigation to {url} failed ({e}), falling back");
                host.hard_navigate(url);
                return;
            }
        };

        let Some(snapshot) = PageSnapshot::extract(&body, &self.config.region_class) else {
            debug!("No content region in {url}, falling back");
            host.hard_navigate(url);
            return;
        };

        host.apply_snapshot(&snapshot);
        match mode {
            HistoryMode::Push => host.push_history(url),
            HistoryMode::Replace => host.replace_history(url),
        }
        self.rebind_links(host);
        theme::reinit(host);
        host.scroll_to_top();
    }

    /// Attach the click handler to every interceptable, not-yet-bound
    /// link in the content region
    ///
    /// Also called once at startup for the links the initial page shipped
    /// with. Binding is idempotent; already-bound links are skipped.
    pub fn rebind_links(&self, host: &mut dyn DomHost) {
        let current = host.current_url();
        let mut bound = 0usize;
        for link in host.content_links() {
            if link.bound || !should_intercept(&link, &current) {
                continue;
            }
            host.bind_link(link.id);
            bound += 1;
        }
        debug!("Bound {bound} content links");
    }
}
