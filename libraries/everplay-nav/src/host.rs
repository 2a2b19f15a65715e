//! Host capability traits
//!
//! The browser host implements these over the live document, `history`,
//! and `fetch`. Non-browser hosts (and the tests) implement them over
//! in-memory state.

use crate::error::Result;
use crate::link::LinkHandle;
use crate::page::PageSnapshot;
use async_trait::async_trait;
use url::Url;

/// Capability for fetching a page document
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch the document at `url`
    ///
    /// # Returns
    /// * `Ok(body)` - the response body text
    /// * `Err(Fetch)` - network failure
    /// * `Err(Status)` - non-success response
    ///
    /// Either error degrades the navigation to a full browser load.
    async fn fetch_page(&self, url: &Url) -> Result<String>;
}

/// The live document and browser chrome
///
/// `apply_snapshot` is deliberately one opaque operation: replacing the
/// region's markup must also re-execute the inline scripts it contains,
/// and only the host knows how (in a browser, each script node is rebuilt
/// with identical text and substituted in place).
pub trait DomHost {
    /// URL of the page currently shown
    fn current_url(&self) -> Url;

    /// Replace the document title and the content region's inner markup,
    /// triggering any embedded side effects (inline script re-execution)
    fn apply_snapshot(&mut self, snapshot: &PageSnapshot);

    /// Push `url` onto session history without reloading
    fn push_history(&mut self, url: &Url);

    /// Replace the current history entry with `url`
    fn replace_history(&mut self, url: &Url);

    /// Reset the scroll position to the top
    fn scroll_to_top(&mut self);

    /// Give up on soft navigation: real, full browser navigation to `url`
    fn hard_navigate(&mut self, url: &Url);

    /// Candidate links inside the content region, with binding state
    fn content_links(&self) -> Vec<LinkHandle>;

    /// Attach the soft-navigation click handler to a link and mark it
    /// bound so it is never bound twice
    fn bind_link(&mut self, id: u64);

    // Theme hooks (toggle controls live inside the swapped region)

    /// Whether the document currently carries the dark-theme class
    fn is_dark_theme(&self) -> bool;

    /// Set or clear the dark-theme class
    fn set_dark_theme(&mut self, dark: bool);

    /// Update theme toggle affordances to reflect `dark`
    fn sync_theme_affordances(&mut self, dark: bool);
}
