//! Link interception policy
//!
//! A link is taken over by soft navigation only when every check passes;
//! anything else behaves as a native link. The checks mirror what the
//! browser itself would do with the click: same host, no explicit target,
//! not a `javascript:` pseudo-link, same protocol.

use url::Url;

/// A candidate link the host found in the content region
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkHandle {
    /// Host-assigned identifier, stable for the life of the element
    pub id: u64,

    /// Raw href attribute value (may be relative)
    pub href: String,

    /// Whether the element carries an explicit `target` attribute
    pub has_target_attr: bool,

    /// Whether the soft-navigation handler is already attached
    pub bound: bool,
}

/// Decide whether a link click should become a soft navigation
///
/// All of these must hold: resolved host matches the current host, no
/// explicit target attribute, not a `javascript:` scheme, and the
/// resolved protocol matches the current page's protocol. An href that
/// does not resolve against the current URL is left native.
pub fn should_intercept(link: &LinkHandle, current: &Url) -> bool {
    if link.has_target_attr {
        return false;
    }
    let href = link.href.trim();
    if href.is_empty() {
        return false;
    }
    if href.to_ascii_lowercase().starts_with("javascript:") {
        return false;
    }
    let Ok(resolved) = current.join(href) else {
        return false;
    };
    resolved.host_str() == current.host_str() && resolved.scheme() == current.scheme()
}
