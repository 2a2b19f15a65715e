//! Theme preference
//!
//! The theme toggle lives inside the swapped content region, so each
//! soft navigation must re-sync the toggle affordances against the
//! document class that survived the swap.

use everplay_core::KeyValueStore;
use tracing::debug;

use crate::host::DomHost;

/// Storage key for the persisted theme preference
pub const THEME_KEY: &str = "theme";

/// The two supported themes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// Persisted wire value
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse a persisted value; anything unrecognized is `None`
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }
}

/// Read the persisted preference, if any
pub fn load_preference(store: &dyn KeyValueStore) -> Option<Theme> {
    store.get(THEME_KEY).as_deref().and_then(Theme::parse)
}

/// Apply the persisted preference to the document at startup
///
/// No stored value means the document keeps whatever the markup shipped
/// with; the affordances are synced either way.
pub fn apply_preference(host: &mut dyn DomHost, store: &dyn KeyValueStore) {
    if let Some(theme) = load_preference(store) {
        host.set_dark_theme(theme == Theme::Dark);
    }
    reinit(host);
}

/// Re-sync toggle affordances with the document class
///
/// Called after every content swap: the document class is the source of
/// truth, the freshly swapped-in toggles are not.
pub fn reinit(host: &mut dyn DomHost) {
    let dark = host.is_dark_theme();
    host.sync_theme_affordances(dark);
}

/// Flip the theme, persist the choice, and sync affordances
pub fn toggle(host: &mut dyn DomHost, store: &mut dyn KeyValueStore) {
    let dark = !host.is_dark_theme();
    host.set_dark_theme(dark);
    let theme = if dark { Theme::Dark } else { Theme::Light };
    if let Err(e) = store.set(THEME_KEY, theme.as_str()) {
        debug!("Theme preference not persisted: {e}");
    }
    host.sync_theme_affordances(dark);
}
