//! Port over the page location the portal was opened with.
//!
//! Mirrors `window.location` for reads and `history.replaceState` for
//! rewriting the visible URL without a reload.

use url::Url;

/// Access to the entry URL.
#[cfg_attr(test, mockall::automock)]
pub trait EntryLocation: Send + Sync {
    /// Current page URL.
    fn current(&self) -> Url;

    /// Replace the visible URL without reloading or adding a history entry.
    fn replace(&self, url: Url);
}
