//! Fixed entry location for hosts without a browser window.

use std::sync::{Mutex, PoisonError};

use url::Url;

use crate::domain::ports::EntryLocation;

/// Location that starts at a given URL and records replacements.
#[derive(Debug)]
pub struct FixedLocation {
    current: Mutex<Url>,
    replacements: Mutex<Vec<Url>>,
}

impl FixedLocation {
    /// Start at `url`.
    pub fn new(url: Url) -> Self {
        Self {
            current: Mutex::new(url),
            replacements: Mutex::new(Vec::new()),
        }
    }

    /// URLs passed to [`EntryLocation::replace`], oldest first.
    pub fn replacements(&self) -> Vec<Url> {
        self.replacements
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl EntryLocation for FixedLocation {
    fn current(&self) -> Url {
        self.current
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn replace(&self, url: Url) {
        *self.current.lock().unwrap_or_else(PoisonError::into_inner) = url.clone();
        self.replacements
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(url);
    }
}
