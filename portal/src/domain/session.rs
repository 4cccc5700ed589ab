//! Session token ownership: in-memory value mirrored to durable storage.
//!
//! ## Invariants
//! - Outside a `set`/`clear` call the in-memory token equals the durable
//!   value under [`SESSION_TOKEN_KEY`].
//! - There is no expiry or refresh. A token is trusted until cleared.

use tracing::{info, warn};

use super::AccessToken;
use super::ports::{DurableStore, DurableStoreError};

/// Durable storage key holding the bearer token.
pub const SESSION_TOKEN_KEY: &str = "token";

/// Owner of the authentication token.
pub struct SessionStore<S> {
    store: S,
    token: Option<AccessToken>,
}

impl<S: DurableStore> SessionStore<S> {
    /// Wrap a durable store. Nothing is read until [`SessionStore::load`].
    pub fn new(store: S) -> Self {
        Self { store, token: None }
    }

    /// Read the mirrored token at startup.
    ///
    /// A blank stored value is treated as absent and removed so the mirror
    /// matches the in-memory state.
    pub fn load(&mut self) -> Result<Option<&AccessToken>, DurableStoreError> {
        let stored = self.store.read(SESSION_TOKEN_KEY)?;
        self.token = match stored {
            Some(raw) => match AccessToken::new(raw) {
                Ok(token) => Some(token),
                Err(err) => {
                    warn!(error = %err, "discarding malformed stored session token");
                    self.store.remove(SESSION_TOKEN_KEY)?;
                    None
                }
            },
            None => None,
        };
        Ok(self.token.as_ref())
    }

    /// Store a new token in both copies.
    ///
    /// The durable copy is written first; on failure neither copy changes.
    pub fn set(&mut self, token: AccessToken) -> Result<(), DurableStoreError> {
        self.store.write(SESSION_TOKEN_KEY, token.expose())?;
        self.token = Some(token);
        info!("session token stored");
        Ok(())
    }

    /// Remove the token from both copies.
    ///
    /// The in-memory token is dropped even when the durable removal fails;
    /// the storage error is returned so the caller can report it.
    pub fn clear(&mut self) -> Result<(), DurableStoreError> {
        self.token = None;
        let removed = self.store.remove(SESSION_TOKEN_KEY);
        match &removed {
            Ok(()) => info!("session token cleared"),
            Err(err) => warn!(error = %err, "session token cleared in memory only"),
        }
        removed
    }

    /// In-memory token snapshot.
    pub fn current(&self) -> Option<&AccessToken> {
        self.token.as_ref()
    }

    /// Whether a token is held.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Backing durable store.
    pub fn store(&self) -> &S {
        &self.store
    }
}
