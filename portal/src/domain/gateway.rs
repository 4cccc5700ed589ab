//! Request pipeline in front of the [`ProfileApi`] port.
//!
//! Every operation raises the shared busy flag, performs exactly one call,
//! and lowers the flag when the call settles. Lowering happens in a drop
//! guard, so success, reported errors, transport failures, and a dropped
//! future all clear it.
//!
//! The flag is shared by all call sites. Two overlapping calls race on it:
//! whichever settles first lowers it while the other is still in flight, so a
//! busy indicator may flicker. This is accepted behaviour.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{debug, warn};

use super::ports::ProfileApi;
use super::{
    AccessToken, LoginCredentials, MenuItem, PasswordChange, RequestOutcome, Subject, SubjectId,
};

/// Shared busy/idle indicator.
#[derive(Debug, Clone, Default)]
pub struct BusyFlag(Arc<AtomicBool>);

impl BusyFlag {
    /// Whether a call is outstanding.
    pub fn is_busy(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    fn enter(&self) -> BusyGuard {
        self.0.store(true, Ordering::SeqCst);
        BusyGuard(Arc::clone(&self.0))
    }
}

struct BusyGuard(Arc<AtomicBool>);

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// Busy-bracketed, logged access to the remote API.
pub struct DataGateway<A> {
    api: Arc<A>,
    busy: BusyFlag,
}

impl<A> Clone for DataGateway<A> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
            busy: self.busy.clone(),
        }
    }
}

impl<A: ProfileApi> DataGateway<A> {
    /// Wrap an API adapter.
    pub fn new(api: Arc<A>) -> Self {
        Self {
            api,
            busy: BusyFlag::default(),
        }
    }

    /// Whether a call is outstanding.
    pub fn is_busy(&self) -> bool {
        self.busy.is_busy()
    }

    /// Busy flag handle, for observers such as a spinner.
    pub fn busy_flag(&self) -> BusyFlag {
        self.busy.clone()
    }

    /// Look up a subject by id.
    pub async fn lookup(&self, id: &SubjectId) -> RequestOutcome<Subject> {
        let _busy = self.busy.enter();
        debug!(operation = "lookup", subject = %id, "issuing request");
        let outcome = self.api.lookup(id).await;
        if let Err(err) = &outcome {
            warn!(operation = "lookup", subject = %id, kind = ?err.kind(), error = %err, "request failed");
        }
        outcome
    }

    /// Exchange credentials for a token.
    pub async fn login(&self, credentials: &LoginCredentials) -> RequestOutcome<AccessToken> {
        let _busy = self.busy.enter();
        debug!(operation = "login", username = credentials.username(), "issuing request");
        let outcome = self.api.login(credentials).await;
        if let Err(err) = &outcome {
            warn!(operation = "login", kind = ?err.kind(), error = %err, "request failed");
        }
        outcome
    }

    /// Fetch the menu for the session.
    ///
    /// Failures are logged here; callers degrade to an empty menu.
    pub async fn fetch_menu(&self, token: &AccessToken) -> RequestOutcome<Vec<MenuItem>> {
        let _busy = self.busy.enter();
        debug!(operation = "fetch_menu", "issuing request");
        let outcome = self.api.fetch_menu(token).await;
        if let Err(err) = &outcome {
            warn!(
                operation = "fetch_menu",
                kind = ?err.kind(),
                error = %err,
                "menu unavailable; continuing with an empty menu"
            );
        }
        outcome
    }

    /// Change the session user's password.
    pub async fn change_password(
        &self,
        token: &AccessToken,
        change: &PasswordChange,
    ) -> RequestOutcome<()> {
        let _busy = self.busy.enter();
        debug!(operation = "change_password", "issuing request");
        let outcome = self.api.change_password(token, change).await;
        if let Err(err) = &outcome {
            warn!(operation = "change_password", kind = ?err.kind(), error = %err, "request failed");
        }
        outcome
    }
}
