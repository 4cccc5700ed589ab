//! Session and navigation controller.
//!
//! Owns the [`PortalState`] container, the [`SessionStore`], and the
//! [`DataGateway`], and drives the view machine from gateway outcomes and
//! dispatched menu actions. Application logic is single-threaded: methods
//! take `&mut self` and suspend only while a gateway call is in flight.
//!
//! Transitions:
//! - lookup failure, or no id at startup: `profile` with an inline error;
//! - login success: `dashboard`, then an immediate menu fetch;
//! - `NAVIGATE` items: the addressed view, behind the session guard;
//! - `LOGOUT` items: clear the session, then `profile`;
//! - password change success: `dashboard`;
//! - any other failure keeps the current view and raises a notice.

use std::sync::Arc;

use tracing::{debug, info, warn};

use super::ports::{DurableStore, EntryLocation, ProfileApi};
use super::{
    ActionDispatcher, DataGateway, Directive, EntryResolver, LoginCredentials, MenuItem, Notice,
    PasswordChange, PortalState, RequestOutcome, SessionStore, Subject, SubjectId, ViewState,
};

/// Inline error shown when the entry URL carries no subject id.
pub const MISSING_SUBJECT_MESSAGE: &str =
    "No ID provided in the URL. Please use a format like /v=R7V5CT";
/// Notice raised after a successful password change.
pub const PASSWORD_CHANGED_MESSAGE: &str = "Password changed successfully";
/// Notice raised when a session-only action runs without a token.
pub const SIGN_IN_REQUIRED_MESSAGE: &str = "Please log in to continue";

/// Behaviour toggles for the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerOptions {
    /// Strip query and fragment from the visible URL once the id is read.
    pub clean_entry_url: bool,
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self {
            clean_entry_url: true,
        }
    }
}

/// Completion signal of [`SessionController::initialize`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Initialization {
    /// An id was found and looked up.
    Resolved(SubjectId),
    /// The entry URL carried no id.
    MissingSubject,
    /// `initialize` already ran; nothing was done.
    AlreadyInitialized,
}

/// Handle for one issued lookup.
///
/// Completing a ticket whose generation is no longer the latest discards the
/// response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupTicket {
    generation: u64,
    id: SubjectId,
}

impl LookupTicket {
    /// Monotonic generation assigned when the lookup was issued.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Subject the lookup was issued for.
    pub fn id(&self) -> &SubjectId {
        &self.id
    }
}

/// Finite-state controller over the portal views.
pub struct SessionController<A, S, L> {
    gateway: DataGateway<A>,
    session: SessionStore<S>,
    location: L,
    options: ControllerOptions,
    state: PortalState,
    lookup_generation: u64,
    initialized: bool,
}

impl<A, S, L> SessionController<A, S, L>
where
    A: ProfileApi,
    S: DurableStore,
    L: EntryLocation,
{
    /// Wire the controller to its ports. Call [`Self::initialize`] next.
    pub fn new(api: Arc<A>, store: S, location: L, options: ControllerOptions) -> Self {
        Self {
            gateway: DataGateway::new(api),
            session: SessionStore::new(store),
            location,
            options,
            state: PortalState::default(),
            lookup_generation: 0,
            initialized: false,
        }
    }

    /// Single startup entry point.
    ///
    /// Loads the stored session, resolves the subject id from the entry URL,
    /// optionally cleans the visible URL, and performs the first lookup.
    pub async fn initialize(&mut self) -> Initialization {
        if self.initialized {
            return Initialization::AlreadyInitialized;
        }
        self.initialized = true;

        match self.session.load() {
            Ok(Some(_)) => info!("restored stored session"),
            Ok(None) => debug!("no stored session"),
            Err(err) => warn!(error = %err, "could not read stored session; starting signed out"),
        }

        let entry = self.location.current();
        let Some(id) = EntryResolver::resolve(&entry) else {
            debug!(entry = %entry, "entry url carries no subject id");
            self.state.show_error(MISSING_SUBJECT_MESSAGE);
            self.state.set_view(ViewState::Profile);
            return Initialization::MissingSubject;
        };

        if self.options.clean_entry_url {
            self.location.replace(EntryResolver::cleaned(&entry));
        }
        self.lookup(id.clone()).await;
        Initialization::Resolved(id)
    }

    /// Issue a lookup and return its ticket.
    pub fn begin_lookup(&mut self, id: SubjectId) -> LookupTicket {
        self.lookup_generation += 1;
        LookupTicket {
            generation: self.lookup_generation,
            id,
        }
    }

    /// Apply a settled lookup. Returns `false` when the ticket was stale.
    pub fn complete_lookup(
        &mut self,
        ticket: LookupTicket,
        outcome: RequestOutcome<Subject>,
    ) -> bool {
        if ticket.generation != self.lookup_generation {
            warn!(
                subject = %ticket.id,
                generation = ticket.generation,
                latest = self.lookup_generation,
                "discarding stale lookup response"
            );
            return false;
        }
        match outcome {
            Ok(subject) => self.state.show_info(subject),
            Err(err) => {
                self.state.show_error(err.message());
                self.state.set_view(ViewState::Profile);
            }
        }
        true
    }

    /// Look up `id` and apply the result.
    pub async fn lookup(&mut self, id: SubjectId) -> bool {
        let ticket = self.begin_lookup(id);
        let outcome = self.gateway.lookup(ticket.id()).await;
        self.complete_lookup(ticket, outcome)
    }

    /// User-initiated navigation to the login form.
    pub fn show_login(&mut self) {
        self.state.dismiss_notice();
        self.navigate(ViewState::Login);
    }

    /// User-initiated navigation back to the profile.
    pub fn show_profile(&mut self) {
        self.navigate(ViewState::Profile);
    }

    /// Open the dashboard and refresh its menu.
    ///
    /// Without a session this lands on the login form instead.
    pub async fn show_dashboard(&mut self) {
        if self.navigate(ViewState::Dashboard) == ViewState::Dashboard {
            self.fetch_menu().await;
        }
    }

    /// Move to `target`, applying the session guard. Returns the view shown.
    pub fn navigate(&mut self, target: ViewState) -> ViewState {
        let shown = target.guarded(self.session.is_authenticated());
        if shown != target {
            debug!(requested = %target, shown = %shown, "session required; showing login");
        }
        self.state.set_view(shown);
        shown
    }

    /// Submit the login form.
    ///
    /// On success the token is stored, the dashboard is shown, and the menu
    /// is fetched. On failure the view stays put and a notice names the
    /// reason.
    pub async fn login(&mut self, username: &str, password: &str) {
        let credentials = match LoginCredentials::try_from_parts(username, password) {
            Ok(credentials) => credentials,
            Err(err) => {
                self.state.notify(Notice::error(err.to_string()));
                return;
            }
        };

        let token = match self.gateway.login(&credentials).await {
            Ok(token) => token,
            Err(err) => {
                self.state.notify(Notice::error(err.message()));
                return;
            }
        };

        if let Err(err) = self.session.set(token) {
            self.state
                .notify(Notice::error(format!("Could not save the session: {err}")));
            return;
        }
        info!(username = credentials.username(), "signed in");
        self.state.dismiss_notice();
        self.navigate(ViewState::Dashboard);
        self.fetch_menu().await;
    }

    /// Refresh the menu for the current session.
    ///
    /// Failures degrade to an empty menu and are not surfaced to the view.
    pub async fn fetch_menu(&mut self) {
        let Some(token) = self.session.current().cloned() else {
            self.state.set_menu(Vec::new());
            return;
        };
        let menu = self.gateway.fetch_menu(&token).await.unwrap_or_default();
        self.state.set_menu(menu);
    }

    /// Act on a chosen menu item. Returns the directive that was applied.
    pub fn dispatch(&mut self, item: &MenuItem) -> Directive {
        let directive = ActionDispatcher::resolve(item.action());
        match directive {
            Directive::Show(view) => {
                self.navigate(view);
            }
            Directive::EndSession => self.logout(),
            Directive::Ignore => {
                debug!(label = item.label(), action = ?item.action(), "ignoring menu item");
            }
        }
        directive
    }

    /// End the session and return to the profile, whatever the current view.
    pub fn logout(&mut self) {
        if let Err(err) = self.session.clear() {
            warn!(error = %err, "stored session could not be removed");
        }
        self.state.set_menu(Vec::new());
        self.state.dismiss_notice();
        self.state.set_view(ViewState::Profile);
        info!("signed out");
    }

    /// Submit the password change form.
    pub async fn change_password(&mut self, old_password: &str, new_password: &str) {
        let Some(token) = self.session.current().cloned() else {
            self.state.notify(Notice::error(SIGN_IN_REQUIRED_MESSAGE));
            self.navigate(ViewState::Login);
            return;
        };

        let change = PasswordChange::new(old_password, new_password);
        match self.gateway.change_password(&token, &change).await {
            Ok(()) => {
                self.state.notify(Notice::success(PASSWORD_CHANGED_MESSAGE));
                self.navigate(ViewState::Dashboard);
            }
            Err(err) => self.state.notify(Notice::error(err.message())),
        }
    }

    /// Acknowledge the pending notice.
    pub fn dismiss_notice(&mut self) {
        self.state.dismiss_notice();
    }

    /// View-facing state.
    pub fn state(&self) -> &PortalState {
        &self.state
    }

    /// Whether a gateway call is outstanding.
    pub fn loading(&self) -> bool {
        self.gateway.is_busy()
    }

    /// Session store, for token snapshots.
    pub fn session(&self) -> &SessionStore<S> {
        &self.session
    }

    /// Gateway shared with this controller.
    pub fn gateway(&self) -> &DataGateway<A> {
        &self.gateway
    }

    /// Location port.
    pub fn location(&self) -> &L {
        &self.location
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod tests;
