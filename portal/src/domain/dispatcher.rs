//! Mapping from menu actions to controller directives.
//!
//! The match over [`MenuAction`] is exhaustive, so a new action kind does not
//! compile until it is given a directive here.

use super::{MenuAction, ViewState};

/// What the controller should do for a dispatched menu item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    /// Show the given view, subject to the session guard.
    Show(ViewState),
    /// Clear the session and return to the profile view.
    EndSession,
    /// Leave all state untouched.
    Ignore,
}

/// Pure interpreter of menu actions.
#[derive(Debug, Default, Clone, Copy)]
pub struct ActionDispatcher;

impl ActionDispatcher {
    /// Resolve the directive for `action`.
    ///
    /// Unknown action types and unknown destinations resolve to
    /// [`Directive::Ignore`].
    ///
    /// # Examples
    /// ```
    /// use portal::domain::{ActionDispatcher, Directive, MenuAction, ViewState};
    ///
    /// let action = MenuAction::from_wire("NAVIGATE", Some("/change-password".into()));
    /// assert_eq!(
    ///     ActionDispatcher::resolve(&action),
    ///     Directive::Show(ViewState::ChangePassword)
    /// );
    /// ```
    pub fn resolve(action: &MenuAction) -> Directive {
        match action {
            MenuAction::Navigate { destination } => destination
                .as_deref()
                .and_then(ViewState::from_route)
                .map_or(Directive::Ignore, Directive::Show),
            MenuAction::Logout => Directive::EndSession,
            MenuAction::Unrecognized { .. } => Directive::Ignore,
        }
    }
}
