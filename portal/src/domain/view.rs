//! Named views and the session guard over them.

use std::fmt;

/// Screen currently displayed. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ViewState {
    /// Looked-up subject profile. Initial view.
    #[default]
    Profile,
    /// Login form.
    Login,
    /// Authenticated landing view with the server menu.
    Dashboard,
    /// Password change form.
    ChangePassword,
}

impl ViewState {
    /// Whether the view may only be shown while a token is present.
    pub fn requires_session(self) -> bool {
        matches!(self, Self::Dashboard | Self::ChangePassword)
    }

    /// Resolve the view actually shown when `self` is requested.
    ///
    /// Session-only views fall back to [`ViewState::Login`] when no token is
    /// held.
    ///
    /// # Examples
    /// ```
    /// use portal::domain::ViewState;
    ///
    /// assert_eq!(ViewState::Dashboard.guarded(false), ViewState::Login);
    /// assert_eq!(ViewState::Dashboard.guarded(true), ViewState::Dashboard);
    /// assert_eq!(ViewState::Profile.guarded(false), ViewState::Profile);
    /// ```
    pub fn guarded(self, authenticated: bool) -> Self {
        if self.requires_session() && !authenticated {
            Self::Login
        } else {
            self
        }
    }

    /// Route path the view answers to.
    pub fn route(self) -> &'static str {
        match self {
            Self::Profile => "/profile",
            Self::Login => "/login",
            Self::Dashboard => "/dashboard",
            Self::ChangePassword => "/change-password",
        }
    }

    /// Look up a view by route path.
    pub fn from_route(route: &str) -> Option<Self> {
        [
            Self::Profile,
            Self::Login,
            Self::Dashboard,
            Self::ChangePassword,
        ]
        .into_iter()
        .find(|view| view.route() == route)
    }
}

impl fmt::Display for ViewState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Profile => "profile",
            Self::Login => "login",
            Self::Dashboard => "dashboard",
            Self::ChangePassword => "changePassword",
        };
        f.write_str(name)
    }
}
