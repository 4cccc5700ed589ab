//! Server-supplied menu items and the actions they carry.
//!
//! Menu content is controlled by the server. The client recognises a fixed
//! set of action types and keeps anything else as
//! [`MenuAction::Unrecognized`] so newer servers never break older clients.

/// Wire value of the navigate action type.
pub const NAVIGATE_ACTION: &str = "NAVIGATE";
/// Wire value of the logout action type.
pub const LOGOUT_ACTION: &str = "LOGOUT";

/// Action carried by a menu item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuAction {
    /// Move to the view addressed by `destination`.
    Navigate {
        /// Route path such as `/change-password`.
        destination: Option<String>,
    },
    /// End the session.
    Logout,
    /// An action type this client does not know.
    Unrecognized {
        /// Raw action type as sent by the server.
        action_type: String,
    },
}

impl MenuAction {
    /// Interpret a wire `action_type` and optional `destination`.
    ///
    /// Matching is exact; the server sends upper-case action types.
    ///
    /// # Examples
    /// ```
    /// use portal::domain::MenuAction;
    ///
    /// assert_eq!(MenuAction::from_wire("LOGOUT", None), MenuAction::Logout);
    /// assert!(matches!(
    ///     MenuAction::from_wire("SHARE", None),
    ///     MenuAction::Unrecognized { .. }
    /// ));
    /// ```
    pub fn from_wire(action_type: &str, destination: Option<String>) -> Self {
        match action_type {
            NAVIGATE_ACTION => Self::Navigate { destination },
            LOGOUT_ACTION => Self::Logout,
            other => Self::Unrecognized {
                action_type: other.to_owned(),
            },
        }
    }
}

/// One entry of the dashboard menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    label: String,
    action: MenuAction,
}

impl MenuItem {
    /// Build a menu item.
    pub fn new(label: impl Into<String>, action: MenuAction) -> Self {
        Self {
            label: label.into(),
            action,
        }
    }

    /// Build a navigate item pointing at `destination`.
    pub fn navigate(label: impl Into<String>, destination: impl Into<String>) -> Self {
        Self::new(
            label,
            MenuAction::Navigate {
                destination: Some(destination.into()),
            },
        )
    }

    /// Build a logout item.
    pub fn logout(label: impl Into<String>) -> Self {
        Self::new(label, MenuAction::Logout)
    }

    /// Display label.
    pub fn label(&self) -> &str {
        self.label.as_str()
    }

    /// Action to dispatch when the item is chosen.
    pub fn action(&self) -> &MenuAction {
        &self.action
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("navigate")]
    #[case("Logout")]
    #[case("OPEN_URL")]
    #[case("")]
    fn unknown_or_miscased_types_are_unrecognized(#[case] raw: &str) {
        assert_eq!(
            MenuAction::from_wire(raw, None),
            MenuAction::Unrecognized {
                action_type: raw.to_owned()
            }
        );
    }

    #[test]
    fn navigate_keeps_destination() {
        let action = MenuAction::from_wire("NAVIGATE", Some("/change-password".to_owned()));
        assert_eq!(
            action,
            MenuAction::Navigate {
                destination: Some("/change-password".to_owned())
            }
        );
    }
}
