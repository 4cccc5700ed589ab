//! View-facing state owned by the controller.
//!
//! Renderers read through the accessors; only the controller mutates.

use super::{MenuItem, Subject, ViewState};

/// Lookup result shown on the profile view.
///
/// Holding `info` and `error` in one value makes them mutually exclusive.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ProfilePanel {
    /// Nothing looked up yet.
    #[default]
    Empty,
    /// Looked-up subject.
    Info(Subject),
    /// Inline error message.
    Error(String),
}

/// Severity of a transient notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    /// The action succeeded.
    Success,
    /// The action failed.
    Error,
}

/// Blocking notification raised by login and password-change outcomes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    level: NoticeLevel,
    message: String,
}

impl Notice {
    /// Success notification.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    /// Error notification.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }

    /// Severity.
    pub fn level(&self) -> NoticeLevel {
        self.level
    }

    /// Text shown to the user.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }
}

/// Explicit state container replacing ambient reactive fields.
#[derive(Debug, Clone, Default)]
pub struct PortalState {
    view: ViewState,
    panel: ProfilePanel,
    login_id: String,
    menu: Vec<MenuItem>,
    notice: Option<Notice>,
}

impl PortalState {
    /// Active view.
    pub fn view(&self) -> ViewState {
        self.view
    }

    /// Looked-up subject, when the last lookup succeeded.
    pub fn info(&self) -> Option<&Subject> {
        match &self.panel {
            ProfilePanel::Info(subject) => Some(subject),
            _ => None,
        }
    }

    /// Inline error message, when the last lookup failed.
    pub fn error(&self) -> Option<&str> {
        match &self.panel {
            ProfilePanel::Error(message) => Some(message.as_str()),
            _ => None,
        }
    }

    /// Profile panel as a whole.
    pub fn panel(&self) -> &ProfilePanel {
        &self.panel
    }

    /// Value pre-filled into the login form's id field.
    pub fn login_id(&self) -> &str {
        self.login_id.as_str()
    }

    /// Dashboard menu in server order.
    pub fn menu(&self) -> &[MenuItem] {
        &self.menu
    }

    /// Pending notification.
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub(crate) fn set_view(&mut self, view: ViewState) {
        self.view = view;
    }

    pub(crate) fn show_info(&mut self, subject: Subject) {
        self.login_id = subject.id().as_ref().to_owned();
        self.panel = ProfilePanel::Info(subject);
    }

    pub(crate) fn show_error(&mut self, message: impl Into<String>) {
        self.panel = ProfilePanel::Error(message.into());
    }

    pub(crate) fn set_menu(&mut self, menu: Vec<MenuItem>) {
        self.menu = menu;
    }

    pub(crate) fn notify(&mut self, notice: Notice) {
        self.notice = Some(notice);
    }

    pub(crate) fn dismiss_notice(&mut self) {
        self.notice = None;
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::SubjectId;
    use serde_json::Map;

    fn subject() -> Subject {
        Subject::new(SubjectId::new("R7V5CT").expect("valid id"), Map::new())
    }

    #[test]
    fn info_and_error_are_exclusive() {
        let mut state = PortalState::default();
        state.show_info(subject());
        assert!(state.info().is_some());
        assert!(state.error().is_none());

        state.show_error("No matching document");
        assert!(state.info().is_none());
        assert_eq!(state.error(), Some("No matching document"));

        state.show_info(subject());
        assert!(state.error().is_none());
    }

    #[test]
    fn showing_info_prefills_login_id() {
        let mut state = PortalState::default();
        state.show_info(subject());
        assert_eq!(state.login_id(), "R7V5CT");
    }

    #[test]
    fn errors_keep_previous_login_id() {
        let mut state = PortalState::default();
        state.show_info(subject());
        state.show_error("offline");
        assert_eq!(state.login_id(), "R7V5CT");
    }
}
