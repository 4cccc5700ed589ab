//! Domain primitives, services, and ports.
//!
//! Purpose: model the portal's session and navigation behaviour without any
//! knowledge of HTTP, browser storage, or page location. Adapters in
//! [`crate::outbound`] plug into the traits in [`ports`].
//!
//! Public surface:
//! - [`SessionController`]: view machine and single initialisation entry.
//! - [`DataGateway`]: busy-bracketed access to [`ports::ProfileApi`].
//! - [`SessionStore`]: token ownership mirrored to [`ports::DurableStore`].
//! - [`EntryResolver`] and [`ActionDispatcher`]: pure interpreters of the
//!   entry URL and of menu actions.

pub mod auth;
pub mod controller;
pub mod dispatcher;
pub mod entry;
pub mod error;
pub mod gateway;
pub mod menu;
pub mod ports;
pub mod session;
pub mod state;
pub mod subject;
pub mod view;

pub use self::auth::{AccessToken, CredentialValidationError, LoginCredentials, PasswordChange};
pub use self::controller::{
    ControllerOptions, Initialization, LookupTicket, MISSING_SUBJECT_MESSAGE,
    PASSWORD_CHANGED_MESSAGE, SIGN_IN_REQUIRED_MESSAGE, SessionController,
};
pub use self::dispatcher::{ActionDispatcher, Directive};
pub use self::entry::{EntryResolver, SUBJECT_QUERY_KEY};
pub use self::error::{ErrorKind, GatewayError, RequestOutcome};
pub use self::gateway::{BusyFlag, DataGateway};
pub use self::menu::{LOGOUT_ACTION, MenuAction, MenuItem, NAVIGATE_ACTION};
pub use self::session::{SESSION_TOKEN_KEY, SessionStore};
pub use self::state::{Notice, NoticeLevel, PortalState, ProfilePanel};
pub use self::subject::{Subject, SubjectId, SubjectIdValidationError};
pub use self::view::ViewState;
