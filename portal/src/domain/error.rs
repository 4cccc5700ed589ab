//! Request failure taxonomy shared by the gateway and its adapters.
//!
//! Every remote operation settles as a [`RequestOutcome`]. Failures are
//! normalised into one of four kinds so the controller can decide where to
//! surface them without inspecting transport details.

use serde::Serialize;

use super::ports::define_port_error;

/// Stable category of a failed gateway call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// The transport never produced a response.
    Network,
    /// The lookup or menu endpoint reported a logical error.
    Api,
    /// The login endpoint rejected the credentials.
    Auth,
    /// The password change endpoint rejected the request.
    Validation,
}

define_port_error! {
    /// Normalised failure of a gateway call.
    ///
    /// The message is user-presentable: it carries the server-provided detail
    /// when one was available and a generic sentence otherwise.
    pub enum GatewayError {
        /// No response was received (DNS, TLS, connection reset, timeout).
        Network { message: String } => "{message}",
        /// A response arrived but reported an error or could not be decoded.
        Api { message: String } => "{message}",
        /// Login was rejected.
        Auth { message: String } => "{message}",
        /// Password change was rejected.
        Validation { message: String } => "{message}",
    }
}

impl GatewayError {
    /// Category of this failure.
    ///
    /// # Examples
    /// ```
    /// use portal::domain::{ErrorKind, GatewayError};
    ///
    /// let err = GatewayError::auth("Invalid credentials");
    /// assert_eq!(err.kind(), ErrorKind::Auth);
    /// assert_eq!(err.message(), "Invalid credentials");
    /// ```
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Network { .. } => ErrorKind::Network,
            Self::Api { .. } => ErrorKind::Api,
            Self::Auth { .. } => ErrorKind::Auth,
            Self::Validation { .. } => ErrorKind::Validation,
        }
    }

    /// Message suitable for display.
    pub fn message(&self) -> &str {
        match self {
            Self::Network { message }
            | Self::Api { message }
            | Self::Auth { message }
            | Self::Validation { message } => message.as_str(),
        }
    }
}

/// Settled result of a single gateway call: success payload or failure.
pub type RequestOutcome<T> = Result<T, GatewayError>;
