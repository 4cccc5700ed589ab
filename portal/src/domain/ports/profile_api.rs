//! Driven port for the remote profile API.
//!
//! Adapters own transport details (paths, encodings, headers) and must settle
//! every call as a [`RequestOutcome`]: nothing is raised past this boundary.
//! Each method performs exactly one request and never retries.

use async_trait::async_trait;

use crate::domain::{
    AccessToken, LoginCredentials, MenuItem, PasswordChange, RequestOutcome, Subject, SubjectId,
};

/// Remote operations the portal depends on.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProfileApi: Send + Sync {
    /// Fetch the subject record for `id`.
    ///
    /// Error fields in the payload (`error` or `detail`) settle as
    /// [`crate::domain::GatewayError::Api`].
    async fn lookup(&self, id: &SubjectId) -> RequestOutcome<Subject>;

    /// Exchange credentials for a bearer token.
    async fn login(&self, credentials: &LoginCredentials) -> RequestOutcome<AccessToken>;

    /// Fetch the ordered menu for the authenticated user.
    async fn fetch_menu(&self, token: &AccessToken) -> RequestOutcome<Vec<MenuItem>>;

    /// Change the authenticated user's password.
    async fn change_password(
        &self,
        token: &AccessToken,
        change: &PasswordChange,
    ) -> RequestOutcome<()>;
}
