//! Authentication primitives: credentials, access tokens, password changes.
//!
//! Secrets are held in [`Zeroizing`] buffers and never appear in `Debug`
//! output, so they cannot leak through `tracing` fields by accident.

use std::fmt;

use zeroize::Zeroizing;

/// Error returned when credential or token values are invalid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CredentialValidationError {
    /// Username was missing or blank once trimmed.
    #[error("username must not be empty")]
    EmptyUsername,
    /// Password was blank.
    #[error("password must not be empty")]
    EmptyPassword,
    /// Access token was blank.
    #[error("access token must not be empty")]
    EmptyToken,
}

/// Validated login credentials.
///
/// ## Invariants
/// - `username` is trimmed and non-empty.
/// - `password` is non-empty and keeps caller-provided whitespace.
///
/// # Examples
/// ```
/// use portal::domain::LoginCredentials;
///
/// let creds = LoginCredentials::try_from_parts(" R7V5CT ", "secret").unwrap();
/// assert_eq!(creds.username(), "R7V5CT");
/// assert_eq!(creds.password(), "secret");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    username: String,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Construct credentials from raw form inputs.
    pub fn try_from_parts(
        username: &str,
        password: &str,
    ) -> Result<Self, CredentialValidationError> {
        let normalized = username.trim();
        if normalized.is_empty() {
            return Err(CredentialValidationError::EmptyUsername);
        }
        if password.is_empty() {
            return Err(CredentialValidationError::EmptyPassword);
        }
        Ok(Self {
            username: normalized.to_owned(),
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Username submitted to the login endpoint.
    pub fn username(&self) -> &str {
        self.username.as_str()
    }

    /// Password submitted to the login endpoint.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

impl fmt::Debug for LoginCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginCredentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Bearer token issued by the login endpoint.
///
/// The portal trusts a token until it is explicitly cleared; the server is
/// the only authority on validity.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(Zeroizing<String>);

impl AccessToken {
    /// Wrap a raw token value.
    ///
    /// # Examples
    /// ```
    /// use portal::domain::AccessToken;
    ///
    /// let token = AccessToken::new("abc.def").unwrap();
    /// assert_eq!(token.expose(), "abc.def");
    /// assert_eq!(format!("{token:?}"), "AccessToken(<redacted>)");
    /// ```
    pub fn new(raw: impl Into<String>) -> Result<Self, CredentialValidationError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(CredentialValidationError::EmptyToken);
        }
        Ok(Self(Zeroizing::new(raw)))
    }

    /// Raw token value for the `Authorization` header and durable storage.
    pub fn expose(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(<redacted>)")
    }
}

/// Old and new password pair submitted to the change-password endpoint.
///
/// No client-side rules are applied; the server validates the new password.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordChange {
    old_password: Zeroizing<String>,
    new_password: Zeroizing<String>,
}

impl PasswordChange {
    /// Pair the current and replacement passwords.
    pub fn new(old_password: &str, new_password: &str) -> Self {
        Self {
            old_password: Zeroizing::new(old_password.to_owned()),
            new_password: Zeroizing::new(new_password.to_owned()),
        }
    }

    /// Current password.
    pub fn old_password(&self) -> &str {
        self.old_password.as_str()
    }

    /// Replacement password.
    pub fn new_password(&self) -> &str {
        self.new_password.as_str()
    }
}

impl fmt::Debug for PasswordChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordChange(<redacted>)")
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", "pw", CredentialValidationError::EmptyUsername)]
    #[case("   ", "pw", CredentialValidationError::EmptyUsername)]
    #[case("R7V5CT", "", CredentialValidationError::EmptyPassword)]
    fn invalid_credentials(
        #[case] username: &str,
        #[case] password: &str,
        #[case] expected: CredentialValidationError,
    ) {
        let err = LoginCredentials::try_from_parts(username, password)
            .expect_err("invalid inputs must fail");
        assert_eq!(err, expected);
    }

    #[test]
    fn password_whitespace_is_preserved() {
        let creds = LoginCredentials::try_from_parts("bad", " wrong ").expect("valid inputs");
        assert_eq!(creds.password(), " wrong ");
    }

    #[rstest]
    #[case("")]
    #[case("  ")]
    fn blank_tokens_are_rejected(#[case] raw: &str) {
        assert_eq!(
            AccessToken::new(raw),
            Err(CredentialValidationError::EmptyToken)
        );
    }

    #[test]
    fn debug_output_redacts_secrets() {
        let creds = LoginCredentials::try_from_parts("bad", "wrong").expect("valid inputs");
        let change = PasswordChange::new("old-secret", "new-secret");

        let rendered = format!("{creds:?} {change:?}");
        assert!(!rendered.contains("wrong"));
        assert!(!rendered.contains("secret"));
        assert!(rendered.contains("bad"));
    }
}
