use std::fmt;

use thiserror::Error;
use uuid::Uuid;

/// Credentials as posted by the login form.
#[derive(Clone, Default)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

/// Rejection kinds reported by an identity provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthErrorKind {
    /// Unknown user, wrong password or malformed credentials.
    CredentialsSignin,
    /// The provider failed while checking the credentials.
    CallbackRouteError,
    /// The provider is misconfigured, e.g. an unreadable stored hash.
    Configuration,
}

impl AuthErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            AuthErrorKind::CredentialsSignin => "CredentialsSignin",
            AuthErrorKind::CallbackRouteError => "CallbackRouteError",
            AuthErrorKind::Configuration => "Configuration",
        }
    }
}

impl fmt::Display for AuthErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum SignInError {
    /// A rejection that originates from the provider itself.
    #[error("authentication rejected: {0}")]
    Rejected(AuthErrorKind),
    /// Anything else, e.g. the store being unreachable.
    #[error("sign-in failed: {0}")]
    Fatal(String),
}
