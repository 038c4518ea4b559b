use std::sync::Arc;

use crate::domain::auth::{AuthErrorKind, AuthenticatedUser, Credentials, SignInError};
use crate::domain::errors::DomainError;
use crate::domain::ports::CredentialsProvider;

use super::action::{Redirect, DASHBOARD_PATH};

const INVALID_CREDENTIALS: &str = "Invalid credentials.";
const SOMETHING_WENT_WRONG: &str = "Something went wrong.";

#[derive(Debug)]
pub enum SignInOutcome {
    /// The provider accepted the credentials; continue to `redirect`.
    Accepted {
        user: AuthenticatedUser,
        redirect: Redirect,
    },
    /// The provider rejected the credentials with a user-facing message.
    Rejected(&'static str),
}

#[derive(Clone)]
pub struct AuthService {
    provider: Arc<dyn CredentialsProvider>,
}

impl AuthService {
    pub fn new(provider: Arc<dyn CredentialsProvider>) -> Self {
        Self { provider }
    }

    /// Hand the credentials to the provider and map its rejections to
    /// messages. Failures that do not come from the provider are returned as
    /// errors for the caller to treat as fatal.
    pub fn authenticate(
        &self,
        credentials: &Credentials,
        redirect_to: Option<&str>,
    ) -> Result<SignInOutcome, DomainError> {
        match self.provider.authorize(credentials) {
            Ok(user) => {
                log::info!("User {} signed in", user.id);
                Ok(SignInOutcome::Accepted {
                    user,
                    redirect: Redirect::to(local_path_or_dashboard(redirect_to)),
                })
            }
            Err(SignInError::Rejected(kind)) => {
                log::warn!("Sign-in rejected for {}: {}", credentials.email, kind);
                Ok(SignInOutcome::Rejected(rejection_message(kind)))
            }
            Err(SignInError::Fatal(reason)) => Err(DomainError::Internal(reason)),
        }
    }
}

pub fn rejection_message(kind: AuthErrorKind) -> &'static str {
    match kind {
        AuthErrorKind::CredentialsSignin => INVALID_CREDENTIALS,
        _ => SOMETHING_WENT_WRONG,
    }
}

/// Only same-site absolute paths are followed. Protocol-relative targets
/// (`//host`, and `/\host` which browsers read the same way) and targets with
/// control characters or whitespace fall back to the dashboard.
fn local_path_or_dashboard(target: Option<&str>) -> &str {
    match target {
        Some(path) if is_local_path(path) => path,
        _ => DASHBOARD_PATH,
    }
}

fn is_local_path(path: &str) -> bool {
    let mut chars = path.chars();
    chars.next() == Some('/')
        && !matches!(chars.next(), Some('/') | Some('\\'))
        && !path.chars().any(|c| c.is_control() || c.is_whitespace())
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;
    use crate::domain::ports::MockCredentialsProvider;

    fn credentials() -> Credentials {
        Credentials {
            email: "user@nextmail.com".to_string(),
            password: "123456".to_string(),
        }
    }

    fn service_rejecting(kind: AuthErrorKind) -> AuthService {
        let mut provider = MockCredentialsProvider::new();
        provider
            .expect_authorize()
            .times(1)
            .returning(move |_| Err(SignInError::Rejected(kind)));
        AuthService::new(Arc::new(provider))
    }

    #[test]
    fn credentials_signin_maps_to_invalid_credentials() {
        let outcome = service_rejecting(AuthErrorKind::CredentialsSignin)
            .authenticate(&credentials(), None)
            .unwrap();
        assert!(matches!(outcome, SignInOutcome::Rejected("Invalid credentials.")));
    }

    #[test]
    fn other_provider_kinds_map_to_generic_message() {
        for kind in [AuthErrorKind::CallbackRouteError, AuthErrorKind::Configuration] {
            let outcome = service_rejecting(kind)
                .authenticate(&credentials(), None)
                .unwrap();
            assert!(
                matches!(outcome, SignInOutcome::Rejected("Something went wrong.")),
                "kind {} should map to the generic message",
                kind
            );
        }
    }

    #[test]
    fn fatal_failure_propagates() {
        let mut provider = MockCredentialsProvider::new();
        provider
            .expect_authorize()
            .returning(|_| Err(SignInError::Fatal("pool timed out".to_string())));

        let err = AuthService::new(Arc::new(provider))
            .authenticate(&credentials(), None)
            .unwrap_err();

        assert!(matches!(err, DomainError::Internal(msg) if msg == "pool timed out"));
    }

    #[test]
    fn accepted_sign_in_redirects_to_dashboard() {
        let user = AuthenticatedUser {
            id: Uuid::new_v4(),
            name: "User".to_string(),
            email: "user@nextmail.com".to_string(),
        };
        let expected = user.clone();
        let mut provider = MockCredentialsProvider::new();
        provider
            .expect_authorize()
            .withf(|c| c.email == "user@nextmail.com" && c.password == "123456")
            .returning(move |_| Ok(user.clone()));

        let outcome = AuthService::new(Arc::new(provider))
            .authenticate(&credentials(), None)
            .unwrap();

        match outcome {
            SignInOutcome::Accepted { user, redirect } => {
                assert_eq!(user, expected);
                assert_eq!(redirect.path(), "/dashboard");
            }
            other => panic!("expected acceptance, got {:?}", other),
        }
    }

    #[test]
    fn redirect_target_must_be_a_local_path() {
        assert_eq!(local_path_or_dashboard(Some("/dashboard/invoices")), "/dashboard/invoices");
        assert_eq!(local_path_or_dashboard(Some("https://evil.example")), "/dashboard");
        assert_eq!(local_path_or_dashboard(Some("//evil.example")), "/dashboard");
        assert_eq!(local_path_or_dashboard(Some("/\\evil.example")), "/dashboard");
        assert_eq!(local_path_or_dashboard(Some("dashboard")), "/dashboard");
        assert_eq!(local_path_or_dashboard(Some("")), "/dashboard");
        assert_eq!(local_path_or_dashboard(None), "/dashboard");
    }

    #[test]
    fn redirect_target_with_control_chars_or_spaces_falls_back() {
        for target in ["/dash\nboard", "/a b", "/tab\there", "/\r\nSet-Cookie:x=1", "/x\u{7f}"] {
            assert_eq!(
                local_path_or_dashboard(Some(target)),
                "/dashboard",
                "{:?} should not be followed",
                target
            );
        }
        assert_eq!(local_path_or_dashboard(Some("/")), "/");
        assert_eq!(
            local_path_or_dashboard(Some("/dashboard/invoices?page=2")),
            "/dashboard/invoices?page=2"
        );
    }
}
