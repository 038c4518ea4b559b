use thiserror::Error;

use crate::domain::validation::FieldErrors;

/// The invoice list view: both the cache key and the post-mutation target.
pub const INVOICES_PATH: &str = "/dashboard/invoices";
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Where to send the caller once an action has succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect(pub String);

impl Redirect {
    pub fn to(path: impl Into<String>) -> Self {
        Redirect(path.into())
    }

    pub fn path(&self) -> &str {
        &self.0
    }
}

/// Recoverable action failures, reported back to the form.
#[derive(Debug, Error)]
pub enum ActionError {
    #[error("{message}")]
    Invalid {
        errors: FieldErrors,
        message: &'static str,
    },
    #[error("{message}")]
    Database { message: &'static str },
}

impl ActionError {
    pub fn message(&self) -> &'static str {
        match self {
            ActionError::Invalid { message, .. } | ActionError::Database { message } => message,
        }
    }

    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            ActionError::Invalid { errors, .. } => Some(errors),
            ActionError::Database { .. } => None,
        }
    }
}
