use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::ActionError;
use crate::domain::validation::InvoiceForm;

// ── Request DTOs ─────────────────────────────────────────────────────────────

/// Invoice form as posted by the browser. `id` and `date` are ignored if sent.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct InvoiceFormRequest {
    #[serde(rename = "customerId")]
    pub customer_id: Option<String>,
    /// Decimal amount in major units, e.g. "45.00".
    pub amount: Option<String>,
    /// Either "pending" or "paid".
    pub status: Option<String>,
}

impl From<InvoiceFormRequest> for InvoiceForm {
    fn from(req: InvoiceFormRequest) -> Self {
        InvoiceForm {
            customer_id: req.customer_id,
            amount: req.amount,
            status: req.status,
        }
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct LoginFormRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    /// Local path to continue to after a successful sign-in.
    #[serde(rename = "redirectTo")]
    pub redirect_to: Option<String>,
}

// ── Response DTOs ────────────────────────────────────────────────────────────

/// What a form re-renders with after a failed action.
#[derive(Debug, Default, Serialize, ToSchema)]
pub struct FormState {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<BTreeMap<String, Vec<String>>>,
    pub message: Option<String>,
}

impl FormState {
    pub fn message(message: impl Into<String>) -> Self {
        FormState {
            errors: None,
            message: Some(message.into()),
        }
    }
}

impl From<&ActionError> for FormState {
    fn from(err: &ActionError) -> Self {
        FormState {
            errors: err.field_errors().map(|errors| {
                errors
                    .iter()
                    .map(|(field, messages)| (field.to_string(), messages.to_vec()))
                    .collect()
            }),
            message: Some(err.message().to_string()),
        }
    }
}
