//! Validation of submitted invoice forms.
//!
//! The same schema backs both the create and the update path: `id` and `date`
//! are server-owned and never read from the form.

use std::collections::BTreeMap;
use std::str::FromStr;

use bigdecimal::num_bigint::Sign;
use bigdecimal::BigDecimal;

use super::invoice::{amount_to_cents, InvoiceStatus};

pub const CUSTOMER_ID_FIELD: &str = "customerId";
pub const AMOUNT_FIELD: &str = "amount";
pub const STATUS_FIELD: &str = "status";

const CUSTOMER_REQUIRED: &str = "Please select a customer.";
const CUSTOMER_TOO_LONG: &str = "Customer ID must be at most 255 characters.";
const AMOUNT_INVALID: &str = "Please enter a valid amount.";
const AMOUNT_NEGATIVE: &str = "Please enter an amount greater than or equal to $0.";
const AMOUNT_TOO_LARGE: &str = "Amount is too large.";
const STATUS_INVALID: &str = "Please select an invoice status.";

/// Exponents below this can never fit the cents column; rejecting them up
/// front avoids materialising numbers like `1e1000000000`.
const MIN_SCALE: i64 = -9;

/// Width of the `customer_id` column.
const MAX_CUSTOMER_ID_LEN: usize = 255;

/// Raw form fields as submitted. Absent fields are `None`.
#[derive(Debug, Clone, Default)]
pub struct InvoiceForm {
    pub customer_id: Option<String>,
    pub amount: Option<String>,
    pub status: Option<String>,
}

/// A form that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedInvoice {
    pub customer_id: String,
    pub status: InvoiceStatus,
    amount_in_cents: i32,
}

impl ValidatedInvoice {
    pub fn amount_in_cents(&self) -> i32 {
        self.amount_in_cents
    }
}

/// Field name → messages, keyed by the form's field names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, Vec<String>>);

impl FieldErrors {
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.entry(field).or_default().push(message.into());
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &[String])> + '_ {
        self.0.iter().map(|(k, v)| (*k, v.as_slice()))
    }
}

impl InvoiceForm {
    /// Check every field and collect all problems at once.
    pub fn validate(&self) -> Result<ValidatedInvoice, FieldErrors> {
        let mut errors = FieldErrors::default();

        let customer_id = match self.customer_id.as_deref().map(str::trim) {
            Some(id) if id.chars().count() > MAX_CUSTOMER_ID_LEN => {
                errors.add(CUSTOMER_ID_FIELD, CUSTOMER_TOO_LONG);
                None
            }
            Some(id) if !id.is_empty() => Some(id.to_string()),
            _ => {
                errors.add(CUSTOMER_ID_FIELD, CUSTOMER_REQUIRED);
                None
            }
        };

        let amount = match parse_amount(self.amount.as_deref()) {
            Ok(parsed) => Some(parsed),
            Err(message) => {
                errors.add(AMOUNT_FIELD, message);
                None
            }
        };

        let status = match self.status.as_deref().map(InvoiceStatus::from_str) {
            Some(Ok(status)) => Some(status),
            _ => {
                errors.add(STATUS_FIELD, STATUS_INVALID);
                None
            }
        };

        match (customer_id, amount, status) {
            (Some(customer_id), Some(amount_in_cents), Some(status)) => Ok(ValidatedInvoice {
                customer_id,
                status,
                amount_in_cents,
            }),
            _ => Err(errors),
        }
    }
}

fn parse_amount(raw: Option<&str>) -> Result<i32, &'static str> {
    let raw = raw.map(str::trim).filter(|s| !s.is_empty()).ok_or(AMOUNT_INVALID)?;
    let amount = BigDecimal::from_str(raw).map_err(|_| AMOUNT_INVALID)?;
    match amount.sign() {
        Sign::Minus => return Err(AMOUNT_NEGATIVE),
        Sign::NoSign => return Ok(0),
        Sign::Plus => {}
    }
    if amount.as_bigint_and_exponent().1 < MIN_SCALE {
        return Err(AMOUNT_TOO_LARGE);
    }
    amount_to_cents(&amount).ok_or(AMOUNT_TOO_LARGE)
}
