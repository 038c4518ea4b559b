use std::fmt;
use std::str::FromStr;

use bigdecimal::{BigDecimal, RoundingMode, ToPrimitive};
use chrono::NaiveDate;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvoiceStatus {
    Pending,
    Paid,
}

impl InvoiceStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            InvoiceStatus::Pending => "pending",
            InvoiceStatus::Paid => "paid",
        }
    }
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Only the exact lowercase spellings are accepted.
impl FromStr for InvoiceStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(InvoiceStatus::Pending),
            "paid" => Ok(InvoiceStatus::Paid),
            _ => Err(()),
        }
    }
}

/// Convert a decimal amount into minor currency units.
///
/// The amount is scaled by 100 and rounded half-to-even, so `"0.125"` becomes
/// 12 and `"0.135"` becomes 14. Returns `None` when the result does not fit
/// the stored integer column.
pub fn amount_to_cents(amount: &BigDecimal) -> Option<i32> {
    (amount * &BigDecimal::from(100))
        .with_scale_round(0, RoundingMode::HalfEven)
        .to_i32()
}

/// Values written by the create path.
#[derive(Debug, Clone, PartialEq)]
pub struct NewInvoice {
    pub customer_id: String,
    pub amount_in_cents: i32,
    pub status: InvoiceStatus,
    pub date: NaiveDate,
}

/// Values written by the update path. The issue date is never part of an
/// update.
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceChanges {
    pub customer_id: String,
    pub amount_in_cents: i32,
    pub status: InvoiceStatus,
}

#[derive(Debug, Clone)]
pub struct InvoiceView {
    pub id: Uuid,
    pub customer_id: String,
    pub amount: i32,
    pub status: String,
    pub date: NaiveDate,
}
