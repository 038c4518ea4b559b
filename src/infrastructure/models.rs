use chrono::NaiveDate;
use diesel::prelude::*;
use uuid::Uuid;

use crate::domain::invoice::InvoiceView;
use crate::schema::{invoices, users};

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = invoices)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct InvoiceRow {
    pub id: Uuid,
    pub customer_id: String,
    pub amount: i32,
    pub status: String,
    pub date: NaiveDate,
}

impl From<InvoiceRow> for InvoiceView {
    fn from(row: InvoiceRow) -> Self {
        InvoiceView {
            id: row.id,
            customer_id: row.customer_id,
            amount: row.amount,
            status: row.status,
            date: row.date,
        }
    }
}

#[derive(Debug, Insertable)]
#[diesel(table_name = invoices)]
pub struct NewInvoiceRow<'a> {
    pub id: Uuid,
    pub customer_id: &'a str,
    pub amount: i32,
    pub status: &'a str,
    pub date: NaiveDate,
}

/// Update set for an invoice. `date` is deliberately absent.
#[derive(Debug, AsChangeset)]
#[diesel(table_name = invoices)]
pub struct InvoiceChangesRow<'a> {
    pub customer_id: &'a str,
    pub amount: i32,
    pub status: &'a str,
}

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UserRow {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = users)]
pub struct NewUserRow<'a> {
    pub id: Uuid,
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}
