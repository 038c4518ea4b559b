use diesel::prelude::*;
use uuid::Uuid;

use crate::db::DbPool;
use crate::domain::errors::DomainError;
use crate::domain::invoice::{InvoiceChanges, InvoiceView, NewInvoice};
use crate::domain::ports::InvoiceRepository;
use crate::schema::invoices;

use super::models::{InvoiceChangesRow, InvoiceRow, NewInvoiceRow};

pub struct DieselInvoiceRepository {
    pool: DbPool,
}

impl DieselInvoiceRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl InvoiceRepository for DieselInvoiceRepository {
    fn insert(&self, invoice: &NewInvoice) -> Result<Uuid, DomainError> {
        let mut conn = self.pool.get()?;

        let id = Uuid::new_v4();
        diesel::insert_into(invoices::table)
            .values(&NewInvoiceRow {
                id,
                customer_id: &invoice.customer_id,
                amount: invoice.amount_in_cents,
                status: invoice.status.as_str(),
                date: invoice.date,
            })
            .execute(&mut conn)?;

        Ok(id)
    }

    fn update(&self, id: Uuid, changes: &InvoiceChanges) -> Result<usize, DomainError> {
        let mut conn = self.pool.get()?;

        let touched = diesel::update(invoices::table.find(id))
            .set(&InvoiceChangesRow {
                customer_id: &changes.customer_id,
                amount: changes.amount_in_cents,
                status: changes.status.as_str(),
            })
            .execute(&mut conn)?;

        Ok(touched)
    }

    fn delete(&self, id: Uuid) -> Result<usize, DomainError> {
        let mut conn = self.pool.get()?;
        Ok(diesel::delete(invoices::table.find(id)).execute(&mut conn)?)
    }

    fn find_by_id(&self, id: Uuid) -> Result<Option<InvoiceView>, DomainError> {
        let mut conn = self.pool.get()?;

        let row = invoices::table
            .find(id)
            .select(InvoiceRow::as_select())
            .first(&mut conn)
            .optional()?;

        Ok(row.map(InvoiceView::from))
    }

    fn list(&self) -> Result<Vec<InvoiceView>, DomainError> {
        let mut conn = self.pool.get()?;

        let rows = invoices::table
            .select(InvoiceRow::as_select())
            .order((invoices::date.desc(), invoices::id.asc()))
            .load(&mut conn)?;

        Ok(rows.into_iter().map(InvoiceView::from).collect())
    }
}
