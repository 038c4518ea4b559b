use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::domain::errors::DomainError;
use crate::domain::invoice::{InvoiceChanges, InvoiceView, NewInvoice};
use crate::domain::ports::{InvoiceRepository, ViewCache};
use crate::domain::validation::InvoiceForm;

use super::action::{ActionError, Redirect, INVOICES_PATH};

const CREATE_INVALID: &str = "Missing Fields. Failed to Create Invoice.";
const CREATE_FAILED: &str = "Database Error: Failed to Create Invoice.";
const UPDATE_INVALID: &str = "Missing Fields. Failed to Update Invoice.";
const UPDATE_FAILED: &str = "Database Error: Failed to Update Invoice.";
const DELETE_FAILED: &str = "Database Error: Failed to Delete Invoice.";

#[derive(Clone)]
pub struct InvoiceService {
    repo: Arc<dyn InvoiceRepository>,
    views: Arc<dyn ViewCache>,
}

impl InvoiceService {
    pub fn new(repo: Arc<dyn InvoiceRepository>, views: Arc<dyn ViewCache>) -> Self {
        Self { repo, views }
    }

    /// Validate the form, insert one invoice dated today, then invalidate the
    /// list view and redirect to it.
    pub fn create_invoice(&self, form: &InvoiceForm) -> Result<Redirect, ActionError> {
        let validated = form.validate().map_err(|errors| ActionError::Invalid {
            errors,
            message: CREATE_INVALID,
        })?;

        let invoice = NewInvoice {
            amount_in_cents: validated.amount_in_cents(),
            customer_id: validated.customer_id,
            status: validated.status,
            date: Utc::now().date_naive(),
        };

        if let Err(e) = self.repo.insert(&invoice) {
            log::error!("Failed to create invoice: {}", e);
            return Err(ActionError::Database {
                message: CREATE_FAILED,
            });
        }

        Ok(self.revalidate_and_redirect())
    }

    /// Validate the form and overwrite customer, amount and status of `id`.
    /// The issue date is left as it is.
    pub fn update_invoice(&self, id: Uuid, form: &InvoiceForm) -> Result<Redirect, ActionError> {
        let validated = form.validate().map_err(|errors| ActionError::Invalid {
            errors,
            message: UPDATE_INVALID,
        })?;

        let changes = InvoiceChanges {
            amount_in_cents: validated.amount_in_cents(),
            customer_id: validated.customer_id,
            status: validated.status,
        };

        match self.repo.update(id, &changes) {
            Ok(0) => log::warn!("Update matched no invoice with id {}", id),
            Ok(_) => {}
            Err(e) => {
                log::error!("Failed to update invoice {}: {}", id, e);
                return Err(ActionError::Database {
                    message: UPDATE_FAILED,
                });
            }
        }

        Ok(self.revalidate_and_redirect())
    }

    /// Delete `id` and invalidate the list view. Unknown ids are not an error.
    pub fn delete_invoice(&self, id: Uuid) -> Result<(), ActionError> {
        match self.repo.delete(id) {
            Ok(removed) => {
                log::debug!("Deleted {} invoice row(s) for id {}", removed, id);
                self.views.invalidate(INVOICES_PATH);
                Ok(())
            }
            Err(e) => {
                log::error!("Failed to delete invoice {}: {}", id, e);
                Err(ActionError::Database {
                    message: DELETE_FAILED,
                })
            }
        }
    }

    pub fn get_invoice(&self, id: Uuid) -> Result<Option<InvoiceView>, DomainError> {
        self.repo.find_by_id(id)
    }

    pub fn list_invoices(&self) -> Result<Vec<InvoiceView>, DomainError> {
        self.repo.list()
    }

    fn revalidate_and_redirect(&self) -> Redirect {
        self.views.invalidate(INVOICES_PATH);
        Redirect::to(INVOICES_PATH)
    }
}
