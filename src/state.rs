use std::sync::Arc;

use crate::application::{AuthService, InvoiceService};
use crate::db::DbPool;
use crate::domain::ports::{CredentialsProvider, InvoiceRepository, ViewCache};
use crate::infrastructure::credentials_provider::DieselCredentialsProvider;
use crate::infrastructure::invoice_repo::DieselInvoiceRepository;
use crate::infrastructure::view_cache::InMemoryViewCache;

/// Everything the handlers need, shared across workers through `web::Data`.
pub struct AppState {
    pub invoices: InvoiceService,
    pub auth: AuthService,
    pub views: Arc<dyn ViewCache>,
}

impl AppState {
    pub fn new(
        invoices: Arc<dyn InvoiceRepository>,
        provider: Arc<dyn CredentialsProvider>,
        views: Arc<dyn ViewCache>,
    ) -> Self {
        Self {
            invoices: InvoiceService::new(invoices, views.clone()),
            auth: AuthService::new(provider),
            views,
        }
    }

    /// Wire the Postgres-backed adapters around one pool.
    pub fn from_pool(pool: DbPool) -> Self {
        Self::new(
            Arc::new(DieselInvoiceRepository::new(pool.clone())),
            Arc::new(DieselCredentialsProvider::new(pool)),
            Arc::new(InMemoryViewCache::default()),
        )
    }
}
