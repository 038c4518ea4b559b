use serde_json::Value;
use uuid::Uuid;

use super::auth::{AuthenticatedUser, Credentials, SignInError};
use super::errors::DomainError;
use super::invoice::{InvoiceChanges, InvoiceView, NewInvoice};

#[cfg_attr(test, mockall::automock)]
pub trait InvoiceRepository: Send + Sync + 'static {
    fn insert(&self, invoice: &NewInvoice) -> Result<Uuid, DomainError>;
    /// Returns the number of rows touched; zero when `id` is unknown.
    fn update(&self, id: Uuid, changes: &InvoiceChanges) -> Result<usize, DomainError>;
    /// Returns the number of rows removed; zero when `id` is unknown.
    fn delete(&self, id: Uuid) -> Result<usize, DomainError>;
    fn find_by_id(&self, id: Uuid) -> Result<Option<InvoiceView>, DomainError>;
    fn list(&self) -> Result<Vec<InvoiceView>, DomainError>;
}

/// Rendered views keyed by their path.
///
/// Every invalidation bumps the path's generation. A renderer reads the
/// generation before fetching data and hands it back to `store`, so a view
/// built from data read before an invalidation is never cached.
pub trait ViewCache: Send + Sync + 'static {
    fn get(&self, path: &str) -> Option<Value>;
    fn generation(&self, path: &str) -> u64;
    /// Cache `view` if `path` has not been invalidated since `generation` was
    /// read. Returns whether the view was kept.
    fn store(&self, path: &str, generation: u64, view: Value) -> bool;
    /// Mark `path` stale. Invalidating a stale path leaves it stale.
    fn invalidate(&self, path: &str);
}

#[cfg_attr(test, mockall::automock)]
pub trait CredentialsProvider: Send + Sync + 'static {
    fn authorize(&self, credentials: &Credentials) -> Result<AuthenticatedUser, SignInError>;
}
