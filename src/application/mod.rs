pub mod action;
pub mod auth_service;
pub mod invoice_service;

pub use action::{ActionError, Redirect, DASHBOARD_PATH, INVOICES_PATH};
pub use auth_service::{AuthService, SignInOutcome};
pub use invoice_service::InvoiceService;
