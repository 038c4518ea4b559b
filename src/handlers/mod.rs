pub mod auth;
pub mod forms;
pub mod invoices;
pub mod navigation;
