use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invoice not found")]
    NotFound,
    #[error("Internal error: {0}")]
    Internal(String),
}
