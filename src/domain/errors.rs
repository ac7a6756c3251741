use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Product '{0}' not found")]
    ProductNotFound(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Corrupt cart document: {0}")]
    CorruptDocument(String),
    #[error("Internal error: {0}")]
    Internal(String),
}
