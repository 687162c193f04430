//! Domain-level errors
//!
//! Storage failures and lookups that found nothing. Validation failures are
//! reported as `FieldErrors` values instead.

use thiserror::Error;

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Failures of the key-value backend or of JSON encoding
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),

    #[error("storage quota exceeded while writing '{key}'")]
    QuotaExceeded { key: String },

    #[error("storage operation failed: {0}")]
    Backend(String),

    #[error("could not serialize value for '{key}': {source}")]
    Serialize {
        key: String,
        source: serde_json::Error,
    },
}

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

impl DomainError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, DomainError::NotFound(_))
    }
}
