use thiserror::Error;

/// Errors from store operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A record with the same content fingerprint already exists.
    #[error("string already stored under fingerprint {0}")]
    Duplicate(String),
}
