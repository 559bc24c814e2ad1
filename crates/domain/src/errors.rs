//! Domain error types.

use shared::password::PasswordError;
use thiserror::Error;

/// Failure reported by a record store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A unique constraint rejected the write; carries the constraint name.
    #[error("Duplicate value violates {0}")]
    Duplicate(String),

    #[error("Store failure: {0}")]
    Backend(String),
}

/// Errors surfaced by the record services.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Password error: {0}")]
    Password(#[from] PasswordError),

    #[error("Internal error: {0}")]
    Internal(String),
}
