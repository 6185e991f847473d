//! Error types for session persistence.

use lectern_types::BackendError;
use thiserror::Error;

/// Result type for persistence operations.
pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// Errors raised by a [`crate::SessionPersistence`] tier.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// IO error (file system).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<PersistenceError> for BackendError {
    fn from(err: PersistenceError) -> Self {
        BackendError::transport(format!("session persistence failed: {err}"))
    }
}
