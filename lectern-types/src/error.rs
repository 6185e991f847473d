//! The error taxonomy shared by all stores and the facade.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Result type for store operations.
pub type BackendResult<T> = Result<T, BackendError>;

/// Errors surfaced in the `error` slot of a [`crate::Response`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackendError {
    /// Sign-in rejected.
    #[error("{0}")]
    InvalidCredentials(String),

    /// A referenced id is absent from its table.
    #[error("{table} record not found: {id}")]
    NotFound { table: String, id: String },

    /// A caller-supplied record violates its table's shape.
    #[error("validation error: {0}")]
    Validation(String),

    /// Transport-level failure. The emulator only raises this when a stored
    /// row cannot be decoded into its typed record.
    #[error("transport error: {0}")]
    Transport(String),
}

impl BackendError {
    /// The rejection returned for any credential pair other than the seeded one.
    #[must_use]
    pub fn invalid_credentials() -> Self {
        Self::InvalidCredentials("Invalid login credentials".to_string())
    }

    #[must_use]
    pub fn not_found(table: impl fmt::Display, id: impl fmt::Display) -> Self {
        Self::NotFound {
            table: table.to_string(),
            id: id.to_string(),
        }
    }

    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    #[must_use]
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    /// Stable machine-readable code for this error.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidCredentials(_) => ErrorCode::InvalidCredentials,
            Self::NotFound { .. } => ErrorCode::NotFound,
            Self::Validation(_) => ErrorCode::ValidationError,
            Self::Transport(_) => ErrorCode::TransportError,
        }
    }

    /// Wire form of this error: `{"code": ..., "message": ...}`.
    #[must_use]
    pub fn body(&self) -> ErrorBody {
        ErrorBody {
            code: self.code(),
            message: self.to_string(),
        }
    }
}

/// Machine-readable error codes, matching the hosted backend's error shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    InvalidCredentials,
    NotFound,
    ValidationError,
    TransportError,
}

/// Serialized error payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub code: ErrorCode,
    pub message: String,
}
