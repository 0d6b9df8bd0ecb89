//! Domain error types.

use thiserror::Error;

/// Top-level domain error type.
#[derive(Debug, Error)]
pub enum DomainError {
    /// Submitted input failed domain validation.
    #[error("validation error: {0}")]
    Validation(String),

    /// A storage or synchronization failure.
    #[error("infrastructure error: {0}")]
    Infrastructure(String),
}
