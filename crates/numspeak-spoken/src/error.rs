//! Conversion error types.

use thiserror::Error;

/// Broad category of a conversion failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input is not a non-negative integer.
    InvalidInput,
    /// The input is an integer beyond the supported scale vocabulary.
    OutOfRange,
}

/// Reasons a number cannot be spoken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// The input is not an integer value.
    #[error("not a number")]
    NotANumber,

    /// The input is below zero.
    #[error("number must be non-negative")]
    Negative,

    /// The input is one quadrillion or more.
    #[error("number is too large")]
    TooLarge,
}

impl ConversionError {
    /// Returns the category this error belongs to.
    #[must_use]
    pub fn kind(self) -> ErrorKind {
        match self {
            Self::NotANumber | Self::Negative => ErrorKind::InvalidInput,
            Self::TooLarge => ErrorKind::OutOfRange,
        }
    }
}
