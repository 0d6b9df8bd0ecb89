//! Numspeak — API error types.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use numspeak_core::error::DomainError;
use numspeak_spoken::{ConversionError, ErrorKind};
use serde::Serialize;
use thiserror::Error;

/// Startup and runtime errors for the API server.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required environment variable is missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// Network binding or I/O error.
    #[error("server error: {0}")]
    Server(#[from] std::io::Error),
}

/// JSON body returned for error responses.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Machine-readable error code.
    pub error: &'static str,
    /// Human-readable error message.
    pub message: String,
}

/// HTTP-layer error that implements `IntoResponse`.
#[derive(Debug)]
pub enum ApiError {
    /// Failure from a domain handler.
    Domain(DomainError),
    /// Failure from the spoken number converter.
    Conversion(ConversionError),
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self::Domain(err)
    }
}

impl From<ConversionError> for ApiError {
    fn from(err: ConversionError) -> Self {
        Self::Conversion(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code, message) = match &self {
            Self::Domain(err @ DomainError::Validation(_)) => {
                (StatusCode::BAD_REQUEST, "validation_error", err.to_string())
            }
            Self::Domain(err @ DomainError::Infrastructure(_)) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "infrastructure_error",
                err.to_string(),
            ),
            Self::Conversion(err) => match err.kind() {
                ErrorKind::InvalidInput => {
                    (StatusCode::BAD_REQUEST, "invalid_input", err.to_string())
                }
                ErrorKind::OutOfRange => (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "out_of_range",
                    err.to_string(),
                ),
            },
        };

        let body = ErrorBody {
            error: error_code,
            message,
        };

        (status, Json(body)).into_response()
    }
}
