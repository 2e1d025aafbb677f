//! Request-boundary error type and HTTP mapping.
//!
//! Every failure the core can report crosses the HTTP boundary as an
//! [`AppError`], serialized as a flat `{"error": "<message>"}` body.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::utils::keygen::KeyspaceExhausted;

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Errors surfaced at the request boundary.
///
/// Absence of a short key ([`AppError::NotFound`]) is an ordinary outcome
/// of resolution, not a fault; it is mapped to `404` without error-level
/// logging.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Request body carried no usable `url` field.
    #[error("URL not provided")]
    MissingUrl,

    /// Submitted string failed URL validation.
    #[error("Invalid URL format")]
    InvalidUrl,

    /// Short key is not present in the store.
    #[error("URL not found")]
    NotFound,

    /// Key generation gave up after the bounded number of attempts.
    #[error("Short key space exhausted")]
    Keyspace(#[from] KeyspaceExhausted),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::MissingUrl | AppError::InvalidUrl => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Keyspace(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        let body = ErrorBody {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
