//! Handler for short key redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short key to its original URL.
///
/// # Endpoint
///
/// `GET /{key}`
///
/// Responds with `302 Found` and the stored long URL in the `Location`
/// header. The lookup is a shared-lock read and runs concurrently with
/// other resolutions.
///
/// # Errors
///
/// Returns 404 Not Found if the short key doesn't exist. An absent key
/// is an expected outcome and is not logged as an error.
pub async fn redirect_handler(
    Path(key): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let long_url = state.store.resolve(&key).ok_or(AppError::NotFound)?;

    debug!(key = %key, "redirecting");

    Ok((StatusCode::FOUND, [(header::LOCATION, long_url)]))
}
