//! Handler for the liveness endpoint.

use axum::extract::State;
use tracing::debug;

use crate::state::AppState;

/// Confirms the service is up.
///
/// # Endpoint
///
/// `GET /`
///
/// Returns a plain-text liveness line with `200 OK`.
pub async fn home_handler(State(state): State<AppState>) -> &'static str {
    debug!(mappings = state.store.len(), "liveness check");

    "URL Shortener Backend is running!"
}
