//! Handler for the URL shortening endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use tracing::debug;

use crate::config::ResponseMode;
use crate::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::url_validator::is_valid_url;

/// Registers a long URL and returns its freshly generated short key.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com" }
/// ```
///
/// # Response
///
/// `201 Created` with either `{"shortKey": "a1b2c3"}` or
/// `{"shortUrl": "https://sho.rt/a1b2c3"}` depending on the configured
/// [`ResponseMode`]. Registering the same URL again yields a new key.
///
/// # Errors
///
/// Returns 400 Bad Request when the body carries no usable `url` field
/// (malformed JSON included) or when the URL fails validation.
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    let long_url = match payload {
        Ok(Json(ShortenRequest { url: Some(url) })) if !url.is_empty() => url,
        _ => return Err(AppError::MissingUrl),
    };

    if !is_valid_url(&long_url) {
        return Err(AppError::InvalidUrl);
    }

    let key = state.store.register(long_url)?;
    debug!(key = %key, total = state.store.len(), "registered mapping");

    let response = match state.response_mode {
        ResponseMode::Key => ShortenResponse::Key { short_key: key },
        ResponseMode::FullUrl => ShortenResponse::FullUrl {
            short_url: state.short_url(&key),
        },
    };

    Ok((StatusCode::CREATED, Json(response)))
}
