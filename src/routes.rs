//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`         - Liveness confirmation
//! - `POST /shorten`  - Register a long URL
//! - `GET  /{key}`    - Short key redirect
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use axum::Router;
use axum::routing::{get, post};
use tower::Layer;
use tower_http::LatencyUnit;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::handlers::{home_handler, redirect_handler, shorten_handler};
use crate::state::AppState;

/// Constructs the application router with all routes and middleware.
///
/// The static `/shorten` route takes precedence over the `/{key}`
/// capture, so "shorten" itself can never be resolved as a short key.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/", get(home_handler))
        .route("/shorten", post(shorten_handler))
        .route("/{key}", get(redirect_handler))
        .with_state(state)
        .layer(trace_layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}

/// Creates a tracing middleware for HTTP requests.
///
/// Spans are created at `INFO` level with method, path, and HTTP
/// version; responses are logged with status code and latency in
/// milliseconds. Redirect statuses are ordinary responses here, only
/// 5xx classify as failures.
fn trace_layer()
-> TraceLayer<tower_http::classify::SharedClassifier<tower_http::classify::ServerErrorsAsFailures>>
{
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
}
