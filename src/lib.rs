//! # shortkey
//!
//! A minimal in-memory URL shortening service built with Axum.
//!
//! ## Architecture
//!
//! - **Domain** ([`domain`]) - The mapping store that owns short-key → URL associations
//! - **Utilities** ([`utils`]) - Key generation and URL validation
//! - **HTTP layer** ([`handlers`], [`dto`], [`routes`]) - Axum handlers and wire types
//!
//! ## Features
//!
//! - 6-character hexadecimal short keys generated from random 128-bit values
//! - Atomic generate-and-insert registration safe under concurrent requests
//! - Regex-based URL validation
//! - Configurable response shape (bare key or fully-qualified short URL)
//!
//! ## Quick Start
//!
//! ```bash
//! # Optional configuration
//! export LISTEN="0.0.0.0:3000"
//! export RESPONSE_MODE="key"          # or "full_url"
//! export BASE_URL="http://localhost:3000"
//!
//! # Start the service
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod domain;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::config::{Config, ResponseMode};
    pub use crate::domain::store::MappingStore;
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
