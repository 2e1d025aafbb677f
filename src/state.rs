use std::sync::Arc;

use crate::config::ResponseMode;
use crate::domain::store::MappingStore;

/// Shared application state injected into all handlers.
///
/// The store is created once at startup and lives until shutdown; the
/// handlers only ever hold it behind an [`Arc`].
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<MappingStore>,
    pub response_mode: ResponseMode,
    pub base_url: String,
}

impl AppState {
    pub fn new(store: Arc<MappingStore>, response_mode: ResponseMode, base_url: String) -> Self {
        Self {
            store,
            response_mode,
            base_url,
        }
    }

    /// Constructs the fully-qualified short URL for a key.
    pub fn short_url(&self, key: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), key)
    }
}
