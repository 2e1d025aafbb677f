#![allow(dead_code)]

use std::sync::Arc;

use shortkey::config::ResponseMode;
use shortkey::domain::store::MappingStore;
use shortkey::state::AppState;

pub const TEST_BASE_URL: &str = "https://sho.rt";

pub fn create_test_state(response_mode: ResponseMode) -> AppState {
    AppState::new(
        Arc::new(MappingStore::new()),
        response_mode,
        TEST_BASE_URL.to_string(),
    )
}

pub fn is_short_key(s: &str) -> bool {
    s.len() == 6 && s.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase())
}
