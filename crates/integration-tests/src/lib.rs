//! Shared helpers for the integration test suite.

#![cfg_attr(not(test), forbid(unsafe_code))]

use dark_cat_storefront::AppState;
use dark_cat_storefront::config::StorefrontConfig;

/// Build an application state with the shipped defaults.
///
/// Avoids `StorefrontConfig::from_env()` so parallel tests never race on
/// process environment variables.
///
/// # Panics
///
/// Panics if the embedded catalog fails to load; that is a packaging
/// defect the suite should surface immediately.
#[must_use]
pub fn test_state() -> AppState {
    init_tracing();
    AppState::new(StorefrontConfig::default()).expect("embedded catalog must load")
}

/// Install a test-friendly tracing subscriber once per process.
///
/// Honors `RUST_LOG`; repeated calls are no-ops.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
