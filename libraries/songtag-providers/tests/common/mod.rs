//! Shared helpers for provider integration tests.

#![allow(dead_code)]

use std::sync::Once;
use std::time::Duration;

static INIT: Once = Once::new();

/// Initialize logging once per test binary
pub fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::DEBUG)
            .try_init();
    });
}

/// HTTP client with a short timeout for mock servers
pub fn http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap()
}
