#![cfg(test)]

//! Unified test logging initialization
//!
//! Single source of truth for test logging that works for both unit tests
//! and integration tests. Uses a one-time guard to prevent double
//! initialization and integrates cleanly with cargo/nextest output capture.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Initialize structured logging for tests.
///
/// Idempotent and race-safe; safe to call from any test. The level is
/// taken from `TEST_LOG`, then `RUST_LOG`, then defaults to `"warn"`.
pub fn init() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer() // cargo/nextest capture
            .without_time() // stable output
            .try_init()
            .ok(); // never panic if something else already initialized
    });
}
