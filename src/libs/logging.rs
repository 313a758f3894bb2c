//! Tracing subscriber setup.
//!
//! Logging is only installed in debug mode (see
//! [`is_debug_mode`](super::messages::macros::is_debug_mode)); in normal mode
//! the CLI prints plain messages and the engine's `tracing` events go nowhere.

use tracing_subscriber::{fmt, EnvFilter};

/// Installs the global subscriber.
///
/// The filter comes from `RUST_LOG`, defaulting to `debug` for this crate
/// and `warn` for everything else. Calling it twice is harmless.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn,furnace_report=debug"));

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_line_number(true)
        .try_init();
}

/// Subscriber for tests: output is captured by the test harness.
pub fn init_test() {
    let _ = fmt().with_env_filter(EnvFilter::new("debug")).with_test_writer().try_init();
}
