//! Tracing/logging setup for applications embedding the engine.
//!
//! The engine crates only emit `tracing` events; wiring a subscriber is the
//! host application's call. This helper covers the common case.

use tracing_subscriber::EnvFilter;

/// Initialize process-wide tracing/logging.
///
/// JSON logs with timestamps, filter configurable via `RUST_LOG`. Safe to
/// call multiple times; subsequent calls are no-ops.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();
}
