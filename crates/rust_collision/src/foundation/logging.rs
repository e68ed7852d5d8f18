//! Logging utilities and structured logging support

pub use log::{debug, info, warn, error, trace};

/// Initialize the logging system
///
/// Reads the `RUST_LOG` environment variable for filter configuration.
/// Panics if a logger is already installed; use [`try_init`] when the
/// caller cannot guarantee it runs first.
pub fn init() {
    env_logger::init();
}

/// Initialize the logging system, ignoring an already-installed logger
pub fn try_init() {
    let _ = env_logger::try_init();
}
