//! Logging utilities and structured logging support

pub use log::{debug, info, warn, error, trace};

/// Initialize the logging system.
///
/// Reads the `RUST_LOG` environment variable for filtering. Call once at
/// startup; repeated calls would panic inside `env_logger`.
pub fn init() {
    env_logger::init();
}
