//! Logging utilities
//!
//! The crate only ever talks to the `log` facade. Hosts that already install
//! a logger can ignore this module entirely.

pub use log::{debug, info, warn, error, trace};

/// Initialize `env_logger` from the `RUST_LOG` environment variable
///
/// Safe to call more than once; later calls are ignored when a logger is
/// already installed.
pub fn init() {
    let _ = env_logger::Builder::from_default_env().try_init();
}

/// Initialize `env_logger` with an explicit default filter (e.g. `"surroundings=debug"`)
///
/// `RUST_LOG` still wins when it is set.
pub fn init_with_filter(default_filter: &str) {
    let env = env_logger::Env::default().default_filter_or(default_filter);
    let _ = env_logger::Builder::from_env(env).try_init();
}
