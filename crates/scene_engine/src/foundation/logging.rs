//! Logging utilities and structured logging support

pub use log::{debug, info, warn, error, trace, LevelFilter};

/// Initialize the logging system from `RUST_LOG`
pub fn init() {
    env_logger::init();
}

/// Initialize the logging system with a default level filter
///
/// `RUST_LOG` is still honoured for per-module overrides. Returns an error if
/// a global logger has already been installed.
pub fn init_with_level(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .try_init()
}
