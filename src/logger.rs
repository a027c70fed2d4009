use log::{LevelFilter, SetLoggerError};

/// Initialize the logger with the specified level.
///
/// `RUST_LOG` directives still apply on top of `level`. Fails if a global
/// logger is already installed.
pub fn init_logger(level: LevelFilter) -> Result<(), SetLoggerError> {
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_target(false)
        .format_timestamp_millis()
        .try_init()
}
