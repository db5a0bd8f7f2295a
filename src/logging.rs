use log::{trace, LevelFilter};
use std::str::FromStr;

/// Parses a level name from the config, falling back to `Warn`.
pub fn level_from_str(level: &str) -> LevelFilter {
    LevelFilter::from_str(level.trim()).unwrap_or(LevelFilter::Warn)
}

/// Starts the logger. `RUST_LOG`, when set, wins over `level`.
pub fn init_logger(level: LevelFilter) {
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .format_target(false)
        .format_module_path(false)
        .init();
    trace!("Logger started.")
}
