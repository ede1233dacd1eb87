//! Diagnostic logging to stderr, so it never mixes with the report on stdout.

use log::LevelFilter;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

/// Environment variable holding the log level.
pub const LOG_ENV: &str = "TOKCOUNT_LOG";

/// Parse a level name; unknown or missing values fall back to `Warn`.
pub fn level_from(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|v| v.trim().parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Warn)
}

pub fn initialize() {
    let level = level_from(std::env::var(LOG_ENV).ok().as_deref());

    let config = ConfigBuilder::new()
        .set_time_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Error)
        .build();

    // Already initialized is fine.
    let _ = TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto);
}
