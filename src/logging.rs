#![cfg(feature = "std")]

use std::env;
use log::{self, LevelFilter, Metadata, Record};

struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    // stdout belongs to the game console
    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{} - {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Resolve the log level: explicit override, then the `BATTLESHIP_LOG`
/// environment variable, then `warn`.
pub fn resolve_level(level: Option<LevelFilter>) -> LevelFilter {
    level
        .or_else(|| {
            env::var("BATTLESHIP_LOG")
                .ok()
                .and_then(|lvl| lvl.parse().ok())
        })
        .unwrap_or(LevelFilter::Warn)
}

/// Install the stderr logger. Safe to call more than once.
pub fn init_logging(level: Option<LevelFilter>) {
    let level = resolve_level(level);
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}
