//! Stderr logger for the `log` records emitted by the analysis pipeline.

use colored::{ColoredString, Colorize};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Logger that writes `[LEVEL] message` lines to stderr.
struct StderrLogger {
    level: LevelFilter,
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{} {}", level_tag(record.level()), record.args());
        }
    }

    fn flush(&self) {}
}

fn level_tag(level: Level) -> ColoredString {
    let tag = format!("[{}]", level);
    match level {
        Level::Error => tag.red().bold(),
        Level::Warn => tag.yellow().bold(),
        Level::Info => tag.cyan(),
        Level::Debug => tag.dimmed(),
        Level::Trace => tag.dimmed().italic(),
    }
}

/// Log level for a `-v` count: warnings by default, debug for `-v`, trace
/// for `-vv` and above.
pub fn level_for_verbosity(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the stderr logger. Fails if a logger is already installed.
pub fn init(verbosity: u8) -> Result<(), SetLoggerError> {
    let level = level_for_verbosity(verbosity);
    log::set_boxed_logger(Box::new(StderrLogger { level }))?;
    log::set_max_level(level);
    Ok(())
}
