use std::io::Write;

use env_logger::{fmt::Formatter, Builder, Target};
use log::{Level, LevelFilter};

use crate::{Error, Result};

/// Parses a log level name as given on the command line
pub fn parse_level(value: &str) -> Result<LevelFilter> {
    value
        .trim()
        .parse::<LevelFilter>()
        .map_err(|_| Error::invalid_input(format!("unknown log level '{}'", value.trim())))
}

/// Installs the global logger writing compact lines to stderr
pub fn init_logger(level: LevelFilter) -> Result<()> {
    let mut builder = Builder::new();
    builder
        .filter_level(level)
        .write_style(env_logger::WriteStyle::Never)
        .target(Target::Stderr)
        .format(|buf: &mut Formatter, record| {
            writeln!(
                buf,
                "{} {} {}",
                buf.timestamp_millis(),
                level_tag(record.level()),
                record.args()
            )
        });

    builder
        .try_init()
        .map_err(|e| Error::invalid_input(format!("logger init failed: {e}")))
}

fn level_tag(level: Level) -> &'static str {
    match level {
        Level::Error => "ERROR",
        Level::Warn => "WARN",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    }
}
