//! File logger setup.

use crate::config::LogConfig;
use crate::error::Result;
use chrono::Local;
use env_logger::{Builder, Target};
use log::Level;
use std::fs::{self, OpenOptions};
use std::io::Write;

/// Install an append-mode file logger described by `config`.
///
/// Creates the log directory when it does not exist yet. Lines are written as
/// `2024-01-31 12:00:00,123 - INFO - message`.
pub fn init(config: &LogConfig) -> Result<()> {
    if let Some(dir) = config.path.parent() {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir)?;
        }
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.path)?;

    Builder::new()
        .filter_level(config.level)
        .parse_default_env()
        .target(Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} - {} - {}",
                Local::now().format("%Y-%m-%d %H:%M:%S,%3f"),
                level_name(record.level()),
                record.args()
            )
        })
        .try_init()?;

    Ok(())
}

/// Level names as written to the log file.
pub fn level_name(level: Level) -> &'static str {
    match level {
        Level::Error => "ERROR",
        Level::Warn => "WARNING",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    }
}
