use crate::error::{CliError, Result as CliErrorResult};

use std::fmt::Display;
use std::path::PathBuf;
use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::{Record, info};

/// One log line: `[rfc3339 - LEVEL] message [file:line]`
pub fn format_line(level: impl Display, message: impl Display, record: &Record) -> String {
    format!(
        "[{} - {}] {} [{}:{}]",
        humantime::format_rfc3339(SystemTime::now()),
        level,
        message,
        record.file().unwrap_or("unknown"),
        record.line().unwrap_or(0),
    )
}

/// Install the global logger.
///
/// With `log_file` set, lines are appended to that file without colors.
/// Otherwise they go to stderr, which keeps stdout free for command output.
/// `colored` only affects stderr.
pub fn initialize(
    log_level: ud_config::LogLevel,
    log_file: Option<PathBuf>,
    colored: bool,
) -> CliErrorResult<()> {
    let level_filter = log_level.0;

    let output = match log_file {
        Some(ref path) => {
            let file = fern::log_file(path).map_err(|e| CliError::Logger {
                message: format!("Failed to open log file {}: {}", path.display(), e),
            })?;
            Dispatch::new()
                .format(|out, message, record| {
                    out.finish(format_args!("{}", format_line(record.level(), message, record)))
                })
                .chain(file)
        }
        None if colored => {
            let colors = ColoredLevelConfig::new()
                .trace(Color::Magenta)
                .debug(Color::Blue)
                .info(Color::Green)
                .warn(Color::Yellow)
                .error(Color::Red);
            Dispatch::new()
                .format(move |out, message, record| {
                    out.finish(format_args!(
                        "{}",
                        format_line(colors.color(record.level()), message, record)
                    ))
                })
                .chain(std::io::stderr())
        }
        None => Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!("{}", format_line(record.level(), message, record)))
            })
            .chain(std::io::stderr()),
    };

    Dispatch::new()
        .level(level_filter)
        .chain(output)
        .apply()
        .map_err(|e| CliError::Logger {
            message: format!("Failed to initialize logger: {e}"),
        })?;

    match log_file {
        Some(path) => info!("Logging at {} to {}", level_filter, path.display()),
        None => info!("Logging at {} to stderr", level_filter),
    }

    Ok(())
}
