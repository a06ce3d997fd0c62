use anyhow::Result;
use chrono::SecondsFormat;
use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::{Level, LevelFilter};
use std::str::FromStr;

/// Verbosity level for logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Error,
    Warning,
    /// Default: every rename and skip is reported
    Info,
    /// Adds compiled patterns and moves on disk
    Debug,
    Trace,
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "error" => Ok(LogLevel::Error),
            "warn" | "warning" => Ok(LogLevel::Warning),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            "trace" => Ok(LogLevel::Trace),
            _ => Err(format!("Unknown verbosity level: {s}")),
        }
    }
}

impl LogLevel {
    pub fn to_level_filter(&self) -> LevelFilter {
        match self {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warning => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }

    /// Get the verbosity level from the number of -v flags
    pub fn from_occurrences(occurrences: u8) -> Self {
        match occurrences {
            0 => LogLevel::Info,
            1 => LogLevel::Debug,
            _ => LogLevel::Trace,
        }
    }
}

/// Warnings and errors go to stderr so stdout carries only the preview and progress
fn is_diagnostic(level: Level) -> bool {
    level <= Level::Warn
}

fn console_dispatch() -> Dispatch {
    let colors_line = ColoredLevelConfig::new()
        .error(Color::Red)
        .warn(Color::Yellow)
        .info(Color::White)
        .debug(Color::White)
        .trace(Color::BrightBlack);

    let progress = Dispatch::new()
        .filter(|metadata| !is_diagnostic(metadata.level()))
        .chain(std::io::stdout());
    let diagnostics = Dispatch::new()
        .filter(|metadata| is_diagnostic(metadata.level()))
        .chain(std::io::stderr());

    Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "\x1B[{}m{}\x1B[0m",
                colors_line.get_color(&record.level()).to_fg_str(),
                message
            ))
        })
        .chain(progress)
        .chain(diagnostics)
}

fn file_dispatch(log_file: &str) -> Result<Dispatch> {
    Ok(Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                chrono::Local::now().to_rfc3339_opts(SecondsFormat::Secs, true),
                record.level(),
                record.target(),
                message
            ))
        })
        .chain(fern::log_file(log_file)?))
}

/// Initialise the logger with the specified verbosity level
///
/// Only this crate logs at `verbosity`; dependencies are capped at warnings.
/// When `log_file` is not empty every message is also appended there with a
/// timestamp and its target.
pub fn init_logger(verbosity: LogLevel, log_file: &str) -> Result<()> {
    let mut logger = Dispatch::new()
        .level(LevelFilter::Warn.min(verbosity.to_level_filter()))
        .level_for(env!("CARGO_CRATE_NAME"), verbosity.to_level_filter())
        .chain(console_dispatch());

    if !log_file.is_empty() {
        logger = logger.chain(file_dispatch(log_file)?);
    }
    logger.apply()?;

    log::debug!("Logger initialized with verbosity level: {verbosity:?}");
    if !log_file.is_empty() {
        log::debug!("Logging to {log_file}");
    }

    Ok(())
}

/// Format a message with colour support
pub fn format_message(message: &str, colored_message: &str) -> String {
    if atty::is(atty::Stream::Stdout) {
        colored_message.to_string()
    } else {
        message.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_from_str() {
        assert_eq!(LogLevel::from_str("warn").unwrap(), LogLevel::Warning);
        assert_eq!(LogLevel::from_str("Warning").unwrap(), LogLevel::Warning);
        assert_eq!(LogLevel::from_str("TRACE").unwrap(), LogLevel::Trace);
        assert_eq!(
            LogLevel::from_str("loud").unwrap_err(),
            "Unknown verbosity level: loud"
        );
    }

    #[test]
    fn test_log_level_from_occurrences() {
        assert_eq!(LogLevel::from_occurrences(0), LogLevel::Info);
        assert_eq!(LogLevel::from_occurrences(1), LogLevel::Debug);
        assert_eq!(LogLevel::from_occurrences(7), LogLevel::Trace);
        assert_eq!(LogLevel::Debug.to_level_filter(), LevelFilter::Debug);
    }

    #[test]
    fn test_diagnostics_are_split_from_progress() {
        assert!(is_diagnostic(Level::Error));
        assert!(is_diagnostic(Level::Warn));
        assert!(!is_diagnostic(Level::Info));
        assert!(!is_diagnostic(Level::Trace));
    }

    #[test]
    fn test_format_message() {
        // Depends on whether stdout is a terminal, so accept either branch
        let plain_message = "Renamed a to b";
        let colored_message = "\x1B[32mRenamed a to b\x1B[0m";

        let result = format_message(plain_message, colored_message);
        assert!(result == plain_message || result == colored_message);
    }
}
