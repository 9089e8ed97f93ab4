//! Logger
//!
//! Passes report what they rewrote through a `Logger`; the driver decides where it goes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug = 0,
    Info = 1,
    Warn = 2,
    Error = 3,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        };
        f.write_str(label)
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            other => Err(format!("unknown log level `{}`", other)),
        }
    }
}

/// Sink for pass and driver messages. Implementors only write; filtering by `level()` happens
/// in the provided methods.
pub trait Logger {
    /// Least severe level that is written.
    fn level(&self) -> LogLevel;

    fn log(&self, level: LogLevel, message: &str);

    fn is_enabled(&self, level: LogLevel) -> bool {
        level >= self.level()
    }

    fn debug(&self, message: &str) {
        log_enabled(self, LogLevel::Debug, message);
    }

    fn info(&self, message: &str) {
        log_enabled(self, LogLevel::Info, message);
    }

    fn warn(&self, message: &str) {
        log_enabled(self, LogLevel::Warn, message);
    }

    fn error(&self, message: &str) {
        log_enabled(self, LogLevel::Error, message);
    }
}

fn log_enabled<L: Logger + ?Sized>(logger: &L, level: LogLevel, message: &str) {
    if logger.is_enabled(level) {
        logger.log(level, message);
    }
}

/// Discards everything. Used by tests and library callers without a console.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullLogger;

impl Logger for NullLogger {
    fn level(&self) -> LogLevel {
        LogLevel::Error
    }

    fn log(&self, _level: LogLevel, _message: &str) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct Collect {
        level: LogLevel,
        lines: RefCell<Vec<String>>,
    }

    impl Logger for Collect {
        fn level(&self) -> LogLevel {
            self.level
        }

        fn log(&self, level: LogLevel, message: &str) {
            self.lines.borrow_mut().push(format!("{} {}", level, message));
        }
    }

    #[test]
    fn should_order_levels_by_severity() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Warn);
        assert!(LogLevel::Warn < LogLevel::Error);
    }

    #[test]
    fn should_parse_level_names() {
        assert_eq!("debug".parse::<LogLevel>(), Ok(LogLevel::Debug));
        assert_eq!("WARNING".parse::<LogLevel>(), Ok(LogLevel::Warn));
        assert!("verbose".parse::<LogLevel>().is_err());
    }

    #[test]
    fn should_display_levels_upper_case() {
        assert_eq!(LogLevel::Warn.to_string(), "WARN");
        assert_eq!(LogLevel::Debug.to_string(), "DEBUG");
    }

    #[test]
    fn should_filter_below_the_configured_level() {
        let logger = Collect {
            level: LogLevel::Info,
            lines: RefCell::new(Vec::new()),
        };

        logger.debug("hidden");
        logger.info("shown");
        logger.error("also shown");

        assert_eq!(*logger.lines.borrow(), vec!["INFO shown", "ERROR also shown"]);
    }

    #[test]
    fn null_logger_only_reports_errors_as_enabled() {
        assert!(!NullLogger.is_enabled(LogLevel::Info));
        assert!(NullLogger.is_enabled(LogLevel::Error));
    }
}
