//! Writes log lines to stderr so they never mix with a tree printed on stdout.

use super::logger::{LogLevel, Logger};

#[derive(Debug, Clone, Copy)]
pub struct ConsoleLogger {
    level: LogLevel,
}

impl ConsoleLogger {
    pub fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// `[WARN] message`
    pub fn format_line(level: LogLevel, message: &str) -> String {
        format!("[{}] {}", level, message)
    }
}

impl Logger for ConsoleLogger {
    fn level(&self) -> LogLevel {
        self.level
    }

    fn log(&self, level: LogLevel, message: &str) {
        eprintln!("{}", Self::format_line(level, message));
    }
}
