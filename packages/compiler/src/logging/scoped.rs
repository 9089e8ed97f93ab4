//! Scoped Logger
//!
//! Documents compile in parallel, so their lines interleave on the console. Each document's
//! run logs through a `ScopedLogger` that names the document in every line.

use super::logger::{LogLevel, Logger};

pub struct ScopedLogger<'a> {
    inner: &'a dyn Logger,
    scope: String,
}

impl<'a> ScopedLogger<'a> {
    pub fn new(inner: &'a dyn Logger, scope: impl Into<String>) -> Self {
        Self {
            inner,
            scope: scope.into(),
        }
    }
}

impl Logger for ScopedLogger<'_> {
    fn level(&self) -> LogLevel {
        self.inner.level()
    }

    fn log(&self, level: LogLevel, message: &str) {
        self.inner.log(level, &format!("{}: {}", self.scope, message));
    }
}
