//! Logging Module
//!
//! Logger abstraction used by the pass pipeline.

pub mod console;
pub mod logger;
pub mod scoped;

pub use console::ConsoleLogger;
pub use logger::{LogLevel, Logger, NullLogger};
pub use scoped::ScopedLogger;
