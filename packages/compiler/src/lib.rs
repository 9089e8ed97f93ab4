#![deny(clippy::all)]

/**
 * Component Compiler
 *
 * Intermediate representation and lowering passes for component templates
 */
pub mod diagnostics;
mod error;
pub mod ir;
pub mod logging;
pub mod parse_util;
pub mod pipeline;

pub use error::{CompilerError, Result as CompilerResult};

/// Compiler version
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
