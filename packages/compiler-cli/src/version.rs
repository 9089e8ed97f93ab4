//! Version
//!
//! Version information for the compiler CLI.

/// CLI version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Version banner printed by `compc --version` style output.
pub fn version_string() -> String {
    format!("Component Compiler CLI v{} (compiler v{})", VERSION, component_compiler::version())
}
