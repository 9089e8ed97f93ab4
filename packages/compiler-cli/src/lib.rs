#![deny(clippy::all)]

/**
 * Component Compiler CLI
 *
 * Runs the component pass pipeline over serialized IR documents
 */
pub use component_compiler as compiler;

pub mod config;
pub mod perform_compile;
pub mod version;
