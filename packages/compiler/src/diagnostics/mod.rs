//! Diagnostics Module
//!
//! Diagnostics attached to IR nodes by compiler passes.

pub mod component_diagnostic_factory;
pub mod diagnostic;
pub mod error_code;

pub use component_diagnostic_factory::ComponentDiagnosticFactory;
pub use diagnostic::*;
pub use error_code::*;
