use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiagnosticCode {
    /// Raised when a component attribute mixes markup and code, or holds an embedded code block,
    /// in a way the component code generator cannot represent.
    UnsupportedComplexContent = 9986,
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&component_error_code(*self))
    }
}

/// Renders a diagnostic code the way it is reported to users, e.g. `CMP9986`.
pub fn component_error_code(code: DiagnosticCode) -> String {
    format!("CMP{}", code as u32)
}
