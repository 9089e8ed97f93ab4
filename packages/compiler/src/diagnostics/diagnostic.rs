use super::error_code::DiagnosticCode;
use crate::ir::Node;
use crate::parse_util::SourceSpan;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticSeverity {
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub code: DiagnosticCode,
    pub severity: DiagnosticSeverity,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub span: Option<SourceSpan>,
}

impl Diagnostic {
    pub fn new(
        code: DiagnosticCode,
        severity: DiagnosticSeverity,
        message: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Self {
        Diagnostic {
            code,
            severity,
            message: message.into(),
            span,
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == DiagnosticSeverity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level = match self.severity {
            DiagnosticSeverity::Warning => "warning",
            DiagnosticSeverity::Error => "error",
        };
        write!(f, "{} {}: {}", level, self.code, self.message)?;
        if let Some(span) = &self.span {
            write!(f, " ({})", span)?;
        }
        Ok(())
    }
}

/// Gathers every diagnostic attached anywhere under `root`, in pre-order.
pub fn collect_diagnostics(root: &Node) -> Vec<&Diagnostic> {
    let mut found = Vec::new();
    collect_into(root, &mut found);
    found
}

fn collect_into<'a>(node: &'a Node, found: &mut Vec<&'a Diagnostic>) {
    found.extend(node.diagnostics.iter());
    for child in &node.children {
        collect_into(child, found);
    }
}

pub fn has_errors(root: &Node) -> bool {
    collect_diagnostics(root).iter().any(|d| d.is_error())
}
