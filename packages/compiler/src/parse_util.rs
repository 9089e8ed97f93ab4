//! Parse Utilities
//!
//! Source locations attached to IR nodes and diagnostics by the upstream parser.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SourceSpan {
    pub file_path: String,
    pub offset: usize,
    pub line: usize,
    pub col: usize,
    pub length: usize,
}

impl SourceSpan {
    pub fn new(file_path: impl Into<String>, offset: usize, line: usize, col: usize, length: usize) -> Self {
        SourceSpan {
            file_path: file_path.into(),
            offset,
            line,
            col,
            length,
        }
    }
}

impl fmt::Display for SourceSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}:{}", self.file_path, self.line, self.col)
    }
}
