//! Compiler Errors
//!
//! Failures loading or writing serialized IR documents. Passes themselves never fail; they
//! report problems as diagnostics on the tree.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CompilerError {
    #[error("failed to read IR document: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed IR document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("expected a document root, found `{0}`")]
    NotADocument(&'static str),
}

pub type Result<T> = std::result::Result<T, CompilerError>;
