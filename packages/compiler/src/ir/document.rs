//! Serialized IR documents.

use super::node::{FileKind, Node, NodeKind};
use crate::error::{CompilerError, Result};
use std::fs;
use std::path::Path;

impl Node {
    /// Parses a JSON document tree; the root must be a `Document` node.
    pub fn from_json(json: &str) -> Result<Node> {
        let root: Node = serde_json::from_str(json)?;
        if matches!(root.kind, NodeKind::Document { .. }) {
            Ok(root)
        } else {
            Err(CompilerError::NotADocument(root.kind.name()))
        }
    }

    pub fn read_document(path: &Path) -> Result<Node> {
        let content = fs::read_to_string(path)?;
        let mut root = Node::from_json(&content)?;
        if let NodeKind::Document { file_path, .. } = &mut root.kind {
            if file_path.is_none() {
                *file_path = Some(path.to_string_lossy().to_string());
            }
        }
        Ok(root)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// File kind of a document root; `None` for any other node.
    pub fn file_kind(&self) -> Option<FileKind> {
        match self.kind {
            NodeKind::Document { file_kind, .. } => Some(file_kind),
            _ => None,
        }
    }
}
