//! Subtree Queries
//!
//! Locates descendants by kind. Results are child-index paths from the queried root, so callers
//! can mutate the tree afterwards without holding borrows across the query.

use super::node::{Node, NodeKind};
use bitflags::bitflags;
use smallvec::SmallVec;

bitflags! {
    /// Set of node kinds to match in a query
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct NodeKinds: u32 {
        const DOCUMENT = 1 << 0;
        const TAG_HELPER = 1 << 1;
        const TAG_HELPER_BODY = 1 << 2;
        const PROPERTY_BINDING = 1 << 3;
        const HTML_ATTRIBUTE = 1 << 4;
        const GENERIC_VALUE = 1 << 5;
        const HTML_CONTENT = 1 << 6;
        const EXPRESSION = 1 << 7;
        const CODE_BLOCK = 1 << 8;
        const TEMPLATE = 1 << 9;
        const TOKEN = 1 << 10;

        const ATTRIBUTE_BINDING = Self::PROPERTY_BINDING.bits() | Self::HTML_ATTRIBUTE.bits();
    }
}

impl NodeKind {
    pub fn flag(&self) -> NodeKinds {
        match self {
            NodeKind::Document { .. } => NodeKinds::DOCUMENT,
            NodeKind::TagHelper { .. } => NodeKinds::TAG_HELPER,
            NodeKind::TagHelperBody => NodeKinds::TAG_HELPER_BODY,
            NodeKind::PropertyBinding { .. } => NodeKinds::PROPERTY_BINDING,
            NodeKind::HtmlAttribute { .. } => NodeKinds::HTML_ATTRIBUTE,
            NodeKind::GenericValue => NodeKinds::GENERIC_VALUE,
            NodeKind::HtmlContent => NodeKinds::HTML_CONTENT,
            NodeKind::Expression => NodeKinds::EXPRESSION,
            NodeKind::CodeBlock => NodeKinds::CODE_BLOCK,
            NodeKind::Template => NodeKinds::TEMPLATE,
            NodeKind::Token { .. } => NodeKinds::TOKEN,
        }
    }
}

impl Node {
    pub fn is_any_of(&self, kinds: NodeKinds) -> bool {
        kinds.intersects(self.kind.flag())
    }
}

/// Child indices leading from a query root to one of its descendants.
pub type NodePath = SmallVec<[usize; 8]>;

/// Finds every descendant of `root` (the root itself excluded) whose kind is in `kinds`.
///
/// Paths are returned in pre-order, so an ancestor always precedes its descendants. Removing
/// children from a matched node only invalidates paths that come after it; walk the result in
/// reverse when the edits can shift sibling indices.
pub fn find_descendants(root: &Node, kinds: NodeKinds) -> Vec<NodePath> {
    let mut found = Vec::new();
    let mut path = NodePath::new();
    collect_descendants(root, kinds, &mut path, &mut found);
    found
}

fn collect_descendants(
    node: &Node,
    kinds: NodeKinds,
    path: &mut NodePath,
    found: &mut Vec<NodePath>,
) {
    for (index, child) in node.children.iter().enumerate() {
        path.push(index);
        if child.is_any_of(kinds) {
            found.push(path.clone());
        }
        collect_descendants(child, kinds, path, found);
        path.pop();
    }
}
