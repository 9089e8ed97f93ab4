//! Component Complex Attribute Content Phase
//!
//! Component attributes only support a single fragment of content: one expression, one literal,
//! or one template. Content mixing several fragments, or holding an embedded code block, is
//! rejected with a diagnostic and the attribute is dropped. Plain tag helpers keep the same
//! content untouched.
//!
//! Two shapes look like mixed content but are only a redundantly parenthesized explicit
//! expression, e.g. `@(Value)` and `@(@<b>bold</b>)`. These are unwrapped back to a single
//! fragment before anything is rejected.

use crate::diagnostics::ComponentDiagnosticFactory;
use crate::ir::{
    find_descendants, is_component_descriptor, FileKind, Node, NodeKind, NodeKinds,
    TagHelperDescriptor,
};
use crate::logging::Logger;
use crate::pipeline::pass::IntermediateNodePass;

/// Runs ahead of every other component pass; they assume attribute content is already simple.
pub const COMPLEX_ATTRIBUTE_CONTENT_PASS_ORDER: i32 = -1000;

pub type DescriptorPredicate = Box<dyn Fn(&TagHelperDescriptor) -> bool + Send + Sync>;

/// Verdict for one attribute's content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentShape {
    Simple,
    Complex,
}

pub struct ComponentComplexAttributeContentPass {
    is_component: DescriptorPredicate,
}

impl ComponentComplexAttributeContentPass {
    pub fn new() -> Self {
        Self::with_component_predicate(is_component_descriptor)
    }

    /// Uses `is_component` to decide which tag usages reject complex content.
    pub fn with_component_predicate(
        is_component: impl Fn(&TagHelperDescriptor) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self {
            is_component: Box::new(is_component),
        }
    }

    /// Outer tag helpers first: an unwrapped template must lose its `@` markers before the
    /// tag helpers nested in it are classified. Removed attributes are not descended into.
    fn visit(&self, node: &mut Node, logger: &dyn Logger) {
        if matches!(node.kind, NodeKind::TagHelper { .. }) {
            self.process_tag_helper(node, logger);
        }
        for child in node.children.iter_mut() {
            self.visit(child, logger);
        }
    }

    fn process_tag_helper(&self, tag_helper: &mut Node, logger: &dyn Logger) {
        let Node {
            kind,
            children,
            diagnostics,
            ..
        } = tag_helper;
        let NodeKind::TagHelper {
            tag_name,
            descriptors,
        } = kind
        else {
            return;
        };

        // Reverse order keeps the indices of unvisited attributes valid across removals.
        for index in (0..children.len()).rev() {
            let attribute = &mut children[index];
            if !attribute.is_any_of(NodeKinds::ATTRIBUTE_BINDING) {
                continue;
            }

            if classify_attribute_content(&mut attribute.children) == ContentShape::Simple {
                continue;
            }

            let attribute_name = attribute.attribute_name().unwrap_or_default().to_string();
            if !descriptors.iter().any(|descriptor| (self.is_component)(descriptor)) {
                logger.debug(&format!(
                    "keeping complex content of '{}' on tag helper <{}>",
                    attribute_name, tag_name
                ));
                continue;
            }

            let removed = children.remove(index);
            diagnostics.push(ComponentDiagnosticFactory::create_unsupported_complex_content(
                removed.span.as_ref(),
                &attribute_name,
            ));
            logger.info(&format!(
                "removed attribute '{}' with complex content from component <{}>",
                attribute_name, tag_name
            ));
        }
    }
}

impl Default for ComponentComplexAttributeContentPass {
    fn default() -> Self {
        Self::new()
    }
}

impl IntermediateNodePass for ComponentComplexAttributeContentPass {
    fn name(&self) -> &'static str {
        "ComponentComplexAttributeContent"
    }

    fn order(&self) -> i32 {
        COMPLEX_ATTRIBUTE_CONTENT_PASS_ORDER
    }

    fn execute(&self, document: &mut Node, logger: &dyn Logger) {
        if document.file_kind() == Some(FileKind::Legacy) {
            logger.debug("skipping complex attribute content check for a legacy document");
            return;
        }

        self.visit(document, logger);
    }
}

/// Classifies the content children of an attribute binding, unwrapping redundantly
/// parenthesized explicit expressions in place.
pub fn classify_attribute_content(children: &mut [Node]) -> ContentShape {
    let child = match children {
        [child] => child,
        [] => return ContentShape::Simple,
        _ => return ContentShape::Complex,
    };

    match child.kind {
        NodeKind::GenericValue if child.children.len() > 1 => ContentShape::Complex,
        NodeKind::Expression if child.children.len() > 1 => {
            unwrap_explicit_expression(&mut child.children)
        }
        NodeKind::CodeBlock => ContentShape::Complex,
        NodeKind::Document { .. }
        | NodeKind::TagHelper { .. }
        | NodeKind::TagHelperBody
        | NodeKind::PropertyBinding { .. }
        | NodeKind::HtmlAttribute { .. }
        | NodeKind::GenericValue
        | NodeKind::HtmlContent
        | NodeKind::Expression
        | NodeKind::Template
        | NodeKind::Token { .. } => ContentShape::Simple,
    }
}

/// Recovers the single fragment of `@(...)`. Anything else with several parts stays complex.
fn unwrap_explicit_expression(parts: &mut Vec<Node>) -> ContentShape {
    if is_parenthesized_expression(parts) {
        parts.remove(2);
        parts.remove(0);
        ContentShape::Simple
    } else if is_parenthesized_template(parts) {
        parts.remove(3);
        parts.remove(2);
        parts.remove(0);
        strip_transition_markers(&mut parts[0]);
        ContentShape::Simple
    } else {
        ContentShape::Complex
    }
}

/// `(`, expression, `)`
fn is_parenthesized_expression(parts: &[Node]) -> bool {
    matches!(parts, [open, _, close] if open.is_token("(") && close.is_token(")"))
}

/// `(`, template, empty token, `)`
fn is_parenthesized_template(parts: &[Node]) -> bool {
    match parts {
        [open, template, empty, close] => {
            open.is_token("(")
                && matches!(template.kind, NodeKind::Template)
                && empty.is_token("")
                && close.is_token(")")
        }
        _ => false,
    }
}

/// Drops the leading `@` token the explicit expression left on nested expressions.
fn strip_transition_markers(template: &mut Node) {
    let expressions = find_descendants(template, NodeKinds::EXPRESSION);
    for path in expressions.iter().rev() {
        if let Some(expression) = template.node_at_mut(path) {
            if expression
                .children
                .first()
                .is_some_and(|first| first.is_token("@"))
            {
                expression.children.remove(0);
            }
        }
    }
}
