//! IR Nodes
//!
//! Every node carries its kind, its ordered children and the diagnostics passes attached to it.

use super::descriptor::TagHelperDescriptor;
use crate::diagnostics::Diagnostic;
use crate::parse_util::SourceSpan;
use serde::{Deserialize, Serialize};

/// Which compilation model a document was parsed for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FileKind {
    #[default]
    Component,
    Legacy,
}

/// Whether a token came from code or markup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TokenKind {
    #[default]
    Code,
    Markup,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum NodeKind {
    Document {
        #[serde(default)]
        file_kind: FileKind,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        file_path: Option<String>,
    },
    /// One component or tag helper usage.
    TagHelper {
        tag_name: String,
        #[serde(default)]
        descriptors: Vec<TagHelperDescriptor>,
    },
    TagHelperBody,
    /// Attribute bound to a strongly typed property.
    PropertyBinding {
        attribute_name: String,
        property_name: String,
    },
    /// Attribute passed through as markup.
    HtmlAttribute { attribute_name: String },
    /// Attribute value assembled from several fragments.
    GenericValue,
    HtmlContent,
    Expression,
    CodeBlock,
    Template,
    Token {
        content: String,
        #[serde(default)]
        token_kind: TokenKind,
    },
}

impl NodeKind {
    pub fn name(&self) -> &'static str {
        match self {
            NodeKind::Document { .. } => "Document",
            NodeKind::TagHelper { .. } => "TagHelper",
            NodeKind::TagHelperBody => "TagHelperBody",
            NodeKind::PropertyBinding { .. } => "PropertyBinding",
            NodeKind::HtmlAttribute { .. } => "HtmlAttribute",
            NodeKind::GenericValue => "GenericValue",
            NodeKind::HtmlContent => "HtmlContent",
            NodeKind::Expression => "Expression",
            NodeKind::CodeBlock => "CodeBlock",
            NodeKind::Template => "Template",
            NodeKind::Token { .. } => "Token",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    #[serde(flatten)]
    pub kind: NodeKind,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub diagnostics: Vec<Diagnostic>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub span: Option<SourceSpan>,
}

impl Node {
    pub fn new(kind: NodeKind, children: Vec<Node>) -> Self {
        Node {
            kind,
            children,
            diagnostics: Vec::new(),
            span: None,
        }
    }

    pub fn document(file_kind: FileKind, children: Vec<Node>) -> Self {
        Self::new(
            NodeKind::Document {
                file_kind,
                file_path: None,
            },
            children,
        )
    }

    pub fn tag_helper(
        tag_name: impl Into<String>,
        descriptors: Vec<TagHelperDescriptor>,
        children: Vec<Node>,
    ) -> Self {
        Self::new(
            NodeKind::TagHelper {
                tag_name: tag_name.into(),
                descriptors,
            },
            children,
        )
    }

    pub fn tag_helper_body(children: Vec<Node>) -> Self {
        Self::new(NodeKind::TagHelperBody, children)
    }

    pub fn property_binding(attribute_name: impl Into<String>, children: Vec<Node>) -> Self {
        let attribute_name = attribute_name.into();
        let property_name = attribute_name.clone();
        Self::new(
            NodeKind::PropertyBinding {
                attribute_name,
                property_name,
            },
            children,
        )
    }

    pub fn html_attribute(attribute_name: impl Into<String>, children: Vec<Node>) -> Self {
        Self::new(
            NodeKind::HtmlAttribute {
                attribute_name: attribute_name.into(),
            },
            children,
        )
    }

    pub fn generic_value(children: Vec<Node>) -> Self {
        Self::new(NodeKind::GenericValue, children)
    }

    pub fn html_content(children: Vec<Node>) -> Self {
        Self::new(NodeKind::HtmlContent, children)
    }

    pub fn expression(children: Vec<Node>) -> Self {
        Self::new(NodeKind::Expression, children)
    }

    pub fn code_block(children: Vec<Node>) -> Self {
        Self::new(NodeKind::CodeBlock, children)
    }

    pub fn template(children: Vec<Node>) -> Self {
        Self::new(NodeKind::Template, children)
    }

    /// Code token.
    pub fn token(content: impl Into<String>) -> Self {
        Self::new(
            NodeKind::Token {
                content: content.into(),
                token_kind: TokenKind::Code,
            },
            Vec::new(),
        )
    }

    pub fn markup_token(content: impl Into<String>) -> Self {
        Self::new(
            NodeKind::Token {
                content: content.into(),
                token_kind: TokenKind::Markup,
            },
            Vec::new(),
        )
    }

    pub fn with_span(mut self, span: SourceSpan) -> Self {
        self.span = Some(span);
        self
    }

    /// Name of the attribute for property and markup attribute bindings.
    pub fn attribute_name(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::PropertyBinding { attribute_name, .. }
            | NodeKind::HtmlAttribute { attribute_name } => Some(attribute_name),
            _ => None,
        }
    }

    pub fn token_content(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Token { content, .. } => Some(content),
            _ => None,
        }
    }

    /// True for a token whose content is exactly `content`.
    pub fn is_token(&self, content: &str) -> bool {
        self.token_content() == Some(content)
    }

    pub fn node_at(&self, path: &[usize]) -> Option<&Node> {
        path.iter()
            .try_fold(self, |node, &index| node.children.get(index))
    }

    pub fn node_at_mut(&mut self, path: &[usize]) -> Option<&mut Node> {
        path.iter()
            .try_fold(self, |node, &index| node.children.get_mut(index))
    }
}
