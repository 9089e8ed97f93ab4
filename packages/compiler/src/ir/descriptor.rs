//! Tag helper descriptors bound to a tag usage.

use serde::{Deserialize, Serialize};

/// What a descriptor binds a tag usage to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DescriptorKind {
    /// A component in the component programming model.
    Component,
    ChildContent,
    EventHandler,
    Bind,
    Key,
    Ref,
    Splat,
    /// A plain markup tag helper.
    #[default]
    TagHelper,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagHelperDescriptor {
    pub name: String,
    #[serde(default)]
    pub kind: DescriptorKind,
}

impl TagHelperDescriptor {
    pub fn new(name: impl Into<String>, kind: DescriptorKind) -> Self {
        TagHelperDescriptor {
            name: name.into(),
            kind,
        }
    }

    pub fn component(name: impl Into<String>) -> Self {
        Self::new(name, DescriptorKind::Component)
    }

    pub fn tag_helper(name: impl Into<String>) -> Self {
        Self::new(name, DescriptorKind::TagHelper)
    }
}

/// Default component check used by the component passes.
pub fn is_component_descriptor(descriptor: &TagHelperDescriptor) -> bool {
    descriptor.kind == DescriptorKind::Component
}
