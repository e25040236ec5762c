//! Page model: one documented type or topic.
//!
//! Pages are decoded from descriptor files, then filled in by the later
//! stages of a pass:
//!
//! | Field                              | Set by       |
//! |------------------------------------|--------------|
//! | `resource_path`                    | loader       |
//! | `base`, `base_*`, `resolution`     | resolver     |
//! | `meta_description`, text fields    | sanitizer    |
//!
//! None of the stage-owned fields are read from descriptors.

mod block;
mod member;

pub use block::{AudioTrack, ContentBlock};
pub use member::{Argument, Function, Property, Sample, Value};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Members inherited from ancestors, keyed by the ancestor's type name.
pub type Inherited<T> = BTreeMap<String, Vec<T>>;

/// Progress of a page through extension resolution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Resolution {
    /// Declares no base.
    #[default]
    Root,
    /// Waiting on the worklist.
    Pending,
    /// Base found and merged.
    Resolved,
    /// Base type not registered; rendered with its own members only.
    Unresolved,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Page {
    /// meta keywords
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,

    /// Plain-text summary built from `description`.
    #[serde(skip_deserializing)]
    pub meta_description: String,

    pub description: String,

    pub title: String,

    /// Type being described, empty for topic pages.
    #[serde(rename = "type")]
    pub type_name: String,

    /// Type being extended, if any.
    pub extends: String,

    /// Route of the resolved base page.
    #[serde(skip_deserializing, skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,

    pub basic_type: bool,

    /// Instances can be created even without a constructor.
    pub creatable: bool,

    /// Displayed before constructors, properties and functions.
    #[serde(deserialize_with = "block::deserialize_blocks")]
    pub blocks: Vec<ContentBlock>,

    pub constructors: Vec<Function>,

    pub properties: Vec<Property>,

    #[serde(skip_deserializing)]
    pub base_properties: Inherited<Property>,

    pub built_ins: Vec<Property>,

    pub functions: Vec<Function>,

    #[serde(skip_deserializing)]
    pub base_functions: Inherited<Function>,

    /// Descriptor path relative to the content root.
    #[serde(skip_deserializing)]
    pub resource_path: String,

    #[serde(skip_deserializing)]
    pub resolution: Resolution,
}

impl Page {
    /// Placeholder for a descriptor that failed to decode.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            title: "Error".into(),
            description: message.into(),
            ..Default::default()
        }
    }

    /// Best possible title: the type name for type pages.
    pub fn display_title(&self) -> &str {
        if self.type_name.is_empty() {
            &self.title
        } else {
            &self.type_name
        }
    }

    /// An object that can't be created and has to be accessed through its
    /// global variable.
    pub fn is_not_creatable_object(&self) -> bool {
        !self.creatable
            && !self.basic_type
            && !self.type_name.is_empty()
            && self.constructors.is_empty()
    }

    /// Whether the page is settled and may serve as a base.
    pub fn ready_as_base(&self) -> bool {
        self.extends.is_empty()
            || matches!(
                self.resolution,
                Resolution::Resolved | Resolution::Unresolved
            )
    }

    /// Whether the base was found and merged.
    pub fn extension_base_set(&self) -> bool {
        self.resolution == Resolution::Resolved
    }

    /// Derive member anchors, own and inherited.
    pub fn set_anchors(&mut self) {
        self.constructors
            .iter_mut()
            .chain(self.functions.iter_mut())
            .chain(self.base_functions.values_mut().flatten())
            .for_each(Function::set_anchor);
        self.properties
            .iter_mut()
            .chain(self.base_properties.values_mut().flatten())
            .chain(self.built_ins.iter_mut())
            .for_each(Property::set_anchor);
    }

    pub fn function(&self, name: &str) -> Option<&Function> {
        self.functions.iter().find(|f| f.name == name)
    }

    pub fn property(&self, name: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.name == name)
    }
}
