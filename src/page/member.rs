//! Documented members of a type: functions, properties and their parts.

use crate::utils::slug::anchor_link;
use serde::{Deserialize, Serialize, Serializer, ser::SerializeStruct};

/// A function, method or constructor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Function {
    pub name: String,

    /// In-page anchor, derived from `name` once the pass completes.
    #[serde(skip_deserializing)]
    pub anchor: String,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub arguments: Vec<Argument>,

    /// Used instead of `arguments` when several argument lists are accepted.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub argument_sets: Vec<Vec<Argument>>,

    pub description: String,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub samples: Vec<Sample>,

    #[serde(rename = "return", skip_serializing_if = "Vec::is_empty")]
    pub returns: Vec<Value>,

    pub coming_soon: bool,
    pub hide: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Argument {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
    pub optional: bool,
}

/// A returned value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Value {
    #[serde(rename = "type")]
    pub type_name: String,
    pub description: String,
}

/// A code sample, optionally paired with a media file showing its result.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Sample {
    pub code: String,
    pub media: String,
}

impl Sample {
    pub fn has_code_and_media(&self) -> bool {
        !self.code.is_empty() && !self.media.is_empty()
    }
}

// renderer picks a side-by-side layout from `has-code-and-media`
impl Serialize for Sample {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Sample", 3)?;
        state.serialize_field("code", &self.code)?;
        state.serialize_field("media", &self.media)?;
        state.serialize_field("has-code-and-media", &self.has_code_and_media())?;
        state.end()
    }
}

impl Function {
    pub fn set_anchor(&mut self) {
        self.anchor = anchor_link(&self.name);
    }
}

/// A property (field) of a type, or a built-in value of a module.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Property {
    pub name: String,

    /// In-page anchor, derived from `name` once the pass completes.
    #[serde(skip_deserializing)]
    pub anchor: String,

    #[serde(rename = "type")]
    pub type_name: String,

    /// When a property accepts several types.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub types: Vec<String>,

    pub description: String,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub samples: Vec<Sample>,

    pub read_only: bool,
    pub coming_soon: bool,
    pub hide: bool,
}

impl Property {
    pub fn set_anchor(&mut self) {
        self.anchor = anchor_link(&self.name);
    }

    /// Fill an overriding property from the property it overrides.
    ///
    /// `name` and `type` belong to the override and are never touched.
    pub fn inherit_from(&mut self, base: &Property) {
        if self.description.is_empty() {
            self.description = base.description.clone();
        }

        // An extension can't change read-only-ness.
        self.read_only = base.read_only;

        // Sticky: coming soon on the base means coming soon here.
        self.coming_soon |= base.coming_soon;

        if self.samples.is_empty() {
            self.samples = base.samples.clone();
        }
    }
}
