//! `[resolve]` section configuration.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// What to do when two pages declare the same type name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeCollision {
    /// Keep the first page in route order, warn about the others (default).
    #[default]
    First,
    /// Keep the last page in route order, warn about the others.
    Last,
    /// Fail the pass.
    Reject,
}

/// `[resolve]` section in apiref.toml.
///
/// # Example
/// ```toml
/// [resolve]
/// type_collision = "reject"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct ResolveConfig {
    #[serde(default = "defaults::resolve::type_collision")]
    #[educe(Default = defaults::resolve::type_collision())]
    pub type_collision: TypeCollision,
}
