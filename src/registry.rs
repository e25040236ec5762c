//! Type registry: declared type name → route of the page describing it.
//!
//! Built once after loading completes, read-only afterwards. Used by the
//! resolver to find base pages and by the sanitizer for `[Type]`
//! cross-references.

use crate::{
    config::TypeCollision, content::Pages, error::RegistryError, warning::Warning,
};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TypeRegistry {
    routes: BTreeMap<String, String>,
}

impl TypeRegistry {
    /// Register every page with a non-empty type, in route order.
    ///
    /// Collisions follow `policy`; under `First` and `Last` the loser is
    /// reported as a [`Warning::TypeCollision`].
    pub fn build(
        pages: &Pages,
        policy: TypeCollision,
        warnings: &mut Vec<Warning>,
    ) -> Result<Self, RegistryError> {
        let mut routes: BTreeMap<String, String> = BTreeMap::new();

        for (route, page) in pages {
            if page.type_name.is_empty() {
                continue;
            }

            let Some(existing) = routes.get_mut(&page.type_name) else {
                routes.insert(page.type_name.clone(), route.clone());
                continue;
            };

            let (kept, ignored) = match policy {
                TypeCollision::First => (existing.clone(), route.clone()),
                TypeCollision::Last => {
                    let ignored = std::mem::replace(existing, route.clone());
                    (route.clone(), ignored)
                }
                TypeCollision::Reject => {
                    return Err(RegistryError::TypeCollision {
                        type_name: page.type_name.clone(),
                        first: existing.clone(),
                        second: route.clone(),
                    });
                }
            };
            warnings.push(Warning::TypeCollision {
                type_name: page.type_name.clone(),
                kept,
                ignored,
            });
        }

        Ok(Self { routes })
    }

    /// Route of the page describing `type_name`.
    pub fn lookup(&self, type_name: &str) -> Option<&str> {
        self.routes.get(type_name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// `(type name, route)` pairs in type-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.routes.iter().map(|(t, r)| (t.as_str(), r.as_str()))
    }
}
