//! Problems found during a pass that don't abort it.

use serde::Serialize;
use std::fmt;

/// A recoverable problem, collected alongside the resolved model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Warning {
    /// A descriptor failed to decode and became an error page.
    Decode { resource: String, message: String },

    /// An entry below the content root could not be read.
    Unreadable { path: String, message: String },

    /// Two descriptors normalize to the same route; `kept` replaced `replaced`.
    RouteCollision {
        route: String,
        kept: String,
        replaced: String,
    },

    /// Two pages declare the same type; only `kept` is registered.
    TypeCollision {
        type_name: String,
        kept: String,
        ignored: String,
    },

    /// `extends` names a type with no page.
    UnresolvedBase {
        route: String,
        type_name: String,
        extends: String,
    },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Decode { resource, message } => {
                write!(f, "`{resource}` failed to decode: {message}")
            }
            Self::Unreadable { path, message } => write!(f, "`{path}` is unreadable: {message}"),
            Self::RouteCollision {
                route,
                kept,
                replaced,
            } => write!(f, "`{kept}` replaces `{replaced}` at route `{route}`"),
            Self::TypeCollision {
                type_name,
                kept,
                ignored,
            } => write!(
                f,
                "type `{type_name}` declared at `{kept}` and `{ignored}`, keeping `{kept}`"
            ),
            Self::UnresolvedBase {
                route,
                type_name,
                extends,
            } => {
                let name = if type_name.is_empty() {
                    route
                } else {
                    type_name
                };
                write!(f, "`{name}` extends unknown type `{extends}`")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unresolved_base_display_prefers_type_name() {
        let warning = Warning::UnresolvedBase {
            route: "/ship".into(),
            type_name: "Ship".into(),
            extends: "Vehicle".into(),
        };
        assert_eq!(warning.to_string(), "`Ship` extends unknown type `Vehicle`");

        let warning = Warning::UnresolvedBase {
            route: "/ship".into(),
            type_name: String::new(),
            extends: "Vehicle".into(),
        };
        assert_eq!(warning.to_string(), "`/ship` extends unknown type `Vehicle`");
    }

    #[test]
    fn test_serializes_with_kind_tag() {
        let warning = Warning::TypeCollision {
            type_name: "Shape".into(),
            kept: "/shape".into(),
            ignored: "/z/shape".into(),
        };
        let json = serde_json::to_value(&warning).unwrap();
        assert_eq!(json["kind"], "type-collision");
        assert_eq!(json["type_name"], "Shape");
    }
}
