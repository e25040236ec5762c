//! `[content]` section configuration.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// `[content]` section in apiref.toml - where descriptors live.
///
/// # Example
/// ```toml
/// [content]
/// dir = "docs"
/// extensions = ["yml", "yaml"]
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct ContentConfig {
    /// Descriptor tree root.
    #[serde(default = "defaults::content::dir")]
    #[educe(Default = defaults::content::dir())]
    pub dir: PathBuf,

    /// Descriptor file extensions, compared case-insensitively.
    #[serde(default = "defaults::content::extensions")]
    #[educe(Default = defaults::content::extensions())]
    pub extensions: Vec<String>,
}

impl ContentConfig {
    /// Whether `path` is a descriptor file.
    pub fn is_descriptor(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                self.extensions
                    .iter()
                    .any(|allowed| allowed.eq_ignore_ascii_case(ext))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::super::DocsConfig;
    use super::*;

    #[test]
    fn test_content_config_defaults() {
        let config: DocsConfig = toml::from_str("").unwrap();
        assert_eq!(config.content.dir, PathBuf::from("content"));
        assert_eq!(config.content.extensions, vec!["yml"]);
    }

    #[test]
    fn test_content_config_custom() {
        let config: DocsConfig = toml::from_str(
            r#"
            [content]
            dir = "docs"
            extensions = ["yml", "yaml"]
        "#,
        )
        .unwrap();
        assert_eq!(config.content.dir, PathBuf::from("docs"));
        assert_eq!(config.content.extensions.len(), 2);
    }

    #[test]
    fn test_is_descriptor() {
        let content = ContentConfig::default();
        assert!(content.is_descriptor(Path::new("/www/Player.yml")));
        assert!(content.is_descriptor(Path::new("/www/Player.YML")));
        assert!(!content.is_descriptor(Path::new("/www/Player.yaml")));
        assert!(!content.is_descriptor(Path::new("/www/page.tmpl")));
        assert!(!content.is_descriptor(Path::new("/www/yml")));
    }

    #[test]
    fn test_unknown_field_rejection() {
        let result: Result<DocsConfig, _> = toml::from_str(
            r#"
            [content]
            directory = "docs"
        "#,
        );
        assert!(result.is_err());
    }
}
