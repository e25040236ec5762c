//! Canonical routes.
//!
//! A route is the lookup key of a page, derived from its descriptor path:
//!
//! | Descriptor path       | Route       |
//! |-----------------------|-------------|
//! | `/Foo/Bar.yml`        | `/foo/bar`  |
//! | `/Foo/index.yml`      | `/foo`      |
//! | `/index.yml`          | `/`         |
//!
//! The same normalization applies to request paths, so a request is served
//! when its path is already canonical and redirected otherwise.

use std::path::{Component, Path};

/// Clean a path, lowercase it, drop the file extension, and collapse a
/// trailing `/index` segment.
pub fn clean_path(path: &str) -> String {
    let rooted = path.starts_with('/');

    let mut segments: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                // `/..` stays at the root, a relative path keeps leading `..`
                if segments.last().is_some_and(|s| *s != "..") {
                    segments.pop();
                } else if !rooted {
                    segments.push("..");
                }
            }
            s => segments.push(s),
        }
    }

    let mut cleaned = segments.join("/").to_lowercase();
    if rooted {
        cleaned.insert(0, '/');
    }

    if let Some(dot) = extension_start(&cleaned) {
        cleaned.truncate(dot);
    }

    if let Some(stripped) = cleaned.strip_suffix("/index") {
        cleaned.truncate(stripped.len());
    }

    if cleaned.is_empty() {
        cleaned.push('/');
    }
    cleaned
}

/// Byte offset of the extension dot within the last segment.
fn extension_start(path: &str) -> Option<usize> {
    let segment_start = path.rfind('/').map_or(0, |i| i + 1);
    path[segment_start..].rfind('.').map(|i| segment_start + i)
}

/// Descriptor path relative to the content root, `/`-separated with a
/// leading slash (e.g. `/Foo/Bar.yml`).
///
/// Returns `None` when `path` is not inside `root`.
pub fn resource_path(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let mut resource = String::new();
    for component in relative.components() {
        if let Component::Normal(name) = component {
            resource.push('/');
            resource.push_str(&name.to_string_lossy());
        }
    }
    if resource.is_empty() {
        resource.push('/');
    }
    Some(resource)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_clean_path_descriptor_paths() {
        assert_eq!(clean_path("/Foo/Bar.yml"), "/foo/bar");
        assert_eq!(clean_path("/Foo/index.yml"), "/foo");
        assert_eq!(clean_path("/index.yml"), "/");
    }

    #[test]
    fn test_clean_path_request_paths() {
        assert_eq!(clean_path("/"), "/");
        assert_eq!(clean_path(""), "/");
        assert_eq!(clean_path("/player"), "/player");
        assert_eq!(clean_path("/Player/"), "/player");
        assert_eq!(clean_path("//a//./b/"), "/a/b");
        assert_eq!(clean_path("/a/../b"), "/b");
        assert_eq!(clean_path("/../a"), "/a");
    }

    #[test]
    fn test_clean_path_extension_only_in_last_segment() {
        assert_eq!(clean_path("/v1.2/Shape.yml"), "/v1.2/shape");
        assert_eq!(clean_path("/v1.2/shape"), "/v1.2/shape");
    }

    #[test]
    fn test_clean_path_index_must_be_whole_segment() {
        assert_eq!(clean_path("/reindex.yml"), "/reindex");
        assert_eq!(clean_path("/Index/Page.yml"), "/index/page");
    }

    #[test]
    fn test_clean_path_is_idempotent() {
        for path in ["/Foo/Bar.yml", "/Foo/index.yml", "/index.yml", "/a/b/"] {
            let once = clean_path(path);
            assert_eq!(clean_path(&once), once);
        }
    }

    #[test]
    fn test_resource_path() {
        let root = PathBuf::from("/www/content");
        assert_eq!(
            resource_path(&root, &root.join("Foo").join("Bar.yml")).as_deref(),
            Some("/Foo/Bar.yml")
        );
        assert_eq!(resource_path(&root, Path::new("/elsewhere/x.yml")), None);
    }
}
