//! Content loader: descriptor tree → route-keyed pages.
//!
//! Walks the content directory in sorted order, decodes every descriptor
//! into a [`Page`] and keys it by its canonical route. A descriptor that
//! fails to read or decode becomes a placeholder error page; only an
//! inaccessible content root aborts loading.

use crate::{
    config::ContentConfig,
    error::LoadError,
    log,
    page::Page,
    utils::route::{clean_path, resource_path},
    warning::Warning,
};
use std::{collections::BTreeMap, fs, path::Path};
use walkdir::WalkDir;

/// Pages keyed by canonical route.
pub type Pages = BTreeMap<String, Page>;

/// Output of the loader.
#[derive(Debug, Default)]
pub struct LoadedPages {
    pub pages: Pages,
    pub warnings: Vec<Warning>,
}

/// Load every descriptor below `content.dir`.
pub fn load_pages(content: &ContentConfig) -> Result<LoadedPages, LoadError> {
    let root = content.dir.as_path();
    let metadata = fs::metadata(root).map_err(|source| LoadError::ContentRoot {
        path: root.to_path_buf(),
        source,
    })?;
    if !metadata.is_dir() {
        return Err(LoadError::NotADirectory(root.to_path_buf()));
    }

    let mut loaded = LoadedPages::default();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if err.depth() == 0 => return Err(err.into()),
            Err(err) => {
                let path = err
                    .path()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default();
                loaded.warnings.push(Warning::Unreadable {
                    path,
                    message: err.to_string(),
                });
                continue;
            }
        };

        let path = entry.path();
        // `Path::is_file` follows symlinks, `DirEntry::file_type` doesn't
        if !path.is_file() || !content.is_descriptor(path) {
            continue;
        }
        let Some(resource) = resource_path(root, path) else {
            continue;
        };

        let page = read_page(path, &resource, &mut loaded.warnings);
        insert_page(&mut loaded, page);
    }

    log!("load"; "{} pages from {}", loaded.pages.len(), root.display());
    Ok(loaded)
}

/// Read and decode one descriptor, degrading to an error page.
fn read_page(path: &Path, resource: &str, warnings: &mut Vec<Warning>) -> Page {
    let decoded = fs::read_to_string(path)
        .map_err(|err| err.to_string())
        .and_then(|text| decode_page(&text).map_err(|err| err.to_string()));

    let mut page = match decoded {
        Ok(page) => page,
        Err(message) => {
            warnings.push(Warning::Decode {
                resource: resource.to_owned(),
                message: message.clone(),
            });
            Page::error(message)
        }
    };
    page.resource_path = resource.to_owned();
    page
}

/// Decode descriptor text. An empty document is an empty page.
pub fn decode_page(text: &str) -> Result<Page, serde_yaml::Error> {
    if text.trim().is_empty() {
        return Ok(Page::default());
    }
    serde_yaml::from_str(text)
}

fn insert_page(loaded: &mut LoadedPages, page: Page) {
    let route = clean_path(&page.resource_path);
    let kept = page.resource_path.clone();
    if let Some(replaced) = loaded.pages.insert(route.clone(), page) {
        loaded.warnings.push(Warning::RouteCollision {
            route,
            kept,
            replaced: replaced.resource_path,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn content_config(dir: &Path) -> ContentConfig {
        ContentConfig {
            dir: dir.to_path_buf(),
            ..Default::default()
        }
    }

    fn write(root: &Path, relative: &str, text: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, text).unwrap();
    }

    #[test]
    fn test_load_routes_and_resource_paths() {
        crate::logger::set_quiet(true);
        let dir = tempdir().unwrap();
        write(dir.path(), "index.yml", "title: Home");
        write(dir.path(), "Reference/Player.yml", "type: Player");
        write(dir.path(), "Reference/index.yml", "title: Reference");
        write(dir.path(), "page.tmpl", "{{ .Title }}");

        let loaded = load_pages(&content_config(dir.path())).unwrap();
        let routes: Vec<_> = loaded.pages.keys().map(String::as_str).collect();
        assert_eq!(routes, vec!["/", "/reference", "/reference/player"]);
        assert_eq!(
            loaded.pages["/reference/player"].resource_path,
            "/Reference/Player.yml"
        );
        assert_eq!(loaded.pages["/"].title, "Home");
        assert!(loaded.warnings.is_empty());
    }

    #[test]
    fn test_malformed_file_becomes_error_page() {
        crate::logger::set_quiet(true);
        let dir = tempdir().unwrap();
        write(dir.path(), "good.yml", "type: Good");
        write(dir.path(), "bad.yml", "type: [unclosed");

        let loaded = load_pages(&content_config(dir.path())).unwrap();
        assert_eq!(loaded.pages.len(), 2);
        assert_eq!(loaded.pages["/good"].type_name, "Good");

        let bad = &loaded.pages["/bad"];
        assert_eq!(bad.title, "Error");
        assert!(!bad.description.is_empty());
        assert_eq!(bad.resource_path, "/bad.yml");
        assert!(matches!(
            &loaded.warnings[..],
            [Warning::Decode { resource, .. }] if resource == "/bad.yml"
        ));
    }

    #[test]
    fn test_wrong_field_type_becomes_error_page() {
        crate::logger::set_quiet(true);
        let dir = tempdir().unwrap();
        write(dir.path(), "shape.yml", "type: Shape\ncreatable: [1, 2]");

        let loaded = load_pages(&content_config(dir.path())).unwrap();
        assert_eq!(loaded.pages["/shape"].title, "Error");
    }

    #[test]
    fn test_empty_file_is_empty_page() {
        crate::logger::set_quiet(true);
        let dir = tempdir().unwrap();
        write(dir.path(), "empty.yml", "  \n");

        let loaded = load_pages(&content_config(dir.path())).unwrap();
        let page = &loaded.pages["/empty"];
        assert!(page.title.is_empty());
        assert!(loaded.warnings.is_empty());
    }

    #[test]
    fn test_route_collision_keeps_later_file() {
        crate::logger::set_quiet(true);
        let dir = tempdir().unwrap();
        write(dir.path(), "a/index.yml", "title: index");
        write(dir.path(), "a.yml", "title: flat");

        let loaded = load_pages(&content_config(dir.path())).unwrap();
        assert_eq!(loaded.pages.len(), 1);
        // sorted depth-first walk visits `a/index.yml` before `a.yml`
        assert_eq!(loaded.pages["/a"].title, "flat");
        assert!(matches!(
            &loaded.warnings[..],
            [Warning::RouteCollision { route, .. }] if route == "/a"
        ));
    }

    #[test]
    fn test_missing_root_is_fatal() {
        let missing = PathBuf::from("/definitely/not/here/apiref");
        let err = load_pages(&content_config(&missing)).unwrap_err();
        assert!(matches!(err, LoadError::ContentRoot { .. }));
    }

    #[test]
    fn test_root_must_be_directory() {
        let dir = tempdir().unwrap();
        write(dir.path(), "file.yml", "");
        let err = load_pages(&content_config(&dir.path().join("file.yml"))).unwrap_err();
        assert!(matches!(err, LoadError::NotADirectory(_)));
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_subdirectory_is_a_warning() {
        use std::os::unix::fs::PermissionsExt;

        crate::logger::set_quiet(true);
        let dir = tempdir().unwrap();
        write(dir.path(), "good.yml", "type: Good");
        write(dir.path(), "locked/hidden.yml", "type: Hidden");
        let locked = dir.path().join("locked");
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        // permission bits don't bind a privileged user
        if fs::read_dir(&locked).is_ok() {
            fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
            return;
        }

        let loaded = load_pages(&content_config(dir.path()));
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        let loaded = loaded.unwrap();

        assert_eq!(loaded.pages.len(), 1);
        assert!(loaded.pages.contains_key("/good"));
        assert!(matches!(
            &loaded.warnings[..],
            [Warning::Unreadable { path, .. }] if path.ends_with("locked")
        ));
    }
}
