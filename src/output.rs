//! JSON hand-off of a resolved model to the renderer.
//!
//! ```text
//! <output>/
//! ├── index.json            # page at `/`
//! ├── shape/index.json      # page at `/shape`
//! ├── types.json            # type name → route
//! └── warnings.json
//! ```

use crate::{config::OutputConfig, log, model::SiteModel, page::Page};
use anyhow::{Context, Result};
use serde::Serialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

const PAGE_FILE: &str = "index.json";
const TYPES_FILE: &str = "types.json";
const WARNINGS_FILE: &str = "warnings.json";

/// A page as handed to the renderer: every page field plus the values
/// templates derive from them.
#[derive(Serialize)]
#[serde(rename_all = "kebab-case")]
struct PageDocument<'a> {
    #[serde(flatten)]
    page: &'a Page,
    display_title: &'a str,
    not_creatable_object: bool,
}

impl<'a> From<&'a Page> for PageDocument<'a> {
    fn from(page: &'a Page) -> Self {
        Self {
            page,
            display_title: page.display_title(),
            not_creatable_object: page.is_not_creatable_object(),
        }
    }
}

/// Write every page plus the registry and warnings. Returns the page count.
pub fn write_model(model: &SiteModel, output: &OutputConfig, clean: bool) -> Result<usize> {
    let dir = output.dir.as_path();
    if clean && dir.exists() {
        fs::remove_dir_all(dir)
            .with_context(|| format!("Failed to clear output directory: {}", dir.display()))?;
    }
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;

    for (route, page) in model.pages() {
        write_json(&page_file(dir, route), &PageDocument::from(page), output.pretty)?;
    }
    write_json(&dir.join(TYPES_FILE), model.registry(), output.pretty)?;
    write_json(&dir.join(WARNINGS_FILE), model.warnings(), output.pretty)?;

    let count = model.pages().len();
    log!("build"; "{count} pages written to {}", dir.display());
    Ok(count)
}

/// `<dir>/<route>/index.json`
fn page_file(dir: &Path, route: &str) -> PathBuf {
    let relative = route.trim_start_matches('/');
    if relative.is_empty() {
        dir.join(PAGE_FILE)
    } else {
        dir.join(relative).join(PAGE_FILE)
    }
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T, pretty: bool) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    let json = if pretty {
        serde_json::to_vec_pretty(value)?
    } else {
        serde_json::to_vec(value)?
    };
    fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))
}
