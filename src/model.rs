//! The resolved site model and the pass that produces it.
//!
//! ```text
//! content dir ──► load ──► registry ──► resolve ──► sanitize ──► order ──► SiteModel
//! ```
//!
//! A model is immutable once built. Recoverable problems travel with it as
//! [`Warning`]s; anything fatal is a [`PassError`] and yields no model.

use crate::{
    config::{DocsConfig, TypeCollision},
    content::{Pages, load_pages},
    error::PassError,
    log,
    ordering::order_pages,
    page::Page,
    registry::TypeRegistry,
    resolver::resolve_extensions,
    sanitize::sanitize_pages,
    utils::route::clean_path,
    warning::Warning,
};

/// Route served when a request matches no page.
pub const NOT_FOUND_ROUTE: &str = "/404";

#[derive(Debug, Clone, Default)]
pub struct SiteModel {
    pages: Pages,
    registry: TypeRegistry,
    warnings: Vec<Warning>,
}

/// Outcome of mapping a request path onto the model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Lookup<'a> {
    Page(&'a Page),
    /// The path names a page but isn't canonical.
    Redirect(&'a str),
    /// No page; `fallback` is the `/404` page when one exists.
    NotFound { fallback: Option<&'a Page> },
}

impl SiteModel {
    /// Run a full pass over the configured content directory.
    pub fn build(config: &DocsConfig) -> Result<Self, PassError> {
        let loaded = load_pages(&config.content)?;
        Self::from_pages(loaded.pages, loaded.warnings, config.resolve.type_collision)
    }

    /// Run the pass over pages already loaded.
    pub fn from_pages(
        mut pages: Pages,
        mut warnings: Vec<Warning>,
        policy: TypeCollision,
    ) -> Result<Self, PassError> {
        let registry = TypeRegistry::build(&pages, policy, &mut warnings)?;
        resolve_extensions(&mut pages, &registry, &mut warnings)?;
        sanitize_pages(&mut pages, &registry);
        order_pages(&mut pages);
        pages.values_mut().for_each(Page::set_anchors);

        if !warnings.is_empty() {
            log!("warn"; "{} warnings during resolution", warnings.len());
        }
        Ok(Self {
            pages,
            registry,
            warnings,
        })
    }

    pub fn pages(&self) -> &Pages {
        &self.pages
    }

    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    pub fn page(&self, route: &str) -> Option<&Page> {
        self.pages.get(route)
    }

    /// The page a resolved page extends.
    pub fn base_of(&self, route: &str) -> Option<&Page> {
        let base = self.page(route)?.base.as_deref()?;
        self.page(base)
    }

    /// Route of the page documenting `type_name`.
    pub fn type_route(&self, type_name: &str) -> Option<&str> {
        self.registry.lookup(type_name)
    }

    /// Map a raw request path onto a page.
    ///
    /// `/` with no root page is a `NotFound` like any other path.
    pub fn lookup(&self, request_path: &str) -> Lookup<'_> {
        let route = clean_path(request_path);
        let Some((canonical, page)) = self.pages.get_key_value(route.as_str()) else {
            return Lookup::NotFound {
                fallback: self.page(NOT_FOUND_ROUTE),
            };
        };
        if request_path != canonical {
            return Lookup::Redirect(canonical);
        }
        Lookup::Page(page)
    }
}
