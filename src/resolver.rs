//! Extension resolver.
//!
//! Pages declaring `extends` are resolved through a FIFO worklist:
//!
//! ```text
//! pop page P ──► base route = registry[P.extends]
//!                   │
//!        ┌──────────┼─────────────────────────┐
//!        ▼          ▼                         ▼
//!   not found    base pending            base ready
//!   (settle as   (push P back,           (merge every ancestor layer,
//!   unresolved)   wait for base)          oldest first, into P)
//! ```
//!
//! A base is ready once it declares no `extends` or is settled (resolved or
//! unresolved), so multi-level chains compose in dependency order no matter
//! how they were declared. When every queued page has been deferred once
//! since the last merge, nothing can progress anymore: the remaining pages
//! sit on an extension cycle and the pass fails.
//!
//! # Merge
//!
//! For each ancestor layer `A` of `P`:
//! - functions `P` doesn't declare are copied into `P.base_functions[A]`;
//!   declared ones fully override.
//! - properties `P` doesn't declare are copied into `P.base_properties[A]`;
//!   declared ones inherit field by field ([`Property::inherit_from`]).

use crate::{
    content::Pages,
    error::ResolveError,
    log,
    page::{Function, Page, Property, Resolution},
    registry::TypeRegistry,
    warning::Warning,
};
use std::collections::VecDeque;

/// Counts reported after a successful resolution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolveSummary {
    pub resolved: usize,
    pub unresolved: usize,
}

/// Members contributed by one ancestor.
struct Layer {
    type_name: String,
    functions: Vec<Function>,
    properties: Vec<Property>,
}

impl Layer {
    fn of(page: &Page) -> Self {
        Self {
            type_name: page.type_name.clone(),
            functions: page.functions.clone(),
            properties: page.properties.clone(),
        }
    }
}

/// Resolve every page with a non-empty `extends`.
pub fn resolve_extensions(
    pages: &mut Pages,
    registry: &TypeRegistry,
    warnings: &mut Vec<Warning>,
) -> Result<ResolveSummary, ResolveError> {
    let mut queue: VecDeque<String> = VecDeque::new();
    for (route, page) in pages.iter_mut() {
        if !page.extends.is_empty() {
            page.resolution = Resolution::Pending;
            queue.push_back(route.clone());
        }
    }

    let mut summary = ResolveSummary::default();
    // deferrals since the last settled page
    let mut stalled = 0;

    while let Some(route) = queue.pop_front() {
        let Some(page) = pages.get(&route) else {
            continue;
        };

        let base_route = registry
            .lookup(&page.extends)
            .filter(|base| pages.contains_key(*base))
            .map(str::to_owned);

        let Some(base_route) = base_route else {
            warnings.push(Warning::UnresolvedBase {
                route: route.clone(),
                type_name: page.type_name.clone(),
                extends: page.extends.clone(),
            });
            if let Some(page) = pages.get_mut(&route) {
                page.resolution = Resolution::Unresolved;
            }
            summary.unresolved += 1;
            stalled = 0;
            continue;
        };

        if !pages[&base_route].ready_as_base() {
            queue.push_back(route);
            stalled += 1;
            if stalled >= queue.len() {
                return Err(cycle_error(pages, &queue));
            }
            continue;
        }

        let layers = ancestor_layers(pages, &base_route);
        if let Some(page) = pages.get_mut(&route) {
            for layer in layers {
                merge_layer(page, layer);
            }
            page.base = Some(base_route);
            page.resolution = Resolution::Resolved;
        }
        summary.resolved += 1;
        stalled = 0;
    }

    log!(
        "resolve";
        "{} extensions resolved, {} unresolved",
        summary.resolved,
        summary.unresolved
    );
    Ok(summary)
}

/// Layers of `base_route` and all its resolved ancestors, oldest first.
fn ancestor_layers(pages: &Pages, base_route: &str) -> Vec<Layer> {
    let mut layers = Vec::new();
    let mut next = Some(base_route);

    // base links always point at pages settled earlier, so the chain ends;
    // the bound only guards against a hand-built inconsistent map
    while let Some(route) = next.take() {
        if layers.len() > pages.len() {
            break;
        }
        let Some(page) = pages.get(route) else {
            break;
        };
        layers.push(Layer::of(page));
        next = page.base.as_deref();
    }

    layers.reverse();
    layers
}

fn merge_layer(page: &mut Page, layer: Layer) {
    for function in layer.functions {
        if page.function(&function.name).is_none() {
            page.base_functions
                .entry(layer.type_name.clone())
                .or_default()
                .push(function);
        }
    }

    for property in layer.properties {
        match page.properties.iter_mut().find(|p| p.name == property.name) {
            Some(own) => own.inherit_from(&property),
            None => page
                .base_properties
                .entry(layer.type_name.clone())
                .or_default()
                .push(property),
        }
    }
}

fn cycle_error(pages: &Pages, stuck: &VecDeque<String>) -> ResolveError {
    let mut types: Vec<String> = stuck
        .iter()
        .map(|route| match pages.get(route) {
            Some(page) if !page.type_name.is_empty() => page.type_name.clone(),
            _ => route.clone(),
        })
        .collect();
    types.sort();
    types.dedup();
    ResolveError::CyclicExtension { types }
}
