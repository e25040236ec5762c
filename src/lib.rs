//! apiref - type inheritance resolution and content normalization for
//! API-reference sites.
//!
//! A pass turns a tree of YAML page descriptors into a [`model::SiteModel`]:
//! every page keyed by canonical route, `extends` chains merged into
//! per-ancestor inherited member lists, and free-form text rewritten into
//! render-ready markup with `[Type]` cross-references linked.

pub mod cli;
pub mod config;
pub mod content;
pub mod error;
pub mod handle;
pub mod logger;
pub mod model;
pub mod ordering;
pub mod output;
pub mod page;
pub mod registry;
pub mod resolver;
pub mod sanitize;
pub mod utils;
pub mod warning;
