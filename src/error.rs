//! Errors that abort a resolution pass.
//!
//! Problems local to a single page (decode failures, missing bases,
//! colliding type names) never abort a pass; they are collected as
//! [`Warning`](crate::warning::Warning)s on the resolved model instead.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("content directory `{}` is not accessible", .path.display())]
    ContentRoot {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("content directory `{}` is not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("failed to walk content directory")]
    Walk(#[from] walkdir::Error),
}

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("type `{type_name}` is declared by both `{first}` and `{second}`")]
    TypeCollision {
        type_name: String,
        first: String,
        second: String,
    },
}

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("cyclic extension between types: {}", .types.join(", "))]
    CyclicExtension { types: Vec<String> },
}

/// Any failure of a full pass.
#[derive(Debug, Error)]
pub enum PassError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),
}
