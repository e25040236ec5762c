//! Configuration management for `apiref.toml`.
//!
//! # Sections
//!
//! | Section       | Purpose                                       |
//! |---------------|-----------------------------------------------|
//! | `[content]`   | Descriptor tree location and file types       |
//! | `[resolve]`   | Type registry collision policy                |
//! | `[output]`    | JSON model output                             |
//! | `live`        | Re-run the pass on every `ModelHandle` access |
//!
//! # Example
//!
//! ```toml
//! live = true
//!
//! [content]
//! dir = "www"
//!
//! [resolve]
//! type_collision = "first"
//!
//! [output]
//! dir = "public"
//! ```

mod content;
pub mod defaults;
mod error;
mod output;
mod resolve;

pub use content::ContentConfig;
pub use error::ConfigError;
pub use output::OutputConfig;
pub use resolve::{ResolveConfig, TypeCollision};

use crate::cli::Cli;
use anyhow::{Result, bail};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Root configuration structure representing apiref.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct DocsConfig {
    /// Absolute path to the config file (set after loading)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root; relative paths are resolved against it.
    #[serde(skip)]
    #[educe(Default = PathBuf::from("./"))]
    pub root: PathBuf,

    /// Rebuild the model on every `ModelHandle::current` call instead of once.
    ///
    /// Only long-running library callers hold a handle; the `build` and
    /// `check` commands always run a single pass.
    #[serde(default = "defaults::r#false")]
    #[educe(Default = false)]
    pub live: bool,

    #[serde(default)]
    pub content: ContentConfig,

    #[serde(default)]
    pub resolve: ResolveConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl DocsConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Load the config named by the CLI, falling back to defaults when the
    /// file doesn't exist, then apply CLI overrides and validate.
    pub fn load(cli: &Cli) -> Result<Self> {
        let root = cli.root.as_deref().unwrap_or(Path::new("./"));
        let config_path = root.join(&cli.config);

        let mut config = if config_path.exists() {
            Self::from_path(&config_path)?
        } else {
            Self::default()
        };
        config.update_with_cli(cli);
        config.validate()?;
        Ok(config)
    }

    /// Update configuration with CLI arguments and anchor paths at the root.
    pub fn update_with_cli(&mut self, cli: &Cli) {
        Self::update_option(&mut self.content.dir, cli.content.as_ref());
        Self::update_option(&mut self.output.dir, cli.output.as_ref());

        let root = normalize_path(cli.root.as_deref().unwrap_or(Path::new("./")));
        self.config_path = normalize_path(&root.join(&cli.config));
        self.set_root(&root);
    }

    /// Set the project root and resolve content/output paths against it.
    pub fn set_root(&mut self, root: &Path) {
        self.content.dir = normalize_path(&root.join(&self.content.dir));
        self.output.dir = normalize_path(&root.join(&self.output.dir));
        self.root = root.to_path_buf();
    }

    /// Update config option if CLI value is provided
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.content.extensions.is_empty() {
            bail!(ConfigError::Validation(
                "[content.extensions] must have at least one element".into()
            ));
        }
        if self
            .content
            .extensions
            .iter()
            .any(|ext| ext.is_empty() || ext.starts_with('.'))
        {
            bail!(ConfigError::Validation(
                "[content.extensions] entries are bare extensions like \"yml\"".into()
            ));
        }
        Ok(())
    }
}

/// Normalize a path to absolute, using canonicalize if the path exists
fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir()
                .map(|cwd| cwd.join(path))
                .unwrap_or_else(|_| path.to_path_buf())
        }
    })
}
