//! Shared access to the current site model.
//!
//! The model is replaced atomically as a whole generation, so readers never
//! observe a half-resolved state:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │              ModelHandle (ArcSwap<SiteModel>)        │
//! │                                                      │
//! │   reader ──► current() ──► Arc<SiteModel> (gen N)    │
//! │                                                      │
//! │   reload() ──► full pass ──┬─ ok ──► store gen N+1   │
//! │                            └─ err ─► keep gen N      │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! In live mode every [`ModelHandle::current`] call re-runs the pass first.

use crate::{config::DocsConfig, error::PassError, log, model::SiteModel};
use arc_swap::ArcSwap;
use std::sync::Arc;

pub struct ModelHandle {
    config: DocsConfig,
    model: ArcSwap<SiteModel>,
}

impl ModelHandle {
    /// Build the first generation. Fails when the initial pass fails.
    pub fn new(config: DocsConfig) -> Result<Self, PassError> {
        let model = SiteModel::build(&config)?;
        Ok(Self {
            config,
            model: ArcSwap::from_pointee(model),
        })
    }

    pub fn config(&self) -> &DocsConfig {
        &self.config
    }

    pub fn is_live(&self) -> bool {
        self.config.live
    }

    /// Current generation, rebuilt first in live mode.
    ///
    /// A failed live rebuild is logged and the previous generation served.
    pub fn current(&self) -> Arc<SiteModel> {
        if self.config.live
            && let Err(err) = self.reload()
        {
            log!("error"; "rebuild failed, serving previous model: {err}");
        }
        self.model.load_full()
    }

    /// Run a full pass and publish it as the new generation.
    ///
    /// On failure the current generation stays in place.
    pub fn reload(&self) -> Result<Arc<SiteModel>, PassError> {
        let model = Arc::new(SiteModel::build(&self.config)?);
        self.model.store(Arc::clone(&model));
        Ok(model)
    }
}
