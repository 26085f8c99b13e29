//! Static content and randomness handed to the rules.
//!
//! Content is immutable at runtime and shared through [`OracleManager`];
//! dynamic state lives in repositories or the [`World`](crate::World).
mod rng;

use std::fmt;
use std::sync::Arc;

use game_content::{Bundled, ContentTables};
use game_core::{GameConfig, NurturePool};

use crate::api::{Result, RuntimeError};

pub use rng::RandRng;

/// Bundles every piece of static content the runtime consults.
#[derive(Clone, Debug)]
pub struct OracleManager {
    pub(crate) tables: Arc<ContentTables>,
    pub(crate) nurture_pools: Arc<[NurturePool]>,
    pub(crate) config: Arc<GameConfig>,
}

impl OracleManager {
    pub fn new(tables: ContentTables, nurture_pools: Vec<NurturePool>, config: GameConfig) -> Self {
        Self {
            tables: Arc::new(tables),
            nurture_pools: nurture_pools.into(),
            config: Arc::new(config),
        }
    }

    /// Content embedded in the binary: tables, nurture pools and balance.
    pub fn bundled() -> Result<Self> {
        Ok(Self::new(
            Bundled::tables().map_err(content_error)?,
            Bundled::nurture_pools().map_err(content_error)?,
            Bundled::config().map_err(content_error)?,
        ))
    }

    pub fn tables(&self) -> &ContentTables {
        &self.tables
    }

    pub fn nurture_pools(&self) -> &[NurturePool] {
        &self.nurture_pools
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}

fn content_error(error: impl fmt::Display) -> RuntimeError {
    RuntimeError::Content(format!("{error:#}"))
}
