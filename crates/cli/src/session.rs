//! Content loading and runtime assembly shared by the subcommands.
use anyhow::{Context, Result, bail};
use game_content::{Bundled, ContentFactory, StartingInventory};
use game_core::Creature;
use runtime::{FileSaveRepository, OracleManager, Runtime, RuntimeConfig};

use crate::config::CliConfig;

/// Static content plus the data used to seed a fresh save.
pub struct Content {
    pub oracles: OracleManager,
    pub roster: Vec<Creature>,
    pub inventory: StartingInventory,
}

impl Content {
    pub fn load(config: &CliConfig) -> Result<Self> {
        match &config.data_dir {
            Some(dir) => {
                tracing::info!("Loading content from {}", dir.display());
                let factory = ContentFactory::new(dir);
                Ok(Self {
                    oracles: OracleManager::new(
                        factory.load_tables()?,
                        factory.load_nurture_pools()?,
                        factory.load_config()?,
                    ),
                    roster: factory.load_roster()?,
                    inventory: factory.load_inventory()?,
                })
            }
            None => Ok(Self {
                oracles: OracleManager::new(
                    Bundled::tables()?,
                    Bundled::nurture_pools()?,
                    Bundled::config()?,
                ),
                roster: Bundled::roster()?,
                inventory: Bundled::inventory()?,
            }),
        }
    }
}

pub fn repository(config: &CliConfig) -> Result<FileSaveRepository> {
    FileSaveRepository::new(&config.save_dir)
        .with_context(|| format!("Failed to open save dir {}", config.save_dir.display()))
}

/// Builds a runtime over an existing save.
pub fn open(config: &CliConfig) -> Result<Runtime> {
    let repository = repository(config)?;
    if !repository.exists() {
        bail!(
            "No save found in {}. Run `dragonkeep seed` first.",
            config.save_dir.display()
        );
    }
    let content = Content::load(config)?;

    Runtime::builder()
        .config(RuntimeConfig {
            incubator_slots: config.incubator_slots,
            seed: config.seed,
        })
        .oracles(content.oracles)
        .repository(repository)
        .build()
        .context("Failed to build runtime")
}
