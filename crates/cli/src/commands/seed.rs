//! Create a fresh save from the roster and starting inventory.
use anyhow::{Context, Result, bail};
use clap::Parser;

use crate::config::CliConfig;
use crate::session::{self, Content};

/// Create a new save
#[derive(Parser)]
pub struct Seed {
    /// Replace an existing save
    #[arg(short, long)]
    force: bool,
}

impl Seed {
    pub fn execute(self, config: &CliConfig) -> Result<()> {
        let repository = session::repository(config)?;
        if repository.exists() {
            if !self.force {
                bail!(
                    "A save already exists at {}. Use --force to replace it.",
                    repository.path().display()
                );
            }
            std::fs::remove_file(repository.path()).with_context(|| {
                format!("Failed to remove {}", repository.path().display())
            })?;
            tracing::info!("Removed previous save {}", repository.path().display());
        }

        let content = Content::load(config)?;
        runtime::seed_save(&repository, &content.roster, &content.inventory)
            .context("Failed to seed save")?;

        println!(
            "Seeded {} with {} creatures, {} owned, {} elixirs",
            repository.path().display(),
            content.roster.len(),
            content.inventory.collection.len(),
            content.inventory.elixirs.len()
        );
        Ok(())
    }
}
