//! Content factory for loading content from a data directory.

use std::path::{Path, PathBuf};

use game_core::{Creature, GameConfig, NurturePool};

use crate::loaders::{
    ConfigLoader, InventoryLoader, LoadResult, NurtureLoader, RosterLoader, StartingInventory,
    TablesLoader,
};
use crate::tables::ContentTables;

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── tables.toml
/// ├── nurture.toml
/// ├── roster.ron
/// └── inventory.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load game configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        ConfigLoader::load(&self.data_dir.join("config.toml"))
    }

    /// Load trait tables from `tables.toml`.
    pub fn load_tables(&self) -> LoadResult<ContentTables> {
        TablesLoader::load(&self.data_dir.join("tables.toml"))
    }

    /// Load nurture option pools from `nurture.toml`.
    pub fn load_nurture_pools(&self) -> LoadResult<Vec<NurturePool>> {
        NurtureLoader::load(&self.data_dir.join("nurture.toml"))
    }

    /// Load companions and bosses from `roster.ron`.
    pub fn load_roster(&self) -> LoadResult<Vec<Creature>> {
        RosterLoader::load(&self.data_dir.join("roster.ron"))
    }

    /// Load the starting elixirs from `inventory.ron`.
    pub fn load_inventory(&self) -> LoadResult<StartingInventory> {
        InventoryLoader::load(&self.data_dir.join("inventory.ron"))
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bundled_dir() -> ContentFactory {
        ContentFactory::new(concat!(env!("CARGO_MANIFEST_DIR"), "/data"))
    }

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }

    #[test]
    fn loads_every_file_from_the_data_dir() {
        let factory = bundled_dir();
        assert!(factory.load_config().is_ok());
        assert_eq!(factory.load_tables().unwrap(), crate::Bundled::tables().unwrap());
        assert_eq!(factory.load_nurture_pools().unwrap().len(), 4);
        assert!(!factory.load_roster().unwrap().is_empty());
        assert!(!factory.load_inventory().unwrap().elixirs.is_empty());
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = ContentFactory::new("/nonexistent/dragonkeep")
            .load_roster()
            .unwrap_err();
        assert!(err.to_string().contains("roster.ron"));
    }
}
