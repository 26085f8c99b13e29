//! Content embedded in the binary.
//!
//! Same files as `crates/game/content/data/`, parsed with the regular
//! loaders, so a fresh install works without a data directory. These are
//! the only built-in copies of the tables and nurture pools.

use game_core::{Creature, GameConfig, NurturePool};

use crate::loaders::{
    ConfigLoader, InventoryLoader, LoadResult, NurtureLoader, RosterLoader, StartingInventory,
    TablesLoader,
};
use crate::tables::ContentTables;

const CONFIG: &str = include_str!("../../data/config.toml");
const TABLES: &str = include_str!("../../data/tables.toml");
const NURTURE: &str = include_str!("../../data/nurture.toml");
const ROSTER: &str = include_str!("../../data/roster.ron");
const INVENTORY: &str = include_str!("../../data/inventory.ron");

/// Accessors for the embedded content files.
pub struct Bundled;

impl Bundled {
    pub fn config() -> LoadResult<GameConfig> {
        ConfigLoader::parse(CONFIG)
    }

    pub fn tables() -> LoadResult<ContentTables> {
        TablesLoader::parse(TABLES)
    }

    pub fn nurture_pools() -> LoadResult<Vec<NurturePool>> {
        NurtureLoader::parse(NURTURE)
    }

    pub fn roster() -> LoadResult<Vec<Creature>> {
        RosterLoader::parse(ROSTER)
    }

    pub fn inventory() -> LoadResult<StartingInventory> {
        InventoryLoader::parse(INVENTORY)
    }
}
