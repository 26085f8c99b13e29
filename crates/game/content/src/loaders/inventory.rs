//! Starting inventory loader: owned creatures and stocked elixirs.

use std::collections::HashSet;
use std::path::Path;

use game_core::{CreatureId, Elixir, InventorySlot};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// An elixir placed in an inventory slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockedElixir {
    pub slot: InventorySlot,
    pub elixir: Elixir,
}

/// Inventory file structure for RON files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartingInventory {
    /// Roster creatures the player owns from the start.
    #[serde(default)]
    pub collection: Vec<CreatureId>,
    pub elixirs: Vec<StockedElixir>,
}

/// Loader for the starting inventory from RON files.
pub struct InventoryLoader;

impl InventoryLoader {
    pub fn load(path: &Path) -> LoadResult<StartingInventory> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parses an inventory; each slot and each elixir id may appear once.
    pub fn parse(content: &str) -> LoadResult<StartingInventory> {
        let inventory: StartingInventory = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse inventory RON: {}", e))?;

        let mut slots = HashSet::new();
        let mut ids = HashSet::new();
        for stocked in &inventory.elixirs {
            if !slots.insert(stocked.slot) {
                anyhow::bail!("Inventory slot {} is used twice", stocked.slot);
            }
            if !ids.insert(stocked.elixir.id) {
                anyhow::bail!("Elixir id {} is used twice", stocked.elixir.id);
            }
        }

        Ok(inventory)
    }
}
