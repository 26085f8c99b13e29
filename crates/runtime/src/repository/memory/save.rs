//! In-memory SaveRepository implementation for tests and local runs.

use std::sync::RwLock;

use game_core::{Creature, CreatureId, Egg, EggId, Elixir, ElixirId, Hitpoints, InventorySlot};

use crate::repository::{RepositoryError, Result, SaveData, SaveRepository};

/// In-memory implementation of SaveRepository.
pub struct InMemorySaveRepository {
    save: RwLock<SaveData>,
}

impl InMemorySaveRepository {
    /// Create a new empty in-memory repository.
    pub fn new() -> Self {
        Self::with_save(SaveData::default())
    }

    /// Create from an existing save document.
    pub fn with_save(save: SaveData) -> Self {
        Self {
            save: RwLock::new(save),
        }
    }

    /// Copy of the whole save document.
    pub fn snapshot(&self) -> Result<SaveData> {
        self.read(SaveData::clone)
    }

    fn read<T>(&self, f: impl FnOnce(&SaveData) -> T) -> Result<T> {
        let save = self
            .save
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(f(&save))
    }

    fn write<T>(&self, f: impl FnOnce(&mut SaveData) -> Result<T>) -> Result<T> {
        let mut save = self
            .save
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        f(&mut save)
    }
}

impl Default for InMemorySaveRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl SaveRepository for InMemorySaveRepository {
    fn load_roster(&self) -> Result<Vec<Creature>> {
        self.read(SaveData::roster)
    }

    fn load_bosses(&self) -> Result<Vec<Creature>> {
        self.read(SaveData::bosses)
    }

    fn load_eggs(&self) -> Result<Vec<(EggId, Egg)>> {
        self.read(SaveData::eggs)
    }

    fn load_collection(&self) -> Result<Vec<CreatureId>> {
        self.read(SaveData::collection)
    }

    fn save_hitpoints(&self, id: CreatureId, hitpoints: Hitpoints) -> Result<()> {
        self.write(|save| save.save_hitpoints(id, hitpoints))
    }

    fn insert_egg(&self, egg: &Egg) -> Result<EggId> {
        self.write(|save| Ok(save.insert_egg(egg)))
    }

    fn delete_egg(&self, id: EggId) -> Result<()> {
        self.write(|save| save.delete_egg(id))
    }

    fn load_elixir_at_slot(&self, slot: InventorySlot) -> Result<Option<Elixir>> {
        self.read(|save| save.elixir_at(slot))
    }

    fn load_inventory(&self) -> Result<Vec<(InventorySlot, Elixir)>> {
        self.read(SaveData::inventory)
    }

    fn delete_elixir(&self, id: ElixirId) -> Result<()> {
        self.write(|save| save.delete_elixir(id))
    }

    fn insert_elixir(&self, slot: InventorySlot, elixir: &Elixir) -> Result<()> {
        self.write(|save| save.insert_elixir(slot, elixir))
    }

    fn insert_creature(&self, creature: &Creature) -> Result<()> {
        self.write(|save| save.insert_creature(creature))
    }

    fn add_to_collection(&self, id: CreatureId) -> Result<()> {
        self.write(|save| save.add_to_collection(id))
    }

    fn record_hatch(&self, egg: EggId, creature: CreatureId) -> Result<()> {
        self.write(|save| save.record_hatch(egg, creature))
    }
}
