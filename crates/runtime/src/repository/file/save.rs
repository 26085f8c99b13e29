//! File-based SaveRepository implementation.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use game_core::{Creature, CreatureId, Egg, EggId, Elixir, ElixirId, Hitpoints, InventorySlot};

use crate::repository::{RepositoryError, Result, SaveData, SaveRepository};

/// File-based implementation of SaveRepository.
///
/// The whole save is one bincode document, `save.bin`. Every write reads the
/// current document, applies the change and replaces the file through a
/// temp file and an atomic rename, so a failed write leaves the previous
/// save intact.
pub struct FileSaveRepository {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileSaveRepository {
    pub const FILE_NAME: &'static str = "save.bin";

    /// Create a file-based repository rooted at `base_dir`.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref();
        fs::create_dir_all(base_dir).map_err(RepositoryError::Io)?;
        Ok(Self {
            path: base_dir.join(Self::FILE_NAME),
            write_lock: Mutex::new(()),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether a save document has been written yet.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Reads the save document; a missing file is an empty save.
    pub fn load(&self) -> Result<SaveData> {
        if !self.path.exists() {
            return Ok(SaveData::default());
        }

        let bytes = fs::read(&self.path).map_err(RepositoryError::Io)?;
        let save: SaveData = bincode::deserialize(&bytes)
            .map_err(|e| RepositoryError::Serialization(e.to_string()))?;

        tracing::debug!(
            "Loaded save ({} creatures, {} eggs) from {}",
            save.creatures.len(),
            save.eggs.len(),
            self.path.display()
        );

        Ok(save)
    }

    fn store(&self, save: &SaveData) -> Result<()> {
        let temp_path = self.path.with_extension("bin.tmp");

        let bytes =
            bincode::serialize(save).map_err(|e| RepositoryError::Serialization(e.to_string()))?;

        fs::write(&temp_path, bytes).map_err(RepositoryError::Io)?;
        fs::rename(&temp_path, &self.path).map_err(RepositoryError::Io)?;

        tracing::debug!("Saved save to {}", self.path.display());

        Ok(())
    }

    fn read<T>(&self, f: impl FnOnce(&SaveData) -> T) -> Result<T> {
        Ok(f(&self.load()?))
    }

    fn write<T>(&self, f: impl FnOnce(&mut SaveData) -> Result<T>) -> Result<T> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        let mut save = self.load()?;
        let value = f(&mut save)?;
        self.store(&save)?;
        Ok(value)
    }
}

impl SaveRepository for FileSaveRepository {
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
