//! The save document and the mutations both backends apply to it.

use std::collections::{BTreeMap, BTreeSet};

use game_core::{Creature, CreatureId, Egg, EggId, Elixir, ElixirId, Hitpoints, InventorySlot};
use serde::{Deserialize, Serialize};

use crate::repository::{RepositoryError, Result};

/// Everything a save holds.
///
/// Backends differ only in where this value lives; the mutation rules are
/// shared so the in-memory and file repositories behave identically.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SaveData {
    pub creatures: BTreeMap<CreatureId, Creature>,
    pub collection: BTreeSet<CreatureId>,
    pub eggs: BTreeMap<EggId, Egg>,
    /// Last egg id handed out; ids are never reused.
    pub last_egg_id: u64,
    pub elixirs: BTreeMap<InventorySlot, Elixir>,
}

impl SaveData {
    pub fn roster(&self) -> Vec<Creature> {
        self.creatures
            .values()
            .filter(|creature| !creature.is_boss())
            .cloned()
            .collect()
    }

    pub fn bosses(&self) -> Vec<Creature> {
        self.creatures
            .values()
            .filter(|creature| creature.is_boss())
            .cloned()
            .collect()
    }

    pub fn eggs(&self) -> Vec<(EggId, Egg)> {
        self.eggs
            .iter()
            .map(|(id, egg)| (*id, egg.clone()))
            .collect()
    }

    pub fn collection(&self) -> Vec<CreatureId> {
        self.collection.iter().copied().collect()
    }

    pub fn inventory(&self) -> Vec<(InventorySlot, Elixir)> {
        self.elixirs
            .iter()
            .map(|(slot, elixir)| (*slot, elixir.clone()))
            .collect()
    }

    pub fn elixir_at(&self, slot: InventorySlot) -> Option<Elixir> {
        self.elixirs.get(&slot).cloned()
    }

    pub fn save_hitpoints(&mut self, id: CreatureId, hitpoints: Hitpoints) -> Result<()> {
        let creature = self
            .creatures
            .get_mut(&id)
            .ok_or_else(|| RepositoryError::not_found("creature", id))?;
        creature.hitpoints = Some(hitpoints);
        Ok(())
    }

    pub fn insert_egg(&mut self, egg: &Egg) -> EggId {
        self.last_egg_id += 1;
        let id = EggId(self.last_egg_id);
        self.eggs.insert(id, egg.clone());
        id
    }

    pub fn delete_egg(&mut self, id: EggId) -> Result<()> {
        self.eggs
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| RepositoryError::not_found("egg", id))
    }

    pub fn delete_elixir(&mut self, id: ElixirId) -> Result<()> {
        let slot = self
            .elixirs
            .iter()
            .find_map(|(slot, elixir)| (elixir.id == id).then_some(*slot))
            .ok_or_else(|| RepositoryError::not_found("elixir", id))?;
        self.elixirs.remove(&slot);
        Ok(())
    }

    pub fn insert_elixir(&mut self, slot: InventorySlot, elixir: &Elixir) -> Result<()> {
        if self.elixirs.contains_key(&slot) {
            return Err(RepositoryError::already_exists("elixir in", slot));
        }
        if self.elixirs.values().any(|stocked| stocked.id == elixir.id) {
            return Err(RepositoryError::already_exists("elixir", elixir.id));
        }
        self.elixirs.insert(slot, elixir.clone());
        Ok(())
    }

    pub fn insert_creature(&mut self, creature: &Creature) -> Result<()> {
        if self.creatures.contains_key(&creature.id) {
            return Err(RepositoryError::already_exists("creature", creature.id));
        }
        self.creatures.insert(creature.id, creature.clone());
        Ok(())
    }

    pub fn add_to_collection(&mut self, id: CreatureId) -> Result<()> {
        match self.creatures.get(&id) {
            Some(creature) if !creature.is_boss() => {
                self.collection.insert(id);
                Ok(())
            }
            _ => Err(RepositoryError::not_found("roster creature", id)),
        }
    }

    /// Consumes a hatched egg and adds the hatchling to the collection.
    ///
    /// Both ids are checked before anything changes, so an error leaves the
    /// save as it was.
    pub fn record_hatch(&mut self, egg: EggId, creature: CreatureId) -> Result<()> {
        if !self.eggs.contains_key(&egg) {
            return Err(RepositoryError::not_found("egg", egg));
        }
        if !self.creatures.get(&creature).is_some_and(|c| !c.is_boss()) {
            return Err(RepositoryError::not_found("roster creature", creature));
        }
        self.collection.insert(creature);
        self.eggs.remove(&egg);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{Allele, ColorValue, Flavor, Gender, Genotype, Role, SecondaryTraits, TraitName};

    fn creature(id: u32) -> Creature {
        let secondaries =
            SecondaryTraits::new(["Showy", "Drive", "Dark"].map(TraitName::new)).unwrap();
        Creature::new(
            CreatureId(id),
            format!("Creature {id}"),
            "Curious",
            secondaries,
            "Pampered",
            Gender::Male,
            Genotype::new(Allele::B, Allele::W),
        )
    }

    fn elixir(id: u64) -> Elixir {
        Elixir::new(
            ElixirId(id),
            Flavor::Sweet,
            "Curious",
            ["Showy", "Drive", "Dark"].map(TraitName::new),
            ColorValue::new(10, 20, 30),
        )
    }

    #[test]
    fn egg_ids_are_never_reused() {
        let mut save = SaveData::default();
        let egg = Egg::new(
            Genotype::new(Allele::W, Allele::W),
            (CreatureId(1), CreatureId(2)),
        );

        let first = save.insert_egg(&egg);
        save.delete_egg(first).unwrap();
        let second = save.insert_egg(&egg);

        assert_ne!(first, second);
        assert!(matches!(
            save.delete_egg(first),
            Err(RepositoryError::NotFound { .. })
        ));
    }

    #[test]
    fn elixirs_are_deleted_by_id() {
        let mut save = SaveData::default();
        save.insert_elixir(InventorySlot(2), &elixir(7)).unwrap();

        assert!(save.insert_elixir(InventorySlot(2), &elixir(8)).is_err());
        assert!(save.insert_elixir(InventorySlot(3), &elixir(7)).is_err());

        save.delete_elixir(ElixirId(7)).unwrap();
        assert_eq!(save.elixir_at(InventorySlot(2)), None);
    }

    #[test]
    fn bosses_cannot_join_the_collection() {
        let mut save = SaveData::default();
        save.insert_creature(&creature(1)).unwrap();
        save.insert_creature(&creature(2).with_role(Role::Boss { tier: 1 }))
            .unwrap();

        save.add_to_collection(CreatureId(1)).unwrap();
        save.add_to_collection(CreatureId(1)).unwrap();
        assert!(save.add_to_collection(CreatureId(2)).is_err());
        assert!(save.add_to_collection(CreatureId(3)).is_err());

        assert_eq!(save.collection(), vec![CreatureId(1)]);
        assert_eq!(save.roster().len(), 1);
        assert_eq!(save.bosses().len(), 1);
    }

    #[test]
    fn rejected_hatch_changes_nothing() {
        let mut save = SaveData::default();
        save.insert_creature(&creature(1)).unwrap();
        save.insert_creature(&creature(2).with_role(Role::Boss { tier: 1 }))
            .unwrap();
        let egg = save.insert_egg(&Egg::new(
            Genotype::new(Allele::W, Allele::W),
            (CreatureId(1), CreatureId(1)),
        ));
        let before = save.clone();

        assert!(save.record_hatch(EggId(99), CreatureId(1)).is_err());
        assert!(save.record_hatch(egg, CreatureId(2)).is_err());
        assert!(save.record_hatch(egg, CreatureId(3)).is_err());
        assert_eq!(save, before);

        save.record_hatch(egg, CreatureId(1)).unwrap();
        assert_eq!(save.collection(), vec![CreatureId(1)]);
        assert!(save.eggs().is_empty());
    }
}
