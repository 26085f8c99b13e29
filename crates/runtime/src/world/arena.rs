//! Arena population with deferred mutation.
//!
//! While a tick scans collisions the entity list must not change, so
//! removals and additions are queued and applied in one step afterwards:
//! removals first, then additions, each in queue order.

use std::fmt;

use game_core::{CreatureId, EggId, Flavor};
use serde::{Deserialize, Serialize};

/// Identifier of a plant or lure placed in the arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FixtureId(pub u32);

impl fmt::Display for FixtureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fixture#{}", self.0)
    }
}

/// Anything that can collide in the arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ArenaEntity {
    Creature(CreatureId),
    /// An egg waiting to be placed in the incubator.
    Egg(EggId),
    /// Fruit that hands its catalyst to the first creature touching it.
    Plant { id: FixtureId, flavor: Flavor },
    /// Bait that hands its catalyst to every creature touching it.
    Lure { id: FixtureId, flavor: Flavor },
}

impl ArenaEntity {
    pub fn creature(&self) -> Option<CreatureId> {
        match self {
            Self::Creature(id) => Some(*id),
            _ => None,
        }
    }

    /// Catalyst offered by a plant or lure.
    pub fn catalyst(&self) -> Option<Flavor> {
        match self {
            Self::Plant { flavor, .. } | Self::Lure { flavor, .. } => Some(*flavor),
            _ => None,
        }
    }

    /// Whether handing out the catalyst removes the entity.
    pub fn is_consumed_on_pickup(&self) -> bool {
        matches!(self, Self::Plant { .. })
    }
}

/// Which kind of fixture to spawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FixtureKind {
    Plant,
    Lure,
}

#[derive(Clone, Debug, Default)]
pub struct Arena {
    entities: Vec<ArenaEntity>,
    pending_add: Vec<ArenaEntity>,
    pending_remove: Vec<ArenaEntity>,
    last_fixture: u32,
}

impl Arena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entities in the order they entered the arena.
    pub fn entities(&self) -> &[ArenaEntity] {
        &self.entities
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn contains(&self, entity: &ArenaEntity) -> bool {
        self.entities.contains(entity)
    }

    pub fn creatures(&self) -> impl Iterator<Item = CreatureId> + '_ {
        self.entities.iter().filter_map(ArenaEntity::creature)
    }

    pub fn eggs(&self) -> impl Iterator<Item = EggId> + '_ {
        self.entities.iter().filter_map(|entity| match entity {
            ArenaEntity::Egg(id) => Some(*id),
            _ => None,
        })
    }

    /// Adds an entity right away. Only valid outside a collision scan.
    pub fn insert(&mut self, entity: ArenaEntity) -> bool {
        if self.contains(&entity) {
            return false;
        }
        self.entities.push(entity);
        true
    }

    /// Removes an entity right away. Only valid outside a collision scan.
    pub fn remove(&mut self, entity: &ArenaEntity) -> bool {
        let before = self.entities.len();
        self.entities.retain(|e| e != entity);
        self.entities.len() != before
    }

    /// Creates a plant or lure and adds it right away.
    pub fn spawn_fixture(&mut self, kind: FixtureKind, flavor: Flavor) -> ArenaEntity {
        self.last_fixture += 1;
        let id = FixtureId(self.last_fixture);
        let entity = match kind {
            FixtureKind::Plant => ArenaEntity::Plant { id, flavor },
            FixtureKind::Lure => ArenaEntity::Lure { id, flavor },
        };
        self.entities.push(entity);
        entity
    }

    pub fn defer_add(&mut self, entity: ArenaEntity) {
        self.pending_add.push(entity);
    }

    pub fn defer_remove(&mut self, entity: ArenaEntity) {
        self.pending_remove.push(entity);
    }

    pub fn has_pending(&self) -> bool {
        !self.pending_add.is_empty() || !self.pending_remove.is_empty()
    }

    /// Applies queued removals, then queued additions. Returns how many
    /// entities actually left and joined.
    pub fn apply_pending(&mut self) -> (usize, usize) {
        let removals = std::mem::take(&mut self.pending_remove);
        let additions = std::mem::take(&mut self.pending_add);

        let removed = removals
            .iter()
            .filter(|entity| self.remove(entity))
            .count();
        let added = additions
            .into_iter()
            .filter(|entity| self.insert(*entity))
            .count();

        (removed, added)
    }
}
