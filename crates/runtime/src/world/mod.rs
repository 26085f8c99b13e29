//! In-memory game state passed explicitly to every operation.
//!
//! The world mirrors what the repository holds plus the state that only
//! lives for a session (arena population, incubator timers, rejected pairs).
//! It never talks to persistence itself: the [`Runtime`](crate::Runtime)
//! persists a change first and then applies it here.

mod arena;
mod incubator;

use std::collections::{BTreeMap, BTreeSet, HashSet};

use game_core::{
    BreedingLedger, Creature, CreatureId, Egg, EggId, Flavor, GameConfig, Hitpoints, PairCheck,
    PairKey, RngOracle, TablesOracle, Tick, breed,
};

pub use arena::{Arena, ArenaEntity, FixtureId, FixtureKind};
pub use incubator::{ExpiredTimer, Incubator, IncubatorSlot, SlotState};

use crate::events::{BreedingEvent, Event};

/// A change planned during the collision scan, not yet persisted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum ArenaOp {
    Breed {
        parents: (CreatureId, CreatureId),
        egg: Egg,
    },
    PickUp {
        creature: CreatureId,
        flavor: Flavor,
        fixture: ArenaEntity,
    },
}

#[derive(Clone, Debug)]
pub struct World {
    tick: Tick,
    /// Companion roster, sorted by id.
    roster: Vec<Creature>,
    /// Bosses, sorted by id.
    bosses: Vec<Creature>,
    collection: BTreeSet<CreatureId>,
    eggs: BTreeMap<EggId, Egg>,
    arena: Arena,
    incubator: Incubator,
    ledger: BreedingLedger,
}

impl World {
    /// Builds a world from loaded save data. Owned creatures and eggs all
    /// start out in the arena.
    pub fn new(
        mut roster: Vec<Creature>,
        mut bosses: Vec<Creature>,
        collection: impl IntoIterator<Item = CreatureId>,
        eggs: impl IntoIterator<Item = (EggId, Egg)>,
        incubator_slots: u8,
    ) -> Self {
        roster.sort_by_key(|creature| creature.id);
        bosses.sort_by_key(|creature| creature.id);

        let collection: BTreeSet<CreatureId> = collection.into_iter().collect();
        let eggs: BTreeMap<EggId, Egg> = eggs.into_iter().collect();

        let mut arena = Arena::new();
        for id in &collection {
            arena.insert(ArenaEntity::Creature(*id));
        }
        for id in eggs.keys() {
            arena.insert(ArenaEntity::Egg(*id));
        }

        Self {
            tick: Tick::ZERO,
            roster,
            bosses,
            collection,
            eggs,
            arena,
            incubator: Incubator::new(incubator_slots),
            ledger: BreedingLedger::new(),
        }
    }

    pub fn tick(&self) -> Tick {
        self.tick
    }

    pub(crate) fn advance_clock(&mut self) -> Tick {
        self.tick = self.tick + 1;
        self.tick
    }

    pub fn roster(&self) -> &[Creature] {
        &self.roster
    }

    pub fn bosses(&self) -> &[Creature] {
        &self.bosses
    }

    pub fn creature(&self, id: CreatureId) -> Option<&Creature> {
        find(&self.roster, id)
    }

    pub fn boss(&self, id: CreatureId) -> Option<&Creature> {
        find(&self.bosses, id)
    }

    /// Boss whose display name matches, ignoring case.
    pub fn boss_named(&self, name: &str) -> Option<&Creature> {
        self.bosses
            .iter()
            .find(|boss| boss.display_name.eq_ignore_ascii_case(name))
    }

    pub fn collection(&self) -> &BTreeSet<CreatureId> {
        &self.collection
    }

    /// Owned creatures, in id order.
    pub fn owned(&self) -> impl Iterator<Item = &Creature> {
        self.roster
            .iter()
            .filter(|creature| self.collection.contains(&creature.id))
    }

    pub fn eggs(&self) -> &BTreeMap<EggId, Egg> {
        &self.eggs
    }

    pub fn egg(&self, id: EggId) -> Option<&Egg> {
        self.eggs.get(&id)
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    pub(crate) fn arena_mut(&mut self) -> &mut Arena {
        &mut self.arena
    }

    pub fn incubator(&self) -> &Incubator {
        &self.incubator
    }

    pub(crate) fn incubator_mut(&mut self) -> &mut Incubator {
        &mut self.incubator
    }

    pub fn ledger(&self) -> &BreedingLedger {
        &self.ledger
    }

    /// Derives stats for every creature. Returns the creatures whose hit
    /// points were initialised by this call.
    pub fn refresh_stats(
        &mut self,
        tables: &(impl TablesOracle + ?Sized),
        config: &GameConfig,
    ) -> Vec<(CreatureId, Hitpoints)> {
        let mut initialised = Vec::new();
        for creature in self.roster.iter_mut().chain(self.bosses.iter_mut()) {
            let first = creature.hitpoints.is_none();
            let sheet = creature.refresh_stats(tables, config);
            if first {
                initialised.push((creature.id, Hitpoints::at_max(sheet.max_hitpoints)));
            }
        }
        initialised
    }

    /// Scans reported collisions and plans the resulting changes.
    ///
    /// Nothing in the arena changes here. An entity claimed by an earlier
    /// collision in the same scan (a parent, a consumed plant) is skipped by
    /// later ones.
    pub(crate) fn scan_collisions(
        &mut self,
        collisions: &[(ArenaEntity, ArenaEntity)],
        tables: &(impl TablesOracle + ?Sized),
        rng: &mut (impl RngOracle + ?Sized),
        events: &mut Vec<Event>,
    ) -> Vec<ArenaOp> {
        let mut ops = Vec::new();
        let mut claimed: HashSet<ArenaEntity> = HashSet::new();

        for (a, b) in collisions {
            if a == b
                || claimed.contains(a)
                || claimed.contains(b)
                || !self.arena.contains(a)
                || !self.arena.contains(b)
            {
                continue;
            }

            match (a.creature(), b.creature()) {
                (Some(x), Some(y)) => {
                    if let Some(op) = self.plan_breeding(x, y, tables, rng, events) {
                        claimed.insert(*a);
                        claimed.insert(*b);
                        ops.push(op);
                    }
                }
                (Some(creature), None) | (None, Some(creature)) => {
                    let fixture = if a.creature().is_some() { *b } else { *a };
                    let Some(flavor) = fixture.catalyst() else {
                        continue;
                    };
                    if fixture.is_consumed_on_pickup() {
                        claimed.insert(fixture);
                    }
                    ops.push(ArenaOp::PickUp {
                        creature,
                        flavor,
                        fixture,
                    });
                }
                (None, None) => {}
            }
        }

        ops
    }

    fn plan_breeding(
        &mut self,
        x: CreatureId,
        y: CreatureId,
        tables: &(impl TablesOracle + ?Sized),
        rng: &mut (impl RngOracle + ?Sized),
        events: &mut Vec<Event>,
    ) -> Option<ArenaOp> {
        let (a, b) = (find(&self.roster, x)?, find(&self.roster, y)?);

        match self.ledger.check(a, b, tables, rng) {
            PairCheck::Compatible => {}
            PairCheck::Incompatible => {
                tracing::debug!("Pair {} x {} cannot breed", x, y);
                events.push(Event::Breeding(BreedingEvent::PairTagged {
                    pair: PairKey::new(x, y),
                }));
                return None;
            }
            PairCheck::Tagged => return None,
        }

        match breed(a, b, rng) {
            Ok(egg) => Some(ArenaOp::Breed {
                parents: (x, y),
                egg,
            }),
            Err(error) => {
                tracing::warn!("Breeding {} x {} rejected: {}", x, y, error);
                None
            }
        }
    }

    /// Records a persisted egg laid by two parents. The parents leave the
    /// arena and the egg joins it when pending ops are applied.
    pub(crate) fn lay_egg(&mut self, id: EggId, egg: Egg) {
        let (x, y) = egg.parents;
        self.arena.defer_remove(ArenaEntity::Creature(x));
        self.arena.defer_remove(ArenaEntity::Creature(y));
        self.arena.defer_add(ArenaEntity::Egg(id));
        self.ledger.forget(x);
        self.ledger.forget(y);
        self.eggs.insert(id, egg);
    }

    pub(crate) fn give_catalyst(
        &mut self,
        creature: CreatureId,
        flavor: Flavor,
        fixture: ArenaEntity,
    ) {
        if let Some(creature) = find_mut(&mut self.roster, creature) {
            creature.held_catalyst = Some(flavor);
        }
        if fixture.is_consumed_on_pickup() {
            self.arena.defer_remove(fixture);
        }
    }

    /// Records a persisted hatch: the egg is gone and the creature is owned
    /// and joins the arena.
    pub(crate) fn record_hatch(&mut self, egg: EggId, creature: CreatureId) {
        self.eggs.remove(&egg);
        self.collection.insert(creature);
        self.arena.defer_add(ArenaEntity::Creature(creature));
    }

    pub(crate) fn discard_egg(&mut self, egg: EggId) {
        self.eggs.remove(&egg);
    }

    pub(crate) fn set_hitpoints(&mut self, id: CreatureId, hitpoints: Hitpoints) {
        if let Some(creature) = find_mut(&mut self.roster, id) {
            creature.hitpoints = Some(hitpoints);
        }
    }
}

fn find(creatures: &[Creature], id: CreatureId) -> Option<&Creature> {
    creatures
        .binary_search_by_key(&id, |creature| creature.id)
        .ok()
        .map(|index| &creatures[index])
}

fn find_mut(creatures: &mut [Creature], id: CreatureId) -> Option<&mut Creature> {
    creatures
        .binary_search_by_key(&id, |creature| creature.id)
        .ok()
        .map(|index| &mut creatures[index])
}
