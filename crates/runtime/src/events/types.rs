//! Event types for different topics.

use game_core::{
    CombatOutcome, CreatureId, EggId, EggSlot, ElixirId, Flavor, NurtureOption, PairKey,
    Phenotype, TraitName,
};
use serde::{Deserialize, Serialize};

/// Topics for event routing
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Topic {
    /// Arena collisions: breeding and catalyst pickups
    Breeding,
    /// Egg slots, elixirs, nurture and hatching
    Incubator,
    /// Finished bouts
    Combat,
    /// Writes that failed and were not applied
    Persistence,
}

/// Event wrapper that carries the topic and typed event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    Breeding(BreedingEvent),
    Incubator(IncubatorEvent),
    Combat(CombatEvent),
    Persistence(PersistenceEvent),
}

impl Event {
    pub fn topic(&self) -> Topic {
        match self {
            Event::Breeding(_) => Topic::Breeding,
            Event::Incubator(_) => Topic::Incubator,
            Event::Combat(_) => Topic::Combat,
            Event::Persistence(_) => Topic::Persistence,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BreedingEvent {
    /// Two creatures produced an egg and left the arena.
    Bred {
        parents: (CreatureId, CreatureId),
        egg: EggId,
        phenotype: Phenotype,
    },

    /// The pair failed the compatibility check and will not be re-evaluated.
    PairTagged { pair: PairKey },

    /// A creature took a catalyst from a plant or lure.
    CatalystPickedUp { creature: CreatureId, flavor: Flavor },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum IncubatorEvent {
    EggPlaced {
        egg: EggId,
        slot: EggSlot,
    },

    /// The elixir was consumed and the countdown started.
    ElixirApplied {
        slot: EggSlot,
        elixir: ElixirId,
        countdown: u32,
        options: Vec<NurtureOption>,
    },

    NurtureChosen {
        slot: EggSlot,
        nurture: TraitName,
    },

    Hatched {
        slot: EggSlot,
        egg: EggId,
        creature: CreatureId,
    },

    /// The countdown expired but no candidate survived filtering.
    HatchUnresolved {
        slot: EggSlot,
        egg: EggId,
        candidates: usize,
        eligible: usize,
    },

    /// A candidate with malformed range data was left out of a pool.
    CandidateSkipped {
        slot: EggSlot,
        creature: CreatureId,
        reason: String,
    },

    /// The slot was emptied by the player. A discarded egg is deleted;
    /// otherwise it returns to the arena.
    SlotCleared {
        slot: EggSlot,
        egg: EggId,
        discarded: bool,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CombatEvent {
    Finished {
        boss: CreatureId,
        outcome: CombatOutcome,
        rounds: u32,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistenceEvent {
    pub operation: String,
    pub error: String,
}
