//! Shared fixtures for the runtime integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use game_content::Bundled;
use game_core::{
    Allele, ColorValue, Creature, CreatureId, Egg, Elixir, ElixirId, Flavor, GameConfig, Gender,
    Genotype, InventorySlot, NurturePool, Role, SecondaryTraits, TraitName,
};
use runtime::{
    ArenaEntity, Event, InMemorySaveRepository, OracleManager, Runtime, RuntimeConfig,
    SaveRepository,
};

pub const COUNTDOWN: u32 = 3;
pub const BOSS: CreatureId = CreatureId(101);

pub fn creature(
    id: u32,
    name: &str,
    primary: &str,
    secondaries: [&str; 3],
    nurture: &str,
    gender: Gender,
    genotype: (Allele, Allele),
) -> Creature {
    let secondaries = SecondaryTraits::new(secondaries.map(TraitName::new)).unwrap();
    Creature::new(
        CreatureId(id),
        name,
        primary,
        secondaries,
        nurture,
        gender,
        Genotype::new(genotype.0, genotype.1),
    )
}

/// 1 and 2 share a primary and always breed; 3 and 4 share nothing.
pub fn roster() -> Vec<Creature> {
    use Allele::*;
    vec![
        creature(1, "Ember", "Curious", ["Showy", "Drive", "Dark"], "Pampered", Gender::Male, (B, W)),
        creature(2, "Frost", "Curious", ["Gentle", "Sharp", "Grim"], "Feral", Gender::Female, (W, W)),
        creature(3, "Moss", "Calm", ["Sturdy", "Steady", "Hearty"], "Sheltered", Gender::Male, (R, R)),
        creature(4, "Pebble", "Brave", ["Restless", "Cunning", "Wild"], "Trained", Gender::Female, (M, M)),
        creature(5, "Dune", "Curious", ["Charming", "Stubborn", "Radiant"], "Feral", Gender::Female, (B, B)),
        creature(101, "Gloom", "Grumpy", ["Brooding", "Devoted", "Mystic"], "Sheltered", Gender::Male, (B, B))
            .with_role(Role::Boss { tier: 1 }),
    ]
}

/// Elixir whose only eligible White candidate is Frost (#2).
pub fn elixir(id: u64) -> Elixir {
    Elixir::new(
        ElixirId(id),
        Flavor::Sour,
        "Curious",
        ["Gentle", "Sharp", "Grim"].map(TraitName::new),
        ColorValue::new(10, 10, 10),
    )
}

pub fn white_egg() -> Egg {
    Egg::new(Genotype::new(Allele::W, Allele::W), (CreatureId(1), CreatureId(2)))
}

/// No roster creature both matches the elixir and is Rainbow.
pub fn rainbow_egg() -> Egg {
    Egg::new(Genotype::new(Allele::R, Allele::M), (CreatureId(3), CreatureId(4)))
}

/// Roster, creatures 1-5 owned, elixirs in inventory slots 0 and 1.
pub fn seeded_repo() -> InMemorySaveRepository {
    repo_owning(&[1, 2, 3, 4, 5])
}

/// Like [`seeded_repo`] but only `owned` are in the collection.
pub fn repo_owning(owned: &[u32]) -> InMemorySaveRepository {
    let repo = InMemorySaveRepository::new();
    for creature in roster() {
        repo.insert_creature(&creature).unwrap();
    }
    for id in owned {
        repo.add_to_collection(CreatureId(*id)).unwrap();
    }
    repo.insert_elixir(InventorySlot(0), &elixir(1)).unwrap();
    repo.insert_elixir(InventorySlot(1), &elixir(2)).unwrap();
    repo
}

/// Bundled content with a short countdown.
pub fn oracles() -> OracleManager {
    oracles_with_pools(Bundled::nurture_pools().unwrap())
}

pub fn oracles_with_pools(pools: Vec<NurturePool>) -> OracleManager {
    let mut config = GameConfig::default();
    config.hatch.countdown_ticks = COUNTDOWN;
    OracleManager::new(Bundled::tables().unwrap(), pools, config)
}

pub fn build_runtime(repo: Arc<dyn SaveRepository>) -> Runtime {
    Runtime::builder()
        .config(RuntimeConfig {
            seed: Some(7),
            ..RuntimeConfig::default()
        })
        .oracles(oracles())
        .shared_repository(repo)
        .build()
        .unwrap()
}

pub fn entity(id: u32) -> ArenaEntity {
    ArenaEntity::Creature(CreatureId(id))
}

pub fn count(events: &[Event], matches: impl Fn(&Event) -> bool) -> usize {
    events.iter().filter(|event| matches(event)).count()
}
