//! Deterministic breeding, hatching and combat rules.
//!
//! `game-core` defines the canonical rules (genetics, compatibility,
//! offspring, hatch pool, stat derivation, combat) as pure functions over
//! plain values. Content comes in through [`env::TablesOracle`], randomness
//! through [`env::RngOracle`]; the crate does no I/O and keeps no global
//! state. The runtime owns the world and calls into these functions.
pub mod breeding;
pub mod combat;
pub mod config;
pub mod env;
pub mod error;
pub mod genetics;
pub mod hatch;
pub mod state;
pub mod stats;
pub mod traits;

#[cfg(test)]
pub(crate) mod test_support;

pub use breeding::{BreedError, BreedingLedger, PairCheck, PairKey, breed, can_breed};
pub use combat::{
    Bout, CombatError, CombatLog, CombatOutcome, CombatReport, Exchange, FinalHitpoints, Strike,
    dodge_chance, resolve_combat,
};
pub use config::{CombatConfig, ConfigError, GameConfig, HatchConfig, StatConfig};
pub use env::{PcgRng, PrimaryStats, RngOracle, TablesOracle};
pub use error::{ErrorContext, ErrorSeverity, GameError};
pub use genetics::{Allele, Genotype, Phenotype, phenotype_of, valid_genotypes_for};
pub use hatch::{
    CandidatePool, HatchError, HatchResolution, NurtureOffer, NurtureOption, NurturePool,
    build_candidate_pool, filter_pool, resolve_hatch, select_from_pool,
};
pub use state::{
    AttributeRanges, ColorValue, Creature, CreatureId, Egg, EggId, EggSlot, Elixir, ElixirId,
    InventorySlot, RangeParseError, Role, Tick,
};
pub use stats::{BonusStats, Hitpoints, StatKind, StatSheet, Stats, derive_stats};
pub use traits::{Flavor, Gender, SecondaryTraits, TraitError, TraitName};
