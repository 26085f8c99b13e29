//! Combat resolution.
//!
//! Pure functions plus the [`Bout`] state machine. Randomness comes only from
//! the [`RngOracle`](crate::env::RngOracle) passed in, so a seeded oracle
//! replays a bout exactly.
//!
//! # Core Functions
//!
//! - `dodge_chance` / `check_dodge`: dodge vs dodge
//! - `player_hit_damage` / `boss_hit_damage`: the two strike directions
//! - `apply_damage`: HP reduction (clamped to 0)
//! - `resolve_combat`: full bout, HP floored to 1 at the end

pub mod damage;
pub mod hit;
pub mod result;

pub use damage::{
    apply_damage, base_damage, boss_hit_damage, player_hit_damage, trait_match_reduction,
};
pub use hit::{check_dodge, dodge_chance};
pub use result::{
    Bout, CombatError, CombatLog, CombatOutcome, CombatReport, Exchange, FinalHitpoints, Strike,
    resolve_combat,
};
