//! Stat system.
//!
//! ```text
//! [ Traits + bonus + boss tier ] → Stats (health, attack, defense, dodge)
//!                                     ↓
//!                  max hit points, damage per hit (StatSheet)
//! ```
//!
//! Derived stats are recomputed on demand; only current hit points and bonus
//! stats are game state that must be persisted.

pub mod core;
pub mod derived;
pub mod resources;

pub use core::{BonusStats, StatKind, Stats};
pub use derived::{StatSheet, base_hitpoints, derive_stats, max_hitpoints, trait_stats};
pub use resources::Hitpoints;
