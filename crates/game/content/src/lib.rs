//! Data-driven content definitions and loaders.
//!
//! This crate houses static game content and provides loaders for RON/TOML data files:
//! - Trait → stat tables (data-driven via TOML)
//! - Nurture option pools (data-driven via TOML)
//! - Creature roster, companions and bosses (data-driven via RON)
//! - Starting elixir inventory (data-driven via RON)
//! - Game configuration (data-driven via TOML)
//!
//! Tables are consumed through `TablesOracle` and never appear in game state.
//! The roster and inventory seed a save; after that the save is authoritative.

pub mod tables;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use tables::{ContentTables, SecondaryGroup, TablesSpec};

#[cfg(feature = "loaders")]
pub use loaders::{
    Bundled, ConfigLoader, ContentFactory, InventoryLoader, LoadResult, NurtureLoader,
    RosterLoader, StartingInventory, StockedElixir, TablesLoader,
};
