//! Entities the rules operate on: creatures, eggs, elixirs.
//!
//! These are plain values. Collections of them (roster, incubator, arena) are
//! owned by the runtime's `World`; the rules borrow what they need.
mod creature;
mod egg;
mod elixir;
mod ids;
mod range;

pub use creature::{Creature, Role};
pub use egg::Egg;
pub use elixir::Elixir;
pub use ids::{CreatureId, EggId, EggSlot, ElixirId, InventorySlot, Tick};
pub use range::{AttributeRanges, ColorValue, RangeParseError};
