//! Repository trait definitions.
//!
//! Repositories store data that changes during play: hit points, eggs, the
//! elixir inventory and the player's collection. The static roster is only
//! written once, when a save is seeded.

use game_core::{Creature, CreatureId, Egg, EggId, Elixir, ElixirId, Hitpoints, InventorySlot};

use super::Result;

/// Persistence contract consumed by the runtime.
///
/// Every write is all-or-nothing: when a call returns an error, nothing it
/// would have changed is visible to later reads.
pub trait SaveRepository: Send + Sync {
    /// Non-boss creatures of the roster, in id order.
    fn load_roster(&self) -> Result<Vec<Creature>>;

    /// Boss creatures of the roster, in id order.
    fn load_bosses(&self) -> Result<Vec<Creature>>;

    /// Eggs that have not been consumed by hatch resolution.
    fn load_eggs(&self) -> Result<Vec<(EggId, Egg)>>;

    /// Roster creatures the player owns.
    fn load_collection(&self) -> Result<Vec<CreatureId>>;

    /// Stores the current hit points of one creature.
    fn save_hitpoints(&self, id: CreatureId, hitpoints: Hitpoints) -> Result<()>;

    /// Stores a new egg and assigns its identifier.
    fn insert_egg(&self, egg: &Egg) -> Result<EggId>;

    fn delete_egg(&self, id: EggId) -> Result<()>;

    fn load_elixir_at_slot(&self, slot: InventorySlot) -> Result<Option<Elixir>>;

    /// Every stocked elixir, in slot order.
    fn load_inventory(&self) -> Result<Vec<(InventorySlot, Elixir)>>;

    fn delete_elixir(&self, id: ElixirId) -> Result<()>;

    /// Stocks an elixir into an empty slot.
    fn insert_elixir(&self, slot: InventorySlot, elixir: &Elixir) -> Result<()>;

    /// Adds a creature to the roster. Used when seeding a save.
    fn insert_creature(&self, creature: &Creature) -> Result<()>;

    /// Marks a roster creature as owned. Owning it twice is not an error.
    fn add_to_collection(&self, id: CreatureId) -> Result<()>;

    /// Deletes a hatched egg and marks the hatchling owned in one write.
    fn record_hatch(&self, egg: EggId, creature: CreatureId) -> Result<()>;
}
