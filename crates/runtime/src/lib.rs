//! Runtime orchestration for the breeding, hatching and combat rules.
//!
//! This crate wires the pure rules of `game-core` to persistence, static
//! content and a random stream. Consumers embed [`Runtime`] to advance the
//! world tick by tick and to run player operations (incubating eggs,
//! applying elixirs, fighting bosses).
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`world`] holds the in-memory state: arena, incubator, roster
//! - [`api`] exposes the types downstream clients interact with
//! - [`events`] provides topic-tagged events for reporting
//! - [`oracle`] and [`repository`] provide data adapters reused by other crates
pub mod api;
pub mod events;
pub mod oracle;
pub mod repository;
pub mod runtime;
pub mod world;

pub use api::{Result, RuntimeError, TickInput, TickReport};
pub use events::{BreedingEvent, CombatEvent, Event, IncubatorEvent, PersistenceEvent, Topic};
pub use oracle::{OracleManager, RandRng};
pub use repository::{
    FileSaveRepository, InMemorySaveRepository, RepositoryError, SaveData, SaveRepository,
    seed_save,
};
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig};
pub use world::{
    Arena, ArenaEntity, ExpiredTimer, FixtureId, FixtureKind, Incubator, IncubatorSlot, SlotState,
    World,
};
