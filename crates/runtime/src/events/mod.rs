//! Topic-tagged events emitted while the world advances.
//!
//! Events are collected into each [`TickReport`](crate::TickReport) and
//! returned from the player operations; consumers filter by [`Topic`].

mod types;

pub use types::{
    BreedingEvent, CombatEvent, Event, IncubatorEvent, PersistenceEvent, Topic,
};
