//! Per-tick input and output.

use game_core::Tick;
use serde::{Deserialize, Serialize};

use crate::events::{Event, Topic};
use crate::world::ArenaEntity;

/// What the movement layer observed during one tick.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    /// Touching pairs, in the order they were detected.
    pub collisions: Vec<(ArenaEntity, ArenaEntity)>,
}

impl TickInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_collision(mut self, a: ArenaEntity, b: ArenaEntity) -> Self {
        self.collisions.push((a, b));
        self
    }
}

/// Everything that happened since the previous report.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TickReport {
    pub tick: Tick,
    pub events: Vec<Event>,
    /// Writes that failed and were therefore not applied.
    pub failures: usize,
}

impl TickReport {
    pub fn new(tick: Tick) -> Self {
        Self {
            tick,
            events: Vec::new(),
            failures: 0,
        }
    }

    pub fn on(&self, topic: Topic) -> impl Iterator<Item = &Event> {
        self.events.iter().filter(move |event| event.topic() == topic)
    }

    pub fn is_quiet(&self) -> bool {
        self.events.is_empty()
    }
}
