//! Creature roster loader.
//!
//! Loads companions and bosses from a RON file:
//!
//! ```ron
//! (
//!     creatures: [
//!         (
//!             id: CreatureId(1),
//!             display_name: "Ember",
//!             primary: "Curious",
//!             secondaries: ("Showy", "Drive", "Dark"),
//!             nurture: "Pampered",
//!             gender: Male,
//!             genotype: (B, W),
//!             color_ranges: ("0-255", "0-255", "0-255"),
//!         ),
//!     ],
//! )
//! ```

use std::collections::HashSet;
use std::path::Path;

use game_core::Creature;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Roster file structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterFile {
    pub creatures: Vec<Creature>,
}

/// Loader for the creature roster from RON files.
pub struct RosterLoader;

impl RosterLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<Creature>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parses a roster.
    ///
    /// Duplicate ids are an error. Unparseable channel ranges are kept (the
    /// hatch filter skips such creatures) but logged.
    pub fn parse(content: &str) -> LoadResult<Vec<Creature>> {
        let roster: RosterFile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse roster RON: {}", e))?;

        let mut seen = HashSet::new();
        for creature in &roster.creatures {
            if !seen.insert(creature.id) {
                anyhow::bail!("Duplicate creature id {} in roster", creature.id);
            }
            if let Err(error) = creature.color_ranges.parse() {
                tracing::warn!(
                    creature = %creature.id,
                    name = %creature.display_name,
                    %error,
                    "creature has malformed color ranges"
                );
            }
        }

        tracing::debug!(
            creatures = roster.creatures.len(),
            bosses = roster.creatures.iter().filter(|c| c.is_boss()).count(),
            "loaded roster"
        );
        Ok(roster.creatures)
    }
}
