//! Fixtures shared by the unit tests.

use std::collections::HashMap;

use crate::env::{PrimaryStats, RngOracle, TablesOracle};
use crate::genetics::{Allele, Genotype};
use crate::state::{ColorValue, Creature, CreatureId, Elixir, ElixirId};
use crate::stats::StatKind;
use crate::traits::{Flavor, Gender, SecondaryTraits, TraitName};

use StatKind::{Attack, Defense, Dodge, Health};

/// Small slice of the built-in tables.
pub struct FixedTables {
    primaries: HashMap<&'static str, PrimaryStats>,
    secondaries: HashMap<&'static str, StatKind>,
    nurtures: HashMap<&'static str, StatKind>,
    flavors: HashMap<Flavor, Vec<TraitName>>,
}

impl FixedTables {
    pub fn new() -> Self {
        let primaries = HashMap::from([
            ("Curious", PrimaryStats::new(Dodge, Attack)),
            ("Playful", PrimaryStats::new(Dodge, Health)),
            ("Brave", PrimaryStats::new(Attack, Defense)),
            ("Calm", PrimaryStats::new(Defense, Health)),
        ]);

        let groups: [(Flavor, [(&'static str, StatKind); 4]); 5] = [
            (
                Flavor::Sweet,
                [("Showy", Dodge), ("Gentle", Health), ("Charming", Dodge), ("Devoted", Defense)],
            ),
            (
                Flavor::Sour,
                [("Drive", Attack), ("Sharp", Attack), ("Restless", Dodge), ("Stubborn", Defense)],
            ),
            (
                Flavor::Bitter,
                [("Dark", Attack), ("Brooding", Defense), ("Grim", Health), ("Cunning", Dodge)],
            ),
            (
                Flavor::Savory,
                [("Common", Health), ("Sturdy", Defense), ("Hearty", Health), ("Steady", Defense)],
            ),
            (
                Flavor::Exotic,
                [("Unique", Dodge), ("Mystic", Attack), ("Radiant", Health), ("Wild", Attack)],
            ),
        ];

        let mut secondaries = HashMap::new();
        let mut flavors = HashMap::new();
        for (flavor, traits) in groups {
            secondaries.extend(traits);
            flavors.insert(
                flavor,
                traits.iter().map(|(name, _)| TraitName::new(*name)).collect(),
            );
        }

        let nurtures = HashMap::from([
            ("Pampered", Health),
            ("Trained", Attack),
            ("Sheltered", Defense),
            ("Feral", Dodge),
        ]);

        Self {
            primaries,
            secondaries,
            nurtures,
            flavors,
        }
    }
}

impl TablesOracle for FixedTables {
    fn primary_stats(&self, name: &TraitName) -> Option<PrimaryStats> {
        self.primaries.get(name.as_str()).copied()
    }

    fn secondary_stat(&self, name: &TraitName) -> Option<StatKind> {
        self.secondaries.get(name.as_str()).copied()
    }

    fn nurture_stat(&self, name: &TraitName) -> Option<StatKind> {
        self.nurtures.get(name.as_str()).copied()
    }

    fn flavor_traits(&self, flavor: Flavor) -> &[TraitName] {
        self.flavors.get(&flavor).map(Vec::as_slice).unwrap_or_default()
    }
}

/// Replays a fixed sequence of raw draws, cycling when exhausted.
pub struct ScriptedRng {
    values: Vec<u32>,
    cursor: usize,
}

impl ScriptedRng {
    pub fn new(values: impl IntoIterator<Item = u32>) -> Self {
        Self {
            values: values.into_iter().collect(),
            cursor: 0,
        }
    }
}

impl RngOracle for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}

/// Male (B,W) companion with full channel ranges.
pub fn creature(id: u32, primary: &str, secondaries: [&str; 3], nurture: &str) -> Creature {
    Creature::new(
        CreatureId(id),
        format!("{primary} #{id}"),
        primary,
        SecondaryTraits::new(secondaries.map(TraitName::from)).unwrap(),
        nurture,
        Gender::Male,
        Genotype::new(Allele::B, Allele::W),
    )
}

/// Exotic elixir with a mid-range color.
pub fn elixir(primary: &str, secondaries: [&str; 3]) -> Elixir {
    Elixir::new(
        ElixirId(1),
        Flavor::Exotic,
        primary,
        secondaries.map(TraitName::from),
        ColorValue::new(128, 128, 128),
    )
}
