//! Trait → stat tables.
//!
//! [`ContentTables`] is the content-side implementation of
//! [`TablesOracle`]. The built-in set lives in `data/tables.toml` (20
//! primaries, 20 secondaries in five flavor groups, 4 nurtures) and is
//! embedded through `Bundled::tables`.

use std::collections::{BTreeMap, HashMap};

use game_core::stats::StatKind;
use game_core::{Flavor, PrimaryStats, TablesOracle, TraitName};

/// Table data as written in `tables.toml`.
///
/// ```toml
/// [primary]
/// Curious = { main = "dodge", off = "attack" }
///
/// [[secondary]]
/// flavor = "Sweet"
/// traits = { Showy = "dodge", Gentle = "health" }
///
/// [nurture]
/// Pampered = "health"
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TablesSpec {
    pub primary: BTreeMap<TraitName, PrimaryStats>,
    pub secondary: Vec<SecondaryGroup>,
    pub nurture: BTreeMap<TraitName, StatKind>,
}

/// Secondary traits granted by one catalyst flavor.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SecondaryGroup {
    pub flavor: Flavor,
    pub traits: BTreeMap<TraitName, StatKind>,
}

/// Lookup tables backing [`TablesOracle`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContentTables {
    primary: HashMap<TraitName, PrimaryStats>,
    secondary: HashMap<TraitName, StatKind>,
    flavors: BTreeMap<Flavor, Vec<TraitName>>,
    nurture: HashMap<TraitName, StatKind>,
}

impl ContentTables {
    /// Indexes table data for lookup.
    ///
    /// A secondary listed in two groups keeps the stat of the first group
    /// but belongs to both bonus lists. Groups repeating a flavor are merged.
    pub fn from_spec(spec: TablesSpec) -> Self {
        let mut secondary = HashMap::new();
        let mut flavors: BTreeMap<Flavor, Vec<TraitName>> = BTreeMap::new();
        for group in spec.secondary {
            let names = flavors.entry(group.flavor).or_default();
            for (name, kind) in group.traits {
                secondary.entry(name.clone()).or_insert(kind);
                if !names.contains(&name) {
                    names.push(name);
                }
            }
        }

        Self {
            primary: spec.primary.into_iter().collect(),
            secondary,
            flavors,
            nurture: spec.nurture.into_iter().collect(),
        }
    }

    /// Table data in file form, e.g. for writing a `tables.toml`.
    pub fn to_spec(&self) -> TablesSpec {
        TablesSpec {
            primary: self.primary.iter().map(|(k, v)| (k.clone(), *v)).collect(),
            secondary: self
                .flavors
                .iter()
                .map(|(flavor, names)| SecondaryGroup {
                    flavor: *flavor,
                    traits: names
                        .iter()
                        .filter_map(|name| {
                            self.secondary.get(name).map(|kind| (name.clone(), *kind))
                        })
                        .collect(),
                })
                .collect(),
            nurture: self.nurture.iter().map(|(k, v)| (k.clone(), *v)).collect(),
        }
    }

    pub fn primary_names(&self) -> impl Iterator<Item = &TraitName> {
        self.primary.keys()
    }

    pub fn nurture_names(&self) -> impl Iterator<Item = &TraitName> {
        self.nurture.keys()
    }

    pub fn len(&self) -> usize {
        self.primary.len() + self.secondary.len() + self.nurture.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl TablesOracle for ContentTables {
    fn primary_stats(&self, name: &TraitName) -> Option<PrimaryStats> {
        self.primary.get(name).copied()
    }

    fn secondary_stat(&self, name: &TraitName) -> Option<StatKind> {
        self.secondary.get(name).copied()
    }

    fn nurture_stat(&self, name: &TraitName) -> Option<StatKind> {
        self.nurture.get(name).copied()
    }

    fn flavor_traits(&self, flavor: Flavor) -> &[TraitName] {
        self.flavors.get(&flavor).map(Vec::as_slice).unwrap_or_default()
    }
}
