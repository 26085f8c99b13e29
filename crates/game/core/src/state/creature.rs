use crate::genetics::{Genotype, Phenotype};
use crate::stats::{BonusStats, Hitpoints, Stats};
use crate::traits::{Flavor, Gender, SecondaryTraits, TraitName, TraitSet};

use super::{AttributeRanges, CreatureId};

/// Where a creature sits in the game: a player companion, or a boss of a
/// given tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Role {
    #[default]
    Companion,
    Boss {
        tier: u32,
    },
}

/// A creature from the fixed roster.
///
/// Identity and traits never change after creation. Only `stats`,
/// `hitpoints` and `bonus` are mutated (player upgrades and combat).
/// Phenotype is not stored; it is always read from the genotype.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Creature {
    pub id: CreatureId,
    pub display_name: String,
    pub primary: TraitName,
    pub secondaries: SecondaryTraits,
    pub nurture: TraitName,
    pub gender: Gender,
    pub genotype: Genotype,
    pub color_ranges: AttributeRanges,
    #[cfg_attr(feature = "serde", serde(default))]
    pub role: Role,
    /// Catalyst the creature is currently holding, if any.
    #[cfg_attr(feature = "serde", serde(default))]
    pub held_catalyst: Option<Flavor>,
    /// Last derived stats (see [`Creature::refresh_stats`]).
    #[cfg_attr(feature = "serde", serde(default))]
    pub stats: Stats,
    /// `None` until stats are derived for the first time.
    #[cfg_attr(feature = "serde", serde(default))]
    pub hitpoints: Option<Hitpoints>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub bonus: BonusStats,
}

impl Creature {
    pub fn new(
        id: CreatureId,
        display_name: impl Into<String>,
        primary: impl Into<TraitName>,
        secondaries: SecondaryTraits,
        nurture: impl Into<TraitName>,
        gender: Gender,
        genotype: Genotype,
    ) -> Self {
        Self {
            id,
            display_name: display_name.into(),
            primary: primary.into(),
            secondaries,
            nurture: nurture.into(),
            gender,
            genotype,
            color_ranges: AttributeRanges::full(),
            role: Role::Companion,
            held_catalyst: None,
            stats: Stats::ZERO,
            hitpoints: None,
            bonus: BonusStats::default(),
        }
    }

    pub fn with_color_ranges(mut self, ranges: AttributeRanges) -> Self {
        self.color_ranges = ranges;
        self
    }

    pub fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    pub fn with_catalyst(mut self, flavor: Flavor) -> Self {
        self.held_catalyst = Some(flavor);
        self
    }

    pub fn with_bonus(mut self, bonus: BonusStats) -> Self {
        self.bonus = bonus;
        self
    }

    pub fn with_hitpoints(mut self, hitpoints: Hitpoints) -> Self {
        self.hitpoints = Some(hitpoints);
        self
    }

    pub fn phenotype(&self) -> Phenotype {
        self.genotype.phenotype()
    }

    pub fn is_boss(&self) -> bool {
        matches!(self.role, Role::Boss { .. })
    }

    /// Primary plus the three secondary traits.
    pub fn own_traits(&self) -> TraitSet<'_> {
        let mut set = TraitSet::new();
        set.push(&self.primary);
        set.extend(self.secondaries.iter());
        set
    }

    pub fn has_trait(&self, name: &TraitName) -> bool {
        self.primary == *name || self.secondaries.contains(name)
    }

    /// Current hit points, or `None` before the first derivation.
    pub fn current_hitpoints(&self) -> Option<u32> {
        self.hitpoints.map(|hp| hp.current)
    }
}
