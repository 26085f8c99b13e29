use crate::traits::{Flavor, TraitName};

use super::{ColorValue, ElixirId};

/// Catalyst applied to an egg to steer what hatches from it.
///
/// The target color is generated by whoever brews the elixir; the rules only
/// read it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Elixir {
    pub id: ElixirId,
    pub flavor: Flavor,
    pub primary: TraitName,
    pub secondaries: [TraitName; 3],
    pub color: ColorValue,
}

impl Elixir {
    pub fn new(
        id: ElixirId,
        flavor: Flavor,
        primary: impl Into<TraitName>,
        secondaries: [TraitName; 3],
        color: ColorValue,
    ) -> Self {
        Self {
            id,
            flavor,
            primary: primary.into(),
            secondaries,
            color,
        }
    }

    pub fn has_secondary(&self, name: &TraitName) -> bool {
        self.secondaries.contains(name)
    }
}
