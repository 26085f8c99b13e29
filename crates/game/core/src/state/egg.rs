use crate::genetics::{Genotype, Phenotype};

use super::CreatureId;

/// Offspring of two parents, waiting to hatch.
///
/// The egg's identifier is assigned by the persistence layer on insert and is
/// therefore not part of the value.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Egg {
    pub genotype: Genotype,
    pub parents: (CreatureId, CreatureId),
    /// Creature bound by hatch resolution; unset until it completes.
    #[cfg_attr(feature = "serde", serde(default))]
    pub hatched: Option<CreatureId>,
}

impl Egg {
    pub fn new(genotype: Genotype, parents: (CreatureId, CreatureId)) -> Self {
        Self {
            genotype,
            parents,
            hatched: None,
        }
    }

    pub fn phenotype(&self) -> Phenotype {
        self.genotype.phenotype()
    }

    pub fn is_hatched(&self) -> bool {
        self.hatched.is_some()
    }
}
