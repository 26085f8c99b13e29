//! Non-retry tags for pairs that failed compatibility.

use std::collections::BTreeSet;

use crate::env::{RngOracle, TablesOracle};
use crate::state::{Creature, CreatureId};

use super::compat::can_breed;

/// Unordered pair of creature ids.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PairKey(CreatureId, CreatureId);

impl PairKey {
    pub fn new(a: CreatureId, b: CreatureId) -> Self {
        if a <= b { Self(a, b) } else { Self(b, a) }
    }

    pub fn ids(&self) -> (CreatureId, CreatureId) {
        (self.0, self.1)
    }

    pub fn involves(&self, id: CreatureId) -> bool {
        self.0 == id || self.1 == id
    }
}

/// Verdict of [`BreedingLedger::check`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PairCheck {
    Compatible,
    /// Evaluated now and found incompatible; the pair is tagged.
    Incompatible,
    /// Tagged by an earlier evaluation; the evaluator was not run.
    Tagged,
}

/// Pairs already found incompatible.
///
/// A tagged pair is never re-evaluated, so a random catalyst bonus cannot
/// flip the verdict on a later encounter.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BreedingLedger {
    rejected: BTreeSet<PairKey>,
}

impl BreedingLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_tagged(&self, a: CreatureId, b: CreatureId) -> bool {
        self.rejected.contains(&PairKey::new(a, b))
    }

    /// Tags a pair. Returns `false` if it was already tagged.
    pub fn tag(&mut self, a: CreatureId, b: CreatureId) -> bool {
        self.rejected.insert(PairKey::new(a, b))
    }

    /// Drops every tag involving `id` (the creature left the arena).
    pub fn forget(&mut self, id: CreatureId) {
        self.rejected.retain(|pair| !pair.involves(id));
    }

    pub fn len(&self) -> usize {
        self.rejected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rejected.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PairKey> {
        self.rejected.iter()
    }

    /// Consults the tags, then the evaluator, tagging on failure.
    pub fn check(
        &mut self,
        a: &Creature,
        b: &Creature,
        tables: &(impl TablesOracle + ?Sized),
        rng: &mut (impl RngOracle + ?Sized),
    ) -> PairCheck {
        if self.is_tagged(a.id, b.id) {
            return PairCheck::Tagged;
        }
        if can_breed(a, b, tables, rng) {
            PairCheck::Compatible
        } else {
            self.tag(a.id, b.id);
            PairCheck::Incompatible
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::PcgRng;
    use crate::test_support::{FixedTables, creature};

    #[test]
    fn pair_key_is_unordered() {
        assert_eq!(
            PairKey::new(CreatureId(3), CreatureId(1)),
            PairKey::new(CreatureId(1), CreatureId(3))
        );
    }

    #[test]
    fn failed_pair_is_not_re_evaluated() {
        let tables = FixedTables::new();
        let a = creature(1, "Curious", ["Showy", "Drive", "Dark"], "Pampered");
        let b = creature(2, "Curious", ["Showy", "Drive", "Dark"], "Pampered");
        let mut ledger = BreedingLedger::new();
        let mut rng = PcgRng::new(5);

        assert_eq!(ledger.check(&a, &b, &tables, &mut rng), PairCheck::Incompatible);
        assert_eq!(ledger.check(&b, &a, &tables, &mut rng), PairCheck::Tagged);
        assert!(ledger.is_tagged(CreatureId(2), CreatureId(1)));
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn forget_drops_only_matching_pairs() {
        let mut ledger = BreedingLedger::new();
        ledger.tag(CreatureId(1), CreatureId(2));
        ledger.tag(CreatureId(3), CreatureId(1));
        ledger.tag(CreatureId(3), CreatureId(4));
        assert!(!ledger.tag(CreatureId(2), CreatureId(1)));

        ledger.forget(CreatureId(1));
        assert_eq!(
            ledger.iter().map(PairKey::ids).collect::<Vec<_>>(),
            vec![(CreatureId(3), CreatureId(4))]
        );
    }
}
