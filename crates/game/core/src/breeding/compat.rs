//! Compatibility evaluation between two creatures.

use crate::env::{RngOracle, TablesOracle};
use crate::state::Creature;
use crate::traits::{TraitName, TraitSet};

/// Traits a creature brings to a compatibility check.
///
/// Primary and secondaries, plus one bonus trait when the creature holds a
/// catalyst: the flavor's trait list minus traits the creature already has,
/// one survivor drawn uniformly. No survivors means no bonus.
pub fn trait_set<'a>(
    creature: &'a Creature,
    tables: &'a (impl TablesOracle + ?Sized),
    rng: &mut (impl RngOracle + ?Sized),
) -> TraitSet<'a> {
    let mut set = creature.own_traits();

    if let Some(flavor) = creature.held_catalyst {
        let survivors: Vec<&TraitName> = tables
            .flavor_traits(flavor)
            .iter()
            .filter(|name| !creature.has_trait(name))
            .collect();

        if !survivors.is_empty() {
            set.push(survivors[rng.index(survivors.len())]);
        }
    }

    set
}

/// Whether `a` and `b` may breed.
///
/// Opposite genders and at least one shared trait. Bonus traits are drawn
/// for the lower creature id first, so `can_breed(a, b)` and
/// `can_breed(b, a)` agree for the same random stream. Same-gender pairs
/// consume no randomness.
pub fn can_breed(
    a: &Creature,
    b: &Creature,
    tables: &(impl TablesOracle + ?Sized),
    rng: &mut (impl RngOracle + ?Sized),
) -> bool {
    if a.gender == b.gender {
        return false;
    }

    let (first, second) = if a.id <= b.id { (a, b) } else { (b, a) };
    let first_set = trait_set(first, tables, rng);
    let second_set = trait_set(second, tables, rng);

    first_set.iter().any(|name| second_set.contains(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::PcgRng;
    use crate::test_support::{FixedTables, creature};
    use crate::traits::{Flavor, Gender};

    #[test]
    fn same_gender_never_breeds() {
        let tables = FixedTables::new();
        let a = creature(1, "Curious", ["Showy", "Drive", "Dark"], "Pampered");
        let b = creature(2, "Curious", ["Showy", "Drive", "Dark"], "Pampered");
        assert_eq!(a.gender, b.gender);

        let mut rng = PcgRng::new(1);
        assert!(!can_breed(&a, &b, &tables, &mut rng));
        assert!(!can_breed(&b, &a, &tables, &mut rng));
    }

    #[test]
    fn shared_primary_is_enough() {
        let tables = FixedTables::new();
        let a = creature(1, "Curious", ["Showy", "Drive", "Dark"], "Pampered");
        let mut b = creature(2, "Curious", ["Gentle", "Sturdy", "Grim"], "Feral");
        b.gender = Gender::Female;

        assert!(can_breed(&a, &b, &tables, &mut PcgRng::new(3)));
    }

    #[test]
    fn disjoint_traits_do_not_breed() {
        let tables = FixedTables::new();
        let a = creature(1, "Curious", ["Showy", "Drive", "Dark"], "Pampered");
        let mut b = creature(2, "Brave", ["Gentle", "Sturdy", "Grim"], "Pampered");
        b.gender = Gender::Female;

        // Nurture is not part of the trait set.
        assert!(!can_breed(&a, &b, &tables, &mut PcgRng::new(3)));
    }

    #[test]
    fn catalyst_bonus_skips_owned_traits() {
        let tables = FixedTables::new();
        // Sweet: Showy, Gentle, Charming, Devoted. Three are owned already.
        let c = creature(1, "Curious", ["Showy", "Gentle", "Charming"], "Pampered")
            .with_catalyst(Flavor::Sweet);

        for seed in 0..16 {
            let set = trait_set(&c, &tables, &mut PcgRng::new(seed));
            assert_eq!(set.len(), 5);
            assert_eq!(set[4].as_str(), "Devoted");
        }
    }

    #[test]
    fn exhausted_catalyst_adds_nothing() {
        let tables = FixedTables::new();
        let mut c = creature(1, "Curious", ["Showy", "Gentle", "Charming"], "Pampered");
        c.primary = TraitName::new("Devoted");
        let c = c.with_catalyst(Flavor::Sweet);

        let set = trait_set(&c, &tables, &mut PcgRng::new(0));
        assert_eq!(set.len(), 4);
    }

    #[test]
    fn catalyst_bonus_can_create_a_match() {
        let tables = FixedTables::new();
        let a = creature(1, "Curious", ["Showy", "Gentle", "Charming"], "Pampered")
            .with_catalyst(Flavor::Sweet);
        let mut b = creature(2, "Brave", ["Devoted", "Sturdy", "Grim"], "Feral");
        b.gender = Gender::Female;

        assert!(can_breed(&a, &b, &tables, &mut PcgRng::new(9)));
    }

    #[test]
    fn symmetric_for_the_same_stream() {
        let tables = FixedTables::new();
        let a = creature(4, "Curious", ["Showy", "Drive", "Dark"], "Pampered")
            .with_catalyst(Flavor::Exotic);
        let mut b = creature(9, "Brave", ["Gentle", "Sturdy", "Grim"], "Feral")
            .with_catalyst(Flavor::Exotic);
        b.gender = Gender::Female;

        for seed in 0..64 {
            let forward = can_breed(&a, &b, &tables, &mut PcgRng::new(seed));
            let backward = can_breed(&b, &a, &tables, &mut PcgRng::new(seed));
            assert_eq!(forward, backward, "seed {seed}");
        }
    }
}
