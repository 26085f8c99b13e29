//! Hatch resolution: candidate pool, filter, weighted draw.
//!
//! ```text
//! elixir + roster + nurture → build_candidate_pool
//!                           → filter_pool(egg, color) → select_from_pool
//! ```
//!
//! The pool borrows the roster and lives only for one resolution.

mod filter;
mod nurture;
mod pool;
mod select;

pub use filter::{Filtered, SkippedCandidate, filter_pool};
pub use nurture::{NurtureOffer, NurtureOption, NurturePool, OFFERED_OPTIONS};
pub use pool::{CandidatePool, PoolEntry, build_candidate_pool, candidate_weight};
pub use select::select_from_pool;

use crate::env::RngOracle;
use crate::error::{ErrorSeverity, GameError};
use crate::state::{Creature, Egg, Elixir};
use crate::traits::TraitName;

/// Errors raised around hatch resolution.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum HatchError {
    #[error("nurture choice {index} out of range ({offered} offered)")]
    ChoiceOutOfRange { index: usize, offered: usize },

    #[error("egg is already bound to a creature")]
    AlreadyHatched,
}

impl GameError for HatchError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::ChoiceOutOfRange { .. } => ErrorSeverity::Validation,
            Self::AlreadyHatched => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::ChoiceOutOfRange { .. } => "HATCH_CHOICE_OUT_OF_RANGE",
            Self::AlreadyHatched => "HATCH_ALREADY_HATCHED",
        }
    }
}

/// Everything one resolution produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HatchResolution<'r> {
    /// Drawn creature; `None` when the filtered pool is empty.
    pub selected: Option<&'r Creature>,
    /// Distinct candidates before and after filtering.
    pub candidates: usize,
    pub eligible: usize,
    pub skipped: Vec<SkippedCandidate>,
}

/// Builder → filter → selector for one egg.
pub fn resolve_hatch<'r>(
    egg: &Egg,
    elixir: &Elixir,
    roster: &'r [Creature],
    nurture: &TraitName,
    rng: &mut (impl RngOracle + ?Sized),
) -> Result<HatchResolution<'r>, HatchError> {
    if egg.is_hatched() {
        return Err(HatchError::AlreadyHatched);
    }

    let pool = build_candidate_pool(elixir, roster, nurture);
    let Filtered {
        pool: filtered,
        skipped,
    } = filter_pool(&pool, egg, elixir.color);

    Ok(HatchResolution {
        selected: select_from_pool(&filtered, rng),
        candidates: pool.len(),
        eligible: filtered.len(),
        skipped,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::PcgRng;
    use crate::genetics::{Allele, Genotype};
    use crate::state::CreatureId;
    use crate::test_support::{creature, elixir};

    #[test]
    fn resolves_to_an_eligible_candidate() {
        let mut a = creature(1, "Playful", ["Unique", "Dark", "Common"], "Pampered");
        a.genotype = Genotype::new(Allele::R, Allele::M);
        let mut b = creature(2, "Playful", ["Unique", "Drive", "Showy"], "Pampered");
        b.genotype = Genotype::new(Allele::B, Allele::R);
        let roster = vec![a, b];

        let egg = Egg::new(Genotype::new(Allele::R, Allele::R), (CreatureId(8), CreatureId(9)));
        let elixir = elixir("Playful", ["Unique", "Drive", "Showy"]);

        for seed in 0..10 {
            let resolution = resolve_hatch(
                &egg,
                &elixir,
                &roster,
                &TraitName::new("Pampered"),
                &mut PcgRng::new(seed),
            )
            .unwrap();
            assert_eq!(resolution.candidates, 2);
            assert_eq!(resolution.eligible, 1);
            assert_eq!(resolution.selected.map(|c| c.id), Some(CreatureId(1)));
        }
    }

    #[test]
    fn empty_pool_resolves_to_none() {
        let roster = vec![creature(1, "Brave", ["Gentle", "Sturdy", "Grim"], "Pampered")];
        let egg = Egg::new(Genotype::new(Allele::B, Allele::B), (CreatureId(8), CreatureId(9)));
        let elixir = elixir("Playful", ["Unique", "Drive", "Showy"]);

        let resolution =
            resolve_hatch(&egg, &elixir, &roster, &TraitName::new("Pampered"), &mut PcgRng::new(0))
                .unwrap();
        assert!(resolution.selected.is_none());
        assert_eq!(resolution.candidates, 0);
    }

    #[test]
    fn hatched_egg_is_rejected() {
        let mut egg = Egg::new(Genotype::new(Allele::B, Allele::B), (CreatureId(8), CreatureId(9)));
        egg.hatched = Some(CreatureId(1));
        let elixir = elixir("Playful", ["Unique", "Drive", "Showy"]);

        assert_eq!(
            resolve_hatch(&egg, &elixir, &[], &TraitName::new("Pampered"), &mut PcgRng::new(0)),
            Err(HatchError::AlreadyHatched)
        );
    }
}
