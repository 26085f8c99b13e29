//! Offspring generation.

use crate::env::RngOracle;
use crate::error::{ErrorContext, ErrorSeverity, GameError};
use crate::genetics::Genotype;
use crate::state::{Creature, CreatureId, Egg};

/// Errors raised by [`breed`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BreedError {
    #[error("creature {creature} cannot breed with itself")]
    SelfPairing {
        creature: CreatureId,
        context: ErrorContext,
    },
}

impl BreedError {
    pub fn self_pairing(creature: CreatureId) -> Self {
        Self::SelfPairing {
            creature,
            context: ErrorContext::new()
                .with_creature(creature)
                .with_message("parents must be distinct"),
        }
    }
}

impl GameError for BreedError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn context(&self) -> Option<&ErrorContext> {
        match self {
            Self::SelfPairing { context, .. } => Some(context),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::SelfPairing { .. } => "BREED_SELF_PAIRING",
        }
    }
}

/// Produces an egg from two parents.
///
/// One allele is drawn uniformly from each parent's genotype (`a` first).
/// Compatibility is not re-checked here; callers run
/// [`can_breed`](super::can_breed) first.
pub fn breed(
    a: &Creature,
    b: &Creature,
    rng: &mut (impl RngOracle + ?Sized),
) -> Result<Egg, BreedError> {
    if a.id == b.id {
        return Err(BreedError::self_pairing(a.id));
    }

    let from_a = a.genotype.alleles()[rng.index(2)];
    let from_b = b.genotype.alleles()[rng.index(2)];

    Ok(Egg::new(Genotype::new(from_a, from_b), (a.id, b.id)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::breeding::can_breed;
    use crate::env::PcgRng;
    use crate::genetics::{Allele, Phenotype};
    use crate::test_support::{FixedTables, creature};
    use crate::traits::Gender;

    #[test]
    fn black_white_parents_only_yield_black_or_white() {
        let tables = FixedTables::new();
        let mut a = creature(1, "Curious", ["Showy", "Drive", "Dark"], "Pampered");
        a.genotype = Genotype::new(Allele::B, Allele::W);
        let mut b = creature(2, "Curious", ["Gentle", "Sturdy", "Grim"], "Feral");
        b.genotype = Genotype::new(Allele::W, Allele::W);
        b.gender = Gender::Female;

        let mut rng = PcgRng::new(42);
        assert!(can_breed(&a, &b, &tables, &mut rng));

        let mut seen = Vec::new();
        for _ in 0..200 {
            let egg = breed(&a, &b, &mut rng).unwrap();
            assert!(matches!(egg.phenotype(), Phenotype::Black | Phenotype::White));
            assert_eq!(egg.parents, (CreatureId(1), CreatureId(2)));
            assert!(!egg.is_hatched());
            if !seen.contains(&egg.genotype) {
                seen.push(egg.genotype);
            }
        }
        // Both (B,W) and (W,W) come up over enough draws.
        assert_eq!(seen.len(), 2);
    }

    #[test]
    fn homozygous_parents_breed_true() {
        let mut a = creature(1, "Curious", ["Showy", "Drive", "Dark"], "Pampered");
        a.genotype = Genotype::new(Allele::M, Allele::M);
        let mut b = a.clone();
        b.id = CreatureId(2);

        let egg = breed(&a, &b, &mut PcgRng::new(0)).unwrap();
        assert_eq!(egg.genotype, Genotype::new(Allele::M, Allele::M));
        assert_eq!(egg.phenotype(), Phenotype::Metallic);
    }

    #[test]
    fn rejects_self_pairing() {
        let a = creature(1, "Curious", ["Showy", "Drive", "Dark"], "Pampered");
        let err = breed(&a, &a, &mut PcgRng::new(0)).unwrap_err();
        assert_eq!(err.error_code(), "BREED_SELF_PAIRING");
        assert_eq!(
            err.context().and_then(|c| c.creature),
            Some(CreatureId(1))
        );
    }
}
