//! Phenotype and color-range filtering.

use crate::state::{ColorValue, CreatureId, Egg, RangeParseError};

use super::pool::CandidatePool;

/// Candidate excluded because its stored range data could not be parsed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkippedCandidate {
    pub creature: CreatureId,
    pub error: RangeParseError,
}

/// Output of [`filter_pool`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Filtered<'r> {
    pub pool: CandidatePool<'r>,
    pub skipped: Vec<SkippedCandidate>,
}

/// Keeps candidates whose phenotype matches the egg and whose channel ranges
/// contain every channel of `color`.
///
/// Metallic variants already share one phenotype, so they compare equal
/// here. A candidate with malformed range data is skipped and reported; the
/// rest of the pool is still filtered.
pub fn filter_pool<'r>(pool: &CandidatePool<'r>, egg: &Egg, color: ColorValue) -> Filtered<'r> {
    let target = egg.phenotype();
    let mut skipped = Vec::new();

    let pool = pool.retain_into(|entry| {
        let candidate = entry.creature;
        if candidate.phenotype() != target {
            return false;
        }
        match candidate.color_ranges.contains(color) {
            Ok(inside) => inside,
            Err(error) => {
                skipped.push(SkippedCandidate {
                    creature: candidate.id,
                    error,
                });
                false
            }
        }
    });

    Filtered { pool, skipped }
}
