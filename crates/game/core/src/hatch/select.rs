//! Weighted draw from a filtered pool.

use crate::env::RngOracle;
use crate::state::Creature;

use super::pool::CandidatePool;

/// Uniform draw over the expanded multiset, i.e. each candidate with
/// probability `weight / total_weight`.
///
/// `None` for an empty pool. Consumes one random value otherwise.
pub fn select_from_pool<'r>(
    pool: &CandidatePool<'r>,
    rng: &mut (impl RngOracle + ?Sized),
) -> Option<&'r Creature> {
    let total = pool.total_weight();
    if total == 0 {
        return None;
    }

    let ticket = rng.below(total);
    pool.entry_at(ticket).map(|entry| entry.creature)
}
