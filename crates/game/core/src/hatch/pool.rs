//! Weighted candidate pool for one hatch event.

use crate::state::{Creature, CreatureId, Elixir};
use crate::traits::TraitName;

/// One candidate and its weight (always > 0).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PoolEntry<'r> {
    pub creature: &'r Creature,
    pub weight: u32,
}

/// Weight-proportional multiset of roster creatures.
///
/// Stored as `(creature, weight)` entries plus a running prefix sum, so a
/// draw is one random number and a binary search. [`CandidatePool::expanded`]
/// gives the duplicated view (each creature `weight` times).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CandidatePool<'r> {
    entries: Vec<PoolEntry<'r>>,
    prefix: Vec<u32>,
}

impl<'r> CandidatePool<'r> {
    /// Builds a pool; zero-weight entries are dropped.
    pub fn from_entries(entries: impl IntoIterator<Item = PoolEntry<'r>>) -> Self {
        let mut pool = Self::default();
        for entry in entries {
            pool.push(entry);
        }
        pool
    }

    fn push(&mut self, entry: PoolEntry<'r>) {
        if entry.weight == 0 {
            return;
        }
        let total = self.total_weight().saturating_add(entry.weight);
        self.entries.push(entry);
        self.prefix.push(total);
    }

    pub fn entries(&self) -> &[PoolEntry<'r>] {
        &self.entries
    }

    /// Number of distinct candidates.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Size of the expanded multiset.
    pub fn total_weight(&self) -> u32 {
        self.prefix.last().copied().unwrap_or(0)
    }

    pub fn weight_of(&self, id: CreatureId) -> u32 {
        self.entries
            .iter()
            .find(|entry| entry.creature.id == id)
            .map_or(0, |entry| entry.weight)
    }

    /// Duplication view: each creature repeated `weight` times.
    pub fn expanded(&self) -> impl Iterator<Item = &'r Creature> + '_ {
        self.entries
            .iter()
            .flat_map(|entry| std::iter::repeat_n(entry.creature, entry.weight as usize))
    }

    /// Entry holding position `ticket` of the expanded multiset.
    pub(crate) fn entry_at(&self, ticket: u32) -> Option<&PoolEntry<'r>> {
        let index = self.prefix.partition_point(|&end| end <= ticket);
        self.entries.get(index)
    }

    /// New pool keeping only entries accepted by `keep`.
    pub(crate) fn retain_into(&self, mut keep: impl FnMut(&PoolEntry<'r>) -> bool) -> Self {
        Self::from_entries(self.entries.iter().copied().filter(|entry| keep(entry)))
    }
}

/// Hatch weight of one candidate.
///
/// ```text
/// +1  primary equals the elixir's primary
/// +1  per candidate secondary found among the elixir's secondaries
/// +1  nurture equals the selected nurture, only if the weight is already > 0
/// ```
pub fn candidate_weight(
    candidate: &Creature,
    elixir: &Elixir,
    selected_nurture: &TraitName,
) -> u32 {
    let mut weight = u32::from(candidate.primary == elixir.primary);
    weight += candidate.secondaries.shared_with(elixir.secondaries.iter()) as u32;

    if weight > 0 && candidate.nurture == *selected_nurture {
        weight += 1;
    }
    weight
}

/// Weighs every roster creature against the elixir.
///
/// The whole roster is considered; eligibility filtering is
/// [`filter_pool`](super::filter_pool)'s job.
pub fn build_candidate_pool<'r>(
    elixir: &Elixir,
    roster: &'r [Creature],
    selected_nurture: &TraitName,
) -> CandidatePool<'r> {
    CandidatePool::from_entries(roster.iter().map(|creature| PoolEntry {
        creature,
        weight: candidate_weight(creature, elixir, selected_nurture),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{creature, elixir};

    #[test]
    fn playful_candidate_weighs_two() {
        let elixir = elixir("Playful", ["Unique", "Drive", "Showy"]);
        let roster = vec![creature(1, "Playful", ["Unique", "Dark", "Common"], "Pampered")];

        let pool = build_candidate_pool(&elixir, &roster, &TraitName::new("Trained"));
        assert_eq!(pool.weight_of(CreatureId(1)), 2);
        assert_eq!(pool.total_weight(), 2);
        assert_eq!(
            pool.expanded().filter(|c| c.id == CreatureId(1)).count(),
            2
        );
    }

    #[test]
    fn nurture_only_counts_on_top_of_a_match() {
        let elixir = elixir("Playful", ["Unique", "Drive", "Showy"]);
        let nurture = TraitName::new("Pampered");

        let matching = creature(1, "Playful", ["Unique", "Dark", "Common"], "Pampered");
        assert_eq!(candidate_weight(&matching, &elixir, &nurture), 3);

        let unrelated = creature(2, "Brave", ["Gentle", "Sturdy", "Grim"], "Pampered");
        assert_eq!(candidate_weight(&unrelated, &elixir, &nurture), 0);
    }

    #[test]
    fn zero_weight_never_appears() {
        let elixir = elixir("Playful", ["Unique", "Drive", "Showy"]);
        let roster = vec![
            creature(1, "Brave", ["Gentle", "Sturdy", "Grim"], "Pampered"),
            creature(2, "Curious", ["Showy", "Drive", "Dark"], "Feral"),
            creature(3, "Calm", ["Hearty", "Steady", "Brooding"], "Pampered"),
        ];

        let pool = build_candidate_pool(&elixir, &roster, &TraitName::new("Pampered"));
        assert_eq!(pool.len(), 1);
        assert!(pool.expanded().all(|c| c.id == CreatureId(2)));
        assert_eq!(pool.total_weight(), 2);
    }

    #[test]
    fn full_match_weighs_five() {
        let elixir = elixir("Playful", ["Unique", "Drive", "Showy"]);
        let best = creature(1, "Playful", ["Showy", "Unique", "Drive"], "Feral");
        assert_eq!(candidate_weight(&best, &elixir, &TraitName::new("Feral")), 5);
    }

    #[test]
    fn tickets_map_onto_entries() {
        let elixir = elixir("Playful", ["Unique", "Drive", "Showy"]);
        let roster = vec![
            creature(1, "Playful", ["Unique", "Dark", "Common"], "Pampered"),
            creature(2, "Curious", ["Showy", "Drive", "Dark"], "Feral"),
        ];
        let pool = build_candidate_pool(&elixir, &roster, &TraitName::new("Trained"));

        let owners: Vec<u32> = (0..pool.total_weight())
            .filter_map(|ticket| pool.entry_at(ticket))
            .map(|entry| entry.creature.id.0)
            .collect();
        assert_eq!(owners, vec![1, 1, 2, 2]);
        assert!(pool.entry_at(4).is_none());
    }
}
