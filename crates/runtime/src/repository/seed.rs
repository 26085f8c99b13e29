//! Writing a fresh save from content.

use game_content::StartingInventory;
use game_core::Creature;

use super::{Result, SaveRepository};

/// Writes the roster, the starting collection and the stocked elixirs into
/// an empty repository.
pub fn seed_save(
    repo: &(impl SaveRepository + ?Sized),
    roster: &[Creature],
    inventory: &StartingInventory,
) -> Result<()> {
    for creature in roster {
        repo.insert_creature(creature)?;
    }
    for id in &inventory.collection {
        repo.add_to_collection(*id)?;
    }
    for stocked in &inventory.elixirs {
        repo.insert_elixir(stocked.slot, &stocked.elixir)?;
    }

    tracing::info!(
        "Seeded save with {} creatures, {} owned, {} elixirs",
        roster.len(),
        inventory.collection.len(),
        inventory.elixirs.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::InMemorySaveRepository;
    use game_content::Bundled;

    #[test]
    fn bundled_content_seeds_cleanly() {
        let repo = InMemorySaveRepository::new();
        let roster = Bundled::roster().unwrap();
        let inventory = Bundled::inventory().unwrap();

        seed_save(&repo, &roster, &inventory).unwrap();

        let bosses = repo.load_bosses().unwrap();
        assert_eq!(repo.load_roster().unwrap().len() + bosses.len(), roster.len());
        assert_eq!(repo.load_collection().unwrap(), inventory.collection);
        assert_eq!(repo.load_inventory().unwrap().len(), inventory.elixirs.len());
    }

    #[test]
    fn seeding_twice_is_rejected() {
        let repo = InMemorySaveRepository::new();
        let roster = Bundled::roster().unwrap();
        let inventory = Bundled::inventory().unwrap();

        seed_save(&repo, &roster, &inventory).unwrap();
        assert!(seed_save(&repo, &roster, &inventory).is_err());
    }
}
