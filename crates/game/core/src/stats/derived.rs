//! Stat derivation: trait bundle → combat stats, hit points and damage.
//!
//! All four stats start at zero and accumulate additively:
//!
//! ```text
//! primary    main += 10, off += 5        (primary table)
//! secondary  stat += 5 per known trait   (secondary table, grouped by flavor)
//! nurture    stat += 15                  (nurture table)
//! bonus      added verbatim              (player upgrades)
//! boss       all four += tier * 25
//!
//! max_hitpoints = base_hp * (1 + health / 100)
//! damage        = 100 * (1 + attack / 100)
//! ```
//!
//! Unknown trait names fall through every table and contribute nothing.

use crate::combat::base_damage;
use crate::config::{GameConfig, StatConfig};
use crate::env::TablesOracle;
use crate::state::{Creature, Role};

use super::core::Stats;
use super::resources::Hitpoints;

/// Output of [`derive_stats`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatSheet {
    pub stats: Stats,
    pub max_hitpoints: u32,
    /// Damage per hit before combat modifiers.
    pub damage: f64,
}

/// Stats contributed by the creature's traits alone (no bonus, no tier).
pub fn trait_stats(
    creature: &Creature,
    tables: &(impl TablesOracle + ?Sized),
    config: &StatConfig,
) -> Stats {
    let mut stats = Stats::ZERO;

    if let Some(primary) = tables.primary_stats(&creature.primary) {
        stats.add(primary.main, config.primary_main_bonus);
        stats.add(primary.off, config.primary_off_bonus);
    }

    for secondary in creature.secondaries.iter() {
        if let Some(kind) = tables.secondary_stat(secondary) {
            stats.add(kind, config.secondary_bonus);
        }
    }

    if let Some(kind) = tables.nurture_stat(&creature.nurture) {
        stats.add(kind, config.nurture_bonus);
    }

    stats
}

/// Base hit points before the health multiplier.
pub fn base_hitpoints(creature: &Creature, config: &StatConfig) -> u32 {
    match creature.role {
        Role::Boss { .. } => config.boss_base_hitpoints,
        Role::Companion => config
            .companion_base_hitpoints
            .saturating_add(creature.bonus.base_hitpoints),
    }
}

/// `base * (1 + health / 100)`, rounded, never below 1.
pub fn max_hitpoints(base: u32, health: i32) -> u32 {
    let scaled = base as f64 * (1.0 + health as f64 / 100.0);
    scaled.round().max(1.0) as u32
}

/// Derives the full stat sheet of a creature.
pub fn derive_stats(
    creature: &Creature,
    tables: &(impl TablesOracle + ?Sized),
    config: &GameConfig,
) -> StatSheet {
    let mut stats = trait_stats(creature, tables, &config.stats) + creature.bonus.stats;

    if let Role::Boss { tier } = creature.role {
        let tier = i32::try_from(tier).unwrap_or(i32::MAX);
        stats.add_all(tier.saturating_mul(config.stats.boss_tier_bonus));
    }

    StatSheet {
        stats,
        max_hitpoints: max_hitpoints(base_hitpoints(creature, &config.stats), stats.health),
        damage: base_damage(stats.attack, &config.combat),
    }
}

impl Creature {
    /// Re-derives stats and stores them on the creature.
    ///
    /// The first derivation fills hit points to the maximum. Later derivations
    /// keep the persisted current value, clamped to the new maximum.
    pub fn refresh_stats(
        &mut self,
        tables: &(impl TablesOracle + ?Sized),
        config: &GameConfig,
    ) -> StatSheet {
        let sheet = derive_stats(self, tables, config);
        self.stats = sheet.stats;
        match self.hitpoints.as_mut() {
            Some(hitpoints) => hitpoints.rescale(sheet.max_hitpoints),
            None => self.hitpoints = Some(Hitpoints::at_max(sheet.max_hitpoints)),
        }
        sheet
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::{BonusStats, StatKind};
    use crate::test_support::{FixedTables, creature};

    #[test]
    fn traits_accumulate_additively() {
        let tables = FixedTables::new();
        // Curious: dodge main, attack off. Showy: dodge. Drive: attack. Dark: attack.
        // Pampered: health.
        let c = creature(1, "Curious", ["Showy", "Drive", "Dark"], "Pampered");
        let stats = trait_stats(&c, &tables, &StatConfig::default());
        assert_eq!(stats, Stats::new(15, 15, 0, 15));
    }

    #[test]
    fn unknown_traits_contribute_nothing() {
        let tables = FixedTables::new();
        let c = creature(1, "Mystery", ["Nope", "Nada", "Zilch"], "Unknown");
        assert_eq!(
            trait_stats(&c, &tables, &StatConfig::default()),
            Stats::ZERO
        );
    }

    #[test]
    fn bonus_and_boss_tier_are_added() {
        let tables = FixedTables::new();
        let config = GameConfig::default();

        let companion = creature(1, "Curious", ["Showy", "Drive", "Dark"], "Pampered")
            .with_bonus(BonusStats::new(Stats::new(0, 10, 0, 0), 100));
        let sheet = derive_stats(&companion, &tables, &config);
        assert_eq!(sheet.stats.get(StatKind::Attack), 25);
        // (100 + 100) * (1 + 15/100)
        assert_eq!(sheet.max_hitpoints, 230);
        assert!((sheet.damage - 125.0).abs() < 1e-9);

        let boss = creature(2, "Curious", ["Showy", "Drive", "Dark"], "Pampered")
            .with_role(Role::Boss { tier: 2 });
        let sheet = derive_stats(&boss, &tables, &config);
        assert_eq!(sheet.stats, Stats::new(65, 65, 50, 65));
        // 1000 * (1 + 65/100)
        assert_eq!(sheet.max_hitpoints, 1650);
    }

    #[test]
    fn first_refresh_fills_hitpoints_later_refresh_keeps_them() {
        let tables = FixedTables::new();
        let config = GameConfig::default();
        let mut c = creature(1, "Curious", ["Showy", "Drive", "Dark"], "Pampered");

        let sheet = c.refresh_stats(&tables, &config);
        assert_eq!(c.hitpoints, Some(Hitpoints::at_max(sheet.max_hitpoints)));

        c.hitpoints = Some(Hitpoints::new(40, sheet.max_hitpoints));
        c.refresh_stats(&tables, &config);
        assert_eq!(c.current_hitpoints(), Some(40));
    }

    #[test]
    fn max_hitpoints_never_drops_below_one() {
        assert_eq!(max_hitpoints(100, 50), 150);
        assert_eq!(max_hitpoints(100, -100), 1);
        assert_eq!(max_hitpoints(100, -250), 1);
        assert_eq!(max_hitpoints(0, 0), 1);
    }
}
