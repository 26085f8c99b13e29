//! Damage calculation and application.

use crate::config::CombatConfig;

/// Damage per hit before combat modifiers.
///
/// ```text
/// base_damage * (1 + attack / 100)
/// ```
///
/// Negative attack counts as 0, so a hit never falls below `base_damage`.
pub fn base_damage(attack: i32, config: &CombatConfig) -> f64 {
    config.base_damage * (1.0 + attack.max(0) as f64 / 100.0)
}

/// Reduction granted by the number of secondary traits two combatants share.
///
/// Counts above 3 use the last tier; the result is always one of the four
/// configured tiers.
pub fn trait_match_reduction(shared_secondaries: usize, config: &CombatConfig) -> f64 {
    let tier = shared_secondaries.min(config.reduction_tiers.len() - 1);
    config.reduction_tiers[tier]
}

/// Damage a player creature deals to the boss.
///
/// # Formula
///
/// ```text
/// round(base_damage(attack)
///       * (primary_match_multiplier if primaries match else 1)
///       * variance                      (drawn from [variance_min, variance_max))
///       * (1 - trait_match_reduction(shared)))
/// ```
pub fn player_hit_damage(
    attack: i32,
    primary_match: bool,
    shared_secondaries: usize,
    variance: f64,
    config: &CombatConfig,
) -> u32 {
    let multiplier = if primary_match {
        config.primary_match_multiplier
    } else {
        1.0
    };
    let reduction = trait_match_reduction(shared_secondaries, config);

    let damage = base_damage(attack, config) * multiplier * variance * (1.0 - reduction);
    damage.round().max(0.0) as u32
}

/// Damage the boss deals to a player creature, before rounding.
///
/// # Formula
///
/// ```text
/// base      = base_damage(boss_attack)
/// reduction = min(reduction_cap, defense / defense_divisor + trait_match_reduction(shared))
/// effective = max(base * min_damage_fraction, base * (1 - reduction))
/// ```
pub fn boss_hit_damage(
    boss_attack: i32,
    defense: i32,
    shared_secondaries: usize,
    config: &CombatConfig,
) -> f64 {
    let base = base_damage(boss_attack, config);
    let reduction = (defense.max(0) as f64 / config.defense_divisor
        + trait_match_reduction(shared_secondaries, config))
    .min(config.reduction_cap);

    (base * config.min_damage_fraction).max(base * (1.0 - reduction))
}

/// Subtracts damage from current hit points, clamped to 0.
pub fn apply_damage(current_hp: u32, damage: u32) -> u32 {
    current_hp.saturating_sub(damage)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_damage_scales_with_attack() {
        let cfg = CombatConfig::default();
        assert_eq!(base_damage(0, &cfg), 100.0);
        assert_eq!(base_damage(50, &cfg), 150.0);
        assert_eq!(base_damage(-300, &cfg), 100.0);
    }

    #[test]
    fn reduction_is_always_a_configured_tier() {
        let cfg = CombatConfig::default();
        let tiers = [0.0, 0.15, 0.30, 0.50];
        for shared in 0..10 {
            let reduction = trait_match_reduction(shared, &cfg);
            assert!(tiers.contains(&reduction), "{shared} → {reduction}");
        }
        assert_eq!(trait_match_reduction(2, &cfg), 0.30);
        assert_eq!(trait_match_reduction(7, &cfg), 0.50);
    }

    #[test]
    fn player_hit_applies_multiplier_variance_and_reduction() {
        let cfg = CombatConfig::default();
        assert_eq!(player_hit_damage(0, false, 0, 1.0, &cfg), 100);
        assert_eq!(player_hit_damage(0, true, 0, 1.0, &cfg), 200);
        assert_eq!(player_hit_damage(50, false, 0, 0.9, &cfg), 135);
        // 200 * 1.0 * (1 - 0.5)
        assert_eq!(player_hit_damage(100, false, 3, 1.0, &cfg), 100);
    }

    #[test]
    fn boss_hit_never_below_floor() {
        let cfg = CombatConfig::default();
        for attack in [0, 40, 250] {
            let base = base_damage(attack, &cfg);
            for defense in [0, 100, 300, 1_000, 100_000] {
                for shared in 0..=3 {
                    let damage = boss_hit_damage(attack, defense, shared, &cfg);
                    assert!(damage >= 0.25 * base - 1e-9);
                    assert!(damage <= base + 1e-9);
                }
            }
        }
    }

    #[test]
    fn boss_hit_reduction_combines_defense_and_traits() {
        let cfg = CombatConfig::default();
        // 100 defense → 0.25, one shared trait → 0.15.
        assert!((boss_hit_damage(0, 100, 1, &cfg) - 60.0).abs() < 1e-9);
        // Capped at 0.75.
        assert!((boss_hit_damage(0, 400, 3, &cfg) - 25.0).abs() < 1e-9);
    }

    #[test]
    fn apply_damage_clamps_to_zero() {
        assert_eq!(apply_damage(30, 12), 18);
        assert_eq!(apply_damage(30, 45), 0);
    }
}
