//! Dodge chance and dodge checks.

use crate::config::CombatConfig;
use crate::env::RngOracle;

/// Chance that the defender dodges an incoming strike.
///
/// # Formula
///
/// ```text
/// both dodges 0  →  dodge_even                                  (0.5)
/// otherwise      →  dodge_floor + dodge_span * d / (d + a)      (0.05 + 0.90 * …)
/// ```
///
/// Negative dodge values count as 0. For positive inputs the result lies
/// strictly inside `(dodge_floor, dodge_floor + dodge_span)`.
pub fn dodge_chance(defender_dodge: i32, attacker_dodge: i32, config: &CombatConfig) -> f64 {
    let defender = defender_dodge.max(0) as f64;
    let attacker = attacker_dodge.max(0) as f64;

    if defender == 0.0 && attacker == 0.0 {
        return config.dodge_even;
    }

    config.dodge_floor + config.dodge_span * (defender / (defender + attacker))
}

/// Rolls a dodge for the defender.
pub fn check_dodge(
    defender_dodge: i32,
    attacker_dodge: i32,
    config: &CombatConfig,
    rng: &mut (impl RngOracle + ?Sized),
) -> bool {
    rng.chance(dodge_chance(defender_dodge, attacker_dodge, config))
}
