//! Balance constants and tunable parameters.
//!
//! The combat and stat numbers are hand-tuned balance values. They are kept
//! as configuration rather than derived from a formula, and every field has
//! a default so partial TOML files only override what they name.

use crate::error::{ErrorSeverity, GameError};
use crate::traits::TraitName;

/// Game configuration root.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    pub combat: CombatConfig,
    pub stats: StatConfig,
    pub hatch: HatchConfig,
}

impl GameConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks cross-field constraints that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.combat.validate()?;
        self.hatch.validate()
    }
}

/// Combat resolution constants.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CombatConfig {
    /// Damage at 0 attack; scales by `1 + attack / 100`.
    pub base_damage: f64,
    /// Multiplier when attacker and boss share a primary trait.
    pub primary_match_multiplier: f64,
    /// Lower bound of the per-hit damage variance.
    pub variance_min: f64,
    /// Upper bound of the per-hit damage variance.
    pub variance_max: f64,
    /// Reduction by count of shared secondary traits (0, 1, 2, 3).
    pub reduction_tiers: [f64; 4],
    /// Ceiling of the combined boss-hit reduction.
    pub reduction_cap: f64,
    /// Boss hits never drop below this fraction of their base damage.
    pub min_damage_fraction: f64,
    /// Defense points per 100% reduction.
    pub defense_divisor: f64,
    /// Dodge chance when neither side has any dodge.
    pub dodge_even: f64,
    /// Lowest dodge chance for positive inputs.
    pub dodge_floor: f64,
    /// Width of the dodge band above the floor.
    pub dodge_span: f64,
}

impl CombatConfig {
    pub const DEFAULT_REDUCTION_TIERS: [f64; 4] = [0.0, 0.15, 0.30, 0.50];

    /// Checks that every bout terminates.
    ///
    /// Each hit that lands must deal at least 1 point and no dodge chance may
    /// reach 1.
    fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("combat.base_damage", self.base_damage),
            ("combat.primary_match_multiplier", self.primary_match_multiplier),
            ("combat.variance_min", self.variance_min),
            ("combat.min_damage_fraction", self.min_damage_fraction),
            ("combat.defense_divisor", self.defense_divisor),
        ] {
            if value.is_nan() || value <= 0.0 {
                return Err(ConfigError::NonPositive { field });
            }
        }
        if self.variance_min > self.variance_max {
            return Err(ConfigError::InvertedRange {
                field: "combat.variance",
            });
        }
        if self
            .reduction_tiers
            .iter()
            .any(|tier| !(0.0..1.0).contains(tier))
        {
            return Err(ConfigError::FractionOutOfRange {
                field: "combat.reduction_tiers",
            });
        }
        if !(0.0..=1.0).contains(&self.reduction_cap)
            || !(0.0..=1.0).contains(&self.min_damage_fraction)
        {
            return Err(ConfigError::FractionOutOfRange {
                field: "combat.reduction",
            });
        }
        if !(0.0..1.0).contains(&self.dodge_even) {
            return Err(ConfigError::FractionOutOfRange {
                field: "combat.dodge_even",
            });
        }
        if self.dodge_floor < 0.0
            || self.dodge_span < 0.0
            || !(0.0..1.0).contains(&(self.dodge_floor + self.dodge_span))
        {
            return Err(ConfigError::FractionOutOfRange {
                field: "combat.dodge",
            });
        }
        if self.weakest_player_hit() < 0.5 {
            return Err(ConfigError::HarmlessHits);
        }
        Ok(())
    }

    /// Smallest unrounded damage a landed player hit can deal.
    fn weakest_player_hit(&self) -> f64 {
        let top_tier = self.reduction_tiers.iter().copied().fold(0.0, f64::max);
        self.base_damage
            * self.primary_match_multiplier.min(1.0)
            * self.variance_min
            * (1.0 - top_tier)
    }
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self {
            base_damage: 100.0,
            primary_match_multiplier: 2.0,
            variance_min: 0.9,
            variance_max: 1.1,
            reduction_tiers: Self::DEFAULT_REDUCTION_TIERS,
            reduction_cap: 0.75,
            min_damage_fraction: 0.25,
            defense_divisor: 400.0,
            dodge_even: 0.5,
            dodge_floor: 0.05,
            dodge_span: 0.90,
        }
    }
}

/// Stat derivation constants.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StatConfig {
    pub primary_main_bonus: i32,
    pub primary_off_bonus: i32,
    pub secondary_bonus: i32,
    pub nurture_bonus: i32,
    /// Added to all four stats per boss tier.
    pub boss_tier_bonus: i32,
    pub boss_base_hitpoints: u32,
    /// Base before the creature's own bonus-base-hitpoints.
    pub companion_base_hitpoints: u32,
}

impl Default for StatConfig {
    fn default() -> Self {
        Self {
            primary_main_bonus: 10,
            primary_off_bonus: 5,
            secondary_bonus: 5,
            nurture_bonus: 15,
            boss_tier_bonus: 25,
            boss_base_hitpoints: 1000,
            companion_base_hitpoints: 100,
        }
    }
}

/// Incubator constants.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HatchConfig {
    /// Ticks between applying an elixir and hatch resolution.
    pub countdown_ticks: u32,
    /// Nurture trait used when the countdown expires with no choice made.
    pub default_nurture: TraitName,
}

impl HatchConfig {
    pub const DEFAULT_COUNTDOWN_TICKS: u32 = 300;

    fn validate(&self) -> Result<(), ConfigError> {
        if self.countdown_ticks == 0 {
            return Err(ConfigError::NonPositive {
                field: "hatch.countdown_ticks",
            });
        }
        Ok(())
    }
}

impl Default for HatchConfig {
    fn default() -> Self {
        Self {
            countdown_ticks: Self::DEFAULT_COUNTDOWN_TICKS,
            default_nurture: TraitName::new("Pampered"),
        }
    }
}

/// Invalid configuration values.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{field}: lower bound exceeds upper bound")]
    InvertedRange { field: &'static str },

    #[error("{field}: fraction outside [0, 1]")]
    FractionOutOfRange { field: &'static str },

    #[error("{field}: must be positive")]
    NonPositive { field: &'static str },

    #[error("combat: the weakest player hit rounds to 0 damage")]
    HarmlessHits,
}

impl GameError for ConfigError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvertedRange { .. } => "CONFIG_INVERTED_RANGE",
            Self::FractionOutOfRange { .. } => "CONFIG_FRACTION_OUT_OF_RANGE",
            Self::NonPositive { .. } => "CONFIG_NON_POSITIVE",
            Self::HarmlessHits => "CONFIG_HARMLESS_HITS",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(GameConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_inverted_variance() {
        let mut config = GameConfig::default();
        config.combat.variance_min = 1.2;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvertedRange { .. })
        ));
    }

    #[test]
    fn rejects_zero_countdown() {
        let mut config = GameConfig::default();
        config.hatch.countdown_ticks = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositive { .. })
        ));
    }

    fn rejected(edit: impl FnOnce(&mut CombatConfig)) -> ConfigError {
        let mut config = GameConfig::default();
        edit(&mut config.combat);
        config.validate().unwrap_err()
    }

    #[test]
    fn rejects_certain_dodge_when_neither_side_dodges() {
        assert_eq!(
            rejected(|c| c.dodge_even = 1.0),
            ConfigError::FractionOutOfRange {
                field: "combat.dodge_even"
            }
        );
        assert!(matches!(
            rejected(|c| c.dodge_even = -0.1),
            ConfigError::FractionOutOfRange { .. }
        ));
    }

    #[test]
    fn rejects_dodge_band_reaching_one() {
        assert_eq!(
            rejected(|c| {
                c.dodge_floor = 0.10;
                c.dodge_span = 0.90;
            }),
            ConfigError::FractionOutOfRange {
                field: "combat.dodge"
            }
        );
    }

    #[test]
    fn rejects_non_positive_damage_inputs() {
        assert_eq!(
            rejected(|c| c.base_damage = 0.0),
            ConfigError::NonPositive {
                field: "combat.base_damage"
            }
        );
        assert_eq!(
            rejected(|c| c.variance_min = 0.0),
            ConfigError::NonPositive {
                field: "combat.variance_min"
            }
        );
        assert_eq!(
            rejected(|c| c.min_damage_fraction = 0.0),
            ConfigError::NonPositive {
                field: "combat.min_damage_fraction"
            }
        );
        assert_eq!(
            rejected(|c| c.base_damage = f64::NAN),
            ConfigError::NonPositive {
                field: "combat.base_damage"
            }
        );
    }

    #[test]
    fn rejects_full_reduction_tier() {
        assert_eq!(
            rejected(|c| c.reduction_tiers[3] = 1.0),
            ConfigError::FractionOutOfRange {
                field: "combat.reduction_tiers"
            }
        );
    }

    #[test]
    fn rejects_hits_that_round_to_nothing() {
        assert_eq!(
            rejected(|c| c.base_damage = 0.4),
            ConfigError::HarmlessHits
        );
        // 1.0 * 0.9 * (1 - 0.5) = 0.45 still rounds to 0.
        assert_eq!(
            rejected(|c| c.base_damage = 1.0),
            ConfigError::HarmlessHits
        );

        let mut config = GameConfig::default();
        config.combat.base_damage = 2.0;
        assert_eq!(config.validate(), Ok(()));
    }
}
