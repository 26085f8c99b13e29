//! The four combat stats and the permanent bonuses layered on top of them.

/// Enum naming one of the four combat stats.
///
/// Used as the value type of every trait → stat table.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum StatKind {
    Health,
    Attack,
    Defense,
    Dodge,
}

/// Health, attack, defense and dodge totals.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Stats {
    pub health: i32,
    pub attack: i32,
    pub defense: i32,
    pub dodge: i32,
}

impl Stats {
    pub const ZERO: Self = Self {
        health: 0,
        attack: 0,
        defense: 0,
        dodge: 0,
    };

    pub const fn new(health: i32, attack: i32, defense: i32, dodge: i32) -> Self {
        Self {
            health,
            attack,
            defense,
            dodge,
        }
    }

    pub fn get(&self, kind: StatKind) -> i32 {
        match kind {
            StatKind::Health => self.health,
            StatKind::Attack => self.attack,
            StatKind::Defense => self.defense,
            StatKind::Dodge => self.dodge,
        }
    }

    pub fn add(&mut self, kind: StatKind, amount: i32) {
        let slot = match kind {
            StatKind::Health => &mut self.health,
            StatKind::Attack => &mut self.attack,
            StatKind::Defense => &mut self.defense,
            StatKind::Dodge => &mut self.dodge,
        };
        *slot += amount;
    }

    /// Adds `amount` to all four stats.
    pub fn add_all(&mut self, amount: i32) {
        self.health += amount;
        self.attack += amount;
        self.defense += amount;
        self.dodge += amount;
    }
}

impl std::ops::Add for Stats {
    type Output = Stats;

    fn add(self, rhs: Stats) -> Stats {
        Stats {
            health: self.health + rhs.health,
            attack: self.attack + rhs.attack,
            defense: self.defense + rhs.defense,
            dodge: self.dodge + rhs.dodge,
        }
    }
}

/// Gameplay-earned upgrades, tracked separately from trait-derived stats and
/// added verbatim during derivation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BonusStats {
    pub stats: Stats,
    /// Added to the companion base hit points before the health multiplier.
    pub base_hitpoints: u32,
}

impl BonusStats {
    pub const fn new(stats: Stats, base_hitpoints: u32) -> Self {
        Self {
            stats,
            base_hitpoints,
        }
    }
}
