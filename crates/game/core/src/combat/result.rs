//! Bout state machine: a player roster against one boss.

use crate::config::GameConfig;
use crate::env::{RngOracle, TablesOracle};
use crate::error::{ErrorSeverity, GameError};
use crate::state::{Creature, CreatureId};
use crate::stats::{Hitpoints, Stats, derive_stats};
use crate::traits::{SecondaryTraits, TraitName};

use super::damage::{apply_damage, boss_hit_damage, player_hit_damage};
use super::hit::check_dodge;

/// State of a bout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CombatOutcome {
    InProgress,
    PlayersWin,
    BossWins,
}

impl CombatOutcome {
    pub fn is_finished(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Direction of a single strike.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strike {
    /// A player creature attacks the boss.
    Attack,
    /// The boss answers the creature that just attacked.
    Counter,
}

/// One strike in the combat log.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Exchange {
    pub round: u32,
    pub strike: Strike,
    pub attacker: CreatureId,
    pub defender: CreatureId,
    pub dodged: bool,
    pub damage: u32,
    /// Defender hit points after the strike (0 when knocked out).
    pub defender_hp: u32,
}

/// Ordered record of every strike in a bout.
pub type CombatLog = Vec<Exchange>;

/// Final hit points of one participant, already floored to 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FinalHitpoints {
    pub creature: CreatureId,
    pub hitpoints: Hitpoints,
}

/// Result of [`resolve_combat`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatReport {
    pub outcome: CombatOutcome,
    pub rounds: u32,
    pub boss: FinalHitpoints,
    /// Player hit points to persist, in roster order.
    pub players: Vec<FinalHitpoints>,
    pub log: CombatLog,
}

/// Errors that prevent a bout from starting.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CombatError {
    #[error("player roster is empty")]
    EmptyRoster,

    #[error("creature {0} is not a boss")]
    NotABoss(CreatureId),

    #[error("creature {0} is listed more than once")]
    DuplicateCombatant(CreatureId),
}

impl GameError for CombatError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyRoster => "COMBAT_EMPTY_ROSTER",
            Self::NotABoss(_) => "COMBAT_NOT_A_BOSS",
            Self::DuplicateCombatant(_) => "COMBAT_DUPLICATE_COMBATANT",
        }
    }
}

#[derive(Clone, Debug)]
struct Combatant {
    id: CreatureId,
    primary: TraitName,
    secondaries: SecondaryTraits,
    stats: Stats,
    hitpoints: Hitpoints,
}

impl Combatant {
    fn alive(&self) -> bool {
        !self.hitpoints.is_down()
    }

    fn finish(&self) -> FinalHitpoints {
        FinalHitpoints {
            creature: self.id,
            hitpoints: Hitpoints::new(self.hitpoints.current.max(1), self.hitpoints.max),
        }
    }
}

/// A bout in progress.
///
/// Derived stats are fixed when the bout starts. Each call to
/// [`Bout::play_round`] walks the roster once in order; every living creature
/// attacks and, if the boss is still standing, receives a counter-attack.
#[derive(Clone, Debug)]
pub struct Bout<'c> {
    config: &'c GameConfig,
    boss: Combatant,
    players: Vec<Combatant>,
    outcome: CombatOutcome,
    rounds: u32,
    log: CombatLog,
}

impl<'c> Bout<'c> {
    /// Boss starts at full hit points; players at their persisted current
    /// value (or full, if never derived).
    pub fn start(
        players: &[Creature],
        boss: &Creature,
        tables: &(impl TablesOracle + ?Sized),
        config: &'c GameConfig,
    ) -> Result<Self, CombatError> {
        if players.is_empty() {
            return Err(CombatError::EmptyRoster);
        }
        if !boss.is_boss() {
            return Err(CombatError::NotABoss(boss.id));
        }
        for (index, player) in players.iter().enumerate() {
            if player.id == boss.id || players[..index].iter().any(|p| p.id == player.id) {
                return Err(CombatError::DuplicateCombatant(player.id));
            }
        }

        let boss_sheet = derive_stats(boss, tables, config);
        let boss = Combatant {
            id: boss.id,
            primary: boss.primary.clone(),
            secondaries: boss.secondaries.clone(),
            stats: boss_sheet.stats,
            hitpoints: Hitpoints::at_max(boss_sheet.max_hitpoints),
        };

        let players = players
            .iter()
            .map(|creature| {
                let sheet = derive_stats(creature, tables, config);
                let hitpoints = match creature.hitpoints {
                    Some(hp) => {
                        Hitpoints::new(hp.current.min(sheet.max_hitpoints), sheet.max_hitpoints)
                    }
                    None => Hitpoints::at_max(sheet.max_hitpoints),
                };
                Combatant {
                    id: creature.id,
                    primary: creature.primary.clone(),
                    secondaries: creature.secondaries.clone(),
                    stats: sheet.stats,
                    hitpoints,
                }
            })
            .collect::<Vec<_>>();

        let mut bout = Self {
            config,
            boss,
            players,
            outcome: CombatOutcome::InProgress,
            rounds: 0,
            log: CombatLog::new(),
        };
        bout.outcome = bout.evaluate();
        Ok(bout)
    }

    pub fn outcome(&self) -> CombatOutcome {
        self.outcome
    }

    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    pub fn log(&self) -> &[Exchange] {
        &self.log
    }

    pub fn boss_hitpoints(&self) -> Hitpoints {
        self.boss.hitpoints
    }

    fn evaluate(&self) -> CombatOutcome {
        if self.boss.hitpoints.is_down() {
            CombatOutcome::PlayersWin
        } else if self.players.iter().all(|p| !p.alive()) {
            CombatOutcome::BossWins
        } else {
            CombatOutcome::InProgress
        }
    }

    /// Plays one pass over the roster and returns the resulting state.
    pub fn play_round(&mut self, rng: &mut (impl RngOracle + ?Sized)) -> CombatOutcome {
        if self.outcome.is_finished() {
            return self.outcome;
        }

        self.rounds += 1;
        let combat = &self.config.combat;

        for index in 0..self.players.len() {
            if !self.players[index].alive() {
                continue;
            }

            let player = &self.players[index];
            let shared = player.secondaries.shared_with(self.boss.secondaries.iter());

            // Attack on the boss.
            let dodged = check_dodge(self.boss.stats.dodge, player.stats.dodge, combat, rng);
            let damage = if dodged {
                0
            } else {
                let variance = rng.range_f64(combat.variance_min, combat.variance_max);
                player_hit_damage(
                    player.stats.attack,
                    player.primary == self.boss.primary,
                    shared,
                    variance,
                    combat,
                )
            };
            self.boss.hitpoints.current = apply_damage(self.boss.hitpoints.current, damage);
            self.log.push(Exchange {
                round: self.rounds,
                strike: Strike::Attack,
                attacker: player.id,
                defender: self.boss.id,
                dodged,
                damage,
                defender_hp: self.boss.hitpoints.current,
            });

            if self.boss.hitpoints.is_down() {
                break;
            }

            // Counter-attack on the creature.
            let dodged = check_dodge(player.stats.dodge, self.boss.stats.dodge, combat, rng);
            let damage = if dodged {
                0
            } else {
                boss_hit_damage(self.boss.stats.attack, player.stats.defense, shared, combat)
                    .round() as u32
            };
            let attacker = self.boss.id;
            let player = &mut self.players[index];
            player.hitpoints.current = apply_damage(player.hitpoints.current, damage);
            self.log.push(Exchange {
                round: self.rounds,
                strike: Strike::Counter,
                attacker,
                defender: player.id,
                dodged,
                damage,
                defender_hp: player.hitpoints.current,
            });
        }

        self.outcome = self.evaluate();
        self.outcome
    }

    /// Ends the bout: participants at 0 are raised to 1.
    pub fn finish(self) -> CombatReport {
        CombatReport {
            outcome: self.outcome,
            rounds: self.rounds,
            boss: self.boss.finish(),
            players: self.players.iter().map(Combatant::finish).collect(),
            log: self.log,
        }
    }
}

/// Runs a bout to completion.
///
/// There is no round limit. Under a config that passes
/// [`GameConfig::validate`] every player hit that lands deals at least 1
/// point and no dodge chance reaches 1, so the loop ends with probability 1.
pub fn resolve_combat(
    players: &[Creature],
    boss: &Creature,
    tables: &(impl TablesOracle + ?Sized),
    config: &GameConfig,
    rng: &mut (impl RngOracle + ?Sized),
) -> Result<CombatReport, CombatError> {
    let mut bout = Bout::start(players, boss, tables, config)?;
    while !bout.outcome().is_finished() {
        bout.play_round(rng);
    }
    Ok(bout.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::PcgRng;
    use crate::state::Role;
    use crate::stats::{BonusStats, Stats};
    use crate::test_support::{FixedTables, ScriptedRng, creature};

    fn boss() -> Creature {
        // Brave: attack/defense. Sturdy, Steady: defense. Hearty: health.
        creature(100, "Brave", ["Sturdy", "Hearty", "Steady"], "Sheltered")
            .with_role(Role::Boss { tier: 0 })
    }

    #[test]
    fn rejects_bad_rosters() {
        let tables = FixedTables::new();
        let config = GameConfig::default();
        let player = creature(1, "Curious", ["Showy", "Drive", "Dark"], "Pampered");

        assert_eq!(
            Bout::start(&[], &boss(), &tables, &config).err(),
            Some(CombatError::EmptyRoster)
        );
        assert_eq!(
            Bout::start(&[player.clone()], &player, &tables, &config).err(),
            Some(CombatError::NotABoss(CreatureId(1)))
        );
        assert_eq!(
            Bout::start(&[player.clone(), player], &boss(), &tables, &config).err(),
            Some(CombatError::DuplicateCombatant(CreatureId(1)))
        );
    }

    #[test]
    fn bout_against_thousand_hp_boss_terminates() {
        let tables = FixedTables::new();
        let config = GameConfig::default();
        // Attack 15 → 115 per hit before variance; both sides have dodge.
        let player = creature(1, "Curious", ["Showy", "Drive", "Dark"], "Pampered");
        let boss = creature(100, "Brave", ["Sturdy", "Steady", "Drive"], "Sheltered")
            .with_role(Role::Boss { tier: 0 })
            .with_bonus(BonusStats::new(Stats::new(0, 0, 0, 10), 0));

        for seed in 0..32 {
            let mut rng = PcgRng::new(seed);
            let report = resolve_combat(
                std::slice::from_ref(&player),
                &boss,
                &tables,
                &config,
                &mut rng,
            )
            .unwrap();

            assert!(report.outcome.is_finished());
            assert!(report.rounds < 10_000);
            assert_eq!(report.boss.hitpoints.max, 1000);
            assert!(report.boss.hitpoints.current >= 1);
            assert!(report.players.iter().all(|p| p.hitpoints.current >= 1));
        }
    }

    #[test]
    fn weakest_accepted_config_still_lands_damage() {
        let tables = FixedTables::new();
        let mut config = GameConfig::default();
        config.combat.base_damage = 2.0;
        config.validate().unwrap();

        let player = creature(1, "Curious", ["Showy", "Drive", "Dark"], "Pampered");
        let boss = creature(100, "Brave", ["Sturdy", "Steady", "Drive"], "Sheltered")
            .with_role(Role::Boss { tier: 0 })
            .with_bonus(BonusStats::new(Stats::new(0, 0, 0, 10), 0));

        let mut rng = PcgRng::new(3);
        let report = resolve_combat(
            std::slice::from_ref(&player),
            &boss,
            &tables,
            &config,
            &mut rng,
        )
        .unwrap();

        assert!(report.outcome.is_finished());
        assert!(
            report
                .log
                .iter()
                .filter(|e| e.strike == Strike::Attack && !e.dodged)
                .all(|e| e.damage >= 1)
        );
    }

    #[test]
    fn scripted_bout_follows_the_formulas() {
        let tables = FixedTables::new();
        let config = GameConfig::default();
        // Player: attack 15, health 15 (115 hp), dodge 15. Boss: tier 0 Brave.
        let player = creature(1, "Curious", ["Showy", "Drive", "Dark"], "Pampered");
        let boss = boss();

        // Each round: attack dodge roll (miss), variance roll (midpoint → 1.0),
        // counter dodge roll (miss).
        let hit = u32::MAX;
        let mut rng = ScriptedRng::new([hit, 1 << 31, hit]);
        let mut bout = Bout::start(std::slice::from_ref(&player), &boss, &tables, &config).unwrap();
        assert_eq!(bout.outcome(), CombatOutcome::InProgress);

        bout.play_round(&mut rng);
        let log = bout.log().to_vec();
        assert_eq!(log.len(), 2);

        // 100 * (1 + 15/100) * 1.0, no shared traits.
        assert_eq!(log[0].strike, Strike::Attack);
        assert!(!log[0].dodged);
        assert_eq!(log[0].damage, 115);
        assert_eq!(log[0].defender_hp, 1050 - 115);

        // Boss attack 10 → base 110; player defense 0, nothing shared.
        assert_eq!(log[1].strike, Strike::Counter);
        assert_eq!(log[1].damage, 110);
        assert_eq!(log[1].defender_hp, 5);
    }

    #[test]
    fn knocked_out_participants_are_raised_to_one() {
        let tables = FixedTables::new();
        let config = GameConfig::default();
        let player = creature(1, "Curious", ["Showy", "Drive", "Dark"], "Pampered")
            .with_hitpoints(Hitpoints::new(3, 115));

        // Attack is dodged, counter lands: player goes to 0.
        let mut rng = ScriptedRng::new([0, u32::MAX]);
        let report = resolve_combat(
            std::slice::from_ref(&player),
            &boss(),
            &tables,
            &config,
            &mut rng,
        )
        .unwrap();

        assert_eq!(report.outcome, CombatOutcome::BossWins);
        assert_eq!(report.rounds, 1);
        assert_eq!(report.log.last().map(|e| e.defender_hp), Some(0));
        assert_eq!(report.players[0].hitpoints.current, 1);
    }

    #[test]
    fn fallen_creatures_sit_out_later_rounds() {
        let tables = FixedTables::new();
        let config = GameConfig::default();
        let weak = creature(1, "Curious", ["Showy", "Drive", "Dark"], "Pampered")
            .with_hitpoints(Hitpoints::new(1, 115));
        let strong = creature(2, "Playful", ["Unique", "Dark", "Common"], "Trained");

        let mut rng = PcgRng::new(7);
        let report = resolve_combat(&[weak, strong], &boss(), &tables, &config, &mut rng).unwrap();

        let mut weak_down_round = None;
        for exchange in &report.log {
            if exchange.defender == CreatureId(1) && exchange.defender_hp == 0 {
                weak_down_round = Some(exchange.round);
            }
            if let Some(round) = weak_down_round
                && exchange.round > round
            {
                assert_ne!(exchange.attacker, CreatureId(1));
                assert_ne!(exchange.defender, CreatureId(1));
            }
        }
    }
}
