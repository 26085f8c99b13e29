//! Fight a boss with the whole collection.
use anyhow::Result;
use clap::Parser;
use game_core::CombatOutcome;

use crate::config::CliConfig;
use crate::{render, session};

/// Fight a boss with every owned creature
#[derive(Parser)]
pub struct Fight {
    /// Boss display name (case-insensitive)
    #[arg(short, long)]
    boss: String,

    /// Print the full report as JSON instead of replaying it
    #[arg(long)]
    json: bool,
}

impl Fight {
    pub async fn execute(self, config: &CliConfig) -> Result<()> {
        let mut runtime = session::open(config)?;
        let report = runtime.fight_named(&self.boss)?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
            return Ok(());
        }

        let world = runtime.world();
        for exchange in &report.log {
            println!("{}", render::exchange(world, exchange));
            tokio::time::sleep(config.replay_delay).await;
        }

        let verdict = match report.outcome {
            CombatOutcome::PlayersWin => "Victory",
            CombatOutcome::BossWins => "Defeat",
            CombatOutcome::InProgress => "Unfinished",
        };
        println!(
            "{verdict} against {} after {} rounds",
            render::name(world, report.boss.creature),
            report.rounds
        );
        for result in &report.players {
            println!(
                "  {:<14} {}/{}",
                render::name(world, result.creature),
                result.hitpoints.current,
                result.hitpoints.max
            );
        }
        Ok(())
    }
}
