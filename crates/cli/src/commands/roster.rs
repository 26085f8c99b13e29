//! Print the save: owned creatures, eggs, elixirs and bosses.
use anyhow::Result;
use clap::Parser;
use game_core::Creature;

use crate::config::CliConfig;
use crate::session;

/// Show owned creatures, eggs, elixirs and bosses
#[derive(Parser)]
pub struct Roster {
    /// Also list roster creatures that are not owned yet
    #[arg(short, long)]
    all: bool,
}

impl Roster {
    pub fn execute(self, config: &CliConfig) -> Result<()> {
        let runtime = session::open(config)?;
        let world = runtime.world();

        println!("Collection:");
        for creature in world.owned() {
            println!("  {}", line(creature));
        }

        if self.all {
            println!("Not owned:");
            for creature in world
                .roster()
                .iter()
                .filter(|creature| !world.collection().contains(&creature.id))
            {
                println!("  {}", line(creature));
            }
        }

        println!("Eggs:");
        for (id, egg) in world.eggs() {
            let (a, b) = egg.parents;
            println!(
                "  {id} {} ({}) from {} x {}",
                egg.phenotype(),
                egg.genotype,
                crate::render::name(world, a),
                crate::render::name(world, b)
            );
        }

        println!("Elixirs:");
        for (slot, elixir) in runtime.repository().load_inventory()? {
            println!(
                "  {slot} {} {} {} [{}]",
                elixir.id,
                elixir.flavor,
                elixir.primary,
                elixir
                    .secondaries
                    .iter()
                    .map(|name| name.to_string())
                    .collect::<Vec<_>>()
                    .join(", ")
            );
        }

        println!("Bosses:");
        for boss in world.bosses() {
            println!("  {}", line(boss));
        }
        Ok(())
    }
}

fn line(creature: &Creature) -> String {
    let hitpoints = creature
        .hitpoints
        .map(|hp| format!("{}/{}", hp.current, hp.max))
        .unwrap_or_else(|| "-".to_string());
    let stats = creature.stats;
    format!(
        "{:<6} {:<14} {} {:<9} {:<7} hp {:<11} hlt {:>3} atk {:>3} def {:>3} ddg {:>3}",
        creature.id.to_string(),
        creature.display_name,
        creature.gender,
        creature.phenotype().to_string(),
        creature.primary.to_string(),
        hitpoints,
        stats.health,
        stats.attack,
        stats.defense,
        stats.dodge
    )
}
