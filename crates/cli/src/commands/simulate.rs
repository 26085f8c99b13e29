//! Drive the arena with random collisions.
use anyhow::Result;
use clap::Parser;
use game_core::Flavor;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use runtime::{ArenaEntity, FixtureKind, TickInput};

use crate::config::CliConfig;
use crate::{render, session};

const FLAVORS: [Flavor; 5] = [
    Flavor::Sweet,
    Flavor::Sour,
    Flavor::Bitter,
    Flavor::Savory,
    Flavor::Exotic,
];

/// Run the arena for a number of ticks with random collisions
#[derive(Parser)]
pub struct Simulate {
    /// Number of ticks to run
    #[arg(short, long, default_value_t = 20)]
    ticks: u32,

    /// Collisions sampled per tick
    #[arg(short, long, default_value_t = 3)]
    collisions: usize,

    /// Spawn a plant or lure every N ticks (0 disables)
    #[arg(long, default_value_t = 5)]
    fixture_every: u32,
}

impl Simulate {
    pub fn execute(self, config: &CliConfig) -> Result<()> {
        let mut runtime = session::open(config)?;
        // Collision sampling draws from its own stream so the runtime's
        // stream stays reproducible for a given seed.
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed ^ 0x5eed),
            None => StdRng::from_entropy(),
        };

        let mut failures = 0;
        for _ in 0..self.ticks {
            let tick = runtime.world().tick().0 + 1;
            if self.fixture_every > 0 && tick % u64::from(self.fixture_every) == 0 {
                let kind = if rng.gen_bool(0.5) {
                    FixtureKind::Plant
                } else {
                    FixtureKind::Lure
                };
                let flavor = FLAVORS[rng.gen_range(0..FLAVORS.len())];
                let fixture = runtime.spawn_fixture(kind, flavor);
                println!(
                    "tick {tick}: {} appears",
                    render::entity(runtime.world(), &fixture)
                );
            }

            let input = sample_collisions(
                runtime.world().arena().entities(),
                self.collisions,
                &mut rng,
            );
            let report = runtime.tick(&input);
            failures += report.failures;
            for event in &report.events {
                println!(
                    "tick {}: {}",
                    report.tick,
                    render::event(runtime.world(), event)
                );
            }
        }

        let world = runtime.world();
        println!(
            "Done after {} ticks: {} in the arena, {} eggs, {} incompatible pairs, {} failed saves",
            self.ticks,
            world.arena().len(),
            world.eggs().len(),
            world.ledger().len(),
            failures
        );
        Ok(())
    }
}

fn sample_collisions(entities: &[ArenaEntity], count: usize, rng: &mut StdRng) -> TickInput {
    let mut input = TickInput::new();
    if entities.len() < 2 {
        return input;
    }
    for _ in 0..count {
        let pair: Vec<&ArenaEntity> = entities.choose_multiple(rng, 2).collect();
        input = input.with_collision(*pair[0], *pair[1]);
    }
    input
}
