//! Incubate one egg from start to finish.
use anyhow::{Context, Result, bail};
use clap::Parser;
use game_core::{EggId, EggSlot, InventorySlot};
use runtime::{Event, IncubatorEvent, SlotState, TickInput};

use crate::config::CliConfig;
use crate::{render, session};

/// Place an egg, apply an elixir and tick until it hatches
#[derive(Parser)]
pub struct Hatch {
    /// Egg to incubate (default: first egg in the arena)
    #[arg(short, long)]
    egg: Option<u64>,

    /// Incubator slot
    #[arg(short, long, default_value_t = 0)]
    slot: u8,

    /// Inventory slot of the elixir to apply
    #[arg(long)]
    elixir: u8,

    /// Index of the nurture option to pick (default: config default)
    #[arg(short, long)]
    nurture: Option<usize>,
}

impl Hatch {
    pub fn execute(self, config: &CliConfig) -> Result<()> {
        let mut runtime = session::open(config)?;
        let slot = EggSlot(self.slot);

        let egg = match self.egg {
            Some(id) => EggId(id),
            None => runtime
                .world()
                .arena()
                .eggs()
                .next()
                .context("No egg in the arena. Breed some first with `dragonkeep simulate`.")?,
        };

        runtime.place_egg(egg, slot)?;
        let options = runtime.apply_elixir(slot, InventorySlot(self.elixir))?;
        for (index, option) in options.iter().enumerate() {
            println!("  [{index}] {} ({})", option.label, option.nurture);
        }
        if let Some(index) = self.nurture {
            runtime.choose_nurture(slot, index)?;
        }
        for event in runtime.drain_events() {
            println!("{}", render::event(runtime.world(), &event));
        }

        let countdown = runtime.oracles().config().hatch.countdown_ticks;
        let mut hatched = None;
        for _ in 0..countdown.max(1) {
            let report = runtime.tick(&TickInput::new());
            for event in &report.events {
                println!(
                    "tick {}: {}",
                    report.tick,
                    render::event(runtime.world(), event)
                );
                if let Event::Incubator(IncubatorEvent::Hatched { creature, .. }) = event {
                    hatched = Some(*creature);
                }
            }
            if hatched.is_some() {
                break;
            }
        }

        let state = runtime
            .world()
            .incubator()
            .slot(slot)
            .map(|entry| entry.state.clone());
        match (hatched, state) {
            (Some(creature), _) => {
                println!(
                    "{} joined the collection",
                    render::name(runtime.world(), creature)
                );
            }
            (None, Some(SlotState::Stalled { .. })) => {
                tracing::warn!("Hatch of {} could not be saved; retrying", egg);
                let creature = runtime.retry_slot(slot)?;
                println!(
                    "{} joined the collection",
                    render::name(runtime.world(), creature)
                );
            }
            (None, Some(SlotState::Unresolved { .. })) => {
                println!("{egg} did not hatch and stays in the save for another elixir");
            }
            (None, state) => bail!(
                "{} did not resolve (slot {})",
                egg,
                state.map_or("empty", |state| state.name())
            ),
        }
        Ok(())
    }
}
