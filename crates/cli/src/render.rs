//! Plain-text rendering of runtime events and entities.
use game_core::{CreatureId, Exchange, Strike};
use runtime::{
    ArenaEntity, BreedingEvent, CombatEvent, Event, IncubatorEvent, PersistenceEvent, World,
};

/// Display name of a companion or boss, falling back to the id.
pub fn name(world: &World, id: CreatureId) -> String {
    world
        .creature(id)
        .or_else(|| world.boss(id))
        .map(|creature| creature.display_name.clone())
        .unwrap_or_else(|| id.to_string())
}

pub fn entity(world: &World, entity: &ArenaEntity) -> String {
    match entity {
        ArenaEntity::Creature(id) => name(world, *id),
        ArenaEntity::Egg(id) => id.to_string(),
        ArenaEntity::Plant { id, flavor } => format!("{flavor} plant ({id})"),
        ArenaEntity::Lure { id, flavor } => format!("{flavor} lure ({id})"),
    }
}

pub fn event(world: &World, event: &Event) -> String {
    match event {
        Event::Breeding(event) => breeding(world, event),
        Event::Incubator(event) => incubator(world, event),
        Event::Combat(CombatEvent::Finished {
            boss,
            outcome,
            rounds,
        }) => format!(
            "bout against {} ended {:?} after {} rounds",
            name(world, *boss),
            outcome,
            rounds
        ),
        Event::Persistence(PersistenceEvent { operation, error }) => {
            format!("save failed ({operation}): {error}")
        }
    }
}

fn breeding(world: &World, event: &BreedingEvent) -> String {
    match event {
        BreedingEvent::Bred {
            parents: (a, b),
            egg,
            phenotype,
        } => format!(
            "{} and {} laid {} ({})",
            name(world, *a),
            name(world, *b),
            egg,
            phenotype
        ),
        BreedingEvent::PairTagged { pair } => {
            let (a, b) = pair.ids();
            format!("{} and {} are not compatible", name(world, a), name(world, b))
        }
        BreedingEvent::CatalystPickedUp { creature, flavor } => {
            format!("{} picked up a {} catalyst", name(world, *creature), flavor)
        }
    }
}

fn incubator(world: &World, event: &IncubatorEvent) -> String {
    match event {
        IncubatorEvent::EggPlaced { egg, slot } => format!("{egg} placed in {slot}"),
        IncubatorEvent::ElixirApplied {
            slot,
            elixir,
            countdown,
            ..
        } => format!("{elixir} applied to {slot}, hatching in {countdown} ticks"),
        IncubatorEvent::NurtureChosen { slot, nurture } => {
            format!("{slot} will be raised {nurture}")
        }
        IncubatorEvent::Hatched {
            slot,
            egg,
            creature,
        } => format!("{} hatched from {} in {}", name(world, *creature), egg, slot),
        IncubatorEvent::HatchUnresolved {
            slot,
            egg,
            candidates,
            eligible,
        } => format!(
            "{egg} in {slot} did not hatch: {eligible} of {candidates} candidates eligible"
        ),
        IncubatorEvent::CandidateSkipped {
            slot,
            creature,
            reason,
        } => format!("{slot}: skipped {} ({reason})", name(world, *creature)),
        IncubatorEvent::SlotCleared {
            slot,
            egg,
            discarded,
        } => {
            let fate = if *discarded { "discarded" } else { "returned to the arena" };
            format!("{slot} cleared, {egg} {fate}")
        }
    }
}

pub fn exchange(world: &World, exchange: &Exchange) -> String {
    let verb = match exchange.strike {
        Strike::Attack => "attacks",
        Strike::Counter => "strikes back at",
    };
    let attacker = name(world, exchange.attacker);
    let defender = name(world, exchange.defender);

    if exchange.dodged {
        format!(
            "[{:>3}] {attacker} {verb} {defender}, who dodges",
            exchange.round
        )
    } else {
        format!(
            "[{:>3}] {attacker} {verb} {defender} for {} ({} left)",
            exchange.round, exchange.damage, exchange.defender_hp
        )
    }
}
