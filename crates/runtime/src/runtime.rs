//! High-level runtime orchestrator.
//!
//! The runtime owns the world, the save repository, static content and the
//! random stream, and exposes a builder-based API for clients to drive the
//! simulation one tick at a time.
//!
//! Every change that touches the save is written to the repository first
//! and applied to the world only when the write succeeded. A failed write
//! inside a tick is reported as a [`PersistenceEvent`] and the tick carries
//! on; a failed write in a player operation is returned as an error.

use std::sync::Arc;

use game_core::{
    CombatReport, Creature, CreatureId, EggId, EggSlot, Flavor, HatchResolution, Hitpoints,
    InventorySlot, NurtureOffer, NurtureOption, RngOracle, TraitName, resolve_combat,
    resolve_hatch,
};

use crate::api::{Result, RuntimeError, TickInput, TickReport};
use crate::events::{BreedingEvent, CombatEvent, Event, IncubatorEvent, PersistenceEvent};
use crate::oracle::{OracleManager, RandRng};
use crate::repository::SaveRepository;
use crate::world::{ArenaEntity, ArenaOp, ExpiredTimer, FixtureKind, SlotState, World};

/// Runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Number of incubator slots.
    pub incubator_slots: u8,
    /// Seed for the default random stream; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            incubator_slots: 4,
            seed: None,
        }
    }
}

/// Main runtime that drives the world.
pub struct Runtime {
    world: World,
    repository: Arc<dyn SaveRepository>,
    oracles: OracleManager,
    rng: Box<dyn RngOracle + Send>,
    outbox: Vec<Event>,
    failures: usize,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn oracles(&self) -> &OracleManager {
        &self.oracles
    }

    pub fn repository(&self) -> &dyn SaveRepository {
        self.repository.as_ref()
    }

    /// Events raised by player operations since the last tick.
    pub fn drain_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.outbox)
    }

    /// Advances the world by one tick.
    ///
    /// Collisions are scanned first without touching the arena. The planned
    /// changes are then committed, every running hatch countdown is polled
    /// once, and finally the queued arena changes are applied.
    pub fn tick(&mut self, input: &TickInput) -> TickReport {
        let tick = self.world.advance_clock();

        let ops = self.world.scan_collisions(
            &input.collisions,
            self.oracles.tables(),
            self.rng.as_mut(),
            &mut self.outbox,
        );
        for op in ops {
            self.commit_arena_op(op);
        }

        for expired in self.world.incubator_mut().poll() {
            self.resolve_expired(expired);
        }

        let (left, joined) = self.world.arena_mut().apply_pending();
        if left + joined > 0 {
            tracing::debug!("Tick {}: {} left the arena, {} joined", tick, left, joined);
        }

        let mut report = TickReport::new(tick);
        report.events = std::mem::take(&mut self.outbox);
        report.failures = std::mem::take(&mut self.failures);
        report
    }

    /// Moves an egg from the arena into an empty incubator slot.
    pub fn place_egg(&mut self, egg: EggId, slot: EggSlot) -> Result<()> {
        if self.world.egg(egg).is_none() {
            return Err(RuntimeError::EggNotFound(egg));
        }
        let entity = ArenaEntity::Egg(egg);
        if !self.world.arena().contains(&entity) {
            return Err(RuntimeError::EggNotInArena(egg));
        }

        self.world.incubator_mut().place(slot, egg)?;
        self.world.arena_mut().remove(&entity);

        tracing::info!("Placed {} in {}", egg, slot);
        self.emit(Event::Incubator(IncubatorEvent::EggPlaced { egg, slot }));
        Ok(())
    }

    /// Consumes the elixir stocked at `inventory` on the egg in `slot` and
    /// starts its countdown. Returns the nurture options on offer.
    pub fn apply_elixir(
        &mut self,
        slot: EggSlot,
        inventory: InventorySlot,
    ) -> Result<Vec<NurtureOption>> {
        self.world.incubator().waiting_egg(slot)?;
        let elixir = self
            .repository
            .load_elixir_at_slot(inventory)?
            .ok_or(RuntimeError::NoElixirAtSlot(inventory))?;
        self.repository.delete_elixir(elixir.id)?;

        let offer = NurtureOffer::draw(self.oracles.nurture_pools(), self.rng.as_mut());
        let options = offer.options().to_vec();
        let countdown = self.oracles.config().hatch.countdown_ticks;
        let elixir_id = elixir.id;
        self.world
            .incubator_mut()
            .start(slot, elixir, offer, countdown)?;

        tracing::info!(
            "Applied {} to {}; hatching in {} ticks",
            elixir_id,
            slot,
            countdown
        );
        self.emit(Event::Incubator(IncubatorEvent::ElixirApplied {
            slot,
            elixir: elixir_id,
            countdown,
            options: options.clone(),
        }));
        Ok(options)
    }

    /// Picks one of the offered nurture options for a counting slot.
    pub fn choose_nurture(&mut self, slot: EggSlot, index: usize) -> Result<TraitName> {
        let nurture = self.world.incubator_mut().choose(slot, index)?;

        tracing::debug!("{} will be raised {}", slot, nurture);
        self.emit(Event::Incubator(IncubatorEvent::NurtureChosen {
            slot,
            nurture: nurture.clone(),
        }));
        Ok(nurture)
    }

    /// Empties a slot. A waiting egg goes back to the arena; an unresolved
    /// egg is deleted.
    pub fn clear_slot(&mut self, slot: EggSlot) -> Result<()> {
        let entry = self
            .world
            .incubator()
            .slot(slot)
            .ok_or(RuntimeError::SlotEmpty(slot))?;
        let egg = entry.egg;
        let discarded = match entry.state {
            SlotState::Waiting => false,
            SlotState::Unresolved { .. } => true,
            ref other => {
                return Err(RuntimeError::SlotState {
                    slot,
                    state: other.name(),
                    expected: "waiting or unresolved",
                });
            }
        };

        if discarded {
            self.repository.delete_egg(egg)?;
            self.world.discard_egg(egg);
        }
        self.world.incubator_mut().clear(slot)?;
        if !discarded {
            self.world.arena_mut().insert(ArenaEntity::Egg(egg));
        }

        tracing::info!(
            "Cleared {} ({} {})",
            slot,
            egg,
            if discarded { "discarded" } else { "returned" }
        );
        self.emit(Event::Incubator(IncubatorEvent::SlotCleared {
            slot,
            egg,
            discarded,
        }));
        Ok(())
    }

    /// Records again a hatch whose first write failed.
    pub fn retry_slot(&mut self, slot: EggSlot) -> Result<CreatureId> {
        let (egg, creature) = self.world.incubator().stalled(slot)?;
        self.commit_hatch(slot, egg, creature)?;
        self.world.arena_mut().apply_pending();
        Ok(creature)
    }

    /// Places a plant or lure in the arena.
    pub fn spawn_fixture(&mut self, kind: FixtureKind, flavor: Flavor) -> ArenaEntity {
        self.world.arena_mut().spawn_fixture(kind, flavor)
    }

    /// Runs a full bout of every owned creature against a boss and stores
    /// the players' remaining hit points.
    pub fn fight(&mut self, boss: CreatureId) -> Result<CombatReport> {
        let opponent = self
            .world
            .boss(boss)
            .ok_or(RuntimeError::UnknownBoss(boss))?;
        let players: Vec<Creature> = self.world.owned().cloned().collect();
        if players.is_empty() {
            return Err(RuntimeError::NoPlayers);
        }

        let report = resolve_combat(
            &players,
            opponent,
            self.oracles.tables(),
            self.oracles.config(),
            self.rng.as_mut(),
        )?;

        for result in &report.players {
            self.repository
                .save_hitpoints(result.creature, result.hitpoints)?;
            self.world.set_hitpoints(result.creature, result.hitpoints);
        }

        tracing::info!(
            "Bout against {} ended {:?} after {} rounds",
            boss,
            report.outcome,
            report.rounds
        );
        self.emit(Event::Combat(CombatEvent::Finished {
            boss,
            outcome: report.outcome,
            rounds: report.rounds,
        }));
        Ok(report)
    }

    /// [`fight`](Self::fight) by boss display name.
    pub fn fight_named(&mut self, name: &str) -> Result<CombatReport> {
        let boss = self
            .world
            .boss_named(name)
            .map(|boss| boss.id)
            .ok_or_else(|| RuntimeError::UnknownBossName(name.to_string()))?;
        self.fight(boss)
    }

    /// Restores every owned creature to full hit points. Returns how many
    /// were healed.
    pub fn rest(&mut self) -> Result<usize> {
        let wounded: Vec<(CreatureId, Hitpoints)> = self
            .world
            .owned()
            .filter_map(|creature| {
                let hitpoints = creature.hitpoints?;
                (hitpoints.current < hitpoints.max)
                    .then_some((creature.id, Hitpoints::at_max(hitpoints.max)))
            })
            .collect();

        for (id, hitpoints) in &wounded {
            self.repository.save_hitpoints(*id, *hitpoints)?;
            self.world.set_hitpoints(*id, *hitpoints);
        }

        tracing::info!("Rested {} creatures", wounded.len());
        Ok(wounded.len())
    }

    fn commit_arena_op(&mut self, op: ArenaOp) {
        match op {
            ArenaOp::Breed { parents, egg } => match self.repository.insert_egg(&egg) {
                Ok(id) => {
                    let phenotype = egg.phenotype();
                    self.world.lay_egg(id, egg);
                    tracing::info!(
                        "{} x {} laid {} ({:?})",
                        parents.0,
                        parents.1,
                        id,
                        phenotype
                    );
                    self.emit(Event::Breeding(BreedingEvent::Bred {
                        parents,
                        egg: id,
                        phenotype,
                    }));
                }
                Err(error) => self.persistence_failed("insert egg", &error),
            },
            ArenaOp::PickUp {
                creature,
                flavor,
                fixture,
            } => {
                self.world.give_catalyst(creature, flavor, fixture);
                tracing::debug!("{} picked up a {} catalyst", creature, flavor);
                self.emit(Event::Breeding(BreedingEvent::CatalystPickedUp {
                    creature,
                    flavor,
                }));
            }
        }
    }

    fn resolve_expired(&mut self, expired: ExpiredTimer) {
        let ExpiredTimer {
            slot,
            egg: egg_id,
            elixir,
            offer,
            choice,
        } = expired;

        let default = &self.oracles.config().hatch.default_nurture;
        let nurture = offer.resolve(choice, default).unwrap_or_else(|error| {
            tracing::warn!("{}: {}; using {}", slot, error, default);
            default.clone()
        });

        let Some(egg) = self.world.egg(egg_id) else {
            tracing::warn!("{} expired but {} is gone", slot, egg_id);
            self.world.incubator_mut().mark_unresolved(slot, elixir);
            return;
        };

        let HatchResolution {
            selected,
            candidates,
            eligible,
            skipped,
        } = match resolve_hatch(
            egg,
            &elixir,
            self.world.roster(),
            &nurture,
            self.rng.as_mut(),
        ) {
            Ok(resolution) => resolution,
            Err(error) => {
                tracing::warn!("{}: {}", slot, error);
                self.world.incubator_mut().mark_unresolved(slot, elixir);
                return;
            }
        };
        let selected = selected.map(|creature| creature.id);

        for skipped in skipped {
            tracing::warn!(
                "{}: skipped candidate {}: {}",
                slot,
                skipped.creature,
                skipped.error
            );
            self.emit(Event::Incubator(IncubatorEvent::CandidateSkipped {
                slot,
                creature: skipped.creature,
                reason: skipped.error.to_string(),
            }));
        }

        match selected {
            None => {
                tracing::warn!(
                    "{}: no eligible candidate ({} considered); {} stays unresolved",
                    slot,
                    candidates,
                    egg_id
                );
                self.world.incubator_mut().mark_unresolved(slot, elixir);
                self.emit(Event::Incubator(IncubatorEvent::HatchUnresolved {
                    slot,
                    egg: egg_id,
                    candidates,
                    eligible,
                }));
            }
            Some(creature) => {
                if let Err(error) = self.commit_hatch(slot, egg_id, creature) {
                    self.world.incubator_mut().mark_stalled(slot, creature);
                    self.persistence_failed("record hatch", &error);
                }
            }
        }
    }

    fn commit_hatch(&mut self, slot: EggSlot, egg: EggId, creature: CreatureId) -> Result<()> {
        self.repository.record_hatch(egg, creature)?;

        self.world.record_hatch(egg, creature);
        self.world.incubator_mut().finish(slot);

        tracing::info!("{} hatched from {} in {}", creature, egg, slot);
        self.emit(Event::Incubator(IncubatorEvent::Hatched {
            slot,
            egg,
            creature,
        }));
        Ok(())
    }

    fn persistence_failed(&mut self, operation: &str, error: &dyn std::error::Error) {
        tracing::warn!("Failed to {}: {}", operation, error);
        self.failures += 1;
        self.emit(Event::Persistence(PersistenceEvent {
            operation: operation.to_string(),
            error: error.to_string(),
        }));
    }

    fn emit(&mut self, event: Event) {
        self.outbox.push(event);
    }
}

/// Builder for [`Runtime`].
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    repository: Option<Arc<dyn SaveRepository>>,
    oracles: Option<OracleManager>,
    rng: Option<Box<dyn RngOracle + Send>>,
}

impl RuntimeBuilder {
    pub fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            repository: None,
            oracles: None,
            rng: None,
        }
    }

    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    pub fn repository(self, repository: impl SaveRepository + 'static) -> Self {
        self.shared_repository(Arc::new(repository))
    }

    /// Uses a repository the caller keeps a handle to.
    pub fn shared_repository(mut self, repository: Arc<dyn SaveRepository>) -> Self {
        self.repository = Some(repository);
        self
    }

    /// Static content; built-in content when not set.
    pub fn oracles(mut self, oracles: OracleManager) -> Self {
        self.oracles = Some(oracles);
        self
    }

    /// Overrides the random stream chosen from [`RuntimeConfig::seed`].
    pub fn rng(mut self, rng: impl RngOracle + Send + 'static) -> Self {
        self.rng = Some(Box::new(rng));
        self
    }

    /// Loads the save and derives stats for every creature. Creatures seen
    /// for the first time get full hit points, which are stored right away.
    pub fn build(self) -> Result<Runtime> {
        let repository = self.repository.ok_or(RuntimeError::MissingRepository)?;
        let oracles = match self.oracles {
            Some(oracles) => oracles,
            None => OracleManager::bundled()?,
        };
        oracles.config().validate()?;

        let rng: Box<dyn RngOracle + Send> = match (self.rng, self.config.seed) {
            (Some(rng), _) => rng,
            (None, Some(seed)) => Box::new(RandRng::seeded(seed)),
            (None, None) => Box::new(RandRng::from_entropy()),
        };

        let mut world = World::new(
            repository.load_roster()?,
            repository.load_bosses()?,
            repository.load_collection()?,
            repository.load_eggs()?,
            self.config.incubator_slots,
        );
        for (id, hitpoints) in world.refresh_stats(oracles.tables(), oracles.config()) {
            repository.save_hitpoints(id, hitpoints)?;
        }

        tracing::info!(
            "Runtime ready: {} creatures, {} bosses, {} owned, {} eggs",
            world.roster().len(),
            world.bosses().len(),
            world.collection().len(),
            world.eggs().len()
        );

        Ok(Runtime {
            world,
            repository,
            oracles,
            rng,
            outbox: Vec::new(),
            failures: 0,
        })
    }
}

impl Default for RuntimeBuilder {
    fn default() -> Self {
        Self::new()
    }
}
