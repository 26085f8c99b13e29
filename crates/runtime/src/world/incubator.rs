//! Egg slots and their hatch countdowns.
//!
//! A slot's timer lives in the active set from the moment an elixir is
//! applied until it expires. [`Incubator::poll`] takes an expired slot out of
//! the set before handing it back, so a slot is resolved at most once no
//! matter what the resolution does to the other slots.

use std::collections::{BTreeMap, BTreeSet};

use game_core::{CreatureId, EggId, EggSlot, Elixir, HatchError, NurtureOffer, TraitName};

use crate::api::{Result, RuntimeError};

/// Lifecycle of an occupied slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SlotState {
    /// Egg placed, no elixir applied yet.
    Waiting,
    /// Elixir applied; hatches when `remaining` reaches zero.
    Counting {
        elixir: Elixir,
        remaining: u32,
        offer: NurtureOffer,
        choice: Option<usize>,
    },
    /// Countdown expired but no candidate was eligible.
    Unresolved { elixir: Elixir },
    /// A creature was drawn but recording the hatch failed.
    Stalled { selected: CreatureId },
}

impl SlotState {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Waiting => "waiting",
            Self::Counting { .. } => "counting",
            Self::Unresolved { .. } => "unresolved",
            Self::Stalled { .. } => "stalled",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IncubatorSlot {
    pub egg: EggId,
    pub state: SlotState,
}

/// A countdown that reached zero during [`Incubator::poll`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExpiredTimer {
    pub slot: EggSlot,
    pub egg: EggId,
    pub elixir: Elixir,
    pub offer: NurtureOffer,
    pub choice: Option<usize>,
}

#[derive(Clone, Debug)]
pub struct Incubator {
    capacity: u8,
    slots: BTreeMap<EggSlot, IncubatorSlot>,
    active: BTreeSet<EggSlot>,
}

impl Incubator {
    pub fn new(capacity: u8) -> Self {
        Self {
            capacity,
            slots: BTreeMap::new(),
            active: BTreeSet::new(),
        }
    }

    pub fn capacity(&self) -> u8 {
        self.capacity
    }

    pub fn slot(&self, slot: EggSlot) -> Option<&IncubatorSlot> {
        self.slots.get(&slot)
    }

    /// Occupied slots in slot order.
    pub fn slots(&self) -> impl Iterator<Item = (EggSlot, &IncubatorSlot)> {
        self.slots.iter().map(|(slot, entry)| (*slot, entry))
    }

    /// Slots whose countdown is still running.
    pub fn active_timers(&self) -> impl Iterator<Item = EggSlot> + '_ {
        self.active.iter().copied()
    }

    /// Slot holding the egg, if any.
    pub fn holding(&self, egg: EggId) -> Option<EggSlot> {
        self.slots
            .iter()
            .find_map(|(slot, entry)| (entry.egg == egg).then_some(*slot))
    }

    /// First slot without an egg.
    pub fn free_slot(&self) -> Option<EggSlot> {
        (0..self.capacity)
            .map(EggSlot)
            .find(|slot| !self.slots.contains_key(slot))
    }

    pub fn place(&mut self, slot: EggSlot, egg: EggId) -> Result<()> {
        if slot.0 >= self.capacity {
            return Err(RuntimeError::SlotOutOfRange {
                slot,
                capacity: self.capacity,
            });
        }
        if self.slots.contains_key(&slot) {
            return Err(RuntimeError::SlotOccupied(slot));
        }
        self.slots.insert(
            slot,
            IncubatorSlot {
                egg,
                state: SlotState::Waiting,
            },
        );
        Ok(())
    }

    /// Egg of a slot that is ready for an elixir.
    pub fn waiting_egg(&self, slot: EggSlot) -> Result<EggId> {
        let entry = self.occupied(slot)?;
        match entry.state {
            SlotState::Waiting => Ok(entry.egg),
            ref other => Err(state_error(slot, other, "waiting")),
        }
    }

    /// Starts the countdown of a waiting slot.
    pub fn start(
        &mut self,
        slot: EggSlot,
        elixir: Elixir,
        offer: NurtureOffer,
        countdown: u32,
    ) -> Result<()> {
        self.waiting_egg(slot)?;
        let entry = self.occupied_mut(slot)?;
        entry.state = SlotState::Counting {
            elixir,
            remaining: countdown.max(1),
            offer,
            choice: None,
        };
        self.active.insert(slot);
        Ok(())
    }

    /// Records the player's nurture pick for a counting slot.
    pub fn choose(&mut self, slot: EggSlot, index: usize) -> Result<TraitName> {
        let entry = self.occupied_mut(slot)?;
        match &mut entry.state {
            SlotState::Counting { offer, choice, .. } => {
                let option = offer.options().get(index).ok_or(HatchError::ChoiceOutOfRange {
                    index,
                    offered: offer.options().len(),
                })?;
                *choice = Some(index);
                Ok(option.nurture.clone())
            }
            other => Err(state_error(slot, other, "counting")),
        }
    }

    /// Advances every running countdown by one tick and returns the ones
    /// that expired, in slot order.
    pub fn poll(&mut self) -> Vec<ExpiredTimer> {
        let mut expired = Vec::new();
        let running: Vec<EggSlot> = self.active.iter().copied().collect();

        for slot in running {
            let Some(entry) = self.slots.get_mut(&slot) else {
                self.active.remove(&slot);
                continue;
            };
            let SlotState::Counting {
                elixir,
                remaining,
                offer,
                choice,
            } = &mut entry.state
            else {
                self.active.remove(&slot);
                continue;
            };

            *remaining = remaining.saturating_sub(1);
            if *remaining == 0 {
                self.active.remove(&slot);
                expired.push(ExpiredTimer {
                    slot,
                    egg: entry.egg,
                    elixir: elixir.clone(),
                    offer: offer.clone(),
                    choice: *choice,
                });
            }
        }

        expired
    }

    /// Empties a slot after a successful hatch.
    pub fn finish(&mut self, slot: EggSlot) -> Option<IncubatorSlot> {
        self.active.remove(&slot);
        self.slots.remove(&slot)
    }

    pub fn mark_unresolved(&mut self, slot: EggSlot, elixir: Elixir) {
        self.set_expired_state(slot, SlotState::Unresolved { elixir });
    }

    pub fn mark_stalled(&mut self, slot: EggSlot, selected: CreatureId) {
        self.set_expired_state(slot, SlotState::Stalled { selected });
    }

    /// Creature drawn for a stalled slot.
    pub fn stalled(&self, slot: EggSlot) -> Result<(EggId, CreatureId)> {
        let entry = self.occupied(slot)?;
        match entry.state {
            SlotState::Stalled { selected } => Ok((entry.egg, selected)),
            ref other => Err(state_error(slot, other, "stalled")),
        }
    }

    /// Removes a waiting or unresolved slot and returns it.
    pub fn clear(&mut self, slot: EggSlot) -> Result<IncubatorSlot> {
        let entry = self.occupied(slot)?;
        match entry.state {
            SlotState::Waiting | SlotState::Unresolved { .. } => {}
            ref other => return Err(state_error(slot, other, "waiting or unresolved")),
        }
        self.slots.remove(&slot).ok_or(RuntimeError::SlotEmpty(slot))
    }

    fn set_expired_state(&mut self, slot: EggSlot, state: SlotState) {
        self.active.remove(&slot);
        if let Some(entry) = self.slots.get_mut(&slot) {
            entry.state = state;
        }
    }

    fn occupied(&self, slot: EggSlot) -> Result<&IncubatorSlot> {
        self.slots.get(&slot).ok_or(RuntimeError::SlotEmpty(slot))
    }

    fn occupied_mut(&mut self, slot: EggSlot) -> Result<&mut IncubatorSlot> {
        self.slots.get_mut(&slot).ok_or(RuntimeError::SlotEmpty(slot))
    }
}

fn state_error(slot: EggSlot, state: &SlotState, expected: &'static str) -> RuntimeError {
    RuntimeError::SlotState {
        slot,
        state: state.name(),
        expected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{ColorValue, ElixirId, Flavor, NurturePool, PcgRng};

    fn elixir() -> Elixir {
        Elixir::new(
            ElixirId(1),
            Flavor::Sweet,
            "Curious",
            ["Showy", "Drive", "Dark"].map(TraitName::new),
            ColorValue::new(0, 0, 0),
        )
    }

    fn offer() -> NurtureOffer {
        let pools = vec![
            NurturePool::new("Pampered", ["Brush scales"]),
            NurturePool::new("Disciplined", ["Drill tricks"]),
        ];
        NurtureOffer::draw(&pools, &mut PcgRng::new(1))
    }

    fn counting(countdown: u32) -> Incubator {
        let mut incubator = Incubator::new(4);
        incubator.place(EggSlot(0), EggId(1)).unwrap();
        incubator
            .start(EggSlot(0), elixir(), offer(), countdown)
            .unwrap();
        incubator
    }

    #[test]
    fn place_checks_range_and_occupancy() {
        let mut incubator = Incubator::new(2);
        incubator.place(EggSlot(0), EggId(1)).unwrap();

        assert!(matches!(
            incubator.place(EggSlot(0), EggId(2)),
            Err(RuntimeError::SlotOccupied(_))
        ));
        assert!(matches!(
            incubator.place(EggSlot(2), EggId(2)),
            Err(RuntimeError::SlotOutOfRange { .. })
        ));
        assert_eq!(incubator.free_slot(), Some(EggSlot(1)));
        assert_eq!(incubator.holding(EggId(1)), Some(EggSlot(0)));
    }

    #[test]
    fn timer_expires_once() {
        let mut incubator = counting(2);

        assert!(incubator.poll().is_empty());
        let expired = incubator.poll();
        assert_eq!(expired.len(), 1);
        assert_eq!(expired[0].egg, EggId(1));
        assert_eq!(incubator.active_timers().count(), 0);

        for _ in 0..5 {
            assert!(incubator.poll().is_empty());
        }
    }

    #[test]
    fn choice_is_validated_against_the_offer() {
        let mut incubator = counting(5);

        assert_eq!(
            incubator.choose(EggSlot(0), 1).unwrap(),
            TraitName::new("Disciplined")
        );
        assert!(matches!(
            incubator.choose(EggSlot(0), 3),
            Err(RuntimeError::Hatch(_))
        ));

        for _ in 0..4 {
            assert!(incubator.poll().is_empty());
        }
        assert_eq!(incubator.poll()[0].choice, Some(1));
    }

    #[test]
    fn elixir_only_applies_to_waiting_slots() {
        let mut incubator = counting(5);
        assert!(matches!(
            incubator.start(EggSlot(0), elixir(), offer(), 5),
            Err(RuntimeError::SlotState { .. })
        ));
        assert!(matches!(
            incubator.clear(EggSlot(0)),
            Err(RuntimeError::SlotState { .. })
        ));
    }

    #[test]
    fn unresolved_slot_can_be_cleared() {
        let mut incubator = counting(1);
        let expired = incubator.poll().remove(0);
        incubator.mark_unresolved(expired.slot, expired.elixir);

        let cleared = incubator.clear(EggSlot(0)).unwrap();
        assert_eq!(cleared.egg, EggId(1));
        assert!(incubator.slot(EggSlot(0)).is_none());
    }
}
