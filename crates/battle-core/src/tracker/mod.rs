//! Readiness ledger and turn scheduler.
//!
//! [`InitiativeTracker`] is the authoritative reducer for the encounter
//! schedule. The combat loop is its single writer: it calls
//! [`advance_to_next_actor`](InitiativeTracker::advance_to_next_actor) to
//! learn whose turn it is, resolves that participant's action elsewhere, and
//! commits the action's cost back through
//! [`apply_action_delay`](InitiativeTracker::apply_action_delay). Forecast
//! reads (snapshot, queue projection, ghost preview) never touch the ledger.

mod project;

use std::cmp::Reverse;

use crate::config::BattleConfig;
use crate::env::{Combatant, RngOracle, compute_seed};
use crate::error::TurnError;
use crate::speed::base_speed;
use crate::state::{EntityId, ReadinessState, Tick};

/// Spread of the initial readiness roll: values in 0..=3.
const INITIAL_READINESS_SPREAD: u32 = 4;

/// Fixed readiness for player units caught off guard. Guarantees several
/// ticks of regeneration before the party may act.
const SURPRISED_PLAYER_READINESS: i32 = -10;

/// Base readiness for ambushers; the roll on top lands them in 16..=19,
/// at or near the action threshold.
const AMBUSHER_READINESS_BASE: i32 = 16;

/// Per-encounter turn scheduler.
///
/// Constructed explicitly by the encounter's composition root and discarded
/// when the encounter ends; no shared or global state. Single-threaded by
/// design: the three mutators (`advance_to_next_actor`, `apply_action_delay`,
/// `remove_entity`) must be called from the one combat loop.
pub struct InitiativeTracker {
    config: BattleConfig,
    encounter_seed: u64,
    clock: Tick,
    /// Insertion-ordered arena. Readiness ties break on arena index.
    participants: Vec<ReadinessState>,
    active: Option<EntityId>,
}

impl InitiativeTracker {
    /// Creates an empty tracker for one encounter.
    pub fn new(config: BattleConfig, encounter_seed: u64) -> Self {
        Self {
            config,
            encounter_seed,
            clock: Tick::ZERO,
            participants: Vec::new(),
            active: None,
        }
    }

    /// Builds the ledger from the encounter roster.
    ///
    /// Characters register before monsters, so the party wins cross-side
    /// readiness ties. Initial readiness rolls 0..=3 per participant unless
    /// the party was surprised: then every player unit starts at exactly
    /// `-10` and every monster at 16..=19.
    ///
    /// Any previous ledger is discarded first.
    pub fn initialize(
        &mut self,
        rng: &dyn RngOracle,
        characters: &[&dyn Combatant],
        monsters: &[&dyn Combatant],
        party_surprised: bool,
    ) {
        self.reset();

        for combatant in characters.iter().chain(monsters.iter()) {
            if !combatant.is_able_to_act() {
                continue;
            }

            let slot = self.participants.len() as u32;
            let seed = compute_seed(self.encounter_seed, slot, combatant.id().0);
            let roll = rng.range(seed, 0, INITIAL_READINESS_SPREAD - 1) as i32;

            let readiness = match (party_surprised, combatant.is_player()) {
                (true, true) => SURPRISED_PLAYER_READINESS,
                (true, false) => AMBUSHER_READINESS_BASE + roll,
                (false, _) => roll,
            };

            self.participants.push(ReadinessState {
                entity: combatant.id(),
                name: combatant.name().to_owned(),
                is_player: combatant.is_player(),
                readiness,
                base_speed: base_speed(combatant.agility(), combatant.level()),
            });
        }
    }

    /// Advances the schedule until exactly one participant may act.
    ///
    /// Scans for entries at or above the readiness threshold; the
    /// strictly-greatest readiness wins, ties going to the earliest
    /// registered participant. While no one qualifies, the tick clock
    /// increments and every entry gains its own base speed.
    ///
    /// The loop is bounded at
    /// [`MAX_ADVANCE_TICKS`](BattleConfig::MAX_ADVANCE_TICKS); a degenerate
    /// ledger (e.g. empty) yields [`TurnError::ScheduleStalled`] instead of
    /// spinning. The winner is recorded as the active entity.
    pub fn advance_to_next_actor(&mut self) -> Result<EntityId, TurnError> {
        for _ in 0..BattleConfig::MAX_ADVANCE_TICKS {
            if let Some(index) = self.eligible_index() {
                let entity = self.participants[index].entity;
                self.active = Some(entity);
                return Ok(entity);
            }

            self.clock = self.clock + 1;
            for entry in &mut self.participants {
                entry.readiness += entry.base_speed;
            }
        }

        tracing::error!(
            ticks = BattleConfig::MAX_ADVANCE_TICKS,
            participants = self.participants.len(),
            "initiative schedule stalled"
        );
        Err(TurnError::ScheduleStalled {
            ticks: BattleConfig::MAX_ADVANCE_TICKS,
        })
    }

    /// Commits an action's cost against a participant.
    ///
    /// Readiness is set to exactly `-delay` - a flat reset, not a
    /// subtraction. Surplus readiness accumulated above the threshold never
    /// carries over into the next turn. Clears the active pointer when it
    /// names this participant. Unknown ids are ignored with a warning.
    pub fn apply_action_delay(&mut self, entity: EntityId, delay: i32) {
        let Some(entry) = self.participants.iter_mut().find(|p| p.entity == entity) else {
            tracing::warn!(%entity, "apply_action_delay: entity not in ledger, ignoring");
            return;
        };

        entry.readiness = -delay;

        if self.active == Some(entity) {
            self.active = None;
        }
    }

    /// Removes a participant that died or fled mid-encounter.
    ///
    /// Clears the active pointer if it referred to the removed participant so
    /// it cannot dangle. Returns whether an entry was removed; unknown ids
    /// are ignored with a warning.
    pub fn remove_entity(&mut self, entity: EntityId) -> bool {
        let Some(index) = self.participants.iter().position(|p| p.entity == entity) else {
            tracing::warn!(%entity, "remove_entity: entity not in ledger, ignoring");
            return false;
        };

        self.participants.remove(index);

        if self.active == Some(entity) {
            self.active = None;
        }

        true
    }

    /// Discards the whole ledger at encounter end.
    pub fn reset(&mut self) {
        self.clock = Tick::ZERO;
        self.participants.clear();
        self.active = None;
    }

    /// Returns the current tick clock.
    pub fn clock(&self) -> Tick {
        self.clock
    }

    /// Returns the entity currently taking its turn, if any.
    pub fn active_entity(&self) -> Option<EntityId> {
        self.active
    }

    pub fn has_entity(&self, entity: EntityId) -> bool {
        self.participants.iter().any(|p| p.entity == entity)
    }

    pub fn participant_count(&self) -> usize {
        self.participants.len()
    }

    /// Current readiness of a participant, if registered.
    pub fn readiness_of(&self, entity: EntityId) -> Option<i32> {
        self.participants
            .iter()
            .find(|p| p.entity == entity)
            .map(|p| p.readiness)
    }

    /// Ledger entries in registration order.
    pub fn participants(&self) -> impl Iterator<Item = &ReadinessState> {
        self.participants.iter()
    }

    /// Index of the participant that should act now, if any qualifies.
    ///
    /// Maximum readiness at or above the threshold; ties resolve to the
    /// lowest arena index.
    fn eligible_index(&self) -> Option<usize> {
        self.participants
            .iter()
            .enumerate()
            .filter(|(_, p)| p.readiness >= self.config.readiness_threshold)
            .max_by_key(|&(index, p)| (p.readiness, Reverse(index)))
            .map(|(index, _)| index)
    }

    fn index_of(&self, entity: EntityId) -> Option<usize> {
        self.participants.iter().position(|p| p.entity == entity)
    }
}
