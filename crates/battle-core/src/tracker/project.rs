//! Turn-order forecasting.
//!
//! Everything here is read-only with respect to the live ledger. Simulation
//! runs over a scratch array of plain readiness values indexed like the
//! arena, so repeated UI-driven preview calls can never leak into the
//! authoritative schedule.
//!
//! The forecast assumes every not-yet-decided participant will pick the
//! cheapest generic action (defend, at its unadjusted base delay). That makes
//! projections a heuristic: good enough for the turn-order widget, not a
//! guarantee of what actually happens.

use std::cmp::Reverse;

use arrayvec::ArrayVec;

use super::InitiativeTracker;
use crate::config::BattleConfig;
use crate::speed::FixedAction;
use crate::state::{InitiativeSnapshot, TurnQueueEntry};

/// Scratch readiness charged to a projected actor after its simulated turn.
const PROJECTED_ACTION_DELAY: i32 = FixedAction::Defend.base_delay();

impl InitiativeTracker {
    /// Returns an immutable view of the schedule for display.
    pub fn snapshot(&self) -> InitiativeSnapshot {
        InitiativeSnapshot {
            current_tick: self.clock,
            queue: self.project_turn_queue(),
            active_entity: self.active,
        }
    }

    /// Forecasts up to [`QUEUE_DISPLAY_COUNT`](BattleConfig::QUEUE_DISPLAY_COUNT)
    /// upcoming turns.
    ///
    /// The active entity, if any, always occupies position 0. Simulation then
    /// repeatedly picks the highest scratch readiness at or above the
    /// threshold (ties to the earliest registered), appends it, and charges
    /// it the projected defend cost; when nobody qualifies, the scratch tick
    /// advances. Bounded at
    /// [`MAX_PROJECTION_TICKS`](BattleConfig::MAX_PROJECTION_TICKS): a bound
    /// hit returns the partial queue built so far.
    pub fn project_turn_queue(
        &self,
    ) -> ArrayVec<TurnQueueEntry, { BattleConfig::QUEUE_DISPLAY_COUNT }> {
        let mut queue = ArrayVec::new();
        let mut scratch = self.scratch_readiness();

        if let Some(active) = self.active {
            if let Some(index) = self.index_of(active) {
                queue.push(self.queue_entry(index, 0, true));
                scratch[index] = -PROJECTED_ACTION_DELAY;
            }
        }

        let mut simulated_ticks = 0;
        while !queue.is_full() && simulated_ticks < BattleConfig::MAX_PROJECTION_TICKS {
            match self.best_scratch_index(&scratch) {
                Some(index) => {
                    queue.push(self.queue_entry(index, queue.len(), false));
                    scratch[index] = -PROJECTED_ACTION_DELAY;
                }
                None => {
                    simulated_ticks += 1;
                    self.advance_scratch(&mut scratch);
                }
            }
        }

        if !queue.is_full() {
            tracing::error!(
                projected = queue.len(),
                participants = self.participant_count(),
                "turn-order projection hit its tick budget, returning partial queue"
            );
        }

        queue
    }

    /// Previews where the active entity would reappear in the forecast if its
    /// chosen action cost `candidate_delay`.
    ///
    /// Clones the live readiness into scratch, charges the active entity the
    /// candidate delay as if the action had already resolved, then runs the
    /// forecast loop counting how many other entries are inserted before the
    /// active id resurfaces. Returns that 0-based position, or the display
    /// cap when the entity never resurfaces within the simulation bound (or
    /// no entity is active). The live ledger is untouched.
    pub fn simulate_ghost_position(&self, candidate_delay: i32) -> usize {
        let Some(active_index) = self.active.and_then(|active| self.index_of(active)) else {
            tracing::warn!("simulate_ghost_position called with no active entity");
            return BattleConfig::QUEUE_DISPLAY_COUNT;
        };

        let mut scratch = self.scratch_readiness();
        scratch[active_index] = -candidate_delay;

        let mut others_inserted = 0;
        let mut simulated_ticks = 0;
        while others_inserted < BattleConfig::QUEUE_DISPLAY_COUNT
            && simulated_ticks < BattleConfig::MAX_PROJECTION_TICKS
        {
            match self.best_scratch_index(&scratch) {
                Some(index) if index == active_index => return others_inserted,
                Some(index) => {
                    others_inserted += 1;
                    scratch[index] = -PROJECTED_ACTION_DELAY;
                }
                None => {
                    simulated_ticks += 1;
                    self.advance_scratch(&mut scratch);
                }
            }
        }

        BattleConfig::QUEUE_DISPLAY_COUNT
    }

    /// Value copy of the live readiness column, indexed like the arena.
    fn scratch_readiness(&self) -> Vec<i32> {
        self.participants().map(|p| p.readiness).collect()
    }

    /// One simulated tick: every scratch entry gains its own base speed.
    fn advance_scratch(&self, scratch: &mut [i32]) {
        for (value, entry) in scratch.iter_mut().zip(self.participants()) {
            *value += entry.base_speed;
        }
    }

    /// Index of the scratch entry that would act next, if any qualifies.
    /// Same selection rule as the live scheduler.
    fn best_scratch_index(&self, scratch: &[i32]) -> Option<usize> {
        scratch
            .iter()
            .enumerate()
            .filter(|&(_, &readiness)| readiness >= self.config.readiness_threshold)
            .max_by_key(|&(index, &readiness)| (readiness, Reverse(index)))
            .map(|(index, _)| index)
    }

    fn queue_entry(&self, index: usize, position: usize, is_current_actor: bool) -> TurnQueueEntry {
        let entry = &self.participants[index];
        TurnQueueEntry {
            entity: entry.entity,
            name: entry.name.clone(),
            is_player: entry.is_player,
            position,
            is_current_actor,
        }
    }
}
