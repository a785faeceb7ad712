//! Read-only turn-order projections.
//!
//! These types are computed from the live ledger and handed to the turn-order
//! UI widget. They are value copies; holding or mutating them has no effect on
//! the schedule.

use arrayvec::ArrayVec;

use super::{EntityId, Tick};
use crate::config::BattleConfig;

/// One upcoming turn in the forecast.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnQueueEntry {
    pub entity: EntityId,
    pub name: String,
    pub is_player: bool,
    /// 0-based position in the forecast queue.
    pub position: usize,
    /// True only for the entry at position 0 when an entity is mid-turn.
    pub is_current_actor: bool,
}

/// Immutable view of the schedule for display.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InitiativeSnapshot {
    /// Tick clock at the time of the snapshot.
    pub current_tick: Tick,

    /// Forecast of upcoming turns, at most
    /// [`QUEUE_DISPLAY_COUNT`](BattleConfig::QUEUE_DISPLAY_COUNT) entries.
    /// Shorter when the simulation bound was hit.
    pub queue: ArrayVec<TurnQueueEntry, { BattleConfig::QUEUE_DISPLAY_COUNT }>,

    /// The entity currently taking its turn, if any.
    pub active_entity: Option<EntityId>,
}
