use super::EntityId;

/// Per-participant ledger entry.
///
/// One entry exists per live participant, created in
/// [`initialize`](crate::tracker::InitiativeTracker::initialize) and destroyed
/// in [`remove_entity`](crate::tracker::InitiativeTracker::remove_entity) or
/// [`reset`](crate::tracker::InitiativeTracker::reset). Entries live in an
/// insertion-ordered arena; readiness ties are broken by arena index, so the
/// participant registered first wins.
///
/// # Invariants
///
/// - `base_speed` is never mutated after creation. Recomputing it requires
///   removing and re-adding the participant.
/// - `readiness` is unbounded in both directions; only the configured
///   threshold decides eligibility to act.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReadinessState {
    pub entity: EntityId,

    /// Display name, copied once from the entity at registration.
    pub name: String,

    /// Whether this participant is player-controlled.
    pub is_player: bool,

    /// Accumulated readiness. Gains `base_speed` per tick; flattened to the
    /// negated action delay after the participant acts.
    pub readiness: i32,

    /// Readiness gained per tick, derived from agility and level at
    /// registration.
    pub base_speed: i32,
}
