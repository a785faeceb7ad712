//! Collaborator boundary.
//!
//! Entities are owned by the combat orchestrator; the scheduler reads them
//! through the [`Combatant`] trait at registration time and never afterwards.
//! Randomness comes in through the same door: a stateless [`RngOracle`] keeps
//! the whole subsystem deterministic and replayable for a fixed encounter
//! seed.

mod rng;

pub use rng::{PcgRng, RngOracle, compute_seed};

use crate::state::EntityId;

/// Read-only view of a combat participant.
///
/// Implemented by both player characters and monsters on the orchestrator
/// side. The scheduler copies what it needs (identity, display data, derived
/// base speed) into its own ledger when an encounter starts.
pub trait Combatant {
    /// Stable identity within the encounter.
    fn id(&self) -> EntityId;

    /// Display name shown in the turn-order UI.
    fn name(&self) -> &str;

    /// True for player-controlled units.
    fn is_player(&self) -> bool;

    fn agility(&self) -> i32;

    fn level(&self) -> i32;

    /// False once the participant is dead or has fled.
    fn is_able_to_act(&self) -> bool;
}
