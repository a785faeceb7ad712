//! Tick-based initiative scheduling for encounter combat.
//!
//! `battle-core` decides whose turn it is. It keeps a per-encounter ledger of
//! participant readiness, advances it tick-by-tick until someone may act, and
//! produces non-mutating turn-order forecasts for the UI. The combat
//! orchestrator owns the entities and the action resolution; this crate only
//! reads entity data through [`env::Combatant`] and prices actions through the
//! pure functions in [`speed`].
pub mod config;
pub mod env;
pub mod error;
pub mod speed;
pub mod state;
pub mod tracker;

pub use config::BattleConfig;
pub use env::{Combatant, PcgRng, RngOracle, compute_seed};
pub use error::TurnError;
pub use speed::{
    FixedAction, SpellCategory, SpellScope, WeaponSpeed, attack_delay, base_speed,
    fixed_action_delay, spell_delay,
};
pub use state::{EntityId, InitiativeSnapshot, ReadinessState, Tick, TurnQueueEntry};
pub use tracker::InitiativeTracker;
