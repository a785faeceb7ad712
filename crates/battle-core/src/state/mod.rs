//! Scheduler state representation.
//!
//! This module owns the data structures that describe participants, the tick
//! clock, and the read-only turn-order projections handed to the UI. The
//! tracker mutates this state; everything exported here is plain data.
pub mod common;
pub mod readiness;
pub mod snapshot;

pub use common::{EntityId, Tick};
pub use readiness::ReadinessState;
pub use snapshot::{InitiativeSnapshot, TurnQueueEntry};
