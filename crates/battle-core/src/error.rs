//! Scheduling errors.
//!
//! All failure modes in this crate are recoverable: the scheduler runs inside
//! the combat loop and degrades instead of panicking. Unknown-entity
//! references are warned about and ignored at the call site; only a stalled
//! schedule surfaces as a typed error the orchestrator must handle.

/// Errors that can occur during turn scheduling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TurnError {
    /// The advance loop exhausted its tick budget without any participant
    /// reaching the readiness threshold.
    #[error("schedule stalled: no participant reached the readiness threshold within {ticks} ticks")]
    ScheduleStalled { ticks: u32 },
}
