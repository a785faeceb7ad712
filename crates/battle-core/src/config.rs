/// Scheduler configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleConfig {
    /// Readiness value at which a participant becomes eligible to act.
    pub readiness_threshold: i32,
}

impl BattleConfig {
    // ===== compile-time constants used as type parameters =====
    /// Maximum number of upcoming turns shown in the turn-order forecast.
    pub const QUEUE_DISPLAY_COUNT: usize = 12;

    // ===== loop safety valves =====
    /// Tick budget for real schedule advancement. Exceeding it means the
    /// ledger is degenerate (e.g. empty) and the call degrades instead of
    /// spinning forever.
    pub const MAX_ADVANCE_TICKS: u32 = 1000;
    /// Tick budget for forecast simulation. A bound hit yields a short queue.
    pub const MAX_PROJECTION_TICKS: u32 = 500;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_READINESS_THRESHOLD: i32 = 20;

    pub fn new() -> Self {
        Self {
            readiness_threshold: Self::DEFAULT_READINESS_THRESHOLD,
        }
    }

    pub fn with_readiness_threshold(readiness_threshold: i32) -> Self {
        Self {
            readiness_threshold,
        }
    }
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self::new()
    }
}
