//! Deterministic random number generation.
//!
//! The scheduler rolls dice exactly once per participant, for the initial
//! readiness spread at encounter start. Implementations must be stateless and
//! deterministic: given the same seed they produce the same value, so an
//! encounter can be replayed from its seed alone.

/// Stateless oracle mapping a seed to a random value.
pub trait RngOracle: Send + Sync {
    /// Generate a random u32 value from a seed.
    fn next_u32(&self, seed: u64) -> u32;

    /// Generate a random value in range [min, max] inclusive.
    fn range(&self, seed: u64, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        let span = max - min + 1;
        min + (self.next_u32(seed) % span)
    }
}

/// PCG random number generator (PCG-XSH-RR variant).
///
/// 64-bit LCG state permuted down to 32-bit output. Small, fast, and of good
/// statistical quality for game mechanics.
///
/// Reference: <https://www.pcg-random.org/>
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    /// Advance the LCG state by one step.
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// XSH-RR output permutation: xorshift the high bits, then rotate by the
    /// top bits of the state.
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        let state = Self::pcg_step(seed);
        Self::pcg_output(state)
    }
}

/// Compute a per-event seed from the encounter seed.
///
/// Mixes the roster slot and entity id into the base seed so each
/// participant's initial roll is independent while the whole encounter stays
/// reproducible.
pub fn compute_seed(encounter_seed: u64, slot: u32, entity_id: u32) -> u64 {
    // SplitMix64 / FxHash style multiplicative mixing with a final avalanche.
    let mut hash = encounter_seed;

    hash ^= (slot as u64).wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= (entity_id as u64).wrapping_mul(0x517cc1b727220a95);

    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;

    hash
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_value() {
        let rng = PcgRng;
        assert_eq!(rng.next_u32(42), rng.next_u32(42));
        assert_eq!(rng.range(42, 0, 3), rng.range(42, 0, 3));
    }

    #[test]
    fn range_is_inclusive_and_bounded() {
        let rng = PcgRng;
        for seed in 0..256 {
            let v = rng.range(seed, 0, 3);
            assert!(v <= 3);
        }
        // Degenerate range collapses to min.
        assert_eq!(rng.range(7, 5, 5), 5);
        assert_eq!(rng.range(7, 9, 2), 9);
    }

    #[test]
    fn distinct_slots_produce_distinct_seeds() {
        let a = compute_seed(1, 0, 10);
        let b = compute_seed(1, 1, 10);
        let c = compute_seed(1, 0, 11);
        assert_ne!(a, b);
        assert_ne!(a, c);
    }
}
