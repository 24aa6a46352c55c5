//! Engine Fingerprints
//!
//! SHA-256 digests over engine fields, written in a fixed order. A replay
//! matches a live game only if every digest along the way matches, and a
//! transcript carries the digest of the rules it was played under.

use sha2::{Sha256, Digest};
use super::fixed::Fixed;

/// 32-byte SHA-256 digest.
pub type StateHash = [u8; 32];

/// Field-by-field SHA-256 writer. Integers go in little-endian.
pub struct StateHasher {
    hasher: Sha256,
}

impl StateHasher {
    /// Start a digest under `domain`, so equal fields in different
    /// contexts never collide.
    pub fn new(domain: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(domain);
        Self { hasher }
    }

    /// Digest of a running game.
    pub fn for_engine_state() -> Self {
        Self::new(b"PENALTY_KICK_STATE_V1")
    }

    /// Digest of the rules a game is played under.
    pub fn for_config() -> Self {
        Self::new(b"PENALTY_KICK_CONFIG_V1")
    }

    /// Meter readings, counts, tags.
    #[inline]
    pub fn update_u8(&mut self, value: u8) {
        self.hasher.update([value]);
    }

    /// Step counters and epochs.
    #[inline]
    pub fn update_u32(&mut self, value: u32) {
        self.hasher.update(value.to_le_bytes());
    }

    /// Seeds, RNG words, millisecond delays.
    #[inline]
    pub fn update_u64(&mut self, value: u64) {
        self.hasher.update(value.to_le_bytes());
    }

    /// Raw Q16.16 bits.
    #[inline]
    pub fn update_i32(&mut self, value: i32) {
        self.hasher.update(value.to_le_bytes());
    }

    /// Keeper position and other fixed-point values.
    #[inline]
    pub fn update_fixed(&mut self, value: Fixed) {
        self.update_i32(value);
    }

    /// One byte, 0 or 1.
    #[inline]
    pub fn update_bool(&mut self, value: bool) {
        self.update_u8(value as u8);
    }

    /// Consume the writer.
    pub fn finalize(self) -> StateHash {
        self.hasher.finalize().into()
    }
}

/// Digest of a game at `step`.
///
/// Step and seed always come first; `add_state` writes the rest in the
/// engine's field order.
pub fn compute_state_hash<F>(step: u32, rng_seed: u64, add_state: F) -> StateHash
where
    F: FnOnce(&mut StateHasher),
{
    let mut hasher = StateHasher::for_engine_state();
    hasher.update_u32(step);
    hasher.update_u64(rng_seed);

    add_state(&mut hasher);

    hasher.finalize()
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fixed::{from_meter, to_fixed};

    fn keeper_digest(keeper: Fixed, launched: bool) -> StateHash {
        let mut hasher = StateHasher::for_engine_state();
        hasher.update_u8(3);
        hasher.update_fixed(keeper);
        hasher.update_bool(launched);
        hasher.finalize()
    }

    #[test]
    fn test_same_fields_same_digest() {
        assert_eq!(keeper_digest(to_fixed(42.5), true), keeper_digest(to_fixed(42.5), true));
        assert_ne!(keeper_digest(to_fixed(42.5), true), keeper_digest(to_fixed(42.5), false));
        assert_ne!(keeper_digest(from_meter(40), true), keeper_digest(from_meter(41), true));
    }

    #[test]
    fn test_power_and_direction_not_interchangeable() {
        let digest = |power: u8, direction: u8| {
            let mut h = StateHasher::for_engine_state();
            h.update_u8(power);
            h.update_u8(direction);
            h.finalize()
        };

        assert_ne!(digest(80, 20), digest(20, 80));
    }

    #[test]
    fn test_state_and_config_domains_differ() {
        let state = {
            let mut h = StateHasher::for_engine_state();
            h.update_u64(1000);
            h.finalize()
        };
        let config = {
            let mut h = StateHasher::for_config();
            h.update_u64(1000);
            h.finalize()
        };

        assert_ne!(state, config);
    }

    #[test]
    fn test_step_and_seed_lead_the_digest() {
        let shot = |hasher: &mut StateHasher| {
            hasher.update_u8(2);
            hasher.update_u8(1);
        };

        let base = compute_state_hash(7, 12345, shot);
        assert_eq!(base, compute_state_hash(7, 12345, shot));
        assert_ne!(base, compute_state_hash(8, 12345, shot));
        assert_ne!(base, compute_state_hash(7, 54321, shot));
    }
}
