//! Core deterministic primitives.
//!
//! Everything the shot engine needs to produce identical results from the
//! same seed: fixed-point arithmetic, a seeded RNG and state hashing.

pub mod fixed;
pub mod rng;
pub mod hash;

// Re-export core types
pub use fixed::{Fixed, FIXED_ONE, FIXED_HALF, FIXED_SCALE};
pub use rng::DeterministicRng;
pub use hash::{StateHash, compute_state_hash};
