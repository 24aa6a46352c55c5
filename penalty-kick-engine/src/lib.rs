//! # Penalty Kick Engine
//!
//! A five-shot penalty game driven by one button: start the kick, stop the
//! power meter, stop the direction meter, watch the keeper, acknowledge.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    PENALTY KICK ENGINE                       │
//! ├─────────────────────────────────────────────────────────────┤
//! │  core/           - Deterministic primitives                  │
//! │  ├── fixed.rs    - Q16.16 fixed-point and meter constants    │
//! │  ├── rng.rs      - Deterministic Xorshift128+ PRNG           │
//! │  └── hash.rs     - State hashing for verification            │
//! │                                                              │
//! │  game/           - Game logic (deterministic)                │
//! │  ├── meter.rs    - Oscillating power/direction meters        │
//! │  ├── resolve.rs  - Goal / Saved / Missed                     │
//! │  ├── engine.rs   - Per-session shot state machine            │
//! │  ├── state.rs    - Phases, snapshots, shot history           │
//! │  ├── events.rs   - Transition events                         │
//! │  └── replay.rs   - Transcripts and replay verification       │
//! │                                                              │
//! │  session/        - Runtime (non-deterministic)               │
//! │  ├── timers.rs   - Stage-owned tokio timers                  │
//! │  ├── session.rs  - One task per game                         │
//! │  └── manager.rs  - Session routing                           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Determinism Guarantee
//!
//! The `core/` and `game/` modules never read a clock and never decide
//! anything with floating point. Given the same seed, config and input
//! sequence, a game produces the same shots, score and state hash on any
//! platform. Timing lives entirely in `session/`.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod config;
pub mod core;
pub mod game;
pub mod session;

// Re-export commonly used types
pub use config::{ConfigError, GameConfig};
pub use core::fixed::{Fixed, FIXED_ONE, FIXED_HALF, FIXED_SCALE};
pub use core::rng::DeterministicRng;
pub use game::engine::{ShotConfig, ShotEngine, TriggerResult};
pub use game::resolve::ShotResult;
pub use game::state::{EngineSnapshot, ShotPhase};
pub use session::{GameHost, GameSummary, SessionManager};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Shots in a standard game.
pub const SHOTS_PER_GAME: u8 = 5;
