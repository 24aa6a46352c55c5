//! Game Logic Module
//!
//! The shot engine and everything it is built from. 100% deterministic:
//! no clocks, no floats in decisions, all randomness from a seeded RNG.
//!
//! ## Module Structure
//!
//! - `meter`: Oscillating power/direction meters
//! - `resolve`: Turning a captured shot into Goal / Saved / Missed
//! - `state`: Public phase, snapshots and shot history
//! - `input`: The four engine inputs
//! - `engine`: The per-session state machine
//! - `events`: Transition events for logs and displays
//! - `replay`: Transcripts and deterministic replay

pub mod meter;
pub mod resolve;
pub mod state;
pub mod input;
pub mod engine;
pub mod events;
pub mod replay;

// Re-export key types
pub use meter::{Meter, MeterConfig};
pub use resolve::{ResolutionConfig, ShotParams, ShotResult, resolve_shot};
pub use state::{EngineSnapshot, ShotPhase, ShotRecord};
pub use input::EngineInput;
pub use engine::{Schedule, ShootingConfig, ShotConfig, ShotEngine, TriggerResult};
pub use events::{EngineEvent, EngineEventData};
pub use replay::{GameTranscript, TranscriptError, TranscriptRecorder};
