//! Engine State Definitions
//!
//! Read-only views of a shot engine: the public phase, the snapshot handed
//! to displays after every input, and the per-shot history.

use serde::{Serialize, Deserialize};

use crate::core::fixed::{Fixed, to_float};
use crate::game::resolve::ShotResult;

// =============================================================================
// PHASE
// =============================================================================

/// Stage of the shot currently in progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
#[derive(Default)]
pub enum ShotPhase {
    /// Waiting for the player to start the kick.
    #[default]
    Ready = 0,
    /// Power meter sweeping.
    Power = 1,
    /// Direction meter sweeping.
    Direction = 2,
    /// Ball in the air; input is ignored until the outcome settles.
    Shooting = 3,
    /// Outcome on display.
    Result = 4,
}

impl ShotPhase {
    /// Lowercase name used in logs and JSON.
    pub fn name(self) -> &'static str {
        match self {
            ShotPhase::Ready => "ready",
            ShotPhase::Power => "power",
            ShotPhase::Direction => "direction",
            ShotPhase::Shooting => "shooting",
            ShotPhase::Result => "result",
        }
    }
}

// =============================================================================
// SHOT HISTORY
// =============================================================================

/// One resolved shot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShotRecord {
    /// Shot number, starting at 1.
    pub shot: u8,
    /// Captured power.
    pub power: u8,
    /// Captured direction.
    pub direction: u8,
    /// Keeper position (Q16.16, 0-100 scale).
    pub keeper: Fixed,
    /// Outcome.
    pub result: ShotResult,
}

// =============================================================================
// SNAPSHOT
// =============================================================================

/// Everything a display needs to draw the current frame.
///
/// Published after every trigger, tick and timer callback.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    /// Current phase.
    pub phase: ShotPhase,
    /// Power meter reading (frozen once captured).
    pub power: u8,
    /// Direction meter reading (frozen once captured).
    pub direction: u8,
    /// Shots not yet completed.
    pub shots_remaining: u8,
    /// Goals so far.
    pub score: u8,
    /// Outcome of the most recent resolved shot, cleared between shots.
    pub last_result: Option<ShotResult>,
    /// Keeper position for the current shot (Q16.16, 0-100 scale).
    pub goalkeeper_position: Fixed,
    /// Ball has left the spot for the current shot.
    pub ball_launched: bool,
    /// Game over; no further transitions.
    pub finished: bool,
    /// Accepted inputs so far.
    pub step: u32,
}

impl EngineSnapshot {
    /// Keeper position as a float, for rendering only.
    pub fn goalkeeper_position_f32(&self) -> f32 {
        to_float(self.goalkeeper_position)
    }

    /// Serialize to JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
