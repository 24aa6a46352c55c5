//! Engine Events
//!
//! Events generated by state transitions, for logging, displays and
//! transcripts. Meter ticks do not generate events; snapshots cover them.

use serde::{Serialize, Deserialize};

use crate::core::fixed::Fixed;
use crate::game::resolve::ShotResult;

/// Engine event data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineEventData {
    /// Player started a kick; power meter running.
    ShotStarted {
        shot: u8,
    },

    /// Power captured; direction meter running.
    PowerLocked {
        power: u8,
    },

    /// Direction captured and keeper placed; outcome decided but not shown.
    DirectionLocked {
        direction: u8,
        keeper: Fixed,
    },

    /// Ball left the spot.
    BallLaunched,

    /// Outcome revealed.
    ShotResolved {
        result: ShotResult,
        score: u8,
    },

    /// Result acknowledged; next kick ready.
    NextShot {
        shots_remaining: u8,
    },

    /// Last result acknowledged; game over.
    GameEnded {
        score: u8,
    },
}

/// An engine event with the step it happened on.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineEvent {
    /// Accepted-input counter when the event occurred.
    pub step: u32,

    /// Shot number the event belongs to (1-based).
    pub shot: u8,

    /// Event data
    pub data: EngineEventData,
}

impl EngineEvent {
    /// Create a new event.
    pub fn new(step: u32, shot: u8, data: EngineEventData) -> Self {
        Self { step, shot, data }
    }

    /// Create shot started event.
    pub fn shot_started(step: u32, shot: u8) -> Self {
        Self::new(step, shot, EngineEventData::ShotStarted { shot })
    }

    /// Create power locked event.
    pub fn power_locked(step: u32, shot: u8, power: u8) -> Self {
        Self::new(step, shot, EngineEventData::PowerLocked { power })
    }

    /// Create direction locked event.
    pub fn direction_locked(step: u32, shot: u8, direction: u8, keeper: Fixed) -> Self {
        Self::new(step, shot, EngineEventData::DirectionLocked { direction, keeper })
    }

    /// Create ball launched event.
    pub fn ball_launched(step: u32, shot: u8) -> Self {
        Self::new(step, shot, EngineEventData::BallLaunched)
    }

    /// Create shot resolved event.
    pub fn shot_resolved(step: u32, shot: u8, result: ShotResult, score: u8) -> Self {
        Self::new(step, shot, EngineEventData::ShotResolved { result, score })
    }

    /// Create next shot event.
    pub fn next_shot(step: u32, shot: u8, shots_remaining: u8) -> Self {
        Self::new(step, shot, EngineEventData::NextShot { shots_remaining })
    }

    /// Create game ended event.
    pub fn game_ended(step: u32, shot: u8, score: u8) -> Self {
        Self::new(step, shot, EngineEventData::GameEnded { score })
    }

    /// Whether this event ends the game.
    pub fn is_game_end(&self) -> bool {
        matches!(self.data, EngineEventData::GameEnded { .. })
    }
}
