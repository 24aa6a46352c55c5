//! Game Transcripts
//!
//! Records everything needed to replay a game and prove its score: the
//! seed, the configuration, and the accepted inputs in order. The engine
//! is a pure function of those three, so replaying the inputs must land on
//! the same per-shot checkpoints and the same final state hash.

use serde::{Serialize, Deserialize};
use thiserror::Error;
use tracing::debug;

use crate::core::hash::{StateHash, StateHasher};
use crate::game::engine::{ShotConfig, ShotEngine};
use crate::game::input::EngineInput;
use crate::game::state::ShotPhase;

/// Current transcript version.
pub const TRANSCRIPT_VERSION: u8 = 1;

// =============================================================================
// CONFIG HASH
// =============================================================================

impl ShotConfig {
    /// Hash of every rule that affects outcomes.
    ///
    /// Meter periods and shooting delays only change wall-clock pacing, so
    /// they are left out.
    pub fn config_hash(&self) -> StateHash {
        let mut hasher = StateHasher::for_config();
        hasher.update_u8(self.shots_per_game);
        hasher.update_u8(self.power_meter.step);
        hasher.update_u8(self.direction_meter.step);

        let r = &self.resolution;
        for value in [
            r.overpowered_threshold,
            r.strong_threshold,
            r.overpowered_accuracy,
            r.strong_accuracy,
            r.base_accuracy,
            r.keeper_reach,
            r.left_corner,
            r.right_corner,
            r.corner_bonus,
            r.power_bonus_threshold,
            r.power_bonus,
        ] {
            hasher.update_u8(value);
        }
        hasher.finalize()
    }
}

// =============================================================================
// TRANSCRIPT
// =============================================================================

/// State hash taken when a shot is resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShotCheckpoint {
    /// Shot number (1-based).
    pub shot: u8,
    /// Engine step at resolution.
    pub step: u32,
    /// Engine state hash at resolution.
    pub state_hash: StateHash,
}

/// Complete record of one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameTranscript {
    /// Version for forward compatibility.
    pub version: u8,
    /// Engine seed.
    pub seed: u64,
    /// Rules the game was played under.
    pub config: ShotConfig,
    /// `config.config_hash()` at record time.
    pub config_hash: StateHash,
    /// Accepted inputs, one byte each.
    pub inputs: Vec<u8>,
    /// One checkpoint per resolved shot.
    pub checkpoints: Vec<ShotCheckpoint>,
    /// Final score, once the game is over.
    pub final_score: Option<u8>,
    /// State hash after the last input.
    pub final_hash: StateHash,
}

impl GameTranscript {
    /// Empty transcript for a game about to start.
    pub fn new(config: ShotConfig, seed: u64) -> Self {
        let config_hash = config.config_hash();
        let final_hash = ShotEngine::new(config.clone(), seed).compute_hash();
        Self {
            version: TRANSCRIPT_VERSION,
            seed,
            config,
            config_hash,
            inputs: Vec::new(),
            checkpoints: Vec::new(),
            final_score: None,
            final_hash,
        }
    }

    /// Whether the recorded game reached its end.
    pub fn is_complete(&self) -> bool {
        self.final_score.is_some()
    }

    /// Decode the recorded inputs.
    pub fn decoded_inputs(&self) -> Result<Vec<EngineInput>, TranscriptError> {
        self.inputs
            .iter()
            .enumerate()
            .map(|(index, &byte)| {
                EngineInput::from_u8(byte).ok_or(TranscriptError::InvalidInput { index, byte })
            })
            .collect()
    }

    /// Serialize to bytes using bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>, TranscriptError> {
        bincode::serialize(self).map_err(|e| TranscriptError::Encoding(e.to_string()))
    }

    /// Deserialize from bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self, TranscriptError> {
        bincode::deserialize(data).map_err(|e| TranscriptError::Encoding(e.to_string()))
    }

    /// Serialize to JSON string.
    pub fn to_json(&self) -> Result<String, TranscriptError> {
        serde_json::to_string(self).map_err(|e| TranscriptError::Encoding(e.to_string()))
    }

    /// Deserialize from JSON.
    pub fn from_json(json: &str) -> Result<Self, TranscriptError> {
        serde_json::from_str(json).map_err(|e| TranscriptError::Encoding(e.to_string()))
    }
}

// =============================================================================
// RECORDER
// =============================================================================

/// Builds a transcript alongside a live engine.
#[derive(Clone, Debug)]
pub struct TranscriptRecorder {
    transcript: GameTranscript,
}

impl TranscriptRecorder {
    /// Start recording a game played with this config and seed.
    pub fn new(config: ShotConfig, seed: u64) -> Self {
        Self {
            transcript: GameTranscript::new(config, seed),
        }
    }

    /// Record an input the engine just accepted.
    ///
    /// Rejected inputs must not be recorded; they left no trace in the
    /// engine and replay would reject them too.
    pub fn record(&mut self, input: EngineInput, engine: &ShotEngine) {
        self.transcript.inputs.push(input as u8);

        if input == EngineInput::Settle && engine.phase() == ShotPhase::Result {
            let shot = engine.history().last().map_or(0, |r| r.shot);
            self.transcript.checkpoints.push(ShotCheckpoint {
                shot,
                step: engine.step(),
                state_hash: engine.compute_hash(),
            });
        }

        self.transcript.final_score = engine.final_score();
        self.transcript.final_hash = engine.compute_hash();
    }

    /// Inputs recorded so far.
    pub fn input_count(&self) -> usize {
        self.transcript.inputs.len()
    }

    /// Finish and take the transcript.
    pub fn finish(self) -> GameTranscript {
        self.transcript
    }
}

// =============================================================================
// REPLAY
// =============================================================================

/// Replay a transcript on a fresh engine.
///
/// Fails if the transcript is from another version, its config hash does
/// not match its config, or any recorded input is rejected.
pub fn replay(transcript: &GameTranscript) -> Result<ShotEngine, TranscriptError> {
    replay_with(transcript, |_| Ok(()))
}

/// Replay and check every checkpoint, the final score and the final hash.
pub fn verify(transcript: &GameTranscript) -> Result<ShotEngine, TranscriptError> {
    let mut checkpoints = transcript.checkpoints.iter();
    let mut resolved = 0usize;

    let engine = replay_with(transcript, |engine| {
        resolved += 1;
        match checkpoints.next() {
            Some(checkpoint)
                if checkpoint.step == engine.step()
                    && checkpoint.state_hash == engine.compute_hash() =>
            {
                Ok(())
            }
            Some(checkpoint) => Err(TranscriptError::CheckpointMismatch { shot: checkpoint.shot }),
            None => Err(TranscriptError::CheckpointCount {
                expected: transcript.checkpoints.len(),
                got: resolved,
            }),
        }
    })?;

    if resolved != transcript.checkpoints.len() {
        return Err(TranscriptError::CheckpointCount {
            expected: transcript.checkpoints.len(),
            got: resolved,
        });
    }
    if engine.final_score() != transcript.final_score {
        return Err(TranscriptError::ScoreMismatch {
            expected: transcript.final_score,
            got: engine.final_score(),
        });
    }
    if engine.compute_hash() != transcript.final_hash {
        return Err(TranscriptError::FinalStateMismatch);
    }

    Ok(engine)
}

/// Replay, calling `on_resolved` after every shot resolution.
fn replay_with<F>(transcript: &GameTranscript, mut on_resolved: F) -> Result<ShotEngine, TranscriptError>
where
    F: FnMut(&ShotEngine) -> Result<(), TranscriptError>,
{
    if transcript.version != TRANSCRIPT_VERSION {
        return Err(TranscriptError::VersionMismatch {
            expected: TRANSCRIPT_VERSION,
            got: transcript.version,
        });
    }
    if transcript.config.config_hash() != transcript.config_hash {
        return Err(TranscriptError::ConfigMismatch);
    }

    let mut engine = ShotEngine::new(transcript.config.clone(), transcript.seed);
    for (index, input) in transcript.decoded_inputs()?.into_iter().enumerate() {
        if !engine.apply(input) {
            return Err(TranscriptError::RejectedInput { index, input });
        }
        if input == EngineInput::Settle {
            on_resolved(&engine)?;
        }
    }

    debug!(
        inputs = transcript.inputs.len(),
        score = engine.score(),
        "transcript replayed"
    );
    Ok(engine)
}

// =============================================================================
// ERRORS
// =============================================================================

/// Errors that can occur with transcripts.
#[derive(Debug, Error)]
pub enum TranscriptError {
    /// Bincode or JSON failure.
    #[error("transcript encoding failed: {0}")]
    Encoding(String),

    /// Transcript written by another version.
    #[error("version mismatch: expected {expected}, got {got}")]
    VersionMismatch {
        /// Version this build understands.
        expected: u8,
        /// Version found.
        got: u8,
    },

    /// Config does not hash to the recorded config hash.
    #[error("config hash mismatch")]
    ConfigMismatch,

    /// Unknown input byte.
    #[error("invalid input byte {byte} at index {index}")]
    InvalidInput {
        /// Position in the input list.
        index: usize,
        /// Offending byte.
        byte: u8,
    },

    /// Engine refused a recorded input.
    #[error("input {input:?} at index {index} rejected on replay")]
    RejectedInput {
        /// Position in the input list.
        index: usize,
        /// The input.
        input: EngineInput,
    },

    /// Replay resolved a different number of shots.
    #[error("expected {expected} checkpoints, replay produced {got}")]
    CheckpointCount {
        /// Recorded checkpoints.
        expected: usize,
        /// Shots resolved on replay.
        got: usize,
    },

    /// State diverged at a shot resolution.
    #[error("state diverged at shot {shot}")]
    CheckpointMismatch {
        /// Shot number.
        shot: u8,
    },

    /// Final score differs.
    #[error("score mismatch: recorded {expected:?}, replayed {got:?}")]
    ScoreMismatch {
        /// Recorded score.
        expected: Option<u8>,
        /// Replayed score.
        got: Option<u8>,
    },

    /// Final state hash differs.
    #[error("final state hash mismatch")]
    FinalStateMismatch,
}
