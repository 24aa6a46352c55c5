//! Game Session
//!
//! One tokio task per game. The task owns the engine outright; everything
//! else talks to it through channels:
//!
//! ```text
//!   SessionHandle ──mpsc<SessionCommand>──► ┌──────────────┐
//!                                           │ session task │◄── PhaseTimers
//!   watch<EngineSnapshot> ◄──────────────── │  ShotEngine  │
//!   broadcast<EngineEvent> ◄─────────────── └──────┬───────┘
//!                                                  └──► GameHost (once)
//! ```
//!
//! Triggers and timer inputs are serialized by the task's select loop, so
//! the engine never sees two inputs at once.

use serde::{Serialize, Deserialize};
use tokio::sync::{broadcast, mpsc, oneshot, watch};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::config::ConfigError;
use crate::game::engine::{ShotConfig, ShotEngine};
use crate::game::events::EngineEvent;
use crate::game::input::EngineInput;
use crate::game::replay::TranscriptRecorder;
use crate::game::state::EngineSnapshot;
use crate::session::host::{GameHost, GameSummary};
use crate::session::timers::PhaseTimers;

/// Unique session identifier (UUID bytes).
pub type SessionId = [u8; 16];

/// Runtime limits for sessions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Concurrent sessions a manager will hold.
    pub max_sessions: usize,
    /// Queued commands per session.
    pub command_capacity: usize,
    /// Buffered events per subscriber before it lags.
    pub event_capacity: usize,
    /// Keep a replayable transcript of every game.
    pub record_transcripts: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_sessions: 64,
            command_capacity: 32,
            event_capacity: 256,
            record_transcripts: true,
        }
    }
}

/// Reply to a trigger.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TriggerAck {
    /// Whether the engine accepted it.
    pub accepted: bool,
    /// State right after the trigger.
    pub snapshot: EngineSnapshot,
    /// Final score, on the trigger that ended the game.
    pub game_over: Option<u8>,
}

/// Commands accepted by the session task.
#[derive(Debug)]
pub enum SessionCommand {
    /// The player's action.
    Trigger {
        /// Where to send the outcome.
        reply: oneshot::Sender<TriggerAck>,
    },
    /// Stop the task.
    Close,
}

/// Session errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// No session with that id.
    #[error("Session not found")]
    SessionNotFound,

    /// Manager is at capacity.
    #[error("Too many sessions (limit {limit})")]
    TooManySessions {
        /// Configured limit.
        limit: usize,
    },

    /// The session task has stopped.
    #[error("Session closed")]
    Closed,

    /// Rules or limits failed validation.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

impl From<ConfigError> for SessionError {
    fn from(err: ConfigError) -> Self {
        SessionError::InvalidConfig(err.to_string())
    }
}

// =============================================================================
// SESSION TASK
// =============================================================================

/// State owned by a running session task.
pub struct GameSession {
    id: SessionId,
    engine: ShotEngine,
    timers: PhaseTimers,
    recorder: Option<TranscriptRecorder>,
    host: Box<dyn GameHost>,
    commands: mpsc::Receiver<SessionCommand>,
    snapshot_tx: watch::Sender<EngineSnapshot>,
    event_tx: broadcast::Sender<EngineEvent>,
}

impl GameSession {
    /// Start a game on its own task.
    ///
    /// Both configs are validated first: a zero meter period or channel
    /// capacity would panic inside tokio.
    pub fn spawn<H: GameHost>(
        id: SessionId,
        engine_config: ShotConfig,
        seed: u64,
        config: &SessionConfig,
        host: H,
    ) -> Result<SessionHandle, ConfigError> {
        engine_config.validate()?;
        config.validate()?;

        let (command_tx, commands) = mpsc::channel(config.command_capacity);
        let (event_tx, _) = broadcast::channel(config.event_capacity);

        let recorder = config
            .record_transcripts
            .then(|| TranscriptRecorder::new(engine_config.clone(), seed));
        let engine = ShotEngine::new(engine_config, seed);
        let (snapshot_tx, snapshot_rx) = watch::channel(engine.snapshot());

        let session = GameSession {
            id,
            engine,
            timers: PhaseTimers::new(),
            recorder,
            host: Box::new(host),
            commands,
            snapshot_tx,
            event_tx: event_tx.clone(),
        };

        let task = tokio::spawn(session.run());

        Ok(SessionHandle {
            id,
            commands: command_tx,
            snapshot_rx,
            event_tx,
            task,
        })
    }

    async fn run(mut self) {
        info!(session = %hex::encode(&self.id[..4]), seed = self.engine.seed(), "session started");

        loop {
            self.timers.sync(self.engine.epoch(), self.engine.schedule());

            tokio::select! {
                command = self.commands.recv() => match command {
                    Some(SessionCommand::Trigger { reply }) => {
                        let ack = self.handle_trigger();
                        // Caller may have given up waiting
                        let _ = reply.send(ack);
                    }
                    Some(SessionCommand::Close) | None => break,
                },
                input = self.timers.next() => {
                    if self.engine.apply(input) {
                        let events = self.engine.take_events();
                        self.accepted(input, events, None);
                    } else {
                        warn!(?input, phase = self.engine.phase().name(), "timer input rejected");
                    }
                }
            }
        }

        debug!(
            session = %hex::encode(&self.id[..4]),
            finished = self.engine.is_finished(),
            "session stopped"
        );
    }

    fn handle_trigger(&mut self) -> TriggerAck {
        let result = self.engine.trigger();
        if result.accepted {
            self.accepted(EngineInput::Trigger, result.events, result.game_over);
        }

        TriggerAck {
            accepted: result.accepted,
            snapshot: self.engine.snapshot(),
            game_over: result.game_over,
        }
    }

    /// Record, publish and, when the game just ended, notify the host.
    fn accepted(&mut self, input: EngineInput, events: Vec<EngineEvent>, game_over: Option<u8>) {
        if let Some(recorder) = self.recorder.as_mut() {
            recorder.record(input, &self.engine);
        }

        self.snapshot_tx.send_replace(self.engine.snapshot());
        for event in events {
            // No subscribers is fine
            let _ = self.event_tx.send(event);
        }

        if let Some(score) = game_over {
            let inputs = self.recorder.as_ref().map_or(0, TranscriptRecorder::input_count);
            info!(session = %hex::encode(&self.id[..4]), score, inputs, "game ended");
            let summary = GameSummary {
                session_id: self.id,
                score,
                shots: self.engine.history().to_vec(),
                final_hash: self.engine.compute_hash(),
                transcript: self.recorder.take().map(TranscriptRecorder::finish),
            };
            self.host.game_ended(summary);
        }
    }
}

// =============================================================================
// HANDLE
// =============================================================================

/// Owner's handle to a running session. Dropping it stops the task.
pub struct SessionHandle {
    id: SessionId,
    commands: mpsc::Sender<SessionCommand>,
    snapshot_rx: watch::Receiver<EngineSnapshot>,
    event_tx: broadcast::Sender<EngineEvent>,
    task: JoinHandle<()>,
}

impl SessionHandle {
    /// Session identifier.
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// Send the player's action and wait for the engine's answer.
    pub async fn trigger(&self) -> Result<TriggerAck, SessionError> {
        let (reply, response) = oneshot::channel();
        self.commands
            .send(SessionCommand::Trigger { reply })
            .await
            .map_err(|_| SessionError::Closed)?;
        response.await.map_err(|_| SessionError::Closed)
    }

    /// Latest published state.
    pub fn snapshot(&self) -> EngineSnapshot {
        self.snapshot_rx.borrow().clone()
    }

    /// Receiver that wakes on every state change.
    pub fn watch(&self) -> watch::Receiver<EngineSnapshot> {
        self.snapshot_rx.clone()
    }

    /// Subscribe to transition events.
    pub fn subscribe(&self) -> broadcast::Receiver<EngineEvent> {
        self.event_tx.subscribe()
    }

    /// Whether the task has stopped.
    pub fn is_closed(&self) -> bool {
        self.task.is_finished()
    }

    /// Ask the task to stop and wait for it.
    pub async fn close(mut self) {
        if self.commands.send(SessionCommand::Close).await.is_ok() {
            let _ = (&mut self.task).await;
        }
    }
}

impl Drop for SessionHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}
