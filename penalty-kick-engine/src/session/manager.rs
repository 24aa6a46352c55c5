//! Session Manager
//!
//! Keeps every running game addressable by id. Each session still runs on
//! its own task; the manager only routes commands and enforces the limit.

use std::collections::BTreeMap;
use std::time::{SystemTime, UNIX_EPOCH};

use tokio::sync::{broadcast, RwLock};
use tracing::{debug, info};

use crate::config::{ConfigError, GameConfig};
use crate::core::rng::derive_session_seed;
use crate::game::events::EngineEvent;
use crate::game::state::EngineSnapshot;
use crate::session::host::GameHost;
use crate::session::session::{GameSession, SessionError, SessionHandle, SessionId, TriggerAck};

/// Manages all active sessions.
pub struct SessionManager {
    config: GameConfig,
    sessions: RwLock<BTreeMap<SessionId, SessionHandle>>,
}

impl SessionManager {
    /// Create a manager that starts every game with `config`.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            sessions: RwLock::new(BTreeMap::new()),
        })
    }

    /// Configuration in use.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Start a game with a fresh id and a seed derived from it.
    pub async fn start_game<H: GameHost>(&self, host: H) -> Result<SessionId, SessionError> {
        let id = uuid::Uuid::new_v4().into_bytes();
        let entropy = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos() as u64;
        self.start_game_seeded(id, derive_session_seed(&id, entropy), host).await
    }

    /// Start a game with a caller-chosen id and seed.
    pub async fn start_game_seeded<H: GameHost>(
        &self,
        id: SessionId,
        seed: u64,
        host: H,
    ) -> Result<SessionId, SessionError> {
        let mut sessions = self.sessions.write().await;

        let limit = self.config.session.max_sessions;
        if sessions.len() >= limit {
            return Err(SessionError::TooManySessions { limit });
        }

        let handle = GameSession::spawn(id, self.config.engine.clone(), seed, &self.config.session, host)?;
        // Replacing an id drops (and stops) the old session
        sessions.insert(id, handle);

        info!(session = %hex::encode(&id[..4]), active = sessions.len(), "game started");
        Ok(id)
    }

    /// Forward the player's action to a session.
    pub async fn trigger(&self, id: &SessionId) -> Result<TriggerAck, SessionError> {
        let sessions = self.sessions.read().await;
        let handle = sessions.get(id).ok_or(SessionError::SessionNotFound)?;
        handle.trigger().await
    }

    /// Latest state of a session.
    pub async fn snapshot(&self, id: &SessionId) -> Result<EngineSnapshot, SessionError> {
        let sessions = self.sessions.read().await;
        sessions
            .get(id)
            .map(SessionHandle::snapshot)
            .ok_or(SessionError::SessionNotFound)
    }

    /// Subscribe to a session's events.
    pub async fn subscribe(&self, id: &SessionId) -> Result<broadcast::Receiver<EngineEvent>, SessionError> {
        let sessions = self.sessions.read().await;
        sessions
            .get(id)
            .map(SessionHandle::subscribe)
            .ok_or(SessionError::SessionNotFound)
    }

    /// Stop a session and forget it.
    pub async fn end_game(&self, id: &SessionId) -> Result<(), SessionError> {
        let handle = {
            let mut sessions = self.sessions.write().await;
            sessions.remove(id).ok_or(SessionError::SessionNotFound)?
        };
        handle.close().await;
        debug!(session = %hex::encode(&id[..4]), "game ended by host");
        Ok(())
    }

    /// Active session count.
    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Drop sessions whose game is over or whose task has stopped.
    pub async fn cleanup(&self) -> usize {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, handle| !handle.is_closed() && !handle.snapshot().finished);

        let removed = before - sessions.len();
        if removed > 0 {
            debug!(removed, remaining = sessions.len(), "sessions cleaned up");
        }
        removed
    }
}

impl Default for SessionManager {
    fn default() -> Self {
        Self {
            config: GameConfig::default(),
            sessions: RwLock::new(BTreeMap::new()),
        }
    }
}
