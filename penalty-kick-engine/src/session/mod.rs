//! Session Runtime
//!
//! Async plumbing around the engine. Nothing here is deterministic: it
//! owns real timers and channels, and feeds the engine its inputs.
//!
//! - `timers`: Real timers for the engine's current stage
//! - `session`: One task per game, plus its handle
//! - `host`: Game-over notification
//! - `manager`: Routing by session id

pub mod timers;
#[allow(clippy::module_inception)]
pub mod session;
pub mod host;
pub mod manager;

pub use timers::PhaseTimers;
pub use session::{GameSession, SessionCommand, SessionConfig, SessionError, SessionHandle, SessionId, TriggerAck};
pub use host::{GameHost, GameSummary};
pub use manager::SessionManager;
