//! Host Notifications
//!
//! The embedding application learns that a game is over through a
//! `GameHost`. It is called exactly once per game, from the session task,
//! right after the final acknowledgement.

use serde::{Serialize, Deserialize};

use crate::core::hash::StateHash;
use crate::game::replay::GameTranscript;
use crate::game::state::ShotRecord;
use crate::session::session::SessionId;

/// Everything known about a finished game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    /// Session that played the game.
    pub session_id: SessionId,
    /// Goals scored.
    pub score: u8,
    /// Every shot, in order.
    pub shots: Vec<ShotRecord>,
    /// Engine state hash at game end.
    pub final_hash: StateHash,
    /// Replayable record, when the session was recording.
    pub transcript: Option<GameTranscript>,
}

impl GameSummary {
    /// Shots that went in.
    pub fn goals(&self) -> impl Iterator<Item = &ShotRecord> {
        self.shots.iter().filter(|s| s.result.is_goal())
    }
}

/// Receives game-over notifications.
pub trait GameHost: Send + 'static {
    /// The game is over. Called once.
    fn game_ended(&mut self, summary: GameSummary);
}

impl<F> GameHost for F
where
    F: FnMut(GameSummary) + Send + 'static,
{
    fn game_ended(&mut self, summary: GameSummary) {
        self(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::resolve::ShotResult;
    use std::sync::{Arc, Mutex};

    fn record(shot: u8, result: ShotResult) -> ShotRecord {
        ShotRecord { shot, power: 40, direction: 30, keeper: 0, result }
    }

    #[test]
    fn test_closure_is_host() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let mut host: Box<dyn GameHost> = Box::new(move |summary: GameSummary| {
            sink.lock().unwrap().push(summary.score);
        });

        host.game_ended(GameSummary {
            session_id: [1; 16],
            score: 2,
            shots: vec![],
            final_hash: [0; 32],
            transcript: None,
        });

        assert_eq!(*seen.lock().unwrap(), vec![2]);
    }

    #[test]
    fn test_goals_filter() {
        let summary = GameSummary {
            session_id: [0; 16],
            score: 2,
            shots: vec![
                record(1, ShotResult::Goal),
                record(2, ShotResult::Saved),
                record(3, ShotResult::Goal),
                record(4, ShotResult::Missed),
            ],
            final_hash: [0; 32],
            transcript: None,
        };

        let goals: Vec<u8> = summary.goals().map(|s| s.shot).collect();
        assert_eq!(goals, vec![1, 3]);
    }
}
