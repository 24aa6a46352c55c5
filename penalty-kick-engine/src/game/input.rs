//! Engine Inputs
//!
//! The four things that can happen to a shot engine. `Trigger` comes from
//! the player; the rest come from timers owned by the current phase.
//! Recording the accepted inputs in order is enough to replay a game.

use serde::{Serialize, Deserialize};

/// A single input to the shot engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum EngineInput {
    /// The player's single discrete action (tap/click/key).
    Trigger = 0,
    /// Periodic meter advance.
    Tick = 1,
    /// Early shooting delay elapsed: ball leaves the spot.
    LaunchBall = 2,
    /// Late shooting delay elapsed: outcome is revealed.
    Settle = 3,
}

impl EngineInput {
    /// Decode from the wire byte.
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(EngineInput::Trigger),
            1 => Some(EngineInput::Tick),
            2 => Some(EngineInput::LaunchBall),
            3 => Some(EngineInput::Settle),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_encoding() {
        for input in [
            EngineInput::Trigger,
            EngineInput::Tick,
            EngineInput::LaunchBall,
            EngineInput::Settle,
        ] {
            assert_eq!(EngineInput::from_u8(input as u8), Some(input));
        }
        assert_eq!(EngineInput::from_u8(4), None);
    }
}
