//! Configuration
//!
//! One JSON document configures both the engine rules and the session
//! runtime. Every field has a default, so `{}` is a valid config and a file
//! only needs to name what it changes.
//!
//! ```json
//! {
//!   "engine": { "shots_per_game": 3, "resolution": { "keeper_reach": 30 } },
//!   "session": { "max_sessions": 8 }
//! }
//! ```

use std::path::Path;

use serde::{Serialize, Deserialize};
use thiserror::Error;

use crate::core::fixed::METER_MAX;
use crate::game::engine::ShotConfig;
use crate::game::meter::MeterConfig;
use crate::session::SessionConfig;

/// Top-level configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Rules for every game.
    pub engine: ShotConfig,
    /// Runtime limits.
    pub session: SessionConfig,
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path that failed.
        path: String,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Not valid JSON for this schema.
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),

    /// Parsed, but a value is out of range.
    #[error("{field}: {reason}")]
    Invalid {
        /// Offending field, dotted.
        field: &'static str,
        /// What is wrong with it.
        reason: &'static str,
    },
}

impl GameConfig {
    /// Parse and validate a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Check every value the engine and runtime rely on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.engine.validate()?;
        self.session.validate()
    }
}

impl ShotConfig {
    /// Check the rules a game can be started with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check(self.shots_per_game > 0, "engine.shots_per_game", "must be at least 1")?;
        check_meter(&self.power_meter, "engine.power_meter")?;
        check_meter(&self.direction_meter, "engine.direction_meter")?;
        check(
            self.shooting.ball_delay_ms <= self.shooting.resolve_delay_ms,
            "engine.shooting.ball_delay_ms",
            "must not exceed resolve_delay_ms",
        )?;

        let r = &self.resolution;
        check(
            r.strong_threshold <= r.overpowered_threshold,
            "engine.resolution.strong_threshold",
            "must not exceed overpowered_threshold",
        )?;
        for (ok, field) in [
            (r.overpowered_accuracy <= 100, "engine.resolution.overpowered_accuracy"),
            (r.strong_accuracy <= 100, "engine.resolution.strong_accuracy"),
            (r.base_accuracy <= 100, "engine.resolution.base_accuracy"),
        ] {
            check(ok, field, "is a percentage (0-100)")?;
        }
        check(
            r.left_corner <= r.right_corner,
            "engine.resolution.left_corner",
            "must not exceed right_corner",
        )
    }
}

impl SessionConfig {
    /// Check the runtime limits; tokio channels need a non-zero capacity.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check(self.max_sessions > 0, "session.max_sessions", "must be at least 1")?;
        check(self.command_capacity > 0, "session.command_capacity", "must be at least 1")?;
        check(self.event_capacity > 0, "session.event_capacity", "must be at least 1")
    }
}

fn check(ok: bool, field: &'static str, reason: &'static str) -> Result<(), ConfigError> {
    if ok {
        Ok(())
    } else {
        Err(ConfigError::Invalid { field, reason })
    }
}

fn check_meter(meter: &MeterConfig, field: &'static str) -> Result<(), ConfigError> {
    check(
        meter.step > 0 && meter.step <= METER_MAX,
        field,
        "step must be between 1 and 100",
    )?;
    check(meter.period_ms > 0, field, "period_ms must be at least 1")
}
