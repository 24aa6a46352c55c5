//! Shot Engine
//!
//! The per-session state machine. One discrete trigger and three timer
//! inputs drive every shot through
//!
//! ```text
//!   Ready ──trigger──► Power ──trigger──► Direction ──trigger──► Shooting
//!     ▲                 tick               tick                 launch, settle
//!     │                                                             │
//!     └────────trigger (shots left)──── Result ◄────────────────────┘
//!                                          │
//!                                          └─trigger (last shot)──► Finished
//! ```
//!
//! Every input is either applied or ignored; nothing here can fail. The
//! engine does not own real timers. `schedule()` describes the timers the
//! current stage owns and the runtime is expected to honor it.

use std::time::Duration;

use serde::{Serialize, Deserialize};
use tracing::{debug, info, trace};

use crate::core::fixed::{Fixed, DIRECTION_CENTER, METER_MIN};
use crate::core::hash::{StateHash, compute_state_hash};
use crate::core::rng::DeterministicRng;
use crate::game::events::EngineEvent;
use crate::game::input::EngineInput;
use crate::game::meter::{Meter, MeterConfig};
use crate::game::resolve::{ResolutionConfig, ShotParams, ShotResult, resolve_shot};
use crate::game::state::{EngineSnapshot, ShotPhase, ShotRecord};
use crate::SHOTS_PER_GAME;

// =============================================================================
// CONFIG
// =============================================================================

/// Delays owned by the shooting phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShootingConfig {
    /// From entering Shooting until the ball leaves the spot (ms).
    pub ball_delay_ms: u64,
    /// From entering Shooting until the outcome is revealed (ms).
    pub resolve_delay_ms: u64,
}

impl Default for ShootingConfig {
    fn default() -> Self {
        Self {
            ball_delay_ms: 100,
            resolve_delay_ms: 1000,
        }
    }
}

/// Configuration for one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShotConfig {
    /// Shots per game.
    pub shots_per_game: u8,
    /// Power meter sweep.
    pub power_meter: MeterConfig,
    /// Direction meter sweep.
    pub direction_meter: MeterConfig,
    /// Shooting phase delays.
    pub shooting: ShootingConfig,
    /// Resolution policy numbers.
    pub resolution: ResolutionConfig,
}

impl Default for ShotConfig {
    fn default() -> Self {
        Self {
            shots_per_game: SHOTS_PER_GAME,
            power_meter: MeterConfig::power(),
            direction_meter: MeterConfig::direction(),
            shooting: ShootingConfig::default(),
            resolution: ResolutionConfig::default(),
        }
    }
}

// =============================================================================
// SCHEDULE
// =============================================================================

/// Timers owned by the current stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Schedule {
    /// No timers; only a trigger can move the engine.
    Idle,
    /// Periodic `Tick` every `period`.
    Oscillate {
        /// Tick interval.
        period: Duration,
    },
    /// One-shot `LaunchBall` and `Settle`, both measured from stage entry.
    Shooting {
        /// Delay before `LaunchBall`.
        ball_delay: Duration,
        /// Delay before `Settle`.
        resolve_delay: Duration,
    },
}

// =============================================================================
// TRIGGER RESULT
// =============================================================================

/// Result of a trigger.
#[derive(Debug, Default)]
pub struct TriggerResult {
    /// Whether the trigger changed anything.
    pub accepted: bool,
    /// Events generated by this trigger
    pub events: Vec<EngineEvent>,
    /// Final score, present only on the trigger that ends the game.
    pub game_over: Option<u8>,
}

// =============================================================================
// ENGINE
// =============================================================================

/// Internal stage. Each variant owns the resources its phase needs, so
/// leaving a stage drops its meter or pending outcome with it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Stage {
    Ready,
    Power { meter: Meter },
    Direction { meter: Meter },
    Shooting { pending: ShotResult, ball_launched: bool },
    Result,
    Finished,
}

impl Stage {
    fn phase(self) -> ShotPhase {
        match self {
            Stage::Ready => ShotPhase::Ready,
            Stage::Power { .. } => ShotPhase::Power,
            Stage::Direction { .. } => ShotPhase::Direction,
            Stage::Shooting { .. } => ShotPhase::Shooting,
            Stage::Result | Stage::Finished => ShotPhase::Result,
        }
    }

    fn tag(self) -> u8 {
        match self {
            Stage::Ready => 0,
            Stage::Power { .. } => 1,
            Stage::Direction { .. } => 2,
            Stage::Shooting { .. } => 3,
            Stage::Result => 4,
            Stage::Finished => 5,
        }
    }
}

/// One game of penalty kicks.
#[derive(Clone, Debug)]
pub struct ShotEngine {
    config: ShotConfig,
    seed: u64,
    rng: DeterministicRng,
    stage: Stage,
    /// Incremented on every stage change; timers key on it.
    epoch: u32,
    power: u8,
    direction: u8,
    shots_remaining: u8,
    score: u8,
    last_result: Option<ShotResult>,
    goalkeeper_position: Fixed,
    step: u32,
    history: Vec<ShotRecord>,
    events: Vec<EngineEvent>,
}

impl ShotEngine {
    /// Start a new game.
    ///
    /// A game with no shots starts finished.
    pub fn new(config: ShotConfig, seed: u64) -> Self {
        let shots_remaining = config.shots_per_game;
        let stage = if shots_remaining == 0 { Stage::Finished } else { Stage::Ready };
        Self {
            config,
            seed,
            rng: DeterministicRng::new(seed),
            stage,
            epoch: 0,
            power: METER_MIN,
            direction: DIRECTION_CENTER,
            shots_remaining,
            score: 0,
            last_result: None,
            goalkeeper_position: crate::core::fixed::from_meter(DIRECTION_CENTER),
            step: 0,
            history: Vec::with_capacity(shots_remaining as usize),
            events: Vec::new(),
        }
    }

    // -------------------------------------------------------------------------
    // Inputs
    // -------------------------------------------------------------------------

    /// Apply any input. Returns whether it was accepted.
    pub fn apply(&mut self, input: EngineInput) -> bool {
        match input {
            EngineInput::Trigger => self.trigger().accepted,
            EngineInput::Tick => self.tick(),
            EngineInput::LaunchBall => self.launch_ball(),
            EngineInput::Settle => self.settle(),
        }
    }

    /// The player's action.
    ///
    /// Ignored while Shooting and after the game has finished.
    pub fn trigger(&mut self) -> TriggerResult {
        let mut result = TriggerResult::default();

        match self.stage {
            Stage::Ready => self.start_kick(),
            Stage::Power { meter } => self.lock_power(meter.value()),
            Stage::Direction { meter } => self.lock_direction(meter.value()),
            Stage::Result => {
                if let Some(score) = self.acknowledge_result() {
                    result.game_over = Some(score);
                }
            }
            Stage::Shooting { .. } | Stage::Finished => {
                trace!(phase = self.phase().name(), finished = self.is_finished(), "trigger ignored");
                return result;
            }
        }

        result.accepted = true;
        result.events = self.take_events();
        result
    }

    /// Advance the active meter by one step.
    ///
    /// Ignored (returns false) in every phase without a meter.
    pub fn tick(&mut self) -> bool {
        match &mut self.stage {
            Stage::Power { meter } => {
                self.power = meter.advance();
            }
            Stage::Direction { meter } => {
                self.direction = meter.advance();
            }
            _ => {
                trace!(phase = self.stage.phase().name(), "tick without meter ignored");
                return false;
            }
        }

        self.step += 1;

        #[cfg(feature = "debug-tracing")]
        trace!(step = self.step, power = self.power, direction = self.direction, "meter tick");

        true
    }

    /// Early shooting timer: the ball leaves the spot.
    pub fn launch_ball(&mut self) -> bool {
        match &mut self.stage {
            Stage::Shooting { ball_launched, .. } if !*ball_launched => {
                *ball_launched = true;
            }
            _ => return false,
        }

        self.step += 1;
        let event = EngineEvent::ball_launched(self.step, self.current_shot());
        self.events.push(event);
        true
    }

    /// Late shooting timer: reveal the outcome and enter Result.
    pub fn settle(&mut self) -> bool {
        let Stage::Shooting { pending, .. } = self.stage else {
            return false;
        };

        self.step += 1;
        let shot = self.current_shot();

        self.last_result = Some(pending);
        if pending.is_goal() {
            self.score += 1;
        }

        self.history.push(ShotRecord {
            shot,
            power: self.power,
            direction: self.direction,
            keeper: self.goalkeeper_position,
            result: pending,
        });

        self.enter(Stage::Result);
        self.events.push(EngineEvent::shot_resolved(self.step, shot, pending, self.score));

        debug!(shot, result = ?pending, score = self.score, "shot resolved");
        true
    }

    // -------------------------------------------------------------------------
    // Transitions
    // -------------------------------------------------------------------------

    fn start_kick(&mut self) {
        self.step += 1;
        self.power = METER_MIN;
        self.enter(Stage::Power {
            meter: Meter::start(METER_MIN, self.config.power_meter.step),
        });

        let shot = self.current_shot();
        self.events.push(EngineEvent::shot_started(self.step, shot));
        debug!(shot, "kick started");
    }

    fn lock_power(&mut self, power: u8) {
        self.step += 1;
        self.power = power;
        self.direction = DIRECTION_CENTER;
        self.enter(Stage::Direction {
            meter: Meter::start(DIRECTION_CENTER, self.config.direction_meter.step),
        });

        self.events.push(EngineEvent::power_locked(self.step, self.current_shot(), power));
        debug!(power, "power locked");
    }

    /// Capture direction, place the keeper and decide the outcome.
    ///
    /// Draw order is fixed: keeper position first, then the on-target draw.
    fn lock_direction(&mut self, direction: u8) {
        self.step += 1;
        self.direction = direction;

        let keeper = self.rng.next_percent();
        let on_target_draw = self.rng.next_unit();
        self.goalkeeper_position = keeper;

        let params = ShotParams {
            power: self.power,
            direction,
            keeper,
        };
        let pending = resolve_shot(&self.config.resolution, &params, on_target_draw);

        self.enter(Stage::Shooting {
            pending,
            ball_launched: false,
        });

        self.events.push(EngineEvent::direction_locked(
            self.step,
            self.current_shot(),
            direction,
            keeper,
        ));
        debug!(power = self.power, direction, keeper, "shot taken");
    }

    /// Returns the final score when this acknowledgement ends the game.
    fn acknowledge_result(&mut self) -> Option<u8> {
        self.step += 1;
        let shot = self.current_shot();
        self.shots_remaining = self.shots_remaining.saturating_sub(1);

        if self.shots_remaining == 0 {
            self.enter(Stage::Finished);
            self.events.push(EngineEvent::game_ended(self.step, shot, self.score));
            info!(score = self.score, shots = self.history.len(), "game over");
            return Some(self.score);
        }

        self.last_result = None;
        self.enter(Stage::Ready);
        self.events.push(EngineEvent::next_shot(self.step, shot, self.shots_remaining));
        None
    }

    fn enter(&mut self, stage: Stage) {
        self.stage = stage;
        self.epoch = self.epoch.wrapping_add(1);
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    /// Timers the current stage owns.
    pub fn schedule(&self) -> Schedule {
        match self.stage {
            Stage::Power { .. } => Schedule::Oscillate {
                period: self.config.power_meter.period(),
            },
            Stage::Direction { .. } => Schedule::Oscillate {
                period: self.config.direction_meter.period(),
            },
            Stage::Shooting { .. } => Schedule::Shooting {
                ball_delay: Duration::from_millis(self.config.shooting.ball_delay_ms),
                resolve_delay: Duration::from_millis(self.config.shooting.resolve_delay_ms),
            },
            Stage::Ready | Stage::Result | Stage::Finished => Schedule::Idle,
        }
    }

    /// Stage counter; changes exactly when the stage (and its timers) change.
    #[inline]
    pub fn epoch(&self) -> u32 {
        self.epoch
    }

    /// Public phase. A finished game stays in `Result`.
    #[inline]
    pub fn phase(&self) -> ShotPhase {
        self.stage.phase()
    }

    /// Current power reading.
    #[inline]
    pub fn power(&self) -> u8 {
        self.power
    }

    /// Current direction reading.
    #[inline]
    pub fn direction(&self) -> u8 {
        self.direction
    }

    /// Shots not yet completed.
    #[inline]
    pub fn shots_remaining(&self) -> u8 {
        self.shots_remaining
    }

    /// Goals so far.
    #[inline]
    pub fn score(&self) -> u8 {
        self.score
    }

    /// Outcome of the most recently resolved shot.
    #[inline]
    pub fn last_result(&self) -> Option<ShotResult> {
        self.last_result
    }

    /// Keeper position for the current shot (Q16.16).
    #[inline]
    pub fn goalkeeper_position(&self) -> Fixed {
        self.goalkeeper_position
    }

    /// Seed the engine was created with.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Accepted-input counter.
    #[inline]
    pub fn step(&self) -> u32 {
        self.step
    }

    /// Configuration in use.
    pub fn config(&self) -> &ShotConfig {
        &self.config
    }

    /// Game is over; every input is ignored.
    #[inline]
    pub fn is_finished(&self) -> bool {
        matches!(self.stage, Stage::Finished)
    }

    /// Final score once the game is over.
    pub fn final_score(&self) -> Option<u8> {
        self.is_finished().then_some(self.score)
    }

    /// Resolved shots in order.
    pub fn history(&self) -> &[ShotRecord] {
        &self.history
    }

    /// Shot number in progress (1-based).
    fn current_shot(&self) -> u8 {
        self.config.shots_per_game - self.shots_remaining + 1
    }

    /// Read-only view for displays.
    pub fn snapshot(&self) -> EngineSnapshot {
        let ball_launched = match self.stage {
            Stage::Shooting { ball_launched, .. } => ball_launched,
            Stage::Result | Stage::Finished => true,
            _ => false,
        };

        EngineSnapshot {
            phase: self.phase(),
            power: self.power,
            direction: self.direction,
            shots_remaining: self.shots_remaining,
            score: self.score,
            last_result: self.last_result,
            goalkeeper_position: self.goalkeeper_position,
            ball_launched,
            finished: self.is_finished(),
            step: self.step,
        }
    }

    /// Drain events generated since the last call.
    pub fn take_events(&mut self) -> Vec<EngineEvent> {
        std::mem::take(&mut self.events)
    }

    /// Hash of the full engine state, including RNG position.
    pub fn compute_hash(&self) -> StateHash {
        compute_state_hash(self.step, self.seed, |hasher| {
            hasher.update_u8(self.stage.tag());
            if let Stage::Power { meter } | Stage::Direction { meter } = self.stage {
                hasher.update_u8(meter.value());
                hasher.update_bool(meter.is_rising());
            }
            if let Stage::Shooting { pending, ball_launched } = self.stage {
                hasher.update_u8(pending as u8);
                hasher.update_bool(ball_launched);
            }
            hasher.update_u8(self.power);
            hasher.update_u8(self.direction);
            hasher.update_u8(self.shots_remaining);
            hasher.update_u8(self.score);
            hasher.update_u8(self.last_result.map_or(0, |r| r as u8));
            hasher.update_fixed(self.goalkeeper_position);
            let [s0, s1] = self.rng.state();
            hasher.update_u64(s0);
            hasher.update_u64(s1);
        })
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::events::EngineEventData;

    fn engine() -> ShotEngine {
        ShotEngine::new(ShotConfig::default(), 12345)
    }

    /// Drive one shot from Ready to Result with `power_ticks` and
    /// `direction_ticks` meter steps.
    fn take_shot(engine: &mut ShotEngine, power_ticks: u32, direction_ticks: u32) -> ShotResult {
        assert!(engine.trigger().accepted);
        for _ in 0..power_ticks {
            engine.tick();
        }
        assert!(engine.trigger().accepted);
        for _ in 0..direction_ticks {
            engine.tick();
        }
        assert!(engine.trigger().accepted);
        assert!(engine.launch_ball());
        assert!(engine.settle());
        engine.last_result().unwrap()
    }

    #[test]
    fn test_initial_state() {
        let engine = engine();
        assert_eq!(engine.phase(), ShotPhase::Ready);
        assert_eq!(engine.shots_remaining(), 5);
        assert_eq!(engine.score(), 0);
        assert_eq!(engine.last_result(), None);
        assert_eq!(engine.schedule(), Schedule::Idle);
        assert!(!engine.is_finished());
    }

    #[test]
    fn test_trigger_in_ready_starts_power_at_zero() {
        let mut engine = engine();
        let result = engine.trigger();

        assert!(result.accepted);
        assert_eq!(engine.phase(), ShotPhase::Power);
        assert_eq!(engine.power(), 0);
        assert_eq!(
            engine.schedule(),
            Schedule::Oscillate { period: Duration::from_millis(20) }
        );
        assert_eq!(result.events[0].data, EngineEventData::ShotStarted { shot: 1 });
    }

    #[test]
    fn test_power_locks_and_direction_starts_centered() {
        let mut engine = engine();
        engine.trigger();
        for _ in 0..30 {
            engine.tick();
        }
        assert_eq!(engine.power(), 60);

        engine.trigger();
        assert_eq!(engine.phase(), ShotPhase::Direction);
        assert_eq!(engine.power(), 60);
        assert_eq!(engine.direction(), 50);
        assert_eq!(
            engine.schedule(),
            Schedule::Oscillate { period: Duration::from_millis(25) }
        );

        // Power is frozen while direction sweeps
        for _ in 0..10 {
            engine.tick();
        }
        assert_eq!(engine.power(), 60);
        assert_eq!(engine.direction(), 80);
    }

    #[test]
    fn test_direction_trigger_decides_outcome_once() {
        let mut engine = engine();
        engine.trigger();
        engine.trigger();
        let result = engine.trigger();

        assert!(result.accepted);
        assert_eq!(engine.phase(), ShotPhase::Shooting);
        assert!(matches!(engine.schedule(), Schedule::Shooting { .. }));
        assert!(matches!(
            result.events[0].data,
            EngineEventData::DirectionLocked { direction: 50, .. }
        ));

        // Outcome not visible until settled
        assert_eq!(engine.last_result(), None);

        let hash_before = engine.compute_hash();
        let ignored = engine.trigger();
        assert!(!ignored.accepted);
        assert!(ignored.events.is_empty());
        assert_eq!(engine.compute_hash(), hash_before);

        assert!(engine.launch_ball());
        assert!(!engine.launch_ball());
        assert!(engine.settle());
        assert!(!engine.settle());

        assert_eq!(engine.phase(), ShotPhase::Result);
        assert!(engine.last_result().is_some());
        assert_eq!(engine.history().len(), 1);
    }

    #[test]
    fn test_ticks_outside_meters_ignored() {
        let mut engine = engine();

        // Ready
        assert!(!engine.tick());
        assert_eq!(engine.power(), 0);
        assert_eq!(engine.direction(), 50);

        engine.trigger();
        engine.tick();
        engine.trigger();
        engine.tick();
        engine.trigger();

        // Shooting
        let (power, direction) = (engine.power(), engine.direction());
        for _ in 0..10 {
            assert!(!engine.tick());
        }
        assert_eq!((engine.power(), engine.direction()), (power, direction));

        engine.settle();

        // Result
        assert!(!engine.tick());
        assert_eq!((engine.power(), engine.direction()), (power, direction));
    }

    #[test]
    fn test_timer_inputs_outside_shooting_ignored() {
        let mut engine = engine();
        assert!(!engine.launch_ball());
        assert!(!engine.settle());

        engine.trigger();
        assert!(!engine.settle());
        assert_eq!(engine.phase(), ShotPhase::Power);
    }

    #[test]
    fn test_settle_without_launch() {
        let mut engine = engine();
        engine.trigger();
        engine.trigger();
        engine.trigger();

        assert!(engine.settle());
        assert!(engine.snapshot().ball_launched);
        assert!(!engine.launch_ball());
    }

    #[test]
    fn test_full_game_reports_score_once() {
        let mut engine = engine();
        let mut goals = 0;
        let mut game_over_count = 0;

        for shot in 0..5u8 {
            assert_eq!(engine.shots_remaining(), 5 - shot);
            if take_shot(&mut engine, 20 + shot as u32 * 7, shot as u32 * 5).is_goal() {
                goals += 1;
            }
            assert_eq!(engine.score(), goals);

            let result = engine.trigger();
            assert!(result.accepted);
            assert_eq!(engine.shots_remaining(), 4 - shot);

            if let Some(score) = result.game_over {
                assert_eq!(score, goals);
                game_over_count += 1;
            }
        }

        assert_eq!(game_over_count, 1);
        assert!(engine.is_finished());
        assert_eq!(engine.final_score(), Some(goals));
        assert_eq!(engine.history().len(), 5);

        // Terminal: nothing moves
        let hash = engine.compute_hash();
        assert!(!engine.trigger().accepted);
        assert!(!engine.tick());
        assert!(!engine.settle());
        assert_eq!(engine.compute_hash(), hash);
        assert_eq!(engine.schedule(), Schedule::Idle);
    }

    #[test]
    fn test_last_result_cleared_between_shots() {
        let mut engine = engine();
        take_shot(&mut engine, 10, 10);
        assert!(engine.last_result().is_some());

        engine.trigger();
        assert_eq!(engine.phase(), ShotPhase::Ready);
        assert_eq!(engine.last_result(), None);
    }

    #[test]
    fn test_finished_keeps_last_result_visible() {
        let mut engine = ShotEngine::new(
            ShotConfig { shots_per_game: 1, ..Default::default() },
            7,
        );
        let result = take_shot(&mut engine, 5, 5);
        let end = engine.trigger();

        assert_eq!(end.game_over, Some(engine.score()));
        assert_eq!(engine.phase(), ShotPhase::Result);
        assert_eq!(engine.last_result(), Some(result));
        assert!(engine.snapshot().finished);
        assert!(end.events.iter().any(|e| e.is_game_end()));
    }

    #[test]
    fn test_epoch_changes_with_stage_only() {
        let mut engine = engine();
        let e0 = engine.epoch();

        engine.trigger();
        let e1 = engine.epoch();
        assert_ne!(e0, e1);

        engine.tick();
        engine.tick();
        assert_eq!(engine.epoch(), e1);

        engine.trigger();
        engine.trigger();
        let shooting = engine.epoch();
        engine.launch_ball();
        assert_eq!(engine.epoch(), shooting);
        engine.settle();
        assert_ne!(engine.epoch(), shooting);
    }

    #[test]
    fn test_same_seed_same_game() {
        let mut a = engine();
        let mut b = engine();

        for shot in 0..5 {
            let ra = take_shot(&mut a, 17 * shot, 3 * shot);
            let rb = take_shot(&mut b, 17 * shot, 3 * shot);
            assert_eq!(ra, rb);
            assert_eq!(a.goalkeeper_position(), b.goalkeeper_position());
            a.trigger();
            b.trigger();
        }

        assert_eq!(a.compute_hash(), b.compute_hash());
        assert_eq!(a.history(), b.history());
    }

    #[test]
    fn test_keeper_in_range() {
        let mut engine = ShotEngine::new(ShotConfig::default(), 999);
        for _ in 0..5 {
            take_shot(&mut engine, 3, 3);
            let keeper = engine.goalkeeper_position();
            assert!((0..crate::core::fixed::GOAL_WIDTH).contains(&keeper));
            engine.trigger();
        }
    }

    #[test]
    fn test_apply_dispatches() {
        let mut engine = engine();
        assert!(!engine.apply(EngineInput::Tick));
        assert!(engine.apply(EngineInput::Trigger));
        assert!(engine.apply(EngineInput::Tick));
        assert_eq!(engine.power(), 2);
        assert!(!engine.apply(EngineInput::Settle));
    }

    #[test]
    fn test_score_never_exceeds_shots_taken() {
        for seed in 0..50u64 {
            let mut engine = ShotEngine::new(ShotConfig::default(), seed);
            for shot in 0..5u8 {
                take_shot(&mut engine, (seed as u32 * 13 + shot as u32) % 60, seed as u32 % 40);
                assert!(engine.score() <= shot + 1);
                engine.trigger();
            }
            assert!(engine.score() <= 5);
        }
    }

    #[test]
    fn test_zero_shots_starts_finished() {
        let mut engine = ShotEngine::new(ShotConfig { shots_per_game: 0, ..Default::default() }, 1);
        assert!(engine.is_finished());
        assert_eq!(engine.final_score(), Some(0));
        assert_eq!(engine.schedule(), Schedule::Idle);

        let result = engine.trigger();
        assert!(!result.accepted);
        assert_eq!(result.game_over, None);
        assert!(engine.snapshot().finished);
        assert_eq!(engine.shots_remaining(), 0);
    }
}
