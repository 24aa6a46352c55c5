//! Phase Timers
//!
//! Turns an engine `Schedule` into real tokio timers. The timers belong to
//! the stage that asked for them: whenever the engine's stage epoch moves,
//! every running timer is dropped and the new stage's timers start fresh.
//! A stale tick can therefore never reach a later phase.

use std::future::pending;
use std::pin::Pin;

use tokio::time::{interval_at, sleep, Instant, Interval, MissedTickBehavior, Sleep};

use crate::game::engine::Schedule;
use crate::game::input::EngineInput;

enum Active {
    Idle,
    Oscillate(Interval),
    Shooting {
        ball: Option<Pin<Box<Sleep>>>,
        settle: Option<Pin<Box<Sleep>>>,
    },
}

/// Timers for the engine's current stage.
pub struct PhaseTimers {
    epoch: Option<u32>,
    active: Active,
}

impl PhaseTimers {
    /// No timers running.
    pub fn new() -> Self {
        Self {
            epoch: None,
            active: Active::Idle,
        }
    }

    /// Match the engine's current stage.
    ///
    /// A no-op while `epoch` is unchanged, so a meter keeps its cadence
    /// across unrelated commands and shooting delays stay measured from
    /// stage entry.
    pub fn sync(&mut self, epoch: u32, schedule: Schedule) {
        if self.epoch == Some(epoch) {
            return;
        }
        self.epoch = Some(epoch);

        let now = Instant::now();
        self.active = match schedule {
            Schedule::Idle => Active::Idle,
            Schedule::Oscillate { period } => {
                let mut ticks = interval_at(now + period, period);
                ticks.set_missed_tick_behavior(MissedTickBehavior::Skip);
                Active::Oscillate(ticks)
            }
            Schedule::Shooting { ball_delay, resolve_delay } => Active::Shooting {
                ball: Some(Box::pin(sleep(ball_delay))),
                settle: Some(Box::pin(sleep(resolve_delay))),
            },
        };
    }

    /// Whether any timer is armed.
    pub fn is_idle(&self) -> bool {
        match &self.active {
            Active::Idle => true,
            Active::Oscillate(_) => false,
            Active::Shooting { ball, settle } => ball.is_none() && settle.is_none(),
        }
    }

    /// Wait for the next timer input. Pending forever when idle.
    ///
    /// Cancel safe: dropping the future leaves every timer armed.
    pub async fn next(&mut self) -> EngineInput {
        match &mut self.active {
            Active::Idle => pending().await,
            Active::Oscillate(ticks) => {
                ticks.tick().await;
                EngineInput::Tick
            }
            Active::Shooting { ball, settle } => {
                let fired = match (ball.as_mut(), settle.as_mut()) {
                    (Some(b), Some(s)) => tokio::select! {
                        biased;
                        _ = b.as_mut() => EngineInput::LaunchBall,
                        _ = s.as_mut() => EngineInput::Settle,
                    },
                    (Some(b), None) => {
                        b.as_mut().await;
                        EngineInput::LaunchBall
                    }
                    (None, Some(s)) => {
                        s.as_mut().await;
                        EngineInput::Settle
                    }
                    (None, None) => pending().await,
                };

                // Disarm whichever one fired
                match fired {
                    EngineInput::LaunchBall => *ball = None,
                    _ => *settle = None,
                }
                fired
            }
        }
    }
}

impl Default for PhaseTimers {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test(start_paused = true)]
    async fn test_oscillate_ticks_on_period() {
        let mut timers = PhaseTimers::new();
        let start = Instant::now();
        timers.sync(1, Schedule::Oscillate { period: Duration::from_millis(20) });

        for n in 1..=3u32 {
            assert_eq!(timers.next().await, EngineInput::Tick);
            assert_eq!(start.elapsed(), Duration::from_millis(20) * n);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_shooting_fires_ball_then_settle() {
        let mut timers = PhaseTimers::new();
        let start = Instant::now();
        timers.sync(
            3,
            Schedule::Shooting {
                ball_delay: Duration::from_millis(100),
                resolve_delay: Duration::from_millis(1000),
            },
        );

        assert_eq!(timers.next().await, EngineInput::LaunchBall);
        assert_eq!(start.elapsed(), Duration::from_millis(100));

        // Same epoch: the settle timer keeps its first deadline
        timers.sync(3, Schedule::Shooting {
            ball_delay: Duration::from_millis(100),
            resolve_delay: Duration::from_millis(1000),
        });
        assert_eq!(timers.next().await, EngineInput::Settle);
        assert_eq!(start.elapsed(), Duration::from_millis(1000));
        assert!(timers.is_idle());
    }

    #[tokio::test(start_paused = true)]
    async fn test_new_epoch_drops_old_timers() {
        let mut timers = PhaseTimers::new();
        timers.sync(1, Schedule::Oscillate { period: Duration::from_millis(20) });
        timers.sync(2, Schedule::Idle);
        assert!(timers.is_idle());

        let fired = tokio::time::timeout(Duration::from_secs(5), timers.next()).await;
        assert!(fired.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_wait_keeps_deadline() {
        let mut timers = PhaseTimers::new();
        let start = Instant::now();
        timers.sync(
            7,
            Schedule::Shooting {
                ball_delay: Duration::from_millis(100),
                resolve_delay: Duration::from_millis(1000),
            },
        );

        // Abandon a wait halfway to the ball timer
        let early = tokio::time::timeout(Duration::from_millis(50), timers.next()).await;
        assert!(early.is_err());

        assert_eq!(timers.next().await, EngineInput::LaunchBall);
        assert_eq!(start.elapsed(), Duration::from_millis(100));
    }
}
