//! Oscillating Meters
//!
//! Power and direction are chosen by stopping a value that sweeps back and
//! forth across [0, 100]. Each sweep is a triangle wave advanced one step per
//! tick: the value climbs to a bound, reverses, and runs to the other bound.

use std::time::Duration;

use serde::{Serialize, Deserialize};

use crate::core::fixed::{METER_MAX, METER_MIN, POWER_STEP, DIRECTION_STEP};

/// Per-meter timing and step size.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeterConfig {
    /// Units moved per tick.
    pub step: u8,
    /// Nominal interval between ticks (milliseconds).
    pub period_ms: u64,
}

impl MeterConfig {
    /// Power meter: ±2 per 20ms tick.
    pub const fn power() -> Self {
        Self { step: POWER_STEP, period_ms: 20 }
    }

    /// Direction meter: ±3 per 25ms tick.
    pub const fn direction() -> Self {
        Self { step: DIRECTION_STEP, period_ms: 25 }
    }

    /// Tick interval as a `Duration`.
    pub fn period(&self) -> Duration {
        Duration::from_millis(self.period_ms)
    }
}

/// A triangle-wave oscillator bounded to [0, 100].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meter {
    value: u8,
    step: u8,
    rising: bool,
}

impl Meter {
    /// Start a meter at `value`, moving upward.
    pub fn start(value: u8, step: u8) -> Self {
        Self {
            value: value.min(METER_MAX),
            step,
            rising: true,
        }
    }

    /// Current reading.
    #[inline]
    pub fn value(&self) -> u8 {
        self.value
    }

    /// Whether the next step moves upward.
    #[inline]
    pub fn is_rising(&self) -> bool {
        self.rising
    }

    /// Advance one tick and return the new reading.
    ///
    /// Reaching or passing a bound pins the value to that bound and reverses
    /// the sweep, so the bound itself is always shown for one tick.
    pub fn advance(&mut self) -> u8 {
        let step = self.step as i16;
        let next = if self.rising {
            self.value as i16 + step
        } else {
            self.value as i16 - step
        };

        if next >= METER_MAX as i16 {
            self.value = METER_MAX;
            self.rising = false;
        } else if next <= METER_MIN as i16 {
            self.value = METER_MIN;
            self.rising = true;
        } else {
            self.value = next as u8;
        }

        self.value
    }
}
