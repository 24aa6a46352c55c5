//! Q16.16 Fixed-Point Arithmetic
//!
//! Deterministic fixed-point math for shot resolution.
//! Keeper positions, reach intervals and probability draws use integer
//! arithmetic only - floats appear solely at the display boundary.
//!
//! ## Format: Q16.16
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Bit Layout: Q16.16 (32-bit signed integer)                 │
//! ├─────────────────────────────────────────────────────────────┤
//! │  [S][IIIIIIIIIIIIIIII][FFFFFFFFFFFFFFFF]                    │
//! │   │  └──── 16 bits ────┘└──── 16 bits ────┘                 │
//! │   └─ Sign bit                                               │
//! │                                                             │
//! │  Range: -32768.0 to +32767.99998 (approx)                   │
//! │  Precision: 1/65536 ≈ 0.000015 units                        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The goal mouth is a 0-100 scale, so reach intervals that overshoot it
//! (e.g. `[30, 130]`) stay well inside the representable range.

/// Q16.16 fixed-point number stored as i32.
/// 16 bits integer, 16 bits fractional.
pub type Fixed = i32;

/// Number of fractional bits (16)
pub const FIXED_SCALE: i32 = 16;

/// 1.0 in fixed-point (65536)
pub const FIXED_ONE: Fixed = 1 << FIXED_SCALE; // 65536

/// 0.5 in fixed-point (32768)
pub const FIXED_HALF: Fixed = FIXED_ONE >> 1; // 32768

// =============================================================================
// GAME CONSTANTS (All as integer literals - NO float conversion!)
// =============================================================================

/// Lower bound of both meters.
pub const METER_MIN: u8 = 0;

/// Upper bound of both meters.
pub const METER_MAX: u8 = 100;

/// Direction meter value for a shot straight down the middle.
pub const DIRECTION_CENTER: u8 = 50;

/// Power meter step per tick (±2 units every 20ms ≈ 100 units/sec).
pub const POWER_STEP: u8 = 2;

/// Direction meter step per tick (±3 units every 25ms ≈ 120 units/sec).
pub const DIRECTION_STEP: u8 = 3;

/// Width of the goal scale the keeper is placed on: 100.0 = 6553600
pub const GOAL_WIDTH: Fixed = 6553600;

// =============================================================================
// CORE OPERATIONS
// =============================================================================

/// Convert a compile-time float to fixed-point.
///
/// # Warning
/// Only use at compile-time or initialization. NEVER during resolution.
///
/// # Example
/// ```
/// use penalty_kick::core::fixed::{to_fixed, FIXED_ONE};
/// const MY_VALUE: i32 = to_fixed(2.5);
/// assert_eq!(MY_VALUE, FIXED_ONE * 2 + FIXED_ONE / 2);
/// ```
#[inline]
pub const fn to_fixed(f: f64) -> Fixed {
    (f * (FIXED_ONE as f64)) as Fixed
}

/// Convert fixed-point to float for display/rendering.
///
/// # Warning
/// Only use for visual output. NEVER use result in game logic.
#[inline]
pub fn to_float(f: Fixed) -> f32 {
    f as f32 / FIXED_ONE as f32
}

/// Convert an integer to fixed-point.
#[inline]
pub const fn from_int(i: i32) -> Fixed {
    i << FIXED_SCALE
}

/// Convert a meter reading (0-100) to fixed-point.
#[inline]
pub const fn from_meter(value: u8) -> Fixed {
    from_int(value as i32)
}

/// Convert a probability expressed in percent to a fraction of `FIXED_ONE`.
///
/// Truncates, so `percent_to_fixed(60) == to_fixed(0.6)`.
#[inline]
pub const fn percent_to_fixed(percent: u8) -> Fixed {
    ((percent as i64 * FIXED_ONE as i64) / 100) as Fixed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(FIXED_ONE, 65536);
        assert_eq!(FIXED_HALF, 32768);
        assert_eq!(GOAL_WIDTH, from_int(100));
    }

    #[test]
    fn test_percent_matches_float_conversion() {
        assert_eq!(percent_to_fixed(60), to_fixed(0.6));
        assert_eq!(percent_to_fixed(85), to_fixed(0.85));
        assert_eq!(percent_to_fixed(95), to_fixed(0.95));
        assert_eq!(percent_to_fixed(100), FIXED_ONE);
        assert_eq!(percent_to_fixed(0), 0);
    }

    #[test]
    fn test_meter_conversion() {
        assert_eq!(from_meter(DIRECTION_CENTER), to_fixed(50.0));
        assert_eq!(from_meter(METER_MAX), GOAL_WIDTH);
        assert_eq!(to_float(from_meter(37)), 37.0);
    }
}
