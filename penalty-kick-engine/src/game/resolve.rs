//! Shot Resolution
//!
//! Turns a captured (power, direction) pair and a sampled keeper position
//! into an outcome. Resolution is pure: the caller supplies the random
//! on-target draw, so identical inputs always give identical results.
//!
//! ```text
//! power ──► accuracy tier ──► draw < accuracy? ──no──► Missed
//!                                   │ yes
//!                                   ▼
//! keeper ± reach (± corner, ± power) ──► left < direction < right? ──► Saved
//!                                                         │ otherwise
//!                                                         ▼
//!                                                        Goal
//! ```
//!
//! Corner and power bonuses are subtracted from the left bound and added to
//! the right bound, which widens the keeper's save zone for exactly the
//! shots that look hardest to stop. That arithmetic is kept as-is.

use serde::{Serialize, Deserialize};

use crate::core::fixed::{
    Fixed, from_int, from_meter, percent_to_fixed,
};

/// Outcome of one resolved shot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum ShotResult {
    /// Ball beat the keeper.
    Goal = 1,
    /// Keeper reached it.
    Saved = 2,
    /// Off target; the keeper never came into it.
    Missed = 3,
}

impl ShotResult {
    /// Whether this outcome adds to the score.
    #[inline]
    pub fn is_goal(self) -> bool {
        matches!(self, ShotResult::Goal)
    }
}

/// Tunable numbers behind resolution.
///
/// Percentages and distances are on the 0-100 goal scale.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolutionConfig {
    /// Power strictly above this uses `overpowered_accuracy`.
    pub overpowered_threshold: u8,
    /// Power strictly above this (and not overpowered) uses `strong_accuracy`.
    pub strong_threshold: u8,
    /// On-target chance (percent) for overpowered shots.
    pub overpowered_accuracy: u8,
    /// On-target chance (percent) for strong shots.
    pub strong_accuracy: u8,
    /// On-target chance (percent) for everything else.
    pub base_accuracy: u8,
    /// Keeper reach on each side of its position.
    pub keeper_reach: u8,
    /// Directions strictly below this count as the left corner.
    pub left_corner: u8,
    /// Directions strictly above this count as the right corner.
    pub right_corner: u8,
    /// Reach adjustment applied to both bounds for corner shots.
    pub corner_bonus: u8,
    /// Power strictly above this applies `power_bonus`.
    pub power_bonus_threshold: u8,
    /// Reach adjustment applied to both bounds for powerful shots.
    pub power_bonus: u8,
}

impl Default for ResolutionConfig {
    fn default() -> Self {
        Self {
            overpowered_threshold: 90,
            strong_threshold: 70,
            overpowered_accuracy: 60,
            strong_accuracy: 85,
            base_accuracy: 95,
            keeper_reach: 25,
            left_corner: 20,
            right_corner: 80,
            corner_bonus: 15,
            power_bonus_threshold: 70,
            power_bonus: 10,
        }
    }
}

impl ResolutionConfig {
    /// On-target probability for a given power, as a fraction of `FIXED_ONE`.
    pub fn accuracy_for_power(&self, power: u8) -> Fixed {
        let percent = if power > self.overpowered_threshold {
            self.overpowered_accuracy
        } else if power > self.strong_threshold {
            self.strong_accuracy
        } else {
            self.base_accuracy
        };
        percent_to_fixed(percent)
    }

    /// Whether `direction` is aimed into a corner.
    #[inline]
    pub fn is_corner(&self, direction: u8) -> bool {
        direction < self.left_corner || direction > self.right_corner
    }

    /// Keeper's effective reach for this shot.
    pub fn reach_interval(&self, keeper: Fixed, power: u8, direction: u8) -> ReachInterval {
        let reach = from_int(self.keeper_reach as i32);
        let corner = if self.is_corner(direction) {
            from_int(self.corner_bonus as i32)
        } else {
            0
        };
        let power_adj = if power > self.power_bonus_threshold {
            from_int(self.power_bonus as i32)
        } else {
            0
        };

        ReachInterval {
            left: keeper - reach - corner - power_adj,
            right: keeper + reach + corner + power_adj,
        }
    }
}

/// Range of directions the keeper can intercept, in Q16.16.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReachInterval {
    /// Left bound (exclusive).
    pub left: Fixed,
    /// Right bound (exclusive).
    pub right: Fixed,
}

impl ReachInterval {
    /// Strict containment: a shot exactly on a bound beats the keeper.
    #[inline]
    pub fn contains(&self, direction: Fixed) -> bool {
        self.left < direction && direction < self.right
    }
}

/// Everything resolution needs about one shot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShotParams {
    /// Captured power (0-100).
    pub power: u8,
    /// Captured direction (0 = far left, 50 = center, 100 = far right).
    pub direction: u8,
    /// Keeper position on the 0-100 scale, Q16.16.
    pub keeper: Fixed,
}

/// Resolve a shot given the on-target draw (uniform in `[0, FIXED_ONE)`).
///
/// The shot is on target when `on_target_draw < accuracy`. A missed shot
/// never consults the keeper.
pub fn resolve_shot(config: &ResolutionConfig, shot: &ShotParams, on_target_draw: Fixed) -> ShotResult {
    let accuracy = config.accuracy_for_power(shot.power);
    if on_target_draw >= accuracy {
        return ShotResult::Missed;
    }

    let reach = config.reach_interval(shot.keeper, shot.power, shot.direction);
    if reach.contains(from_meter(shot.direction)) {
        ShotResult::Saved
    } else {
        ShotResult::Goal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fixed::{to_fixed, FIXED_ONE};

    fn shot(power: u8, direction: u8, keeper: f64) -> ShotParams {
        ShotParams { power, direction, keeper: to_fixed(keeper) }
    }

    #[test]
    fn test_accuracy_tiers() {
        let config = ResolutionConfig::default();

        assert_eq!(config.accuracy_for_power(0), to_fixed(0.95));
        assert_eq!(config.accuracy_for_power(70), to_fixed(0.95));
        assert_eq!(config.accuracy_for_power(71), to_fixed(0.85));
        assert_eq!(config.accuracy_for_power(90), to_fixed(0.85));
        assert_eq!(config.accuracy_for_power(91), to_fixed(0.6));
        assert_eq!(config.accuracy_for_power(100), to_fixed(0.6));
    }

    #[test]
    fn test_center_shot_saved() {
        // power 50, direction 50, keeper 50, draw 0.5 -> reach [25, 75] -> Saved
        let config = ResolutionConfig::default();
        let params = shot(50, 50, 50.0);

        let reach = config.reach_interval(params.keeper, params.power, params.direction);
        assert_eq!(reach.left, to_fixed(25.0));
        assert_eq!(reach.right, to_fixed(75.0));

        assert_eq!(resolve_shot(&config, &params, to_fixed(0.5)), ShotResult::Saved);
    }

    #[test]
    fn test_corner_power_shot_scores() {
        // power 95, direction 10, keeper 80 -> reach [30, 130] -> Goal
        let config = ResolutionConfig::default();
        let params = shot(95, 10, 80.0);

        let reach = config.reach_interval(params.keeper, params.power, params.direction);
        assert_eq!(reach.left, to_fixed(30.0));
        assert_eq!(reach.right, to_fixed(130.0));

        assert_eq!(resolve_shot(&config, &params, to_fixed(0.1)), ShotResult::Goal);
    }

    #[test]
    fn test_bonuses_widen_reach() {
        let config = ResolutionConfig::default();
        let keeper = to_fixed(50.0);

        let plain = config.reach_interval(keeper, 50, 50);
        let corner = config.reach_interval(keeper, 50, 90);
        let both = config.reach_interval(keeper, 80, 90);

        assert!(corner.left < plain.left && corner.right > plain.right);
        assert_eq!(both.right - both.left, to_fixed(100.0));
    }

    #[test]
    fn test_corner_thresholds_are_strict() {
        let config = ResolutionConfig::default();
        assert!(config.is_corner(19));
        assert!(!config.is_corner(20));
        assert!(!config.is_corner(80));
        assert!(config.is_corner(81));
    }

    #[test]
    fn test_missed_ignores_keeper() {
        let config = ResolutionConfig::default();

        // Draw above 0.6 misses an overpowered shot wherever the keeper is
        for keeper in [0.0, 10.0, 50.0, 99.0] {
            let params = shot(95, 10, keeper);
            assert_eq!(resolve_shot(&config, &params, to_fixed(0.7)), ShotResult::Missed);
        }
    }

    #[test]
    fn test_draw_equal_to_accuracy_misses() {
        let config = ResolutionConfig::default();
        let params = shot(50, 0, 99.0);
        let accuracy = config.accuracy_for_power(50);

        assert_eq!(resolve_shot(&config, &params, accuracy), ShotResult::Missed);
        assert_eq!(resolve_shot(&config, &params, accuracy - 1), ShotResult::Goal);
        assert_eq!(resolve_shot(&config, &params, FIXED_ONE - 1), ShotResult::Missed);
    }

    #[test]
    fn test_shot_on_reach_bound_scores() {
        // keeper 25 -> reach (0, 50); direction 50 sits on the bound
        let config = ResolutionConfig::default();
        let params = shot(50, 50, 25.0);
        assert_eq!(resolve_shot(&config, &params, 0), ShotResult::Goal);

        let params = shot(50, 49, 25.0);
        assert_eq!(resolve_shot(&config, &params, 0), ShotResult::Saved);
    }
}
