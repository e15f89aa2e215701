//! Dot kinematics
//!
//! Dot `i` completes `i + 10` laps per 60-second window. Velocities are
//! integer multiples of one lap per window, so every dot returns to the
//! start angle together once per window.

use std::f32::consts::{PI, TAU};

use glam::Vec2;

use crate::consts::{BASE_LAPS, CYCLE_SECS};
use crate::{polar_to_cartesian, wrap_angle};

/// Angular velocity of arc `index` in radians per second
#[inline]
pub fn angular_velocity(index: usize) -> f32 {
    TAU * (index as f32 + BASE_LAPS) / CYCLE_SECS
}

/// Dot angle at `elapsed_secs`, reflected into the lower half-plane [π, 2π]
///
/// The raw angle π + elapsed·velocity is wrapped into [0, 2π); a value in
/// the upper half-plane mirrors back across the baseline so the dot always
/// sits on the visible half-arc.
pub fn dot_angle(elapsed_secs: f32, velocity: f32) -> f32 {
    let wrapped = wrap_angle(PI + elapsed_secs * velocity);
    if wrapped >= PI { wrapped } else { TAU - wrapped }
}

/// Dot position on an arc of the given radius around `center`
#[inline]
pub fn dot_position(center: Vec2, radius: f32, angle: f32) -> Vec2 {
    center + polar_to_cartesian(radius, angle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::ARC_COUNT;
    use proptest::prelude::*;

    #[test]
    fn test_velocity_formula() {
        // Innermost dot: 10 laps per 60 s
        assert!((angular_velocity(0) - TAU / 6.0).abs() < 1e-5);
        // One extra lap per window per index step
        for i in 1..ARC_COUNT {
            let step = angular_velocity(i) - angular_velocity(i - 1);
            assert!((step - TAU / 60.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_all_dots_start_at_reference_angle() {
        for i in 0..ARC_COUNT {
            let angle = dot_angle(0.0, angular_velocity(i));
            assert!((angle - PI).abs() < 1e-6, "arc {i} starts off-reference");
        }
    }

    #[test]
    fn test_dots_resync_each_cycle() {
        for cycle in 1..=3u32 {
            let t = cycle as f32 * CYCLE_SECS;
            for i in 0..ARC_COUNT {
                let angle = dot_angle(t, angular_velocity(i));
                assert!(
                    (angle - PI).abs() < 1e-3,
                    "arc {i} off by {} at t={t}",
                    (angle - PI).abs()
                );
            }
        }
    }

    #[test]
    fn test_reflection_mirrors_upper_half() {
        // The 10-lap dot sits a quarter-lap past the start angle at t=16.5s,
        // mirrored down to 3π/2
        let angle = dot_angle(16.5, angular_velocity(0));
        assert!((angle - 1.5 * PI).abs() < 1e-4);
    }

    proptest! {
        #[test]
        fn dot_stays_in_lower_half_plane(
            t in 0.0f32..100_000.0,
            index in 0usize..ARC_COUNT,
        ) {
            let angle = dot_angle(t, angular_velocity(index));
            prop_assert!((PI..=TAU).contains(&angle), "angle {angle} out of range");
        }
    }
}
