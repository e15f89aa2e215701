//! Baseline-crossing schedule
//!
//! One absolute next-impact timestamp per arc, in wall-clock milliseconds.
//! A due check advances the schedule by exactly one half-period: after a
//! long frame stall the skipped crossings are dropped, never replayed late.

use std::f64::consts::PI;

use super::motion::angular_velocity;
use crate::consts::ARC_COUNT;

/// Per-arc impact schedule, advanced one crossing at a time
#[derive(Debug, Clone)]
pub struct ImpactScheduler {
    next_impact_ms: Vec<f64>,
}

impl ImpactScheduler {
    /// Schedule the first crossing of every arc from the shared start instant
    pub fn new(start_ms: f64) -> Self {
        let next_impact_ms = (0..ARC_COUNT)
            .map(|index| start_ms + Self::half_period_ms(index))
            .collect();
        Self { next_impact_ms }
    }

    /// Milliseconds between consecutive crossings for arc `index`
    pub fn half_period_ms(index: usize) -> f64 {
        PI / angular_velocity(index) as f64 * 1000.0
    }

    /// Check arc `index` against the clock; true when a crossing is due
    ///
    /// Advances the schedule by one half-period no matter how far behind the
    /// clock is. The caller decides whether the crossing is audible.
    pub fn check(&mut self, index: usize, now_ms: f64) -> bool {
        if now_ms >= self.next_impact_ms[index] {
            self.next_impact_ms[index] += Self::half_period_ms(index);
            true
        } else {
            false
        }
    }

    /// Next scheduled crossing for arc `index`, absolute milliseconds
    pub fn next_impact_ms(&self, index: usize) -> f64 {
        self.next_impact_ms[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_impact_is_one_half_period_out() {
        let impacts = ImpactScheduler::new(5_000.0);
        for i in 0..ARC_COUNT {
            let expected = 5_000.0 + ImpactScheduler::half_period_ms(i);
            assert!((impacts.next_impact_ms(i) - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn test_half_period_formula() {
        // Arc 0 orbits at 2π·10/60 rad/s: one crossing every 3 s
        assert!((ImpactScheduler::half_period_ms(0) - 3_000.0).abs() < 1e-3);
        for i in 0..ARC_COUNT {
            let v = angular_velocity(i) as f64;
            assert!((ImpactScheduler::half_period_ms(i) - PI / v * 1000.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_crossings_are_spaced_one_half_period_apart() {
        let mut impacts = ImpactScheduler::new(0.0);
        let hp = ImpactScheduler::half_period_ms(3);
        let first = impacts.next_impact_ms(3);
        assert!(impacts.check(3, first));
        let second = impacts.next_impact_ms(3);
        assert!((second - first - hp).abs() < 1e-9);
    }

    #[test]
    fn test_check_only_fires_when_due() {
        let mut impacts = ImpactScheduler::new(0.0);
        let due = impacts.next_impact_ms(0);
        assert!(!impacts.check(0, due - 1.0));
        assert!(impacts.check(0, due));
        assert!(!impacts.check(0, due));
    }

    #[test]
    fn test_stall_consumes_one_crossing_per_check() {
        // Ten crossings behind: each check advances one half-period, so the
        // backlog is dropped one step at a time instead of queued
        let mut impacts = ImpactScheduler::new(0.0);
        let hp = ImpactScheduler::half_period_ms(0);
        let late = 10.5 * hp;
        assert!(impacts.check(0, late));
        assert!((impacts.next_impact_ms(0) - 2.0 * hp).abs() < 1e-9);
        assert!(impacts.check(0, late));
    }

    #[test]
    fn test_schedule_ignores_audibility() {
        // Flipping the sound gate never touches the schedule; the crossing
        // still fires on time
        let mut impacts = ImpactScheduler::new(0.0);
        let before = impacts.next_impact_ms(7);

        let mut gate = crate::sim::SoundGate::new();
        gate.toggle();
        gate.force_off();
        gate.toggle();

        assert_eq!(impacts.next_impact_ms(7), before);
        assert!(impacts.check(7, before));
    }
}
