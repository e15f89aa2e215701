//! Per-frame surface geometry
//!
//! Every length is derived from the current displayed size and recomputed
//! each frame, so external resizes need no separate event handling.

use glam::Vec2;

use crate::consts::*;

/// Baseline, arc center and derived lengths for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    /// Baseline left endpoint
    pub baseline_start: Vec2,
    /// Baseline right endpoint
    pub baseline_end: Vec2,
    /// Shared center of every arc (baseline midpoint)
    pub center: Vec2,
    /// Baseline length in pixels
    pub segment_len: f32,
    /// Orbiting dot radius in pixels
    pub dot_radius: f32,
}

impl Layout {
    /// Compute the frame geometry for a surface of the given displayed size
    pub fn compute(width: f32, height: f32) -> Self {
        let y = height * BASELINE_Y_FRAC;
        let baseline_start = Vec2::new(width * BASELINE_MARGIN_FRAC, y);
        let baseline_end = Vec2::new(width * (1.0 - BASELINE_MARGIN_FRAC), y);
        let segment_len = baseline_end.x - baseline_start.x;
        Self {
            baseline_start,
            baseline_end,
            center: Vec2::new(width * 0.5, y),
            segment_len,
            dot_radius: segment_len * DOT_RADIUS_FRAC,
        }
    }

    /// Radius of arc `index`, interpolated from 5% of the baseline up toward
    /// half of it
    ///
    /// The index fraction divides by the arc count itself, so the outermost
    /// arc stops one step short of the half-segment bound.
    pub fn arc_radius(&self, index: usize) -> f32 {
        let min = self.segment_len * MIN_RADIUS_FRAC;
        let spread = self.segment_len / 2.0 - min;
        min + spread * (index as f32 / ARC_COUNT as f32)
    }
}
