//! Arc Chimes - a polyrhythm of concentric arcs
//!
//! Core modules:
//! - `sim`: Pure animation core (palette, layout, dot kinematics, impact schedule)
//! - `renderer`: Canvas2D painting
//! - `audio`: Per-arc playable keys
//! - `settings`: User preferences

pub mod audio;
#[cfg(target_arch = "wasm32")]
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::Settings;

use glam::Vec2;

/// Animation tuning constants
pub mod consts {
    /// Number of arcs; must match the palette length
    pub const ARC_COUNT: usize = 21;
    /// Laps the innermost dot completes per cycle window
    pub const BASE_LAPS: f32 = 10.0;
    /// Window after which every dot realigns at the start angle (seconds)
    pub const CYCLE_SECS: f32 = 60.0;

    /// Baseline spans width * [MARGIN, 1 - MARGIN]
    pub const BASELINE_MARGIN_FRAC: f32 = 0.1;
    /// Baseline height as a fraction of surface height
    pub const BASELINE_Y_FRAC: f32 = 0.9;
    /// Smallest arc radius as a fraction of baseline length
    pub const MIN_RADIUS_FRAC: f32 = 0.05;
    /// Dot radius as a fraction of baseline length
    pub const DOT_RADIUS_FRAC: f32 = 0.009;
    /// Stroke width for the baseline and arcs (pixels)
    pub const STROKE_WIDTH: f32 = 4.0;
}

/// Wrap an angle into [0, 2π)
#[inline]
pub fn wrap_angle(angle: f32) -> f32 {
    angle.rem_euclid(std::f32::consts::TAU)
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}
