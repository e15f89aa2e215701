//! Pure animation core
//!
//! Everything that decides what a frame looks like and sounds like lives
//! here. This module must stay platform-free:
//! - No drawing or DOM dependencies
//! - Wall-clock time comes in as plain numbers
//! - Fully testable on the native target

pub mod gate;
pub mod impacts;
pub mod layout;
pub mod motion;
pub mod palette;

pub use gate::SoundGate;
pub use impacts::ImpactScheduler;
pub use layout::Layout;
pub use motion::{angular_velocity, dot_angle, dot_position};
pub use palette::{ARC_COLORS, BASELINE_COLOR, DOT_COLOR};
