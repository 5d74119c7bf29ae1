//! Confetti Burst - particle confetti rendered to a 2D overlay surface
//!
//! Core modules:
//! - `color`: Hex palette parsing and fill colors
//! - `sim`: Particle physics, burst options and batch construction
//! - `renderer`: Surface abstraction and per-shape glyph geometry
//! - `platform`: Host backends (headless, browser)
//! - `engine`: The owned confetti engine (bursts, frame loop, teardown)
//! - `settings`: Persisted user preferences

pub mod color;
pub mod engine;
pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use color::{Rgb, Rgba, hex_to_rgb};
pub use engine::{ConfettiEngine, Fired, FrameStatus, SkipReason};
pub use error::{ColorError, ConfigError};
pub use settings::{QualityPreset, Settings};
pub use sim::{BurstConfig, ConfettiOptions, CornerSide, Origin, Particle, Shape};

use glam::Vec2;

/// Engine tuning constants
pub mod consts {
    /// Default brand palette (primary blue, secondary cyan)
    pub const DEFAULT_COLORS: [&str; 2] = ["#0E56FA", "#17CAFA"];

    /// Burst defaults
    pub const DEFAULT_PARTICLE_COUNT: usize = 50;
    pub const DEFAULT_ANGLE: f32 = 90.0;
    pub const DEFAULT_SPREAD: f32 = 45.0;
    pub const DEFAULT_START_VELOCITY: f32 = 45.0;
    pub const DEFAULT_DECAY: f32 = 0.9;
    pub const DEFAULT_GRAVITY: f32 = 1.0;
    pub const DEFAULT_DRIFT: f32 = 0.0;
    pub const DEFAULT_TICKS: u32 = 200;
    pub const DEFAULT_SCALAR: f32 = 1.0;
    pub const DEFAULT_Z_INDEX: i32 = 100;

    /// Configured gravity is multiplied by this to get per-tick pixels
    pub const GRAVITY_SCALE: f32 = 3.0;
    /// Aspect ratio applied to circle radii
    pub const OVAL_SCALAR: f32 = 0.6;
    /// Upper bound on wobble phase speed (radians/tick)
    pub const MAX_WOBBLE_SPEED: f32 = 0.11;
    /// Tilt phase advance per tick (radians)
    pub const TILT_STEP: f32 = 0.1;
    /// Wobble offset radius in pixels at scalar 1.0
    pub const WOBBLE_RADIUS: f32 = 10.0;
    /// Fraction of lifetime over which drift is attenuated
    pub const DRIFT_FADE_SPAN: f32 = 0.4;
    /// How much of the drift is removed once attenuation completes
    pub const DRIFT_FADE_AMOUNT: f32 = 0.7;

    /// Corner celebration preset
    pub const CORNER_PARTICLE_COUNT: usize = 300;
    pub const CORNER_SPREAD: f32 = 180.0;
    pub const CORNER_START_VELOCITY: f32 = 35.0;
    pub const CORNER_GRAVITY: f32 = 0.65;
    pub const CORNER_SCALAR: f32 = 2.2;
    pub const CORNER_DRIFT: f32 = 8.0;
    pub const CORNER_TICKS: u32 = 750;
    pub const CORNER_DECAY: f32 = 0.97;
}

/// Direction gravity pulls in surface space (y grows downward)
pub const GRAVITY_DIRECTION: Vec2 = Vec2::Y;

/// Convert a launch angle in degrees (counter-clockwise from +x, 90 = up)
/// into radians in surface space, where y grows downward.
///
/// This is the only place the y-axis flip happens.
#[inline]
pub fn screen_angle(degrees: f32) -> f32 {
    -degrees.to_radians()
}

/// Unit direction for a surface-space angle
#[inline]
pub fn direction(angle: f32) -> Vec2 {
    Vec2::new(angle.cos(), angle.sin())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_straight_up_points_to_negative_y() {
        let dir = direction(screen_angle(90.0));
        assert!(dir.x.abs() < 1e-6);
        assert!((dir.y + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_gravity_opposes_upward_launch() {
        let up = direction(screen_angle(90.0));
        assert!(up.dot(GRAVITY_DIRECTION) < 0.0);
    }

    #[test]
    fn test_zero_degrees_points_right() {
        let dir = direction(screen_angle(0.0));
        assert!((dir.x - 1.0).abs() < 1e-6);
        assert!(dir.y.abs() < 1e-6);
    }
}
