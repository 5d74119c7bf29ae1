//! Burst options and their resolution against defaults

use serde::Deserialize;

use crate::color::{Rgb, colors_to_rgb};
use crate::consts::*;
use crate::error::ConfigError;

/// Confetti silhouettes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    Circle,
    Square,
    Heart,
}

impl Shape {
    pub const DEFAULT_SET: [Shape; 2] = [Shape::Square, Shape::Circle];
}

/// Normalized viewport position, (0, 0) top-left to (1, 1) bottom-right
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Origin {
    pub x: f32,
    pub y: f32,
}

impl Origin {
    pub const CENTER: Origin = Origin { x: 0.5, y: 0.5 };
    pub const BOTTOM_LEFT: Origin = Origin { x: 0.0, y: 1.0 };
    pub const BOTTOM_RIGHT: Origin = Origin { x: 1.0, y: 1.0 };
}

impl Default for Origin {
    fn default() -> Self {
        Self::CENTER
    }
}

/// Origin override; missing fields fall back to the default origin
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct OriginOptions {
    pub x: Option<f32>,
    pub y: Option<f32>,
}

impl From<Origin> for OriginOptions {
    fn from(origin: Origin) -> Self {
        Self {
            x: Some(origin.x),
            y: Some(origin.y),
        }
    }
}

/// Options for a single burst. Every field is optional.
///
/// Deserializes from the camelCase object shape JS callers use, e.g.
/// `{"particleCount": 80, "origin": {"y": 0.7}, "shapes": ["heart"]}`.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConfettiOptions {
    /// Particles per call
    pub particle_count: Option<usize>,
    /// Launch direction in degrees, 90 = straight up
    pub angle: Option<f32>,
    /// Width of the launch cone in degrees
    pub spread: Option<f32>,
    /// Initial speed in pixels/tick
    pub start_velocity: Option<f32>,
    /// Per-tick velocity multiplier
    pub decay: Option<f32>,
    /// Downward acceleration
    pub gravity: Option<f32>,
    /// Horizontal bias in pixels/tick
    pub drift: Option<f32>,
    /// Lifetime in frames
    pub ticks: Option<u32>,
    pub origin: Option<OriginOptions>,
    /// Hex palette
    pub colors: Option<Vec<String>>,
    pub shapes: Option<Vec<Shape>>,
    /// Size multiplier
    pub scalar: Option<f32>,
    /// Overlay stacking order
    pub z_index: Option<i32>,
}

/// Which bottom corner a celebration burst launches from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CornerSide {
    Left,
    Right,
}

impl CornerSide {
    pub fn origin(&self) -> Origin {
        match self {
            CornerSide::Left => Origin::BOTTOM_LEFT,
            CornerSide::Right => Origin::BOTTOM_RIGHT,
        }
    }

    /// Tilted slightly toward the opposite side of the screen
    pub fn angle(&self) -> f32 {
        match self {
            CornerSide::Left => 85.0,
            CornerSide::Right => 95.0,
        }
    }

    pub fn drift(&self) -> f32 {
        match self {
            CornerSide::Left => CORNER_DRIFT,
            CornerSide::Right => -CORNER_DRIFT,
        }
    }
}

impl ConfettiOptions {
    /// Slow, high, long-lived burst from one bottom corner
    pub fn corner(side: CornerSide, particle_count: usize, colors: Option<&[String]>) -> Self {
        let colors = match colors {
            Some(colors) => colors.to_vec(),
            None => DEFAULT_COLORS.iter().map(|c| c.to_string()).collect(),
        };
        Self {
            particle_count: Some(particle_count),
            angle: Some(side.angle()),
            spread: Some(CORNER_SPREAD),
            start_velocity: Some(CORNER_START_VELOCITY),
            decay: Some(CORNER_DECAY),
            gravity: Some(CORNER_GRAVITY),
            drift: Some(side.drift()),
            ticks: Some(CORNER_TICKS),
            origin: Some(side.origin().into()),
            colors: Some(colors),
            shapes: Some(vec![Shape::Circle, Shape::Square]),
            scalar: Some(CORNER_SCALAR),
            z_index: None,
        }
    }

    /// Merge over defaults and validate the palette and shape set
    pub fn resolve(&self) -> Result<BurstConfig, ConfigError> {
        let origin = self.origin.unwrap_or_default();
        let origin = Origin {
            x: origin.x.unwrap_or(Origin::CENTER.x),
            y: origin.y.unwrap_or(Origin::CENTER.y),
        };

        let colors = match &self.colors {
            Some(colors) => colors_to_rgb(colors.as_slice()),
            None => colors_to_rgb(&DEFAULT_COLORS[..]),
        }
        .map_err(|(index, source)| ConfigError::InvalidColor { index, source })?;

        let shapes = self
            .shapes
            .clone()
            .unwrap_or_else(|| Shape::DEFAULT_SET.to_vec());

        let config = BurstConfig {
            particle_count: self.particle_count.unwrap_or(DEFAULT_PARTICLE_COUNT),
            angle: self.angle.unwrap_or(DEFAULT_ANGLE),
            spread: self.spread.unwrap_or(DEFAULT_SPREAD),
            start_velocity: self.start_velocity.unwrap_or(DEFAULT_START_VELOCITY),
            decay: self.decay.unwrap_or(DEFAULT_DECAY),
            gravity: self.gravity.unwrap_or(DEFAULT_GRAVITY),
            drift: self.drift.unwrap_or(DEFAULT_DRIFT),
            ticks: self.ticks.unwrap_or(DEFAULT_TICKS),
            origin,
            colors,
            shapes,
            scalar: self.scalar.unwrap_or(DEFAULT_SCALAR),
            z_index: self.z_index.unwrap_or(DEFAULT_Z_INDEX),
        };
        config.validate()?;
        Ok(config)
    }
}

/// Fully resolved burst parameters
#[derive(Debug, Clone, PartialEq)]
pub struct BurstConfig {
    pub particle_count: usize,
    pub angle: f32,
    pub spread: f32,
    pub start_velocity: f32,
    pub decay: f32,
    pub gravity: f32,
    pub drift: f32,
    pub ticks: u32,
    pub origin: Origin,
    pub colors: Vec<Rgb>,
    pub shapes: Vec<Shape>,
    pub scalar: f32,
    pub z_index: i32,
}

impl BurstConfig {
    /// Reject configs a batch cannot be built from
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.colors.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        if self.shapes.is_empty() {
            return Err(ConfigError::EmptyShapes);
        }
        if self.ticks == 0 {
            return Err(ConfigError::ZeroTicks);
        }
        Ok(())
    }
}

impl Default for BurstConfig {
    fn default() -> Self {
        Self {
            particle_count: DEFAULT_PARTICLE_COUNT,
            angle: DEFAULT_ANGLE,
            spread: DEFAULT_SPREAD,
            start_velocity: DEFAULT_START_VELOCITY,
            decay: DEFAULT_DECAY,
            gravity: DEFAULT_GRAVITY,
            drift: DEFAULT_DRIFT,
            ticks: DEFAULT_TICKS,
            origin: Origin::CENTER,
            colors: vec![Rgb::new(0x0e, 0x56, 0xfa), Rgb::new(0x17, 0xca, 0xfa)],
            shapes: Shape::DEFAULT_SET.to_vec(),
            scalar: DEFAULT_SCALAR,
            z_index: DEFAULT_Z_INDEX,
        }
    }
}
