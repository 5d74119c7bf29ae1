//! Confetti simulation
//!
//! Pure and host-independent:
//! - Randomness only through the caller's RNG
//! - No platform dependencies; drawing goes through the `Surface` trait

pub mod burst;
pub mod options;
pub mod particle;

pub use burst::{build_batch, origin_pixels};
pub use options::{BurstConfig, ConfettiOptions, CornerSide, Origin, OriginOptions, Shape};
pub use particle::{Particle, ParticleSpawn};
