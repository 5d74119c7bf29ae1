//! Batch construction for a single burst

use glam::Vec2;
use rand::Rng;

use super::options::BurstConfig;
use super::particle::{Particle, ParticleSpawn};

/// Pixel position of the burst origin on a surface of `surface_size`
pub fn origin_pixels(config: &BurstConfig, surface_size: Vec2) -> Vec2 {
    surface_size * Vec2::new(config.origin.x, config.origin.y)
}

/// Build `count` particles for a burst.
///
/// Colors cycle round-robin through the palette; each particle's shape is
/// drawn uniformly from the configured set. `config.particle_count` is not
/// consulted so callers can apply their own scaling. An empty palette or
/// shape set yields no particles.
pub fn build_batch<R: Rng>(
    config: &BurstConfig,
    count: usize,
    surface_size: Vec2,
    rng: &mut R,
) -> Vec<Particle> {
    if config.colors.is_empty() || config.shapes.is_empty() {
        return Vec::new();
    }
    let position = origin_pixels(config, surface_size);
    let mut spawn = ParticleSpawn {
        position,
        angle: config.angle,
        spread: config.spread,
        start_velocity: config.start_velocity,
        ticks: config.ticks,
        decay: config.decay,
        gravity: config.gravity,
        drift: config.drift,
        scalar: config.scalar,
        ..ParticleSpawn::default()
    };

    (0..count)
        .map(|i| {
            spawn.color = config.colors[i % config.colors.len()];
            spawn.shape = config.shapes[rng.random_range(0..config.shapes.len())];
            Particle::new(&spawn, rng)
        })
        .collect()
}
