//! Confetti particle state and the per-tick physics step
//!
//! Each particle flies along a fixed launch direction with a decaying speed,
//! falls under constant gravity, and tumbles via two oscillators:
//! - wobble: flutter that sizes and skews the rendered silhouette
//! - tilt: apparent rotation of the silhouette's jitter points
//!
//! A particle lives for exactly `total_ticks` updates and fades linearly.

use glam::Vec2;
use rand::Rng;
use std::f32::consts::PI;

use super::options::Shape;
use crate::color::Rgb;
use crate::consts::*;
use crate::renderer::shapes::glyph_for;
use crate::renderer::surface::Surface;
use crate::{GRAVITY_DIRECTION, direction, screen_angle};

/// Launch parameters for one particle
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleSpawn {
    /// Start position in surface pixels
    pub position: Vec2,
    /// Launch angle in degrees, 90 = up
    pub angle: f32,
    /// Cone width in degrees
    pub spread: f32,
    pub start_velocity: f32,
    pub color: Rgb,
    pub shape: Shape,
    pub ticks: u32,
    pub decay: f32,
    pub gravity: f32,
    pub drift: f32,
    pub scalar: f32,
}

impl Default for ParticleSpawn {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            angle: DEFAULT_ANGLE,
            spread: DEFAULT_SPREAD,
            start_velocity: DEFAULT_START_VELOCITY,
            color: Rgb::default(),
            shape: Shape::Square,
            ticks: DEFAULT_TICKS,
            decay: DEFAULT_DECAY,
            gravity: DEFAULT_GRAVITY,
            drift: DEFAULT_DRIFT,
            scalar: DEFAULT_SCALAR,
        }
    }
}

/// A single piece of confetti
#[derive(Debug, Clone)]
pub struct Particle {
    /// Position in surface pixels
    pub pos: Vec2,
    /// Current speed along `angle_2d` (pixels/tick)
    pub velocity: f32,
    /// Fixed launch direction in surface radians
    pub angle_2d: f32,
    /// Effective downward pull per tick
    pub gravity: f32,
    pub decay: f32,
    pub drift: f32,

    pub color: Rgb,
    pub shape: Shape,
    pub scalar: f32,
    pub oval_scalar: f32,

    pub wobble: f32,
    pub wobble_speed: f32,
    /// Position offset by the wobble phase
    pub wobble_pos: Vec2,

    pub tilt_angle: f32,
    pub tilt_sin: f32,
    pub tilt_cos: f32,

    /// Updates performed so far
    tick: u32,
    /// Lifetime budget, fixed at creation
    total_ticks: u32,
    /// Jitter re-rolled every tick, in [2, 3)
    pub random: f32,
}

impl Particle {
    /// Create a particle with randomized flight parameters
    pub fn new<R: Rng>(spawn: &ParticleSpawn, rng: &mut R) -> Self {
        let spread = spawn.spread.to_radians();
        let cone_offset = 0.5 * spread - rng.random::<f32>() * spread;

        Self {
            pos: spawn.position,
            velocity: spawn.start_velocity * 0.5 + rng.random::<f32>() * spawn.start_velocity,
            angle_2d: screen_angle(spawn.angle) + cone_offset,
            gravity: spawn.gravity * GRAVITY_SCALE,
            decay: spawn.decay,
            drift: spawn.drift,
            color: spawn.color,
            shape: spawn.shape,
            scalar: spawn.scalar,
            oval_scalar: OVAL_SCALAR,
            wobble: rng.random::<f32>() * 10.0,
            wobble_speed: (rng.random::<f32>() * 0.1 + 0.05).min(MAX_WOBBLE_SPEED),
            wobble_pos: spawn.position,
            tilt_angle: (rng.random::<f32>() * 0.5 + 0.25) * PI,
            tilt_sin: 0.0,
            tilt_cos: 0.0,
            tick: 0,
            // A zero-tick particle still renders its single frame
            total_ticks: spawn.ticks.max(1),
            random: rng.random::<f32>() + 2.0,
        }
    }

    pub fn tick(&self) -> u32 {
        self.tick
    }

    pub fn total_ticks(&self) -> u32 {
        self.total_ticks
    }

    pub fn is_alive(&self) -> bool {
        self.tick < self.total_ticks
    }

    /// Opacity the next update will render with
    pub fn alpha(&self) -> f32 {
        1.0 - self.tick as f32 / self.total_ticks as f32
    }

    /// Advance one tick of physics.
    ///
    /// Returns the lifetime progress in [0, 1) measured before `tick` was
    /// incremented, which is what the fade uses.
    pub fn update<R: Rng>(&mut self, rng: &mut R) -> f32 {
        // Drift is strongest at launch and settles to 30% of nominal
        let vertical_progress =
            (self.tick as f32 / (self.total_ticks as f32 * DRIFT_FADE_SPAN)).min(1.0);
        let drift_reduction = 1.0 - vertical_progress * DRIFT_FADE_AMOUNT;

        self.pos += direction(self.angle_2d) * self.velocity
            + Vec2::X * self.drift * drift_reduction
            + GRAVITY_DIRECTION * self.gravity;

        self.velocity *= self.decay;

        self.wobble += self.wobble_speed;
        self.wobble_pos = self.pos + direction(self.wobble) * WOBBLE_RADIUS * self.scalar;

        self.tilt_angle += TILT_STEP;
        (self.tilt_sin, self.tilt_cos) = self.tilt_angle.sin_cos();
        self.random = rng.random::<f32>() + 2.0;

        let progress = self.tick as f32 / self.total_ticks as f32;
        self.tick += 1;
        progress
    }

    /// Advance one tick and fill the particle's glyph onto `surface`.
    ///
    /// Returns whether the particle is still alive afterwards; the owner
    /// drops it as soon as this is false.
    pub fn update_and_render<S, R>(&mut self, surface: &mut S, rng: &mut R) -> bool
    where
        S: Surface + ?Sized,
        R: Rng,
    {
        let progress = self.update(rng);
        surface.fill(&glyph_for(self), self.color.with_alpha(1.0 - progress));
        self.is_alive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::recording::{DrawCall, RecordingSurface};
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn spawn(ticks: u32) -> ParticleSpawn {
        ParticleSpawn {
            position: Vec2::new(50.0, 50.0),
            ticks,
            ..ParticleSpawn::default()
        }
    }

    #[test]
    fn test_liveness_sequence() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut surface = RecordingSurface::new(100.0, 100.0);
        let mut p = Particle::new(&spawn(3), &mut rng);

        let alive: Vec<bool> = (0..3)
            .map(|_| p.update_and_render(&mut surface, &mut rng))
            .collect();
        assert_eq!(alive, vec![true, true, false]);
        assert_eq!(p.tick, 3);
        assert_eq!(p.total_ticks(), 3);
    }

    #[test]
    fn test_alpha_fades_before_increment() {
        let mut rng = Pcg32::seed_from_u64(2);
        let mut surface = RecordingSurface::new(100.0, 100.0);
        let mut p = Particle::new(&spawn(4), &mut rng);

        let mut expected = Vec::new();
        loop {
            expected.push(p.alpha());
            if !p.update_and_render(&mut surface, &mut rng) {
                break;
            }
        }
        assert_eq!(expected, vec![1.0, 0.75, 0.5, 0.25]);

        let alphas: Vec<f32> = surface
            .calls()
            .iter()
            .filter_map(|c| match c {
                DrawCall::Fill { color, .. } => Some(color.alpha),
                DrawCall::Clear => None,
            })
            .collect();
        assert_eq!(alphas, vec![1.0, 0.75, 0.5, 0.25]);
    }

    #[test]
    fn test_zero_ticks_renders_one_opaque_frame() {
        let mut rng = Pcg32::seed_from_u64(9);
        let mut surface = RecordingSurface::new(100.0, 100.0);
        let mut p = Particle::new(&spawn(0), &mut rng);

        assert_eq!(p.total_ticks(), 1);
        assert!(!p.update_and_render(&mut surface, &mut rng));
        match surface.calls() {
            [DrawCall::Fill { color, .. }] => assert_eq!(color.alpha, 1.0),
            other => panic!("unexpected draw calls: {:?}", other),
        }
    }

    #[test]
    fn test_launch_within_cone() {
        let mut rng = Pcg32::seed_from_u64(3);
        let s = ParticleSpawn {
            angle: 90.0,
            spread: 45.0,
            ..ParticleSpawn::default()
        };
        for _ in 0..200 {
            let p = Particle::new(&s, &mut rng);
            let center = screen_angle(90.0);
            assert!((p.angle_2d - center).abs() <= 22.5_f32.to_radians() + 1e-5);
            assert!(p.velocity >= 22.5 && p.velocity <= 67.5);
            assert!(p.wobble >= 0.0 && p.wobble < 10.0);
            assert!(p.wobble_speed > 0.05 - 1e-6 && p.wobble_speed <= MAX_WOBBLE_SPEED);
            assert!(p.tilt_angle >= 0.25 * PI && p.tilt_angle < 0.75 * PI + 1e-5);
            assert!(p.random >= 2.0 && p.random < 3.0);
            assert_eq!(p.gravity, DEFAULT_GRAVITY * GRAVITY_SCALE);
            assert_eq!(p.oval_scalar, 0.6);
        }
    }

    #[test]
    fn test_gravity_pulls_down_without_velocity() {
        let mut rng = Pcg32::seed_from_u64(4);
        let s = ParticleSpawn {
            start_velocity: 0.0,
            gravity: 1.0,
            ..spawn(10)
        };
        let mut p = Particle::new(&s, &mut rng);
        let start = p.pos;
        p.update(&mut rng);
        assert_eq!(p.pos, start + Vec2::new(0.0, 3.0));
    }

    #[test]
    fn test_drift_attenuates_to_thirty_percent() {
        let mut rng = Pcg32::seed_from_u64(5);
        let s = ParticleSpawn {
            start_velocity: 0.0,
            gravity: 0.0,
            drift: 10.0,
            ..spawn(10)
        };
        let mut p = Particle::new(&s, &mut rng);

        // First tick: full drift
        let x0 = p.pos.x;
        p.update(&mut rng);
        assert!((p.pos.x - x0 - 10.0).abs() < 1e-4);

        // Past 40% of the lifetime drift is fully attenuated
        while p.tick < 5 {
            p.update(&mut rng);
        }
        let x1 = p.pos.x;
        p.update(&mut rng);
        assert!((p.pos.x - x1 - 3.0).abs() < 1e-4);
    }

    #[test]
    fn test_wobble_pos_tracks_scalar() {
        let mut rng = Pcg32::seed_from_u64(6);
        let s = ParticleSpawn {
            scalar: 2.0,
            ..spawn(10)
        };
        let mut p = Particle::new(&s, &mut rng);
        p.update(&mut rng);
        assert!(((p.wobble_pos - p.pos).length() - 20.0).abs() < 1e-3);
    }

    proptest! {
        #[test]
        fn prop_returns_false_exactly_at_budget(ticks in 1u32..60, seed in any::<u64>()) {
            let mut rng = Pcg32::seed_from_u64(seed);
            let mut surface = RecordingSurface::new(100.0, 100.0);
            let mut p = Particle::new(&spawn(ticks), &mut rng);
            for i in 1..=ticks {
                let before = p.tick;
                let alive = p.update_and_render(&mut surface, &mut rng);
                prop_assert_eq!(p.tick, before + 1);
                prop_assert_eq!(alive, i < ticks);
            }
        }

        #[test]
        fn prop_velocity_decays_geometrically(
            decay in 0.5f32..0.99,
            start in 1.0f32..80.0,
            steps in 1usize..40,
            seed in any::<u64>(),
        ) {
            let mut rng = Pcg32::seed_from_u64(seed);
            let s = ParticleSpawn { decay, start_velocity: start, ..spawn(100) };
            let mut p = Particle::new(&s, &mut rng);
            let initial = p.velocity;
            let mut last = initial;
            for _ in 0..steps {
                p.update(&mut rng);
                prop_assert!(p.velocity <= last);
                last = p.velocity;
            }
            let expected = initial * decay.powi(steps as i32);
            prop_assert!((p.velocity - expected).abs() <= expected * 1e-3 + 1e-6);
        }

        #[test]
        fn prop_rendered_alpha_stays_positive(ticks in 1u32..40, seed in any::<u64>()) {
            let mut rng = Pcg32::seed_from_u64(seed);
            let mut surface = RecordingSurface::new(100.0, 100.0);
            let mut p = Particle::new(&spawn(ticks), &mut rng);
            while p.update_and_render(&mut surface, &mut rng) {}
            for call in surface.calls() {
                if let DrawCall::Fill { color, .. } = call {
                    prop_assert!(color.alpha > 0.0 && color.alpha <= 1.0);
                }
            }
        }
    }
}
