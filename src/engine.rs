//! Confetti engine
//!
//! Owns the single overlay surface, the live particle list and the pending
//! frame handle. States:
//! - Idle: no surface, no particles, nothing scheduled
//! - Running: surface attached, particles alive, exactly one frame pending
//!
//! A burst fired while Running merges into the same particle list, so there
//! is never more than one surface or one frame loop per engine. The run ends
//! (surface removed) on the frame that leaves no particles, or on `stop`.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::consts::CORNER_PARTICLE_COUNT;
use crate::error::ConfigError;
use crate::platform::{Backend, FrameHandle};
use crate::renderer::Surface;
use crate::settings::Settings;
use crate::sim::{BurstConfig, ConfettiOptions, CornerSide, Particle, build_batch};

/// Why a burst produced nothing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The user or host prefers reduced motion
    ReducedMotion,
    /// Particles are switched off in settings
    Disabled,
    /// Zero particles after scaling
    Empty,
    /// The host could not provide a 2D surface
    NoSurface,
    /// The host could not schedule a frame
    NoScheduler,
}

/// Outcome of a burst call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fired {
    /// A new run began; its first frame is scheduled
    Started { particles: usize },
    /// Particles joined the run already in flight
    Merged { particles: usize },
    Skipped(SkipReason),
}

impl Fired {
    /// Particles this call added
    pub fn particles(&self) -> usize {
        match self {
            Fired::Started { particles } | Fired::Merged { particles } => *particles,
            Fired::Skipped(_) => 0,
        }
    }
}

/// Result of running one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameStatus {
    /// Nothing was running
    Idle,
    /// Particles remain and the next frame is scheduled
    Running { particles: usize },
    /// The last particle expired (or scheduling failed); the surface is gone
    Finished,
}

/// An in-flight animation
struct Run<S> {
    surface: S,
    particles: Vec<Particle>,
    frame: Option<FrameHandle>,
}

/// Owned confetti engine; construct one per page and share it by reference
pub struct ConfettiEngine<B: Backend> {
    backend: B,
    settings: Settings,
    rng: Pcg32,
    run: Option<Run<B::Surface>>,
}

impl<B: Backend> ConfettiEngine<B> {
    pub fn new(backend: B, settings: Settings) -> Self {
        Self::from_rng(backend, settings, Pcg32::from_rng(&mut rand::rng()))
    }

    /// Reproducible engine: same seed and calls give the same particles
    pub fn with_seed(backend: B, settings: Settings, seed: u64) -> Self {
        Self::from_rng(backend, settings, Pcg32::seed_from_u64(seed))
    }

    fn from_rng(backend: B, settings: Settings, rng: Pcg32) -> Self {
        Self {
            backend,
            settings,
            rng,
            run: None,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    pub fn is_running(&self) -> bool {
        self.run.is_some()
    }

    /// Live particles in the current run
    pub fn particles(&self) -> &[Particle] {
        match &self.run {
            Some(run) => &run.particles,
            None => &[],
        }
    }

    pub fn particle_count(&self) -> usize {
        self.particles().len()
    }

    /// The overlay surface, while running
    pub fn surface(&self) -> Option<&B::Surface> {
        self.run.as_ref().map(|run| &run.surface)
    }

    /// Handle of the frame the host will run next
    pub fn pending_frame(&self) -> Option<FrameHandle> {
        self.run.as_ref().and_then(|run| run.frame)
    }

    /// Fire one burst.
    ///
    /// Returns as soon as the particles are queued; it never waits for them
    /// to finish. Errors only for options that cannot be resolved.
    pub fn fire(&mut self, options: &ConfettiOptions) -> Result<Fired, ConfigError> {
        let config = options.resolve()?;
        Ok(self.fire_burst(&config))
    }

    /// Fire an already-resolved burst. The config is validated first, so a
    /// hand-built one with no colors, no shapes or zero ticks is an error.
    pub fn fire_config(&mut self, config: &BurstConfig) -> Result<Fired, ConfigError> {
        config.validate()?;
        Ok(self.fire_burst(config))
    }

    fn fire_burst(&mut self, config: &BurstConfig) -> Fired {
        let host_reduced = self.backend.prefers_reduced_motion();
        if self.settings.effective_reduced_motion(host_reduced) {
            log::debug!("Confetti skipped: reduced motion");
            return Fired::Skipped(SkipReason::ReducedMotion);
        }
        if !self.settings.particles {
            return Fired::Skipped(SkipReason::Disabled);
        }

        let count = self.settings.scaled_count(config.particle_count);
        if count == 0 {
            return Fired::Skipped(SkipReason::Empty);
        }

        if let Some(run) = self.run.as_mut() {
            let batch = build_batch(config, count, run.surface.size(), &mut self.rng);
            run.particles.extend(batch);
            log::debug!(
                "Merged {} particles into running burst ({} live)",
                count,
                run.particles.len()
            );
            return Fired::Merged { particles: count };
        }

        let Some(surface) = self.backend.create_surface(config.z_index) else {
            log::warn!("No 2D surface available, confetti skipped");
            return Fired::Skipped(SkipReason::NoSurface);
        };
        let particles = build_batch(config, count, surface.size(), &mut self.rng);

        let Some(handle) = self.backend.request_frame() else {
            log::warn!("Could not schedule a frame, confetti skipped");
            self.backend.remove_surface(surface);
            return Fired::Skipped(SkipReason::NoScheduler);
        };

        log::debug!("Started confetti run with {} particles", count);
        self.run = Some(Run {
            surface,
            particles,
            frame: Some(handle),
        });
        Fired::Started { particles: count }
    }

    /// Two mirrored bursts from the bottom corners.
    ///
    /// Both are queued before any frame runs, so the left and right bursts
    /// start on the same frame and share one run. Both option sets are
    /// validated before either fires.
    pub fn fire_corners(
        &mut self,
        particle_count: usize,
        colors: Option<&[String]>,
    ) -> Result<[Fired; 2], ConfigError> {
        let left = ConfettiOptions::corner(CornerSide::Left, particle_count, colors).resolve()?;
        let right = ConfettiOptions::corner(CornerSide::Right, particle_count, colors).resolve()?;
        Ok([self.fire_burst(&left), self.fire_burst(&right)])
    }

    /// Corner celebration with the default count and palette
    pub fn celebrate(&mut self) -> [Fired; 2] {
        // Defaults always resolve
        self.fire_corners(CORNER_PARTICLE_COUNT, None)
            .unwrap_or([Fired::Skipped(SkipReason::Empty); 2])
    }

    /// Run one frame: clear, step and draw every particle, drop the expired
    /// ones, then reschedule or tear down.
    ///
    /// The host calls this from the callback it was asked to schedule.
    pub fn frame(&mut self) -> FrameStatus {
        let Some(run) = self.run.as_mut() else {
            return FrameStatus::Idle;
        };
        run.frame = None;

        run.surface.clear();
        let surface = &mut run.surface;
        let rng = &mut self.rng;
        run.particles.retain_mut(|p| p.update_and_render(surface, rng));

        let remaining = run.particles.len();
        if remaining == 0 {
            log::debug!("Confetti finished");
            self.teardown();
            return FrameStatus::Finished;
        }

        match self.backend.request_frame() {
            Some(handle) => {
                run.frame = Some(handle);
                FrameStatus::Running {
                    particles: remaining,
                }
            }
            None => {
                log::warn!("Could not schedule next confetti frame");
                self.teardown();
                FrameStatus::Finished
            }
        }
    }

    /// Cancel the pending frame and remove the surface. Safe to call anytime.
    pub fn stop(&mut self) {
        if self.run.is_some() {
            log::info!("Confetti stopped");
        }
        self.teardown();
    }

    fn teardown(&mut self) {
        if let Some(run) = self.run.take() {
            if let Some(handle) = run.frame {
                self.backend.cancel_frame(handle);
            }
            self.backend.remove_surface(run.surface);
        }
    }
}

impl<B: Backend> Drop for ConfettiEngine<B> {
    fn drop(&mut self) {
        self.teardown();
    }
}
