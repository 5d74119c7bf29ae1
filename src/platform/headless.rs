//! Headless backend
//!
//! Surfaces are [`RecordingSurface`]s and frames are pumped by the caller,
//! which makes the engine fully deterministic for tests and native runs.

use super::{Backend, FrameHandle};
use crate::engine::{ConfettiEngine, FrameStatus};
use crate::renderer::RecordingSurface;

/// In-process host with a manual frame clock
#[derive(Debug, Clone)]
pub struct HeadlessBackend {
    width: f32,
    height: f32,
    /// Simulates a user with reduced motion enabled
    pub reduced_motion: bool,
    /// Simulates a host without a 2D context
    pub context_available: bool,
    pending: Vec<FrameHandle>,
    next_handle: i32,
    attached: usize,
    created: usize,
    last_removed: Option<RecordingSurface>,
}

impl HeadlessBackend {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            reduced_motion: false,
            context_available: true,
            pending: Vec::new(),
            next_handle: 1,
            attached: 0,
            created: 0,
            last_removed: None,
        }
    }

    /// Surfaces currently attached
    pub fn attached_surfaces(&self) -> usize {
        self.attached
    }

    /// Surfaces created over the backend's lifetime
    pub fn created_surfaces(&self) -> usize {
        self.created
    }

    /// Frame callbacks requested and not yet run or cancelled
    pub fn pending_frames(&self) -> usize {
        self.pending.len()
    }

    /// Consume the oldest pending frame, as the host would before running it
    pub fn take_frame(&mut self) -> Option<FrameHandle> {
        if self.pending.is_empty() {
            None
        } else {
            Some(self.pending.remove(0))
        }
    }

    /// The most recently removed surface, with its full draw history
    pub fn last_removed(&self) -> Option<&RecordingSurface> {
        self.last_removed.as_ref()
    }
}

impl Backend for HeadlessBackend {
    type Surface = RecordingSurface;

    fn prefers_reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    fn create_surface(&mut self, z_index: i32) -> Option<RecordingSurface> {
        if !self.context_available {
            return None;
        }
        self.attached += 1;
        self.created += 1;
        Some(RecordingSurface::new(self.width, self.height).with_z_index(z_index))
    }

    fn remove_surface(&mut self, surface: RecordingSurface) {
        self.attached = self.attached.saturating_sub(1);
        self.last_removed = Some(surface);
    }

    fn request_frame(&mut self) -> Option<FrameHandle> {
        let handle = FrameHandle(self.next_handle);
        self.next_handle += 1;
        self.pending.push(handle);
        Some(handle)
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.pending.retain(|h| *h != handle);
    }
}

impl ConfettiEngine<HeadlessBackend> {
    /// Run the oldest scheduled frame, if any
    pub fn run_pending_frame(&mut self) -> Option<FrameStatus> {
        self.backend_mut().take_frame()?;
        Some(self.frame())
    }

    /// Pump frames until nothing is scheduled. Returns frames run.
    pub fn run_until_idle(&mut self, max_frames: usize) -> usize {
        let mut frames = 0;
        while frames < max_frames && self.run_pending_frame().is_some() {
            frames += 1;
        }
        frames
    }
}
