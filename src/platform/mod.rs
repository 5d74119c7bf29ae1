//! Platform abstraction layer
//!
//! Handles host differences for:
//! - Overlay surface creation and removal
//! - Frame scheduling ("run before next repaint") and cancellation
//! - The user's reduced-motion preference

pub mod headless;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use headless::HeadlessBackend;
#[cfg(target_arch = "wasm32")]
pub use web::{Confetti, WebBackend};

use crate::renderer::Surface;

/// Opaque id of a scheduled frame callback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub i32);

/// Everything the engine needs from its host
pub trait Backend {
    type Surface: Surface;

    /// Whether the host asks for reduced motion
    fn prefers_reduced_motion(&self) -> bool;

    /// Create and attach a full-viewport overlay at `z_index`.
    ///
    /// `None` when no 2D drawing context is available.
    fn create_surface(&mut self, z_index: i32) -> Option<Self::Surface>;

    /// Detach a surface previously returned by `create_surface`
    fn remove_surface(&mut self, surface: Self::Surface);

    /// Ask for one call to the engine's `frame` before the next repaint
    fn request_frame(&mut self) -> Option<FrameHandle>;

    /// Cancel a callback that has not run yet
    fn cancel_frame(&mut self, handle: FrameHandle);
}
