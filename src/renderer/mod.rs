//! 2D rendering
//!
//! Particles become [`Glyph`]s which any [`Surface`] can fill. The browser
//! surface wraps a `CanvasRenderingContext2d`; the recording surface keeps
//! draw calls in memory.

#[cfg(target_arch = "wasm32")]
pub mod canvas2d;
pub mod recording;
pub mod shapes;
pub mod surface;

#[cfg(target_arch = "wasm32")]
pub use canvas2d::OverlayCanvas;
pub use recording::{DrawCall, RecordingSurface};
pub use shapes::{HEART_OUTLINE, PathSegment, glyph_for};
pub use surface::{Glyph, Surface};
