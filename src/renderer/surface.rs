//! Drawing target abstraction
//!
//! The simulation emits one filled [`Glyph`] per live particle per frame.
//! A surface only has to know how to clear itself and fill those three
//! primitives.

use glam::Vec2;

use crate::color::Rgba;

/// A single filled primitive in surface space (pixels, y down)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Glyph {
    /// Ellipse centered at `center`, rotated by `rotation` radians
    Ellipse {
        center: Vec2,
        radii: Vec2,
        rotation: f32,
    },
    /// Closed quadrilateral, vertices in drawing order
    Quad([Vec2; 4]),
    /// Heart outline (see [`super::shapes::HEART_OUTLINE`]) placed at
    /// `center`, rotated, then uniformly scaled
    Heart {
        center: Vec2,
        rotation: f32,
        scale: f32,
    },
}

/// Something glyphs can be filled onto
pub trait Surface {
    /// Width and height in pixels
    fn size(&self) -> Vec2;

    /// Erase the whole surface
    fn clear(&mut self);

    /// Fill one glyph with a translucent color
    fn fill(&mut self, glyph: &Glyph, color: Rgba);
}
