//! In-memory surface that records draw calls
//!
//! Used by the headless backend and by tests to observe what a frame drew.

use glam::Vec2;

use super::surface::{Glyph, Surface};
use crate::color::Rgba;

/// A recorded draw call
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCall {
    Clear,
    Fill { glyph: Glyph, color: Rgba },
}

/// Surface that keeps every call it receives
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    size: Vec2,
    z_index: i32,
    calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
            z_index: 0,
            calls: Vec::new(),
        }
    }

    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    pub fn z_index(&self) -> i32 {
        self.z_index
    }

    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Fills issued since the most recent clear
    pub fn last_frame(&self) -> &[DrawCall] {
        let start = self
            .calls
            .iter()
            .rposition(|c| matches!(c, DrawCall::Clear))
            .map_or(0, |i| i + 1);
        &self.calls[start..]
    }

    pub fn fill_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::Fill { .. }))
            .count()
    }

    pub fn clear_count(&self) -> usize {
        self.calls.len() - self.fill_count()
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn clear(&mut self) {
        self.calls.push(DrawCall::Clear);
    }

    fn fill(&mut self, glyph: &Glyph, color: Rgba) {
        self.calls.push(DrawCall::Fill {
            glyph: *glyph,
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;

    #[test]
    fn test_last_frame_starts_after_clear() {
        let mut surface = RecordingSurface::new(10.0, 10.0);
        let glyph = Glyph::Quad([Vec2::ZERO; 4]);
        let color = Rgb::default().with_alpha(1.0);

        surface.clear();
        surface.fill(&glyph, color);
        surface.fill(&glyph, color);
        surface.clear();
        surface.fill(&glyph, color);

        assert_eq!(surface.last_frame().len(), 1);
        assert_eq!(surface.fill_count(), 3);
        assert_eq!(surface.clear_count(), 2);
    }
}
