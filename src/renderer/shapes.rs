//! Glyph geometry for each confetti shape

use glam::Vec2;
use std::f32::consts::PI;

use super::surface::Glyph;
use crate::consts::OVAL_SCALAR;
use crate::sim::{Particle, Shape};

/// One step of a path outline
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSegment {
    MoveTo(Vec2),
    CubicTo { ctrl1: Vec2, ctrl2: Vec2, to: Vec2 },
}

/// Unit heart, point at the bottom (+y), notch at (0, -1)
pub const HEART_OUTLINE: [PathSegment; 3] = [
    PathSegment::MoveTo(Vec2::new(0.0, -1.0)),
    // Left lobe
    PathSegment::CubicTo {
        ctrl1: Vec2::new(-2.0, -3.0),
        ctrl2: Vec2::new(-4.0, -1.0),
        to: Vec2::new(0.0, 3.0),
    },
    // Right lobe
    PathSegment::CubicTo {
        ctrl1: Vec2::new(4.0, -1.0),
        ctrl2: Vec2::new(2.0, -3.0),
        to: Vec2::new(0.0, -1.0),
    },
];

/// Rotation applied to circles and hearts, driven by the wobble phase
#[inline]
fn wobble_rotation(wobble: f32) -> f32 {
    PI / 10.0 * wobble
}

/// Build the glyph for a particle's current state.
///
/// Circles and squares are sized from the wobble offset and the tilted
/// jitter points; hearts ignore both and only rotate with the wobble.
pub fn glyph_for(p: &Particle) -> Glyph {
    let tilt = Vec2::new(p.tilt_cos, p.tilt_sin) * p.random;
    let near = p.pos + tilt;
    let far = p.wobble_pos + tilt;

    match p.shape {
        Shape::Circle => Glyph::Ellipse {
            center: p.pos,
            radii: (far - near).abs() * OVAL_SCALAR,
            rotation: wobble_rotation(p.wobble),
        },
        Shape::Square => Glyph::Quad([
            p.pos.floor(),
            Vec2::new(p.wobble_pos.x, near.y).floor(),
            far.floor(),
            Vec2::new(near.x, p.wobble_pos.y).floor(),
        ]),
        Shape::Heart => Glyph::Heart {
            center: p.pos,
            rotation: wobble_rotation(p.wobble),
            scale: p.scalar,
        },
    }
}
