//! Canvas2D overlay - fills glyphs onto a full-viewport HTML5 canvas

use glam::Vec2;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::shapes::{HEART_OUTLINE, PathSegment};
use super::surface::{Glyph, Surface};
use crate::color::Rgba;

/// A click-through canvas fixed over the whole viewport
pub struct OverlayCanvas {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl OverlayCanvas {
    /// Create the overlay, size it to the viewport and append it to `<body>`.
    ///
    /// Nothing is attached if a 2D context cannot be obtained.
    pub fn attach(z_index: i32) -> Result<Self, String> {
        let window = web_sys::window().ok_or("No window")?;
        let document = window.document().ok_or("No document")?;
        let body = document.body().ok_or("No body")?;

        let canvas: HtmlCanvasElement = document
            .create_element("canvas")
            .map_err(|e| format!("Failed to create canvas: {:?}", e))?
            .dyn_into()
            .map_err(|_| "Failed to cast to HtmlCanvasElement")?;

        let style = canvas.style();
        let z_index = z_index.to_string();
        for (property, value) in [
            ("position", "fixed"),
            ("top", "0"),
            ("left", "0"),
            ("width", "100%"),
            ("height", "100%"),
            ("pointer-events", "none"),
            ("z-index", z_index.as_str()),
        ] {
            style
                .set_property(property, value)
                .map_err(|e| format!("Failed to set {}: {:?}", property, e))?;
        }

        // Sized once; viewport resizes during a run are not tracked
        let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);

        let ctx = canvas
            .get_context("2d")
            .map_err(|e| format!("Failed to get 2d context: {:?}", e))?
            .ok_or("No 2d context available")?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| "Failed to cast to CanvasRenderingContext2d")?;

        body.append_child(&canvas)
            .map_err(|e| format!("Failed to attach canvas: {:?}", e))?;

        log::debug!("Confetti overlay attached ({}x{})", width, height);
        Ok(Self { canvas, ctx })
    }

    /// Remove the overlay from the document if it is still attached
    pub fn detach(self) {
        if self.canvas.is_connected() {
            self.canvas.remove();
        }
    }

    fn ellipse(&self, center: Vec2, radii: Vec2, rotation: f32) {
        let (x, y) = (f64::from(center.x), f64::from(center.y));
        let (rx, ry) = (f64::from(radii.x), f64::from(radii.y));
        let rotation = f64::from(rotation);

        if self.ctx.ellipse(x, y, rx, ry, rotation, 0.0, TAU).is_err() {
            // Fallback: unit circle through a scaled transform
            self.ctx.save();
            let _ = self.ctx.translate(x, y);
            let _ = self.ctx.rotate(rotation);
            let _ = self.ctx.scale(rx, ry);
            let _ = self.ctx.arc(0.0, 0.0, 1.0, 0.0, TAU);
            self.ctx.restore();
        }
    }

    fn quad(&self, points: &[Vec2; 4]) {
        self.ctx.move_to(f64::from(points[0].x), f64::from(points[0].y));
        for p in &points[1..] {
            self.ctx.line_to(f64::from(p.x), f64::from(p.y));
        }
    }

    fn heart(&self, center: Vec2, rotation: f32, scale: f32) {
        let _ = self.ctx.translate(f64::from(center.x), f64::from(center.y));
        let _ = self.ctx.rotate(f64::from(rotation));
        let _ = self.ctx.scale(f64::from(scale), f64::from(scale));

        for segment in HEART_OUTLINE {
            match segment {
                PathSegment::MoveTo(p) => self.ctx.move_to(f64::from(p.x), f64::from(p.y)),
                PathSegment::CubicTo { ctrl1, ctrl2, to } => self.ctx.bezier_curve_to(
                    f64::from(ctrl1.x),
                    f64::from(ctrl1.y),
                    f64::from(ctrl2.x),
                    f64::from(ctrl2.y),
                    f64::from(to.x),
                    f64::from(to.y),
                ),
            }
        }
    }
}

impl Surface for OverlayCanvas {
    fn size(&self) -> Vec2 {
        Vec2::new(self.canvas.width() as f32, self.canvas.height() as f32)
    }

    fn clear(&mut self) {
        self.ctx.clear_rect(
            0.0,
            0.0,
            f64::from(self.canvas.width()),
            f64::from(self.canvas.height()),
        );
    }

    fn fill(&mut self, glyph: &Glyph, color: Rgba) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.save();
        self.ctx.begin_path();

        match *glyph {
            Glyph::Ellipse {
                center,
                radii,
                rotation,
            } => self.ellipse(center, radii, rotation),
            Glyph::Quad(ref points) => self.quad(points),
            Glyph::Heart {
                center,
                rotation,
                scale,
            } => self.heart(center, rotation, scale),
        }

        self.ctx.close_path();
        self.ctx.fill();
        self.ctx.restore();
    }
}
