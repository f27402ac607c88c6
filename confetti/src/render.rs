//! `Canvas2D` drawing surface.
//!
//! The only place in the crate that touches [`web_sys::CanvasRenderingContext2d`].
//! All fallible calls propagate via `Result<(), JsValue>`; the frame loop in
//! [`crate::engine`] logs and stops on failure.

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::celebration::Surface;
use crate::consts::STRIP_ASPECT;
use crate::particle::Particle;

pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    #[must_use]
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

impl Surface for CanvasSurface {
    type Error = JsValue;

    fn clear(&mut self, width: f64, height: f64) -> Result<(), JsValue> {
        self.ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)?;
        self.ctx.clear_rect(0.0, 0.0, width, height);
        Ok(())
    }

    /// Draw a rotated, semi-transparent strip centred on the particle.
    fn draw(&mut self, particle: &Particle) -> Result<(), JsValue> {
        let ctx = &self.ctx;
        let w = particle.size;
        let h = particle.size * STRIP_ASPECT;

        ctx.save();
        ctx.translate(particle.x, particle.y)?;
        ctx.rotate(particle.rotation_deg.to_radians())?;
        ctx.set_global_alpha(particle.opacity);
        ctx.set_fill_style_str(particle.color);
        ctx.fill_rect(-w * 0.5, -h * 0.5, w, h);
        ctx.restore();
        Ok(())
    }
}
