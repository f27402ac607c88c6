//! A single confetti particle and its per-frame physics.

#[cfg(test)]
#[path = "particle_test.rs"]
mod particle_test;

use rand::Rng;

use crate::consts::{GRAVITY, OPACITY_RANGE, PALETTE, SIZE_RANGE, SPIN_RANGE, VX_RANGE, VY_RANGE};

/// A paper strip in screen space. Positions are CSS pixels, velocities are
/// pixels per nominal frame, angles are degrees.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    /// Strip width; the drawn height is a fixed fraction of it.
    pub size: f64,
    pub color: &'static str,
    pub rotation_deg: f64,
    pub spin_deg: f64,
    pub opacity: f64,
}

impl Particle {
    /// Spawn a particle somewhere above the visible area of a `width` x `height` surface.
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, width: f64, height: f64) -> Self {
        let size = between(rng, SIZE_RANGE);
        Self {
            x: rng.random_range(0.0..=width.max(0.0)),
            y: -size - rng.random_range(0.0..=height.max(0.0)),
            vx: between(rng, VX_RANGE),
            vy: between(rng, VY_RANGE),
            size,
            color: PALETTE[rng.random_range(0..PALETTE.len())],
            rotation_deg: rng.random_range(0.0..=360.0),
            spin_deg: between(rng, SPIN_RANGE),
            opacity: between(rng, OPACITY_RANGE),
        }
    }

    /// Advance by `frames` nominal frames (fractional steps allowed).
    pub fn step(&mut self, frames: f64) {
        self.x += self.vx * frames;
        self.y += self.vy * frames;
        self.vy += GRAVITY * frames;
        self.rotation_deg = (self.rotation_deg + self.spin_deg * frames).rem_euclid(360.0);
    }

    /// Whether the particle has not yet fallen past the bottom of a surface of `height`.
    #[must_use]
    pub fn in_bounds(&self, height: f64) -> bool {
        self.y <= height
    }
}

fn between<R: Rng + ?Sized>(rng: &mut R, (lo, hi): (f64, f64)) -> f64 {
    rng.random_range(lo..=hi)
}
