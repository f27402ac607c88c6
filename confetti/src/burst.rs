//! The batch of particles spawned by one launch.

#[cfg(test)]
#[path = "burst_test.rs"]
mod burst_test;

use rand::Rng;

use crate::consts::{FRAME_MS, MAX_STEP_MS, PARTICLE_COUNT};
use crate::particle::Particle;

/// Outcome of advancing a [`Burst`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// At least one particle is still on or above the surface.
    Continue,
    /// Every particle has fallen past the bottom edge.
    Done,
}

/// Particles sharing one surface size. Particles that fall below the bottom
/// edge are dropped; the burst is spent once none remain.
#[derive(Debug, Clone)]
pub struct Burst {
    particles: Vec<Particle>,
    width: f64,
    height: f64,
}

impl Burst {
    /// Spawn [`PARTICLE_COUNT`] particles above a `width` x `height` surface.
    pub fn launch<R: Rng + ?Sized>(rng: &mut R, width: f64, height: f64) -> Self {
        let particles = (0..PARTICLE_COUNT)
            .map(|_| Particle::spawn(rng, width, height))
            .collect();
        Self::from_particles(particles, width, height)
    }

    #[must_use]
    pub fn from_particles(particles: Vec<Particle>, width: f64, height: f64) -> Self {
        Self { particles, width, height }
    }

    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Advance every particle by `dt_ms` of wall-clock time and drop the ones
    /// that left the surface. Gaps longer than [`MAX_STEP_MS`] are capped so a
    /// throttled tab does not teleport the batch off screen.
    pub fn tick(&mut self, dt_ms: f64) -> Tick {
        let frames = dt_ms.clamp(0.0, MAX_STEP_MS) / FRAME_MS;
        let height = self.height;
        for particle in &mut self.particles {
            particle.step(frames);
        }
        self.particles.retain(|p| p.in_bounds(height));
        if self.particles.is_empty() { Tick::Done } else { Tick::Continue }
    }
}
