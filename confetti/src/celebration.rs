//! Frame driver for one celebration.
//!
//! DESIGN
//! ======
//! `Celebration` owns a [`Burst`] and a wall-clock deadline but never touches
//! the DOM. Drawing goes through the [`Surface`] trait so the frame logic runs
//! natively under test with a recording surface, while the browser build
//! plugs in [`crate::render::CanvasSurface`].
//!
//! The clock starts on the first frame rather than at construction, matching
//! the timestamps `requestAnimationFrame` hands back.

#[cfg(test)]
#[path = "celebration_test.rs"]
mod celebration_test;

use crate::burst::{Burst, Tick};
use crate::consts::MAX_DURATION_MS;
use crate::particle::Particle;

/// Something particles can be drawn onto.
pub trait Surface {
    type Error;

    /// Erase the whole `width` x `height` area.
    ///
    /// # Errors
    ///
    /// Implementation-defined drawing failure.
    fn clear(&mut self, width: f64, height: f64) -> Result<(), Self::Error>;

    /// Draw one particle at its current position.
    ///
    /// # Errors
    ///
    /// Implementation-defined drawing failure.
    fn draw(&mut self, particle: &Particle) -> Result<(), Self::Error>;
}

/// Whether the caller should schedule another frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Continue,
    Done,
}

#[derive(Debug, Clone)]
pub struct Celebration {
    burst: Burst,
    started_ms: Option<f64>,
    last_frame_ms: Option<f64>,
    finished: bool,
}

impl Celebration {
    #[must_use]
    pub fn new(burst: Burst) -> Self {
        Self { burst, started_ms: None, last_frame_ms: None, finished: false }
    }

    #[must_use]
    pub fn burst(&self) -> &Burst {
        &self.burst
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Render one frame at `now_ms`.
    ///
    /// Clears the surface, advances the burst by the time since the previous
    /// frame and draws what remains. Once the burst is spent or
    /// [`MAX_DURATION_MS`] has passed since the first frame, the surface is
    /// left cleared and [`Step::Done`] is returned from then on.
    ///
    /// # Errors
    ///
    /// Propagates the first surface failure; the celebration is not marked
    /// finished in that case.
    pub fn frame<S: Surface>(&mut self, now_ms: f64, surface: &mut S) -> Result<Step, S::Error> {
        if self.finished {
            return Ok(Step::Done);
        }

        let started = *self.started_ms.get_or_insert(now_ms);
        if now_ms - started >= MAX_DURATION_MS {
            self.stop(surface)?;
            return Ok(Step::Done);
        }

        let dt_ms = self.last_frame_ms.map_or(0.0, |last| now_ms - last);
        self.last_frame_ms = Some(now_ms);

        let tick = self.burst.tick(dt_ms);
        surface.clear(self.burst.width(), self.burst.height())?;
        if tick == Tick::Done {
            self.finished = true;
            return Ok(Step::Done);
        }
        for particle in self.burst.particles() {
            surface.draw(particle)?;
        }
        Ok(Step::Continue)
    }

    /// End the celebration immediately and clear the surface.
    ///
    /// # Errors
    ///
    /// Propagates a surface failure from the final clear. The celebration is
    /// marked finished regardless.
    pub fn stop<S: Surface>(&mut self, surface: &mut S) -> Result<(), S::Error> {
        self.finished = true;
        surface.clear(self.burst.width(), self.burst.height())
    }
}
