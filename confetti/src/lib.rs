//! Victory confetti for the Bulls & Cows client.
//!
//! Compiled to WebAssembly alongside the client. A one-shot batch of paper
//! particles falls across a full-viewport canvas under light gravity and is
//! torn down either when every particle has left the screen or when a fixed
//! wall-clock ceiling passes, whichever comes first.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`particle`] | A single particle and its per-frame physics |
//! | [`burst`] | The spawned batch and its bounds bookkeeping |
//! | [`celebration`] | Frame/deadline driver over a [`celebration::Surface`] |
//! | [`render`] | `Canvas2D` implementation of the surface |
//! | [`engine`] | `launch`/`stop` entry points wiring frames and the hard-stop timer |
//! | [`consts`] | Batch size, duration ceiling, physics and palette |

pub mod burst;
pub mod celebration;
pub mod consts;
pub mod engine;
pub mod particle;
pub mod render;

pub use engine::{launch, stop};
