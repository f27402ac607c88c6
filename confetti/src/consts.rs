//! Shared constants for the confetti crate.

// ── Batch ───────────────────────────────────────────────────────

/// Particles spawned per launch.
pub const PARTICLE_COUNT: usize = 140;

/// Wall-clock ceiling for one celebration, in milliseconds.
pub const MAX_DURATION_MS: f64 = 5000.0;

/// Same ceiling as a timer delay for the hard-stop fallback.
pub const DEADLINE_TIMER_MS: u32 = 5000;

// ── Physics (per 60 Hz frame) ───────────────────────────────────

/// Nominal frame length that velocities are expressed against.
pub const FRAME_MS: f64 = 1000.0 / 60.0;

/// Longest frame step applied at once; larger gaps (background tabs) are capped.
pub const MAX_STEP_MS: f64 = 100.0;

/// Downward acceleration added to vertical velocity each frame.
pub const GRAVITY: f64 = 0.05;

// ── Spawn ranges ────────────────────────────────────────────────

pub const SIZE_RANGE: (f64, f64) = (6.0, 12.0);
pub const VX_RANGE: (f64, f64) = (-2.0, 2.0);
pub const VY_RANGE: (f64, f64) = (2.0, 5.0);
/// Angular velocity in degrees per frame.
pub const SPIN_RANGE: (f64, f64) = (-6.0, 6.0);
pub const OPACITY_RANGE: (f64, f64) = (0.7, 1.0);

/// Height/width ratio of the drawn paper strips.
pub const STRIP_ASPECT: f64 = 0.6;

pub const PALETTE: [&str; 6] = ["#f94144", "#f8961e", "#f9c74f", "#90be6d", "#43aa8b", "#577590"];
