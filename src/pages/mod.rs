//! Route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. The game page's side effects run through
//! [`game_effects::GameDriver`].

pub mod game;
pub mod game_effects;
pub mod index;
