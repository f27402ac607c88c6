//! Client-side game state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything here is plain data plus transitions: the digit-group model, the
//! per-player history logs, and the turn state machine. Pages hold these in
//! Leptos signals and run the effects the machine returns.

pub mod digits;
pub mod game;
pub mod history;
