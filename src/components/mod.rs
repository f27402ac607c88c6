//! Reusable UI components for the game screen.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render one region each and report user intent through
//! callbacks. None of them talk to the service or own game state; the game
//! page feeds them derived signals and routes their callbacks into the state
//! machine.

pub mod ai_turn_panel;
pub mod digit_input;
pub mod feedback_form;
pub mod history_log;
pub mod result_overlay;
pub mod win_panel;
