//! Networking modules for the game service.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the HTTP exchanges and `types` defines the wire schema and
//! response decoding shared with the state machine.

pub mod api;
pub mod types;
