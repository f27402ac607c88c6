//! # bulls-cows-client
//!
//! Leptos + WASM client for a Bulls & Cows match between a human and an AI
//! opponent. The game server holds the secrets and scores every guess; this
//! crate captures input, drives the turn protocol and renders the result.
//!
//! | Module | Role |
//! |--------|------|
//! | [`state`] | Pure models: digit group, history logs, turn state machine |
//! | [`net`] | Service DTOs, response decoding and HTTP calls |
//! | [`pages`] | Entry and game screens plus the effect driver |
//! | [`components`] | Per-region views fed by derived signals |
//! | [`util`] | DOM helpers addressed by element id |
//! | [`config`] | API base and presentation timings |
//!
//! The win celebration lives in the sibling `confetti` crate.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(config::ClientConfig::log_level()) {
        web_sys::console::warn_1(&format!("console logger unavailable: {e}").into());
    }
    leptos::mount::mount_to_body(app::App);
}
