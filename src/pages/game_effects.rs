//! Effect driver for the game page.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`GameState::handle`] is pure: it returns [`Effect`]s instead of touching
//! the network, timers or the DOM. `GameDriver` feeds events in and executes
//! what comes out, routing async results back in as further events.
//!
//! ERROR HANDLING
//! ==============
//! Responses and timers can fire after the page is gone. The state signal is
//! updated with `try_update`, so a disposed page drops the event and runs
//! nothing. DOM effects go through `util` helpers that no-op on missing
//! elements.

#[cfg(test)]
#[path = "game_effects_test.rs"]
mod game_effects_test;

use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::state::game::{Effect, GameEvent, GameState};

/// Container id of the human guess digit group.
pub const GUESS_INPUT_ID: &str = "guess-input";
/// Full-viewport canvas used by the win celebration.
pub const CELEBRATION_CANVAS_ID: &str = "celebration-canvas";

/// Owns the page's game signal and runs the effects its transitions emit.
#[derive(Clone)]
pub struct GameDriver {
    game: RwSignal<GameState>,
    config: ClientConfig,
}

impl GameDriver {
    #[must_use]
    pub fn new(game: RwSignal<GameState>, config: ClientConfig) -> Self {
        Self { game, config }
    }

    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Apply `event` and run every resulting effect in order.
    pub fn dispatch(&self, event: GameEvent) {
        let Some(effects) = self.game.try_update(|state| state.handle(event)) else {
            log::debug!("game page disposed; dropping event");
            return;
        };
        for effect in effects {
            self.run(effect);
        }
    }

    #[cfg(feature = "csr")]
    fn run(&self, effect: Effect) {
        use std::time::Duration;

        use crate::components::history_log::log_id;
        use crate::net::api;
        use crate::util::{digit_dom, scroll};

        let driver = self.clone();
        match effect {
            Effect::SubmitHumanGuess(request) => leptos::task::spawn_local(async move {
                let result = api::submit_human_guess(&driver.config, &request).await;
                driver.dispatch(GameEvent::GuessScored(result));
            }),
            Effect::RequestAiTurn => leptos::task::spawn_local(async move {
                let result = api::request_ai_turn(&driver.config).await;
                driver.dispatch(GameEvent::AiGuessReceived(result));
            }),
            Effect::SubmitAiFeedback(request) => leptos::task::spawn_local(async move {
                let result = api::submit_ai_feedback(&driver.config, &request).await;
                driver.dispatch(GameEvent::FeedbackScored(result));
            }),
            Effect::Schedule { after_ms, event } => leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(Duration::from_millis(u64::from(after_ms))).await;
                driver.dispatch(event);
            }),
            Effect::ClearGuessInput => digit_dom::clear(GUESS_INPUT_ID),
            Effect::FocusGuessInput => after_render(|| digit_dom::focus_first(GUESS_INPUT_ID)),
            Effect::RevealLatest(actor) => after_render(move || scroll::reveal_latest(log_id(actor))),
            Effect::LaunchCelebration => after_render(|| confetti::launch(CELEBRATION_CANVAS_ID)),
            Effect::Alert(message) => {
                if let Some(window) = web_sys::window() {
                    if let Err(e) = window.alert_with_message(&message) {
                        log::warn!("alert failed: {e:?}");
                    }
                }
            }
        }
    }

    #[cfg(not(feature = "csr"))]
    fn run(&self, effect: Effect) {
        log::debug!("skipping {effect:?} outside the browser");
    }
}

/// Run `f` once the pending signal updates have reached the DOM, so effects
/// that target a newly shown region find it.
#[cfg(feature = "csr")]
fn after_render(f: impl FnOnce() + 'static) {
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::ZERO).await;
        f();
    });
}
