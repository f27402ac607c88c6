//! Game screen: the human's guess panel, the AI's turn, both history logs and
//! the win banner.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page holds a single `RwSignal<GameState>`. User intent becomes a
//! [`GameEvent`] sent through [`GameDriver::dispatch`]; every region reads its
//! visibility and content from the current [`GamePhase`]. Only the region for
//! the active phase is shown, the others stay mounted but hidden so the guess
//! cells keep their DOM state.
//!
//! On load the page asks the service for the session summary and replays it,
//! so a refresh mid-game restores the logs and whose turn it is.

use leptos::prelude::*;

use crate::components::ai_turn_panel::AiTurnPanel;
use crate::components::digit_input::DigitInput;
use crate::components::feedback_form::FeedbackForm;
use crate::components::history_log::HistoryLog;
use crate::components::result_overlay::ResultOverlay;
use crate::components::win_panel::WinPanel;
use crate::config::ClientConfig;
use crate::pages::game_effects::{CELEBRATION_CANVAS_ID, GUESS_INPUT_ID, GameDriver};
use crate::state::game::{Actor, FeedbackDraft, GameEvent, GamePhase, GameState};
use crate::util::digit_dom;

#[component]
pub fn GamePage() -> impl IntoView {
    let config = use_context::<ClientConfig>().unwrap_or_default();
    let game = RwSignal::new(GameState::new(config.timing));
    let driver = GameDriver::new(game, config);

    #[cfg(feature = "csr")]
    {
        let driver = driver.clone();
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_summary(driver.config()).await {
                Ok(summary) => driver.dispatch(GameEvent::SummaryLoaded(summary)),
                Err(e) => log::info!("no session summary to resume: {e}"),
            }
        });
        on_cleanup(confetti::stop);
    }

    let phase_is = move |wanted: fn(&GamePhase) -> bool| Signal::derive(move || game.with(|g| wanted(g.phase())));

    let on_guess = Callback::new({
        let driver = driver.clone();
        move |()| {
            let guess = digit_dom::read(GUESS_INPUT_ID);
            driver.dispatch(GameEvent::GuessSubmitted { guess });
        }
    });
    let on_feedback_edit = Callback::new({
        let driver = driver.clone();
        move |draft: FeedbackDraft| driver.dispatch(GameEvent::FeedbackEdited(draft))
    });
    let on_feedback_submit = Callback::new({
        let driver = driver.clone();
        move |()| driver.dispatch(GameEvent::FeedbackSubmitted)
    });
    let on_new_game = Callback::new({
        let driver = driver.clone();
        move |()| reset_and_leave(driver.config())
    });

    let can_guess = Signal::derive(move || game.with(GameState::can_submit_guess));
    let guess_error = Signal::derive(move || game.with(|g| g.guess_error().map(str::to_owned)));
    let human_turn = phase_is(|p| *p == GamePhase::HumanTurnInput);
    let showing_result = phase_is(|p| *p == GamePhase::ResultDisplay);
    let ai_visible = phase_is(|p| matches!(p, GamePhase::AiTurnDisplay | GamePhase::AiFeedbackInput));
    let feedback_visible = phase_is(|p| *p == GamePhase::AiFeedbackInput);

    view! {
        <main class="game">
            <header class="game__header">
                <h1>"Bulls & Cows"</h1>
                <button class="game__reset" type="button" on:click=move |_| on_new_game.run(())>
                    "New game"
                </button>
            </header>

            <section class="guess" prop:hidden=move || !human_turn.get()>
                <h2 class="guess__title">"Your turn: guess the AI's code"</h2>
                <div class="guess__form">
                    <DigitInput id=GUESS_INPUT_ID enabled=can_guess on_confirm=on_guess/>
                    <button
                        class="guess__submit"
                        type="button"
                        disabled=move || !can_guess.get()
                        on:click=move |_| on_guess.run(())
                    >
                        "Guess"
                    </button>
                </div>
                <Show when=move || guess_error.with(Option::is_some)>
                    <p class="guess__error" role="alert">{move || guess_error.get().unwrap_or_default()}</p>
                </Show>
            </section>

            <ResultOverlay
                result=Signal::derive(move || game.with(|g| g.last_result().cloned()))
                visible=showing_result
            />

            <AiTurnPanel
                digits=Signal::derive(move || game.with(GameState::revealed_ai_digits))
                visible=ai_visible
                alert=Signal::derive(move || game.with(|g| g.alert().map(str::to_owned)))
            />

            <FeedbackForm
                draft=Signal::derive(move || game.with(GameState::feedback))
                enabled=Signal::derive(move || game.with(GameState::can_submit_feedback))
                visible=feedback_visible
                error=Signal::derive(move || game.with(|g| g.feedback_error().map(str::to_owned)))
                on_edit=on_feedback_edit
                on_submit=on_feedback_submit
            />

            <WinPanel
                outcome=Signal::derive(move || {
                    game.with(|g| match g.phase() {
                        GamePhase::GameWon { winner, secret } => Some((*winner, secret.clone())),
                        _ => None,
                    })
                })
                on_new_game=on_new_game
            />

            <div class="game__logs">
                <HistoryLog
                    actor=Actor::Human
                    entries=Signal::derive(move || game.with(|g| g.history(Actor::Human).entries().to_vec()))
                />
                <HistoryLog
                    actor=Actor::Ai
                    entries=Signal::derive(move || game.with(|g| g.history(Actor::Ai).entries().to_vec()))
                />
            </div>

            <canvas id=CELEBRATION_CANVAS_ID class="celebration" aria-hidden="true"></canvas>
        </main>
    }
}

/// Fire-and-forget reset, then back to the entry screen whatever the outcome.
fn reset_and_leave(config: &ClientConfig) {
    #[cfg(feature = "csr")]
    {
        let config = config.clone();
        leptos::task::spawn_local(async move {
            crate::net::api::reset_game(&config).await;
            if let Some(window) = web_sys::window() {
                if let Err(e) = window.location().set_href("/") {
                    log::warn!("navigation to / failed: {e:?}");
                }
            }
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = config;
    }
}
