//! End-of-game banner.

use leptos::prelude::*;

use crate::state::game::Actor;

/// Winner and the opponent's revealed secret. Hidden while `outcome` is `None`.
#[component]
pub fn WinPanel(#[prop(into)] outcome: Signal<Option<(Actor, String)>>, on_new_game: Callback<()>) -> impl IntoView {
    let headline = move || {
        outcome.with(|o| match o {
            Some((Actor::Human, _)) => "You win!",
            Some((Actor::Ai, _)) => "The AI wins.",
            None => "",
        })
    };
    let reveal = move || {
        outcome.with(|o| match o {
            Some((Actor::Human, secret)) => format!("The AI's secret was {secret}"),
            Some((Actor::Ai, secret)) => format!("It found your secret: {secret}"),
            None => String::new(),
        })
    };

    view! {
        <section class="win" prop:hidden=move || outcome.with(Option::is_none)>
            <h2 class="win__headline">{headline}</h2>
            <p class="win__secret">{reveal}</p>
            <button class="win__again" type="button" on:click=move |_| on_new_game.run(())>
                "Play again"
            </button>
        </section>
    }
}
