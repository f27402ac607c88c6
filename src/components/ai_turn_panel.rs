//! The AI's guess, revealed one digit at a time.

use leptos::prelude::*;

use crate::state::digits::CODE_LENGTH;

#[component]
pub fn AiTurnPanel(
    #[prop(into)] digits: Signal<[Option<char>; CODE_LENGTH]>,
    #[prop(into)] visible: Signal<bool>,
    #[prop(into)] alert: Signal<Option<String>>,
) -> impl IntoView {
    let slots = (0..CODE_LENGTH)
        .map(|index| {
            let digit = move || digits.with(|d| d[index]);
            view! {
                <span class="ai-digit" class:ai-digit--shown=move || digit().is_some()>
                    {move || digit().map_or_else(|| "?".to_owned(), String::from)}
                </span>
            }
        })
        .collect_view();

    view! {
        <section class="ai-turn" prop:hidden=move || !visible.get()>
            <h2 class="ai-turn__title">"AI is guessing"</h2>
            <div class="ai-turn__digits">{slots}</div>
            <Show when=move || alert.with(Option::is_some)>
                <p class="ai-turn__alert" role="alert">{move || alert.get().unwrap_or_default()}</p>
            </Show>
        </section>
    }
}
