//! Transient summary of the latest human guess.

use leptos::prelude::*;

use crate::state::game::FeedbackTier;
use crate::state::history::HistoryEntry;

#[component]
pub fn ResultOverlay(#[prop(into)] result: Signal<Option<HistoryEntry>>, #[prop(into)] visible: Signal<bool>) -> impl IntoView {
    let tier_class = move || {
        let tier = result.with(|r| r.as_ref().map_or(FeedbackTier::Default, |r| FeedbackTier::for_bulls(r.bulls)));
        format!("result {}", tier.css_class())
    };
    let headline = move || {
        result.with(|r| match r {
            Some(r) if FeedbackTier::for_bulls(r.bulls) == FeedbackTier::Exact => "Cracked it!".to_owned(),
            Some(r) => r.spaced_guess(),
            None => String::new(),
        })
    };
    let score = move || {
        result.with(|r| r.as_ref().map(|r| format!("{} Bulls, {} Cows", r.bulls, r.cows)).unwrap_or_default())
    };

    view! {
        <div class=tier_class prop:hidden=move || !visible.get() role="status" aria-live="polite">
            <p class="result__headline">{headline}</p>
            <p class="result__score">{score}</p>
        </div>
    }
}
