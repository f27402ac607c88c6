//! Per-player history of scored rounds.

#[cfg(test)]
#[path = "history_log_test.rs"]
mod history_log_test;

use leptos::prelude::*;

use crate::state::game::Actor;
use crate::state::history::HistoryEntry;

pub const HUMAN_LOG_ID: &str = "human-history";
pub const AI_LOG_ID: &str = "ai-history";

/// Element id of the row list for `actor`'s log.
#[must_use]
pub fn log_id(actor: Actor) -> &'static str {
    match actor {
        Actor::Human => HUMAN_LOG_ID,
        Actor::Ai => AI_LOG_ID,
    }
}

/// Text of one rendered row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HistoryRow {
    Placeholder,
    Round { guess: String, bulls: String, cows: String },
}

/// Rows for `entries`: a single placeholder until the first round lands.
#[must_use]
pub fn history_rows(entries: &[HistoryEntry]) -> Vec<HistoryRow> {
    if entries.is_empty() {
        return vec![HistoryRow::Placeholder];
    }
    entries
        .iter()
        .map(|entry| HistoryRow::Round {
            guess: entry.spaced_guess(),
            bulls: format!("{} B", entry.bulls),
            cows: format!("{} C", entry.cows),
        })
        .collect()
}

/// Append-only list of rounds; shows a placeholder row until the first entry.
#[component]
pub fn HistoryLog(actor: Actor, #[prop(into)] entries: Signal<Vec<HistoryEntry>>) -> impl IntoView {
    let title = match actor {
        Actor::Human => "Your guesses",
        Actor::Ai => "AI guesses",
    };

    view! {
        <section class="history">
            <h2 class="history__title">{title}</h2>
            <ol id=log_id(actor) class="history__rows">
                {move || {
                    entries
                        .with(|entries| history_rows(entries))
                        .into_iter()
                        .map(|row| match row {
                            HistoryRow::Placeholder => {
                                view! { <li class="history__row history__row--empty">"No guesses yet"</li> }.into_any()
                            }
                            HistoryRow::Round { guess, bulls, cows } => view! {
                                <li class="history__row">
                                    <span class="history__guess">{guess}</span>
                                    <span class="history__bulls">{bulls}</span>
                                    <span class="history__cows">{cows}</span>
                                </li>
                            }
                            .into_any(),
                        })
                        .collect_view()
                }}
            </ol>
        </section>
    }
}
