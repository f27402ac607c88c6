//! Bulls/cows entry for the AI's guess.

#[cfg(test)]
#[path = "feedback_form_test.rs"]
mod feedback_form_test;

use leptos::prelude::*;

use crate::state::digits::CODE_LENGTH;
use crate::state::game::FeedbackDraft;

#[derive(Clone, Copy)]
enum Field {
    Bulls,
    Cows,
}

impl Field {
    fn read(self, draft: FeedbackDraft) -> u8 {
        match self {
            Self::Bulls => draft.bulls,
            Self::Cows => draft.cows,
        }
    }

    fn write(self, draft: FeedbackDraft, value: u8) -> FeedbackDraft {
        match self {
            Self::Bulls => FeedbackDraft { bulls: value, ..draft },
            Self::Cows => FeedbackDraft { cows: value, ..draft },
        }
    }

    /// Apply a raw `<select>` value; `None` when it is not a count.
    fn edit(self, draft: FeedbackDraft, raw: &str) -> Option<FeedbackDraft> {
        match raw.parse::<u8>() {
            Ok(value) => Some(self.write(draft, value)),
            Err(e) => {
                log::debug!("ignoring feedback value {raw:?}: {e}");
                None
            }
        }
    }
}

#[component]
pub fn FeedbackForm(
    #[prop(into)] draft: Signal<FeedbackDraft>,
    #[prop(into)] enabled: Signal<bool>,
    #[prop(into)] visible: Signal<bool>,
    #[prop(into)] error: Signal<Option<String>>,
    on_edit: Callback<FeedbackDraft>,
    on_submit: Callback<()>,
) -> impl IntoView {
    let select = move |field: Field, label: &'static str| {
        let options = (0..=CODE_LENGTH)
            .map(|n| view! { <option value=n.to_string()>{n}</option> })
            .collect_view();
        view! {
            <label class="feedback__field">
                <span>{label}</span>
                <select
                    prop:value=move || field.read(draft.get()).to_string()
                    disabled=move || !enabled.get()
                    on:change=move |ev| {
                        if let Some(next) = field.edit(draft.get_untracked(), &event_target_value(&ev)) {
                            on_edit.run(next);
                        }
                    }
                >
                    {options}
                </select>
            </label>
        }
    };

    view! {
        <form
            class="feedback"
            prop:hidden=move || !visible.get()
            on:submit=move |ev: leptos::ev::SubmitEvent| {
                ev.prevent_default();
                if enabled.get_untracked() {
                    on_submit.run(());
                }
            }
        >
            {select(Field::Bulls, "Bulls")}
            {select(Field::Cows, "Cows")}
            <button class="feedback__submit" type="submit" disabled=move || !enabled.get()>
                "Send feedback"
            </button>
            <Show when=move || error.with(Option::is_some)>
                <p class="feedback__error" role="alert">{move || error.get().unwrap_or_default()}</p>
            </Show>
        </form>
    }
}
