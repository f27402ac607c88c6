//! Segmented four-digit input.
//!
//! DESIGN
//! ======
//! Each cell forwards its events to [`crate::util::digit_dom::apply`], which
//! runs the matching [`DigitGroup`](crate::state::digits::DigitGroup)
//! transition against the values currently on the page. The component itself
//! keeps no signals for the cell contents.

use leptos::prelude::*;

use crate::state::digits::CODE_LENGTH;
#[cfg(feature = "csr")]
use crate::state::digits::{CellKey, CellOutcome};
#[cfg(feature = "csr")]
use crate::util::digit_dom;

/// Four single-digit cells inside a container with id `id`.
///
/// `on_confirm` runs when Enter is pressed in the last cell while `enabled`
/// is true.
#[component]
pub fn DigitInput(
    #[prop(into)] id: String,
    #[prop(into)] enabled: Signal<bool>,
    on_confirm: Callback<()>,
    #[prop(optional, into)] label: Option<String>,
) -> impl IntoView {
    let label = label.unwrap_or_else(|| "Four digit code".to_owned());
    let cells = (0..CODE_LENGTH)
        .map(|index| view! { <DigitCell group_id=id.clone() index=index enabled=enabled on_confirm=on_confirm/> })
        .collect_view();

    view! {
        <div id=id.clone() class="digit-input" role="group" aria-label=label>
            {cells}
        </div>
    }
}

#[component]
fn DigitCell(group_id: String, index: usize, enabled: Signal<bool>, on_confirm: Callback<()>) -> impl IntoView {
    let aria_label = format!("Digit {}", index + 1);

    #[cfg(feature = "csr")]
    let on_input = {
        let group_id = group_id.clone();
        move |ev: leptos::ev::Event| {
            let raw = event_target_value(&ev);
            digit_dom::apply(&group_id, index, |group| group.input(index, &raw));
        }
    };
    #[cfg(not(feature = "csr"))]
    let on_input = move |_ev: leptos::ev::Event| {};

    #[cfg(feature = "csr")]
    let on_keydown = {
        let group_id = group_id.clone();
        move |ev: leptos::ev::KeyboardEvent| {
            let key = CellKey::from_browser(&ev.key(), ev.ctrl_key() || ev.meta_key() || ev.alt_key());
            let outcome = digit_dom::apply(&group_id, index, |group| group.key_down(index, key));
            finish(&ev, outcome, enabled, on_confirm);
        }
    };
    #[cfg(not(feature = "csr"))]
    let on_keydown = move |_ev: leptos::ev::KeyboardEvent| {
        let _ = (enabled, on_confirm);
    };

    #[cfg(feature = "csr")]
    let on_paste = {
        let group_id = group_id.clone();
        move |ev: leptos::ev::ClipboardEvent| {
            let text = match ev.clipboard_data().map(|data| data.get_data("text")) {
                Some(Ok(text)) => text,
                Some(Err(e)) => {
                    log::debug!("paste without readable text: {e:?}");
                    String::new()
                }
                None => String::new(),
            };
            let outcome = digit_dom::apply(&group_id, index, |group| group.paste(&text));
            finish(&ev, outcome, enabled, on_confirm);
        }
    };
    #[cfg(not(feature = "csr"))]
    let on_paste = move |_ev: leptos::ev::ClipboardEvent| {};

    let on_click = move |ev: leptos::ev::MouseEvent| {
        #[cfg(feature = "csr")]
        event_target::<web_sys::HtmlInputElement>(&ev).select();
        #[cfg(not(feature = "csr"))]
        let _ = ev;
    };

    view! {
        <input
            class="digit-cell"
            type="text"
            inputmode="numeric"
            autocomplete="off"
            aria-label=aria_label
            data-group=group_id
            on:input=on_input
            on:keydown=on_keydown
            on:paste=on_paste
            on:click=on_click
        />
    }
}

#[cfg(feature = "csr")]
fn finish(ev: &web_sys::Event, outcome: CellOutcome, enabled: Signal<bool>, on_confirm: Callback<()>) {
    if outcome.prevent_default {
        ev.prevent_default();
    }
    if outcome.submit && enabled.get_untracked() {
        on_confirm.run(());
    }
}
