//! Entry screen: rules and the start button.

use leptos::prelude::*;

use crate::config::ClientConfig;

#[component]
pub fn IndexPage() -> impl IntoView {
    let config = use_context::<ClientConfig>().unwrap_or_default();
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let on_start = move |_| {
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        error.set(None);

        #[cfg(feature = "csr")]
        {
            let config = config.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::start_game(&config).await {
                    Ok(started) => {
                        if let Some(window) = web_sys::window() {
                            if let Err(e) = window.location().set_href(&started.redirect) {
                                log::warn!("navigation to {} failed: {e:?}", started.redirect);
                            }
                        }
                    }
                    Err(e) => {
                        log::warn!("start failed: {e}");
                        error.set(Some(e.user_message()));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = &config;
        }
    };

    view! {
        <main class="entry">
            <h1 class="entry__title">"Bulls & Cows"</h1>
            <section class="entry__rules">
                <p>"You and the AI each hold a secret 4-digit code. Take turns guessing the other's."</p>
                <ul>
                    <li>"A bull is a right digit in the right place."</li>
                    <li>"A cow is a right digit in the wrong place."</li>
                    <li>"When the AI guesses, you score its guess honestly."</li>
                </ul>
                <p>"First to 4 bulls wins."</p>
            </section>
            <button class="entry__start" type="button" on:click=on_start disabled=move || busy.get()>
                {move || if busy.get() { "Starting..." } else { "Start game" }}
            </button>
            <Show when=move || error.with(Option::is_some)>
                <p class="entry__error" role="alert">{move || error.get().unwrap_or_default()}</p>
            </Show>
        </main>
    }
}
