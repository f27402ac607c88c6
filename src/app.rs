//! Root application component with routing and the shared config context.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::ClientConfig;
use crate::pages::{game::GamePage, index::IndexPage};

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_document();
    log::debug!("api base: {:?}", config.api_base);
    provide_context(config);

    view! {
        <Title text="Bulls & Cows"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=IndexPage/>
                <Route path=StaticSegment("game") view=GamePage/>
            </Routes>
        </Router>
    }
}
