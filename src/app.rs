//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::outline::OUTLINE_ELEMENT_IDS;
use crate::pages::{login::LoginPage, outline::OutlinePage};
use crate::state::outline::OutlineState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Binds the declared section table against the ids the outline page renders
/// (every bound target starts hidden), provides the shared state contexts,
/// and sets up client-side routing. The login view is routed at `login.html`
/// because that relative URL is the target of every gate redirect.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let mut outline_state = OutlineState::new();
    outline_state.bind_declared(&OUTLINE_ELEMENT_IDS[..]);

    let outline = RwSignal::new(outline_state);
    provide_context(outline);

    view! {
        <Stylesheet id="leptos" href="/pkg/prepdeck.css"/>
        <Title text="Prepdeck"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login.html") view=LoginPage/>
                <Route path=StaticSegment("") view=OutlinePage/>
            </Routes>
        </Router>
    }
}
