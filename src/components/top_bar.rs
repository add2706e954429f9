//! Top bar with the app title and logout button.

use leptos::prelude::*;

use crate::state::session::{LOGIN_URL, SessionGate};
use crate::util::navigate;
use crate::util::storage::BrowserStore;

/// Header for the gated outline page.
///
/// Logout clears the session flag, then performs a full-page navigation to
/// the login view so the next load of any gated page redirects.
#[component]
pub fn TopBar() -> impl IntoView {
    let on_logout = move |_| {
        let gate = SessionGate::new(BrowserStore);
        gate.logout();
        navigate::redirect(LOGIN_URL);
    };

    view! {
        <header class="top-bar">
            <span class="top-bar__title">"Prepdeck"</span>
            <span class="top-bar__spacer"></span>
            <button class="btn top-bar__logout" on:click=on_logout>
                "Logout"
            </button>
        </header>
    }
}
