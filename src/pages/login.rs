//! Login page that records the session flag and returns to the outline.
//!
//! There is no credential check here: the flag is client-settable and
//! provides no security, it only drives the gate on the outline page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionGate;
use crate::util::storage::BrowserStore;

/// Login page — signing in sets the session flag and navigates to the
/// topic outline.
#[component]
pub fn LoginPage() -> impl IntoView {
    let navigate = use_navigate();

    let on_sign_in = move |_| {
        let gate = SessionGate::new(BrowserStore);
        gate.login();
        navigate("/", NavigateOptions::default());
    };

    view! {
        <div class="login-page">
            <h1>"Prepdeck"</h1>
            <p>"Interview prep, one topic at a time"</p>
            <button class="login-button" on:click=on_sign_in>
                "Sign in"
            </button>
        </div>
    }
}
