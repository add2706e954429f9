//! # prepdeck
//!
//! Leptos + WASM frontend for a gated interview-prep topic browser.
//! Replaces the hand-written browser script with a Rust-native UI layer.
//!
//! This crate contains pages, components, application state, and browser
//! utilities. The session gate and the collapsible-outline state live under
//! [`state`]; the rendering layer reads that state and never owns visibility
//! itself.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point invoked by the loader after the SSR payload arrives.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
