//! Collapsible outline section bound to one trigger/target pair.

use leptos::prelude::*;

use crate::state::outline::OutlineState;

/// One collapsible section: a trigger button and the section body it toggles.
///
/// Renders the trigger and target with their declared element ids and keeps
/// the body collapsed while the shared [`OutlineState`] says the target is
/// hidden. The component never owns visibility; it reads and reports.
#[component]
pub fn TopicSection(
    /// Element id of the toggle button.
    trigger_id: &'static str,
    /// Element id of the section body.
    target_id: &'static str,
    /// Button caption.
    label: &'static str,
    children: Children,
) -> impl IntoView {
    let outline = expect_context::<RwSignal<OutlineState>>();

    let visible = move || outline.get().is_visible(target_id);
    let on_toggle = move |_| {
        outline.update(|o| o.activate(trigger_id));
    };

    view! {
        <section class="topic-section">
            <button id=trigger_id class="topic-section__trigger" on:click=on_toggle>
                {label}
                <span class="topic-section__chevron">
                    {move || if visible() { "\u{25BE}" } else { "\u{25B8}" }}
                </span>
            </button>
            <div
                id=target_id
                class="topic-section__body"
                class:topic-section__body--hidden=move || !visible()
            >
                {children()}
            </div>
        </section>
    }
}
