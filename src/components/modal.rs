//! Generic Modal Component
//!
//! Overlay with a header and arbitrary body. Closes on Escape or on a
//! mousedown outside the content area. Listeners live for the lifetime of
//! the mounted modal and are removed on cleanup.

use leptos::ev;
use leptos::html::Div;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

#[component]
pub fn Modal(
    #[prop(into)] header: String,
    #[prop(into)] on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    let content_ref = NodeRef::<Div>::new();

    let escape = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            on_close.run(());
        }
    });

    let outside = window_event_listener(ev::mousedown, move |ev| {
        let Some(target) = ev.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok()) else {
            return;
        };
        // Ignore targets already detached from the document.
        let Some(body) = document().body() else {
            return;
        };
        if !body.contains(Some(&target)) {
            return;
        }
        if let Some(content) = content_ref.get_untracked() {
            if content.contains(Some(&target)) {
                return;
            }
        }
        on_close.run(());
    });

    on_cleanup(move || {
        escape.remove();
        outside.remove();
    });

    view! {
        <div class="modal modal_opened">
            <div class="modal__content" node_ref=content_ref>
                <div class="modal__header">{header}</div>
                <div class="modal__body">{children()}</div>
            </div>
        </div>
    }
}
