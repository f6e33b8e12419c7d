//! Error region
//!
//! Validation, server and connection failures all land here as plain text.

use leptos::html::Div;
use leptos::prelude::*;

#[component]
pub fn ErrorMessage(message: Signal<Option<String>>, anchor: NodeRef<Div>) -> impl IntoView {
    view! {
        <div
            id="errorMessage"
            class="alert alert-danger"
            role="alert"
            node_ref=anchor
            style:display=move || if message.with(|m| m.is_some()) { "block" } else { "none" }
        >
            {move || message.get().unwrap_or_default()}
        </div>
    }
}
