//! Loading indicator

use leptos::html::Div;
use leptos::prelude::*;

#[component]
pub fn LoadingIndicator(visible: Signal<bool>, anchor: NodeRef<Div>) -> impl IntoView {
    view! {
        <div
            id="loading"
            class="loading text-center my-4"
            node_ref=anchor
            style:display=move || if visible.get() { "block" } else { "none" }
        >
            <div class="spinner-border text-primary" role="status"></div>
            <p class="mt-2 text-muted">"Finding the best IEMs for you..."</p>
        </div>
    }
}
