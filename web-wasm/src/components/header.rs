//! Page header

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header text-center my-4">
            <h1><i class="bi bi-headphones"></i>" IEM Recommender"</h1>
            <p class="text-muted">"Find in-ear monitors that match your budget, music and sound"</p>
        </header>
    }
}
