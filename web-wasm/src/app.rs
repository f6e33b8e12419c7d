//! Main application component

use leptos::ev::SubmitEvent;
use leptos::html::Div;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use iem_reco_common::{
    FormController, FormFields, RenderConfig, Resolution, Transport, ViewState,
};
use crate::api::FetchTransport;
use crate::components::{
    error_message::ErrorMessage,
    header::Header,
    loading_indicator::LoadingIndicator,
    recommendation_form::RecommendationForm,
    results_section::ResultsSection,
};

/// Main application component
#[component]
pub fn App() -> impl IntoView {
    // Controller state lives in one signal; the page regions derive from it
    let controller = RwSignal::new(FormController::new(RenderConfig::default()));
    let state = Memo::new(move |_| controller.with(|c| c.state().clone()));

    let (budget, set_budget) = signal(String::new());
    let (genre, set_genre) = signal(String::new());
    let (sound_character, set_sound_character) = signal(String::new());

    let is_loading = Signal::derive(move || state.with(ViewState::is_loading));
    let error = Signal::derive(move || state.with(|s| s.error_message().map(str::to_string)));
    let results = Signal::derive(move || state.with(|s| s.results().cloned()));

    let loading_ref = NodeRef::<Div>::new();
    let error_ref = NodeRef::<Div>::new();
    let results_ref = NodeRef::<Div>::new();

    // Bring the region that was just shown into view, repeats included
    let revision = Memo::new(move |_| controller.with(|c| c.revision()));
    Effect::new(move |_| {
        if revision.get() == 0 {
            return;
        }
        let target = state.with_untracked(|s| match s {
            ViewState::Idle => None,
            ViewState::Loading => Some((loading_ref, ScrollLogicalPosition::Center)),
            ViewState::Error(_) => Some((error_ref, ScrollLogicalPosition::Center)),
            ViewState::Results(_) => Some((results_ref, ScrollLogicalPosition::Start)),
        });
        if let Some((node, block)) = target {
            if let Some(el) = node.get_untracked() {
                scroll_into_view(&el, block);
            }
        }
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let fields = FormFields::new(
            budget.get_untracked(),
            genre.get_untracked(),
            sound_character.get_untracked(),
        );
        let Some(submission) = controller.try_update(|c| c.submit(&fields)).flatten() else {
            gloo::console::warn!("form incomplete, request not sent");
            return;
        };

        gloo::console::log!(format!(
            "POST /api/recommend (ticket {})",
            submission.ticket.id()
        ));

        spawn_local(async move {
            let outcome = FetchTransport::default().recommend(&submission.input).await;
            if let Err(e) = &outcome {
                gloo::console::error!(e.to_string());
            }

            let resolution = controller.try_update(|c| c.resolve(submission.ticket, outcome));
            if resolution == Some(Resolution::Stale) {
                gloo::console::log!(format!(
                    "discarded stale response (ticket {})",
                    submission.ticket.id()
                ));
            }
        });
    };

    view! {
        <div class="container py-4">
            <Header />

            <RecommendationForm
                budget=budget
                set_budget=set_budget
                genre=genre
                set_genre=set_genre
                sound_character=sound_character
                set_sound_character=set_sound_character
                is_loading=is_loading
                on_submit=on_submit
            />

            <LoadingIndicator visible=is_loading anchor=loading_ref />
            <ErrorMessage message=error anchor=error_ref />
            <ResultsSection results=results anchor=results_ref />
        </div>
    }
}

fn scroll_into_view(el: &web_sys::Element, block: ScrollLogicalPosition) {
    let opts = ScrollIntoViewOptions::new();
    opts.set_behavior(ScrollBehavior::Smooth);
    opts.set_block(block);
    el.scroll_into_view_with_scroll_into_view_options(&opts);
}

