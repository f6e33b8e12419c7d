//! Results: preference summary and recommendation cards

use leptos::html::Div;
use leptos::prelude::*;
use iem_reco_common::{ResultsView, SummaryView};
use crate::components::iem_card::IemCard;

/// Rebuilt from scratch every time `results` changes
#[component]
pub fn ResultsSection(results: Signal<Option<ResultsView>>, anchor: NodeRef<Div>) -> impl IntoView {
    view! {
        <div
            id="resultsSection"
            node_ref=anchor
            style:display=move || if results.with(|r| r.is_some()) { "block" } else { "none" }
        >
            {move || {
                results.get().map(|results_view| {
                    let ResultsView { summary, cards } = results_view;
                    view! {
                        <Summary summary=summary />
                        <div id="recommendationResults" class="row">
                            {cards
                                .into_iter()
                                .map(|card| view! { <IemCard card=card /> })
                                .collect_view()}
                        </div>
                    }
                })
            }}
        </div>
    }
}

#[component]
fn Summary(summary: SummaryView) -> impl IntoView {
    view! {
        <div id="userInputSummary" class="alert alert-info">
            <h5><i class="bi bi-info-circle"></i>" Your preferences:"</h5>
            <ul class="mb-0">
                {summary
                    .entries
                    .into_iter()
                    .map(|entry| view! {
                        <li><strong>{format!("{}:", entry.label)}</strong>" "{entry.value}</li>
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}
