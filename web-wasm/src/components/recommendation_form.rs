//! Preference form: budget, genre and sound character

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use iem_reco_common::Field;

#[component]
pub fn RecommendationForm<F>(
    budget: ReadSignal<String>,
    set_budget: WriteSignal<String>,
    genre: ReadSignal<String>,
    set_genre: WriteSignal<String>,
    sound_character: ReadSignal<String>,
    set_sound_character: WriteSignal<String>,
    is_loading: Signal<bool>,
    on_submit: F,
) -> impl IntoView
where
    F: Fn(SubmitEvent) + 'static,
{
    view! {
        <form id="recommendationForm" class="card shadow-sm p-4 mb-4" on:submit=on_submit>
            <SelectField field=Field::Budget value=budget set_value=set_budget />
            <SelectField field=Field::Genre value=genre set_value=set_genre />
            <SelectField field=Field::SoundCharacter value=sound_character set_value=set_sound_character />

            <button type="submit" class="btn btn-primary btn-lg w-100" disabled=move || is_loading.get()>
                {move || if is_loading.get() { "Searching..." } else { "Get recommendations" }}
            </button>
        </form>
    }
}

#[component]
fn SelectField(
    field: Field,
    value: ReadSignal<String>,
    set_value: WriteSignal<String>,
) -> impl IntoView {
    let id = field.key();

    view! {
        <div class="mb-3">
            <label for=id class="form-label fw-bold">{field.label()}</label>
            <select
                id=id
                class="form-select"
                prop:value=move || value.get()
                on:change=move |ev| {
                    set_value.set(event_target_value(&ev));
                }
            >
                <option value="" disabled=true selected=move || value.get().is_empty()>
                    {format!("Choose {}", field.label().to_lowercase())}
                </option>
                {field
                    .options()
                    .iter()
                    .map(|opt| {
                        let v = opt.value;
                        view! {
                            <option value=v selected=move || value.get() == v>{opt.label}</option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}
