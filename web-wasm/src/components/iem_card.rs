//! Recommendation card

use leptos::prelude::*;
use iem_reco_common::{Aspect, CardView, ImageView, MatchTier, RatingView};

#[component]
pub fn IemCard(card: CardView) -> impl IntoView {
    let CardView {
        rank,
        name,
        brand,
        price,
        tuning,
        genre,
        image,
        tuning_image,
        ratings,
        driver_type,
        soundstage,
        match_score,
    } = card;
    let tier = match_score.tier();

    view! {
        <div class="col-md-4 mb-4">
            <div class="card iem-card h-100 shadow-sm">
                <div class="card-header rank-header text-white text-center py-2">
                    <h6 class="mb-0">{format!("Recommendation #{}", rank)}</h6>
                </div>

                <CardImage
                    image=image
                    img_class="card-img-top"
                    img_style="height: 200px; object-fit: cover;"
                />

                <div class="card-body">
                    <h5 class="card-title text-primary mb-1">{name}</h5>
                    <p class="text-muted mb-2">
                        <small><i class="bi bi-building"></i>" "{brand}</small>
                    </p>

                    <h4 class="text-success mb-3"><i class="bi bi-tag-fill"></i>" "{price}</h4>

                    <div class="mb-3">
                        <span class="badge rounded-pill tuning-badge">
                            <i class="bi bi-music-note-beamed"></i>" "{tuning}
                        </span>
                    </div>

                    <div class="mb-3 text-center">
                        <p class="mb-2"><small class="text-muted"><strong>"Tuning graph:"</strong></small></p>
                        <CardImage
                            image=tuning_image
                            img_class="img-fluid rounded border"
                            img_style="max-height: 180px; width: 100%; object-fit: contain; background: #f8f9fa;"
                        />
                    </div>

                    <div class="mb-3 p-2 bg-light rounded">
                        <small class="text-muted">
                            <i class="bi bi-disc"></i>" "<strong>"Genre:"</strong>" "{genre}
                        </small>
                    </div>

                    <div class="mb-3">
                        <p class="mb-2"><small><strong>"Sound signature:"</strong></small></p>
                        {ratings
                            .into_iter()
                            .map(|rating| view! { <RatingBar rating=rating /> })
                            .collect_view()}
                    </div>

                    <div class="border-top pt-3">
                        <small class="text-muted">
                            <i class="bi bi-speaker"></i>" "<strong>"Driver:"</strong>" "{driver_type}<br />
                            <i class="bi bi-soundwave"></i>" "<strong>"Soundstage:"</strong>" "{soundstage}<br />
                            <i class="bi bi-graph-up"></i>" "<strong>"Match Score:"</strong>" "
                            <span class=tier_badge_class(tier) data-tier=tier.as_str()>
                                {match_score.display()}
                            </span>
                        </small>
                    </div>
                </div>
            </div>
        </div>
    }
}

/// Image that swaps to its placeholder once when loading fails
#[component]
fn CardImage(image: ImageView, img_class: &'static str, img_style: &'static str) -> impl IntoView {
    let (src, set_src) = signal(image.src.clone());
    let alt = image.alt.clone();

    let on_error = move |_| {
        let failed = src.get_untracked();
        if let Some(next) = image.next_src(&failed) {
            set_src.set(next.to_string());
        }
    };

    view! {
        <img src=move || src.get() class=img_class style=img_style alt=alt on:error=on_error />
    }
}

#[component]
fn RatingBar(rating: RatingView) -> impl IntoView {
    let (text_class, badge_class, border_color) = palette(rating.aspect);
    let stars = rating.stars;

    view! {
        <div
            class="mb-2 p-2 border rounded rating-bar"
            data-aspect=rating.aspect.as_str()
            style=format!("border-color: {} !important; border-width: 2px !important;", border_color)
        >
            <div class="d-flex justify-content-between align-items-center">
                <span class=text_class>
                    <i class="bi bi-volume-up-fill"></i>" "<strong>{rating.aspect.label()}</strong>
                </span>
                <span class=badge_class>{rating.score_text()}</span>
            </div>
            <div class="mt-1">
                {(0..stars.filled)
                    .map(|_| view! { <i class=format!("bi bi-star-fill {}", text_class)></i> })
                    .collect_view()}
                {(0..stars.empty)
                    .map(|_| view! { <i class="bi bi-star text-muted"></i> })
                    .collect_view()}
            </div>
        </div>
    }
}

/// (text class, badge class, border colour) per aspect
fn palette(aspect: Aspect) -> (&'static str, &'static str, &'static str) {
    match aspect {
        Aspect::Bass => ("text-danger", "badge bg-danger", "#dc3545"),
        Aspect::Mid => ("text-warning", "badge bg-warning text-dark", "#ffc107"),
        Aspect::Treble => ("text-info", "badge bg-info text-dark", "#0dcaf0"),
    }
}

fn tier_badge_class(tier: MatchTier) -> &'static str {
    match tier {
        MatchTier::High => "badge bg-success",
        MatchTier::Medium => "badge bg-warning text-dark",
        MatchTier::Low => "badge bg-secondary",
    }
}
