//! 作物推奨画面

use agri_assist_common::catalog::crops::{
    self, DEFAULT_SEASON, FARM, MARKET, RECOMMENDATIONS, SEASONS,
};
use leptos::prelude::*;

use crate::components::header::PageHeader;
use crate::components::progress_bar::ProgressBar;

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn recommendation_card(crop: &'static crops::CropRecommendation) -> impl IntoView {
    let rating = crop.suitability_rating();
    let reasons = crop
        .reasons
        .iter()
        .map(|r| view! { <li>{*r}</li> })
        .collect_view();
    let details = [
        ("Expected Yield", crop.expected_yield),
        ("Growth Period", crop.growth_period),
        ("Water Need", crop.water_requirement),
        ("Profitability", crop.profitability),
        ("Difficulty", crop.difficulty),
    ]
    .into_iter()
    .map(|(label, value)| view! {
        <div>
            <p class="text-muted text-small">{label}</p>
            <p class="row-title">{value}</p>
        </div>
    })
    .collect_view();
    let req = crop.requirements;

    view! {
        <article class="card crop-card">
            <div class="row-head">
                <h3>{crop.name}</h3>
                <span class=format!("rating-pill {}", rating.css_class())>{rating.as_str()}</span>
            </div>
            <p class="text-muted text-small">"Suitability"</p>
            <ProgressBar percent=crop.suitability tone=rating.css_class() />
            <div class="grid-3">{details}</div>
            <h4>"Why this crop?"</h4>
            <ul class="bullet-list">{reasons}</ul>
            <h4>"Growing Requirements"</h4>
            <div class="grid-2 text-small">
                <p>{format!("🌡️ {}", req.temperature)}</p>
                <p>{format!("💧 {}", req.humidity)}</p>
                <p>{format!("🌧️ {}", req.rainfall)}</p>
                <p>{format!("🌱 {}", req.soil)}</p>
            </div>
        </article>
    }
}

#[component]
pub fn CropRecommendation() -> impl IntoView {
    let (season, set_season) = signal::<&'static str>(DEFAULT_SEASON);

    let conditions = [
        ("Location", FARM.location),
        ("Soil Type", FARM.soil_type),
        ("Avg. Temperature", FARM.average_temp),
        ("Annual Rainfall", FARM.annual_rainfall),
        ("Field Size", FARM.field_size),
        ("Irrigation", FARM.irrigation),
    ]
    .into_iter()
    .map(|(label, value)| view! {
        <div>
            <p class="text-muted text-small">{label}</p>
            <p class="row-title">{value}</p>
        </div>
    })
    .collect_view();

    let season_buttons = SEASONS
        .iter()
        .map(|&s| view! {
            <button
                class="toggle-button"
                class:selected=move || season.get() == s
                on:click=move |_| set_season.set(s)
            >
                {capitalize(s)}
            </button>
        })
        .collect_view();

    let recommendations = move || {
        RECOMMENDATIONS
            .get(season.get())
            .iter()
            .map(recommendation_card)
            .collect_view()
    };

    let market = MARKET
        .iter()
        .map(|m| view! {
            <div class="card stat-card">
                <p class="stat-label">{m.title}</p>
                <p class="stat-value">{m.value}</p>
                <p class="stat-change">{m.note}</p>
            </div>
        })
        .collect_view();

    view! {
        <div class="screen">
            <PageHeader
                title="Crop Recommendations"
                subtitle="AI-powered suggestions based on your farm conditions"
                badge="Updated Today"
            />

            <section class="card">
                <h2>"Farm Conditions"</h2>
                <div class="grid-3">{conditions}</div>
            </section>

            <section class="card">
                <div class="row-head">
                    <h2>"Planting Season"</h2>
                    <div class="toggle-group">{season_buttons}</div>
                </div>
            </section>

            <div class="grid-3">{recommendations}</div>

            <section class="card">
                <h2>"Market Insights"</h2>
                <div class="grid-3">{market}</div>
            </section>
        </div>
    }
}
