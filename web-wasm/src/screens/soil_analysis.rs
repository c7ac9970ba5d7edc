//! 土壌分析画面

use agri_assist_common::catalog::soil::{
    action_priority, field, SoilMetric, DEFAULT_FIELD, FIELDS, SOIL_PROFILES,
};
use leptos::prelude::*;

use crate::components::header::PageHeader;

#[component]
pub fn SoilAnalysis() -> impl IntoView {
    let (selected, set_selected) = signal::<&'static str>(DEFAULT_FIELD);
    let profile = move || SOIL_PROFILES.get(selected.get());

    let field_buttons = FIELDS
        .iter()
        .map(|f| {
            let id = f.id;
            view! {
                <button
                    class="field-button"
                    class:selected=move || selected.get() == id
                    on:click=move |_| set_selected.set(id)
                >
                    <p class="row-title">{f.name}</p>
                    <p class="text-muted text-small">{format!("{} • {}", f.area, f.crop)}</p>
                </button>
            }
        })
        .collect_view();

    let metrics = move || {
        let profile = profile();
        SoilMetric::RATED
            .iter()
            .map(|&metric| {
                let rating = profile.rating(metric);
                let (min, max) = metric.optimal_range();
                view! {
                    <div class="card metric-card">
                        <p class="stat-label">{metric.label()}</p>
                        <p class="stat-value">{profile.value(metric)}</p>
                        <p class="text-muted text-small">{format!("Optimal: {min}-{max}")}</p>
                        <span class=format!("rating-pill {}", rating.css_class())>{rating.as_str()}</span>
                    </div>
                }
            })
            .collect_view()
    };

    let conditions = move || {
        let p = profile();
        [
            ("Organic Matter", format!("{}%", p.organic_matter)),
            ("Moisture", format!("{}%", p.moisture)),
            ("Temperature", format!("{}°C", p.temperature)),
            ("Conductivity", format!("{} dS/m", p.conductivity)),
        ]
        .into_iter()
        .map(|(label, value)| view! {
            <div class="list-row row-head">
                <span class="text-muted">{label}</span>
                <span class="row-title">{value}</span>
            </div>
        })
        .collect_view()
    };

    let recommendations = move || {
        profile()
            .recommendations
            .iter()
            .map(|r| view! { <li>{*r}</li> })
            .collect_view()
    };

    let actions = move || {
        profile()
            .actions
            .iter()
            .enumerate()
            .map(|(i, action)| {
                let priority = action_priority(i);
                view! {
                    <div class="list-row row-head">
                        <span>{*action}</span>
                        <span class=format!("priority-pill priority-{}", priority.to_lowercase())>
                            {priority}
                        </span>
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <div class="screen">
            <PageHeader
                title="Soil Analysis"
                subtitle="Monitor soil health and get fertilization recommendations"
                badge="Sensors Online"
            />

            <section class="card">
                <h2>"Select Field"</h2>
                <div class="grid-3">{field_buttons}</div>
            </section>

            <h2 class="section-title">{move || format!("{} Soil Metrics", field(selected.get()).name)}</h2>
            <div class="grid-4">{metrics}</div>

            <div class="grid-2">
                <section class="card">
                    <h2>"Soil Conditions"</h2>
                    {conditions}
                </section>
                <section class="card">
                    <h2>"Recommendations"</h2>
                    <ul class="bullet-list">{recommendations}</ul>
                </section>
            </div>

            <div class="grid-2">
                <section class="card">
                    <h2>"Recommended Actions"</h2>
                    {actions}
                </section>
                <section class="card">
                    <h2>"Soil Health Trends"</h2>
                    <div class="chart-placeholder">
                        <p class="text-muted">"Historical trend charts will appear here"</p>
                    </div>
                </section>
            </div>
        </div>
    }
}
