//! データ分析画面

use agri_assist_common::catalog::insights::{
    recent_performance, Trend, BEST_PERFORMING, DEFAULT_METRIC, DEFAULT_PERIOD, FARM_STATS,
    METRICS, PERIODS, PREDICTIONS, RECENT_ACTIVITIES, TARGET_ACHIEVEMENT,
};
use leptos::prelude::*;

use crate::components::header::PageHeader;

fn trend_class(trend: Trend) -> &'static str {
    match trend {
        Trend::Up => "trend-up",
        Trend::Down => "trend-down",
    }
}

#[component]
pub fn DataInsights() -> impl IntoView {
    let (metric, set_metric) = signal::<&'static str>(DEFAULT_METRIC);
    let (period, set_period) = signal::<&'static str>(DEFAULT_PERIOD);

    let stats = FARM_STATS
        .iter()
        .map(|stat| view! {
            <div class="card stat-card">
                <p class="stat-label">{stat.label}</p>
                <p class="stat-value">{stat.value}</p>
            </div>
        })
        .collect_view();

    let metric_buttons = METRICS
        .keys()
        .map(|key| {
            let insight = METRICS.get(key);
            view! {
                <button
                    class="metric-button"
                    class:selected=move || metric.get() == key
                    on:click=move |_| set_metric.set(key)
                >
                    <p class="text-muted text-small">{insight.label}</p>
                    <p class="stat-value">{insight.current}</p>
                    <p class=trend_class(insight.trend)>{insight.change}</p>
                </button>
            }
        })
        .collect_view();

    let period_options = PERIODS
        .keys()
        .map(|key| {
            let option = PERIODS.get(key);
            view! {
                <option value=option.id selected=move || period.get() == option.id>
                    {option.label}
                </option>
            }
        })
        .collect_view();

    let detail = move || {
        let insight = METRICS.get(metric.get());
        let recommendations = insight
            .recommendations
            .iter()
            .map(|r| view! { <li>{*r}</li> })
            .collect_view();
        view! {
            <div class="row-head">
                <h2>{insight.label}</h2>
                <span class=trend_class(insight.trend)>{insight.change}</span>
            </div>
            <p class="text-muted">{insight.description}</p>
            <div class="chart-placeholder">
                <p class="text-muted">
                    {move || format!("{} trend over {}", insight.label, PERIODS.get(period.get()).label)}
                </p>
            </div>
            <h4>"AI Recommendations"</h4>
            <ul class="bullet-list">{recommendations}</ul>
        }
    };

    let activities = RECENT_ACTIVITIES
        .iter()
        .map(|a| view! {
            <div class="list-row">
                <p class="row-title">{a.action}</p>
                <p class="text-muted text-small">{format!("{} • {} • {}", a.crop, a.detail, a.date)}</p>
            </div>
        })
        .collect_view();

    let performance = recent_performance(3)
        .iter()
        .map(|p| view! {
            <div class="list-row row-head">
                <span class="row-title">{p.month}</span>
                <span>{format!("Yield {}%", p.crop_yield)}</span>
                <span>{format!("Water {}L", p.water)}</span>
                <span>{format!("${}", p.revenue)}</span>
            </div>
        })
        .collect_view();

    let predictions = PREDICTIONS
        .iter()
        .map(|p| view! {
            <div class="card stat-card">
                <p class="stat-label">{p.title}</p>
                <p class="stat-value">{p.value}</p>
                <p class="text-muted text-small">{p.note}</p>
            </div>
        })
        .collect_view();

    view! {
        <div class="screen">
            <header class="page-header">
                <div>
                    <h1>"Data Insights"</h1>
                    <p class="text-muted">"Comprehensive analytics and performance metrics"</p>
                </div>
                <select
                    class="period-select"
                    on:change=move |ev| set_period.set(PERIODS.resolve_key(&event_target_value(&ev)))
                >
                    {period_options}
                </select>
            </header>

            <div class="grid-4">{stats}</div>

            <div class="grid-4">{metric_buttons}</div>

            <section class="card">{detail}</section>

            <div class="grid-2">
                <section class="card">
                    <h2>"Recent Activities"</h2>
                    {activities}
                </section>
                <section class="card">
                    <h2>"Performance Summary"</h2>
                    {performance}
                    <div class="row-head">
                        <span class="text-muted">"Best Performing"</span>
                        <span class="row-title">{BEST_PERFORMING}</span>
                    </div>
                    <div class="row-head">
                        <span class="text-muted">"Target Achievement"</span>
                        <span class="row-title">{TARGET_ACHIEVEMENT}</span>
                    </div>
                </section>
            </div>

            <section class="card">
                <h2>"Predictive Insights"</h2>
                <div class="grid-3">{predictions}</div>
            </section>
        </div>
    }
}
