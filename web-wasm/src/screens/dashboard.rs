//! ダッシュボード画面

use agri_assist_common::catalog::dashboard::{AlertKind, ALERTS, CROPS, QUICK_ACTIONS, STATS};
use agri_assist_common::ViewSelector;
use leptos::prelude::*;

use crate::components::progress_bar::ProgressBar;

fn alert_icon(kind: AlertKind) -> &'static str {
    match kind {
        AlertKind::Warning => "⚠️",
        AlertKind::Success => "✅",
        AlertKind::Info => "ℹ️",
    }
}

#[component]
pub fn Dashboard(set_selector: WriteSignal<ViewSelector>) -> impl IntoView {
    let stats = STATS
        .iter()
        .map(|stat| view! {
            <div class="card stat-card">
                <p class="stat-label">{stat.label}</p>
                <p class="stat-value">{stat.value}</p>
                <p class="stat-change">{stat.change}</p>
            </div>
        })
        .collect_view();

    let crops = CROPS
        .iter()
        .map(|crop| view! {
            <div class="list-row">
                <div class="row-head">
                    <span class="row-title">{crop.name}</span>
                    <span class="text-muted">{crop.area}</span>
                </div>
                <ProgressBar percent=crop.health tone=crop.tone().css_class() />
            </div>
        })
        .collect_view();

    let alerts = ALERTS
        .iter()
        .map(|alert| view! {
            <div class="list-row alert-row">
                <span class="alert-icon">{alert_icon(alert.kind)}</span>
                <div>
                    <p class="row-title">{alert.message}</p>
                    <p class="text-muted text-small">{alert.time}</p>
                </div>
            </div>
        })
        .collect_view();

    let actions = QUICK_ACTIONS
        .iter()
        .map(|action| {
            let target = action.target;
            view! {
                <button
                    class="quick-action"
                    on:click=move |_| set_selector.update(|s| s.select(target))
                >
                    <h3>{action.title}</h3>
                    <p class="text-muted">{action.subtitle}</p>
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="screen">
            <header class="page-header">
                <div>
                    <h1>"Farm Dashboard"</h1>
                    <p class="text-muted">"Welcome back! Here's what's happening on your farm today."</p>
                </div>
                <div class="last-updated">
                    <p class="text-muted text-small">"Last Updated"</p>
                    <p class="text-small">"Just now"</p>
                    <span class="pulse-dot"></span>
                </div>
            </header>

            <div class="grid-4">{stats}</div>

            <div class="grid-2">
                <section class="card">
                    <h2>"Crop Health Overview"</h2>
                    {crops}
                </section>
                <section class="card">
                    <h2>"Recent Alerts"</h2>
                    {alerts}
                </section>
            </div>

            <section class="card">
                <h2>"Quick Actions"</h2>
                <div class="grid-3">{actions}</div>
            </section>
        </div>
    }
}
