//! サイドバー（画面切替）コンポーネント

use agri_assist_common::{Screen, ViewSelector};
use leptos::prelude::*;

fn icon(screen: Screen) -> &'static str {
    match screen {
        Screen::Dashboard => "🏠",
        Screen::PlantDisease => "🍃",
        Screen::SoilAnalysis => "⛰️",
        Screen::Weather => "☁️",
        Screen::CropRecommendation => "🌱",
        Screen::DataInsights => "📊",
    }
}

#[component]
pub fn Sidebar(
    selector: ReadSignal<ViewSelector>,
    set_selector: WriteSignal<ViewSelector>,
) -> impl IntoView {
    let items = Screen::ALL
        .into_iter()
        .map(|screen| {
            let is_active = move || selector.with(|s| s.is_active(screen));
            view! {
                <li>
                    <button
                        class="nav-item"
                        class:active=is_active
                        on:click=move |_| set_selector.update(|s| s.select(screen))
                    >
                        <span class="nav-icon">{icon(screen)}</span>
                        <span class="nav-label">{screen.label()}</span>
                    </button>
                </li>
            }
        })
        .collect_view();

    view! {
        <aside class="sidebar">
            <div class="sidebar-brand">
                <div class="brand-logo">"🌱"</div>
                <div>
                    <h1>"AgriAI"</h1>
                    <p class="text-muted">"Smart Farming"</p>
                </div>
            </div>

            <nav class="sidebar-nav">
                <ul>{items}</ul>
            </nav>

            <div class="sidebar-profile">
                <div class="avatar">"👤"</div>
                <div class="profile-text">
                    <p class="profile-name">"John Farmer"</p>
                    <p class="text-muted">"Premium Plan"</p>
                </div>
                <span class="profile-settings">"⚙️"</span>
            </div>
        </aside>
    }
}
