//! メインアプリケーションコンポーネント

use agri_assist_common::{Screen, ViewSelector};
use leptos::prelude::*;

use crate::components::sidebar::Sidebar;
use crate::screens::{
    crop_recommendation::CropRecommendation, dashboard::Dashboard, data_insights::DataInsights,
    plant_disease::PlantDisease, soil_analysis::SoilAnalysis, weather::Weather,
};

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let (selector, set_selector) = signal(ViewSelector::new());

    // 同じ画面を選び直しても再マウントしない
    let active = Memo::new(move |_| selector.with(|s| s.active()));

    let content = move || {
        let screen = active.get();
        log::debug!("rendering screen: {}", screen.id());
        match screen {
            Screen::Dashboard => view! { <Dashboard set_selector=set_selector /> }.into_any(),
            Screen::PlantDisease => view! { <PlantDisease /> }.into_any(),
            Screen::SoilAnalysis => view! { <SoilAnalysis /> }.into_any(),
            Screen::Weather => view! { <Weather /> }.into_any(),
            Screen::CropRecommendation => view! { <CropRecommendation /> }.into_any(),
            Screen::DataInsights => view! { <DataInsights /> }.into_any(),
        }
    };

    view! {
        <div class="app-shell">
            <Sidebar selector=selector set_selector=set_selector />
            <main class="main-content">{content}</main>
        </div>
    }
}
