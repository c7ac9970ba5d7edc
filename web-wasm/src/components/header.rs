//! 画面ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn PageHeader(
    title: &'static str,
    subtitle: &'static str,
    badge: &'static str,
    #[prop(default = "badge-emerald")] badge_class: &'static str,
) -> impl IntoView {
    view! {
        <header class="page-header">
            <div>
                <h1>{title}</h1>
                <p class="text-muted">{subtitle}</p>
            </div>
            <div class=format!("status-badge {}", badge_class)>
                <span class="pulse-dot"></span>
                <span>{badge}</span>
            </div>
        </header>
    }
}
