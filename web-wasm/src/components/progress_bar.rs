//! プログレスバーコンポーネント

use leptos::prelude::*;

/// 0〜100の値を横棒で表示する
#[component]
pub fn ProgressBar(
    percent: u8,
    #[prop(default = "tone-good")] tone: &'static str,
) -> impl IntoView {
    let width = percent.min(100);

    view! {
        <div class="progress-container">
            <div class="progress-bar">
                <div
                    class=format!("progress-fill {}", tone)
                    style=format!("width: {}%", width)
                />
            </div>
            <span class="progress-text">{format!("{}%", width)}</span>
        </div>
    }
}
