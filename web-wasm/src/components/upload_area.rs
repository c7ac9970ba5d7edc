//! アップロードエリアコンポーネント

use agri_assist_common::upload::accept_attribute;
use agri_assist_common::ScanSession;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, HtmlInputElement};

/// 選択されたファイルの先頭を取り出す
fn first_selected_file(ev: &web_sys::Event) -> Option<web_sys::File> {
    let input: HtmlInputElement = ev.target()?.dyn_into().ok()?;
    let file = input.files()?.get(0);
    // 同じファイルを選び直しても change が発火するように
    input.set_value("");
    file
}

#[component]
pub fn UploadArea<FF, FA>(
    session: RwSignal<ScanSession>,
    on_file: FF,
    on_analyze: FA,
) -> impl IntoView
where
    FF: Fn(web_sys::File) + 'static + Clone + Send + Sync,
    FA: Fn(()) + 'static + Clone + Send + Sync,
{
    let (is_dragover, set_is_dragover) = signal(false);

    let preview = move || {
        session.with(|s| s.image().map(|i| (i.data_url.clone(), i.file_name.clone())))
    };
    let has_image = move || session.with(|s| s.image().is_some());
    let is_analyzing = move || session.with(|s| s.is_analyzing());
    let can_start = move || session.with(|s| s.can_start());

    let on_drop = {
        let on_file = on_file.clone();
        move |ev: DragEvent| {
            ev.prevent_default();
            set_is_dragover.set(false);
            let dropped = ev
                .data_transfer()
                .and_then(|dt| dt.files())
                .and_then(|f| f.get(0));
            if let Some(file) = dropped {
                on_file(file);
            }
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(true);
    };

    let on_dragleave = move |_: DragEvent| {
        set_is_dragover.set(false);
    };

    let on_select = {
        let on_file = on_file.clone();
        move |ev: web_sys::Event| {
            if let Some(file) = first_selected_file(&ev) {
                on_file(file);
            }
        }
    };
    let on_replace = {
        let on_file = on_file.clone();
        move |ev: web_sys::Event| {
            if let Some(file) = first_selected_file(&ev) {
                on_file(file);
            }
        }
    };

    view! {
        <div
            class=move || {
                let mut classes = vec!["upload-area"];
                if is_dragover.get() {
                    classes.push("dragover");
                }
                classes.join(" ")
            }
            on:drop=on_drop
            on:dragover=on_dragover
            on:dragleave=on_dragleave
        >
            <Show
                when=has_image
                fallback=move || {
                    let on_select = on_select.clone();
                    view! {
                        <div class="upload-icon">"📤"</div>
                        <p class="upload-title">"Upload Plant Image"</p>
                        <p class="text-muted">"Drag and drop or click to select an image"</p>
                        <label class="btn btn-primary">
                            "📷 Select Image"
                            <input type="file" accept=accept_attribute() class="hidden" on:change=on_select />
                        </label>
                    }
                }
            >
                {move || preview().map(|(src, alt)| view! {
                    <img class="upload-preview" src=src alt=alt />
                })}
                <div class="upload-actions">
                    <label class="btn btn-secondary">
                        "📷 Replace Image"
                        <input type="file" accept=accept_attribute() class="hidden" on:change=on_replace.clone() />
                    </label>
                    <button
                        class="btn btn-primary"
                        disabled=move || !can_start()
                        on:click={
                            let on_analyze = on_analyze.clone();
                            move |_| on_analyze(())
                        }
                    >
                        {move || if is_analyzing() {
                            view! { <span class="spinner spinner-small"></span>"Analyzing..." }.into_any()
                        } else {
                            view! { "🍃 Analyze Disease" }.into_any()
                        }}
                    </button>
                </div>
            </Show>
        </div>
    }
}
