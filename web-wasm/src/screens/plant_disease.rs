//! 病害診断画面

use agri_assist_common::catalog::disease::RECENT_SCANS;
use agri_assist_common::{Diagnosis, ScanPhase, ScanSettings};
use leptos::prelude::*;

use crate::components::header::PageHeader;
use crate::components::progress_bar::ProgressBar;
use crate::components::upload_area::UploadArea;
use crate::scan_task::ScanController;

fn diagnosis_view(diagnosis: Diagnosis) -> impl IntoView {
    let treatment = diagnosis
        .treatment
        .into_iter()
        .map(|step| view! { <li>{step}</li> })
        .collect_view();
    let prevention = diagnosis
        .prevention
        .into_iter()
        .map(|tip| view! { <li>{tip}</li> })
        .collect_view();

    view! {
        <div class="diagnosis">
            <div class="diagnosis-head">
                <h3>{diagnosis.label}</h3>
                <span class=format!("severity-pill severity-{}", diagnosis.severity.as_str().to_lowercase())>
                    {diagnosis.severity.as_str()}
                </span>
            </div>
            <p class="text-muted text-small">"Confidence"</p>
            <ProgressBar percent=diagnosis.confidence />
            <p>{diagnosis.description}</p>
            <h4>"Treatment"</h4>
            <ul class="bullet-list">{treatment}</ul>
            <h4>"Prevention"</h4>
            <ul class="bullet-list">{prevention}</ul>
        </div>
    }
}

#[component]
pub fn PlantDisease() -> impl IntoView {
    let controller = ScanController::new(ScanSettings::default());
    let session = controller.session;
    let upload_error = controller.upload_error;

    let phase = move || session.with(|s| s.phase());

    let results = move || match phase() {
        ScanPhase::Idle => view! {
            <div class="empty-state">
                <div class="empty-icon">"🔍"</div>
                <p class="text-muted">"Upload an image to start AI disease detection"</p>
            </div>
        }
        .into_any(),
        ScanPhase::Analyzing => view! {
            <div class="empty-state">
                <span class="spinner"></span>
                <p>"AI is analyzing your plant image..."</p>
                <button class="btn btn-secondary" on:click=move |_| controller.cancel()>
                    "Cancel"
                </button>
            </div>
        }
        .into_any(),
        ScanPhase::Complete => session
            .with(|s| s.result().cloned())
            .map(diagnosis_view)
            .into_any(),
        ScanPhase::Failed => {
            let message = session.with(|s| s.error().unwrap_or_default().to_string());
            view! {
                <div class="empty-state error-state">
                    <div class="empty-icon">"⚠️"</div>
                    <p>{message}</p>
                    <button class="btn btn-primary" on:click=move |_| controller.start()>
                        "Try Again"
                    </button>
                </div>
            }
            .into_any()
        }
    };

    let recent = RECENT_SCANS
        .iter()
        .map(|scan| {
            let tone = if scan.is_healthy() { "text-good" } else { "text-warn" };
            view! {
                <div class="recent-scan">
                    <img src=scan.image_url alt=scan.disease />
                    <div>
                        <p class=tone>{scan.disease}</p>
                        <p class="text-muted text-small">{format!("{}% confidence", scan.confidence)}</p>
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="screen">
            <PageHeader
                title="Plant Disease Detection"
                subtitle="Upload plant images for instant AI-powered disease identification"
                badge="AI Model Active"
            />

            <div class="grid-2">
                <section class="card">
                    <h2>"Upload Image"</h2>
                    <UploadArea
                        session=session
                        on_file=move |file: web_sys::File| controller.load_file(file)
                        on_analyze=move |_: ()| controller.start()
                    />
                    {move || upload_error.get().map(|message| view! {
                        <p class="upload-error">{message}</p>
                    })}
                </section>
                <section class="card">
                    <h2>"Analysis Results"</h2>
                    {results}
                </section>
            </div>

            <section class="card">
                <h2>"Recent Scans"</h2>
                <div class="grid-3">{recent}</div>
            </section>
        </div>
    }
}
