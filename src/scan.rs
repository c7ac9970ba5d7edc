//! 端末からの病害スキャン
//!
//! Web版と同じ `ScanSession` の流れを tokio のタイマーで動かす。

use crate::error::{AgriError, Result};
use agri_assist_common::{
    analyze, Diagnosis, ScanError, ScanImage, ScanPhase, ScanSession, ScanSettings,
    SimulatedClassifier, Timer,
};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::future::Future;
use std::path::Path;
use std::time::Duration;

/// `tokio::time::sleep` による待機
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioTimer;

impl Timer for TokioTimer {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> {
        tokio::time::sleep(duration)
    }
}

/// スキャン結果
#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    pub image: ScanImage,
    pub diagnosis: Diagnosis,
}

/// 解析中のスピナー
pub fn spinner() -> ProgressBar {
    let bar = ProgressBar::new_spinner();
    bar.set_style(
        ProgressStyle::with_template("{spinner:.green} {msg} [{elapsed}]")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    bar.enable_steady_tick(Duration::from_millis(100));
    bar
}

/// 画像ファイルを解析する
///
/// `cancel` が先に完了すると解析を取り消して `Cancelled` を返す。
pub async fn scan_file<F>(
    path: &Path,
    settings: ScanSettings,
    progress: &ProgressBar,
    cancel: F,
) -> Result<ScanReport>
where
    F: Future<Output = ()>,
{
    if !path.is_file() {
        return Err(AgriError::FileNotFound(path.display().to_string()));
    }
    let bytes = tokio::fs::read(path).await?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let mut session = ScanSession::new();
    session.submit_image(&file_name, &bytes)?;
    let Some((ticket, image)) = session.begin() else {
        return Err(ScanError::InvalidInput(format!("{} could not be queued", file_name)).into());
    };

    progress.set_message(format!("{} を解析中...", file_name));
    let classifier = SimulatedClassifier::new(TokioTimer, settings.delay());

    let outcome = tokio::select! {
        outcome = analyze(&classifier, &TokioTimer, &image, settings.timeout()) => outcome,
        () = cancel => {
            session.cancel();
            progress.finish_and_clear();
            return Err(ScanError::Cancelled.into());
        }
    };
    progress.finish_and_clear();

    session.complete(ticket, outcome)?;
    match (session.phase(), session.result()) {
        (ScanPhase::Complete, Some(diagnosis)) => Ok(ScanReport {
            image,
            diagnosis: diagnosis.clone(),
        }),
        _ => {
            let message = session.error().unwrap_or("unknown error").to_string();
            Err(ScanError::AnalysisFailed(message).into())
        }
    }
}

/// 診断結果のテキスト表示
pub fn render_report(report: &ScanReport) -> String {
    let d = &report.diagnosis;
    let mut lines = vec![
        format!(
            "画像: {} ({}x{}, {})",
            report.image.file_name, report.image.width, report.image.height, report.image.mime_type
        ),
        format!("病害: {}", d.label),
        format!("信頼度: {}%", d.confidence),
        format!("重症度: {}", d.severity),
        String::new(),
        d.description.clone(),
        String::new(),
        "治療".to_string(),
    ];
    lines.extend(d.treatment.iter().map(|t| format!("  • {}", t)));
    lines.push(String::new());
    lines.push("予防".to_string());
    lines.extend(d.prevention.iter().map(|p| format!("  • {}", p)));
    lines.join("\n")
}
