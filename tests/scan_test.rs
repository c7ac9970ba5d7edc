//! CLIスキャンのテスト
//!
//! tokioの時計を止めて疑似解析の待ち時間を進める

use agri_assist::error::AgriError;
use agri_assist::scan::{render_report, scan_file};
use agri_assist_common::{ScanError, ScanSettings};
use indicatif::ProgressBar;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tempfile::{tempdir, TempDir};

fn write_leaf(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("leaf.png");
    image::RgbImage::from_pixel(8, 6, image::Rgb([34, 139, 34]))
        .save(&path)
        .expect("PNG保存失敗");
    path
}

fn settings(delay_ms: u64, timeout_ms: u64) -> ScanSettings {
    ScanSettings { delay_ms, timeout_ms }
}

#[tokio::test(start_paused = true)]
async fn test_scan_returns_late_blight_after_delay() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = write_leaf(&dir);

    let started = tokio::time::Instant::now();
    let report = scan_file(
        &path,
        ScanSettings::default(),
        &ProgressBar::hidden(),
        std::future::pending(),
    )
    .await
    .expect("スキャン失敗");

    assert!(started.elapsed() >= Duration::from_millis(3000));
    assert_eq!(report.diagnosis.label, "Tomato Late Blight");
    assert_eq!(report.diagnosis.confidence, 94);
    assert_eq!((report.image.width, report.image.height), (8, 6));

    let text = render_report(&report);
    assert!(text.contains("信頼度: 94%"));
    assert!(text.contains("leaf.png"));
}

#[tokio::test(start_paused = true)]
async fn test_scan_timeout() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = write_leaf(&dir);

    let err = scan_file(&path, settings(5000, 1000), &ProgressBar::hidden(), std::future::pending())
        .await
        .unwrap_err();
    assert!(matches!(err, AgriError::Scan(ScanError::AnalysisFailed(_))));
}

#[tokio::test(start_paused = true)]
async fn test_scan_cancelled() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = write_leaf(&dir);

    let cancel = tokio::time::sleep(Duration::from_millis(500));
    let err = scan_file(&path, ScanSettings::default(), &ProgressBar::hidden(), cancel)
        .await
        .unwrap_err();
    assert!(matches!(err, AgriError::Scan(ScanError::Cancelled)));
}

#[tokio::test]
async fn test_scan_rejects_text_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("notes.jpg");
    std::fs::write(&path, "not an image").expect("書き込み失敗");

    let err = scan_file(&path, settings(0, 1000), &ProgressBar::hidden(), std::future::pending())
        .await
        .unwrap_err();
    assert!(matches!(err, AgriError::Scan(ScanError::InvalidInput(_))));
}

#[tokio::test]
async fn test_scan_missing_file() {
    let err = scan_file(
        Path::new("/nonexistent/leaf.png"),
        ScanSettings::default(),
        &ProgressBar::hidden(),
        std::future::pending(),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AgriError::FileNotFound(_)));
}
