//! 病害分類器との境界
//!
//! 実運用では画像分類サービスを呼ぶ `DiseaseClassifier` を実装して差し替える。
//! 現状は固定の診断結果を一定時間後に返す `SimulatedClassifier` のみ。

use crate::error::{Result, ScanError};
use crate::upload::ScanImage;
use futures::future::{select, Either};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::future::Future;
use std::pin::pin;
use std::time::Duration;

/// 疑似解析の待ち時間（ミリ秒）
pub const DEFAULT_SCAN_DELAY_MS: u64 = 3000;

/// 解析のタイムアウト（ミリ秒）
pub const DEFAULT_ANALYSIS_TIMEOUT_MS: u64 = 30_000;

/// 重症度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Mild,
    Moderate,
    Severe,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Mild => "Mild",
            Severity::Moderate => "Moderate",
            Severity::Severe => "Severe",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 診断結果（分類サービスの出力と1対1）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnosis {
    #[serde(rename = "disease")]
    pub label: String,
    /// 0〜100
    pub confidence: u8,
    pub severity: Severity,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub treatment: Vec<String>,
    #[serde(default)]
    pub prevention: Vec<String>,
}

impl Diagnosis {
    /// 疑似解析が返す固定の診断
    pub fn tomato_late_blight() -> Self {
        Self {
            label: "Tomato Late Blight".to_string(),
            confidence: 94,
            severity: Severity::Moderate,
            description: "Late blight is a destructive disease that affects tomato plants, \
                          causing brown spots on leaves and stems."
                .to_string(),
            treatment: vec![
                "Remove affected leaves immediately".to_string(),
                "Apply copper-based fungicide".to_string(),
                "Improve air circulation around plants".to_string(),
                "Avoid overhead watering".to_string(),
            ],
            prevention: vec![
                "Plant resistant varieties".to_string(),
                "Ensure proper spacing between plants".to_string(),
                "Apply preventive fungicide treatments".to_string(),
                "Monitor humidity levels".to_string(),
            ],
        }
    }

    /// 分類器の出力として受け入れられるか
    pub fn validate(&self) -> Result<()> {
        if self.confidence > 100 {
            return Err(ScanError::AnalysisFailed(format!(
                "confidence {} is out of range",
                self.confidence
            )));
        }
        if self.label.trim().is_empty() {
            return Err(ScanError::AnalysisFailed("empty disease label".to_string()));
        }
        Ok(())
    }
}

/// 非同期の待機
///
/// ブラウザではタイマー、CLIではtokioで実装する。
pub trait Timer {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()>;
}

/// 画像分類サービス
pub trait DiseaseClassifier {
    fn classify(&self, image: &ScanImage) -> impl Future<Output = Result<Diagnosis>>;
}

/// 固定の待ち時間のあと固定の診断を返す分類器
#[derive(Debug, Clone)]
pub struct SimulatedClassifier<T> {
    timer: T,
    latency: Duration,
    outcome: Diagnosis,
}

impl<T: Timer> SimulatedClassifier<T> {
    pub fn new(timer: T, latency: Duration) -> Self {
        Self {
            timer,
            latency,
            outcome: Diagnosis::tomato_late_blight(),
        }
    }
}

impl<T: Timer> DiseaseClassifier for SimulatedClassifier<T> {
    async fn classify(&self, image: &ScanImage) -> Result<Diagnosis> {
        tracing::debug!(
            file = %image.file_name,
            latency = ?self.latency,
            "simulated classification started"
        );
        self.timer.sleep(self.latency).await;
        Ok(self.outcome.clone())
    }
}

/// 解析の設定
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanSettings {
    pub delay_ms: u64,
    pub timeout_ms: u64,
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self {
            delay_ms: DEFAULT_SCAN_DELAY_MS,
            timeout_ms: DEFAULT_ANALYSIS_TIMEOUT_MS,
        }
    }
}

impl ScanSettings {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

/// 分類器をタイムアウト付きで呼び出す
///
/// タイムアウトと範囲外の信頼度は `AnalysisFailed` になる。
pub async fn analyze<C, T>(
    classifier: &C,
    timer: &T,
    image: &ScanImage,
    timeout: Duration,
) -> Result<Diagnosis>
where
    C: DiseaseClassifier,
    T: Timer,
{
    let classify = pin!(classifier.classify(image));
    let deadline = pin!(timer.sleep(timeout));

    match select(classify, deadline).await {
        Either::Left((outcome, _)) => {
            let diagnosis = outcome?;
            diagnosis.validate()?;
            Ok(diagnosis)
        }
        Either::Right(((), _)) => {
            tracing::warn!(file = %image.file_name, "analysis timed out");
            Err(ScanError::AnalysisFailed(format!(
                "timed out after {} ms",
                timeout.as_millis()
            )))
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::upload::png_bytes;

    #[derive(Debug, Clone, Copy)]
    pub(crate) struct TokioTimer;

    impl Timer for TokioTimer {
        fn sleep(&self, duration: Duration) -> impl Future<Output = ()> {
            tokio::time::sleep(duration)
        }
    }

    struct FailingClassifier;

    impl DiseaseClassifier for FailingClassifier {
        async fn classify(&self, _image: &ScanImage) -> Result<Diagnosis> {
            Err(ScanError::AnalysisFailed("service unavailable".to_string()))
        }
    }

    struct OverconfidentClassifier;

    impl DiseaseClassifier for OverconfidentClassifier {
        async fn classify(&self, _image: &ScanImage) -> Result<Diagnosis> {
            Ok(Diagnosis {
                confidence: 140,
                ..Diagnosis::tomato_late_blight()
            })
        }
    }

    fn leaf() -> ScanImage {
        ScanImage::decode("leaf.jpg", &png_bytes(2, 2)).expect("デコード失敗")
    }

    #[test]
    fn test_canned_diagnosis() {
        let d = Diagnosis::tomato_late_blight();
        assert_eq!(d.label, "Tomato Late Blight");
        assert_eq!(d.confidence, 94);
        assert_eq!(d.severity, Severity::Moderate);
        assert_eq!(d.treatment.len(), 4);
        assert_eq!(d.prevention.len(), 4);
        assert!(d.validate().is_ok());
    }

    #[test]
    fn test_diagnosis_serialize() {
        let json =
            serde_json::to_string(&Diagnosis::tomato_late_blight()).expect("シリアライズ失敗");
        assert!(json.contains("\"disease\":\"Tomato Late Blight\""));
        assert!(json.contains("\"confidence\":94"));
        assert!(json.contains("\"severity\":\"Moderate\""));
    }

    #[test]
    fn test_default_settings() {
        let settings = ScanSettings::default();
        assert_eq!(settings.delay(), Duration::from_secs(3));
        assert_eq!(settings.timeout(), Duration::from_secs(30));
    }

    #[tokio::test(start_paused = true)]
    async fn test_simulated_classifier_waits_fixed_delay() {
        let classifier = SimulatedClassifier::new(TokioTimer, Duration::from_millis(3000));
        let start = tokio::time::Instant::now();

        let diagnosis = analyze(&classifier, &TokioTimer, &leaf(), Duration::from_secs(30))
            .await
            .expect("解析失敗");

        assert!(start.elapsed() >= Duration::from_millis(3000));
        assert_eq!(diagnosis.label, "Tomato Late Blight");
        assert!(diagnosis.confidence <= 100);
    }

    #[tokio::test(start_paused = true)]
    async fn test_analyze_times_out() {
        let classifier = SimulatedClassifier::new(TokioTimer, Duration::from_secs(60));
        let err = analyze(&classifier, &TokioTimer, &leaf(), Duration::from_secs(5))
            .await
            .unwrap_err();
        assert!(matches!(err, ScanError::AnalysisFailed(ref m) if m.contains("timed out")));
    }

    #[tokio::test(start_paused = true)]
    async fn test_unbounded_latency_still_times_out() {
        // ミリ秒に収まらない待ち時間でもログ出力で落ちない
        let classifier = SimulatedClassifier::new(TokioTimer, Duration::MAX);
        let err = analyze(&classifier, &TokioTimer, &leaf(), Duration::from_secs(5))
            .await
            .unwrap_err();
        assert!(matches!(err, ScanError::AnalysisFailed(ref m) if m.contains("5000 ms")));
    }

    #[tokio::test(start_paused = true)]
    async fn test_analyze_propagates_classifier_error() {
        let err = analyze(&FailingClassifier, &TokioTimer, &leaf(), Duration::from_secs(5))
            .await
            .unwrap_err();
        assert_eq!(err, ScanError::AnalysisFailed("service unavailable".to_string()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_analyze_rejects_out_of_range_confidence() {
        let err = analyze(&OverconfidentClassifier, &TokioTimer, &leaf(), Duration::from_secs(5))
            .await
            .unwrap_err();
        assert!(matches!(err, ScanError::AnalysisFailed(_)));
    }
}
