//! 病害スキャンのセッション状態
//!
//! ```text
//! idle --start--> analyzing --ok--> complete
//!                     |
//!                     +--err--> failed --retry--> analyzing
//! (どの状態からでも画像差し替えで idle に戻る)
//! ```
//!
//! 解析1回ごとに `ScanTicket` を発行し、完了時に照合する。差し替えや
//! キャンセルでチケットが進むので、遅れて届いた結果は状態を上書きできない。

use crate::classifier::Diagnosis;
use crate::error::{Result, ScanError};
use crate::upload::ScanImage;
use serde::Serialize;

/// セッションのフェーズ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanPhase {
    #[default]
    Idle,
    Analyzing,
    Complete,
    Failed,
}

impl ScanPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScanPhase::Idle => "idle",
            ScanPhase::Analyzing => "analyzing",
            ScanPhase::Complete => "complete",
            ScanPhase::Failed => "failed",
        }
    }
}

/// 解析1回分の識別子
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScanTicket(u64);

/// 1画面分のスキャンセッション
#[derive(Debug, Clone, Default)]
pub struct ScanSession {
    image: Option<ScanImage>,
    phase: ScanPhase,
    result: Option<Diagnosis>,
    error: Option<String>,
    generation: u64,
}

impl ScanSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> ScanPhase {
        self.phase
    }

    pub fn image(&self) -> Option<&ScanImage> {
        self.image.as_ref()
    }

    pub fn result(&self) -> Option<&Diagnosis> {
        self.result.as_ref()
    }

    /// 失敗時の表示用メッセージ
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_analyzing(&self) -> bool {
        self.phase == ScanPhase::Analyzing
    }

    /// 解析を開始できるか（画像あり、かつ idle または failed）
    pub fn can_start(&self) -> bool {
        self.image.is_some() && matches!(self.phase, ScanPhase::Idle | ScanPhase::Failed)
    }

    /// 画像を受け付ける
    ///
    /// デコードできなければ `InvalidInput` を返し、セッションは変更しない。
    /// 成功時は結果を消して idle に戻り、進行中の解析は無効になる。
    pub fn submit_image(&mut self, file_name: &str, bytes: &[u8]) -> Result<()> {
        let image = ScanImage::decode(file_name, bytes).map_err(|e| {
            tracing::warn!(file = file_name, error = %e, "image rejected");
            e
        })?;
        self.set_image(image);
        Ok(())
    }

    /// 画像の差し替え（どのフェーズでも可）
    pub fn replace_image(&mut self, file_name: &str, bytes: &[u8]) -> Result<()> {
        self.submit_image(file_name, bytes)
    }

    /// 検証済みの画像を直接セットする
    pub fn set_image(&mut self, image: ScanImage) {
        tracing::debug!(
            file = %image.file_name,
            previous = self.phase.as_str(),
            "scan image set"
        );
        self.image = Some(image);
        self.invalidate();
        self.phase = ScanPhase::Idle;
        self.result = None;
        self.error = None;
    }

    /// 解析を開始する。開始できない状態では何もしない
    pub fn start_analysis(&mut self) -> Option<ScanTicket> {
        if !self.can_start() {
            tracing::debug!(phase = self.phase.as_str(), "start ignored");
            return None;
        }
        self.invalidate();
        self.phase = ScanPhase::Analyzing;
        self.result = None;
        self.error = None;
        tracing::debug!(ticket = self.generation, "analysis started");
        Some(ScanTicket(self.generation))
    }

    /// 解析を開始し、分類器に渡す画像の複製も返す
    pub fn begin(&mut self) -> Option<(ScanTicket, ScanImage)> {
        let ticket = self.start_analysis()?;
        let image = self.image.clone()?;
        Some((ticket, image))
    }

    /// 解析結果を反映する
    ///
    /// チケットが古い、または analyzing でない場合は `Cancelled` を返し何もしない。
    pub fn complete(&mut self, ticket: ScanTicket, outcome: Result<Diagnosis>) -> Result<()> {
        if ticket.0 != self.generation || self.phase != ScanPhase::Analyzing {
            tracing::warn!(
                ticket = ticket.0,
                current = self.generation,
                phase = self.phase.as_str(),
                "stale analysis result discarded"
            );
            return Err(ScanError::Cancelled);
        }

        match outcome.and_then(|d| d.validate().map(|_| d)) {
            Ok(diagnosis) => {
                tracing::debug!(
                    disease = %diagnosis.label,
                    confidence = diagnosis.confidence,
                    "analysis complete"
                );
                self.phase = ScanPhase::Complete;
                self.result = Some(diagnosis);
                self.error = None;
            }
            Err(ScanError::Cancelled) => {
                self.invalidate();
                self.phase = ScanPhase::Idle;
                return Err(ScanError::Cancelled);
            }
            Err(e) => {
                tracing::warn!(error = %e, "analysis failed");
                self.phase = ScanPhase::Failed;
                self.result = None;
                self.error = Some(e.to_string());
            }
        }
        Ok(())
    }

    /// 進行中の解析を取り消す（画面離脱時）
    pub fn cancel(&mut self) {
        if self.phase == ScanPhase::Analyzing {
            tracing::debug!(ticket = self.generation, "analysis cancelled");
            self.phase = ScanPhase::Idle;
        }
        self.invalidate();
    }

    /// 画像も含めて初期状態に戻す
    pub fn reset(&mut self) {
        let generation = self.generation;
        *self = Self::default();
        self.generation = generation.wrapping_add(1);
    }

    fn invalidate(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::tests::TokioTimer;
    use crate::classifier::{analyze, SimulatedClassifier};
    use crate::upload::png_bytes;
    use std::time::Duration;

    fn session_with_image() -> ScanSession {
        let mut session = ScanSession::new();
        session
            .submit_image("leaf.jpg", &png_bytes(4, 4))
            .expect("画像の受付に失敗");
        session
    }

    #[test]
    fn test_new_session_is_idle() {
        let session = ScanSession::new();
        assert_eq!(session.phase(), ScanPhase::Idle);
        assert!(session.image().is_none());
        assert!(session.result().is_none());
    }

    #[test]
    fn test_submit_image_stays_idle() {
        let session = session_with_image();
        assert_eq!(session.phase(), ScanPhase::Idle);
        assert!(session.image().is_some());
        assert!(session.result().is_none());
    }

    #[test]
    fn test_submit_invalid_image_leaves_session_untouched() {
        let mut session = session_with_image();
        let ticket = session.start_analysis().expect("開始できない");

        let err = session.submit_image("notes.txt", b"plain text").unwrap_err();
        assert!(matches!(err, ScanError::InvalidInput(_)));
        assert_eq!(session.phase(), ScanPhase::Analyzing);
        assert_eq!(session.image().map(|i| i.file_name.as_str()), Some("leaf.jpg"));

        // 弾かれた入力は進行中の解析を無効にしない
        assert!(session.complete(ticket, Ok(Diagnosis::tomato_late_blight())).is_ok());
    }

    #[test]
    fn test_start_without_image_is_noop() {
        let mut session = ScanSession::new();
        assert!(session.start_analysis().is_none());
        assert_eq!(session.phase(), ScanPhase::Idle);
    }

    #[test]
    fn test_start_while_analyzing_is_noop() {
        let mut session = session_with_image();
        assert!(session.start_analysis().is_some());
        assert!(session.start_analysis().is_none());
        assert_eq!(session.phase(), ScanPhase::Analyzing);
    }

    #[test]
    fn test_complete_populates_result() {
        let mut session = session_with_image();
        let ticket = session.start_analysis().expect("開始できない");
        session
            .complete(ticket, Ok(Diagnosis::tomato_late_blight()))
            .expect("反映失敗");

        assert_eq!(session.phase(), ScanPhase::Complete);
        let result = session.result().expect("結果なし");
        assert_eq!(result.label, "Tomato Late Blight");
        assert!(result.confidence <= 100);
    }

    #[test]
    fn test_start_after_complete_is_noop() {
        let mut session = session_with_image();
        let ticket = session.start_analysis().expect("開始できない");
        session.complete(ticket, Ok(Diagnosis::tomato_late_blight())).expect("反映失敗");
        assert!(session.start_analysis().is_none());
        assert_eq!(session.phase(), ScanPhase::Complete);
    }

    #[test]
    fn test_replace_during_analysis_discards_pending_result() {
        let mut session = session_with_image();
        let ticket = session.start_analysis().expect("開始できない");

        session
            .replace_image("other.png", &png_bytes(2, 2))
            .expect("差し替え失敗");
        assert_eq!(session.phase(), ScanPhase::Idle);
        assert!(session.result().is_none());

        let late = session.complete(ticket, Ok(Diagnosis::tomato_late_blight()));
        assert_eq!(late, Err(ScanError::Cancelled));
        assert_eq!(session.phase(), ScanPhase::Idle);
        assert!(session.result().is_none());
    }

    #[test]
    fn test_replace_after_complete_clears_result() {
        let mut session = session_with_image();
        let ticket = session.start_analysis().expect("開始できない");
        session.complete(ticket, Ok(Diagnosis::tomato_late_blight())).expect("反映失敗");

        session.replace_image("next.png", &png_bytes(2, 2)).expect("差し替え失敗");
        assert_eq!(session.phase(), ScanPhase::Idle);
        assert!(session.result().is_none());
    }

    #[test]
    fn test_stale_ticket_after_restart() {
        let mut session = session_with_image();
        let first = session.start_analysis().expect("開始できない");
        session.cancel();
        let second = session.start_analysis().expect("再開できない");

        assert_eq!(
            session.complete(first, Ok(Diagnosis::tomato_late_blight())),
            Err(ScanError::Cancelled)
        );
        assert!(session.is_analyzing());
        assert!(session.complete(second, Ok(Diagnosis::tomato_late_blight())).is_ok());
    }

    #[test]
    fn test_failure_and_retry() {
        let mut session = session_with_image();
        let ticket = session.start_analysis().expect("開始できない");
        session
            .complete(ticket, Err(ScanError::AnalysisFailed("service unavailable".into())))
            .expect("反映失敗");

        assert_eq!(session.phase(), ScanPhase::Failed);
        assert!(session.error().is_some_and(|m| m.contains("service unavailable")));
        assert!(session.result().is_none());

        let retry = session.start_analysis().expect("再試行できない");
        assert_eq!(session.phase(), ScanPhase::Analyzing);
        assert!(session.error().is_none());
        session.complete(retry, Ok(Diagnosis::tomato_late_blight())).expect("反映失敗");
        assert_eq!(session.phase(), ScanPhase::Complete);
    }

    #[test]
    fn test_invalid_diagnosis_becomes_failure() {
        let mut session = session_with_image();
        let ticket = session.start_analysis().expect("開始できない");
        let bad = Diagnosis {
            confidence: 250,
            ..Diagnosis::tomato_late_blight()
        };
        session.complete(ticket, Ok(bad)).expect("反映失敗");
        assert_eq!(session.phase(), ScanPhase::Failed);
    }

    #[test]
    fn test_cancel_returns_to_idle() {
        let mut session = session_with_image();
        let ticket = session.start_analysis().expect("開始できない");
        session.cancel();
        assert_eq!(session.phase(), ScanPhase::Idle);
        assert!(session.image().is_some());
        assert_eq!(
            session.complete(ticket, Ok(Diagnosis::tomato_late_blight())),
            Err(ScanError::Cancelled)
        );
    }

    #[test]
    fn test_reset_invalidates_ticket() {
        let mut session = session_with_image();
        let ticket = session.start_analysis().expect("開始できない");
        session.reset();
        assert!(session.image().is_none());
        assert_eq!(
            session.complete(ticket, Ok(Diagnosis::tomato_late_blight())),
            Err(ScanError::Cancelled)
        );
    }

    /// 画面を開く → leaf.jpg をアップロード → 解析 → 3秒後に結果
    #[tokio::test(start_paused = true)]
    async fn test_end_to_end_scan() {
        let mut session = ScanSession::new();
        assert_eq!(session.phase(), ScanPhase::Idle);

        session.submit_image("leaf.jpg", &png_bytes(16, 16)).expect("画像の受付に失敗");
        let (ticket, image) = session.begin().expect("開始できない");
        assert_eq!(session.phase(), ScanPhase::Analyzing);

        let classifier = SimulatedClassifier::new(TokioTimer, Duration::from_millis(3000));
        let start = tokio::time::Instant::now();
        let outcome = analyze(&classifier, &TokioTimer, &image, Duration::from_secs(30)).await;
        assert!(start.elapsed() >= Duration::from_secs(3));

        session.complete(ticket, outcome).expect("反映失敗");
        let result = session.result().expect("結果なし");
        assert_eq!(result.label, "Tomato Late Blight");
        assert_eq!(result.confidence, 94);
    }
}
