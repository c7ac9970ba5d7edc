//! エラー型定義

use thiserror::Error;

/// スキャン（病害診断）のエラー型
///
/// いずれも画面内で回復可能。アプリ全体を止めることはない。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScanError {
    /// デコードできない画像。保存前に弾く
    #[error("Invalid image: {0}")]
    InvalidInput(String),

    /// 分類器のエラーまたはタイムアウト。再試行できる
    #[error("Analysis failed: {0}")]
    AnalysisFailed(String),

    /// 画像の差し替えや画面離脱で破棄された解析
    #[error("Analysis cancelled")]
    Cancelled,
}

impl ScanError {
    /// 利用者に表示せず黙って捨てるべきエラーか
    pub fn is_silent(&self) -> bool {
        matches!(self, ScanError::Cancelled)
    }
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, ScanError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_invalid_input() {
        let error = ScanError::InvalidInput("not an image".to_string());
        assert_eq!(format!("{}", error), "Invalid image: not an image");
    }

    #[test]
    fn test_error_display_analysis_failed() {
        let error = ScanError::AnalysisFailed("timed out after 30000 ms".to_string());
        let display = format!("{}", error);
        assert!(display.contains("Analysis failed"));
        assert!(display.contains("30000 ms"));
    }

    #[test]
    fn test_cancelled_is_silent() {
        assert!(ScanError::Cancelled.is_silent());
        assert!(!ScanError::AnalysisFailed("x".into()).is_silent());
        assert!(!ScanError::InvalidInput("x".into()).is_silent());
    }

    #[test]
    fn test_error_debug() {
        let error = ScanError::InvalidInput("テスト".to_string());
        let debug = format!("{:?}", error);
        assert!(debug.contains("InvalidInput"));
        assert!(debug.contains("テスト"));
    }
}
