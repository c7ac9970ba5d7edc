use crate::error::{AgriError, Result};
use agri_assist_common::classifier::{DEFAULT_ANALYSIS_TIMEOUT_MS, DEFAULT_SCAN_DELAY_MS};
use agri_assist_common::{ScanSettings, Screen};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 待ち時間を上書きする環境変数
pub const SCAN_DELAY_ENV: &str = "AGRI_ASSIST_SCAN_DELAY_MS";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub scan_delay_ms: u64,
    pub analysis_timeout_secs: u64,
    pub default_screen: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scan_delay_ms: DEFAULT_SCAN_DELAY_MS,
            analysis_timeout_secs: DEFAULT_ANALYSIS_TIMEOUT_MS / 1000,
            default_screen: Screen::default().id().to_string(),
        }
    }
}

impl Config {
    /// 設定ファイルを読み、環境変数の上書きを適用する
    pub fn load() -> Result<Self> {
        let config = Self::load_stored()?;
        Ok(config.with_env_override(std::env::var(SCAN_DELAY_ENV).ok().as_deref()))
    }

    /// 設定ファイルの内容のみ（保存前の編集用）
    pub fn load_stored() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            tracing::debug!(path = %path.display(), "config loaded");
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        tracing::debug!(path = %path.display(), "config saved");
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| AgriError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("agri-assist").join("config.json"))
    }

    /// 数値として読めない値は無視する
    pub fn with_env_override(mut self, scan_delay: Option<&str>) -> Self {
        if let Some(raw) = scan_delay {
            match raw.trim().parse::<u64>() {
                Ok(ms) => self.scan_delay_ms = ms,
                Err(_) => tracing::warn!(value = raw, "ignoring invalid {}", SCAN_DELAY_ENV),
            }
        }
        self
    }

    pub fn scan_settings(&self) -> ScanSettings {
        ScanSettings {
            delay_ms: self.scan_delay_ms,
            timeout_ms: self.analysis_timeout_secs.saturating_mul(1000),
        }
    }

    /// 保存値が不正でもダッシュボードで起動する
    pub fn default_screen(&self) -> Screen {
        Screen::from_id(&self.default_screen)
    }

    pub fn set_scan_delay(&mut self, ms: u64) {
        self.scan_delay_ms = ms;
    }

    /// 未知の画面IDは保存しない
    pub fn set_default_screen(&mut self, id: &str) -> Result<Screen> {
        let screen = Screen::lookup(id)
            .ok_or_else(|| AgriError::Config(format!("不明な画面ID: {}", id)))?;
        self.default_screen = screen.id().to_string();
        Ok(screen)
    }
}
