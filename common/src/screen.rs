//! 画面識別子と画面切替の状態
//!
//! サイドバーが `ViewSelector` を更新し、ルートコンポーネントが
//! `active()` を読んで表示する画面を決める。

use serde::Serialize;
use std::fmt;

/// トップレベル画面
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Screen {
    #[default]
    Dashboard,
    PlantDisease,
    SoilAnalysis,
    Weather,
    CropRecommendation,
    DataInsights,
}

impl Screen {
    /// サイドバーの表示順
    pub const ALL: [Screen; 6] = [
        Screen::Dashboard,
        Screen::PlantDisease,
        Screen::SoilAnalysis,
        Screen::Weather,
        Screen::CropRecommendation,
        Screen::DataInsights,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Screen::Dashboard => "dashboard",
            Screen::PlantDisease => "plant-disease",
            Screen::SoilAnalysis => "soil-analysis",
            Screen::Weather => "weather",
            Screen::CropRecommendation => "crop-recommendation",
            Screen::DataInsights => "data-insights",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Screen::Dashboard => "Dashboard",
            Screen::PlantDisease => "Plant Disease",
            Screen::SoilAnalysis => "Soil Analysis",
            Screen::Weather => "Weather",
            Screen::CropRecommendation => "Crop Insights",
            Screen::DataInsights => "Analytics",
        }
    }

    /// 識別子から画面を引く。別名も受け付ける
    pub fn lookup(id: &str) -> Option<Screen> {
        let screen = match id.trim().to_ascii_lowercase().as_str() {
            "dashboard" | "overview" => Screen::Dashboard,
            "plant-disease" | "disease" => Screen::PlantDisease,
            "soil-analysis" | "soil" => Screen::SoilAnalysis,
            "weather" => Screen::Weather,
            "crop-recommendation" => Screen::CropRecommendation,
            "data-insights" | "insights" => Screen::DataInsights,
            _ => return None,
        };
        Some(screen)
    }

    /// 未知の識別子はデフォルト画面に落とす
    pub fn from_id(id: &str) -> Screen {
        Screen::lookup(id).unwrap_or_else(|| {
            tracing::debug!(id, "unknown screen id, falling back to default");
            Screen::default()
        })
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// 現在表示中の画面
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewSelector {
    active: Screen,
    default: Screen,
}

impl ViewSelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// 起動時の画面を指定して作る
    pub fn with_default(default: Screen) -> Self {
        Self {
            active: default,
            default,
        }
    }

    pub fn active(&self) -> Screen {
        self.active
    }

    pub fn is_active(&self, screen: Screen) -> bool {
        self.active == screen
    }

    pub fn select(&mut self, screen: Screen) {
        if self.active != screen {
            tracing::debug!(from = %self.active, to = %screen, "screen changed");
        }
        self.active = screen;
    }

    /// 文字列で切り替える。未知の値はこのセレクタのデフォルト画面になる
    pub fn select_id(&mut self, id: &str) -> Screen {
        let screen = Screen::lookup(id).unwrap_or(self.default);
        self.select(screen);
        screen
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_screen_is_dashboard() {
        assert_eq!(Screen::default(), Screen::Dashboard);
        assert_eq!(ViewSelector::new().active(), Screen::Dashboard);
    }

    #[test]
    fn test_ids_round_trip() {
        for screen in Screen::ALL {
            assert_eq!(Screen::from_id(screen.id()), screen);
            assert_eq!(screen.to_string(), screen.id());
        }
    }

    #[test]
    fn test_aliases() {
        assert_eq!(Screen::from_id("overview"), Screen::Dashboard);
        assert_eq!(Screen::from_id("disease"), Screen::PlantDisease);
        assert_eq!(Screen::from_id("soil"), Screen::SoilAnalysis);
        assert_eq!(Screen::from_id("insights"), Screen::DataInsights);
        assert_eq!(Screen::from_id(" Weather "), Screen::Weather);
    }

    #[test]
    fn test_unknown_id_falls_back() {
        assert_eq!(Screen::from_id("nonexistent"), Screen::Dashboard);
        assert_eq!(Screen::from_id(""), Screen::Dashboard);
        assert_eq!(Screen::lookup("nonexistent"), None);
    }

    #[test]
    fn test_select() {
        let mut selector = ViewSelector::new();
        selector.select(Screen::Weather);
        assert!(selector.is_active(Screen::Weather));
        assert!(!selector.is_active(Screen::Dashboard));
    }

    #[test]
    fn test_select_id_unknown_uses_selector_default() {
        let mut selector = ViewSelector::with_default(Screen::SoilAnalysis);
        selector.select(Screen::Weather);
        assert_eq!(selector.select_id("nonexistent"), Screen::SoilAnalysis);
        assert_eq!(selector.active(), Screen::SoilAnalysis);
    }

    #[test]
    fn test_serialize_uses_ids() {
        let json = serde_json::to_string(&Screen::CropRecommendation).expect("シリアライズ失敗");
        assert_eq!(json, "\"crop-recommendation\"");
    }
}
