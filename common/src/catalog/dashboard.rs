//! ダッシュボード（概要）画面のデータ

use crate::screen::Screen;
use serde::Serialize;

/// 統計カード
#[derive(Debug, Clone, Copy, Serialize)]
pub struct StatCard {
    pub label: &'static str,
    pub value: &'static str,
    pub change: &'static str,
}

/// 作物の生育状況
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CropHealth {
    pub name: &'static str,
    pub health: u8,
    pub status: &'static str,
    pub area: &'static str,
}

/// 健全度バーの色分け
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthTone {
    Good,
    Fair,
    Poor,
}

impl HealthTone {
    pub fn css_class(&self) -> &'static str {
        match self {
            HealthTone::Good => "tone-good",
            HealthTone::Fair => "tone-fair",
            HealthTone::Poor => "tone-poor",
        }
    }
}

impl CropHealth {
    /// 90超は良好、80超は注意、それ以下は不良
    pub fn tone(&self) -> HealthTone {
        health_tone(self.health)
    }
}

pub fn health_tone(health: u8) -> HealthTone {
    if health > 90 {
        HealthTone::Good
    } else if health > 80 {
        HealthTone::Fair
    } else {
        HealthTone::Poor
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Warning,
    Success,
    Info,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct FarmAlert {
    pub kind: AlertKind,
    pub message: &'static str,
    pub time: &'static str,
}

/// クイックアクション（押すと対象画面へ移動）
#[derive(Debug, Clone, Copy, Serialize)]
pub struct QuickAction {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub target: Screen,
}

pub const STATS: &[StatCard] = &[
    StatCard { label: "Crop Yield", value: "85%", change: "+12%" },
    StatCard { label: "Soil Moisture", value: "68%", change: "+5%" },
    StatCard { label: "Temperature", value: "24°C", change: "Normal" },
    StatCard { label: "Wind Speed", value: "8 km/h", change: "Light" },
];

pub const CROPS: &[CropHealth] = &[
    CropHealth { name: "Tomatoes", health: 92, status: "Excellent", area: "2.5 acres" },
    CropHealth { name: "Wheat", health: 78, status: "Good", area: "5.2 acres" },
    CropHealth { name: "Corn", health: 85, status: "Good", area: "3.8 acres" },
    CropHealth { name: "Soybeans", health: 95, status: "Excellent", area: "4.1 acres" },
];

pub const ALERTS: &[FarmAlert] = &[
    FarmAlert {
        kind: AlertKind::Warning,
        message: "Irrigation needed in Field A",
        time: "2 hours ago",
    },
    FarmAlert {
        kind: AlertKind::Success,
        message: "Pest control completed in Field B",
        time: "4 hours ago",
    },
    FarmAlert { kind: AlertKind::Info, message: "Weather forecast updated", time: "6 hours ago" },
];

pub const QUICK_ACTIONS: &[QuickAction] = &[
    QuickAction {
        title: "Scan Plant Disease",
        subtitle: "Upload image for AI analysis",
        target: Screen::PlantDisease,
    },
    QuickAction {
        title: "Check Soil Quality",
        subtitle: "Analyze soil conditions",
        target: Screen::SoilAnalysis,
    },
    QuickAction {
        title: "View Analytics",
        subtitle: "Detailed farm insights",
        target: Screen::DataInsights,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_tone_boundaries() {
        assert_eq!(health_tone(91), HealthTone::Good);
        assert_eq!(health_tone(90), HealthTone::Fair);
        assert_eq!(health_tone(81), HealthTone::Fair);
        assert_eq!(health_tone(80), HealthTone::Poor);
    }

    #[test]
    fn test_crop_tones() {
        let tones: Vec<_> = CROPS.iter().map(|c| c.tone()).collect();
        assert_eq!(
            tones,
            vec![HealthTone::Good, HealthTone::Poor, HealthTone::Fair, HealthTone::Good]
        );
    }

    #[test]
    fn test_quick_actions_target_real_screens() {
        for action in QUICK_ACTIONS {
            assert_ne!(action.target, Screen::Dashboard);
        }
    }
}
