//! 作物推奨画面のデータ
//!
//! 季節ごとの推奨作物。春以外は未整備なので春の推奨を表示する。

use super::Catalog;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct GrowingRequirements {
    pub temperature: &'static str,
    pub humidity: &'static str,
    pub rainfall: &'static str,
    pub soil: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CropRecommendation {
    pub name: &'static str,
    pub suitability: u8,
    #[serde(rename = "yield")]
    pub expected_yield: &'static str,
    pub growth_period: &'static str,
    pub water_requirement: &'static str,
    pub profitability: &'static str,
    pub difficulty: &'static str,
    pub reasons: &'static [&'static str],
    pub requirements: GrowingRequirements,
}

/// 適合度の評価
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Suitability {
    Excellent,
    Good,
    Fair,
}

impl Suitability {
    pub fn from_score(score: u8) -> Suitability {
        if score >= 90 {
            Suitability::Excellent
        } else if score >= 80 {
            Suitability::Good
        } else {
            Suitability::Fair
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Suitability::Excellent => "Excellent",
            Suitability::Good => "Good",
            Suitability::Fair => "Fair",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Suitability::Excellent => "tone-good",
            Suitability::Good => "tone-fair",
            Suitability::Fair => "tone-poor",
        }
    }
}

impl CropRecommendation {
    pub fn suitability_rating(&self) -> Suitability {
        Suitability::from_score(self.suitability)
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FarmConditions {
    pub location: &'static str,
    pub soil_type: &'static str,
    pub average_temp: &'static str,
    pub annual_rainfall: &'static str,
    pub field_size: &'static str,
    pub irrigation: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct MarketInsight {
    pub title: &'static str,
    pub value: &'static str,
    pub note: &'static str,
}

pub const SEASONS: [&str; 4] = ["spring", "summer", "autumn", "winter"];

pub const DEFAULT_SEASON: &str = "spring";

pub const FARM: FarmConditions = FarmConditions {
    location: "Northern Valley Farm",
    soil_type: "Loamy Clay",
    average_temp: "22°C",
    annual_rainfall: "750mm",
    field_size: "12.5 acres",
    irrigation: "Drip System Available",
};

pub const MARKET: &[MarketInsight] = &[
    MarketInsight { title: "Tomato Prices", value: "$2.40/kg", note: "+15% from last month" },
    MarketInsight { title: "Lettuce Demand", value: "High", note: "Peak season approaching" },
    MarketInsight {
        title: "Export Opportunities",
        value: "Available",
        note: "3 contracts pending",
    },
];

const SPRING: &[CropRecommendation] = &[
    CropRecommendation {
        name: "Tomatoes",
        suitability: 95,
        expected_yield: "25-30 tons/hectare",
        growth_period: "90-120 days",
        water_requirement: "Medium",
        profitability: "High",
        difficulty: "Medium",
        reasons: &[
            "Optimal temperature range (20-25°C)",
            "Good soil moisture conditions",
            "High market demand in spring",
            "Suitable pH levels (6.0-7.0)",
        ],
        requirements: GrowingRequirements {
            temperature: "20-25°C",
            humidity: "60-70%",
            rainfall: "600-800mm",
            soil: "Well-drained loamy soil",
        },
    },
    CropRecommendation {
        name: "Lettuce",
        suitability: 88,
        expected_yield: "15-20 tons/hectare",
        growth_period: "45-65 days",
        water_requirement: "High",
        profitability: "Medium",
        difficulty: "Easy",
        reasons: &[
            "Cool weather crop ideal for spring",
            "Fast growing cycle",
            "Low pest pressure in spring",
            "Good soil conditions",
        ],
        requirements: GrowingRequirements {
            temperature: "15-20°C",
            humidity: "70-80%",
            rainfall: "300-500mm",
            soil: "Rich, well-drained soil",
        },
    },
    CropRecommendation {
        name: "Carrots",
        suitability: 82,
        expected_yield: "20-25 tons/hectare",
        growth_period: "70-80 days",
        water_requirement: "Medium",
        profitability: "Medium",
        difficulty: "Easy",
        reasons: &[
            "Cool season root vegetable",
            "Good soil structure for root development",
            "Steady market demand",
            "Tolerates cool temperatures",
        ],
        requirements: GrowingRequirements {
            temperature: "16-21°C",
            humidity: "65-75%",
            rainfall: "450-650mm",
            soil: "Deep, loose, well-drained soil",
        },
    },
];

pub static RECOMMENDATIONS: Catalog<&[CropRecommendation]> =
    Catalog::new(&[(DEFAULT_SEASON, SPRING)], DEFAULT_SEASON, &SPRING);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suitability_boundaries() {
        assert_eq!(Suitability::from_score(90), Suitability::Excellent);
        assert_eq!(Suitability::from_score(89), Suitability::Good);
        assert_eq!(Suitability::from_score(80), Suitability::Good);
        assert_eq!(Suitability::from_score(79), Suitability::Fair);
    }

    #[test]
    fn test_spring_recommendations() {
        let crops = RECOMMENDATIONS.get("spring");
        let names: Vec<_> = crops.iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Tomatoes", "Lettuce", "Carrots"]);
        assert_eq!(crops[0].suitability_rating(), Suitability::Excellent);
        assert_eq!(crops[2].suitability_rating(), Suitability::Good);
    }

    #[test]
    fn test_other_seasons_fall_back_to_spring() {
        for season in ["summer", "autumn", "winter", "monsoon"] {
            assert_eq!(RECOMMENDATIONS.get(season).len(), 3);
            assert_eq!(RECOMMENDATIONS.resolve_key(season), DEFAULT_SEASON);
        }
    }

    #[test]
    fn test_serialize_uses_yield_key() {
        let json = serde_json::to_string(&SPRING[0]).expect("シリアライズ失敗");
        assert!(json.contains("\"yield\":\"25-30 tons/hectare\""));
        assert!(json.contains("\"growthPeriod\""));
    }
}
