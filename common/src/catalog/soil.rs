//! 土壌分析画面のデータ
//!
//! 圃場は3つあるが、土壌プロファイルはField Aのみ。他の圃場は
//! Field Aのプロファイルで表示する。

use super::Catalog;
use serde::Serialize;

/// 圃場
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Field {
    pub id: &'static str,
    pub name: &'static str,
    pub area: &'static str,
    pub crop: &'static str,
}

/// 土壌測定値と推奨事項
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SoilProfile {
    pub ph: f32,
    pub nitrogen: u8,
    pub phosphorus: u8,
    pub potassium: u8,
    pub organic_matter: f32,
    pub moisture: u8,
    pub temperature: u8,
    pub conductivity: f32,
    pub recommendations: &'static [&'static str],
    pub actions: &'static [&'static str],
}

/// 適正範囲に対する評価
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SoilRating {
    Low,
    Optimal,
    High,
}

impl SoilRating {
    /// 範囲は両端を含む
    pub fn rate(value: f32, min: f32, max: f32) -> SoilRating {
        if value < min {
            SoilRating::Low
        } else if value > max {
            SoilRating::High
        } else {
            SoilRating::Optimal
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SoilRating::Low => "Low",
            SoilRating::Optimal => "Optimal",
            SoilRating::High => "High",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            SoilRating::Low => "rating-low",
            SoilRating::Optimal => "rating-optimal",
            SoilRating::High => "rating-high",
        }
    }
}

/// 測定項目と適正範囲
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SoilMetric {
    Ph,
    Nitrogen,
    Phosphorus,
    Potassium,
}

impl SoilMetric {
    pub const RATED: [SoilMetric; 4] = [
        SoilMetric::Ph,
        SoilMetric::Nitrogen,
        SoilMetric::Phosphorus,
        SoilMetric::Potassium,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SoilMetric::Ph => "pH Level",
            SoilMetric::Nitrogen => "Nitrogen",
            SoilMetric::Phosphorus => "Phosphorus",
            SoilMetric::Potassium => "Potassium",
        }
    }

    pub fn optimal_range(&self) -> (f32, f32) {
        match self {
            SoilMetric::Ph => (6.0, 7.5),
            SoilMetric::Nitrogen => (40.0, 60.0),
            SoilMetric::Phosphorus => (45.0, 65.0),
            SoilMetric::Potassium => (40.0, 60.0),
        }
    }
}

impl SoilProfile {
    pub fn value(&self, metric: SoilMetric) -> f32 {
        match metric {
            SoilMetric::Ph => self.ph,
            SoilMetric::Nitrogen => f32::from(self.nitrogen),
            SoilMetric::Phosphorus => f32::from(self.phosphorus),
            SoilMetric::Potassium => f32::from(self.potassium),
        }
    }

    pub fn rating(&self, metric: SoilMetric) -> SoilRating {
        let (min, max) = metric.optimal_range();
        SoilRating::rate(self.value(metric), min, max)
    }
}

/// 推奨アクションの優先度。先頭のみHigh
pub fn action_priority(index: usize) -> &'static str {
    if index == 0 {
        "High"
    } else {
        "Medium"
    }
}

pub const DEFAULT_FIELD: &str = "field-a";

pub const FIELDS: &[Field] = &[
    Field { id: "field-a", name: "Field A - North", area: "2.5 acres", crop: "Tomatoes" },
    Field { id: "field-b", name: "Field B - South", area: "3.2 acres", crop: "Wheat" },
    Field { id: "field-c", name: "Field C - East", area: "1.8 acres", crop: "Corn" },
];

const FIELD_A: SoilProfile = SoilProfile {
    ph: 6.8,
    nitrogen: 45,
    phosphorus: 38,
    potassium: 52,
    organic_matter: 3.2,
    moisture: 68,
    temperature: 22,
    conductivity: 1.2,
    recommendations: &[
        "pH level is optimal for tomato cultivation",
        "Nitrogen levels are adequate - continue current fertilization",
        "Consider phosphorus supplementation",
        "Potassium levels are excellent",
        "Organic matter content is good",
    ],
    actions: &[
        "Apply phosphorus-rich fertilizer in 2 weeks",
        "Monitor nitrogen levels weekly",
        "Maintain current irrigation schedule",
    ],
};

pub static SOIL_PROFILES: Catalog<SoilProfile> =
    Catalog::new(&[(DEFAULT_FIELD, FIELD_A)], DEFAULT_FIELD, &FIELD_A);

/// 圃場IDから圃場を引く。未知のIDは既定の圃場
pub fn field(id: &str) -> &'static Field {
    FIELDS
        .iter()
        .find(|f| f.id == id)
        .or_else(|| FIELDS.iter().find(|f| f.id == DEFAULT_FIELD))
        .unwrap_or(&FIELDS[0])
}
