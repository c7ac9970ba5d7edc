//! 気象モニタリング画面のデータ

use super::{Catalog, SelectOption};
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentWeather {
    pub temperature: i8,
    pub humidity: u8,
    pub wind_speed: u8,
    pub precipitation: u8,
    pub visibility: u8,
    pub uv_index: u8,
    pub pressure: u16,
    pub condition: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Sky {
    Sunny,
    Cloudy,
    Rain,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ForecastDay {
    pub day: &'static str,
    pub high: i8,
    pub low: i8,
    pub condition: &'static str,
    pub precipitation: u8,
    pub sky: Sky,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum AlertSeverity {
    Low,
    Medium,
    High,
}

impl AlertSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertSeverity::Low => "Low",
            AlertSeverity::Medium => "Medium",
            AlertSeverity::High => "High",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            AlertSeverity::Low => "severity-low",
            AlertSeverity::Medium => "severity-medium",
            AlertSeverity::High => "severity-high",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct WeatherAlert {
    pub message: &'static str,
    pub severity: AlertSeverity,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AirQuality {
    pub aqi: u16,
    pub status: &'static str,
    pub pm25: u16,
    pub pm10: u16,
    pub o3: u16,
    pub no2: u16,
    pub co: f32,
}

pub const CURRENT: CurrentWeather = CurrentWeather {
    temperature: 24,
    humidity: 68,
    wind_speed: 8,
    precipitation: 0,
    visibility: 10,
    uv_index: 6,
    pressure: 1013,
    condition: "Partly Cloudy",
};

pub const FORECAST: &[ForecastDay] = &[
    ForecastDay {
        day: "Today",
        high: 26,
        low: 18,
        condition: "Partly Cloudy",
        precipitation: 10,
        sky: Sky::Cloudy,
    },
    ForecastDay {
        day: "Tomorrow",
        high: 28,
        low: 20,
        condition: "Sunny",
        precipitation: 0,
        sky: Sky::Sunny,
    },
    ForecastDay {
        day: "Wednesday",
        high: 22,
        low: 16,
        condition: "Light Rain",
        precipitation: 80,
        sky: Sky::Rain,
    },
    ForecastDay {
        day: "Thursday",
        high: 25,
        low: 19,
        condition: "Partly Cloudy",
        precipitation: 20,
        sky: Sky::Cloudy,
    },
    ForecastDay {
        day: "Friday",
        high: 27,
        low: 21,
        condition: "Sunny",
        precipitation: 5,
        sky: Sky::Sunny,
    },
];

pub const ALERTS: &[WeatherAlert] = &[
    WeatherAlert {
        message: "Heavy rain expected Wednesday - consider crop protection",
        severity: AlertSeverity::High,
    },
    WeatherAlert {
        message: "Optimal conditions for planting next week",
        severity: AlertSeverity::Low,
    },
    WeatherAlert {
        message: "High UV index today - protect exposed crops",
        severity: AlertSeverity::Medium,
    },
];

pub const AIR_QUALITY: AirQuality = AirQuality {
    aqi: 42,
    status: "Good",
    pm25: 12,
    pm10: 28,
    o3: 65,
    no2: 18,
    co: 0.4,
};

pub const AIR_QUALITY_NOTES: &[&str] = &[
    "Excellent conditions for outdoor work",
    "Safe for crop spraying activities",
    "Good visibility for equipment operation",
];

pub const DEFAULT_PERIOD: &str = "today";

/// 気象パターンの表示期間
pub static PERIODS: Catalog<SelectOption> = Catalog::new(
    &[
        ("today", SelectOption { id: "today", label: "Today" }),
        ("7days", SelectOption { id: "7days", label: "7 Days" }),
        ("30days", SelectOption { id: "30days", label: "30 Days" }),
    ],
    DEFAULT_PERIOD,
    &SelectOption { id: "today", label: "Today" },
);

/// 雨の可能性が高いとみなす降水確率
pub const RAIN_LIKELY_PERCENT: u8 = 50;

/// 雨量の多い予報日
pub fn rainy_days(threshold: u8) -> impl Iterator<Item = &'static ForecastDay> {
    FORECAST.iter().filter(move |d| d.precipitation >= threshold)
}
