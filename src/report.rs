//! 画面内容の端末出力
//!
//! Web版の各画面と同じ参照データを、テキストまたはJSONで出力する。
//! 未知の選択値は各テーブルのデフォルトに落ちる。

use crate::error::Result;
use agri_assist_common::catalog::{
    crops, dashboard, disease, insights, soil, weather, Catalog, SelectOption,
};
use agri_assist_common::Screen;
use serde_json::{json, Value};

/// 画面ごとの選択値
#[derive(Debug, Clone, Default)]
pub struct ScreenOptions {
    pub field: Option<String>,
    pub season: Option<String>,
    pub metric: Option<String>,
    pub period: Option<String>,
}

impl ScreenOptions {
    fn field(&self) -> &'static soil::Field {
        soil::field(self.field.as_deref().unwrap_or(soil::DEFAULT_FIELD))
    }

    fn season(&self) -> &'static str {
        let requested = self.season.as_deref().unwrap_or(crops::DEFAULT_SEASON);
        crops::SEASONS
            .iter()
            .copied()
            .find(|s| *s == requested)
            .unwrap_or(crops::DEFAULT_SEASON)
    }

    fn metric(&self) -> &'static str {
        insights::METRICS.resolve_key(self.metric.as_deref().unwrap_or(insights::DEFAULT_METRIC))
    }

    fn period(&self, table: &Catalog<SelectOption>) -> &'static SelectOption {
        table.get(self.period.as_deref().unwrap_or(table.default_key()))
    }
}

/// テキスト表示
pub fn render_text(screen: Screen, options: &ScreenOptions) -> String {
    let mut lines = vec![format!("== {} ==", screen.label())];
    match screen {
        Screen::Dashboard => dashboard_text(&mut lines),
        Screen::PlantDisease => disease_text(&mut lines),
        Screen::SoilAnalysis => soil_text(&mut lines, options),
        Screen::Weather => weather_text(&mut lines, options),
        Screen::CropRecommendation => crops_text(&mut lines, options),
        Screen::DataInsights => insights_text(&mut lines, options),
    }
    lines.join("\n")
}

/// JSON表示
pub fn render_json(screen: Screen, options: &ScreenOptions) -> Result<String> {
    let body = match screen {
        Screen::Dashboard => json!({
            "stats": dashboard::STATS,
            "crops": dashboard::CROPS
                .iter()
                .map(|c| json!({ "crop": c, "tone": c.tone() }))
                .collect::<Vec<_>>(),
            "alerts": dashboard::ALERTS,
            "quickActions": dashboard::QUICK_ACTIONS,
        }),
        Screen::PlantDisease => json!({ "recentScans": disease::RECENT_SCANS }),
        Screen::SoilAnalysis => {
            let field = options.field();
            let profile = soil::SOIL_PROFILES.get(field.id);
            let ratings: Vec<Value> = soil::SoilMetric::RATED
                .iter()
                .map(|&m| {
                    json!({
                        "metric": m.label(),
                        "value": profile.value(m),
                        "rating": profile.rating(m),
                    })
                })
                .collect();
            json!({ "field": field, "profile": profile, "ratings": ratings })
        }
        Screen::Weather => json!({
            "current": weather::CURRENT,
            "forecast": weather::FORECAST,
            "alerts": weather::ALERTS,
            "airQuality": weather::AIR_QUALITY,
            "period": options.period(&weather::PERIODS),
        }),
        Screen::CropRecommendation => {
            let season = options.season();
            json!({
                "season": season,
                "farm": crops::FARM,
                "recommendations": crops::RECOMMENDATIONS.get(season),
                "market": crops::MARKET,
            })
        }
        Screen::DataInsights => {
            let metric = options.metric();
            json!({
                "stats": insights::FARM_STATS,
                "metric": metric,
                "insight": insights::METRICS.get(metric),
                "period": options.period(&insights::PERIODS),
                "activities": insights::RECENT_ACTIVITIES,
                "performance": insights::recent_performance(3),
                "predictions": insights::PREDICTIONS,
            })
        }
    };

    let document = json!({ "screen": screen, "data": body });
    Ok(serde_json::to_string_pretty(&document)?)
}

fn bullets(lines: &mut Vec<String>, items: &[&str]) {
    lines.extend(items.iter().map(|item| format!("  • {}", item)));
}

fn dashboard_text(lines: &mut Vec<String>) {
    for stat in dashboard::STATS {
        lines.push(format!("{:<14} {:>8}  ({})", stat.label, stat.value, stat.change));
    }
    lines.push(String::new());
    lines.push("作物の生育状況".to_string());
    for crop in dashboard::CROPS {
        lines.push(format!(
            "  {:<10} {:>3}% [{:?}]  {}",
            crop.name,
            crop.health,
            crop.tone(),
            crop.area
        ));
    }
    lines.push(String::new());
    lines.push("アラート".to_string());
    for alert in dashboard::ALERTS {
        lines.push(format!("  [{:?}] {} ({})", alert.kind, alert.message, alert.time));
    }
    lines.push(String::new());
    lines.push("クイックアクション".to_string());
    for action in dashboard::QUICK_ACTIONS {
        lines.push(format!("  {} → {}", action.title, action.target));
    }
}

fn disease_text(lines: &mut Vec<String>) {
    lines.push("画像を解析するには `agri-assist scan <IMAGE>` を実行してください".to_string());
    lines.push(String::new());
    lines.push("最近のスキャン".to_string());
    for scan in disease::RECENT_SCANS {
        lines.push(format!("  {:<16} {:>3}%", scan.disease, scan.confidence));
    }
}

fn soil_text(lines: &mut Vec<String>, options: &ScreenOptions) {
    let field = options.field();
    let profile = soil::SOIL_PROFILES.get(field.id);

    lines.push(format!("{} ({}, {})", field.name, field.area, field.crop));
    for &metric in soil::SoilMetric::RATED.iter() {
        let (min, max) = metric.optimal_range();
        lines.push(format!(
            "  {:<12} {:>6} [{}]  適正 {}-{}",
            metric.label(),
            profile.value(metric),
            profile.rating(metric).as_str(),
            min,
            max
        ));
    }
    lines.push(format!(
        "  有機物 {}%  水分 {}%  地温 {}°C  EC {} dS/m",
        profile.organic_matter, profile.moisture, profile.temperature, profile.conductivity
    ));
    lines.push(String::new());
    lines.push("推奨事項".to_string());
    bullets(lines, profile.recommendations);
    lines.push(String::new());
    lines.push("推奨アクション".to_string());
    for (i, action) in profile.actions.iter().enumerate() {
        lines.push(format!("  [{}] {}", soil::action_priority(i), action));
    }
}

fn weather_text(lines: &mut Vec<String>, options: &ScreenOptions) {
    let now = weather::CURRENT;
    lines.push(format!(
        "現在 {}°C {}  湿度 {}%  風速 {} km/h  UV {}  気圧 {} hPa",
        now.temperature, now.condition, now.humidity, now.wind_speed, now.uv_index, now.pressure
    ));
    lines.push(String::new());
    lines.push("5日間予報".to_string());
    for day in weather::FORECAST {
        lines.push(format!(
            "  {:<10} {:>3}°/{:>3}°  {:<14} 降水 {}%",
            day.day, day.high, day.low, day.condition, day.precipitation
        ));
    }
    lines.push(String::new());
    lines.push("気象アラート".to_string());
    for alert in weather::ALERTS {
        lines.push(format!("  [{}] {}", alert.severity.as_str(), alert.message));
    }
    for day in weather::rainy_days(weather::RAIN_LIKELY_PERCENT) {
        lines.push(format!("  降雨予報: {} ({}%)", day.day, day.precipitation));
    }
    let air = weather::AIR_QUALITY;
    lines.push(String::new());
    lines.push(format!("大気質 AQI {} ({})", air.aqi, air.status));
    bullets(lines, weather::AIR_QUALITY_NOTES);
    lines.push(String::new());
    lines.push(format!("気象パターン: {}", options.period(&weather::PERIODS).label));
}

fn crops_text(lines: &mut Vec<String>, options: &ScreenOptions) {
    let season = options.season();
    let farm = crops::FARM;
    lines.push(format!(
        "{} / {} / {} / {}",
        farm.location, farm.soil_type, farm.average_temp, farm.field_size
    ));
    lines.push(format!("季節: {}", season));
    for crop in crops::RECOMMENDATIONS.get(season).iter() {
        lines.push(String::new());
        lines.push(format!(
            "{} 適合度 {}% [{}]",
            crop.name,
            crop.suitability,
            crop.suitability_rating().as_str()
        ));
        lines.push(format!(
            "  収量 {}  期間 {}  水 {}  収益性 {}  難易度 {}",
            crop.expected_yield,
            crop.growth_period,
            crop.water_requirement,
            crop.profitability,
            crop.difficulty
        ));
        bullets(lines, crop.reasons);
    }
    lines.push(String::new());
    lines.push("市場動向".to_string());
    for m in crops::MARKET {
        lines.push(format!("  {}: {} ({})", m.title, m.value, m.note));
    }
}

fn insights_text(lines: &mut Vec<String>, options: &ScreenOptions) {
    for stat in insights::FARM_STATS {
        lines.push(format!("{:<18} {}", stat.label, stat.value));
    }
    let insight = insights::METRICS.get(options.metric());
    lines.push(String::new());
    lines.push(format!(
        "{}: {} ({}) / {}",
        insight.label,
        insight.current,
        insight.change,
        options.period(&insights::PERIODS).label
    ));
    lines.push(format!("  {}", insight.description));
    bullets(lines, insight.recommendations);
    lines.push(String::new());
    lines.push("最近の作業".to_string());
    for a in insights::RECENT_ACTIVITIES {
        lines.push(format!("  {} - {} ({}, {})", a.action, a.crop, a.detail, a.date));
    }
    lines.push(String::new());
    lines.push("実績".to_string());
    for p in insights::recent_performance(3) {
        lines.push(format!(
            "  {}  収量 {}%  水 {}L  売上 ${}",
            p.month, p.crop_yield, p.water, p.revenue
        ));
    }
    lines.push(format!(
        "  最優秀作物 {}  目標達成 {}",
        insights::BEST_PERFORMING,
        insights::TARGET_ACHIEVEMENT
    ));
    lines.push(String::new());
    lines.push("予測".to_string());
    for p in insights::PREDICTIONS {
        lines.push(format!("  {}: {} ({})", p.title, p.value, p.note));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_screen_renders() {
        let options = ScreenOptions::default();
        for screen in Screen::ALL {
            let text = render_text(screen, &options);
            assert!(text.starts_with(&format!("== {} ==", screen.label())));
            let json = render_json(screen, &options).expect("JSON出力失敗");
            assert!(json.contains(&format!("\"screen\": \"{}\"", screen.id())));
        }
    }

    #[test]
    fn test_unknown_field_shows_default_field() {
        let options = ScreenOptions {
            field: Some("field-z".to_string()),
            ..Default::default()
        };
        let text = render_text(Screen::SoilAnalysis, &options);
        assert!(text.contains("Field A - North"));
    }

    #[test]
    fn test_known_field_uses_default_profile() {
        let options = ScreenOptions {
            field: Some("field-c".to_string()),
            ..Default::default()
        };
        let text = render_text(Screen::SoilAnalysis, &options);
        assert!(text.contains("Field C - East"));
        assert!(text.contains("[Low]"));
    }

    #[test]
    fn test_season_and_metric_fallback() {
        let options = ScreenOptions {
            season: Some("monsoon".to_string()),
            metric: Some("profit".to_string()),
            ..Default::default()
        };
        assert!(render_text(Screen::CropRecommendation, &options).contains("季節: spring"));
        assert!(render_text(Screen::DataInsights, &options).contains("Crop Yield: 87%"));
    }

    #[test]
    fn test_winter_keeps_selected_season() {
        let options = ScreenOptions {
            season: Some("winter".to_string()),
            ..Default::default()
        };
        let text = render_text(Screen::CropRecommendation, &options);
        assert!(text.contains("季節: winter"));
        assert!(text.contains("Tomatoes"));
    }

    #[test]
    fn test_weather_lists_rainy_days() {
        let text = render_text(Screen::Weather, &ScreenOptions::default());
        assert!(text.contains("降雨予報: Wednesday (80%)"));
        assert!(!text.contains("降雨予報: Thursday"));
    }

    #[test]
    fn test_json_keys() {
        let json =
            render_json(Screen::DataInsights, &ScreenOptions::default()).expect("JSON出力失敗");
        let value: Value = serde_json::from_str(&json).expect("パース失敗");
        assert_eq!(value["data"]["metric"], "yield");
        assert_eq!(value["data"]["period"]["id"], "6months");
        assert_eq!(value["data"]["performance"][0]["yield"], 89);
    }
}
