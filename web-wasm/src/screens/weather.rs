//! 気象モニタリング画面

use agri_assist_common::catalog::weather::{
    rainy_days, Sky, AIR_QUALITY, AIR_QUALITY_NOTES, ALERTS, CURRENT, DEFAULT_PERIOD, FORECAST,
    PERIODS, RAIN_LIKELY_PERCENT,
};
use leptos::prelude::*;

use crate::components::header::PageHeader;

fn sky_icon(sky: Sky) -> &'static str {
    match sky {
        Sky::Sunny => "☀️",
        Sky::Cloudy => "⛅",
        Sky::Rain => "🌧️",
    }
}

#[component]
pub fn Weather() -> impl IntoView {
    let (period, set_period) = signal::<&'static str>(DEFAULT_PERIOD);

    let readings = [
        ("Humidity", format!("{}%", CURRENT.humidity)),
        ("Wind Speed", format!("{} km/h", CURRENT.wind_speed)),
        ("Precipitation", format!("{}%", CURRENT.precipitation)),
        ("Visibility", format!("{} km", CURRENT.visibility)),
        ("UV Index", CURRENT.uv_index.to_string()),
        ("Pressure", format!("{} hPa", CURRENT.pressure)),
    ]
    .into_iter()
    .map(|(label, value)| view! {
        <div class="reading">
            <p class="text-muted text-small">{label}</p>
            <p class="row-title">{value}</p>
        </div>
    })
    .collect_view();

    let forecast = FORECAST
        .iter()
        .map(|day| view! {
            <div class="forecast-day">
                <p class="row-title">{day.day}</p>
                <div class="forecast-icon">{sky_icon(day.sky)}</div>
                <p class="text-small">{day.condition}</p>
                <p>{format!("{}° / {}°", day.high, day.low)}</p>
                <p class="text-muted text-small">{format!("💧 {}%", day.precipitation)}</p>
            </div>
        })
        .collect_view();

    let alerts = ALERTS
        .iter()
        .map(|alert| view! {
            <div class=format!("list-row weather-alert {}", alert.severity.css_class())>
                <p>{alert.message}</p>
                <span class="text-small">{format!("{} priority", alert.severity.as_str())}</span>
            </div>
        })
        .collect_view();

    let rain_days = rainy_days(RAIN_LIKELY_PERCENT)
        .map(|day| view! {
            <p class="text-small">{format!("🌧️ Rain likely {} ({}%)", day.day, day.precipitation)}</p>
        })
        .collect_view();

    let pollutants = [
        ("PM2.5", format!("{} μg/m³", AIR_QUALITY.pm25)),
        ("PM10", format!("{} μg/m³", AIR_QUALITY.pm10)),
        ("O₃", format!("{} μg/m³", AIR_QUALITY.o3)),
        ("NO₂", format!("{} μg/m³", AIR_QUALITY.no2)),
        ("CO", format!("{} mg/m³", AIR_QUALITY.co)),
    ]
    .into_iter()
    .map(|(label, value)| view! {
        <div class="list-row row-head">
            <span class="text-muted">{label}</span>
            <span>{value}</span>
        </div>
    })
    .collect_view();

    let notes = AIR_QUALITY_NOTES
        .iter()
        .map(|n| view! { <li>{*n}</li> })
        .collect_view();

    let period_buttons = PERIODS
        .keys()
        .map(|key| {
            let option = PERIODS.get(key);
            view! {
                <button
                    class="toggle-button"
                    class:selected=move || period.get() == option.id
                    on:click=move |_| set_period.set(option.id)
                >
                    {option.label}
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="screen">
            <PageHeader
                title="Weather Monitoring"
                subtitle="Real-time weather data and agricultural forecasts"
                badge="Live Data"
                badge_class="badge-blue"
            />

            <section class="card current-weather">
                <div>
                    <p class="text-muted">"Current Conditions"</p>
                    <p class="temperature">{format!("{}°C", CURRENT.temperature)}</p>
                    <p>{CURRENT.condition}</p>
                </div>
                <div class="grid-3">{readings}</div>
            </section>

            <section class="card">
                <h2>"5-Day Forecast"</h2>
                <div class="grid-5">{forecast}</div>
            </section>

            <div class="grid-2">
                <section class="card">
                    <h2>"Weather Alerts"</h2>
                    {alerts}
                    {rain_days}
                </section>
                <section class="card">
                    <h2>"Air Quality"</h2>
                    <div class="row-head">
                        <span class="stat-value">{AIR_QUALITY.aqi}</span>
                        <span class="status-badge badge-emerald">{AIR_QUALITY.status}</span>
                    </div>
                    {pollutants}
                    <ul class="bullet-list">{notes}</ul>
                </section>
            </div>

            <section class="card">
                <div class="row-head">
                    <h2>"Weather Patterns"</h2>
                    <div class="toggle-group">{period_buttons}</div>
                </div>
                <div class="chart-placeholder">
                    <p class="text-muted">
                        {move || format!("{} weather pattern chart", PERIODS.get(period.get()).label)}
                    </p>
                </div>
            </section>
        </div>
    }
}
