use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::debug;

use crate::{
    error::{Error, Result},
    model::{DayForecast, ForecastRequest, HourlyObservation, MultiDayForecast},
};

use super::ForecastProvider;

pub const DEFAULT_BASE_URL: &str = "http://api.weatherapi.com";

#[derive(Debug, Clone)]
pub struct WeatherApiProvider {
    api_key: String,
    base_url: String,
    lang: Option<String>,
    http: Client,
}

impl WeatherApiProvider {
    pub fn new(api_key: String) -> Self {
        Self { api_key, base_url: DEFAULT_BASE_URL.to_string(), lang: None, http: Client::new() }
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_lang(mut self, lang: &str) -> Self {
        self.lang = Some(lang.to_string());
        self
    }

    async fn fetch(&self, request: &ForecastRequest) -> Result<MultiDayForecast> {
        let url = format!("{}/v1/forecast.json", self.base_url);
        let days = request.days.to_string();

        let mut query = vec![
            ("key", self.api_key.as_str()),
            ("q", request.city.as_str()),
            ("days", days.as_str()),
        ];
        if let Some(lang) = &self.lang {
            query.push(("lang", lang.as_str()));
        }

        debug!(city = %request.city, days = request.days, "requesting WeatherAPI forecast");
        let res = self.http.get(&url).query(&query).send().await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(status_error(status, &body));
        }

        let parsed: WaForecastResponse = serde_json::from_str(&body)
            .map_err(|e| Error::MalformedResponse(format!("forecast JSON: {e}")))?;

        if parsed.forecast.forecastday.is_empty() {
            return Err(Error::MalformedResponse("forecast has no days".to_string()));
        }

        let days = parsed
            .forecast
            .forecastday
            .into_iter()
            .map(WaForecastDay::into_day)
            .collect::<Result<Vec<_>>>()?;

        let location = format!("{}, {}", parsed.location.name, parsed.location.country);
        Ok(MultiDayForecast::new(days)?.with_location(location))
    }
}

fn status_error(status: StatusCode, body: &str) -> Error {
    let message = serde_json::from_str::<WaErrorResponse>(body)
        .map(|e| e.error.message)
        .unwrap_or_else(|_| truncate_body(body));

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            Error::ProviderAuth { status: status.as_u16(), message }
        }
        _ => Error::Provider { status: status.as_u16(), message },
    }
}

#[derive(Debug, Deserialize)]
struct WaLocation {
    name: String,
    country: String,
}

#[derive(Debug, Deserialize)]
struct WaForecastHour {
    time: String,
    temp_c: f64,
    wind_kph: f64,
    precip_mm: f64,
    humidity: f64,
    pressure_mb: f64,
}

#[derive(Debug, Deserialize)]
struct WaForecastDay {
    date: String,
    hour: Vec<WaForecastHour>,
}

impl WaForecastDay {
    fn into_day(self) -> Result<DayForecast> {
        let date = NaiveDate::parse_from_str(&self.date, "%Y-%m-%d")
            .map_err(|e| Error::MalformedResponse(format!("forecast date '{}': {e}", self.date)))?;

        let hours = self
            .hour
            .into_iter()
            .map(|h| HourlyObservation {
                time: h.time,
                temperature_c: h.temp_c,
                wind_kph: h.wind_kph,
                precipitation_mm: h.precip_mm,
                humidity_pct: h.humidity,
                pressure_hpa: h.pressure_mb,
            })
            .collect();

        Ok(DayForecast { date, hours })
    }
}

#[derive(Debug, Deserialize)]
struct WaForecast {
    forecastday: Vec<WaForecastDay>,
}

#[derive(Debug, Deserialize)]
struct WaForecastResponse {
    location: WaLocation,
    forecast: WaForecast,
}

#[derive(Debug, Deserialize)]
struct WaErrorBody {
    message: String,
}

#[derive(Debug, Deserialize)]
struct WaErrorResponse {
    error: WaErrorBody,
}

#[async_trait]
impl ForecastProvider for WeatherApiProvider {
    async fn fetch_forecast(&self, request: &ForecastRequest) -> Result<MultiDayForecast> {
        self.fetch(request).await
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() <= MAX {
        return body.to_string();
    }
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}
