use chrono::{NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default number of forecast days requested from the provider.
pub const DEFAULT_FORECAST_DAYS: u8 = 14;

pub const DEFAULT_CITY: &str = "Moscow";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

#[derive(Debug, Clone)]
pub struct ForecastRequest {
    pub city: String,
    pub days: u8,
}

impl ForecastRequest {
    pub fn new(city: impl Into<String>) -> Self {
        Self { city: city.into(), days: DEFAULT_FORECAST_DAYS }
    }
}

/// One hour of forecast data, as reported by the provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyObservation {
    /// Local timestamp, `YYYY-MM-DD HH:MM`.
    pub time: String,
    pub temperature_c: f64,
    pub wind_kph: f64,
    pub precipitation_mm: f64,
    pub humidity_pct: f64,
    pub pressure_hpa: f64,
}

impl HourlyObservation {
    /// Hour of day parsed from the timestamp, `None` when it is malformed.
    pub fn hour(&self) -> Option<u32> {
        NaiveDateTime::parse_from_str(self.time.trim(), TIMESTAMP_FORMAT)
            .ok()
            .map(|dt| dt.hour())
    }

    pub fn wind_mps(&self) -> f64 {
        self.wind_kph / 3.6
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayForecast {
    pub date: NaiveDate,
    pub hours: Vec<HourlyObservation>,
}

/// Consecutive days of hourly forecast. Never empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MultiDayForecast {
    location: Option<String>,
    days: Vec<DayForecast>,
}

impl MultiDayForecast {
    pub fn new(days: Vec<DayForecast>) -> Result<Self> {
        if days.is_empty() {
            return Err(Error::EmptyForecast);
        }
        Ok(Self { location: None, days })
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn days(&self) -> &[DayForecast] {
        &self.days
    }

    pub fn day(&self, date: NaiveDate) -> Option<&DayForecast> {
        self.days.iter().find(|d| d.date == date)
    }

    /// The earliest day, used when a requested date is not covered.
    pub fn first_day(&self) -> &DayForecast {
        &self.days[0]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Period {
    Morning,
    Day,
    Evening,
    Night,
}

impl Period {
    /// Display order.
    pub const ALL: [Period; 4] = [Period::Morning, Period::Day, Period::Evening, Period::Night];

    pub fn from_hour(hour: u32) -> Option<Period> {
        match hour {
            6..=11 => Some(Period::Morning),
            12..=17 => Some(Period::Day),
            18..=23 => Some(Period::Evening),
            0..=5 => Some(Period::Night),
            _ => None,
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn label(&self) -> &'static str {
        match self {
            Period::Morning => "🌅 Morning (6:00–12:00)",
            Period::Day => "☀ Day (12:00–18:00)",
            Period::Evening => "🌇 Evening (18:00–24:00)",
            Period::Night => "🌙 Night (0:00–6:00)",
        }
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoonPhase {
    NewMoon,
    WaxingMoon,
    FullMoon,
    WaningMoon,
}

impl MoonPhase {
    pub fn label(&self) -> &'static str {
        match self {
            MoonPhase::NewMoon => "🌑 New Moon",
            MoonPhase::WaxingMoon => "🌒 Waxing Moon",
            MoonPhase::FullMoon => "🌕 Full Moon",
            MoonPhase::WaningMoon => "🌖 Waning Moon",
        }
    }
}

impl std::fmt::Display for MoonPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Scored conditions for one period of the day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdviceRecord {
    pub period: Period,
    pub moon_phase: MoonPhase,
    pub temp: String,
    pub wind: String,
    pub rain: String,
    pub humidity: String,
    pub pressure: String,
    pub pressure_mmhg: f64,
    pub score: u8,
    pub advice: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySummary {
    pub city: String,
    /// Date the advice was requested for.
    pub date: NaiveDate,
    /// Date of the forecast day the periods were computed from.
    pub forecast_date: NaiveDate,
    pub records: Vec<AdviceRecord>,
    pub avg_score: f64,
    pub summary_advice: String,
}

impl DailySummary {
    pub fn is_fallback(&self) -> bool {
        self.date != self.forecast_date
    }
}
