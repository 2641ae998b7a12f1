//! Builds the per-period bite advice for one day of a forecast.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    advice::advice_for,
    aggregate::{PeriodAggregate, aggregate},
    error::{Error, Result},
    model::{AdviceRecord, DailySummary, MoonPhase, MultiDayForecast, Period},
    moon, score,
};

/// Which date the moon phase is computed for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoonDate {
    /// The requested date, even when a fallback day is scored.
    #[default]
    Requested,
    /// The date of the forecast day actually scored.
    ForecastDay,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SummaryOptions {
    pub moon_date: MoonDate,
}

pub fn build_summary(
    forecast: &MultiDayForecast,
    target_date: NaiveDate,
    city: &str,
) -> Result<DailySummary> {
    build_summary_with(forecast, target_date, city, &SummaryOptions::default())
}

pub fn build_summary_with(
    forecast: &MultiDayForecast,
    target_date: NaiveDate,
    city: &str,
    options: &SummaryOptions,
) -> Result<DailySummary> {
    let day = match forecast.day(target_date) {
        Some(day) => day,
        None => {
            let first = forecast.first_day();
            info!(requested = %target_date, using = %first.date, "date not in forecast, using first day");
            first
        }
    };

    let moon_phase = match options.moon_date {
        MoonDate::Requested => moon::classify(target_date),
        MoonDate::ForecastDay => moon::classify(day.date),
    };
    debug!(date = %day.date, %moon_phase, "scoring forecast day");

    let records: Vec<AdviceRecord> =
        aggregate(day).iter().map(|(period, agg)| record(period, agg, moon_phase)).collect();

    if records.is_empty() {
        return Err(Error::EmptyForecastDay { date: day.date });
    }

    let avg_score =
        records.iter().map(|r| f64::from(r.score)).sum::<f64>() / records.len() as f64;

    Ok(DailySummary {
        city: city.to_string(),
        date: target_date,
        forecast_date: day.date,
        records,
        avg_score,
        summary_advice: advice_for(avg_score as i64).to_string(),
    })
}

fn record(period: Period, agg: &PeriodAggregate, moon_phase: MoonPhase) -> AdviceRecord {
    let score = score::score(agg, moon_phase);
    AdviceRecord {
        period,
        moon_phase,
        temp: format!("{:.1}°C", agg.temperature_c),
        wind: format!("{:.1} m/s", agg.wind_mps),
        rain: format!("{:.1} mm", agg.precipitation_mm),
        humidity: format!("{:.0}%", agg.humidity_pct),
        pressure: format!("{:.0} mmHg", agg.pressure_mmhg),
        pressure_mmhg: agg.pressure_mmhg,
        score,
        advice: advice_for(i64::from(score)).to_string(),
    }
}
