//! Core library for the `bite` CLI.
//!
//! This crate defines:
//! - The scoring pipeline: hourly forecast → day periods → bite score and advice
//! - Lunar phase classification
//! - Configuration & credentials handling
//! - The forecast provider abstraction and its WeatherAPI.com implementation
//!
//! It is used by `bite-cli`, but the pipeline in [`summary`] is pure and can be
//! driven by any source of [`MultiDayForecast`] data.

pub mod advice;
pub mod aggregate;
pub mod config;
pub mod date;
pub mod error;
pub mod model;
pub mod moon;
pub mod provider;
pub mod score;
pub mod summary;

pub use advice::{AdviceTier, advice_for};
pub use aggregate::{PeriodAggregate, PeriodAggregates, aggregate};
pub use config::{AdviceConfig, Config, ProviderConfig};
pub use error::{Error, Result};
pub use model::{
    AdviceRecord, DailySummary, DayForecast, ForecastRequest, HourlyObservation, MoonPhase,
    MultiDayForecast, Period,
};
pub use provider::{ForecastProvider, provider_from_config};
pub use summary::{MoonDate, SummaryOptions, build_summary, build_summary_with};
