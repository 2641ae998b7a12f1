use crate::{
    Config,
    error::Result,
    model::{ForecastRequest, MultiDayForecast},
    provider::weatherapi::WeatherApiProvider,
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod weatherapi;

/// Source of hourly multi-day forecasts.
#[async_trait]
pub trait ForecastProvider: Send + Sync + Debug {
    async fn fetch_forecast(&self, request: &ForecastRequest) -> Result<MultiDayForecast>;
}

/// Construct the forecast provider from config.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Box<dyn ForecastProvider>> {
    let api_key = config.api_key().ok_or_else(|| {
        anyhow::anyhow!(
            "No API key configured for WeatherAPI.com.\n\
                 Hint: run `bite configure` and enter your API key."
        )
    })?;

    let mut provider = WeatherApiProvider::new(api_key.to_owned());
    if let Some(settings) = &config.weatherapi {
        if let Some(base_url) = &settings.base_url {
            provider = provider.with_base_url(base_url);
        }
        if let Some(lang) = &settings.lang {
            provider = provider.with_lang(lang);
        }
    }

    Ok(Box::new(provider))
}
