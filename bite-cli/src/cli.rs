use anyhow::Context;
use bite_core::{
    Config, ForecastRequest, build_summary_with,
    date::{parse_date, resolve_target_date},
    model::DEFAULT_FORECAST_DAYS,
    moon,
    provider::provider_from_config,
};
use chrono::Local;
use clap::{Parser, Subcommand};
use inquire::{Password, PasswordDisplayMode, Text};
use tracing::debug;

use crate::output;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "bite", version, about = "Fishing bite forecast")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the WeatherAPI.com key and defaults.
    Configure,

    /// Show the bite forecast for a city and date.
    Show {
        /// City or location name; defaults to the configured city.
        city: Option<String>,

        /// Date as YYYY-MM-DD; defaults to today.
        #[arg(long)]
        date: Option<String>,

        /// Print the summary as JSON.
        #[arg(long)]
        json: bool,

        /// WeatherAPI.com key, overrides the stored one.
        #[arg(long, env = "WEATHERAPI_KEY", hide_env_values = true)]
        api_key: Option<String>,
    },

    /// Show the moon phase for a date.
    Moon {
        /// Date as YYYY-MM-DD; defaults to today.
        #[arg(long)]
        date: Option<String>,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { city, date, json, api_key } => show(city, date, json, api_key).await,
            Command::Moon { date } => {
                let today = Local::now().date_naive();
                let date = match date {
                    Some(raw) => parse_date(&raw)?,
                    None => today,
                };
                let pct = moon::illumination(date) * 100.0;
                println!("{date}: {} ({pct:.0}% illuminated)", moon::classify(date));
                Ok(())
            }
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = Password::new("WeatherAPI.com API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    let city = Text::new("Default city:")
        .with_default(config.default_city())
        .prompt()
        .context("Failed to read default city")?;

    config.set_api_key(api_key.trim().to_string());
    config.advice.default_city = Some(city.trim().to_string());
    config.save()?;

    println!("Saved configuration to {}", Config::config_file_path()?.display());
    Ok(())
}

async fn show(
    city: Option<String>,
    date: Option<String>,
    json: bool,
    api_key: Option<String>,
) -> anyhow::Result<()> {
    let mut config = Config::load()?;
    if let Some(key) = api_key {
        config.set_api_key(key);
    }

    let city = city.unwrap_or_else(|| config.default_city().to_string());
    let today = Local::now().date_naive();
    let target = resolve_target_date(date.as_deref(), today, config.horizon_days());

    let provider = provider_from_config(&config)?;
    let request = ForecastRequest { city: city.clone(), days: DEFAULT_FORECAST_DAYS };
    debug!(%city, %target, "fetching forecast");
    let forecast = provider
        .fetch_forecast(&request)
        .await
        .with_context(|| format!("Failed to fetch forecast for {city}"))?;
    debug!(days = forecast.days().len(), location = ?forecast.location(), "forecast received");

    let summary = build_summary_with(&forecast, target, &city, &config.summary_options())
        .with_context(|| format!("Failed to build bite forecast for {city} on {target}"))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        let mut text = String::new();
        output::render(&mut text, &summary, forecast.location())?;
        print!("{text}");
    }

    Ok(())
}
