use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

use crate::{
    date::DEFAULT_HORIZON_DAYS,
    model::DEFAULT_CITY,
    summary::{MoonDate, SummaryOptions},
};

/// WeatherAPI.com credentials and request settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    pub api_key: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Language code for condition text, e.g. "ru".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AdviceConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_city: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub horizon_days: Option<u64>,

    #[serde(default)]
    pub moon_date: MoonDate,
}

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// [weatherapi]
/// api_key = "..."
///
/// [advice]
/// default_city = "Moscow"
/// moon_date = "requested"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weatherapi: Option<ProviderConfig>,

    #[serde(default)]
    pub advice: AdviceConfig,
}

impl Config {
    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "bite-forecast", "bite")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Set or replace the API key, keeping other provider settings.
    pub fn set_api_key(&mut self, api_key: String) {
        self.weatherapi
            .get_or_insert_with(|| ProviderConfig {
                api_key: String::new(),
                base_url: None,
                lang: None,
            })
            .api_key = api_key;
    }

    pub fn api_key(&self) -> Option<&str> {
        self.weatherapi.as_ref().map(|p| p.api_key.as_str()).filter(|k| !k.is_empty())
    }

    pub fn default_city(&self) -> &str {
        self.advice.default_city.as_deref().unwrap_or(DEFAULT_CITY)
    }

    pub fn horizon_days(&self) -> u64 {
        self.advice.horizon_days.unwrap_or(DEFAULT_HORIZON_DAYS)
    }

    pub fn summary_options(&self) -> SummaryOptions {
        SummaryOptions { moon_date: self.advice.moon_date }
    }
}
