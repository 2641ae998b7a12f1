use chrono::{Days, NaiveDate};
use tracing::warn;

use crate::error::{Error, Result};

/// How far ahead a date may be requested, in days from today.
pub const DEFAULT_HORIZON_DAYS: u64 = 14;

pub fn parse_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|source| Error::InvalidDate { input: input.to_string(), source })
}

/// Pulls `date` into `[today, today + horizon_days]`.
pub fn clamp_date(date: NaiveDate, today: NaiveDate, horizon_days: u64) -> NaiveDate {
    let max = today.checked_add_days(Days::new(horizon_days)).unwrap_or(NaiveDate::MAX);
    date.clamp(today, max)
}

/// Date the advice is built for.
///
/// No input means today. Input that does not parse also falls back to today,
/// with a warning; everything else is clamped to the forecast horizon.
pub fn resolve_target_date(input: Option<&str>, today: NaiveDate, horizon_days: u64) -> NaiveDate {
    let Some(raw) = input.filter(|s| !s.trim().is_empty()) else {
        return today;
    };

    match parse_date(raw) {
        Ok(date) => clamp_date(date, today, horizon_days),
        Err(err) => {
            warn!(error = %err, "using today's date instead");
            today
        }
    }
}
