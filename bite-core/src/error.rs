use chrono::NaiveDate;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("forecast contains no days")]
    EmptyForecast,

    #[error("no usable hourly observations for {date}")]
    EmptyForecastDay { date: NaiveDate },

    #[error("invalid date '{input}', expected YYYY-MM-DD")]
    InvalidDate {
        input: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("weather provider rejected the API key (status {status}): {message}")]
    ProviderAuth { status: u16, message: String },

    #[error("weather provider request failed (status {status}): {message}")]
    Provider { status: u16, message: String },

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("malformed provider response: {0}")]
    MalformedResponse(String),
}

impl Error {
    /// True for failures reported by the upstream weather provider.
    pub fn is_provider(&self) -> bool {
        matches!(
            self,
            Error::ProviderAuth { .. }
                | Error::Provider { .. }
                | Error::Http(_)
                | Error::MalformedResponse(_)
        )
    }
}
