use bite_core::provider::weatherapi::WeatherApiProvider;
use bite_core::{Error, ForecastProvider, ForecastRequest, Period, build_summary};
use chrono::NaiveDate;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn hours(date: &str, temp_c: f64) -> Vec<serde_json::Value> {
    (0..24)
        .map(|h| {
            serde_json::json!({
                "time_epoch": 1_759_093_200 + h * 3600,
                "time": format!("{date} {h:02}:00"),
                "temp_c": temp_c,
                "wind_kph": 7.2,
                "precip_mm": 0.0,
                "humidity": 60,
                "pressure_mb": 1013.0,
                "condition": {"text": "Clear"}
            })
        })
        .collect()
}

fn forecast_body() -> serde_json::Value {
    serde_json::json!({
        "location": {"name": "Moscow", "country": "Russia", "localtime_epoch": 1_759_093_200},
        "current": {"temp_c": 12.0},
        "forecast": {
            "forecastday": [
                {"date": "2025-09-29", "hour": hours("2025-09-29", 18.0)},
                {"date": "2025-09-30", "hour": hours("2025-09-30", 12.0)}
            ]
        }
    })
}

#[tokio::test]
async fn fetches_and_converts_forecast() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast.json"))
        .and(query_param("key", "KEY"))
        .and(query_param("q", "Moscow"))
        .and(query_param("days", "14"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body()))
        .mount(&server)
        .await;

    let provider = WeatherApiProvider::new("KEY".into()).with_base_url(&server.uri());
    let forecast = provider.fetch_forecast(&ForecastRequest::new("Moscow")).await.expect("forecast");

    assert_eq!(forecast.location(), Some("Moscow, Russia"));
    assert_eq!(forecast.days().len(), 2);
    assert_eq!(forecast.first_day().date, NaiveDate::from_ymd_opt(2025, 9, 29).unwrap());
    assert_eq!(forecast.first_day().hours.len(), 24);
}

#[tokio::test]
async fn sends_language_when_configured() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast.json"))
        .and(query_param("lang", "ru"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body()))
        .mount(&server)
        .await;

    let provider =
        WeatherApiProvider::new("KEY".into()).with_base_url(&server.uri()).with_lang("ru");
    assert!(provider.fetch_forecast(&ForecastRequest::new("Moscow")).await.is_ok());
}

#[tokio::test]
async fn forecast_feeds_summary() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body()))
        .mount(&server)
        .await;

    let provider = WeatherApiProvider::new("KEY".into()).with_base_url(&server.uri());
    let forecast = provider.fetch_forecast(&ForecastRequest::new("Moscow")).await.unwrap();

    let target = NaiveDate::from_ymd_opt(2025, 9, 30).unwrap();
    let summary = build_summary(&forecast, target, "Moscow").expect("summary");

    assert_eq!(summary.forecast_date, target);
    assert_eq!(summary.records.len(), 4);
    assert_eq!(summary.records[0].period, Period::Morning);
    assert_eq!(summary.records[0].temp, "12.0°C");
    assert_eq!(summary.records[0].humidity, "60%");
}

#[tokio::test]
async fn invalid_key_is_auth_failure() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast.json"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "error": {"code": 2006, "message": "API key is invalid."}
        })))
        .mount(&server)
        .await;

    let provider = WeatherApiProvider::new("BAD".into()).with_base_url(&server.uri());
    let err = provider.fetch_forecast(&ForecastRequest::new("Moscow")).await.unwrap_err();

    assert!(err.is_provider());
    match err {
        Error::ProviderAuth { status, message } => {
            assert_eq!(status, 401);
            assert_eq!(message, "API key is invalid.");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn server_error_is_provider_failure() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast.json"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream down"))
        .mount(&server)
        .await;

    let provider = WeatherApiProvider::new("KEY".into()).with_base_url(&server.uri());
    let err = provider.fetch_forecast(&ForecastRequest::new("Moscow")).await.unwrap_err();

    assert!(
        matches!(err, Error::Provider { status: 500, ref message } if message == "upstream down")
    );
}

#[tokio::test]
async fn empty_forecastday_list_is_rejected() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "location": {"name": "Moscow", "country": "Russia"},
            "forecast": {"forecastday": []}
        })))
        .mount(&server)
        .await;

    let provider = WeatherApiProvider::new("KEY".into()).with_base_url(&server.uri());
    let err = provider.fetch_forecast(&ForecastRequest::new("Moscow")).await.unwrap_err();

    assert!(err.is_provider());
    assert!(matches!(err, Error::MalformedResponse(ref msg) if msg.contains("no days")));
}

#[tokio::test]
async fn garbage_body_is_malformed_response() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let provider = WeatherApiProvider::new("KEY".into()).with_base_url(&server.uri());
    let err = provider.fetch_forecast(&ForecastRequest::new("Moscow")).await.unwrap_err();

    assert!(matches!(err, Error::MalformedResponse(_)));
}
