//! Current conditions for a pair of coordinates.

use tracing::{debug, warn};

use crate::{error::FetchError, http::HttpClient, model::WeatherData};

/// Query the forecast endpoint at `api_url` for current weather at (`lat`, `lon`).
///
/// Coordinates are forwarded as-is; the remote service decides what it accepts.
pub async fn fetch_weather_data(
    http: &dyn HttpClient,
    api_url: &str,
    lat: f64,
    lon: f64,
) -> Result<WeatherData, FetchError> {
    debug!(lat, lon, "fetching current weather");

    let params = [
        ("latitude", lat.to_string()),
        ("longitude", lon.to_string()),
        ("current_weather", "true".to_string()),
    ];

    let body = http
        .get(api_url, &params)
        .await
        .inspect_err(|e| warn!(error = %e, "forecast request failed"))?;

    let weather: WeatherData = serde_json::from_str(&body)?;
    Ok(weather)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::HttpError;
    use crate::test_support::StubHttp;

    const FORECAST_URL: &str = "https://forecast.example/v1/forecast";

    const PARIS_FORECAST: &str = r#"{
        "latitude": 48.86,
        "longitude": 2.3399997,
        "current_weather_units": {"time": "iso8601", "temperature": "°C", "windspeed": "km/h"},
        "current_weather": {
            "time": "2024-05-01T12:00",
            "temperature": 18.3,
            "windspeed": 11.2,
            "winddirection": 250,
            "is_day": 1,
            "weathercode": 61
        }
    }"#;

    #[tokio::test]
    async fn sends_coordinates_as_query_parameters() {
        let http = StubHttp::ok(PARIS_FORECAST);

        fetch_weather_data(&http, FORECAST_URL, 48.8566, 2.3522).await.unwrap();

        let calls = http.recorded();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, FORECAST_URL);
        assert_eq!(
            calls[0].1,
            vec![
                ("latitude".to_string(), "48.8566".to_string()),
                ("longitude".to_string(), "2.3522".to_string()),
                ("current_weather".to_string(), "true".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn parses_current_weather() {
        let http = StubHttp::ok(PARIS_FORECAST);

        let weather = fetch_weather_data(&http, FORECAST_URL, 48.8566, 2.3522).await.unwrap();

        assert_eq!(weather.temperature(), 18.3);
        assert_eq!(weather.conditions(), "Slight rain");
        assert!(weather.format().contains("Temperature: 18.3°C"));
    }

    #[tokio::test]
    async fn out_of_range_coordinates_are_passed_through() {
        let http = StubHttp::ok(PARIS_FORECAST);

        fetch_weather_data(&http, FORECAST_URL, 123.0, -500.5).await.unwrap();

        let calls = http.recorded();
        assert_eq!(calls[0].1[0], ("latitude".to_string(), "123".to_string()));
        assert_eq!(calls[0].1[1], ("longitude".to_string(), "-500.5".to_string()));
    }

    #[tokio::test]
    async fn missing_current_weather_is_parse_error() {
        let http = StubHttp::ok(r#"{"error": true, "reason": "Latitude must be in range of -90 to 90°."}"#);

        let err = fetch_weather_data(&http, FORECAST_URL, 123.0, 0.0).await.unwrap_err();

        assert!(matches!(err, FetchError::Parse(_)));
    }

    #[tokio::test]
    async fn http_failure_is_request_error() {
        let http = StubHttp::status(503);

        let err = fetch_weather_data(&http, FORECAST_URL, 0.0, 0.0).await.unwrap_err();

        assert!(matches!(err, FetchError::Request(HttpError::Status { status: 503, .. })));
    }
}
