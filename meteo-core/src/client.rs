use std::time::Duration;

use reqwest::Client;

use crate::error::Error;
use crate::model::{WeatherRequest, WeatherResponse};

/// Open-Meteo forecast endpoint. Requires no API key.
pub const FORECAST_ENDPOINT: &str = "https://api.open-meteo.com/v1/forecast";

/// IANA zone used when the caller does not pick one.
pub const DEFAULT_TIMEZONE: &str = "America/New_York";

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client for the forecast endpoint.
///
/// Holds no per-request state; a single instance can be shared freely
/// across tasks. One `fetch` is one GET, bounded by the request timeout.
/// There are no retries and no caching.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    http: Client,
    endpoint: String,
}

impl WeatherClient {
    pub fn new() -> Self {
        Self::with_endpoint(FORECAST_ENDPOINT)
    }

    /// Point the client at an alternative endpoint, e.g. a mock server.
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch the forecast for a single request.
    ///
    /// Validates the request first; an invalid request never reaches the
    /// network. When `include_current` is set the response must carry a
    /// `current_weather` key, otherwise the payload is returned as-is.
    pub async fn fetch(&self, request: &WeatherRequest) -> Result<WeatherResponse, Error> {
        request.validate()?;

        let mut params: Vec<(&str, String)> = vec![
            ("latitude", request.latitude.to_string()),
            ("longitude", request.longitude.to_string()),
            ("timezone", request.timezone.clone()),
        ];
        if request.include_current {
            params.push(("current_weather", "true".to_string()));
        }

        let res = self
            .http
            .get(&self.endpoint)
            .query(&params)
            .timeout(Duration::from_secs(request.timeout_seconds))
            .send()
            .await?
            .error_for_status()?;

        let body = res.text().await?;

        let payload: WeatherResponse = serde_json::from_str(&body)
            .map_err(|e| Error::ResponseContract(format!("body is not a JSON object: {e}")))?;

        if request.include_current && !payload.contains_key("current_weather") {
            return Err(Error::ResponseContract(
                "response missing 'current_weather' field".to_string(),
            ));
        }

        Ok(payload)
    }
}

impl Default for WeatherClient {
    fn default() -> Self {
        Self::new()
    }
}
