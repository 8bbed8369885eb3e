use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::client::{DEFAULT_TIMEOUT_SECS, DEFAULT_TIMEZONE};
use crate::error::Error;

/// Input for a single forecast call. Built once, never mutated;
/// each request is independent of every other.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherRequest {
    pub latitude: f64,
    pub longitude: f64,
    pub timezone: String,
    pub include_current: bool,
    pub timeout_seconds: u64,
}

impl WeatherRequest {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            timezone: DEFAULT_TIMEZONE.to_string(),
            include_current: true,
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
        }
    }

    pub fn with_timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = timezone.into();
        self
    }

    pub fn with_current(mut self, include_current: bool) -> Self {
        self.include_current = include_current;
        self
    }

    pub fn with_timeout(mut self, timeout_seconds: u64) -> Self {
        self.timeout_seconds = timeout_seconds;
        self
    }

    /// Pure range check; the client runs this before touching the network.
    pub fn validate(&self) -> Result<(), Error> {
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(Error::InvalidInput(format!(
                "latitude out of range (-90..90): {}",
                self.latitude
            )));
        }

        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(Error::InvalidInput(format!(
                "longitude out of range (-180..180): {}",
                self.longitude
            )));
        }

        if self.timeout_seconds == 0 {
            return Err(Error::InvalidInput(format!(
                "timeout must be > 0 seconds: {}",
                self.timeout_seconds
            )));
        }

        Ok(())
    }
}

/// The parsed forecast payload, kept as an opaque JSON object.
/// The provider defines the fields; the only shape this crate cares
/// about is the `current_weather` sub-object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeatherResponse(Map<String, Value>);

impl WeatherResponse {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Extract the `current_weather` block unchanged.
    pub fn current_weather(&self) -> Result<&Map<String, Value>, Error> {
        match self.0.get("current_weather") {
            Some(Value::Object(block)) => Ok(block),
            _ => Err(Error::ResponseContract(
                "'current_weather' is missing or not an object".to_string(),
            )),
        }
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for WeatherResponse {
    fn from(payload: Map<String, Value>) -> Self {
        Self(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn response(value: Value) -> WeatherResponse {
        serde_json::from_value(value).expect("payload must be a JSON object")
    }

    #[test]
    fn new_request_uses_defaults() {
        let req = WeatherRequest::new(40.7, -74.0);

        assert_eq!(req.timezone, DEFAULT_TIMEZONE);
        assert!(req.include_current);
        assert_eq!(req.timeout_seconds, DEFAULT_TIMEOUT_SECS);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn latitude_out_of_range_is_rejected() {
        for lat in [-90.001, 91.0, f64::INFINITY, f64::NAN] {
            let err = WeatherRequest::new(lat, 0.0).validate().unwrap_err();
            assert!(err.is_invalid_input(), "latitude {lat} must be rejected");
            assert!(err.to_string().contains("latitude out of range"));
        }
    }

    #[test]
    fn longitude_out_of_range_is_rejected() {
        for lon in [-180.5, 180.001, f64::NEG_INFINITY] {
            let err = WeatherRequest::new(0.0, lon).validate().unwrap_err();
            assert!(err.is_invalid_input(), "longitude {lon} must be rejected");
            assert!(err.to_string().contains("longitude out of range"));
        }
    }

    #[test]
    fn boundary_coordinates_are_accepted() {
        assert!(WeatherRequest::new(90.0, 180.0).validate().is_ok());
        assert!(WeatherRequest::new(-90.0, -180.0).validate().is_ok());
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let err = WeatherRequest::new(0.0, 0.0)
            .with_timeout(0)
            .validate()
            .unwrap_err();

        assert!(err.is_invalid_input());
        assert!(err.to_string().contains("timeout must be > 0"));
    }

    #[test]
    fn current_weather_extraction() {
        let resp = response(json!({
            "latitude": 40.7,
            "current_weather": { "temperature": 20 }
        }));

        let block = resp.current_weather().expect("block must be present");
        assert_eq!(block.get("temperature"), Some(&json!(20)));
    }

    #[test]
    fn missing_current_weather_is_a_contract_error() {
        let resp = response(json!({ "latitude": 40.7 }));

        let err = resp.current_weather().unwrap_err();
        assert!(err.is_response_contract());
    }

    #[test]
    fn non_object_current_weather_is_a_contract_error() {
        let resp = response(json!({ "current_weather": "sunny" }));

        let err = resp.current_weather().unwrap_err();
        assert!(err.is_response_contract());
        assert!(err.to_string().contains("missing or not an object"));
    }
}
