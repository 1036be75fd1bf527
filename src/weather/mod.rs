pub mod models;

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use crate::errors::ApiError;
use crate::manager_visual_crossing::models::DayRecord;
use crate::weather::models::{WeatherEnvelope, WeatherRequest, WeatherResponse};

pub const TOKEN_FIELD: &str = "token";
pub const REQUESTER_NAME_FIELD: &str = "requester_name";
pub const LOCATION_FIELD: &str = "location";
pub const DATE_FIELD: &str = "date";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Parses a raw request body into a json object
///
/// # Arguments
///
/// * 'body' - the request body as received
pub fn parse_body(body: &[u8]) -> Result<Map<String, Value>, ApiError> {
    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(map)) => Ok(map),
        _ => Err(ApiError::MalformedRequest),
    }
}

/// Checks the client token against the configured one.
/// A missing token (or json null) is a client error, any other mismatch is forbidden.
///
/// # Arguments
///
/// * 'body' - the parsed request body
/// * 'expected' - the shared secret clients must present
pub fn validate_token(body: &Map<String, Value>, expected: &str) -> Result<(), ApiError> {
    match body.get(TOKEN_FIELD) {
        None | Some(Value::Null) => Err(ApiError::MissingField(TOKEN_FIELD.to_string())),
        Some(Value::String(token)) if token == expected => Ok(()),
        Some(_) => Err(ApiError::Forbidden),
    }
}

/// Returns the string value of a required field.
/// The value must be a string that is not empty after trimming, it is returned untrimmed.
///
/// # Arguments
///
/// * 'body' - the parsed request body
/// * 'field' - name of the field
pub fn extract_string(body: &Map<String, Value>, field: &str) -> Result<String, ApiError> {
    match body.get(field) {
        Some(Value::String(value)) if !value.trim().is_empty() => Ok(value.clone()),
        _ => Err(ApiError::MissingOrEmptyField(field.to_string())),
    }
}

impl WeatherRequest {
    /// Validates a request body, the first violation found is returned
    ///
    /// # Arguments
    ///
    /// * 'body' - the parsed request body
    /// * 'expected_token' - the shared secret clients must present
    pub fn from_body(body: &Map<String, Value>, expected_token: &str) -> Result<WeatherRequest, ApiError> {
        validate_token(body, expected_token)?;

        Ok(WeatherRequest {
            requester_name: extract_string(body, REQUESTER_NAME_FIELD)?,
            location: extract_string(body, LOCATION_FIELD)?,
            date: extract_string(body, DATE_FIELD)?,
        })
    }
}

/// Maps a provider day record to the service's weather response.
/// Attributes missing from the record end up as null.
///
/// # Arguments
///
/// * 'day' - day record as returned by the provider
pub fn build_weather_response(day: &DayRecord) -> WeatherResponse {
    let get = |key: &str| day.get(key).filter(|v| !v.is_null()).cloned();

    WeatherResponse {
        description: get("description"),
        conditions: get("conditions"),
        average_temperature_c: get("temp"),
        average_temperature_feels_like_c: get("feelslike"),
        max_temperature_c: get("tempmax"),
        max_temperature_feels_like_c: get("feelslikemax"),
        min_temperature_c: get("tempmin"),
        min_temperature_feels_like_c: get("feelslikemin"),
        pressure_mb: get("pressure"),
        humidity_p: get("humidity"),
        cloud_coverage_p: get("cloudcover"),
        wind_speed_kph: get("windspeed"),
        sunrise_time: get("sunrise"),
        sunset_time: get("sunset"),
    }
}

pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Current UTC time with second precision, e.g. 2024-01-31T12:00:05Z
pub fn current_timestamp() -> String {
    format_timestamp(Utc::now())
}

impl WeatherEnvelope {
    pub fn new(request: WeatherRequest, day: &DayRecord) -> WeatherEnvelope {
        WeatherEnvelope {
            requester_name: request.requester_name,
            location: request.location,
            date: request.date,
            timestamp: current_timestamp(),
            weather: build_weather_response(day),
        }
    }
}
