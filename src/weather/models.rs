use serde::Serialize;
use serde_json::Value;

/// A validated weather request, values kept exactly as the client sent them
#[derive(Debug, PartialEq)]
pub struct WeatherRequest {
    pub requester_name: String,
    pub location: String,
    pub date: String,
}

/// Weather for one day in the service's own naming.
///
/// Values are copied from the provider without conversion. Temperatures are in
/// Celsius, humidity and cloud coverage in percent, pressure in millibars, wind speed
/// in km/h and sunrise/sunset in the local time of the requested location.
#[derive(Debug, Serialize)]
pub struct WeatherResponse {
    pub description: Option<Value>,
    pub conditions: Option<Value>,
    pub average_temperature_c: Option<Value>,
    pub average_temperature_feels_like_c: Option<Value>,
    pub max_temperature_c: Option<Value>,
    pub max_temperature_feels_like_c: Option<Value>,
    pub min_temperature_c: Option<Value>,
    pub min_temperature_feels_like_c: Option<Value>,
    pub pressure_mb: Option<Value>,
    pub humidity_p: Option<Value>,
    pub cloud_coverage_p: Option<Value>,
    pub wind_speed_kph: Option<Value>,
    pub sunrise_time: Option<Value>,
    pub sunset_time: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct WeatherEnvelope {
    pub requester_name: String,
    pub location: String,
    pub date: String,
    pub timestamp: String,
    pub weather: WeatherResponse,
}
